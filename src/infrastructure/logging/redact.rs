/// Hide a secret for logging, keeping a short prefix so tokens can still be
/// told apart.
pub fn redact(secret: &str) -> String {
    match secret.get(..4) {
        Some(prefix) if secret.len() > 8 => format!("{prefix}...[REDACTED]"),
        _ => "[REDACTED]".to_string(),
    }
}
