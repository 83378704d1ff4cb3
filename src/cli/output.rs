//! Output formatting utilities for the CLI.

use serde::Serialize;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Commands that succeed silently, like `rm`, print nothing rather than a
    /// blank line.
    fn quiet_when_empty(&self) -> bool {
        false
    }
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
        return;
    }

    let human = result.to_human();
    if human.is_empty() && result.quiet_when_empty() {
        return;
    }
    println!("{human}");
}

/// `'<path>': no such credential or path`
pub fn no_such_credential_or_path(path: &str) -> String {
    format!("'{path}': no such credential or path")
}
