//! CLI command messaging system
//!
//! Colored one-line status output for the non-interactive commands
//! (`snapshot`, `reset-config`) and for startup failures.

const YELLOW: &str = "\x1b[1;33m";
const LIGHT_RED: &str = "\x1b[1;91m";
const RED: &str = "\x1b[1;31m";
const GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

fn format_tagged(color: &str, tag: &str, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{}[{}]{} {}", color, tag, RESET, title)
    } else {
        format!("{}[{}]{} {}\t {}", color, tag, RESET, title, details)
    }
}

/// Print CLI command info message
pub fn print_info(title: &str, details: &str) {
    println!("{}", format_tagged(YELLOW, "INFO", title, details));
}

/// Print CLI command warn message
pub fn print_warn(title: &str, details: &str) {
    println!("{}", format_tagged(LIGHT_RED, "WARN", title, details));
}

/// Print CLI command error to stderr
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{}", format_tagged(RED, "ERROR", title, ""));
    if let Some(details) = details {
        eprintln!("{}", format_tagged(RED, "ERROR", "Details:", details));
    }
}

/// Print CLI command success
pub fn print_success(title: &str, details: &str) {
    println!("{}", format_tagged(GREEN, "SUCCESS", title, details));
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

/// Macro for CLI errors
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_follow_a_tab() {
        let line = format_tagged(GREEN, "SUCCESS", "Config reset", "/tmp/config.json");
        assert!(line.starts_with(GREEN));
        assert!(line.ends_with("Config reset\t /tmp/config.json"));
    }

    #[test]
    fn empty_details_are_omitted() {
        let line = format_tagged(YELLOW, "INFO", "Nothing to do", "");
        assert!(line.ends_with("[INFO]\x1b[0m Nothing to do"));
    }
}
