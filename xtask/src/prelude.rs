//! Terminal output helpers for the table and seed commands.
//!
//! `aprintln!` strips the escape codes when stdout is not a terminal.

pub use anstream::println as aprintln;

const RESET: &str = "\x1b[0m";

fn paint(color: &str, text: &str) -> String {
    format!("{color}{text}{RESET}")
}

/// Success messages and tables to create.
pub fn p_g(text: &str) -> String {
    paint("\x1b[32m", text)
}

/// Tables to delete.
pub fn p_r(text: &str) -> String {
    paint("\x1b[31m", text)
}

/// Plan headers for destructive runs.
pub fn p_y(text: &str) -> String {
    paint("\x1b[33m", text)
}

/// Labels and progress lines.
pub fn p_b(text: &str) -> String {
    paint("\x1b[34m", text)
}

/// Plan and listing headers.
pub fn p_c(text: &str) -> String {
    paint("\x1b[36m", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_wraps_and_resets() {
        assert_eq!(p_g("ok"), "\x1b[32mok\x1b[0m");
        assert!(p_r("Delete: trainees_dev").ends_with(RESET));
    }
}
