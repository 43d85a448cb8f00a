//! Synopsys HSPICE dialect.
//!
//! - `.subckt` and instance parameters use the `PARAMS:` keyword.
//! - `.subckt` lines longer than [`MAX_LINE_LEN`] are wrapped with `+ `
//!   continuations. Wrapping is greedy and word-at-a-time; a single token
//!   longer than the budget is kept whole on its own continuation line,
//!   never split mid-token.

use indexmap::IndexMap;

use crate::generator::{SpiceDialect, join_params};

/// Maximum column width before `+` continuation.
pub const MAX_LINE_LEN: usize = 132;

/// The HSPICE generator.
#[derive(Debug)]
pub struct Hspice;

impl SpiceDialect for Hspice {
    fn dialect_name(&self) -> &'static str {
        "hspice"
    }

    fn format_subckt_params(&self, params: &IndexMap<String, String>) -> String {
        format!("PARAMS: {}", join_params(params))
    }

    fn format_instance_params(&self, params: &IndexMap<String, String>) -> String {
        format!("PARAMS: {}", join_params(params))
    }

    fn wrap_line(&self, line: String) -> String {
        if line.len() <= MAX_LINE_LEN {
            return line;
        }
        let mut words = line.split(' ');
        let mut current = words.next().unwrap_or_default().to_string();
        let mut lines: Vec<String> = vec![];
        for word in words {
            // +2 budget for the "+ " prefix on continuation lines
            if current.len() + 1 + word.len() > MAX_LINE_LEN - 2 {
                lines.push(current);
                current = format!("+ {word}");
            } else {
                current.push(' ');
                current.push_str(word);
            }
        }
        lines.push(current);
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_unchanged() {
        let line = ".subckt INV A Z VDD VSS".to_string();
        assert_eq!(Hspice.wrap_line(line.clone()), line);
    }

    #[test]
    fn test_long_line_wrapped_with_continuation() {
        let params: IndexMap<String, String> = (0..30)
            .map(|i| (format!("P{i}"), "123456".to_string()))
            .collect();
        let line = format!(".subckt WIDE A B C {}", Hspice.format_subckt_params(&params));
        assert!(line.len() > MAX_LINE_LEN);

        let wrapped = Hspice.wrap_line(line.clone());
        let lines: Vec<&str> = wrapped.lines().collect();
        assert!(lines.len() >= 2);
        assert!(lines[0].starts_with(".subckt WIDE"));
        for cont in &lines[1..] {
            assert!(cont.starts_with("+ "), "continuation missing prefix: {cont}");
        }
        // No token is ever split.
        let original: Vec<&str> = line.split(' ').collect();
        let rejoined: Vec<&str> = wrapped
            .split(['\n', ' '])
            .filter(|t| !t.is_empty() && *t != "+")
            .collect();
        assert_eq!(original, rejoined);
    }

    #[test]
    fn test_oversized_token_kept_whole() {
        let monster = "X".repeat(MAX_LINE_LEN + 20);
        let line = format!(".subckt HUGE {monster} OUT");
        let wrapped = Hspice.wrap_line(line);
        assert!(
            wrapped.lines().any(|l| l.contains(&monster)),
            "oversized token must not be split"
        );
    }
}
