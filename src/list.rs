//! Shopping List Text
//!
//! Helpers for the free-text list: one product per line, blank lines
//! and surrounding whitespace ignored.

/// Trimmed, non-blank lines in order
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

/// Join lines back into editor text with a trailing newline so the
/// cursor lands on a fresh line. Empty input stays empty.
pub fn join_lines(lines: &[String]) -> String {
    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

/// Append a line unless an identical one is already present
pub fn append_line(text: &str, line: &str) -> String {
    let line = line.trim();
    if line.is_empty() {
        return text.to_string();
    }
    let mut lines = split_lines(text);
    if lines.iter().any(|l| l == line) {
        return text.to_string();
    }
    lines.push(line.to_string());
    join_lines(&lines)
}

/// Drop every line matching `label`, collapsing the blank runs the
/// removal leaves behind
pub fn remove_line(text: &str, label: &str) -> String {
    let kept: Vec<&str> = text.lines().filter(|l| l.trim() != label).collect();
    let joined = kept.join("\n");
    let collapsed = collapse_blank_runs(&joined);
    let trimmed = collapsed.trim_end();
    if kept.iter().any(|l| !l.trim().is_empty()) {
        format!("{}\n", trimmed)
    } else {
        String::new()
    }
}

fn collapse_blank_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0;
    for c in text.chars() {
        if c == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push(c);
            }
        } else {
            newlines = 0;
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_rejoin_idempotent() {
        let text = "  Melk 1L \n\n Bananen\n   \nBrood volkoren\n";
        let lines = split_lines(text);
        assert_eq!(lines, vec!["Melk 1L", "Bananen", "Brood volkoren"]);

        let rejoined = join_lines(&lines);
        assert_eq!(split_lines(&rejoined), lines);
        assert_eq!(join_lines(&split_lines(&rejoined)), rejoined);
    }

    #[test]
    fn test_join_empty_is_empty() {
        assert_eq!(join_lines(&[]), "");
    }

    #[test]
    fn test_append_line_dedupes() {
        let text = "Melk 1L\n";
        assert_eq!(append_line(text, "Bananen"), "Melk 1L\nBananen\n");
        assert_eq!(append_line(text, "Melk 1L"), "Melk 1L\n");
        assert_eq!(append_line(text, "   "), "Melk 1L\n");
    }

    #[test]
    fn test_append_to_empty() {
        assert_eq!(append_line("", "Kaas"), "Kaas\n");
    }

    #[test]
    fn test_remove_line() {
        let text = "Melk 1L\nBananen\nBrood\n";
        assert_eq!(remove_line(text, "Bananen"), "Melk 1L\nBrood\n");
        assert_eq!(remove_line("Melk 1L\n", "Melk 1L"), "");
    }

    #[test]
    fn test_remove_line_collapses_blanks() {
        let text = "Melk 1L\n\n\nBananen\n\n\n\nBrood\n";
        let out = remove_line(text, "Bananen");
        assert!(!out.contains("\n\n\n"));
        assert_eq!(split_lines(&out), vec!["Melk 1L", "Brood"]);
    }
}
