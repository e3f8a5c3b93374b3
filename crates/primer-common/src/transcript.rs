use std::fmt::{self, Display};
use std::io::Write;

/// The console output of one snippet run, kept in memory so it can be
/// inspected by tests before it is written anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
    /// The last line was started by `print` and has no terminator yet.
    open: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a complete line.
    pub fn line(&mut self, text: impl Display) -> &mut Self {
        let text = text.to_string();
        if self.open {
            if let Some(last) = self.lines.last_mut() {
                last.push_str(&text);
            }
            self.open = false;
        } else {
            self.lines.push(text);
        }
        self
    }

    /// Append text without terminating the line.
    pub fn print(&mut self, text: impl Display) -> &mut Self {
        let text = text.to_string();
        match self.lines.last_mut() {
            Some(last) if self.open => last.push_str(&text),
            _ => self.lines.push(text),
        }
        self.open = true;
        self
    }

    /// Append an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    /// Whether the last line was left open by `print`.
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn write_to(&self, mut out: impl Write) -> std::io::Result<()> {
        for (i, line) in self.lines.iter().enumerate() {
            let last = i + 1 == self.lines.len();
            if last && self.open {
                write!(out, "{line}")?;
            } else {
                writeln!(out, "{line}")?;
            }
        }
        out.flush()
    }
}

impl Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_continues_line() {
        let mut t = Transcript::new();
        t.print("other");
        assert!(t.is_open());
        t.print("!").line(" done");
        t.line("next");

        assert_eq!(t.lines(), ["other! done", "next"]);
        assert!(!t.is_open());
    }

    #[test]
    fn test_write_keeps_open_line_unterminated() {
        let mut t = Transcript::new();
        t.line(1).print("other");

        let mut buf = Vec::new();
        t.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1\nother");
    }

    #[test]
    fn test_display_joins_lines() {
        let mut t = Transcript::new();
        t.line("a").blank().line("b");
        assert_eq!(t.to_string(), "a\n\nb");
        assert_eq!(t.len(), 3);
        assert!(t.contains("b"));
    }
}
