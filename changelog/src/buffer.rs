/// Ordered lines of a document, each keeping its own line terminator
///
/// Lines that are not touched come back out byte-for-byte, including CRLF
/// endings and a missing final newline.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    lines: Vec<String>,
    newline: &'static str,
}

impl LineBuffer {
    #[must_use]
    pub fn new(content: &str) -> Self {
        let newline = if content.contains("\r\n") { "\r\n" } else { "\n" };
        Self {
            lines: content.split_inclusive('\n').map(str::to_string).collect(),
            newline,
        }
    }

    /// Inserts `new_lines` directly after the line at `idx`
    pub fn insert_after<S: AsRef<str>>(&mut self, idx: usize, new_lines: &[S]) {
        let Some(anchor) = self.lines.get_mut(idx) else {
            return;
        };
        let unterminated = !anchor.ends_with('\n');
        if unterminated {
            anchor.push_str(self.newline);
        }

        let mut inserted = self.terminated(new_lines);
        if unterminated {
            if let Some(last) = inserted.last_mut() {
                let content_len = strip_terminator(last).len();
                last.truncate(content_len);
            }
        }
        self.lines.splice(idx + 1..idx + 1, inserted);
    }

    /// Replaces the content of the line at `idx`, keeping its terminator
    pub fn replace(&mut self, idx: usize, content: &str) {
        if let Some(line) = self.lines.get_mut(idx) {
            let terminator = line[strip_terminator(line).len()..].to_string();
            *line = format!("{content}{terminator}");
        }
    }

    fn terminated<S: AsRef<str>>(&self, new_lines: &[S]) -> Vec<String> {
        new_lines
            .iter()
            .map(|line| format!("{}{}", line.as_ref(), self.newline))
            .collect()
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.lines.concat()
    }
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |line| line.strip_suffix('\r').unwrap_or(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_buffer_round_trips() {
        for content in ["a\nb\n", "a\r\nb\r\n", "a\nb", ""] {
            assert_eq!(LineBuffer::new(content).into_text(), content);
        }
    }

    #[test]
    fn test_out_of_range_edits_are_ignored() {
        let mut buffer = LineBuffer::new("a\nb\n");
        buffer.insert_after(5, &["x"]);
        buffer.replace(5, "y");
        assert_eq!(buffer.into_text(), "a\nb\n");
    }

    #[test]
    fn test_insert_after_uses_document_newline() {
        let mut buffer = LineBuffer::new("a\r\nb\r\n");
        buffer.insert_after(0, &["x", "y"]);
        assert_eq!(buffer.into_text(), "a\r\nx\r\ny\r\nb\r\n");
    }

    #[test]
    fn test_insert_after_last_line_without_newline() {
        let mut buffer = LineBuffer::new("a\nb");
        buffer.insert_after(1, &["c"]);
        assert_eq!(buffer.into_text(), "a\nb\nc");
    }

    #[test]
    fn test_replace_keeps_terminator() {
        let mut buffer = LineBuffer::new("a\r\nc\r\nd");
        buffer.replace(1, "C");
        buffer.replace(2, "D");
        assert_eq!(buffer.into_text(), "a\r\nC\r\nD");
    }
}
