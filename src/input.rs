//! Input collection.
//!
//! The generator never talks to a terminal directly; it asks an [`InputProvider`]
//! for the raw length and for each category decision.

use std::io::{BufRead, Write};

/// Source of user decisions for a single attempt.
pub trait InputProvider {
    /// Asks for a password length.
    ///
    /// Returns the raw answer, or `None` when the user cancelled or gave no response.
    fn ask_length(&mut self, min: usize, max: usize, default: usize) -> Option<String>;

    /// Asks whether the category called `label` should be included.
    fn ask_include(&mut self, label: &str) -> bool;
}

/// Line-oriented prompts over any reader/writer pair.
///
/// An empty length answer takes the suggested default; end of input counts as a
/// cancelled prompt. Category questions accept `y`/`yes` (case-insensitive), anything
/// else declines.
pub struct TerminalPrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn ask(&mut self, question: &str) -> Option<String> {
        let _ = write!(self.writer, "{question}");
        let _ = self.writer.flush();

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl<R: BufRead, W: Write> InputProvider for TerminalPrompt<R, W> {
    fn ask_length(&mut self, min: usize, max: usize, default: usize) -> Option<String> {
        let answer = self.ask(&format!(
            "Please select a password length between {min} and {max} characters [{default}]: "
        ))?;
        if answer.is_empty() {
            return Some(default.to_string());
        }
        Some(answer)
    }

    fn ask_include(&mut self, label: &str) -> bool {
        let question = format!("Do you want to include {label} in your password? [y/N]: ");
        match self.ask(&question) {
            Some(answer) => {
                let answer = answer.trim().to_lowercase();
                answer == "y" || answer == "yes"
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> TerminalPrompt<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_length_returns_raw_answer() {
        let mut p = prompt("abc\n");
        assert_eq!(p.ask_length(8, 128, 12), Some("abc".to_string()));

        let (_, out) = p.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("between 8 and 128"));
        assert!(out.contains("[12]"));
    }

    #[test]
    fn test_ask_length_blank_line_takes_default() {
        let mut p = prompt("\r\n");
        assert_eq!(p.ask_length(8, 128, 12), Some("12".to_string()));
    }

    #[test]
    fn test_ask_length_eof_is_no_response() {
        let mut p = prompt("");
        assert_eq!(p.ask_length(8, 128, 12), None);
    }

    #[test]
    fn test_ask_include_answers() {
        let mut p = prompt("y\nYES\nn\n\nmaybe\n");
        assert!(p.ask_include("numbers"));
        assert!(p.ask_include("numbers"));
        assert!(!p.ask_include("numbers"));
        assert!(!p.ask_include("numbers"));
        assert!(!p.ask_include("numbers"));
        // exhausted input declines
        assert!(!p.ask_include("numbers"));
    }

    #[test]
    fn test_ask_include_mentions_label() {
        let mut p = prompt("y\n");
        p.ask_include("lowercase letters");
        let (_, out) = p.into_inner();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Do you want to include lowercase letters in your password? [y/N]: "
        );
    }
}
