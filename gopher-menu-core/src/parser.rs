//! Single-line menu scanner.
//!
//! A menu line has a fixed, tag-prefixed, tab-delimited grammar with no
//! escaping or nesting:
//!
//! ```text
//! <type-char><username>\t<selector>\t<host>\t<port>
//! ```
//!
//! One forward-only byte cursor is enough; no backtracking, no lookahead
//! beyond the current byte. Each [`Parser`] is single-use: construct it
//! over one line (terminators already stripped by the transport) and call
//! [`Parser::next_line`] once.

use crate::entry::{Entry, EntryType};

const EOF: u8 = 0;

/// Scanner state over one raw menu line.
pub struct Parser<'a> {
    input: &'a str,
    ch: u8,
    position: usize,
    read_position: usize,
}

impl<'a> Parser<'a> {
    /// Set up a parser over `input` with the first byte pre-read.
    pub fn new(input: &'a str) -> Parser<'a> {
        let mut p = Parser {
            input,
            ch: EOF,
            position: 0,
            read_position: 0,
        };
        p.next_char();
        p
    }

    /// Parse the line into an [`Entry`].
    ///
    /// This never fails: an unrecognized tag byte produces an
    /// [`EntryType::Invalid`] entry carrying the whole line, and a line
    /// that ends before all four fields are read leaves the unread
    /// fields empty.
    pub fn next_line(mut self) -> Entry {
        let entry_type = match EntryType::from_tag(self.ch) {
            Some(t) => t,
            None => return Entry::invalid(self.input),
        };
        self.next_char();

        let user_name = self.next_segment().to_string();
        let selector = self.next_segment().to_string();
        let server = self.next_segment().to_string();
        let port = self.next_segment().to_string();

        Entry {
            entry_type,
            user_name,
            selector,
            server,
            port,
        }
    }

    fn next_char(&mut self) {
        if self.read_position >= self.input.len() {
            self.ch = EOF;
        } else {
            self.ch = self.input.as_bytes()[self.read_position];
        }

        self.position = self.read_position;
        self.read_position += 1;
    }

    // Slicing at `position` is safe: the cursor only stops on a tab byte
    // or at end of input, and a tab cannot occur inside a multi-byte
    // UTF-8 sequence.
    fn next_segment(&mut self) -> &'a str {
        let start = self.position.min(self.input.len());

        while self.ch != b'\t' && self.ch != EOF {
            self.next_char();
        }
        let end = self.position.min(self.input.len());
        self.next_char();

        &self.input[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Entry {
        Parser::new(line).next_line()
    }

    #[test]
    fn parses_text_file_line() {
        let entry = parse(
            "0Does this gopher menu look correct?\t/gopher/proxy\tgopher.floodgap.com\t70",
        );
        assert_eq!(entry.entry_type, EntryType::TextFile);
        assert_eq!(entry.user_name, "Does this gopher menu look correct?");
        assert_eq!(entry.selector, "/gopher/proxy");
        assert_eq!(entry.server, "gopher.floodgap.com");
        assert_eq!(entry.port, "70");
    }

    #[test]
    fn parses_directory_with_empty_selector() {
        let entry = parse("1Super-Dimensional Fortress: SDF Gopherspace\t\tsdf.org\t70");
        assert_eq!(entry.entry_type, EntryType::Directory);
        assert_eq!(entry.user_name, "Super-Dimensional Fortress: SDF Gopherspace");
        assert_eq!(entry.selector, "");
        assert_eq!(entry.server, "sdf.org");
        assert_eq!(entry.port, "70");
    }

    #[test]
    fn parses_phone_book_line() {
        let entry = parse("2Floodgap CSO/ph phonebook server\t\tgopher.floodgap.com\t105");
        assert_eq!(entry.entry_type, EntryType::PhoneBook);
        assert_eq!(entry.server, "gopher.floodgap.com");
        assert_eq!(entry.port, "105");
    }

    #[test]
    fn parses_index_search_line() {
        let entry = parse("7Search Veronica-2\t/v2/vs\tgopher.floodgap.com\t70");
        assert_eq!(entry.entry_type, EntryType::IndexSearch);
        assert_eq!(entry.selector, "/v2/vs");
    }

    #[test]
    fn parses_html_line() {
        let entry = parse(
            "hFloodgap.com (Web pages)\tURL:http://www.floodgap.com/\tgopher.floodgap.com\t70",
        );
        assert_eq!(entry.entry_type, EntryType::Html);
        assert_eq!(entry.selector, "URL:http://www.floodgap.com/");
    }

    #[test]
    fn parses_info_line() {
        let entry = parse(
            "iWelcome to Floodgap Systems' official gopher server.\t\terror.host\t1",
        );
        assert_eq!(entry.entry_type, EntryType::Info);
        assert_eq!(
            entry.user_name,
            "Welcome to Floodgap Systems' official gopher server."
        );
        assert_eq!(entry.selector, "");
        assert_eq!(entry.server, "error.host");
        assert_eq!(entry.port, "1");
    }

    #[test]
    fn unknown_tag_yields_invalid_with_whole_line() {
        let line = "XWelcome to Floodgap Systems' official gopher server.\t\terror.host\t1";
        let entry = parse(line);
        assert_eq!(entry.entry_type, EntryType::Invalid);
        assert_eq!(entry.user_name, line);
        assert_eq!(entry.selector, "");
        assert_eq!(entry.server, "");
        assert_eq!(entry.port, "");
    }

    #[test]
    fn empty_input_is_invalid() {
        let entry = parse("");
        assert_eq!(entry.entry_type, EntryType::Invalid);
        assert_eq!(entry.user_name, "");
    }

    #[test]
    fn truncated_line_defaults_missing_fields_to_empty() {
        let entry = parse("1Just a name, no tabs");
        assert_eq!(entry.entry_type, EntryType::Directory);
        assert_eq!(entry.user_name, "Just a name, no tabs");
        assert_eq!(entry.selector, "");
        assert_eq!(entry.server, "");
        assert_eq!(entry.port, "");
    }

    #[test]
    fn bare_tag_yields_all_empty_fields() {
        let entry = parse("0");
        assert_eq!(entry.entry_type, EntryType::TextFile);
        assert_eq!(entry.user_name, "");
        assert_eq!(entry.selector, "");
        assert_eq!(entry.server, "");
        assert_eq!(entry.port, "");
    }

    #[test]
    fn fifth_field_is_dropped() {
        // Some servers append a "+" redundancy flag after the port.
        let entry = parse("1Menu\t/sel\texample.org\t70\t+");
        assert_eq!(entry.entry_type, EntryType::Directory);
        assert_eq!(entry.port, "70");
    }

    #[test]
    fn multibyte_display_text_survives() {
        let entry = parse("1Ortsveränderlich\t\tgopher.ortsveränderlich.de\t70");
        assert_eq!(entry.user_name, "Ortsveränderlich");
        assert_eq!(entry.server, "gopher.ortsveränderlich.de");
    }

    #[test]
    fn two_parsers_over_one_line_agree() {
        let line = "0Does this gopher menu look correct?\t/gopher/proxy\tgopher.floodgap.com\t70";
        assert_eq!(parse(line), parse(line));
    }
}
