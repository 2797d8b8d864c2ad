use serde::{Deserialize, Serialize};

/// The kind of resource a menu line points at.
///
/// `TextFile` through `IndexSearch` are canonical RFC 1436 types; `Info`
/// and `Html` are non-canonical but broadly supported. `Invalid` is
/// client-only: it marks a line whose type tag we did not recognize and
/// is never emitted by a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    TextFile,
    Directory,
    PhoneBook,
    IndexSearch,
    Info,
    Html,
    Invalid,
}

impl EntryType {
    /// Look up the type for a leading tag byte. Unknown tags yield `None`;
    /// the caller decides what to do with the line.
    pub fn from_tag(tag: u8) -> Option<EntryType> {
        match tag {
            b'0' => Some(EntryType::TextFile),
            b'1' => Some(EntryType::Directory),
            b'2' => Some(EntryType::PhoneBook),
            b'7' => Some(EntryType::IndexSearch),
            b'h' => Some(EntryType::Html),
            b'i' => Some(EntryType::Info),
            _ => None,
        }
    }

    pub fn tag(&self) -> char {
        match self {
            EntryType::TextFile => '0',
            EntryType::Directory => '1',
            EntryType::PhoneBook => '2',
            EntryType::IndexSearch => '7',
            EntryType::Html => 'h',
            EntryType::Info => 'i',
            EntryType::Invalid => '?',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EntryType::TextFile => "TextFile",
            EntryType::Directory => "Directory",
            EntryType::PhoneBook => "PhoneBook",
            EntryType::IndexSearch => "IndexSearch",
            EntryType::Html => "Html",
            EntryType::Info => "Info",
            EntryType::Invalid => "Invalid",
        }
    }
}

/// One parsed menu line.
///
/// `server` and `port` may be empty, e.g. for Info lines. `port` stays
/// text rather than numeric: Gopher ports travel as ASCII digits and some
/// servers emit non-numeric placeholders.
///
/// For `Invalid` entries, `user_name` carries the entire unparsed line
/// verbatim and the remaining fields are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub entry_type: EntryType,
    pub user_name: String,
    pub selector: String,
    pub server: String,
    pub port: String,
}

impl Entry {
    /// An `Invalid` entry carrying the offending line as its payload.
    pub(crate) fn invalid(line: &str) -> Entry {
        Entry {
            entry_type: EntryType::Invalid,
            user_name: line.to_string(),
            selector: String::new(),
            server: String::new(),
            port: String::new(),
        }
    }
}
