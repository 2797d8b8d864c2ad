use std::io::{self, IsTerminal};

use anyhow::Result;
use serde_json::json;

use gopher_menu_core::{Entry, EntryType};

/// Determine whether output should be JSON.
/// JSON is used when: --json flag is set, OR stdout is not a terminal (piped).
pub fn use_json(flag: bool) -> bool {
    flag || !io::stdout().is_terminal()
}

fn type_indicator(entry_type: EntryType) -> &'static str {
    match entry_type {
        EntryType::Directory => "[+]",
        EntryType::TextFile => "[T]",
        EntryType::IndexSearch => "[?]",
        EntryType::Html => "[H]",
        EntryType::PhoneBook => "[P]",
        EntryType::Info => "   ",
        EntryType::Invalid => "[!]",
    }
}

pub fn print_entries(entries: &[Entry], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    for entry in entries {
        match entry.entry_type {
            EntryType::Info => println!("      {}", entry.user_name),
            // user_name holds the raw offending line here
            EntryType::Invalid => println!("[!]   {}", entry.user_name),
            _ => println!(
                "{} {:<50} {}:{} {}",
                type_indicator(entry.entry_type),
                entry.user_name,
                entry.server,
                entry.port,
                entry.selector
            ),
        }
    }
    Ok(())
}

/// Print a structured error and exit with code 1.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    if json {
        let msg = format!("{:#}", err);
        eprintln!("{}", json!({ "error": msg }));
    } else {
        eprintln!("error: {:#}", err);
    }
    std::process::exit(1);
}
