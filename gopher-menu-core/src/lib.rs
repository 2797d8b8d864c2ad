//! A minimal client library for the Gopher protocol
//! ([RFC 1436](https://tools.ietf.org/html/rfc1436)).
//!
//! The interesting part is [`parser::Parser`], a single-pass scanner that
//! turns one raw menu line into a structured [`Entry`]. The [`client`]
//! module is a thin tokio transport that fetches a menu and feeds each
//! line through a fresh parser.

pub mod client;
pub mod entry;
pub mod parser;

pub use client::{GopherClient, GopherError};
pub use entry::{Entry, EntryType};
pub use parser::Parser;
