//! CSV adapter
//!
//! Parses delimited text into a [`Table`](crate::domain::Table) with dynamic
//! cell typing, and writes tables back out in their original column order.

pub mod reader;
pub mod writer;

pub use reader::{parse_csv, read_csv_file};
pub use writer::{destination_path, to_csv_string, write_csv, write_csv_file};

/// Parse a single-character delimiter setting into a byte
pub fn delimiter_byte(delimiter: &str) -> Option<u8> {
    match delimiter {
        "\\t" | "tab" => Some(b'\t'),
        _ => match delimiter.as_bytes() {
            [byte] if byte.is_ascii() && *byte != b'"' && *byte != b'\n' && *byte != b'\r' => {
                Some(*byte)
            }
            _ => None,
        },
    }
}
