//! Text list input
//!
//! Reads one text per line, kept verbatim apart from the line ending. Lines holding only
//! whitespace are skipped; `-` reads standard input.

use crate::error::{LemmatchError, LemmatchResult};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Path that selects standard input
pub const STDIN_PATH: &str = "-";

/// Read a text list from a file, or from stdin for `-`
pub fn read_text_list(path: &Path) -> LemmatchResult<Vec<String>> {
    let texts = if path.as_os_str() == STDIN_PATH {
        parse_text_list(io::stdin().lock(), "standard input")?
    } else {
        let file = File::open(path)?;
        parse_text_list(BufReader::new(file), &path.display().to_string())?
    };

    info!("📄 Read {} texts from {}", texts.len(), path.display());
    Ok(texts)
}

/// Parse a text list from a buffered reader
pub fn parse_text_list<R: BufRead>(reader: R, origin: &str) -> LemmatchResult<Vec<String>> {
    let mut texts = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| LemmatchError::from_read(e, origin))?;
        if !line.trim().is_empty() {
            texts.push(line);
        }
    }

    Ok(texts)
}
