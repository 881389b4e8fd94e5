//! Result reporting
//!
//! Writes match results as they are produced, one line each.

use crate::core::MatchResult;
use crate::error::LemmatchResult;
use std::io::Write;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `<source> - <candidate> (<index>) :  <score>%`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Write every result to `out`, returning how many were written
pub fn write_results<W, I>(out: &mut W, format: OutputFormat, results: I) -> LemmatchResult<usize>
where
    W: Write,
    I: IntoIterator<Item = MatchResult>,
{
    let mut count = 0;

    for result in results {
        match format {
            OutputFormat::Text => writeln!(out, "{result}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &result)?;
                writeln!(out)?;
            }
        }
        count += 1;
    }

    out.flush()?;
    Ok(count)
}
