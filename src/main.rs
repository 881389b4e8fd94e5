//! Lemmatch - best-match search over lemmatized text lists
//!
//! Prints, for every source text, the most similar candidate text.

use anyhow::{bail, Context, Result};
use clap::Parser;
use lemmatch::analyzer::{create_analyzer, AnalyzerKind};
use lemmatch::core::match_all;
use lemmatch::demo::demo_lists;
use lemmatch::input::read_text_list;
use lemmatch::report::{write_results, OutputFormat};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Analyzer used to reduce words to base forms
    #[arg(long, value_enum)]
    analyzer: Option<AnalyzerKind>,

    /// Lemma dictionary file (implies --analyzer dictionary; rejected with builtin)
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// File with source texts, one per line ("-" for stdin)
    #[arg(long)]
    sources: Option<PathBuf>,

    /// File with candidate texts, one per line ("-" for stdin)
    #[arg(long)]
    candidates: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Args {
    fn analyzer_kind(&self) -> Result<AnalyzerKind> {
        match (self.analyzer, &self.dictionary) {
            (Some(AnalyzerKind::Builtin), Some(path)) => bail!(
                "--dictionary {} cannot be combined with --analyzer builtin",
                path.display()
            ),
            (Some(kind), _) => Ok(kind),
            (None, Some(_)) => Ok(AnalyzerKind::Dictionary),
            (None, None) => Ok(AnalyzerKind::Builtin),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging; stdout carries results only
    let level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("{:?}", args);

    let kind = args.analyzer_kind()?;
    let analyzer = create_analyzer(kind, args.dictionary.as_deref())
        .with_context(|| format!("Failed to initialize {:?} analyzer", kind))?;
    info!("🔤 Using {} analyzer", analyzer.name());

    let (demo_sources, demo_candidates) = demo_lists();
    let sources = match &args.sources {
        Some(path) => read_text_list(path)
            .with_context(|| format!("Failed to read sources from {}", path.display()))?,
        None => demo_sources,
    };
    let candidates = match &args.candidates {
        Some(path) => read_text_list(path)
            .with_context(|| format!("Failed to read candidates from {}", path.display()))?,
        None => demo_candidates,
    };

    let results = match_all(&analyzer, &sources, &candidates);
    let mut stdout = std::io::stdout().lock();
    let written = write_results(&mut stdout, args.format, results)
        .context("Failed to write results")?;

    info!("✅ Matched {} of {} sources", written, sources.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_for(argv: &[&str]) -> Result<AnalyzerKind> {
        Args::try_parse_from(std::iter::once("lemmatch").chain(argv.iter().copied()))?
            .analyzer_kind()
    }

    #[test]
    fn test_analyzer_kind_selection() {
        assert_eq!(kind_for(&[]).unwrap(), AnalyzerKind::Builtin);
        assert_eq!(
            kind_for(&["--dictionary", "lemmas.tsv"]).unwrap(),
            AnalyzerKind::Dictionary
        );
        assert_eq!(
            kind_for(&["--analyzer", "dictionary", "--dictionary", "lemmas.tsv"]).unwrap(),
            AnalyzerKind::Dictionary
        );
    }

    #[test]
    fn test_builtin_with_dictionary_rejected() {
        assert!(kind_for(&["--analyzer", "builtin", "--dictionary", "lemmas.tsv"]).is_err());
    }
}
