//! Command implementations for the seoscribe CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::seo::config::ScoringConfig;
use crate::seo::engine::SeoEngine;

/// Execute a CLI command.
pub fn execute_command(args: SeoscribeArgs) -> Result<()> {
    let engine = load_engine(&args)?;

    match &args.command {
        Command::Analyze(analyze_args) => analyze_files(analyze_args, &engine, &args),
        Command::Keywords(keyword_args) => extract_keywords(keyword_args, &engine, &args),
        Command::Readability(readability_args) => {
            score_readability(readability_args, &engine, &args)
        }
        Command::Compare(compare_args) => compare_files(compare_args, &engine, &args),
    }
}

/// Build the engine, applying the scoring configuration file when given.
pub fn load_engine(args: &SeoscribeArgs) -> Result<SeoEngine> {
    match &args.config {
        Some(path) => {
            log::info!("loading scoring configuration from {}", path.display());
            SeoEngine::with_config(ScoringConfig::from_file(path)?)
        }
        None => Ok(SeoEngine::new()),
    }
}

/// Read a content file, or stdin for `-`.
pub fn read_content(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn display_name(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Keyword list from the command line, `None` when empty.
fn keyword_list(keywords: &[String]) -> Option<&[String]> {
    if keywords.is_empty() {
        None
    } else {
        Some(keywords)
    }
}

/// Analyze every file; inputs are read in order, analyses run in parallel.
fn analyze_files(args: &AnalyzeArgs, engine: &SeoEngine, cli_args: &SeoscribeArgs) -> Result<()> {
    let start_time = Instant::now();

    let inputs = args
        .files
        .iter()
        .map(|path| Ok((display_name(path), read_content(path)?)))
        .collect::<Result<Vec<_>>>()?;

    let keywords = keyword_list(&args.keywords);
    let results: Vec<FileAnalysis> = inputs
        .par_iter()
        .map(|(file, content)| FileAnalysis {
            file: file.clone(),
            analysis: engine.analyze(content, keywords),
        })
        .collect();

    log::info!(
        "analyzed {} file(s) in {}ms",
        results.len(),
        start_time.elapsed().as_millis()
    );

    output_result("SEO analysis", &AnalysisResults { results }, cli_args)
}

fn extract_keywords(
    args: &KeywordsArgs,
    engine: &SeoEngine,
    cli_args: &SeoscribeArgs,
) -> Result<()> {
    let content = read_content(&args.file)?;

    let details = if args.details {
        Some(
            engine
                .rank_keywords(&content)
                .into_iter()
                .take(args.count)
                .collect::<Vec<_>>(),
        )
    } else {
        None
    };
    let keywords = match &details {
        Some(candidates) => candidates.iter().map(|c| c.text.clone()).collect(),
        None => engine.extract_keywords(&content, args.count),
    };

    output_result(
        "Keyword extraction",
        &KeywordResults {
            file: display_name(&args.file),
            keywords,
            details,
        },
        cli_args,
    )
}

fn score_readability(
    args: &ReadabilityArgs,
    engine: &SeoEngine,
    cli_args: &SeoscribeArgs,
) -> Result<()> {
    let content = read_content(&args.file)?;

    output_result(
        "Readability",
        &ReadabilityReport {
            file: display_name(&args.file),
            readability: engine.calculate_readability(&content),
        },
        cli_args,
    )
}

fn compare_files(args: &CompareArgs, engine: &SeoEngine, cli_args: &SeoscribeArgs) -> Result<()> {
    let original = read_content(&args.original)?;
    let optimized = read_content(&args.optimized)?;

    let analysis = engine.compare(&original, &optimized, keyword_list(&args.keywords));
    let improvement = analysis.improvement();

    output_result(
        "Comparison",
        &ComparisonReport {
            original_file: display_name(&args.original),
            optimized_file: display_name(&args.optimized),
            analysis,
            improvement,
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeoError;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn content_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_read_content_from_file() {
        let file = content_file("Hello world.");
        assert_eq!(read_content(file.path()).unwrap(), "Hello world.");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_content(Path::new("/definitely/not/here.md")).unwrap_err();
        assert!(matches!(err, SeoError::Io(_)));
    }

    #[test]
    fn test_load_engine_with_config() {
        let config = content_file(r#"{"recommendation_threshold": 0.0}"#);
        let path = config.path().to_string_lossy().to_string();
        let args = SeoscribeArgs::try_parse_from([
            "seoscribe",
            "--config",
            path.as_str(),
            "readability",
            "-",
        ])
        .unwrap();

        let engine = load_engine(&args).unwrap();
        assert_eq!(engine.config().recommendation_threshold, 0.0);
    }

    #[test]
    fn test_load_engine_with_invalid_config() {
        let config = content_file(r#"{"weights": {"length": 0.9}}"#);
        let path = config.path().to_string_lossy().to_string();
        let args = SeoscribeArgs::try_parse_from([
            "seoscribe",
            "--config",
            path.as_str(),
            "readability",
            "-",
        ])
        .unwrap();

        assert!(matches!(load_engine(&args), Err(SeoError::Config(_))));
    }

    #[test]
    fn test_execute_analyze_json() {
        let file = content_file("Rust tooling. Rust crates. Rust compiler.");
        let path = file.path().to_string_lossy().to_string();
        let args = SeoscribeArgs::try_parse_from([
            "seoscribe",
            "--format",
            "json",
            "analyze",
            path.as_str(),
            path.as_str(),
        ])
        .unwrap();

        execute_command(args).unwrap();
    }
}
