//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SeoscribeArgs};
use crate::error::Result;
use crate::seo::keywords::KeywordCandidate;
use crate::seo::readability::ReadabilityResult;
use crate::seo::report::{Improvement, SeoAnalysis, SeoComparison};

/// Analysis of one input file.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileAnalysis {
    pub file: String,
    pub analysis: SeoAnalysis,
}

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub results: Vec<FileAnalysis>,
}

/// Result structure for the keywords command.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordResults {
    pub file: String,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<KeywordCandidate>>,
}

/// Result structure for the readability command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadabilityReport {
    pub file: String,
    pub readability: ReadabilityResult,
}

/// Result structure for the compare command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub original_file: String,
    pub optimized_file: String,
    pub analysis: SeoComparison,
    pub improvement: Improvement,
}

/// Plain-text rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &SeoscribeArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_human<T: HumanOutput>(message: &str, result: &T, args: &SeoscribeArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{}", result.render_human());
    Ok(())
}

fn output_json<T: Serialize>(result: &T, args: &SeoscribeArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn underline(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "═".repeat(title.chars().count()));
}

fn render_readability(out: &mut String, readability: &ReadabilityResult) {
    let _ = writeln!(
        out,
        "Reading ease: {:.2} ({})",
        readability.flesch_kincaid,
        reading_level(readability.flesch_kincaid)
    );
    let _ = writeln!(out, "Sentences: {}", readability.total_sentences);
    let _ = writeln!(out, "Words: {}", readability.total_words);
    let _ = writeln!(
        out,
        "Syllables per word: {:.2}",
        readability.average_syllables_per_word
    );
}

fn render_analysis(out: &mut String, analysis: &SeoAnalysis) {
    let _ = writeln!(out, "SEO score: {}/100", analysis.score);
    let _ = writeln!(out, "Words: {}", analysis.word_count);
    let _ = writeln!(
        out,
        "Reading ease: {:.2} ({})",
        analysis.readability.flesch_kincaid,
        reading_level(analysis.readability.flesch_kincaid)
    );

    let breakdown = &analysis.breakdown;
    let _ = writeln!(
        out,
        "Breakdown: length {:.0}, density {:.0}, readability {:.0}, structure {:.0}",
        breakdown.length, breakdown.density, breakdown.readability, breakdown.structure
    );

    if !analysis.keyword_density.is_empty() {
        let _ = writeln!(out, "Keyword density:");
        for (keyword, density) in &analysis.keyword_density {
            let _ = writeln!(out, "  {keyword}: {density:.2}%");
        }
    }

    if !analysis.recommendations.is_empty() {
        let _ = writeln!(out, "Recommendations:");
        for recommendation in &analysis.recommendations {
            let _ = writeln!(out, "  - {recommendation}");
        }
    }
}

impl HumanOutput for AnalysisResults {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for (i, result) in self.results.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            underline(&mut out, &result.file);
            render_analysis(&mut out, &result.analysis);
        }
        out
    }
}

impl HumanOutput for KeywordResults {
    fn render_human(&self) -> String {
        let mut out = String::new();
        underline(&mut out, &format!("Keywords: {}", self.file));

        match &self.details {
            Some(details) => {
                for (i, candidate) in details.iter().enumerate() {
                    let _ = writeln!(
                        out,
                        "{:>3}. {} (count {}, density {:.2}%)",
                        i + 1,
                        candidate.text,
                        candidate.count,
                        candidate.density * 100.0
                    );
                }
            }
            None => {
                for (i, keyword) in self.keywords.iter().enumerate() {
                    let _ = writeln!(out, "{:>3}. {keyword}", i + 1);
                }
            }
        }

        if self.keywords.is_empty() {
            let _ = writeln!(out, "No keywords found.");
        }
        out
    }
}

impl HumanOutput for ReadabilityReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        underline(&mut out, &format!("Readability: {}", self.file));
        render_readability(&mut out, &self.readability);
        out
    }
}

impl HumanOutput for ComparisonReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        underline(&mut out, &format!("Original: {}", self.original_file));
        render_analysis(&mut out, &self.analysis.original);
        out.push('\n');
        underline(&mut out, &format!("Optimized: {}", self.optimized_file));
        render_analysis(&mut out, &self.analysis.optimized);
        out.push('\n');
        let _ = writeln!(
            out,
            "Improvement: score {:+}, reading ease {:+.2}",
            self.improvement.seo_score, self.improvement.readability
        );
        out
    }
}

/// Conventional label for a Flesch reading ease value.
pub fn reading_level(score: f64) -> &'static str {
    match score {
        s if s >= 90.0 => "very easy",
        s if s >= 80.0 => "easy",
        s if s >= 70.0 => "fairly easy",
        s if s >= 60.0 => "standard",
        s if s >= 50.0 => "fairly difficult",
        s if s >= 30.0 => "difficult",
        _ => "very difficult",
    }
}
