use std::path::PathBuf;

use clap::Parser;

use crate::models::{ClauseCategory, RiskTier};

#[derive(Parser, Debug)]
#[command(
    name = "legal-lens",
    about = "Scan legal documents for risk-bearing clauses and rank them by risk",
    version
)]
pub struct Cli {
    /// Document to analyze (text or PDF); `-` reads standard input
    #[arg(default_value = "-", conflicts_with = "text")]
    pub input: PathBuf,

    /// Analyze this text instead of reading a file
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Config file [default: ./.legal-lens/config.toml, fallback ~/.config/legal-lens/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Write the report to this file (PDF defaults to legal-lens-report.pdf)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Minimum document length in characters (overrides config)
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Leave a clause category out of the scan (repeatable)
    #[arg(long = "exclude-clause", value_name = "CATEGORY")]
    pub exclude_clause: Vec<ClauseCategory>,

    /// Exit with code 1 when a clause at or above this tier is found (overrides config)
    #[arg(long, value_name = "TIER")]
    pub fail_on: Option<RiskTier>,

    /// Show debug logging and matched keywords for every hit
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
    Html,
    Pdf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["legal-lens"]);
        assert_eq!(cli.input, PathBuf::from("-"));
        assert_eq!(cli.report, ReportFormat::Terminal);
        assert!(cli.exclude_clause.is_empty());
        assert!(cli.fail_on.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "legal-lens",
            "contrato.pdf",
            "--report",
            "html",
            "--exclude-clause",
            "foro_eleicao",
            "--exclude-clause",
            "multa_contratual",
            "--fail-on",
            "high",
        ]);
        assert_eq!(cli.input, PathBuf::from("contrato.pdf"));
        assert_eq!(cli.report, ReportFormat::Html);
        assert_eq!(
            cli.exclude_clause,
            vec![ClauseCategory::ForoEleicao, ClauseCategory::MultaContratual]
        );
        assert_eq!(cli.fail_on, Some(RiskTier::High));
    }

    #[test]
    fn test_text_conflicts_with_input() {
        assert!(Cli::try_parse_from(["legal-lens", "a.txt", "--text", "abc"]).is_err());
    }
}
