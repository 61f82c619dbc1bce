//! Report renderers for analysis results.
//!
//! - [`terminal`]: colored summary box and one table per risk tier; respects `--verbose` / `--quiet`.
//! - [`html`]: standalone HTML page grouped by risk tier.
//! - [`pdf`]: cover page with per-tier stat cards followed by the clause pages.

use crate::models::{AnalysisResult, RiskTier};

pub mod html;
pub mod pdf;
pub mod terminal;

/// One-line verdict, e.g. `3 critical clauses detected (1 high risk)`.
pub fn summary_line(result: &AnalysisResult) -> String {
    if result.total_count == 0 {
        return "Document safe: no critical clauses detected".to_string();
    }
    format!(
        "{} critical clause{} detected ({} high risk)",
        result.total_count,
        if result.total_count == 1 { "" } else { "s" },
        result.count_tier(RiskTier::High)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::DocumentAnalyzer;

    #[test]
    fn test_summary_line() {
        let empty = AnalysisResult::new(Vec::new());
        assert_eq!(summary_line(&empty), "Document safe: no critical clauses detected");

        let result = DocumentAnalyzer::default()
            .analyze("Qualquer rescisão unilateral gera multa contratual de dez por cento do valor.")
            .unwrap();
        assert_eq!(summary_line(&result), "2 critical clauses detected (1 high risk)");
    }
}
