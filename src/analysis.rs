use std::cmp::Reverse;

use tracing::{debug, info};

use crate::clause::catalogue::CATALOGUE;
use crate::clause::matcher::match_clauses;
use crate::error::AnalysisError;
use crate::models::{AnalysisResult, ClauseCategory, ClauseDefinition};

/// Minimum trimmed input length, in characters, accepted for analysis.
pub const DEFAULT_MIN_LENGTH: usize = 50;

/// Runs the clause matcher over a document and ranks the hits by risk.
///
/// The analyzer holds no per-document state; one instance can analyze any
/// number of documents and gives identical results for identical input.
#[derive(Debug, Clone)]
pub struct DocumentAnalyzer {
    catalogue: &'static [ClauseDefinition],
    min_length: usize,
    excluded: Vec<ClauseCategory>,
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new(CATALOGUE)
    }
}

impl DocumentAnalyzer {
    pub fn new(catalogue: &'static [ClauseDefinition]) -> Self {
        Self {
            catalogue,
            min_length: DEFAULT_MIN_LENGTH,
            excluded: Vec::new(),
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Skip the given categories entirely during matching.
    pub fn excluding(mut self, categories: &[ClauseCategory]) -> Self {
        self.excluded = categories.to_vec();
        self
    }

    /// Analyze a document.
    ///
    /// Text whose trimmed length is under the minimum is rejected with
    /// [`AnalysisError::InputTooShort`]. Otherwise hits are sorted by risk tier,
    /// most severe first; hits of equal tier keep their catalogue order.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let length = text.trim().chars().count();
        if length < self.min_length {
            debug!(length, minimum = self.min_length, "input rejected");
            return Err(AnalysisError::InputTooShort {
                length,
                minimum: self.min_length,
            });
        }

        let active = self
            .catalogue
            .iter()
            .filter(|d| !self.excluded.contains(&d.category));

        let mut hits = match_clauses(text, active);
        // `sort_by_key` is stable, so discovery order survives within a tier.
        hits.sort_by_key(|h| Reverse(h.risk.weight()));

        info!(chars = length, clauses = hits.len(), "document analyzed");
        Ok(AnalysisResult::new(hits))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::RiskTier;

    #[test]
    fn test_short_input_rejected() {
        let analyzer = DocumentAnalyzer::default();
        assert_eq!(
            analyzer.analyze("Contrato curto com indenização."),
            Err(AnalysisError::InputTooShort { length: 31, minimum: 50 })
        );
        assert!(matches!(
            analyzer.analyze(""),
            Err(AnalysisError::InputTooShort { length: 0, .. })
        ));
    }

    #[test]
    fn test_length_is_measured_after_trimming() {
        let padded = format!("{}{}{}", " ".repeat(40), "abc", "\n".repeat(40));
        assert!(matches!(
            DocumentAnalyzer::default().analyze(&padded),
            Err(AnalysisError::InputTooShort { length: 3, .. })
        ));
    }

    #[test]
    fn test_single_high_risk_hit() {
        let text = "O contratado pagará indenização ao contratante em caso de atraso na entrega.";
        let result = DocumentAnalyzer::default().analyze(text).unwrap();
        assert_eq!(result.total_count, 1);
        assert_eq!(result.hits[0].risk, RiskTier::High);
        assert_eq!(result.hits[0].matched_keyword, "indenização");
    }

    #[test]
    fn test_high_risk_sorted_before_medium() {
        let text = "As partes mantêm sigilo sobre os termos do acordo comercial. \
                    Qualquer rescisão unilateral exige aviso prévio de trinta dias.";
        let result = DocumentAnalyzer::default().analyze(text).unwrap();
        let tiers: Vec<_> = result.hits.iter().map(|h| h.risk).collect();
        assert_eq!(tiers, vec![RiskTier::High, RiskTier::Medium]);
        assert_eq!(result.hits[0].category, ClauseCategory::RescisaoUnilateral);
        assert_eq!(result.hits[1].category, ClauseCategory::Confidencialidade);
    }

    #[test]
    fn test_two_medium_clauses_example() {
        let text = "Este contrato prevê multa contratual de 10% e também cláusula de \
                    confidencialidade das partes.";
        let result = DocumentAnalyzer::default().analyze(text).unwrap();
        assert_eq!(result.total_count, 2);
        assert_eq!(result.hits[0].category, ClauseCategory::MultaContratual);
        assert_eq!(result.hits[0].risk, RiskTier::Medium);
        assert_eq!(result.hits[1].category, ClauseCategory::Confidencialidade);
        assert_eq!(result.hits[1].risk, RiskTier::Medium);
    }

    #[test]
    fn test_no_clauses() {
        let text = "The weather today is sunny with a light breeze from the west.";
        let result = DocumentAnalyzer::default().analyze(text).unwrap();
        assert_eq!(result.total_count, 0);
        assert!(result.hits.is_empty());
    }

    #[test]
    fn test_uppercase_keyword() {
        let text = "THE SUPPLIER SHALL BE BOUND BY A STRICT CONFIDENTIALITY AGREEMENT.";
        let result = DocumentAnalyzer::default().analyze(text).unwrap();
        assert_eq!(result.total_count, 1);
        assert_eq!(result.hits[0].matched_keyword, "confidentiality");
    }

    #[test]
    fn test_idempotent() {
        let text = "Fica eleito o foro competente de São Paulo. A contratada tem exclusividade \
                    na região. Danos serão ressarcidos integralmente pela parte culpada.";
        let analyzer = DocumentAnalyzer::default();
        assert_eq!(analyzer.analyze(text).unwrap(), analyzer.analyze(text).unwrap());
    }

    #[test]
    fn test_stable_order_within_tier() {
        let text = "A contratada tem exclusividade na região metropolitana. \
                    Há multa contratual por atraso na entrega dos produtos.";
        let result = DocumentAnalyzer::default().analyze(text).unwrap();
        let categories: Vec<_> = result.hits.iter().map(|h| h.category).collect();
        assert_eq!(
            categories,
            vec![ClauseCategory::MultaContratual, ClauseCategory::Exclusividade]
        );
    }

    #[test]
    fn test_excluded_categories_skipped() {
        let text = "Este contrato prevê multa contratual de 10% e também cláusula de \
                    confidencialidade das partes.";
        let result = DocumentAnalyzer::default()
            .excluding(&[ClauseCategory::MultaContratual])
            .analyze(text)
            .unwrap();
        assert_eq!(result.total_count, 1);
        assert_eq!(result.hits[0].category, ClauseCategory::Confidencialidade);
    }

    #[test]
    fn test_custom_min_length() {
        let analyzer = DocumentAnalyzer::default().with_min_length(10);
        let result = analyzer.analyze("Há sigilo total entre as partes.").unwrap();
        assert_eq!(result.total_count, 1);
    }
}
