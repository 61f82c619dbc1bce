use serde::{Deserialize, Serialize};

/// Risk tier attached to a clause category. Ordering follows the tier weight,
/// so `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    High,
    Medium,
    Low,
}

impl RiskTier {
    /// All tiers, most severe first.
    pub const ALL: [RiskTier; 3] = [RiskTier::High, RiskTier::Medium, RiskTier::Low];

    /// Sort weight: high = 3, medium = 2, low = 1.
    pub fn weight(self) -> u8 {
        match self {
            RiskTier::High => 3,
            RiskTier::Medium => 2,
            RiskTier::Low => 1,
        }
    }

    /// Portuguese label used in the HTML report sections.
    pub fn label_pt(self) -> &'static str {
        match self {
            RiskTier::High => "ALTO",
            RiskTier::Medium => "MÉDIO",
            RiskTier::Low => "BAIXO",
        }
    }
}

impl PartialOrd for RiskTier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RiskTier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight().cmp(&other.weight())
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTier::High => write!(f, "high"),
            RiskTier::Medium => write!(f, "medium"),
            RiskTier::Low => write!(f, "low"),
        }
    }
}

/// One of the six monitored clause topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ClauseCategory {
    #[value(name = "indenizacao")]
    Indenizacao,
    #[value(name = "rescisao_unilateral")]
    RescisaoUnilateral,
    #[value(name = "multa_contratual")]
    MultaContratual,
    #[value(name = "confidencialidade")]
    Confidencialidade,
    #[value(name = "exclusividade")]
    Exclusividade,
    #[value(name = "foro_eleicao")]
    ForoEleicao,
}

impl ClauseCategory {
    /// Stable identifier, identical to the serialized form.
    pub fn id(self) -> &'static str {
        match self {
            ClauseCategory::Indenizacao => "indenizacao",
            ClauseCategory::RescisaoUnilateral => "rescisao_unilateral",
            ClauseCategory::MultaContratual => "multa_contratual",
            ClauseCategory::Confidencialidade => "confidencialidade",
            ClauseCategory::Exclusividade => "exclusividade",
            ClauseCategory::ForoEleicao => "foro_eleicao",
        }
    }
}

impl std::fmt::Display for ClauseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// How a document's text is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Text,
    Pdf,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Text => write!(f, "text"),
            InputFormat::Pdf => write!(f, "PDF"),
        }
    }
}

/// A catalogue entry. Built once as a `static` and never mutated.
#[derive(Debug)]
pub struct ClauseDefinition {
    pub category: ClauseCategory,
    /// Keyword variants, tried in declared order.
    pub keywords: &'static [&'static str],
    pub description: &'static str,
    pub risk: RiskTier,
}

/// A single detected clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseHit {
    #[serde(rename = "type")]
    pub category: ClauseCategory,
    #[serde(rename = "keyword")]
    pub matched_keyword: String,
    #[serde(rename = "sentence")]
    pub matched_sentence: String,
    #[serde(rename = "risk_level")]
    pub risk: RiskTier,
    pub description: String,
}

impl ClauseHit {
    pub fn new(def: &ClauseDefinition, keyword: &str, sentence: &str) -> Self {
        Self {
            category: def.category,
            matched_keyword: keyword.to_string(),
            matched_sentence: sentence.to_string(),
            risk: def.risk,
            description: def.description.to_string(),
        }
    }
}

/// Outcome of one analysis call: hits sorted by risk tier, most severe first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "clauses_found")]
    pub hits: Vec<ClauseHit>,
    #[serde(rename = "total_clauses")]
    pub total_count: usize,
}

impl AnalysisResult {
    pub fn new(hits: Vec<ClauseHit>) -> Self {
        let total_count = hits.len();
        Self { hits, total_count }
    }

    pub fn count_tier(&self, tier: RiskTier) -> usize {
        self.hits.iter().filter(|h| h.risk == tier).count()
    }

    pub fn hits_in_tier(&self, tier: RiskTier) -> impl Iterator<Item = &ClauseHit> {
        self.hits.iter().filter(move |h| h.risk == tier)
    }

    /// Most severe tier present, if any clause was found.
    pub fn highest_tier(&self) -> Option<RiskTier> {
        self.hits.iter().map(|h| h.risk).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering_follows_weight() {
        assert!(RiskTier::High > RiskTier::Medium);
        assert!(RiskTier::Medium > RiskTier::Low);
        assert_eq!(RiskTier::High.weight(), 3);
        assert_eq!(RiskTier::Low.weight(), 1);
    }

    #[test]
    fn test_category_serializes_to_id() {
        let json = serde_json::to_string(&ClauseCategory::MultaContratual).unwrap();
        assert_eq!(json, "\"multa_contratual\"");
        let json = serde_json::to_string(&ClauseCategory::ForoEleicao).unwrap();
        assert_eq!(json, "\"foro_eleicao\"");
    }

    #[test]
    fn test_result_json_field_names() {
        let result = AnalysisResult::new(Vec::new());
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["total_clauses"], 0);
        assert!(value["clauses_found"].as_array().unwrap().is_empty());
    }
}
