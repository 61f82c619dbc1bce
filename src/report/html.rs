use html_escape::encode_safe;

use crate::models::{AnalysisResult, ClauseHit, RiskTier};

const ALERT_BG: &str = "#ffebee";
const SAFE_BG: &str = "#e8f5e9";

/// Render a standalone HTML report.
///
/// Hits are grouped into ALTO / MÉDIO / BAIXO sections; empty tiers are
/// omitted. Every interpolated value is HTML-escaped.
pub fn render(result: &AnalysisResult) -> String {
    let mut body = String::new();

    if result.total_count == 0 {
        body.push_str(&format!(
            "<div style='text-align:center; padding:40px; background:{SAFE_BG}; border-radius:16px;'>\
             <div style='font-size:60px; margin-bottom:20px;'>✅</div>\
             <h2 style='color:#2e7d32; margin:0 0 15px 0;'>Nenhuma cláusula crítica detectada!</h2>\
             <p style='color:#37474f;'>O documento analisado não contém as cláusulas críticas monitoradas pelo sistema.</p>\
             </div>\n"
        ));
    } else {
        let bar = (result.total_count * 20).min(100);
        body.push_str(&format!(
            "<div style='text-align:center; background:{ALERT_BG}; border-radius:16px; padding:25px; margin-bottom:25px;'>\
             <div style='font-size:56px;'>⚠️</div>\
             <h2 style='color:#c62828; margin:0 0 15px 0;'>Cláusulas Críticas Detectadas</h2>\
             <div style='font-size:20px; font-weight:700; color:#d32f2f;'>{} cláusulas identificadas</div>\
             <div style='max-width:320px; height:18px; background:rgba(211,47,47,0.1); border-radius:9px; margin:15px auto 0; overflow:hidden;'>\
             <div style='width:{}%; height:100%; background:#d32f2f;'></div></div>\
             </div>\n",
            result.total_count, bar
        ));

        for tier in RiskTier::ALL {
            let hits: Vec<&ClauseHit> = result.hits_in_tier(tier).collect();
            if hits.is_empty() {
                continue;
            }
            render_section(&mut body, tier, &hits);
        }
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>legal-lens report</title>\n</head>\n\
         <body style='font-family:Segoe UI, system-ui; max-width:850px; margin:0 auto; padding:20px;'>\n\
         <h1 style='color:#c62828;'>⚖️ legal-lens</h1>\n\
         <p style='font-weight:600;'>{}</p>\n{}\
         <p style='color:#b71c1c; background:#ffcdd2; padding:10px; border-radius:10px;'>\
         ⚠️ Este é um assistente jurídico. Não substitui orientação de advogado qualificado.</p>\n\
         </body>\n</html>\n",
        encode_safe(&summary_pt(result)),
        body
    )
}

/// Portuguese one-line verdict used at the top of the HTML page.
pub fn summary_pt(result: &AnalysisResult) -> String {
    if result.total_count == 0 {
        "Documento seguro".to_string()
    } else {
        format!(
            "⚠️ {} cláusulas críticas detectadas ({} alto risco)",
            result.total_count,
            result.count_tier(RiskTier::High)
        )
    }
}

fn render_section(out: &mut String, tier: RiskTier, hits: &[&ClauseHit]) {
    let (color, tint, icon) = tier_style(tier);
    out.push_str(&format!(
        "<div style='margin-bottom:25px;'>\n\
         <h3 style='color:{color};'>{icon} Risco {} ({} cláusulas)</h3>\n",
        tier.label_pt(),
        hits.len()
    ));
    for hit in hits {
        out.push_str(&format!(
            "<div style='background:{tint}; border-left:4px solid {color}; padding:18px; margin:12px 0; border-radius:10px;'>\
             <div style='font-weight:600; color:{color};'>{}</div>\
             <div style='font-family:monospace; background:white; padding:12px; border-radius:8px; margin:8px 0;'>\"{}\"</div>\
             <div style='color:#616161; font-size:13px;'>Palavra-chave: <strong>{}</strong></div>\
             </div>\n",
            encode_safe(&hit.description),
            encode_safe(&hit.matched_sentence),
            encode_safe(&hit.matched_keyword)
        ));
    }
    out.push_str("</div>\n");
}

fn tier_style(tier: RiskTier) -> (&'static str, &'static str, &'static str) {
    match tier {
        RiskTier::High => ("#d32f2f", "rgba(211, 47, 47, 0.08)", "🔴"),
        RiskTier::Medium => ("#f57c00", "rgba(245, 124, 0, 0.08)", "🟠"),
        RiskTier::Low => ("#2e7d32", "rgba(46, 125, 47, 0.08)", "🟢"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::DocumentAnalyzer;

    #[test]
    fn test_empty_result() {
        let html = render(&AnalysisResult::new(Vec::new()));
        assert!(html.contains("Nenhuma cláusula crítica detectada"));
        assert!(html.contains("Documento seguro"));
        assert!(!html.contains("Risco ALTO"));
    }

    #[test]
    fn test_sections_in_tier_order() {
        let result = DocumentAnalyzer::default()
            .analyze("Fica eleito o foro competente da capital. Qualquer rescisão unilateral exige aviso.")
            .unwrap();
        let html = render(&result);
        let alto = html.find("Risco ALTO").unwrap();
        let baixo = html.find("Risco BAIXO").unwrap();
        assert!(alto < baixo);
        assert!(!html.contains("Risco MÉDIO"));
        assert!(html.contains("2 cláusulas críticas detectadas (1 alto risco)"));
        assert!(html.contains("Palavra-chave: <strong>rescisão unilateral</strong>"));
    }

    #[test]
    fn test_keyword_is_escaped() {
        let def = &crate::clause::catalogue::CATALOGUE[0];
        let hit = ClauseHit::new(def, "<script>", "O contratante's <script>alert(1)</script> indenização.");
        let html = render(&AnalysisResult::new(vec![hit]));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Palavra-chave: <strong>&lt;script&gt;</strong>"));
        assert!(!html.contains("contratante's"));
    }

    #[test]
    fn test_sentence_is_escaped() {
        let result = DocumentAnalyzer::default()
            .analyze("A cláusula <b>penal</b> & multa contratual valem para \"ambas\" as partes.")
            .unwrap();
        let html = render(&result);
        assert!(html.contains("&lt;b&gt;penal&lt;"));
        assert!(html.contains("&amp; multa contratual"));
        assert!(html.contains("&quot;ambas&quot;"));
        assert!(!html.contains("<b>penal</b>"));
    }
}
