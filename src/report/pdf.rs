use std::path::Path;

use anyhow::{Context, Result};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerIndex, PdfLayerReference, PdfPageIndex, Point, Polygon, Rgb,
};
use printpdf::path::{PaintMode, WindingOrder};

use crate::clause::catalogue::CATALOGUE;
use crate::models::{AnalysisResult, ClauseHit, RiskTier};

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 18.0;
const COVER_HDR_H: f32 = 72.0;

// ── Palette ──────────────────────────────────────────────────────────────────
const BG:           (f32, f32, f32) = (1.00, 1.00, 1.00);
const PANEL:        (f32, f32, f32) = (1.00, 1.00, 1.00);
const PANEL_ALT:    (f32, f32, f32) = (0.99, 0.96, 0.96);
const PANEL_BORDER: (f32, f32, f32) = (0.90, 0.86, 0.86);
const ACCENT_RED:   (f32, f32, f32) = (0.78, 0.16, 0.16); // #c62828
const ACCENT_DARK:  (f32, f32, f32) = (0.72, 0.11, 0.11); // #b71c1c
const TEXT_PRI:     (f32, f32, f32) = (0.07, 0.08, 0.14);
const TEXT_SEC:     (f32, f32, f32) = (0.33, 0.43, 0.48);
const TEXT_MUT:     (f32, f32, f32) = (0.47, 0.56, 0.61);
const WHITE:        (f32, f32, f32) = (1.00, 1.00, 1.00);
const WHITE_DIM:    (f32, f32, f32) = (1.00, 0.85, 0.85);

const HIGH_BG: (f32, f32, f32) = (1.00, 0.92, 0.93);
const HIGH_FG: (f32, f32, f32) = (0.83, 0.18, 0.18); // #d32f2f
const MED_BG:  (f32, f32, f32) = (1.00, 0.95, 0.88);
const MED_FG:  (f32, f32, f32) = (0.96, 0.49, 0.00); // #f57c00
const LOW_BG:  (f32, f32, f32) = (0.91, 0.96, 0.91);
const LOW_FG:  (f32, f32, f32) = (0.18, 0.49, 0.20); // #2e7d32

const R_PANEL: f32 = 2.5;
const R_BADGE: f32 = 1.5;

// ── Tier summary table layout ────────────────────────────────────────────────
const C1_X: f32 = MARGIN;
const C2_X: f32 = MARGIN + 40.0;
const C3_X: f32 = MARGIN + 112.0;
const T_END: f32 = PAGE_W - MARGIN;

const HDR_H: f32 = 9.0;
const LINE_H: f32 = 4.8;
const ROW_PAD: f32 = 4.5;

const BADGE_W: f32 = 33.0;
const BADGE_H: f32 = 6.5;
const DOT_SIZE: f32 = 2.5;

const DESC_WRAP: usize = 36;
const CAT_WRAP: usize = 30;

// ── Public entry point ───────────────────────────────────────────────────────

/// Render a PDF report: cover page → tier summary → detected clauses.
pub fn render(result: &AnalysisResult, source: &str, output_path: &Path) -> Result<()> {
    let bytes = render_to_bytes(result, source)?;
    std::fs::write(output_path, &bytes)
        .with_context(|| format!("Failed to write PDF to {}", output_path.display()))?;

    eprintln!("PDF report written to: {}", output_path.display());
    Ok(())
}

pub fn render_to_bytes(result: &AnalysisResult, source: &str) -> Result<Vec<u8>> {
    let doc = PdfDocument::empty("Legal Clause Report");

    add_cover_page(&doc, result, source)?;
    add_tier_summary_page(&doc, result)?;
    if result.total_count > 0 {
        add_clause_pages(&doc, result)?;
    }

    Ok(doc.save_to_bytes()?)
}

// ── Cover page ───────────────────────────────────────────────────────────────

fn add_cover_page(doc: &PdfDocumentReference, result: &AnalysisResult, source: &str) -> Result<()> {
    let (page_idx, layer_idx) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Cover");
    let layer = doc.get_page(page_idx).get_layer(layer_idx);

    let font_b = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let font_r = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    fill_rect(&layer, 0.0, 0.0, PAGE_W, PAGE_H, BG);

    let hdr_bot = PAGE_H - COVER_HDR_H;
    fill_gradient_h(&layer, 0.0, hdr_bot, PAGE_W, COVER_HDR_H, ACCENT_RED, ACCENT_DARK, 28);

    set_color(&layer, WHITE_DIM);
    layer.use_text(
        format!("legal-lens v{}", env!("CARGO_PKG_VERSION")),
        7.5, Mm(PAGE_W - MARGIN - 30.0), Mm(PAGE_H - 10.5), &font_r,
    );

    set_color(&layer, WHITE);
    layer.use_text("Legal Clause", 28.0, Mm(MARGIN), Mm(PAGE_H - 26.0), &font_b);
    set_color(&layer, WHITE_DIM);
    layer.use_text("Risk Report", 28.0, Mm(MARGIN), Mm(PAGE_H - 41.0), &font_b);

    // Document chip
    let chip_y = hdr_bot - 18.0;
    let chip_h = 12.0f32;
    let chip_w = 120.0f32;
    fill_rounded_rect(&layer, MARGIN, chip_y, chip_w, chip_h, R_BADGE, PANEL);
    stroke_rounded_rect(&layer, MARGIN, chip_y, chip_w, chip_h, R_BADGE, PANEL_BORDER);
    fill_rect(&layer, MARGIN, chip_y, 2.5, chip_h, ACCENT_RED);

    set_color(&layer, TEXT_MUT);
    layer.use_text("DOCUMENT", 6.0, Mm(MARGIN + 5.0), Mm(chip_y + chip_h - 3.8), &font_b);
    set_color(&layer, TEXT_PRI);
    layer.use_text(truncate(source, 40), 9.5, Mm(MARGIN + 5.0), Mm(chip_y + 2.8), &font_b);

    let rule_y = chip_y - 10.0;
    draw_hline(&layer, MARGIN, PAGE_W - MARGIN, rule_y, PANEL_BORDER);
    set_color(&layer, TEXT_MUT);
    layer.use_text("OVERVIEW", 6.5, Mm(MARGIN), Mm(rule_y - 7.0), &font_b);

    // Stat cards
    let card_y = rule_y - 42.0;
    let card_h = 26.0f32;
    let gap = 4.0f32;
    let card_w = (T_END - MARGIN - gap * 3.0) / 4.0;

    let cards: [(&str, String, (f32, f32, f32)); 4] = [
        ("CLAUSES", result.total_count.to_string(), ACCENT_RED),
        ("HIGH", result.count_tier(RiskTier::High).to_string(), HIGH_FG),
        ("MEDIUM", result.count_tier(RiskTier::Medium).to_string(), MED_FG),
        ("LOW", result.count_tier(RiskTier::Low).to_string(), LOW_FG),
    ];

    for (i, (label, value, accent)) in cards.iter().enumerate() {
        let cx = MARGIN + (card_w + gap) * i as f32;
        draw_stat_card(&layer, cx, card_y, card_w, card_h, label, value, *accent, &font_r, &font_b);
    }

    let verdict_y = card_y - 14.0;
    set_color(&layer, TEXT_PRI);
    layer.use_text(super::summary_line(result), 11.0, Mm(MARGIN), Mm(verdict_y), &font_b);

    // Disclaimer + footer
    set_color(&layer, TEXT_SEC);
    layer.use_text(
        "Automated keyword scan. Not a substitute for advice from a qualified lawyer.",
        8.0, Mm(MARGIN), Mm(30.0), &font_r,
    );
    draw_footer(&layer, &font_r);

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_stat_card(
    layer: &PdfLayerReference,
    x: f32, y: f32, w: f32, h: f32,
    label: &str,
    value: &str,
    accent: (f32, f32, f32),
    font_r: &IndirectFontRef,
    font_b: &IndirectFontRef,
) {
    fill_rounded_rect(layer, x, y, w, h, R_BADGE, PANEL);
    stroke_rounded_rect(layer, x, y, w, h, R_BADGE, PANEL_BORDER);
    fill_rect(layer, x, y + h - 2.0, w, 2.0, accent);

    set_color(layer, accent);
    layer.use_text(value, 20.0, Mm(x + 5.0), Mm(y + h * 0.38), font_b);

    set_color(layer, TEXT_MUT);
    layer.use_text(label, 6.5, Mm(x + 5.0), Mm(y + 3.5), font_r);
}

// ── Tier summary page ────────────────────────────────────────────────────────

struct RenderedRow {
    tier: RiskTier,
    desc_lines: Vec<String>,
    cat_lines: Vec<String>,
    height: f32,
}

fn add_tier_summary_page(doc: &PdfDocumentReference, result: &AnalysisResult) -> Result<()> {
    let (page_idx, layer_idx) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Risk Tiers");
    let layer = doc.get_page(page_idx).get_layer(layer_idx);

    let font_b = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let font_r = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    fill_rect(&layer, 0.0, 0.0, PAGE_W, PAGE_H, BG);
    fill_gradient_h(&layer, 0.0, PAGE_H - 2.5, PAGE_W, 2.5, ACCENT_RED, ACCENT_DARK, 21);

    let rows: Vec<RenderedRow> = RiskTier::ALL.iter().map(|&tier| {
        let found: Vec<String> = result.hits_in_tier(tier)
            .map(|h| h.category.id().to_string())
            .collect();
        let monitored = CATALOGUE.iter().filter(|d| d.risk == tier).count();
        let desc_lines = wrap_text(tier_meaning(tier), DESC_WRAP);
        let cat_lines = format_found_list(&found, monitored, CAT_WRAP);
        let n = desc_lines.len().max(cat_lines.len()).max(2) as f32;
        RenderedRow { tier, desc_lines, cat_lines, height: n * LINE_H + ROW_PAD * 2.0 }
    }).collect();

    const TABLE_TOP: f32 = 258.0;
    let total_h = HDR_H + rows.iter().map(|r| r.height).sum::<f32>();
    let table_bot = TABLE_TOP - total_h;
    let table_w = T_END - C1_X;

    set_color(&layer, TEXT_PRI);
    layer.use_text("Risk Tiers", 20.0, Mm(MARGIN), Mm(278.5), &font_b);
    set_color(&layer, TEXT_SEC);
    layer.use_text(
        "Monitored clause categories grouped by risk tier",
        9.0, Mm(MARGIN), Mm(271.5), &font_r,
    );
    draw_hline(&layer, MARGIN, PAGE_W - MARGIN, 267.5, PANEL_BORDER);

    fill_rounded_rect(&layer, C1_X, table_bot, table_w, total_h, R_PANEL, PANEL);
    stroke_rounded_rect(&layer, C1_X, table_bot, table_w, total_h, R_PANEL, PANEL_BORDER);

    set_color(&layer, TEXT_SEC);
    layer.use_text("RISK TIER",     7.0, Mm(C1_X + 4.0), Mm(TABLE_TOP - 6.2), &font_b);
    layer.use_text("WHAT IT MEANS", 7.0, Mm(C2_X + 2.0), Mm(TABLE_TOP - 6.2), &font_b);
    layer.use_text("FOUND",         7.0, Mm(C3_X + 2.0), Mm(TABLE_TOP - 6.2), &font_b);
    draw_hline(&layer, C1_X + R_PANEL, T_END - R_PANEL, TABLE_TOP - HDR_H, PANEL_BORDER);

    let mut y_top = TABLE_TOP - HDR_H;

    for (i, row) in rows.iter().enumerate() {
        let y_bot = y_top - row.height;
        let (fg, bg) = tier_colors(row.tier);

        if i % 2 == 1 {
            fill_rect(&layer, C1_X, y_bot, table_w, row.height, PANEL_ALT);
        }

        let badge_x = C1_X + 3.0;
        let badge_y = y_top - ROW_PAD - BADGE_H;
        fill_rounded_rect(&layer, badge_x, badge_y, BADGE_W, BADGE_H, R_BADGE, bg);
        fill_rounded_rect(&layer,
            badge_x + 2.5, badge_y + (BADGE_H - DOT_SIZE) / 2.0,
            DOT_SIZE, DOT_SIZE, DOT_SIZE / 2.0, fg);
        set_color(&layer, fg);
        layer.use_text(tier_label(row.tier), 8.0, Mm(badge_x + 7.5), Mm(badge_y + 1.5), &font_b);

        set_color(&layer, TEXT_SEC);
        for (j, line) in row.desc_lines.iter().enumerate() {
            let ly = y_top - ROW_PAD - (j as f32 + 0.9) * LINE_H;
            layer.use_text(line.as_str(), 8.0, Mm(C2_X + 2.0), Mm(ly), &font_r);
        }

        // Category ids first (muted), count line last (bold)
        let last = row.cat_lines.len().saturating_sub(1);
        for (j, line) in row.cat_lines.iter().enumerate() {
            let ly = y_top - ROW_PAD - (j as f32 + 0.9) * LINE_H;
            if j == last {
                set_color(&layer, TEXT_PRI);
                layer.use_text(line.as_str(), 9.0, Mm(C3_X + 2.0), Mm(ly), &font_b);
            } else {
                set_color(&layer, TEXT_MUT);
                layer.use_text(line.as_str(), 7.0, Mm(C3_X + 2.0), Mm(ly), &font_r);
            }
        }

        if i < rows.len() - 1 {
            draw_hline(&layer, C1_X + R_PANEL, T_END - R_PANEL, y_bot, PANEL_BORDER);
        }
        y_top = y_bot;
    }

    draw_footer(&layer, &font_r);
    Ok(())
}

// ── Detected clause pages ────────────────────────────────────────────────────

fn add_clause_pages(doc: &PdfDocumentReference, result: &AnalysisResult) -> Result<()> {
    let font_b = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let font_r = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    const FIRST_Y: f32 = 268.0;
    const BOT_MARGIN: f32 = 28.0;
    const SENTENCE_WRAP: usize = 88;
    const SENTENCE_LINE_H: f32 = 4.2;
    const CARD_BASE_H: f32 = 17.0;
    const CARD_GAP: f32 = 4.0;

    let mut cur_y = FIRST_Y;
    let mut page_state: Option<(PdfPageIndex, PdfLayerIndex)> = None;
    let mut page_num: u32 = 0;

    for hit in &result.hits {
        let sentence_lines = wrap_text(&format!("\"{}\"", hit.matched_sentence), SENTENCE_WRAP);
        let card_h = CARD_BASE_H + sentence_lines.len() as f32 * SENTENCE_LINE_H;

        let (pi, li) = match page_state.filter(|_| cur_y - card_h >= BOT_MARGIN) {
            Some(state) => state,
            None => {
                page_num += 1;
                let state = add_clause_page(doc, page_num, &font_r, &font_b);
                cur_y = FIRST_Y;
                page_state = Some(state);
                state
            }
        };
        let layer = doc.get_page(pi).get_layer(li);

        draw_clause_card(&layer, hit, &sentence_lines, cur_y, card_h, SENTENCE_LINE_H, &font_r, &font_b);
        cur_y -= card_h + CARD_GAP;
    }

    Ok(())
}

fn add_clause_page(
    doc: &PdfDocumentReference,
    page_num: u32,
    font_r: &IndirectFontRef,
    font_b: &IndirectFontRef,
) -> (PdfPageIndex, PdfLayerIndex) {
    let (pi, li) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Clauses");
    let layer = doc.get_page(pi).get_layer(li);

    fill_rect(&layer, 0.0, 0.0, PAGE_W, PAGE_H, BG);
    fill_gradient_h(&layer, 0.0, PAGE_H - 2.5, PAGE_W, 2.5, ACCENT_RED, ACCENT_DARK, 21);

    set_color(&layer, TEXT_PRI);
    layer.use_text("Detected Clauses", 14.0, Mm(MARGIN), Mm(282.5), font_b);
    set_color(&layer, TEXT_MUT);
    layer.use_text(
        format!("Page {}", page_num),
        8.0, Mm(PAGE_W - MARGIN - 14.0), Mm(283.0), font_r,
    );
    draw_hline(&layer, MARGIN, PAGE_W - MARGIN, 277.5, PANEL_BORDER);
    draw_footer(&layer, font_r);

    (pi, li)
}

#[allow(clippy::too_many_arguments)]
fn draw_clause_card(
    layer: &PdfLayerReference,
    hit: &ClauseHit,
    sentence_lines: &[String],
    top: f32,
    h: f32,
    line_h: f32,
    font_r: &IndirectFontRef,
    font_b: &IndirectFontRef,
) {
    let (fg, bg) = tier_colors(hit.risk);
    let w = T_END - MARGIN;
    let bottom = top - h;

    fill_rounded_rect(layer, MARGIN, bottom, w, h, R_PANEL, PANEL);
    stroke_rounded_rect(layer, MARGIN, bottom, w, h, R_PANEL, PANEL_BORDER);
    fill_rect(layer, MARGIN, bottom, 2.5, h, fg);

    // Tier badge, right-aligned on the first line
    let badge_x = T_END - 4.0 - BADGE_W;
    let badge_y = top - 3.0 - BADGE_H;
    fill_rounded_rect(layer, badge_x, badge_y, BADGE_W, BADGE_H, R_BADGE, bg);
    set_color(layer, fg);
    layer.use_text(tier_label(hit.risk), 7.0, Mm(badge_x + 4.0), Mm(badge_y + 1.6), font_b);

    set_color(layer, fg);
    layer.use_text(truncate(&hit.description, 70), 9.5, Mm(MARGIN + 6.0), Mm(top - 7.0), font_b);

    set_color(layer, TEXT_SEC);
    for (j, line) in sentence_lines.iter().enumerate() {
        let ly = top - 12.5 - j as f32 * line_h;
        layer.use_text(line.as_str(), 8.0, Mm(MARGIN + 6.0), Mm(ly), font_r);
    }

    set_color(layer, TEXT_MUT);
    layer.use_text(
        format!("Keyword: {}   Category: {}", hit.matched_keyword, hit.category),
        7.0, Mm(MARGIN + 6.0), Mm(bottom + 3.0), font_r,
    );
}

// ── Tier helpers ─────────────────────────────────────────────────────────────

fn tier_colors(tier: RiskTier) -> ((f32, f32, f32), (f32, f32, f32)) {
    match tier {
        RiskTier::High => (HIGH_FG, HIGH_BG),
        RiskTier::Medium => (MED_FG, MED_BG),
        RiskTier::Low => (LOW_FG, LOW_BG),
    }
}

fn tier_label(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::High => "HIGH RISK",
        RiskTier::Medium => "MEDIUM RISK",
        RiskTier::Low => "LOW RISK",
    }
}

fn tier_meaning(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::High => "Open-ended liability or the right to end the contract without consent.",
        RiskTier::Medium => "Penalties, confidentiality or exclusivity obligations that bind the parties.",
        RiskTier::Low => "Procedural terms such as the forum chosen for disputes.",
    }
}

fn draw_footer(layer: &PdfLayerReference, font_r: &IndirectFontRef) {
    draw_hline(layer, MARGIN, PAGE_W - MARGIN, 22.0, PANEL_BORDER);
    set_color(layer, TEXT_MUT);
    layer.use_text(
        format!("Generated by legal-lens v{}", env!("CARGO_PKG_VERSION")),
        7.5, Mm(MARGIN), Mm(15.0), font_r,
    );
}

// ── Drawing helpers ──────────────────────────────────────────────────────────

fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb { r, g, b, icc_profile: None })
}

fn set_color(layer: &PdfLayerReference, color: (f32, f32, f32)) {
    layer.set_fill_color(rgb(color));
}

fn fill_polygon(layer: &PdfLayerReference, ring: Vec<(Point, bool)>, color: (f32, f32, f32)) {
    layer.set_fill_color(rgb(color));
    layer.add_polygon(Polygon {
        rings: vec![ring],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
    layer.set_fill_color(rgb((0.0, 0.0, 0.0)));
}

fn fill_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32, color: (f32, f32, f32)) {
    let ring = vec![
        (Point::new(Mm(x),     Mm(y)),     false),
        (Point::new(Mm(x + w), Mm(y)),     false),
        (Point::new(Mm(x + w), Mm(y + h)), false),
        (Point::new(Mm(x),     Mm(y + h)), false),
    ];
    fill_polygon(layer, ring, color);
}

/// Clockwise ring approximating a rounded rectangle, 8 segments per corner.
fn rounded_rect_ring(x: f32, y: f32, w: f32, h: f32, r: f32) -> Vec<(Point, bool)> {
    let r = r.min(w / 2.0).min(h / 2.0);
    const SEGS: usize = 8;
    let corners = [
        (x + w - r, y + r,     270.0f32, 360.0f32),
        (x + w - r, y + h - r, 0.0f32,   90.0f32),
        (x + r,     y + h - r, 90.0f32,  180.0f32),
        (x + r,     y + r,     180.0f32, 270.0f32),
    ];

    corners
        .iter()
        .flat_map(|&(cx, cy, start, end)| {
            (0..=SEGS).map(move |i| {
                let angle = (start + (end - start) * i as f32 / SEGS as f32).to_radians();
                (Point::new(Mm(cx + r * angle.cos()), Mm(cy + r * angle.sin())), false)
            })
        })
        .collect()
}

fn fill_rounded_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32,
                     r: f32, color: (f32, f32, f32)) {
    fill_polygon(layer, rounded_rect_ring(x, y, w, h, r), color);
}

fn stroke_rounded_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32,
                       r: f32, color: (f32, f32, f32)) {
    layer.set_outline_color(rgb(color));
    layer.set_outline_thickness(0.4);
    layer.add_polygon(Polygon {
        rings: vec![rounded_rect_ring(x, y, w, h, r)],
        mode: PaintMode::Stroke,
        winding_order: WindingOrder::NonZero,
    });
    layer.set_outline_color(rgb((0.0, 0.0, 0.0)));
    layer.set_outline_thickness(1.0);
}

fn draw_hline(layer: &PdfLayerReference, x1: f32, x2: f32, y: f32, color: (f32, f32, f32)) {
    layer.set_outline_color(rgb(color));
    layer.set_outline_thickness(0.3);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(x1), Mm(y)), false),
            (Point::new(Mm(x2), Mm(y)), false),
        ],
        is_closed: false,
    });
    layer.set_outline_color(rgb((0.0, 0.0, 0.0)));
    layer.set_outline_thickness(1.0);
}

/// Left-to-right gradient drawn as `steps` vertical strips.
#[allow(clippy::too_many_arguments)]
fn fill_gradient_h(
    layer: &PdfLayerReference,
    x: f32, y: f32, w: f32, h: f32,
    from: (f32, f32, f32),
    to: (f32, f32, f32),
    steps: usize,
) {
    let step_w = w / steps as f32;
    for i in 0..steps {
        let t = i as f32 / (steps - 1).max(1) as f32;
        let color = (
            from.0 + (to.0 - from.0) * t,
            from.1 + (to.1 - from.1) * t,
            from.2 + (to.2 - from.2) * t,
        );
        // strips overlap to hide rounding gaps
        fill_rect(layer, x + i as f32 * step_w, y, step_w + 0.6, h, color);
    }
}

// ── Text helpers ─────────────────────────────────────────────────────────────

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max - 1).collect();
        format!("{}…", head)
    } else {
        s.to_string()
    }
}

/// Greedy word wrap; widths are counted in characters.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len > max_chars {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Found category ids wrapped into lines, then "<found> of <monitored> found".
fn format_found_list(found: &[String], monitored: usize, max_chars: usize) -> Vec<String> {
    let mut lines = if found.is_empty() {
        vec!["none".to_string()]
    } else {
        wrap_text(&found.join(", "), max_chars)
    };
    lines.push(format!("{} of {} found", found.len(), monitored));
    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::analysis::DocumentAnalyzer;

    #[test]
    fn test_wrap_counts_characters() {
        assert_eq!(
            wrap_text("indenização rescisão unilateral", 20),
            vec!["indenização rescisão".to_string(), "unilateral".to_string()]
        );
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("confidencialidade", 8), "confide…");
        assert_eq!(truncate("sigilo", 8), "sigilo");
    }

    #[test]
    fn test_found_list() {
        assert_eq!(format_found_list(&[], 3, 30), vec!["none", "0 of 3 found"]);
        assert_eq!(
            format_found_list(&["multa_contratual".to_string()], 3, 30),
            vec!["multa_contratual", "1 of 3 found"]
        );
    }

    #[test]
    fn test_render_writes_pdf() {
        let long_doc = "Cabe indenização por quaisquer danos causados. ".repeat(40)
            + "Fica eleito o foro competente da comarca de Campinas.";
        let result = DocumentAnalyzer::default().analyze(&long_doc).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.pdf");
        render(&result, "contrato.txt", &out).unwrap();

        let bytes = std::fs::read(&out).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_empty_result() {
        let bytes = render_to_bytes(&AnalysisResult::new(Vec::new()), "vazio.txt").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
