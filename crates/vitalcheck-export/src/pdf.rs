//! PDF report via `printpdf`.
//!
//! Drawing happens in two passes. [`layout_report`] places every text run
//! and decides page breaks; [`generate_pdf`] then writes those runs with the
//! built-in Helvetica faces. Coordinates are millimetres from the bottom-left
//! corner of the page, as in PDF itself.

use std::io::BufWriter;

use printpdf::{BuiltinFont, Mm, PdfDocument};
use vitalcheck_scoring::status::Tone;

use crate::error::ExportError;
use crate::report::HealthReport;
use crate::styles::{PdfStyles, RgbColor};

const PT_TO_MM: f32 = 0.3528;
/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.5;
/// Space kept clear above the bottom margin for the footer.
const FOOTER_RESERVE_MM: f32 = 5.0;

const DISCLAIMER_HEADING: RgbColor = RgbColor(146, 64, 14);
const DISCLAIMER_TEXT: RgbColor = RgbColor(120, 53, 15);
const PRIVACY_TEXT: RgbColor = RgbColor(6, 95, 70);
const HEALTHY_HABITS_TEXT: RgbColor = RgbColor(6, 78, 59);

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x_mm: f32,
    pub y_mm: f32,
    pub size: f32,
    pub bold: bool,
    pub color: RgbColor,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub runs: Vec<TextRun>,
}

/// Place every line of the report, breaking pages as needed.
pub fn layout_report(report: &HealthReport, styles: &PdfStyles) -> Vec<PageLayout> {
    let mut layout = Layout::new(styles);
    let summary = &report.summary;

    layout.header(report);

    layout.section("Your Measurements");
    for row in &summary.measurements {
        layout.metric_row(
            &row.name,
            row.value_or_placeholder(),
            row.badge_label(),
            row.tone(),
        );
    }
    layout.advance(8.0);

    layout.section("Risk Assessment");
    layout.metric_row(
        "CBAC Score",
        &summary.cbac.total.to_string(),
        summary.cbac.tier.label(),
        summary.cbac.tier.tone(),
    );
    layout.advance(8.0);

    if !summary.key_advice.is_empty() {
        layout.section("Key Recommendations");
        layout.bullets(&summary.key_advice);
        layout.advance(4.0);
    }

    if !summary.focus_areas.is_empty() {
        layout.section("Your Focus Areas");
        for module in &summary.focus_areas {
            layout.subheading(&module.title);
            layout.bullets(&module.steps);
            if let Some(note) = &module.note {
                layout.paragraph(note, styles.small_size, styles.muted);
                layout.advance(2.0);
            }
        }
        layout.advance(4.0);
    } else if let Some(note) = &summary.healthy_habits {
        layout.paragraph(note, styles.body_size, HEALTHY_HABITS_TEXT);
        layout.advance(6.0);
    }

    if !summary.diet_tips.is_empty() || !summary.sugar_tips.is_empty() {
        layout.section("Diet Guidance");
        layout.bullets(&summary.diet_tips);
        if !summary.sugar_tips.is_empty() {
            layout.advance(2.0);
            layout.ensure_space(styles.line_height_mm * 2.0);
            layout.text(
                "For blood sugar management:",
                4.0,
                styles.small_size + 1.0,
                true,
                styles.body,
            );
            layout.advance(6.0);
            layout.bullets(&summary.sugar_tips);
        }
        layout.advance(4.0);
    }

    if !summary.activity_tips.is_empty() {
        layout.section("Activity Guidance");
        layout.bullets(&summary.activity_tips);
        layout.advance(4.0);
    }

    layout.advance(4.0);
    layout.notice(
        "Important Disclaimer",
        vitalcheck_scoring::guidance::DISCLAIMER,
        styles.small_size,
        DISCLAIMER_HEADING,
        DISCLAIMER_TEXT,
    );
    layout.advance(6.0);
    layout.notice(
        "Privacy",
        vitalcheck_scoring::guidance::PRIVACY_NOTE,
        styles.small_size - 1.0,
        PRIVACY_TEXT,
        PRIVACY_TEXT,
    );

    layout.finish(report)
}

/// Generate the PDF report. Returns the PDF bytes.
pub fn generate_pdf(report: &HealthReport, styles: &PdfStyles) -> Result<Vec<u8>, ExportError> {
    let pages = layout_report(report, styles);
    let (width, height) = (Mm(styles.page_width_mm), Mm(styles.page_height_mm));

    let (doc, page1, layer1) = PdfDocument::new(&styles.report_title, width, height, "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(page1).get_layer(layer1)
        } else {
            let (page_index, layer_index) = doc.add_page(width, height, "Layer 1");
            doc.get_page(page_index).get_layer(layer_index)
        };

        for run in &page.runs {
            layer.set_fill_color(run.color.to_pdf());
            let face = if run.bold { &bold } else { &font };
            layer.use_text(run.text.as_str(), run.size, Mm(run.x_mm), Mm(run.y_mm), face);
        }
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::Pdf(format!("save error: {e}")))?;
    let bytes = buf
        .into_inner()
        .map_err(|e| ExportError::Pdf(format!("buffer error: {e}")))?;

    tracing::info!(pages = pages.len(), bytes = bytes.len(), "generated PDF report");
    Ok(bytes)
}

/// Greedy word wrap on a character budget.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Characters of `size`-point Helvetica that fit in `width_mm`.
fn chars_per_line(width_mm: f32, size: f32) -> usize {
    let glyph_mm = size * PT_TO_MM * AVG_GLYPH_EM;
    ((width_mm / glyph_mm).floor() as usize).max(10)
}

fn approx_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * PT_TO_MM * AVG_GLYPH_EM
}

struct Layout<'a> {
    styles: &'a PdfStyles,
    pages: Vec<PageLayout>,
    /// Baseline of the next line on the current page.
    y: f32,
}

impl<'a> Layout<'a> {
    fn new(styles: &'a PdfStyles) -> Self {
        Self {
            styles,
            pages: vec![PageLayout::default()],
            y: styles.page_height_mm - styles.margin_mm,
        }
    }

    fn top(&self) -> f32 {
        self.styles.page_height_mm - self.styles.margin_mm
    }

    fn bottom(&self) -> f32 {
        self.styles.margin_mm + FOOTER_RESERVE_MM
    }

    fn advance(&mut self, mm: f32) {
        self.y -= mm;
    }

    /// Start a new page unless `height_mm` still fits above the footer.
    fn ensure_space(&mut self, height_mm: f32) {
        if self.y - height_mm < self.bottom() {
            self.pages.push(PageLayout::default());
            self.y = self.top();
        }
    }

    fn text(&mut self, text: &str, x_offset_mm: f32, size: f32, bold: bool, color: RgbColor) {
        let run = TextRun {
            text: text.to_string(),
            x_mm: self.styles.margin_mm + x_offset_mm,
            y_mm: self.y,
            size,
            bold,
            color,
        };
        if let Some(page) = self.pages.last_mut() {
            page.runs.push(run);
        }
    }

    fn header(&mut self, report: &HealthReport) {
        let styles = self.styles;
        let page_height = styles.page_height_mm;

        self.y = page_height - 15.0;
        self.text(&styles.brand_name, 0.0, styles.title_size, true, styles.accent);
        self.y = page_height - 23.0;
        self.text(&styles.report_title, 0.0, styles.subtitle_size, false, styles.heading);
        self.y = page_height - 29.0;
        self.text(&report.display_date(), 0.0, styles.small_size + 1.0, false, styles.body);

        self.y = page_height - 45.0;
    }

    fn section(&mut self, title: &str) {
        let styles = self.styles;
        // Keep a heading with at least two lines of its content.
        self.ensure_space(styles.line_height_mm * 4.0);
        self.text(title, 0.0, styles.section_size, true, styles.heading);
        self.advance(9.0);
    }

    fn subheading(&mut self, title: &str) {
        let styles = self.styles;
        self.ensure_space(styles.line_height_mm * 3.0);
        self.text(title, 4.0, styles.body_size, true, styles.heading);
        self.advance(styles.line_height_mm + 1.0);
    }

    fn paragraph(&mut self, body: &str, size: f32, color: RgbColor) {
        let styles = self.styles;
        let lines = wrap_text(body, chars_per_line(styles.content_width_mm() - 8.0, size));
        let line_height = size * PT_TO_MM * 1.5;
        self.ensure_space(line_height * lines.len() as f32);
        for line in &lines {
            self.text(line, 4.0, size, false, color);
            self.advance(line_height);
        }
    }

    fn metric_row(&mut self, label: &str, value: &str, status: &str, tone: Tone) {
        let styles = self.styles;
        self.ensure_space(styles.line_height_mm * 2.0);
        self.text(label, 4.0, styles.body_size, false, styles.body);
        self.text(value, 70.0, styles.body_size, true, styles.heading);
        let badge_offset = styles.content_width_mm() - 35.0;
        self.text(status, badge_offset, styles.small_size, true, styles.tone_color(tone));
        self.advance(8.0);
    }

    fn bullets(&mut self, items: &[String]) {
        let styles = self.styles;
        let max_chars = chars_per_line(styles.content_width_mm() - 8.0, styles.body_size);

        for item in items {
            let lines = wrap_text(&format!("- {item}"), max_chars);
            self.ensure_space(styles.line_height_mm * lines.len() as f32);
            for (i, line) in lines.iter().enumerate() {
                let indent = if i == 0 { 4.0 } else { 7.0 };
                self.text(line, indent, styles.body_size, false, styles.body);
                self.advance(styles.line_height_mm);
            }
            self.advance(2.0);
        }
    }

    fn notice(&mut self, title: &str, body: &str, size: f32, title_color: RgbColor, body_color: RgbColor) {
        let styles = self.styles;
        let lines = wrap_text(body, chars_per_line(styles.content_width_mm() - 8.0, size));
        let line_height = size * PT_TO_MM * 1.5;
        self.ensure_space(7.0 + line_height * lines.len() as f32);

        self.text(title, 4.0, size + 1.0, true, title_color);
        self.advance(6.0);
        self.paragraph(body, size, body_color);
    }

    /// Stamp the footer on every page and hand back the pages.
    fn finish(self, report: &HealthReport) -> Vec<PageLayout> {
        let styles = self.styles;
        let footer_y = styles.margin_mm - 5.0;
        let size = styles.small_size;
        let copyright = format!("(c) {} {}", report.generated_on.year(), styles.brand_name);
        let website_x = styles.page_width_mm - styles.margin_mm - approx_text_width(&styles.website, size);

        let mut pages = self.pages;
        for page in &mut pages {
            page.runs.push(TextRun {
                text: copyright.clone(),
                x_mm: styles.margin_mm,
                y_mm: footer_y,
                size,
                bold: false,
                color: styles.muted,
            });
            page.runs.push(TextRun {
                text: styles.website.clone(),
                x_mm: website_x,
                y_mm: footer_y,
                size,
                bold: false,
                color: styles.muted,
            });
        }
        pages
    }
}
