use serde::{Deserialize, Serialize};
use vitalcheck_scoring::status::Tone;

/// An sRGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    pub const EMERALD_600: RgbColor = RgbColor(5, 150, 105);
    pub const SLATE_900: RgbColor = RgbColor(15, 23, 42);
    pub const SLATE_600: RgbColor = RgbColor(71, 85, 105);
    pub const SLATE_400: RgbColor = RgbColor(148, 163, 184);

    pub fn to_pdf(self) -> printpdf::Color {
        printpdf::Color::Rgb(printpdf::Rgb::new(
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
            None,
        ))
    }
}

/// Page geometry, type sizes and colours for the PDF report.
///
/// Every field has a default, so a config file only needs to name the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfStyles {
    /// A4 by default.
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    /// Applied on all four sides.
    pub margin_mm: f32,

    pub title_size: f32,
    pub subtitle_size: f32,
    pub section_size: f32,
    pub body_size: f32,
    pub small_size: f32,
    /// Baseline-to-baseline distance for body text.
    pub line_height_mm: f32,

    pub brand_name: String,
    pub report_title: String,
    pub website: String,

    pub accent: RgbColor,
    pub heading: RgbColor,
    pub body: RgbColor,
    pub muted: RgbColor,
}

impl Default for PdfStyles {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 20.0,
            title_size: 18.0,
            subtitle_size: 10.0,
            section_size: 11.0,
            body_size: 10.0,
            small_size: 8.0,
            line_height_mm: 5.0,
            brand_name: "Healthy Life Campaign".to_string(),
            report_title: "Health Risk Assessment Summary".to_string(),
            website: "www.healthylife.campaign".to_string(),
            accent: RgbColor::EMERALD_600,
            heading: RgbColor::SLATE_900,
            body: RgbColor::SLATE_600,
            muted: RgbColor::SLATE_400,
        }
    }
}

impl PdfStyles {
    pub fn content_width_mm(&self) -> f32 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    /// Text colour of a status badge.
    pub fn tone_color(&self, tone: Tone) -> RgbColor {
        match tone {
            Tone::Emerald => RgbColor(6, 95, 70),
            Tone::Amber => RgbColor(146, 64, 14),
            Tone::Rose => RgbColor(159, 18, 57),
            Tone::Sky => RgbColor(7, 89, 133),
            Tone::Slate => RgbColor::SLATE_600,
        }
    }
}
