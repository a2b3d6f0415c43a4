//! Render-time typographic and layout knobs.
//!
//! A `StyleConfiguration` is a plain value: it is passed explicitly to the
//! renderer, never read from process state, and fully determines the preamble
//! emitted for a given resume. The fixed set of configurations the optimizer
//! may use lives in `layout::levels`.

use std::fmt;

use serde::Serialize;

use crate::layout::levels::OptimizationLevel;

/// Smallest margin any configuration may use, in inches.
pub const MIN_MARGIN_IN: f32 = 0.35;
/// Smallest base font size any configuration may use, in points.
pub const MIN_FONT_SIZE_PT: u8 = 10;

/// TeX points per inch.
const PT_PER_IN: f32 = 72.27;

// ────────────────────────────────────────────────────────────────────────────
// Lengths
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Pt,
    In,
}

/// A TeX length such as `-4pt` or `0.5in`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    pub const fn pt(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Pt,
        }
    }

    pub const fn inches(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::In,
        }
    }

    pub fn as_inches(&self) -> f32 {
        match self.unit {
            LengthUnit::In => self.value,
            LengthUnit::Pt => self.value / PT_PER_IN,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            LengthUnit::Pt => "pt",
            LengthUnit::In => "in",
        };
        write!(f, "{}{}", self.value, unit)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font family
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FontFamily {
    /// Default TeX font; no package needed.
    ComputerModern,
    /// Narrow old-style serif used once spacing alone is not enough.
    CormorantGaramond,
}

impl FontFamily {
    pub fn is_compact(self) -> bool {
        matches!(self, FontFamily::CormorantGaramond)
    }

    /// Preamble lines selecting this family.
    pub fn preamble(self) -> &'static str {
        match self {
            FontFamily::ComputerModern => "",
            FontFamily::CormorantGaramond => {
                "\\usepackage[T1]{fontenc}\n\\usepackage[default]{CormorantGaramond}\n"
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Spacing and margins
// ────────────────────────────────────────────────────────────────────────────

/// Named vertical spacing adjustments. Each becomes a preamble macro.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spacing {
    /// Space inserted above each section heading (`\sectionbefore`).
    pub section_before: Length,
    /// Space below the rule under each section heading (`\sectionafter`).
    pub section_after: Length,
    /// Space after each bullet item (`\itemgap`).
    pub item_gap: Length,
    /// Space after each subheading table (`\subheadinggap`).
    pub subheading_gap: Length,
    /// Space after each bullet list (`\listgap`).
    pub list_gap: Length,
    /// Baseline stretch factor for `\setstretch`.
    pub line_stretch: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub top: Length,
    pub bottom: Length,
    pub left: Length,
    pub right: Length,
}

impl Margins {
    pub const fn uniform(length: Length) -> Self {
        Self {
            top: length,
            bottom: length,
            left: length,
            right: length,
        }
    }

    /// The narrowest of the four margins, in inches.
    pub fn min_inches(&self) -> f32 {
        [self.top, self.bottom, self.left, self.right]
            .iter()
            .map(Length::as_inches)
            .fold(f32::INFINITY, f32::min)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Style configuration
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StyleConfiguration {
    pub font: FontFamily,
    pub font_size_pt: u8,
    pub spacing: Spacing,
    pub margins: Margins,
}

impl StyleConfiguration {
    /// The unoptimized style used for level 0.
    pub fn baseline() -> Self {
        *OptimizationLevel::Baseline.style()
    }

    /// True when the configuration respects the margin and font-size floors.
    pub fn within_floors(&self) -> bool {
        self.font_size_pt >= MIN_FONT_SIZE_PT && self.margins.min_inches() >= MIN_MARGIN_IN - 1e-6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_display() {
        assert_eq!(Length::pt(-4.0).to_string(), "-4pt");
        assert_eq!(Length::inches(0.5).to_string(), "0.5in");
        assert_eq!(Length::inches(0.35).to_string(), "0.35in");
    }

    #[test]
    fn test_length_conversion() {
        assert!((Length::pt(72.27).as_inches() - 1.0).abs() < 1e-5);
        assert_eq!(Length::inches(0.4).as_inches(), 0.4);
    }

    #[test]
    fn test_margins_min_inches_mixes_units() {
        let margins = Margins {
            top: Length::inches(0.5),
            bottom: Length::pt(36.135),
            left: Length::inches(0.6),
            right: Length::inches(0.45),
        };
        assert!((margins.min_inches() - 0.45).abs() < 1e-5);
    }

    #[test]
    fn test_within_floors_rejects_small_values() {
        let mut style = StyleConfiguration::baseline();
        assert!(style.within_floors());

        style.font_size_pt = 9;
        assert!(!style.within_floors());

        let mut style = StyleConfiguration::baseline();
        style.margins.left = Length::inches(0.3);
        assert!(!style.within_floors());
    }

    #[test]
    fn test_only_cormorant_is_compact() {
        assert!(!FontFamily::ComputerModern.is_compact());
        assert!(FontFamily::CormorantGaramond.is_compact());
        assert!(FontFamily::ComputerModern.preamble().is_empty());
        assert!(FontFamily::CormorantGaramond.preamble().contains("CormorantGaramond"));
    }
}
