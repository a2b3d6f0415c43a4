//! The fixed, ordered table of one-page optimization levels.
//!
//! Level 0 is the unmodified baseline. Levels 1..=5 are tried in order, each one
//! at least as aggressive as the previous:
//! 1. tighter spacing only
//! 2. + compact font family
//! 3. + 10pt base font and tighter spacing
//! 4. + 0.4in margins and tighter spacing
//! 5. maximum spacing reduction, margins at the 0.35in floor
//!
//! Every row respects `MIN_MARGIN_IN` and `MIN_FONT_SIZE_PT` by construction.

use std::fmt;

use serde::Serialize;

use crate::layout::style::{FontFamily, Length, Margins, Spacing, StyleConfiguration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum OptimizationLevel {
    Baseline,
    Spacing,
    CompactFont,
    SmallerFont,
    TightMargins,
    Maximum,
}

impl OptimizationLevel {
    /// Levels the one-page search walks through after the baseline, in order.
    pub const SEARCH_ORDER: [OptimizationLevel; 5] = [
        OptimizationLevel::Spacing,
        OptimizationLevel::CompactFont,
        OptimizationLevel::SmallerFont,
        OptimizationLevel::TightMargins,
        OptimizationLevel::Maximum,
    ];

    pub fn number(self) -> u8 {
        match self {
            OptimizationLevel::Baseline => 0,
            OptimizationLevel::Spacing => 1,
            OptimizationLevel::CompactFont => 2,
            OptimizationLevel::SmallerFont => 3,
            OptimizationLevel::TightMargins => 4,
            OptimizationLevel::Maximum => 5,
        }
    }

    pub fn style(self) -> &'static StyleConfiguration {
        &LEVEL_TABLE[self.number() as usize]
    }

    pub fn describe(self) -> &'static str {
        match self {
            OptimizationLevel::Baseline => "baseline",
            OptimizationLevel::Spacing => "tighter spacing",
            OptimizationLevel::CompactFont => "compact font",
            OptimizationLevel::SmallerFont => "10pt font",
            OptimizationLevel::TightMargins => "narrow margins",
            OptimizationLevel::Maximum => "maximum compaction",
        }
    }
}

impl From<OptimizationLevel> for u8 {
    fn from(level: OptimizationLevel) -> Self {
        level.number()
    }
}

impl fmt::Display for OptimizationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {} ({})", self.number(), self.describe())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Level table  (index = level number)
// ────────────────────────────────────────────────────────────────────────────

static LEVEL_TABLE: [StyleConfiguration; 6] = [
    // 0: baseline
    StyleConfiguration {
        font: FontFamily::ComputerModern,
        font_size_pt: 11,
        spacing: Spacing {
            section_before: Length::pt(-4.0),
            section_after: Length::pt(-5.0),
            item_gap: Length::pt(-2.0),
            subheading_gap: Length::pt(-7.0),
            list_gap: Length::pt(-5.0),
            line_stretch: 1.0,
        },
        margins: Margins::uniform(Length::inches(0.5)),
    },
    // 1: spacing only
    StyleConfiguration {
        font: FontFamily::ComputerModern,
        font_size_pt: 11,
        spacing: Spacing {
            section_before: Length::pt(-6.0),
            section_after: Length::pt(-6.0),
            item_gap: Length::pt(-3.0),
            subheading_gap: Length::pt(-8.0),
            list_gap: Length::pt(-6.0),
            line_stretch: 0.97,
        },
        margins: Margins::uniform(Length::inches(0.5)),
    },
    // 2: compact font
    StyleConfiguration {
        font: FontFamily::CormorantGaramond,
        font_size_pt: 11,
        spacing: Spacing {
            section_before: Length::pt(-6.0),
            section_after: Length::pt(-6.0),
            item_gap: Length::pt(-3.0),
            subheading_gap: Length::pt(-8.0),
            list_gap: Length::pt(-6.0),
            line_stretch: 0.97,
        },
        margins: Margins::uniform(Length::inches(0.5)),
    },
    // 3: 10pt
    StyleConfiguration {
        font: FontFamily::CormorantGaramond,
        font_size_pt: 10,
        spacing: Spacing {
            section_before: Length::pt(-7.0),
            section_after: Length::pt(-7.0),
            item_gap: Length::pt(-3.0),
            subheading_gap: Length::pt(-9.0),
            list_gap: Length::pt(-7.0),
            line_stretch: 0.95,
        },
        margins: Margins::uniform(Length::inches(0.5)),
    },
    // 4: narrow margins
    StyleConfiguration {
        font: FontFamily::CormorantGaramond,
        font_size_pt: 10,
        spacing: Spacing {
            section_before: Length::pt(-8.0),
            section_after: Length::pt(-8.0),
            item_gap: Length::pt(-4.0),
            subheading_gap: Length::pt(-10.0),
            list_gap: Length::pt(-8.0),
            line_stretch: 0.93,
        },
        margins: Margins::uniform(Length::inches(0.4)),
    },
    // 5: maximum
    StyleConfiguration {
        font: FontFamily::CormorantGaramond,
        font_size_pt: 10,
        spacing: Spacing {
            section_before: Length::pt(-10.0),
            section_after: Length::pt(-9.0),
            item_gap: Length::pt(-5.0),
            subheading_gap: Length::pt(-11.0),
            list_gap: Length::pt(-9.0),
            line_stretch: 0.90,
        },
        margins: Margins::uniform(Length::inches(0.35)),
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
