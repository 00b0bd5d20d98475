use serde::Serialize;
use strum::{AsRefStr, Display as StrumDisplay, EnumCount, EnumIter, IntoStaticStr};

/// Value Object - identifier of one architecture component.
///
/// Declaration order is display order: the main detector first, then the
/// three secondary components left to right.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    StrumDisplay,
    EnumIter,
    EnumCount,
    AsRefStr,
    IntoStaticStr,
    Serialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum ComponentId {
    Detector,
    MarketStructure,
    Momentum,
    Strategy,
}

impl ComponentId {
    /// Stable key used in the DOM (`data-component`) and in JSON exports.
    pub fn key(&self) -> &'static str {
        (*self).into()
    }

    pub fn role(&self) -> ComponentRole {
        match self {
            Self::Detector => ComponentRole::Main,
            Self::MarketStructure | Self::Momentum | Self::Strategy => ComponentRole::Secondary,
        }
    }

    pub fn is_main(&self) -> bool {
        self.role() == ComponentRole::Main
    }

    pub fn icon(&self) -> Icon {
        match self {
            Self::Detector => Icon::Box,
            Self::MarketStructure => Icon::GitBranch,
            Self::Momentum => Icon::Activity,
            Self::Strategy => Icon::BarChart3,
        }
    }
}

/// Value Object - where a card sits in the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ComponentRole {
    Main,
    Secondary,
}

/// Value Object - inline SVG glyphs (24x24 stroke icons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    Box,
    GitBranch,
    Activity,
    BarChart3,
    /// Sub-component bullet
    Circle,
    /// Key-feature bullet
    ChevronRight,
}

impl Icon {
    /// Path data for the glyph, drawn with `stroke="currentColor"` and no fill.
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Self::Box => &[
                "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z",
                "m3.3 7 8.7 5 8.7-5",
                "M12 22V12",
            ],
            Self::GitBranch => &[
                "M6 3v12",
                "M21 6a3 3 0 1 1-6 0a3 3 0 1 1 6 0",
                "M9 18a3 3 0 1 1-6 0a3 3 0 1 1 6 0",
                "M18 9a9 9 0 0 1-9 9",
            ],
            Self::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
            Self::BarChart3 => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            Self::Circle => &["M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0"],
            Self::ChevronRight => &["m9 18 6-6-6-6"],
        }
    }
}
