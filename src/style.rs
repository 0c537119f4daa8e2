//! # Style Resolver
//!
//! Pure mappings from the enumerated style axes to concrete, renderer-agnostic
//! presentation values.
//!
//! | Axis | Values | Neutral default |
//! |------|--------|-----------------|
//! | Corner radius | none, small, medium, large | medium |
//! | Logo position | left, center, right | right |
//! | Table style | striped, minimal, bordered | bordered |
//! | Layout | minimal, standard, detailed, modern | standard |
//!
//! Every `*_for` function is total: it accepts any string and falls back to
//! the axis's neutral default, so a section can never end up without a style.
//! Which value an invoice actually gets (explicit, template or neutral) is
//! decided by [`resolve_style`].

use serde::{Deserialize, Serialize};

use crate::model::{FontWeightInput, StylePreferences};
use crate::template::StyleDefaults;

// ============================================================================
// AXES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerRadius {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoPosition {
    Left,
    Center,
    #[default]
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    Striped,
    Minimal,
    #[default]
    Bordered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Minimal,
    #[default]
    Standard,
    Detailed,
    Modern,
}

impl CornerRadius {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Some(Self::None),
            "small" | "sm" => Some(Self::Small),
            "medium" | "md" => Some(Self::Medium),
            "large" | "lg" => Some(Self::Large),
            _ => None,
        }
    }
}

impl LogoPosition {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" | "centre" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

impl TableStyle {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "striped" => Some(Self::Striped),
            "minimal" => Some(Self::Minimal),
            "bordered" => Some(Self::Bordered),
            _ => None,
        }
    }
}

impl Layout {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "minimal" => Some(Self::Minimal),
            "standard" => Some(Self::Standard),
            "detailed" => Some(Self::Detailed),
            "modern" => Some(Self::Modern),
            _ => None,
        }
    }
}

// ============================================================================
// CONCRETE STYLE RECORDS
// ============================================================================

/// Horizontal alignment token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    Center,
    End,
}

/// Border and stripe rules for the line-item table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRules {
    /// Outer border width in px (0 = none).
    pub outer_border: u8,
    /// Draw vertical rules between cells.
    pub cell_borders: bool,
    /// Draw a horizontal rule under each row.
    pub row_dividers: bool,
    /// Alternate row fill using the accent color.
    pub striped_rows: bool,
    /// Fill the header row with the primary color.
    pub header_fill: bool,
}

/// Spacing and elevation rules for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRules {
    /// Page padding in px.
    pub padding: u8,
    /// Vertical gap between blocks in px.
    pub section_gap: u8,
    pub shadow: Shadow,
    /// Paint the header on a full-width primary-colored band.
    pub header_band: bool,
    /// Show per-item details (notes, SKU) under each row.
    pub item_details: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shadow {
    None,
    Soft,
    Raised,
}

// ============================================================================
// AXIS MAPPINGS
// ============================================================================

/// Corner radius in px.
pub fn corner_radius_px(radius: CornerRadius) -> u8 {
    match radius {
        CornerRadius::None => 0,
        CornerRadius::Small => 4,
        CornerRadius::Medium => 8,
        CornerRadius::Large => 16,
    }
}

/// Corner radius in px for an arbitrary string.
pub fn corner_radius_for(value: &str) -> u8 {
    corner_radius_px(CornerRadius::parse(value).unwrap_or_default())
}

/// Alignment of the logo within the header.
pub fn logo_alignment(position: LogoPosition) -> Alignment {
    match position {
        LogoPosition::Left => Alignment::Start,
        LogoPosition::Center => Alignment::Center,
        LogoPosition::Right => Alignment::End,
    }
}

pub fn logo_alignment_for(value: &str) -> Alignment {
    logo_alignment(LogoPosition::parse(value).unwrap_or_default())
}

/// Table rule set for a table style.
pub fn table_rules(style: TableStyle) -> TableRules {
    match style {
        TableStyle::Striped => TableRules {
            outer_border: 0,
            cell_borders: false,
            row_dividers: false,
            striped_rows: true,
            header_fill: true,
        },
        TableStyle::Minimal => TableRules {
            outer_border: 0,
            cell_borders: false,
            row_dividers: true,
            striped_rows: false,
            header_fill: false,
        },
        TableStyle::Bordered => TableRules {
            outer_border: 1,
            cell_borders: true,
            row_dividers: true,
            striped_rows: false,
            header_fill: true,
        },
    }
}

pub fn table_rules_for(value: &str) -> TableRules {
    table_rules(TableStyle::parse(value).unwrap_or_default())
}

/// Page spacing rules for a layout density.
pub fn layout_rules(layout: Layout) -> LayoutRules {
    match layout {
        Layout::Minimal => LayoutRules {
            padding: 24,
            section_gap: 16,
            shadow: Shadow::None,
            header_band: false,
            item_details: false,
        },
        Layout::Standard => LayoutRules {
            padding: 32,
            section_gap: 24,
            shadow: Shadow::Soft,
            header_band: false,
            item_details: false,
        },
        Layout::Detailed => LayoutRules {
            padding: 40,
            section_gap: 28,
            shadow: Shadow::Soft,
            header_band: false,
            item_details: true,
        },
        Layout::Modern => LayoutRules {
            padding: 48,
            section_gap: 32,
            shadow: Shadow::Raised,
            header_band: true,
            item_details: true,
        },
    }
}

pub fn layout_rules_for(value: &str) -> LayoutRules {
    layout_rules(Layout::parse(value).unwrap_or_default())
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Fully resolved style block carried by every document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub corner_radius: CornerRadius,
    pub radius_px: u8,
    pub logo_position: LogoPosition,
    pub logo_align: Alignment,
    pub table_style: TableStyle,
    pub table: TableRules,
    pub layout: Layout,
    pub spacing: LayoutRules,
    pub colors: Palette,
    pub typography: Typography,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: String,
    pub accent: String,
    pub text: String,
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub font_size: f32,
    pub font_weight: u16,
}

/// Resolve the form's style preferences against a template's defaults.
///
/// Enumerated axes that are absent or not recognized take the template value.
/// Colors must be `#rgb` or `#rrggbb`, font size must be within 8–24pt and
/// weight must be a keyword or a multiple of 100; otherwise the template value
/// is used.
pub fn resolve_style(prefs: &StylePreferences, defaults: &StyleDefaults) -> ResolvedStyle {
    let corner_radius = prefs
        .corner_radius
        .as_deref()
        .and_then(CornerRadius::parse)
        .unwrap_or(defaults.corner_radius);
    let logo_position = prefs
        .logo_position
        .as_deref()
        .and_then(LogoPosition::parse)
        .unwrap_or(defaults.logo_position);
    let table_style = prefs
        .table_style
        .as_deref()
        .and_then(TableStyle::parse)
        .unwrap_or(defaults.table_style);
    let layout = prefs
        .layout
        .as_deref()
        .and_then(Layout::parse)
        .unwrap_or(defaults.layout);

    let c = &prefs.colors;
    let colors = Palette {
        primary: color_or(c.primary.as_deref(), defaults.primary),
        accent: color_or(c.accent.as_deref(), defaults.accent),
        text: color_or(c.text.as_deref(), defaults.text),
        background: color_or(c.background.as_deref(), defaults.background),
    };

    let t = &prefs.typography;
    let typography = Typography {
        font_family: t
            .font_family
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or(defaults.font_family)
            .to_string(),
        font_size: t
            .font_size
            .filter(|s| (8.0..=24.0).contains(s))
            .unwrap_or(defaults.font_size),
        font_weight: t
            .font_weight
            .as_ref()
            .and_then(parse_font_weight)
            .unwrap_or(defaults.font_weight),
    };

    ResolvedStyle {
        corner_radius,
        radius_px: corner_radius_px(corner_radius),
        logo_position,
        logo_align: logo_alignment(logo_position),
        table_style,
        table: table_rules(table_style),
        layout,
        spacing: layout_rules(layout),
        colors,
        typography,
    }
}

fn color_or(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(v) if is_hex_color(v) => v.to_lowercase(),
        _ => fallback.to_string(),
    }
}

/// `#rgb` or `#rrggbb`.
pub fn is_hex_color(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

fn parse_font_weight(weight: &FontWeightInput) -> Option<u16> {
    match weight {
        FontWeightInput::Numeric(n) if (100..=900).contains(n) && n % 100 == 0 => Some(*n),
        FontWeightInput::Numeric(_) => None,
        FontWeightInput::Named(name) => match name.trim().to_lowercase().as_str() {
            "normal" | "regular" => Some(400),
            "bold" => Some(700),
            other => other
                .parse::<u16>()
                .ok()
                .and_then(|n| parse_font_weight(&FontWeightInput::Numeric(n))),
        },
    }
}
