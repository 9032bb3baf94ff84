//! Style resolution: the font allow-list, theme colors, and template names.
//!
//! Everything here is a fixed table with a fallback; an off-list request
//! degrades to the default instead of failing.

use printpdf::BuiltinFont;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Fonts
// ────────────────────────────────────────────────────────────────────────────

/// The three allow-listed resume fonts, mapped onto PDF builtin families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontChoice {
    Arial,
    Courier,
    Times,
}

impl FontChoice {
    /// Resolves a requested font name; anything off the allow-list falls
    /// back to Arial.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "arial" => FontChoice::Arial,
            "courier" => FontChoice::Courier,
            "times" => FontChoice::Times,
            _ => FontChoice::Arial,
        }
    }

    pub(crate) fn regular(self) -> BuiltinFont {
        match self {
            FontChoice::Arial => BuiltinFont::Helvetica,
            FontChoice::Courier => BuiltinFont::Courier,
            FontChoice::Times => BuiltinFont::TimesRoman,
        }
    }

    pub(crate) fn bold(self) -> BuiltinFont {
        match self {
            FontChoice::Arial => BuiltinFont::HelveticaBold,
            FontChoice::Courier => BuiltinFont::CourierBold,
            FontChoice::Times => BuiltinFont::TimesBold,
        }
    }

    /// Average glyph width in em units, for wrap-width and centering
    /// estimates. An approximation; small errors are absorbed by the
    /// generous line height.
    pub(crate) fn avg_char_em(self) -> f32 {
        match self {
            FontChoice::Arial => 0.50,
            FontChoice::Courier => 0.60,
            FontChoice::Times => 0.48,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Themes and templates
// ────────────────────────────────────────────────────────────────────────────

/// Theme name keyed to a heading color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Professional,
    Creative,
    Funny,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "creative" => Theme::Creative,
            "funny" => Theme::Funny,
            _ => Theme::Professional,
        }
    }

    /// Heading RGB for the theme: black, blue, or purple.
    pub fn heading_rgb(self) -> (u8, u8, u8) {
        match self {
            Theme::Professional => (0, 0, 0),
            Theme::Creative => (0, 102, 204),
            Theme::Funny => (153, 0, 153),
        }
    }
}

/// Template name. Accepted for compatibility with the form but inert to
/// layout, exactly like the original tool which collected it and never
/// read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Template {
    Classic,
    Minimalist,
    Modern,
}

impl Template {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "minimalist" => Template::Minimalist,
            "modern" => Template::Modern,
            _ => Template::Classic,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// StyleConfig
// ────────────────────────────────────────────────────────────────────────────

/// Resolved style parameters handed to the renderer. Carries no mutable
/// per-document state; every render call gets its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfig {
    pub font: FontChoice,
    pub theme: Theme,
    pub template: Template,
}

impl StyleConfig {
    /// Resolves raw form strings into a style, applying each fallback.
    pub fn resolve(font: &str, theme: &str, template: &str) -> Self {
        StyleConfig {
            font: FontChoice::from_name(font),
            theme: Theme::from_name(theme),
            template: Template::from_name(template),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            font: FontChoice::Arial,
            theme: Theme::Professional,
            template: Template::Classic,
        }
    }
}
