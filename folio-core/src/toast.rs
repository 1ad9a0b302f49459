//! Copy-confirmation toast: visual style and fade behavior.

use serde::{Deserialize, Serialize};

/// How repeated notifications treat fade timers that are still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FadePolicy {
    /// Every call schedules its own fade and none are cancelled. The earliest
    /// pending fade hides the toast, even when a newer message is showing.
    #[default]
    Independent,
    /// A new call cancels the pending fade, so the latest message stays up for
    /// the full delay.
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Opacity {
    #[default]
    Hidden,
    Visible,
}

impl Opacity {
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Hidden => "0",
            Self::Visible => "1",
        }
    }

    #[must_use]
    pub fn from_css(value: &str) -> Self {
        if value.trim() == "1" {
            Self::Visible
        } else {
            Self::Hidden
        }
    }
}

/// Inline style applied once when the toast node is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastStyle {
    pub position: String,
    pub bottom: String,
    pub left: String,
    pub transform: String,
    pub background: String,
    pub color: String,
    pub padding: String,
    pub border_radius: String,
    pub font_size: String,
    pub box_shadow: String,
    pub z_index: String,
    pub transition: String,
}

impl Default for ToastStyle {
    fn default() -> Self {
        Self {
            position: "fixed".into(),
            bottom: "40px".into(),
            left: "50%".into(),
            transform: "translateX(-50%)".into(),
            background: "#003366".into(),
            color: "white".into(),
            padding: "10px 20px".into(),
            border_radius: "20px".into(),
            font_size: "14px".into(),
            box_shadow: "0px 4px 8px rgba(0,0,0,0.2)".into(),
            z_index: "9999".into(),
            transition: "opacity 0.3s ease".into(),
        }
    }
}

impl ToastStyle {
    /// CSS property/value pairs in application order. Opacity starts hidden.
    #[must_use]
    pub fn declarations(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("position", self.position.as_str()),
            ("bottom", self.bottom.as_str()),
            ("left", self.left.as_str()),
            ("transform", self.transform.as_str()),
            ("background", self.background.as_str()),
            ("color", self.color.as_str()),
            ("padding", self.padding.as_str()),
            ("border-radius", self.border_radius.as_str()),
            ("font-size", self.font_size.as_str()),
            ("box-shadow", self.box_shadow.as_str()),
            ("z-index", self.z_index.as_str()),
            ("opacity", Opacity::Hidden.as_css()),
            ("transition", self.transition.as_str()),
        ]
    }
}
