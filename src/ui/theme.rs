use log::*;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub accent: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,

    // Priority badges
    pub priority_high: ColorSpec,
    pub priority_medium: ColorSpec,
    pub priority_low: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Names accepted by [`Theme::from_name`].
    ///
    pub const NAMES: [&'static str; 2] = ["dark", "light"];

    /// Look up a theme by name, falling back to the default.
    ///
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "light" => Self::light(),
            other => {
                warn!("Unknown theme '{}', using default", other);
                Self::default()
            }
        }
    }

    pub fn dark() -> Self {
        Theme {
            name: "dark".to_string(),
            primary: rgb(122, 162, 247),   // Blue
            accent: rgb(187, 154, 247),    // Purple
            text: rgb(192, 202, 245),
            text_muted: rgb(86, 95, 137),
            success: rgb(158, 206, 106),
            warning: rgb(224, 175, 104),
            error: rgb(247, 118, 142),
            border_active: rgb(122, 162, 247),
            border_normal: rgb(59, 66, 97),
            highlight_bg: rgb(41, 46, 66),
            priority_high: rgb(247, 118, 142),
            priority_medium: rgb(224, 175, 104),
            priority_low: rgb(115, 218, 202),
        }
    }

    pub fn light() -> Self {
        Theme {
            name: "light".to_string(),
            primary: rgb(46, 125, 233),
            accent: rgb(152, 84, 241),
            text: rgb(52, 59, 88),
            text_muted: rgb(132, 140, 181),
            success: rgb(88, 117, 57),
            warning: rgb(140, 108, 62),
            error: rgb(245, 42, 101),
            border_active: rgb(46, 125, 233),
            border_normal: rgb(168, 174, 203),
            highlight_bg: rgb(220, 222, 232),
            priority_high: rgb(245, 42, 101),
            priority_medium: rgb(140, 108, 62),
            priority_low: rgb(17, 140, 116),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        for name in Theme::NAMES {
            assert_eq!(Theme::from_name(name).name, name);
        }
        assert_eq!(Theme::from_name("neon").name, Theme::default().name);
    }

    #[test]
    fn test_color_spec_to_color() {
        assert_eq!(rgb(1, 2, 3).to_color(), Color::Rgb(1, 2, 3));
    }
}
