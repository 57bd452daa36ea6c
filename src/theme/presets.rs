//! Built-in theme presets.
//!
//! The default palette leans on the terminal's own colors; the three named
//! presets use explicit RGB palettes.

use crossterm::style::Color;

use super::Theme;

/// Preset names in display/cycle order.
pub fn preset_names() -> [&'static str; 4] {
    ["default", "sophisticated", "earthy", "walnut"]
}

/// Look up a preset by name.
pub fn get_preset(name: &str) -> Option<Theme> {
    match name {
        "default" => Some(default_theme()),
        "sophisticated" => Some(sophisticated()),
        "earthy" => Some(earthy()),
        "walnut" => Some(walnut()),
        _ => None,
    }
}

/// Unthemed palette: terminal defaults with a cyan accent.
pub fn default_theme() -> Theme {
    Theme {
        name: "default".to_string(),
        text: Color::Reset,
        text_muted: Color::DarkGrey,
        accent: Color::Cyan,
        background: Color::Reset,
        caret: Color::Cyan,
    }
}

/// Charcoal and gold.
pub fn sophisticated() -> Theme {
    Theme {
        name: "sophisticated".to_string(),
        text: Color::Rgb {
            r: 234,
            g: 230,
            b: 221,
        },
        text_muted: Color::Rgb {
            r: 138,
            g: 134,
            b: 128,
        },
        accent: Color::Rgb {
            r: 198,
            g: 166,
            b: 100,
        },
        background: Color::Rgb {
            r: 26,
            g: 26,
            b: 29,
        },
        caret: Color::Rgb {
            r: 198,
            g: 166,
            b: 100,
        },
    }
}

/// Moss and clay.
pub fn earthy() -> Theme {
    Theme {
        name: "earthy".to_string(),
        text: Color::Rgb {
            r: 232,
            g: 228,
            b: 214,
        },
        text_muted: Color::Rgb {
            r: 146,
            g: 148,
            b: 128,
        },
        accent: Color::Rgb {
            r: 136,
            g: 160,
            b: 106,
        },
        background: Color::Rgb {
            r: 36,
            g: 40,
            b: 31,
        },
        caret: Color::Rgb {
            r: 136,
            g: 160,
            b: 106,
        },
    }
}

/// Warm browns and cream.
pub fn walnut() -> Theme {
    Theme {
        name: "walnut".to_string(),
        text: Color::Rgb {
            r: 241,
            g: 233,
            b: 222,
        },
        text_muted: Color::Rgb {
            r: 164,
            g: 142,
            b: 122,
        },
        accent: Color::Rgb {
            r: 205,
            g: 133,
            b: 63,
        },
        background: Color::Rgb {
            r: 43,
            g: 32,
            b: 26,
        },
        caret: Color::Rgb {
            r: 205,
            g: 133,
            b: 63,
        },
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for name in preset_names() {
            let theme = get_preset(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert!(get_preset("dracula").is_none());
        assert!(get_preset("").is_none());
    }

    #[test]
    fn test_default_uses_terminal_colors() {
        let theme = default_theme();
        assert_eq!(theme.text, Color::Reset);
        assert_eq!(theme.background, Color::Reset);
    }

    #[test]
    fn test_named_presets_are_distinct() {
        assert_ne!(sophisticated().accent, earthy().accent);
        assert_ne!(earthy().accent, walnut().accent);
        assert_ne!(walnut().accent, sophisticated().accent);
    }
}
