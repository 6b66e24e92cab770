use crate::foundation::{
    core::Rgb8,
    error::{WalletQrError, WalletQrResult},
};

/// Named color theme shown in listings and accepted by the CLI `--color` option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    /// Lowercase lookup name.
    pub name: &'static str,
    /// Primary (module) color.
    pub hex_color: &'static str,
    /// Suggested background.
    pub background: &'static str,
    /// Suggested text color.
    pub text_color: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

/// Built-in themes.
pub const COLOR_SCHEMES: [ColorScheme; 8] = [
    ColorScheme {
        name: "blue",
        hex_color: "#2E86C1",
        background: "#F8F9F9",
        text_color: "#2C3E50",
        description: "Professional blue theme",
    },
    ColorScheme {
        name: "green",
        hex_color: "#27AE60",
        background: "#F8F9F9",
        text_color: "#145A32",
        description: "Fresh green theme",
    },
    ColorScheme {
        name: "red",
        hex_color: "#E74C3C",
        background: "#FDF2F0",
        text_color: "#922B21",
        description: "Vibrant red theme",
    },
    ColorScheme {
        name: "purple",
        hex_color: "#8E44AD",
        background: "#F9F0FF",
        text_color: "#4A235A",
        description: "Royal purple theme",
    },
    ColorScheme {
        name: "dark",
        hex_color: "#27AE60",
        background: "#1C2833",
        text_color: "#BDC3C7",
        description: "Dark mode theme",
    },
    ColorScheme {
        name: "gradient",
        hex_color: "#FF6B6B",
        background: "#F8F9F9",
        text_color: "#2C3E50",
        description: "Gradient color theme",
    },
    ColorScheme {
        name: "gold",
        hex_color: "#F39C12",
        background: "#FEF9E7",
        text_color: "#7D6608",
        description: "Premium gold theme",
    },
    ColorScheme {
        name: "silver",
        hex_color: "#7F8C8D",
        background: "#F8F9F9",
        text_color: "#2C3E50",
        description: "Elegant silver theme",
    },
];

impl ColorScheme {
    /// Case-insensitive lookup in [`COLOR_SCHEMES`].
    pub fn by_name(name: &str) -> Option<&'static ColorScheme> {
        let wanted = name.trim().to_ascii_lowercase();
        COLOR_SCHEMES.iter().find(|s| s.name == wanted)
    }
}

const NAMED_COLORS: &[(&str, Rgb8)] = &[
    ("black", Rgb8::new(0, 0, 0)),
    ("white", Rgb8::new(255, 255, 255)),
    ("red", Rgb8::new(255, 0, 0)),
    ("green", Rgb8::new(0, 128, 0)),
    ("lime", Rgb8::new(0, 255, 0)),
    ("blue", Rgb8::new(0, 0, 255)),
    ("navy", Rgb8::new(0, 0, 128)),
    ("yellow", Rgb8::new(255, 255, 0)),
    ("orange", Rgb8::new(255, 165, 0)),
    ("gold", Rgb8::new(255, 215, 0)),
    ("purple", Rgb8::new(128, 0, 128)),
    ("fuchsia", Rgb8::new(255, 0, 255)),
    ("magenta", Rgb8::new(255, 0, 255)),
    ("teal", Rgb8::new(0, 128, 128)),
    ("aqua", Rgb8::new(0, 255, 255)),
    ("cyan", Rgb8::new(0, 255, 255)),
    ("maroon", Rgb8::new(128, 0, 0)),
    ("olive", Rgb8::new(128, 128, 0)),
    ("silver", Rgb8::new(192, 192, 192)),
    ("gray", Rgb8::new(128, 128, 128)),
    ("grey", Rgb8::new(128, 128, 128)),
    ("darkgray", Rgb8::new(169, 169, 169)),
    ("lightgray", Rgb8::new(211, 211, 211)),
];

/// Parse `#RRGGBB`, `#RGB` or a basic CSS color name (case-insensitive).
pub fn parse_color(s: &str) -> WalletQrResult<Rgb8> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| {
            WalletQrError::invalid_config(format!(
                "invalid color \"{s}\" (expected #RRGGBB, #RGB or a color name)"
            ))
        });
    }

    let wanted = s.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == wanted)
        .map(|&(_, c)| c)
        .ok_or_else(|| WalletQrError::invalid_config(format!("unknown color name \"{s}\"")))
}

fn parse_hex(hex: &str) -> Option<Rgb8> {
    if !hex.is_ascii() {
        return None;
    }
    let byte = |pair: &str| u8::from_str_radix(pair, 16).ok();
    match hex.len() {
        6 => Some(Rgb8::new(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
        )),
        3 => {
            let nib = |i: usize| byte(&hex[i..i + 1]).map(|v| v * 17);
            Some(Rgb8::new(nib(0)?, nib(1)?, nib(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
