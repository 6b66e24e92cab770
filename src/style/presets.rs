use crate::{
    foundation::error::WalletQrError,
    style::config::{ErrorCorrection, StyleConfig, StyleExtensions},
};

/// Built-in named styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StylePreset {
    /// Business-style card with title, subtitle, address and logo.
    Professional,
    /// The code alone: no text, border or logo.
    Minimalist,
    /// Green on dark slate.
    Dark,
    /// Sunset-palette modules on a gradient background.
    Gradient,
    /// Corporate look with a larger logo.
    Business,
    /// Gold theme with a `VERIFIED` watermark.
    Premium,
}

impl StylePreset {
    /// Every preset, in listing order.
    pub const ALL: [StylePreset; 6] = [
        Self::Professional,
        Self::Minimalist,
        Self::Dark,
        Self::Gradient,
        Self::Business,
        Self::Premium,
    ];

    /// Lowercase preset name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Minimalist => "minimalist",
            Self::Dark => "dark",
            Self::Gradient => "gradient",
            Self::Business => "business",
            Self::Premium => "premium",
        }
    }

    /// One-line description for listings.
    pub fn description(self) -> &'static str {
        match self {
            Self::Professional => "Complete business-style QR with logo",
            Self::Minimalist => "Clean, simple QR code only",
            Self::Dark => "Dark mode with light QR",
            Self::Gradient => "Color gradient background",
            Self::Business => "Corporate style with official look",
            Self::Premium => "Gold-standard premium design",
        }
    }

    /// Case-insensitive lookup.
    pub fn lookup(name: &str) -> Option<Self> {
        let wanted = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|p| p.name() == wanted)
    }

    /// The preset's configuration. Fields not listed keep [`StyleConfig::default`] values.
    pub fn config(self) -> StyleConfig {
        let base = StyleConfig::default();
        match self {
            Self::Professional => StyleConfig {
                version: 5,
                error_correction: ErrorCorrection::H,
                box_size: 12,
                border: 4,
                fill_color: "#2E86C1".to_owned(),
                title: "CRYPTO WALLET ADDRESS".to_owned(),
                subtitle: "Secure Digital Asset Storage".to_owned(),
                show_address: true,
                show_qr_border: true,
                add_logo: true,
                logo_size: 100,
                ..base
            },
            Self::Minimalist => StyleConfig {
                version: 4,
                error_correction: ErrorCorrection::Q,
                box_size: 15,
                border: 3,
                fill_color: "black".to_owned(),
                title: String::new(),
                show_address: false,
                show_qr_border: false,
                add_logo: false,
                ..base
            },
            Self::Dark => StyleConfig {
                version: 5,
                error_correction: ErrorCorrection::H,
                box_size: 10,
                border: 4,
                fill_color: "#27AE60".to_owned(),
                back_color: "#1C2833".to_owned(),
                title: "CRYPTO WALLET".to_owned(),
                subtitle: "Scan to Transfer".to_owned(),
                show_address: true,
                show_qr_border: true,
                add_logo: false,
                ..base
            },
            Self::Gradient => StyleConfig {
                version: 4,
                error_correction: ErrorCorrection::H,
                box_size: 12,
                border: 3,
                fill_color: "#FF6B6B".to_owned(),
                title: "WALLET ADDRESS".to_owned(),
                subtitle: "Digital Currency".to_owned(),
                show_address: true,
                show_qr_border: true,
                add_logo: false,
                extensions: StyleExtensions::gradient(None),
                ..base
            },
            Self::Business => StyleConfig {
                version: 6,
                error_correction: ErrorCorrection::H,
                box_size: 10,
                border: 4,
                fill_color: "#2C3E50".to_owned(),
                title: "BUSINESS WALLET".to_owned(),
                subtitle: "Official Corporate Address".to_owned(),
                show_address: true,
                show_qr_border: true,
                add_logo: true,
                logo_size: 120,
                ..base
            },
            Self::Premium => StyleConfig {
                version: 7,
                error_correction: ErrorCorrection::H,
                box_size: 14,
                border: 6,
                fill_color: "#F39C12".to_owned(),
                back_color: "#FEF9E7".to_owned(),
                title: "PREMIUM WALLET".to_owned(),
                subtitle: "Gold Standard Security".to_owned(),
                show_address: true,
                show_qr_border: true,
                add_logo: true,
                logo_size: 150,
                watermark: "VERIFIED".to_owned(),
                ..base
            },
        }
    }
}

impl std::str::FromStr for StylePreset {
    type Err = WalletQrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
            .ok_or_else(|| WalletQrError::invalid_config(format!("unknown style preset \"{s}\"")))
    }
}

impl StyleConfig {
    /// Configuration for a named preset; unknown names fall back to [`StyleConfig::default`].
    pub fn from_preset(name: &str) -> Self {
        StylePreset::lookup(name)
            .map(StylePreset::config)
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/presets.rs"]
mod tests;
