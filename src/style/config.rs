use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::foundation::{
    core::Rgb8,
    error::{WalletQrError, WalletQrResult},
};

/// Highest QR version the encoder will grow to.
pub const MAX_QR_VERSION: u32 = 40;

/// QR error-correction strength, weakest to strongest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ErrorCorrection {
    /// ~7% recovery.
    #[serde(alias = "l")]
    L,
    /// ~15% recovery.
    #[serde(alias = "m")]
    M,
    /// ~25% recovery.
    #[serde(alias = "q")]
    Q,
    /// ~30% recovery.
    #[default]
    #[serde(alias = "h")]
    H,
}

impl ErrorCorrection {
    /// Single-letter tag used in plain maps.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        }
    }
}

impl std::str::FromStr for ErrorCorrection {
    type Err = WalletQrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            other => Err(WalletQrError::invalid_config(format!(
                "unknown error correction level \"{other}\" (expected L, M, Q or H)"
            ))),
        }
    }
}

/// Named three-color palette for gradient module coloring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientPalette {
    /// Warm red to amber.
    #[default]
    Sunset,
    /// Blues.
    Ocean,
    /// Greens.
    Forest,
    /// Purples.
    Royal,
    /// Red, orange, yellow.
    Fire,
}

impl GradientPalette {
    /// Every palette, in declaration order.
    pub const ALL: [GradientPalette; 5] = [
        Self::Sunset,
        Self::Ocean,
        Self::Forest,
        Self::Royal,
        Self::Fire,
    ];

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sunset => "sunset",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Royal => "royal",
            Self::Fire => "fire",
        }
    }

    /// Palette colors; dark module `(x, y)` takes `colors[(x + y) % 3]`.
    pub fn colors(self) -> [Rgb8; 3] {
        match self {
            Self::Sunset => [
                Rgb8::new(255, 107, 107),
                Rgb8::new(255, 167, 38),
                Rgb8::new(255, 193, 7),
            ],
            Self::Ocean => [
                Rgb8::new(41, 128, 185),
                Rgb8::new(52, 152, 219),
                Rgb8::new(93, 173, 226),
            ],
            Self::Forest => [
                Rgb8::new(39, 174, 96),
                Rgb8::new(46, 204, 113),
                Rgb8::new(88, 214, 141),
            ],
            Self::Royal => [
                Rgb8::new(142, 68, 173),
                Rgb8::new(155, 89, 182),
                Rgb8::new(165, 105, 189),
            ],
            Self::Fire => [
                Rgb8::new(231, 76, 60),
                Rgb8::new(235, 152, 78),
                Rgb8::new(241, 196, 15),
            ],
        }
    }
}

impl std::str::FromStr for GradientPalette {
    type Err = WalletQrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| {
                WalletQrError::invalid_config(format!("unknown gradient palette \"{s}\""))
            })
    }
}

/// How QR modules are colored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Flat foreground/background fill.
    #[default]
    Standard,
    /// Diagonal banding through a named palette; `None` means the default palette.
    Gradient {
        /// Requested palette.
        palette: Option<GradientPalette>,
    },
}

impl RenderMode {
    /// True for [`RenderMode::Gradient`].
    pub fn is_gradient(self) -> bool {
        matches!(self, Self::Gradient { .. })
    }
}

/// Background canvas style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    /// Flat background color.
    Solid,
    /// Light vertical gradient with slight horizontal variation, softly blurred.
    Gradient,
    /// Light gray with random per-pixel jitter.
    Noise,
}

impl std::str::FromStr for BackgroundKind {
    type Err = WalletQrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(Self::Solid),
            "gradient" => Ok(Self::Gradient),
            "noise" => Ok(Self::Noise),
            other => Err(WalletQrError::invalid_config(format!(
                "unknown background \"{other}\" (expected solid, gradient or noise)"
            ))),
        }
    }
}

/// Typed rendering extensions. Persisted as the `custom_css` object:
/// `{"gradient": true, "gradient_name": "ocean", "background": "noise"}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ExtensionsRepr", into = "ExtensionsRepr")]
pub struct StyleExtensions {
    /// Module coloring mode.
    pub mode: RenderMode,
    /// Explicit background; `None` picks gradient for gradient mode and solid otherwise.
    pub background: Option<BackgroundKind>,
}

impl StyleExtensions {
    /// Gradient module coloring with the given palette.
    pub fn gradient(palette: Option<GradientPalette>) -> Self {
        Self {
            mode: RenderMode::Gradient { palette },
            background: None,
        }
    }

    /// Background actually used for rendering.
    pub fn effective_background(&self) -> BackgroundKind {
        match (self.background, self.mode) {
            (Some(kind), _) => kind,
            (None, RenderMode::Gradient { .. }) => BackgroundKind::Gradient,
            (None, RenderMode::Standard) => BackgroundKind::Solid,
        }
    }

    fn to_plain_map(self) -> Map<String, Value> {
        let mut map = Map::new();
        if let RenderMode::Gradient { palette } = self.mode {
            map.insert("gradient".to_owned(), Value::Bool(true));
            if let Some(p) = palette {
                map.insert("gradient_name".to_owned(), Value::from(p.name()));
            }
        }
        if let Some(bg) = self.background {
            let name = match bg {
                BackgroundKind::Solid => "solid",
                BackgroundKind::Gradient => "gradient",
                BackgroundKind::Noise => "noise",
            };
            map.insert("background".to_owned(), Value::from(name));
        }
        map
    }
}

// Extra keys are ignored so style files carrying other `custom_css` entries still load.
#[derive(Clone, Default, Serialize, Deserialize)]
struct ExtensionsRepr {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    gradient: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gradient_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    background: Option<BackgroundKind>,
}

impl From<ExtensionsRepr> for StyleExtensions {
    fn from(repr: ExtensionsRepr) -> Self {
        let mode = if repr.gradient {
            RenderMode::Gradient {
                palette: repr.gradient_name.as_deref().map(palette_or_default),
            }
        } else {
            RenderMode::Standard
        };
        Self {
            mode,
            background: repr.background,
        }
    }
}

impl From<StyleExtensions> for ExtensionsRepr {
    fn from(ext: StyleExtensions) -> Self {
        let (gradient, gradient_name) = match ext.mode {
            RenderMode::Standard => (false, None),
            RenderMode::Gradient { palette } => (true, palette),
        };
        Self {
            gradient,
            gradient_name: gradient_name.map(|p| p.name().to_owned()),
            background: ext.background,
        }
    }
}

/// Unknown palette names fall back to [`GradientPalette::Sunset`].
fn palette_or_default(name: &str) -> GradientPalette {
    name.parse().unwrap_or_else(|_| {
        tracing::warn!(name, "unknown gradient palette, using sunset");
        GradientPalette::Sunset
    })
}

/// Every rendering parameter for one QR image.
///
/// Field names double as plain-map keys, so JSON style files stay readable and stable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Starting QR version (density level, 1..=40). Grows automatically when data does not fit.
    pub version: u32,
    /// Error-correction level.
    pub error_correction: ErrorCorrection,
    /// Pixels per module; must be > 0.
    pub box_size: u32,
    /// Quiet-zone width in modules.
    pub border: u32,
    /// Foreground color: `#RRGGBB` or a color name.
    pub fill_color: String,
    /// Background color: `#RRGGBB` or a color name.
    pub back_color: String,
    /// Title text; empty hides it.
    pub title: String,
    /// Subtitle text; empty hides it.
    pub subtitle: String,
    /// Draw the address block under the code.
    pub show_address: bool,
    /// Draw the embossed border around the code.
    pub show_qr_border: bool,
    /// Overlay the logo at `logo_path`.
    pub add_logo: bool,
    /// Raster or SVG logo file.
    pub logo_path: Option<PathBuf>,
    /// Logo edge length in pixels; must be > 0.
    pub logo_size: u32,
    /// Watermark text; empty disables it.
    pub watermark: String,
    /// Typed rendering extensions.
    #[serde(rename = "custom_css")]
    pub extensions: StyleExtensions,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            version: 5,
            error_correction: ErrorCorrection::H,
            box_size: 12,
            border: 4,
            fill_color: "#2E86C1".to_owned(),
            back_color: "white".to_owned(),
            title: "CRYPTO WALLET".to_owned(),
            subtitle: String::new(),
            show_address: true,
            show_qr_border: true,
            add_logo: false,
            logo_path: None,
            logo_size: 80,
            watermark: String::new(),
            extensions: StyleExtensions::default(),
        }
    }
}

impl StyleConfig {
    /// Module coloring mode.
    pub fn render_mode(&self) -> RenderMode {
        self.extensions.mode
    }

    /// Check the numeric invariants. Colors are not checked here; they fail during rendering.
    pub fn validate(&self) -> WalletQrResult<()> {
        if self.box_size == 0 {
            return Err(WalletQrError::invalid_config("box_size must be > 0"));
        }
        if self.logo_size == 0 {
            return Err(WalletQrError::invalid_config("logo_size must be > 0"));
        }
        if self.version == 0 || self.version > MAX_QR_VERSION {
            return Err(WalletQrError::invalid_config(format!(
                "version must be within 1..={MAX_QR_VERSION}, got {}",
                self.version
            )));
        }
        Ok(())
    }

    /// Flat key/value form, one entry per field.
    pub fn to_plain_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("version".to_owned(), Value::from(self.version));
        map.insert(
            "error_correction".to_owned(),
            Value::from(self.error_correction.as_str()),
        );
        map.insert("box_size".to_owned(), Value::from(self.box_size));
        map.insert("border".to_owned(), Value::from(self.border));
        map.insert("fill_color".to_owned(), Value::from(self.fill_color.as_str()));
        map.insert("back_color".to_owned(), Value::from(self.back_color.as_str()));
        map.insert("title".to_owned(), Value::from(self.title.as_str()));
        map.insert("subtitle".to_owned(), Value::from(self.subtitle.as_str()));
        map.insert("show_address".to_owned(), Value::Bool(self.show_address));
        map.insert("show_qr_border".to_owned(), Value::Bool(self.show_qr_border));
        map.insert("add_logo".to_owned(), Value::Bool(self.add_logo));
        map.insert(
            "logo_path".to_owned(),
            self.logo_path
                .as_ref()
                .map_or(Value::Null, |p| Value::from(p.to_string_lossy().into_owned())),
        );
        map.insert("logo_size".to_owned(), Value::from(self.logo_size));
        map.insert("watermark".to_owned(), Value::from(self.watermark.as_str()));
        map.insert(
            "custom_css".to_owned(),
            Value::Object(self.extensions.to_plain_map()),
        );
        map
    }

    /// Inverse of [`StyleConfig::to_plain_map`]. Missing keys take defaults; unknown top-level keys
    /// fail, unknown `custom_css` keys are ignored.
    pub fn from_plain_map(map: Map<String, Value>) -> WalletQrResult<Self> {
        serde_json::from_value(Value::Object(map))
            .map_err(|e| WalletQrError::invalid_config(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/config.rs"]
mod tests;
