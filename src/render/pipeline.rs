use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::{
    address::classify::{AddressFamily, classify},
    foundation::{
        core::format_file_size,
        error::{WalletQrError, WalletQrResult},
    },
    layout::solver::Layout,
    qr::{encode::encode_qr, raster::rasterize_qr},
    render::{
        background::render_background,
        composite::{over_in_place, paste},
        decorate::draw_emboss_border,
        encode::{DEFAULT_JPEG_QUALITY, OutputFormat, write_image},
        fonts::FontCache,
        logo::{SHADOW_RING, load_logo, logo_badge, overlay_badge},
        text::{build_text_svg, header_and_address_items, rasterize_text_svg, watermark_items},
    },
    style::{
        color::parse_color,
        config::{RenderMode, StyleConfig},
    },
};

/// Pipeline-wide knobs that are not part of a style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Turn logo warnings into [`WalletQrError::Resource`] failures.
    pub strict_resources: bool,
    /// JPEG quality, 1..=100.
    pub jpeg_quality: u8,
    /// Seed for the noise background; `None` draws from the thread RNG.
    pub noise_seed: Option<u64>,
    /// Extra directories scanned for `.ttf`/`.otf`/`.ttc` files.
    pub font_dirs: Vec<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            strict_resources: false,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            noise_seed: None,
            font_dirs: Vec::new(),
        }
    }
}

/// Which QR coloring a result was rendered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyleTag {
    /// Flat foreground color.
    Standard,
    /// Palette banding.
    Gradient,
}

impl RenderStyleTag {
    /// Lowercase tag, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Gradient => "gradient",
        }
    }
}

impl std::fmt::Display for RenderStyleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal problem hit while rendering. The affected element is left out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceWarning {
    /// `add_logo` is set but the logo path is unset or does not exist.
    MissingLogo { path: Option<PathBuf> },
    /// The logo exists but could not be read or decoded.
    UnreadableLogo { path: PathBuf, reason: String },
    /// No font face could be found for a text element.
    MissingFont { element: String },
}

impl std::fmt::Display for ResourceWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLogo { path: None } => f.write_str("logo enabled but no logo path set"),
            Self::MissingLogo { path: Some(path) } => {
                write!(f, "logo file not found: {}", path.display())
            }
            Self::UnreadableLogo { path, reason } => {
                write!(f, "could not load logo {}: {reason}", path.display())
            }
            Self::MissingFont { element } => write!(f, "no font available for {element}"),
        }
    }
}

/// Summary of one written image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    /// Path the image was written to.
    pub filepath: PathBuf,
    /// File size on disk.
    pub size_bytes: u64,
    /// Human-readable `size_bytes`.
    pub size_formatted: String,
    /// `(width, height)` in pixels.
    pub dimensions: (u32, u32),
    /// The encoded data.
    pub address: String,
    /// Module coloring used.
    pub style: RenderStyleTag,
    /// Classifier tag for `address`; informational only.
    pub address_family: AddressFamily,
    /// Resources that were missing; the affected elements were left out.
    pub warnings: Vec<ResourceWarning>,
}

/// A composed, not yet encoded, image.
#[derive(Clone, Debug)]
pub struct ComposedImage {
    /// Opaque canvas.
    pub image: RgbaImage,
    /// Layout the canvas was composed with.
    pub layout: Layout,
    /// Same as [`GenerationResult::warnings`].
    pub warnings: Vec<ResourceWarning>,
}

/// Turns data plus a [`StyleConfig`] into a finished image file.
///
/// The pipeline owns its font cache, so one instance should be reused across renders.
#[derive(Debug, Default)]
pub struct RenderPipeline {
    fonts: FontCache,
    options: RenderOptions,
}

impl RenderPipeline {
    /// Pipeline with a font cache over system fonts plus `options.font_dirs`.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            fonts: FontCache::new(options.font_dirs.clone()),
            options,
        }
    }

    /// Pipeline using a prepared font cache instead of loading system fonts.
    pub fn with_fonts(options: RenderOptions, fonts: FontCache) -> Self {
        Self { fonts, options }
    }

    /// Options this pipeline was built with.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The owned font cache, e.g. to inspect resolutions.
    pub fn fonts_mut(&mut self) -> &mut FontCache {
        &mut self.fonts
    }

    /// Render `data` with `config` and write the image to `output_path`.
    ///
    /// The format follows the path's extension. Every failure is reported as
    /// [`WalletQrError::Generation`] wrapping the failing stage's error.
    #[tracing::instrument(skip(self, output_path, config), fields(path = %output_path.display()))]
    pub fn render(
        &mut self,
        data: &str,
        output_path: &Path,
        config: &StyleConfig,
    ) -> WalletQrResult<GenerationResult> {
        self.render_inner(data, output_path, config)
            .map_err(WalletQrError::generation)
    }

    /// Compose the image in memory without writing it.
    pub fn render_image(
        &mut self,
        data: &str,
        config: &StyleConfig,
    ) -> WalletQrResult<ComposedImage> {
        self.compose(data, config).map_err(WalletQrError::generation)
    }

    fn render_inner(
        &mut self,
        data: &str,
        output_path: &Path,
        config: &StyleConfig,
    ) -> WalletQrResult<GenerationResult> {
        let composed = self.compose(data, config)?;

        let format = OutputFormat::from_path(output_path);
        let size_bytes = write_image(
            &composed.image,
            output_path,
            format,
            self.options.jpeg_quality,
        )?;
        tracing::info!(
            bytes = size_bytes,
            width = composed.layout.width,
            height = composed.layout.height,
            "image written"
        );

        Ok(GenerationResult {
            filepath: output_path.to_path_buf(),
            size_bytes,
            size_formatted: format_file_size(size_bytes),
            dimensions: composed.image.dimensions(),
            address: data.to_owned(),
            style: match config.render_mode() {
                RenderMode::Standard => RenderStyleTag::Standard,
                RenderMode::Gradient { .. } => RenderStyleTag::Gradient,
            },
            address_family: classify(data).family,
            warnings: composed.warnings,
        })
    }

    fn compose(&mut self, data: &str, config: &StyleConfig) -> WalletQrResult<ComposedImage> {
        let family = classify(data).family;
        tracing::debug!(family = family.as_str(), "address classified");

        config.validate()?;
        let back = parse_color(&config.back_color)?;
        let fill = parse_color(&config.fill_color)?;
        let mut warnings = Vec::new();

        let matrix = encode_qr(data, config.version, config.error_correction)?;
        let mut qr = rasterize_qr(&matrix, config)?;

        if config.add_logo {
            self.apply_logo(&mut qr, config, &mut warnings)?;
        }

        let layout = Layout::auto(qr.dimensions(), config);
        let background = config.extensions.effective_background();
        let mut canvas = render_background(
            background,
            layout.width,
            layout.height,
            back,
            self.options.noise_seed,
        )?;

        paste(&mut canvas, &qr, layout.qr_position);

        if config.show_qr_border {
            draw_emboss_border(&mut canvas, layout.qr_position, qr.dimensions(), fill);
        }

        let mut items = header_and_address_items(
            &layout,
            &config.title,
            &config.subtitle,
            config.show_address.then_some(data),
            fill,
            back,
        );
        items.extend(watermark_items(layout.width, layout.height, &config.watermark));
        if let Some(svg) =
            build_text_svg(&mut self.fonts, layout.width, layout.height, &items, &mut warnings)
        {
            let layer = rasterize_text_svg(&mut self.fonts, &svg, layout.width, layout.height)?;
            over_in_place(&mut canvas, &layer, 1.0)?;
        }

        for warning in &warnings {
            tracing::warn!(%warning, "rendered with missing resource");
        }

        Ok(ComposedImage {
            image: canvas,
            layout,
            warnings,
        })
    }

    fn apply_logo(
        &mut self,
        qr: &mut RgbaImage,
        config: &StyleConfig,
        warnings: &mut Vec<ResourceWarning>,
    ) -> WalletQrResult<()> {
        let warning = match &config.logo_path {
            None => ResourceWarning::MissingLogo { path: None },
            Some(path) if !path.exists() => ResourceWarning::MissingLogo {
                path: Some(path.clone()),
            },
            Some(path) => match load_logo(path, config.logo_size, &mut self.fonts) {
                Ok(logo) => {
                    let badge = logo_badge(&logo, config.logo_size);
                    return overlay_badge(qr, &badge, config.logo_size + 2 * SHADOW_RING);
                }
                Err(err) => ResourceWarning::UnreadableLogo {
                    path: path.clone(),
                    reason: format!("{err:#}"),
                },
            },
        };

        if self.options.strict_resources {
            return Err(WalletQrError::resource(warning.to_string()));
        }
        warnings.push(warning);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
