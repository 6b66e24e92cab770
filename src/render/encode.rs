use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use image::{DynamicImage, ExtendedColorType, ImageFormat, RgbaImage, codecs::jpeg::JpegEncoder};
use serde::{Deserialize, Serialize};

use crate::foundation::error::{WalletQrError, WalletQrResult};

pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Encoded output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
    WebP,
}

impl OutputFormat {
    /// Format implied by the path's extension; anything unrecognized is PNG.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.parse().ok())
            .unwrap_or_default()
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::WebP => "webp",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::WebP => ImageFormat::WebP,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = WalletQrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "webp" => Ok(Self::WebP),
            other => Err(WalletQrError::invalid_config(format!(
                "unsupported output format '{other}' (expected png, jpg or webp)"
            ))),
        }
    }
}

/// Encode `img` to `path` and return the written size in bytes.
///
/// The parent directory is created if needed. Output is written as opaque RGB.
pub fn write_image(
    img: &RgbaImage,
    path: &Path,
    format: OutputFormat,
    jpeg_quality: u8,
) -> WalletQrResult<u64> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let rgb = DynamicImage::ImageRgba8(img.clone()).to_rgb8();
    let (width, height) = rgb.dimensions();
    match format {
        OutputFormat::Jpeg => {
            let quality = jpeg_quality.clamp(1, 100);
            let file = File::create(path)
                .with_context(|| format!("create '{}'", path.display()))?;
            let mut writer = BufWriter::new(file);
            JpegEncoder::new_with_quality(&mut writer, quality)
                .encode(&rgb, width, height, ExtendedColorType::Rgb8)
                .with_context(|| format!("write jpeg '{}'", path.display()))?;
            writer
                .flush()
                .with_context(|| format!("flush '{}'", path.display()))?;
        }
        OutputFormat::Png | OutputFormat::WebP => {
            image::save_buffer_with_format(
                path,
                &rgb,
                width,
                height,
                ExtendedColorType::Rgb8,
                format.image_format(),
            )
            .with_context(|| format!("write {format} '{}'", path.display()))?;
        }
    }

    let size = std::fs::metadata(path)
        .with_context(|| format!("stat '{}'", path.display()))?
        .len();
    Ok(size)
}

#[cfg(test)]
#[path = "../../tests/unit/render/encode.rs"]
mod tests;
