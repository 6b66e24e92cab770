//! wallet-qr turns cryptocurrency wallet addresses into styled QR code images.
//!
//! A render is a fixed, strictly sequential pipeline driven by a [`StyleConfig`]:
//!
//! 1. **Encode**: data string -> QR module matrix (auto-growing the version when needed)
//! 2. **Rasterize**: matrix -> RGBA image, flat or diagonal-gradient colored
//! 3. **Logo**: optional circular badge centered on the code
//! 4. **Background**: solid, gradient or noise canvas sized by [`Layout::auto`]
//! 5. **Compose**: QR block, embossed border, title/subtitle/address text, diagonal watermark
//! 6. **Encode to file**: PNG, JPEG or WebP
//!
//! [`RenderPipeline::render_batch`] applies the same pipeline to a list of inputs, tolerating
//! per-item failures.
//!
//! Address validation ([`classify`]) is shape matching only. No checksum is verified.
#![forbid(unsafe_code)]

mod address;
mod batch;
mod foundation;
mod layout;
mod qr;
mod render;
mod style;

pub use address::classify::{
    AddressClassification, AddressFamily, classify, require_valid, validate_address,
};
pub use batch::coordinator::{
    BatchOptions, BatchOutcome, BatchProgress, BatchReport, DEFAULT_BATCH_TAG, batch_filename,
};
pub use batch::manifest::{
    BatchManifest, MANIFEST_FILE_NAME, create_output_dir, load_config, save_config,
};
pub use foundation::core::{PixelPoint, Rgb8, format_file_size};
pub use foundation::error::{WalletQrError, WalletQrResult};
pub use layout::solver::{
    ADDRESS_HEIGHT, LAYOUT_PADDING, Layout, SUBTITLE_HEIGHT, TITLE_HEIGHT, WATERMARK_HEIGHT,
};
pub use qr::encode::{QrMatrix, encode_qr};
pub use qr::raster::rasterize_qr;
pub use render::encode::{DEFAULT_JPEG_QUALITY, OutputFormat};
pub use render::fonts::{FontCache, FontKey};
pub use render::pipeline::{
    ComposedImage, GenerationResult, RenderOptions, RenderPipeline, RenderStyleTag,
    ResourceWarning,
};
pub use style::color::{COLOR_SCHEMES, ColorScheme, parse_color};
pub use style::config::{
    BackgroundKind, ErrorCorrection, GradientPalette, MAX_QR_VERSION, RenderMode, StyleConfig,
    StyleExtensions,
};
pub use style::presets::StylePreset;
pub use style::store::StyleStore;
