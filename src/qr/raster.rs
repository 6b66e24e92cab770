use image::RgbaImage;

use crate::{
    foundation::{
        core::Rgb8,
        error::{WalletQrError, WalletQrResult},
    },
    qr::encode::QrMatrix,
    style::{
        color::parse_color,
        config::{RenderMode, StyleConfig},
    },
};

/// Largest image side the rasterizer will allocate.
pub const MAX_QR_SIDE: u32 = 16_384;

/// Rasterize `matrix` with quiet zone, `box_size` pixels per module.
///
/// Light modules and the quiet zone use `back_color`. Dark modules use `fill_color`, or in
/// gradient mode the palette color picked by `(x + y) % 3` for diagonal banding.
pub fn rasterize_qr(matrix: &QrMatrix, config: &StyleConfig) -> WalletQrResult<RgbaImage> {
    if config.box_size == 0 {
        return Err(WalletQrError::invalid_config("box_size must be > 0"));
    }
    let back = parse_color(&config.back_color)?;
    let palette: Vec<Rgb8> = match config.render_mode() {
        RenderMode::Standard => vec![parse_color(&config.fill_color)?],
        RenderMode::Gradient { palette } => palette.unwrap_or_default().colors().to_vec(),
    };

    let modules = u32::try_from(matrix.width())
        .ok()
        .and_then(|w| w.checked_add(config.border.checked_mul(2)?))
        .ok_or_else(|| WalletQrError::invalid_config("qr module count overflow"))?;
    let side = modules
        .checked_mul(config.box_size)
        .filter(|&s| s <= MAX_QR_SIDE)
        .ok_or_else(|| {
            WalletQrError::invalid_config(format!(
                "qr image too large: {modules} modules x {} px (max side {MAX_QR_SIDE})",
                config.box_size
            ))
        })?;

    let mut img = RgbaImage::from_pixel(side, side, back.to_rgba());
    let quiet = config.border;
    let bs = config.box_size;
    for my in 0..matrix.width() {
        for mx in 0..matrix.width() {
            if !matrix.is_dark(mx, my) {
                continue;
            }
            let color = palette[(mx + my) % palette.len()].to_rgba();
            // Module indices fit in u32: `modules` above was computed without overflow.
            let x0 = (quiet + mx as u32) * bs;
            let y0 = (quiet + my as u32) * bs;
            for y in y0..y0 + bs {
                for x in x0..x0 + bs {
                    img.put_pixel(x, y, color);
                }
            }
        }
    }
    Ok(img)
}

#[cfg(test)]
#[path = "../../tests/unit/qr/raster.rs"]
mod tests;
