use std::path::Path;

use anyhow::Context;
use image::{RgbaImage, imageops::FilterType};

use crate::{
    foundation::error::WalletQrResult,
    qr::raster::MAX_QR_SIDE,
    render::{
        composite::{over, over_at},
        fonts::FontCache,
    },
};

/// Pixels of shadow ring on each side of the logo circle.
pub const SHADOW_RING: u32 = 2;
const SHADOW_ALPHA: f32 = 100.0;

/// Load a raster or SVG logo, scaled to `size x size`, as premultiplied RGBA8.
pub fn load_logo(path: &Path, size: u32, fonts: &mut FontCache) -> anyhow::Result<Vec<u8>> {
    anyhow::ensure!(
        size > 0 && size <= MAX_QR_SIDE,
        "logo size must be within 1..={MAX_QR_SIDE}, got {size}"
    );
    let bytes =
        std::fs::read(path).with_context(|| format!("read logo from '{}'", path.display()))?;

    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg") || e.eq_ignore_ascii_case("svgz"));
    if is_svg {
        let mut opts = fonts.svg_options();
        opts.resources_dir = path.parent().map(Path::to_path_buf);
        let tree = usvg::Tree::from_data(&bytes, &opts).context("parse logo svg")?;
        return rasterize_svg_to_premul_rgba8(&tree, size);
    }

    let decoded = image::load_from_memory(&bytes).context("decode logo image")?;
    let resized = image::imageops::resize(&decoded.to_rgba8(), size, size, FilterType::Lanczos3);
    let mut premul = resized.into_raw();
    premultiply_rgba8_in_place(&mut premul);
    Ok(premul)
}

fn rasterize_svg_to_premul_rgba8(tree: &usvg::Tree, size: u32) -> anyhow::Result<Vec<u8>> {
    let mut pixmap =
        resvg::tiny_skia::Pixmap::new(size, size).context("failed to allocate logo pixmap")?;

    let sx = (size as f32) / tree.size().width();
    let sy = (size as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * a + 127) / 255) as u8;
        }
    }
}

/// Circular badge of side `size + 4`: the logo flattened over white inside an anti-aliased circle,
/// surrounded by a soft black shadow ring.
pub fn logo_badge(logo_premul: &[u8], size: u32) -> Vec<u8> {
    let side = size + 2 * SHADOW_RING;
    let center = side as f32 / 2.0;
    let r_logo = size as f32 / 2.0;
    let r_shadow = r_logo + SHADOW_RING as f32;
    let white = [255u8, 255, 255, 255];

    let mut out = vec![0u8; (side as usize) * (side as usize) * 4];
    for y in 0..side {
        for x in 0..side {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let d = (dx * dx + dy * dy).sqrt();
            let logo_cov = (r_logo + 0.5 - d).clamp(0.0, 1.0);
            let shadow_cov = (r_shadow + 0.5 - d).clamp(0.0, 1.0);

            let inner = x
                .checked_sub(SHADOW_RING)
                .zip(y.checked_sub(SHADOW_RING))
                .filter(|&(lx, ly)| lx < size && ly < size);
            let flat = match inner {
                Some((lx, ly)) => {
                    let i = ((ly * size + lx) as usize) * 4;
                    let src = [
                        logo_premul[i],
                        logo_premul[i + 1],
                        logo_premul[i + 2],
                        logo_premul[i + 3],
                    ];
                    over(white, src, 1.0)
                }
                None => white,
            };

            let shadow_a = (1.0 - logo_cov) * shadow_cov * SHADOW_ALPHA;
            let alpha = logo_cov * 255.0 + shadow_a;
            let o = ((y * side + x) as usize) * 4;
            for c in 0..3 {
                out[o + c] = (f32::from(flat[c]) * logo_cov).round() as u8;
            }
            out[o + 3] = alpha.round().min(255.0) as u8;
        }
    }
    out
}

/// Draw `badge` (side `side`) centered on the QR image.
pub fn overlay_badge(qr: &mut RgbaImage, badge: &[u8], side: u32) -> WalletQrResult<()> {
    let x = (i64::from(qr.width()) - i64::from(side)) / 2;
    let y = (i64::from(qr.height()) - i64::from(side)) / 2;
    over_at(qr, badge, side, side, x, y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/logo.rs"]
mod tests;
