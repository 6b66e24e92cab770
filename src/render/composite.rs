use image::RgbaImage;

use crate::foundation::{
    core::PixelPoint,
    error::{WalletQrError, WalletQrResult},
};

pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied pixels, with an extra layer opacity in `[0, 1]`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Composite a full-canvas premultiplied layer onto `canvas`.
///
/// The canvas is kept opaque throughout the pipeline, so its straight and premultiplied forms
/// coincide and the result can be written back directly.
pub fn over_in_place(canvas: &mut RgbaImage, src: &[u8], opacity: f32) -> WalletQrResult<()> {
    let dst: &mut [u8] = &mut **canvas;
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(WalletQrError::Other(anyhow::anyhow!(
            "over_in_place: layer is {} bytes, canvas is {}",
            src.len(),
            dst.len()
        )));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Composite a `width x height` premultiplied block with its top-left at `(x, y)`.
///
/// Parts falling outside the canvas are clipped; offsets may be negative.
pub fn over_at(
    canvas: &mut RgbaImage,
    src: &[u8],
    width: u32,
    height: u32,
    x: i64,
    y: i64,
) -> WalletQrResult<()> {
    if src.len() as u64 != u64::from(width) * u64::from(height) * 4 {
        return Err(WalletQrError::Other(anyhow::anyhow!(
            "over_at: block is {} bytes, expected {width}x{height}x4",
            src.len()
        )));
    }
    let (cw, ch) = canvas.dimensions();
    for sy in 0..height {
        let dy = y + i64::from(sy);
        if dy < 0 || dy >= i64::from(ch) {
            continue;
        }
        for sx in 0..width {
            let dx = x + i64::from(sx);
            if dx < 0 || dx >= i64::from(cw) {
                continue;
            }
            let idx = ((sy * width + sx) as usize) * 4;
            let s = [src[idx], src[idx + 1], src[idx + 2], src[idx + 3]];
            let d = canvas.get_pixel_mut(dx as u32, dy as u32);
            d.0 = over(d.0, s, 1.0);
        }
    }
    Ok(())
}

/// Copy an opaque image onto the canvas at `at`, clipped to the canvas.
pub fn paste(canvas: &mut RgbaImage, src: &RgbaImage, at: PixelPoint) {
    let (cw, ch) = canvas.dimensions();
    let w = src.width().min(cw.saturating_sub(at.x));
    let h = src.height().min(ch.saturating_sub(at.y));
    for y in 0..h {
        for x in 0..w {
            canvas.put_pixel(at.x + x, at.y + y, *src.get_pixel(x, y));
        }
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
