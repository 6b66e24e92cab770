use image::RgbaImage;

use crate::foundation::core::{PixelPoint, Rgb8};

/// Gap between the QR block and the border.
pub const BORDER_GAP: u32 = 10;
pub const BORDER_WIDTH: u32 = 2;
const EMBOSS_SHIFT: i16 = 40;

/// Embossed 2-px frame around the QR block: light top/left edges, dark bottom/right edges.
pub fn draw_emboss_border(
    canvas: &mut RgbaImage,
    qr_at: PixelPoint,
    qr_size: (u32, u32),
    fill: Rgb8,
) {
    let light = fill.shift(EMBOSS_SHIFT).to_rgba();
    let dark = fill.shift(-EMBOSS_SHIFT).to_rgba();

    let x0 = i64::from(qr_at.x) - i64::from(BORDER_GAP);
    let y0 = i64::from(qr_at.y) - i64::from(BORDER_GAP);
    let x1 = i64::from(qr_at.x) + i64::from(qr_size.0) + i64::from(BORDER_GAP) - 1;
    let y1 = i64::from(qr_at.y) + i64::from(qr_size.1) + i64::from(BORDER_GAP) - 1;
    let bw = i64::from(BORDER_WIDTH);

    let mut fill_rect = |xa: i64, ya: i64, xb: i64, yb: i64, color| {
        let (w, h) = (i64::from(canvas.width()), i64::from(canvas.height()));
        for y in ya.max(0)..=yb.min(h - 1) {
            for x in xa.max(0)..=xb.min(w - 1) {
                canvas.put_pixel(x as u32, y as u32, color);
            }
        }
    };

    fill_rect(x0, y0, x1, y0 + bw - 1, light);
    fill_rect(x0, y0, x0 + bw - 1, y1, light);
    fill_rect(x0, y1 - bw + 1, x1, y1, dark);
    fill_rect(x1 - bw + 1, y0, x1, y1, dark);
}

#[cfg(test)]
#[path = "../../tests/unit/render/decorate.rs"]
mod tests;
