use serde::Serialize;

use crate::{foundation::core::PixelPoint, style::config::StyleConfig};

/// Outer padding on every side of the QR block.
pub const LAYOUT_PADDING: u32 = 40;
/// Extra height when a title is set.
pub const TITLE_HEIGHT: u32 = 60;
/// Extra height when a subtitle is set.
pub const SUBTITLE_HEIGHT: u32 = 30;
/// Extra height for the address block.
pub const ADDRESS_HEIGHT: u32 = 80;
/// Extra height when a watermark is set.
pub const WATERMARK_HEIGHT: u32 = 30;

const QR_TOP_WITH_TITLE: u32 = 60;
const QR_TOP_WITHOUT_TITLE: u32 = 20;
const TITLE_Y: u32 = 30;
const SUBTITLE_Y: u32 = TITLE_Y + 40;
const ADDRESS_GAP: u32 = 20;

/// Canvas size and element anchors for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Layout {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Outer padding.
    pub padding: u32,
    /// Top-left corner of the QR image.
    pub qr_position: PixelPoint,
    /// Title anchor (text is centered horizontally; only `y` is used when drawing).
    pub title_position: PixelPoint,
    /// Subtitle anchor (centered horizontally like the title).
    pub subtitle_position: PixelPoint,
    /// Top-left of the address block.
    pub address_position: PixelPoint,
    /// Top-right logo badge anchor.
    pub logo_position: PixelPoint,
    /// Bottom-right watermark anchor.
    pub watermark_position: PixelPoint,
}

impl Layout {
    /// Derive the layout from the rasterized QR size and the style.
    ///
    /// Height grows by a fixed increment per enabled element (title, subtitle, address block,
    /// watermark); width depends on the QR width only. Every anchor lies inside the canvas.
    pub fn auto(qr_size: (u32, u32), config: &StyleConfig) -> Self {
        let (qr_w, qr_h) = qr_size;
        let padding = LAYOUT_PADDING;
        let has_title = !config.title.is_empty();

        let mut extra = 0;
        if has_title {
            extra += TITLE_HEIGHT;
        }
        if !config.subtitle.is_empty() {
            extra += SUBTITLE_HEIGHT;
        }
        if config.show_address {
            extra += ADDRESS_HEIGHT;
        }
        if !config.watermark.is_empty() {
            extra += WATERMARK_HEIGHT;
        }

        let width = qr_w.saturating_add(padding * 2);
        let height = qr_h.saturating_add(padding * 2).saturating_add(extra);

        let qr_y = padding
            + if has_title {
                QR_TOP_WITH_TITLE
            } else {
                QR_TOP_WITHOUT_TITLE
            };

        let clamp = |x: u32, y: u32| PixelPoint::new(x, y).clamp_into(width, height);

        Self {
            width,
            height,
            padding,
            qr_position: clamp(padding, qr_y),
            title_position: clamp(padding, TITLE_Y),
            subtitle_position: clamp(padding, SUBTITLE_Y),
            address_position: clamp(padding, qr_y.saturating_add(qr_h).saturating_add(ADDRESS_GAP)),
            logo_position: clamp(width.saturating_sub(padding + 50), TITLE_Y),
            watermark_position: clamp(
                width.saturating_sub(padding + 100),
                height.saturating_sub(30),
            ),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
