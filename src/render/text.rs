//! Text overlays drawn as one SVG layer per canvas.
//!
//! Each text element becomes a `<text>` node whose `font-family` is the face resolved through the
//! pipeline's [`FontCache`]. Elements with no resolvable face are skipped and reported.

use std::fmt::Write as _;

use anyhow::Context;

use crate::{
    foundation::{core::Rgb8, error::WalletQrResult},
    layout::solver::Layout,
    render::{
        fonts::{FontCache, FontKey},
        pipeline::ResourceWarning,
    },
};

/// Label drawn above the address.
pub const ADDRESS_LABEL: &str = "Wallet Address:";
const SUBTITLE_COLOR: Rgb8 = Rgb8::new(0x7F, 0x8C, 0x8D);
const LABEL_COLOR: Rgb8 = Rgb8::new(0x2C, 0x3E, 0x50);
const WATERMARK_COLOR: Rgb8 = Rgb8::new(200, 200, 200);
const WATERMARK_ALPHA: u8 = 30;
const WATERMARK_STEP: usize = 150;
const WATERMARK_ANGLE: f32 = -30.0;
const DISPLAY_EDGE_CHARS: usize = 15;
const FULL_ADDRESS_CHUNK: usize = 50;
const FULL_ADDRESS_LINE_STEP: u32 = 15;
// Baseline offset from the top of the text box, as a fraction of the font size.
const ASCENT: f32 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
}

/// One text run to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    /// Short name used in warnings (`title`, `address`, ...).
    pub element: &'static str,
    pub text: String,
    pub font: FontKey,
    pub fill: Rgb8,
    pub fill_alpha: u8,
    pub stroke: Option<Rgb8>,
    pub anchor: Anchor,
    pub x: f32,
    /// Top of the text box.
    pub y: f32,
    /// Degrees, around `(x, baseline)`.
    pub rotate: Option<f32>,
}

impl TextItem {
    fn new(element: &'static str, text: impl Into<String>, font: FontKey, fill: Rgb8) -> Self {
        Self {
            element,
            text: text.into(),
            font,
            fill,
            fill_alpha: 255,
            stroke: None,
            anchor: Anchor::Start,
            x: 0.0,
            y: 0.0,
            rotate: None,
        }
    }

    fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

/// Shortened address for display: first and last 15 chars around `...` when longer than 30.
pub fn display_address(data: &str) -> String {
    let count = data.chars().count();
    if count <= 2 * DISPLAY_EDGE_CHARS {
        return data.to_owned();
    }
    let head: String = data.chars().take(DISPLAY_EDGE_CHARS).collect();
    let tail: String = data.chars().skip(count - DISPLAY_EDGE_CHARS).collect();
    format!("{head}...{tail}")
}

/// Split `data` into lines of at most 50 chars.
pub fn address_lines(data: &str) -> Vec<String> {
    let chars: Vec<char> = data.chars().collect();
    chars
        .chunks(FULL_ADDRESS_CHUNK)
        .map(|c| c.iter().collect())
        .collect()
}

/// Title, subtitle and address block items for `layout`.
pub fn header_and_address_items(
    layout: &Layout,
    title: &str,
    subtitle: &str,
    address: Option<&str>,
    fill: Rgb8,
    back: Rgb8,
) -> Vec<TextItem> {
    let mut items = Vec::new();
    let center = layout.width as f32 / 2.0;

    if !title.is_empty() {
        let mut item = TextItem::new("title", title, FontKey::bold(28), fill)
            .at(center, layout.title_position.y as f32);
        item.anchor = Anchor::Middle;
        item.stroke = Some(back);
        items.push(item);
    }
    if !subtitle.is_empty() {
        let mut item = TextItem::new("subtitle", subtitle, FontKey::italic(16), SUBTITLE_COLOR)
            .at(center, layout.subtitle_position.y as f32);
        item.anchor = Anchor::Middle;
        items.push(item);
    }

    if let Some(data) = address {
        let x = layout.padding as f32;
        let label_y = layout.address_position.y;
        items.push(
            TextItem::new("address label", ADDRESS_LABEL, FontKey::bold(16), LABEL_COLOR)
                .at(layout.address_position.x as f32, label_y as f32),
        );
        let display_y = label_y + 25;
        items.push(
            TextItem::new("address", display_address(data), FontKey::regular(14), fill)
                .at(x, display_y as f32),
        );
        let full_y = display_y + 30;
        for (i, line) in address_lines(data).into_iter().enumerate() {
            let y = full_y + i as u32 * FULL_ADDRESS_LINE_STEP;
            items.push(
                TextItem::new("full address", line, FontKey::mono(10), SUBTITLE_COLOR)
                    .at(x, y as f32),
            );
        }
    }
    items
}

/// Watermark tiles across a vertically centered band, each rotated -30 degrees.
pub fn watermark_items(width: u32, height: u32, text: &str) -> Vec<TextItem> {
    if text.is_empty() {
        return Vec::new();
    }
    let h = i64::from(height);
    let y = (height / 2) as f32;
    (-h..i64::from(width) + h)
        .step_by(WATERMARK_STEP)
        .map(|x| {
            let mut item = TextItem::new("watermark", text, FontKey::italic(20), WATERMARK_COLOR)
                .at(x as f32, y);
            item.fill_alpha = WATERMARK_ALPHA;
            item.rotate = Some(WATERMARK_ANGLE);
            item
        })
        .collect()
}

/// Build the SVG document for `items`, resolving fonts through `fonts`.
///
/// Returns `None` when nothing is drawable. Unresolvable fonts yield one warning per element
/// name.
pub fn build_text_svg(
    fonts: &mut FontCache,
    width: u32,
    height: u32,
    items: &[TextItem],
    warnings: &mut Vec<ResourceWarning>,
) -> Option<String> {
    let mut body = String::new();
    for item in items {
        if item.text.is_empty() {
            continue;
        }
        let Some(family) = fonts.resolve(item.font) else {
            let warning = ResourceWarning::MissingFont {
                element: item.element.to_owned(),
            };
            if !warnings.contains(&warning) {
                warnings.push(warning);
            }
            continue;
        };
        push_text_node(&mut body, item, &family);
    }
    if body.is_empty() {
        return None;
    }
    Some(format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">{body}</svg>"
    ))
}

fn push_text_node(out: &mut String, item: &TextItem, family: &str) {
    let size = item.font.size as f32;
    let baseline = item.y + size * ASCENT;
    let _ = write!(
        out,
        "<text x=\"{x:.1}\" y=\"{baseline:.1}\" font-family=\"{family}\" font-size=\"{size}\" \
         fill=\"{fill}\"",
        x = item.x,
        family = xml_escape(family),
        size = item.font.size,
        fill = item.fill.to_hex(),
    );
    if item.font.bold {
        out.push_str(" font-weight=\"bold\"");
    }
    if item.font.italic {
        out.push_str(" font-style=\"italic\"");
    }
    if item.fill_alpha < 255 {
        let _ = write!(out, " fill-opacity=\"{:.4}\"", f32::from(item.fill_alpha) / 255.0);
    }
    if let Some(stroke) = item.stroke {
        let _ = write!(
            out,
            " stroke=\"{}\" stroke-width=\"1\" paint-order=\"stroke\"",
            stroke.to_hex()
        );
    }
    if item.anchor == Anchor::Middle {
        out.push_str(" text-anchor=\"middle\"");
    }
    if let Some(angle) = item.rotate {
        let _ = write!(
            out,
            " transform=\"rotate({angle} {x:.1} {baseline:.1})\"",
            x = item.x
        );
    }
    let _ = write!(out, ">{}</text>", xml_escape(&item.text));
}

/// Rasterize a text SVG document into premultiplied RGBA8 at `width x height`.
pub fn rasterize_text_svg(
    fonts: &mut FontCache,
    svg: &str,
    width: u32,
    height: u32,
) -> WalletQrResult<Vec<u8>> {
    let opts = fonts.svg_options();
    let tree = usvg::Tree::from_str(svg, &opts).context("parse text overlay svg")?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .context("failed to allocate text overlay pixmap")?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap.data().to_vec())
}

pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
