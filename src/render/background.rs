use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage, imageops};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    foundation::{core::Rgb8, error::WalletQrResult},
    style::config::BackgroundKind,
};

const NOISE_BASE: u8 = 245;
const NOISE_BLEND: f32 = 0.3;
const GRADIENT_BLUR_SIGMA: f32 = 0.5;

/// Build the canvas background.
///
/// `seed` makes the noise texture reproducible; without it the thread RNG is used.
pub fn render_background(
    kind: BackgroundKind,
    width: u32,
    height: u32,
    back: Rgb8,
    seed: Option<u64>,
) -> WalletQrResult<RgbaImage> {
    match kind {
        BackgroundKind::Solid => Ok(RgbaImage::from_pixel(width, height, back.to_rgba())),
        BackgroundKind::Gradient => {
            let soft = imageops::blur(&vertical_gradient(width, height), GRADIENT_BLUR_SIGMA);
            Ok(DynamicImage::ImageRgb8(soft).to_rgba8())
        }
        BackgroundKind::Noise => Ok(match seed {
            Some(seed) => noise(width, height, &mut StdRng::seed_from_u64(seed)),
            None => noise(width, height, &mut rand::thread_rng()),
        }),
    }
}

// Light-to-slightly-darker top to bottom, plus up to +10 from left to right.
fn vertical_gradient(width: u32, height: u32) -> RgbImage {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    RgbImage::from_fn(width, height, |x, y| {
        let t = y as f32 / h;
        let variation = (x as f32 / w * 10.0) as u32;
        let ch = |base: f32, span: f32| ((base - t * span) as u32 + variation).min(255) as u8;
        Rgb([ch(248.0, 20.0), ch(249.0, 30.0), ch(249.0, 40.0)])
    })
}

fn noise<R: Rng>(width: u32, height: u32, rng: &mut R) -> RgbaImage {
    RgbaImage::from_fn(width, height, |_, _| {
        let mut px = [0u8, 0, 0, 255];
        for c in px.iter_mut().take(3) {
            let jitter: u8 = rng.gen_range(240..250);
            let v = f32::from(NOISE_BASE) * (1.0 - NOISE_BLEND) + f32::from(jitter) * NOISE_BLEND;
            *c = v.round() as u8;
        }
        Rgba(px)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
