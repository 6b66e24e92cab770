use super::*;
use crate::{
    qr::encode::encode_qr,
    style::config::{ErrorCorrection, GradientPalette, StyleExtensions},
};

const ETH: &str = "0x742d35Cc6634C0532925a3b844Bc9e90a3b9e0a1";

fn config(box_size: u32, border: u32) -> StyleConfig {
    StyleConfig {
        box_size,
        border,
        fill_color: "#000000".to_owned(),
        back_color: "white".to_owned(),
        ..StyleConfig::default()
    }
}

// Top-left pixel of module (0, 0), which is always dark (finder pattern).
fn first_dark_pixel(m: &QrMatrix, cfg: &StyleConfig) -> (u32, u32) {
    assert!(m.is_dark(0, 0));
    (cfg.border * cfg.box_size, cfg.border * cfg.box_size)
}

#[test]
fn image_side_includes_quiet_zone() {
    let m = encode_qr(ETH, 4, ErrorCorrection::Q).unwrap();
    let cfg = config(15, 3);
    let img = rasterize_qr(&m, &cfg).unwrap();
    let expected = (m.width() as u32 + 6) * 15;
    assert_eq!(img.dimensions(), (expected, expected));
}

#[test]
fn standard_mode_uses_flat_colors() {
    let m = encode_qr(ETH, 4, ErrorCorrection::Q).unwrap();
    let cfg = config(4, 2);
    let img = rasterize_qr(&m, &cfg).unwrap();

    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    let (x, y) = first_dark_pixel(&m, &cfg);
    assert_eq!(img.get_pixel(x, y).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(x + 3, y + 3).0, [0, 0, 0, 255]);
}

#[test]
fn gradient_mode_bands_dark_modules_diagonally() {
    let m = encode_qr(ETH, 4, ErrorCorrection::H).unwrap();
    let mut cfg = config(3, 1);
    cfg.extensions = StyleExtensions::gradient(Some(GradientPalette::Ocean));
    let img = rasterize_qr(&m, &cfg).unwrap();
    let colors = GradientPalette::Ocean.colors();

    for my in 0..m.width() {
        for mx in 0..m.width() {
            let px = img.get_pixel((1 + mx as u32) * 3 + 1, (1 + my as u32) * 3 + 1).0;
            if m.is_dark(mx, my) {
                let c = colors[(mx + my) % 3];
                assert_eq!(px, [c.r, c.g, c.b, 255], "module ({mx}, {my})");
            } else {
                assert_eq!(px, [255, 255, 255, 255], "module ({mx}, {my})");
            }
        }
    }
}

#[test]
fn gradient_mode_defaults_to_sunset() {
    let m = encode_qr(ETH, 4, ErrorCorrection::H).unwrap();
    let mut cfg = config(2, 0);
    cfg.extensions = StyleExtensions::gradient(None);
    let img = rasterize_qr(&m, &cfg).unwrap();
    let sunset = GradientPalette::Sunset.colors()[0];
    // Module (0, 0) is dark (finder pattern) and (0 + 0) % 3 == 0.
    assert_eq!(img.get_pixel(0, 0).0, [sunset.r, sunset.g, sunset.b, 255]);
}

#[test]
fn bad_colors_and_zero_box_size_fail() {
    let m = encode_qr(ETH, 4, ErrorCorrection::Q).unwrap();

    let mut cfg = config(4, 2);
    cfg.fill_color = "not-a-color".to_owned();
    assert!(rasterize_qr(&m, &cfg).is_err());

    let cfg = config(0, 2);
    assert!(rasterize_qr(&m, &cfg).is_err());
}

#[test]
fn oversized_images_are_rejected() {
    let m = encode_qr(ETH, 4, ErrorCorrection::Q).unwrap();
    let cfg = config(2_000, 4);
    let err = rasterize_qr(&m, &cfg).unwrap_err();
    assert!(err.to_string().contains("too large"));
}
