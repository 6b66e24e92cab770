use super::*;
use image::Rgba;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 1.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn over_keeps_opaque_canvas_opaque() {
    let dst = [255, 255, 255, 255];
    let src = [0, 0, 0, 100];
    let out = over(dst, src, 1.0);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 155);
}

#[test]
fn faint_layer_barely_tints() {
    // (200, 200, 200) at alpha 30, premultiplied.
    let src = [24, 24, 24, 30];
    let out = over([255, 255, 255, 255], src, 1.0);
    assert!(out[0] < 255 && out[0] > 240);
}

#[test]
fn over_in_place_rejects_mismatched_layer() {
    let mut canvas = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
    let err = over_in_place(&mut canvas, &[0u8; 4], 1.0).unwrap_err();
    assert!(matches!(err, WalletQrError::Other(_)), "{err}");
    assert!(over_in_place(&mut canvas, &[0u8; 16], 1.0).is_ok());
    assert_eq!(canvas.get_pixel(1, 1).0, [0, 0, 0, 255]);
}

#[test]
fn over_at_clips_negative_offsets() {
    let mut canvas = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 255]));
    let red = [255u8, 0, 0, 255].repeat(4);
    over_at(&mut canvas, &red, 2, 2, -1, -1).unwrap();
    assert_eq!(canvas.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(canvas.get_pixel(1, 0).0, [255, 255, 255, 255]);
    assert_eq!(canvas.get_pixel(0, 1).0, [255, 255, 255, 255]);
}

#[test]
fn over_at_rejects_short_block_as_internal_error() {
    let mut canvas = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 255]));
    let err = over_at(&mut canvas, &[0u8; 8], 2, 2, 0, 0).unwrap_err();
    assert!(matches!(err.cause(), WalletQrError::Other(_)), "{err}");
    assert_eq!(canvas.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn paste_clips_to_canvas() {
    let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
    let src = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]));
    paste(&mut canvas, &src, PixelPoint::new(2, 2));
    assert_eq!(canvas.get_pixel(3, 3).0, [0, 0, 0, 255]);
    assert_eq!(canvas.get_pixel(1, 1).0, [255, 255, 255, 255]);
}
