use super::*;
use image::Rgba;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[test]
fn edges_are_light_and_dark_around_the_qr() {
    let mut canvas = RgbaImage::from_pixel(100, 100, WHITE);
    let fill = Rgb8::new(0x2E, 0x86, 0xC1);
    draw_emboss_border(&mut canvas, PixelPoint::new(40, 40), (20, 20), fill);

    let light = [0x2E + 40, 0x86 + 40, 0xC1 + 40, 255];
    let dark = [0x2E - 40, 0x86 - 40, 0xC1 - 40, 255];

    // Top edge starts 10 px above the QR and is 2 px thick.
    assert_eq!(canvas.get_pixel(50, 30).0, light);
    assert_eq!(canvas.get_pixel(50, 31).0, light);
    assert_eq!(canvas.get_pixel(50, 32).0, WHITE.0);
    assert_eq!(canvas.get_pixel(30, 50).0, light);

    // QR spans 40..60; bottom/right edges end 10 px past it.
    assert_eq!(canvas.get_pixel(50, 69).0, dark);
    assert_eq!(canvas.get_pixel(50, 68).0, dark);
    assert_eq!(canvas.get_pixel(69, 50).0, dark);
    assert_eq!(canvas.get_pixel(50, 70).0, WHITE.0);

    // Interior untouched.
    assert_eq!(canvas.get_pixel(50, 50).0, WHITE.0);
}

#[test]
fn channels_clamp() {
    let mut canvas = RgbaImage::from_pixel(50, 50, WHITE);
    draw_emboss_border(&mut canvas, PixelPoint::new(20, 20), (10, 10), Rgb8::new(250, 10, 0));
    assert_eq!(canvas.get_pixel(20, 10).0, [255, 50, 40, 255]);
    assert_eq!(canvas.get_pixel(20, 39).0, [210, 0, 0, 255]);
}

#[test]
fn border_is_clipped_near_canvas_edges() {
    let mut canvas = RgbaImage::from_pixel(20, 20, WHITE);
    draw_emboss_border(&mut canvas, PixelPoint::new(2, 2), (16, 16), Rgb8::new(0, 0, 0));
    assert_eq!(canvas.get_pixel(10, 10).0, WHITE.0);
}
