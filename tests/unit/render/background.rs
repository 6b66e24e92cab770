use super::*;

#[test]
fn solid_fills_with_back_color() {
    let img = render_background(BackgroundKind::Solid, 4, 3, Rgb8::new(28, 40, 51), None).unwrap();
    assert_eq!(img.dimensions(), (4, 3));
    assert!(img.pixels().all(|p| p.0 == [28, 40, 51, 255]));
}

#[test]
fn gradient_darkens_downwards_and_brightens_rightwards() {
    let img = render_background(BackgroundKind::Gradient, 200, 200, Rgb8::default(), None).unwrap();
    let top = img.get_pixel(100, 5).0;
    let bottom = img.get_pixel(100, 195).0;
    assert!(bottom[2] < top[2]);
    assert!(top[2] - bottom[2] > 30);

    let left = img.get_pixel(5, 100).0;
    let right = img.get_pixel(195, 100).0;
    assert!(right[0] > left[0]);
    assert!(img.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn unblurred_gradient_matches_formula() {
    let img = vertical_gradient(10, 10);
    assert_eq!(img.get_pixel(0, 0).0, [248, 249, 249]);
    // t = 0.5: 238, 234, 229; variation at x = 5 is 5.
    assert_eq!(img.get_pixel(5, 5).0, [243, 239, 234]);
}

#[test]
fn gradient_blur_only_softens() {
    let raw = vertical_gradient(64, 64);
    let img = render_background(BackgroundKind::Gradient, 64, 64, Rgb8::default(), None).unwrap();
    for (x, y) in [(10, 10), (32, 32), (50, 20)] {
        let a = raw.get_pixel(x, y).0;
        let b = img.get_pixel(x, y).0;
        for c in 0..3 {
            assert!(a[c].abs_diff(b[c]) <= 2, "({x}, {y}) channel {c}: {a:?} vs {b:?}");
        }
        assert_eq!(b[3], 255);
    }
}

#[test]
fn noise_stays_in_band_and_is_seeded() {
    let a = render_background(BackgroundKind::Noise, 16, 16, Rgb8::default(), Some(7)).unwrap();
    let b = render_background(BackgroundKind::Noise, 16, 16, Rgb8::default(), Some(7)).unwrap();
    assert_eq!(a, b);
    // 245 * 0.7 + [240, 249] * 0.3 lies in [243.5, 246.2].
    assert!(a.pixels().all(|p| (243..=246).contains(&p.0[0]) && p.0[3] == 255));
}
