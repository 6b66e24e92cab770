use super::*;

#[test]
fn parses_hex_forms() {
    assert_eq!(parse_color("#2E86C1").unwrap(), Rgb8::new(0x2E, 0x86, 0xC1));
    assert_eq!(parse_color("#fef9e7").unwrap(), Rgb8::new(0xFE, 0xF9, 0xE7));
    assert_eq!(parse_color("#fff").unwrap(), Rgb8::new(255, 255, 255));
    assert_eq!(parse_color("  #000000 ").unwrap(), Rgb8::new(0, 0, 0));
}

#[test]
fn parses_names_case_insensitively() {
    assert_eq!(parse_color("white").unwrap(), Rgb8::new(255, 255, 255));
    assert_eq!(parse_color("Black").unwrap(), Rgb8::new(0, 0, 0));
    assert_eq!(parse_color("GREY").unwrap(), parse_color("gray").unwrap());
}

#[test]
fn rejects_malformed_colors() {
    for bad in ["#12345", "#GGGGGG", "", "#", "chartreuse-ish", "#ééé"] {
        assert!(parse_color(bad).is_err(), "input {bad:?}");
    }
}

#[test]
fn schemes_are_named_records() {
    let gold = ColorScheme::by_name("Gold").unwrap();
    assert_eq!(gold.hex_color, "#F39C12");
    assert_eq!(gold.background, "#FEF9E7");
    assert!(ColorScheme::by_name("teal").is_none());
    for scheme in &COLOR_SCHEMES {
        parse_color(scheme.hex_color).unwrap();
        parse_color(scheme.background).unwrap();
        parse_color(scheme.text_color).unwrap();
    }
}
