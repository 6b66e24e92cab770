use serde_json::json;

use super::*;
use crate::style::presets::StylePreset;

#[test]
fn every_preset_round_trips_through_plain_map() {
    for preset in StylePreset::ALL {
        let cfg = preset.config();
        let back = StyleConfig::from_plain_map(cfg.to_plain_map()).unwrap();
        assert_eq!(back, cfg, "preset {}", preset.name());
    }
}

#[test]
fn plain_map_has_one_key_per_field() {
    let map = StyleConfig::default().to_plain_map();
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "add_logo",
            "back_color",
            "border",
            "box_size",
            "custom_css",
            "error_correction",
            "fill_color",
            "logo_path",
            "logo_size",
            "show_address",
            "show_qr_border",
            "subtitle",
            "title",
            "version",
            "watermark",
        ]
    );
    assert_eq!(map["logo_path"], serde_json::Value::Null);
    assert_eq!(map["error_correction"], json!("H"));
}

#[test]
fn extensions_round_trip_losslessly() {
    let mut cfg = StyleConfig {
        logo_path: Some("assets/logo.png".into()),
        ..StyleConfig::default()
    };
    for ext in [
        StyleExtensions::default(),
        StyleExtensions::gradient(None),
        StyleExtensions::gradient(Some(GradientPalette::Ocean)),
        StyleExtensions {
            mode: RenderMode::Standard,
            background: Some(BackgroundKind::Noise),
        },
    ] {
        cfg.extensions = ext;
        let back = StyleConfig::from_plain_map(cfg.to_plain_map()).unwrap();
        assert_eq!(back, cfg);
    }
}

#[test]
fn plain_map_matches_serde_shape() {
    let mut cfg = StylePreset::Gradient.config();
    cfg.extensions = StyleExtensions::gradient(Some(GradientPalette::Fire));
    let via_serde = serde_json::to_value(&cfg).unwrap();
    assert_eq!(via_serde, serde_json::Value::Object(cfg.to_plain_map()));
    assert_eq!(
        via_serde["custom_css"],
        json!({"gradient": true, "gradient_name": "fire"})
    );
}

#[test]
fn from_plain_map_is_order_independent_and_fills_defaults() {
    let v = json!({
        "title": "",
        "box_size": 9,
        "custom_css": {"gradient": true},
        "error_correction": "q"
    });
    let serde_json::Value::Object(map) = v else {
        unreachable!()
    };
    let cfg = StyleConfig::from_plain_map(map).unwrap();
    assert_eq!(cfg.box_size, 9);
    assert_eq!(cfg.error_correction, ErrorCorrection::Q);
    assert!(cfg.render_mode().is_gradient());
    assert_eq!(cfg.version, StyleConfig::default().version);
}

#[test]
fn from_plain_map_rejects_unknown_keys_and_values() {
    let bad_key = json!({"box_sise": 3});
    let bad_background = json!({"custom_css": {"background": "plaid"}});
    for v in [bad_key, bad_background] {
        let serde_json::Value::Object(map) = v else {
            unreachable!()
        };
        let err = StyleConfig::from_plain_map(map).unwrap_err();
        assert!(matches!(err, WalletQrError::InvalidConfig(_)), "{err}");
    }
}

#[test]
fn unknown_palette_falls_back_to_sunset() {
    let v = json!({"custom_css": {"gradient": true, "gradient_name": "rainbow"}});
    let serde_json::Value::Object(map) = v else {
        unreachable!()
    };
    let cfg = StyleConfig::from_plain_map(map).unwrap();
    assert_eq!(
        cfg.render_mode(),
        RenderMode::Gradient {
            palette: Some(GradientPalette::Sunset)
        }
    );
}

#[test]
fn foreign_custom_css_keys_are_ignored() {
    let v = json!({
        "custom_css": {"gradient": true, "gradient_name": "ocean", "note": "x", "shadow": 3}
    });
    let serde_json::Value::Object(map) = v else {
        unreachable!()
    };
    let cfg = StyleConfig::from_plain_map(map).unwrap();
    assert_eq!(
        cfg.extensions,
        StyleExtensions::gradient(Some(GradientPalette::Ocean))
    );

    // A palette name without the gradient flag leaves standard coloring.
    let v = json!({"custom_css": {"gradient_name": "ocean"}});
    let serde_json::Value::Object(map) = v else {
        unreachable!()
    };
    let cfg = StyleConfig::from_plain_map(map).unwrap();
    assert_eq!(cfg.render_mode(), RenderMode::Standard);
}

#[test]
fn validate_rejects_degenerate_numbers() {
    assert!(StyleConfig::default().validate().is_ok());

    let zero_box = StyleConfig {
        box_size: 0,
        ..StyleConfig::default()
    };
    assert!(zero_box.validate().is_err());

    let zero_logo = StyleConfig {
        logo_size: 0,
        ..StyleConfig::default()
    };
    assert!(zero_logo.validate().is_err());

    for version in [0, 41] {
        let cfg = StyleConfig {
            version,
            ..StyleConfig::default()
        };
        assert!(cfg.validate().is_err(), "version {version}");
    }
}

#[test]
fn effective_background_follows_mode_unless_overridden() {
    assert_eq!(
        StyleExtensions::default().effective_background(),
        BackgroundKind::Solid
    );
    assert_eq!(
        StyleExtensions::gradient(None).effective_background(),
        BackgroundKind::Gradient
    );
    let ext = StyleExtensions {
        background: Some(BackgroundKind::Noise),
        ..StyleExtensions::gradient(None)
    };
    assert_eq!(ext.effective_background(), BackgroundKind::Noise);
}

#[test]
fn error_correction_levels_are_ordered_and_parse() {
    assert!(ErrorCorrection::L < ErrorCorrection::M);
    assert!(ErrorCorrection::M < ErrorCorrection::Q);
    assert!(ErrorCorrection::Q < ErrorCorrection::H);
    assert_eq!("m".parse::<ErrorCorrection>().unwrap(), ErrorCorrection::M);
    assert!("X".parse::<ErrorCorrection>().is_err());
}

#[test]
fn palettes_parse_by_name() {
    for p in GradientPalette::ALL {
        assert_eq!(p.name().parse::<GradientPalette>().unwrap(), p);
    }
    assert_eq!(
        "Ocean".parse::<GradientPalette>().unwrap(),
        GradientPalette::Ocean
    );
    assert!("neon".parse::<GradientPalette>().is_err());
}
