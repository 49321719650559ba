//! End-to-end pipeline tests: dimensions -> layout -> raster guide + record.

use std::io::Cursor;

use boxuv::{
    compute_layout, layout_record, render_layout, BoxDimensions, FaceId, LayoutConfig, RenderStyle,
};
use image::ImageFormat;

fn style_without_labels() -> RenderStyle {
    // Labels depend on a host font; geometry tests stay host-independent.
    RenderStyle {
        draw_labels: false,
        ..RenderStyle::default()
    }
}

#[test]
fn full_pipeline_for_a_shipping_container() {
    let dims = BoxDimensions::new(12.2, 3.1, 3.048).unwrap();
    let layout = compute_layout(&dims, &LayoutConfig::default()).unwrap();

    let img = render_layout(&layout, &style_without_labels()).unwrap();
    assert_eq!(img.dimensions(), (2048, 2048));

    let json = layout_record(&layout).to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["atlas_size"], 2048);
    assert_eq!(value["faces"].as_object().unwrap().len(), 6);
    assert_eq!(value["seams"].as_array().unwrap().len(), 12);
}

#[test]
fn wide_box_exports_wide_front_uvs() {
    let dims = BoxDimensions::new(4.0, 2.0, 3.0).unwrap();
    let layout = compute_layout(&dims, &LayoutConfig::default()).unwrap();
    let front = layout.placement(FaceId::Front);
    let uv_w = front.uv.x1 - front.uv.x0;
    let uv_h = front.uv.y1 - front.uv.y0;
    assert!(uv_w > uv_h, "front of a 4x2x3 box must be wider than tall");
    assert!((uv_w / uv_h - 2.0).abs() < 0.01);
}

#[test]
fn exported_uvs_reconstruct_pixel_rects() {
    let dims = BoxDimensions::new(4.0, 2.0, 3.0).unwrap();
    let layout = compute_layout(&dims, &LayoutConfig::default()).unwrap();
    let json = layout_record(&layout).to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let s = value["atlas_size"].as_f64().unwrap();

    for placement in &layout.faces {
        let face = &value["faces"][placement.face.as_str()];
        let uv = &face["uv_rect"];
        let back_to_px = |key: &str| (uv[key].as_f64().unwrap() * s).round() as u32;
        assert_eq!(back_to_px("x0"), placement.rect.x);
        assert_eq!(back_to_px("y0"), placement.rect.y);
        assert_eq!(back_to_px("x1"), placement.rect.x + placement.rect.w);
        assert_eq!(back_to_px("y1"), placement.rect.y + placement.rect.h);
    }
}

#[test]
fn identical_inputs_give_bit_identical_artifacts() {
    let dims = BoxDimensions::new(1.2, 0.8, 0.6).unwrap();
    let config = LayoutConfig::default();
    let style = style_without_labels();

    let encode = || {
        let layout = compute_layout(&dims, &config).unwrap();
        let img = render_layout(&layout, &style).unwrap();
        let mut png = Vec::new();
        img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();
        let json = layout_record(&layout).to_json_pretty().unwrap();
        (layout, png, json)
    };

    let (layout_a, png_a, json_a) = encode();
    let (layout_b, png_b, json_b) = encode();
    assert_eq!(layout_a, layout_b);
    assert_eq!(png_a, png_b);
    assert_eq!(json_a, json_b);
}

#[test]
fn custom_atlas_size_flows_through_both_adapters() {
    let dims = BoxDimensions::new(2.0, 1.0, 1.5).unwrap();
    let config = LayoutConfig {
        atlas_size: 512,
        ..LayoutConfig::default()
    };
    let layout = compute_layout(&dims, &config).unwrap();
    let img = render_layout(&layout, &style_without_labels()).unwrap();
    assert_eq!(img.dimensions(), (512, 512));
    let record = layout_record(&layout);
    assert_eq!(record.atlas_size, 512);
}

#[test]
fn invalid_dimensions_never_reach_the_adapters() {
    assert!(BoxDimensions::new(0.0, 2.0, 3.0).is_err());
    assert!(BoxDimensions::new(4.0, f64::NAN, 3.0).is_err());
}
