use super::*;

#[test]
fn rasterizes_solid_frame() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="3" viewBox="0 0 4 3"><rect width="4" height="3" fill="#ff0000"/></svg>"##;
    let img = rasterize(svg, None).unwrap();
    assert_eq!(img.dimensions(), (4, 3));
    assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0, 255]);
}

#[test]
fn transparent_pixels_stay_transparent() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="2" height="2"/>"#;
    let img = rasterize(svg, None).unwrap();
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
}

#[test]
fn invalid_svg_is_an_error() {
    assert!(rasterize("not svg", None).is_err());
}
