use std::fs;
use std::path::PathBuf;

use og_image::rendering::raster::compose;
use og_image::rendering::{pixel_digest, render_with_fonts};
use og_image::FontSet;

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_card_matches_fixture() {
    // The fallback face is the only one guaranteed on every machine
    let canvas = compose(&FontSet::fallback());
    let digest = pixel_digest(&canvas);

    let expected_path = golden_path("card_fallback_pixels.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, format!("{}\n", digest)).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    let exp = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
        panic!(
            "unable to read golden {:?} ({}); run with UPDATE_GOLDENS=1 to create it",
            expected_path, e
        )
    });
    assert_eq!(digest, exp.trim(), "card pixels do not match golden");

    // the encoded file carries exactly those pixels
    let rendered = render_with_fonts(&FontSet::fallback()).expect("render");
    let decoded = image::load_from_memory(&rendered.png_data)
        .expect("decode")
        .to_rgb8();
    assert_eq!(pixel_digest(&decoded), digest);
}

#[test]
fn card_pixels_survive_encoding() {
    let rendered = render_with_fonts(&FontSet::fallback()).expect("render");
    assert_eq!(&rendered.png_data[0..8], b"\x89PNG\r\n\x1a\n");

    let img = image::load_from_memory(&rendered.png_data)
        .expect("decode")
        .to_rgb8();
    assert_eq!(img.dimensions(), (1200, 630));

    // top-left keeps the gradient start, the badge is accent green
    assert_eq!(img.get_pixel(0, 0).0, [10, 15, 13]);
    assert_eq!(img.get_pixel(200, 315).0, [0x38, 0xFF, 0x9C]);
    assert_eq!(img.get_pixel(280, 315).0, [0x0A, 0x0F, 0x0D]);

    // white subtitle pixels exist on the subtitle line
    let found_white = (295..311)
        .flat_map(|y| (420..800).map(move |x| (x, y)))
        .any(|(x, y)| img.get_pixel(x, y).0 == [255, 255, 255]);
    assert!(found_white, "Expected subtitle text pixels in PNG");
}
