//! Dominant color regression test
//!
//! Runs synthetic images through the synchronous, worker and decoding
//! entry points and checks that they agree.

use std::sync::Arc;
use std::time::Duration;

use colorfinder::io::RgbaImage;
use colorfinder::{ColorFinder, FinderConfig, Rgb, normalize_color, palette_from_image};
use colorfinder_test::{RegParams, fixtures};

fn to_image(pixels: &[Rgb], w: u32, h: u32) -> RgbaImage {
    RgbaImage::new(w, h, fixtures::to_rgba_bytes(pixels)).expect("rgba image")
}

fn encode_png(img: &RgbaImage) -> Vec<u8> {
    let buffer = image::RgbaImage::from_raw(img.width(), img.height(), img.as_bytes().to_vec())
        .expect("buffer matches dimensions");
    let mut out = std::io::Cursor::new(Vec::new());
    buffer
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

#[test]
fn finder_reg() {
    let mut rp = RegParams::new("finder");

    let gradient = to_image(&fixtures::color_gradient(64, 48), 64, 48);
    let bands_px = fixtures::color_bands(
        &[Rgb::new(240, 20, 20), Rgb::new(20, 20, 240)],
        &[6, 2],
        8,
    );
    let bands = to_image(&bands_px, 8, 8);

    let finder = ColorFinder::new(FinderConfig {
        quality: 1,
        ..Default::default()
    })
    .expect("finder");

    // Dominant color is the normalized last palette entry
    for img in [&gradient, &bands] {
        let config = finder.config();
        let palette =
            palette_from_image(img, config.max_colors, &config.extract_options()).expect("palette");
        let dominant = finder.dominant_color(img).expect("dominant");
        rp.compare_colors(
            normalize_color(*palette.last().expect("non-empty palette"), 230),
            dominant,
            0,
        );
        rp.check(dominant.max_component() <= 230, "dominant within ceiling");
    }
    rp.compare_colors(Rgb::new(230, 6, 6), finder.dominant_color(&bands).expect("bands"), 0);

    // Decoding from memory and from disk agrees with the raw buffer
    let png = encode_png(&gradient);
    let expected = finder.dominant_color(&gradient).expect("dominant");
    rp.compare_colors(expected, finder.from_bytes(&png).expect("from bytes"), 0);

    let path = std::env::temp_dir().join(format!("colorfinder_finder_reg_{}.png", std::process::id()));
    std::fs::write(&path, &png).expect("write png");
    let from_disk = finder.from_path(&path);
    let _ = std::fs::remove_file(&path);
    rp.compare_colors(expected, from_disk.expect("from path"), 0);

    rp.check(finder.from_path("/nonexistent/colorfinder.png").is_err(), "missing file rejected");

    // A higher ceiling leaves the color alone
    let mut bright = ColorFinder::default();
    bright
        .set_config(FinderConfig {
            quality: 1,
            max_color_value: 255,
            ..Default::default()
        })
        .expect("set config");
    rp.compare_colors(Rgb::new(244, 20, 20), bright.dominant_color(&bands).expect("bands"), 0);

    assert!(rp.cleanup());
}

#[tokio::test]
async fn finder_worker_reg() {
    let mut rp = RegParams::new("finder_worker");

    let gradient = Arc::new(to_image(&fixtures::color_gradient(64, 48), 64, 48));
    let noise = Arc::new(to_image(&fixtures::noise(32 * 32, 5), 32, 32));

    let mut finder = ColorFinder::with_worker(FinderConfig {
        quality: 2,
        max_colors: 16,
        ..Default::default()
    })
    .expect("finder");
    rp.check(finder.has_worker(), "worker started");

    // Worker results match the synchronous path
    for img in [&gradient, &noise] {
        let sync = finder.dominant_color(img).expect("sync");
        let async_color = finder.dominant_color_async(Arc::clone(img)).await.expect("async");
        rp.compare_colors(sync, async_color, 0);
    }

    // Zero timeout falls back to computing in place
    finder
        .set_config(FinderConfig {
            quality: 2,
            max_colors: 16,
            worker_timeout: Duration::ZERO,
            ..Default::default()
        })
        .expect("set config");
    let sync = finder.dominant_color(&gradient).expect("sync");
    let fallback = finder
        .dominant_color_async(Arc::clone(&gradient))
        .await
        .expect("fallback");
    rp.compare_colors(sync, fallback, 0);

    // Restarted worker serves requests again
    finder.update_worker().expect("restart worker");
    let restarted = finder
        .dominant_color_async(Arc::clone(&noise))
        .await
        .expect("restarted");
    rp.compare_colors(finder.dominant_color(&noise).expect("sync"), restarted, 0);

    finder.terminate_worker();
    rp.check(!finder.has_worker(), "worker terminated");

    assert!(rp.cleanup());
}
