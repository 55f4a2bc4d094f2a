//! Modified median cut quantization regression test
//!
//! Checks palette size bounds, population conservation, lookup
//! consistency and the reference scenarios on synthetic pixel data.

use colorfinder_core::{
    ColorBox, Cut, Error, Histogram, QuantizeOptions, Rgb, median_cut_apply, quantize,
    quantize_with_options,
};
use colorfinder_test::{RegParams, fixtures};

fn pixels(list: &[[u8; 3]]) -> Vec<Rgb> {
    list.iter().copied().map(Rgb::from).collect()
}

fn check_properties(rp: &mut RegParams, px: &[Rgb], max_colors: usize) {
    let cmap = match quantize(px, max_colors) {
        Ok(cmap) => cmap,
        Err(e) => {
            eprintln!("    quantize(max_colors={}) FAILED: {}", max_colors, e);
            rp.check(false, "quantize returned an error");
            return;
        }
    };

    rp.check(
        (1..=max_colors).contains(&cmap.size()),
        "palette size within [1, max_colors]",
    );

    let total: u64 = cmap.iter().map(|e| e.population()).sum();
    rp.compare_values(px.len() as f64, total as f64, 0.0);

    let palette = cmap.palette();
    rp.check(
        px.iter().all(|p| palette.contains(&cmap.map(*p))),
        "every input pixel maps to a palette color",
    );

    let priorities: Vec<u64> = cmap.iter().map(|e| e.priority()).collect();
    rp.check(
        priorities.windows(2).all(|w| w[0] <= w[1]),
        "palette ascending by population x volume",
    );
    rp.compare_colors(*palette.last().unwrap(), cmap.dominant(), 0);
}

#[test]
fn mmcq_reg() {
    let mut rp = RegParams::new("mmcq");

    // --- Low color diversity ---
    let low = pixels(&[
        [190, 197, 190],
        [202, 204, 200],
        [207, 214, 210],
        [211, 214, 211],
        [205, 207, 207],
    ]);
    let cmap = quantize(&low, 2).expect("quantize low diversity");
    rp.check(
        cmap.size() == 1 || cmap.size() == 2,
        "low diversity yields 1 or 2 colors",
    );
    rp.compare_palettes(
        &[Rgb::new(188, 196, 188), Rgb::new(206, 208, 208)],
        &cmap.palette(),
    );

    // --- Single pixel, every target size ---
    let single = pixels(&[[128, 64, 32]]);
    for k in [2usize, 3, 10, 100, 256] {
        let cmap = quantize(&single, k).expect("quantize single pixel");
        rp.compare_values(1.0, cmap.size() as f64, 0.0);
        rp.compare_colors(Rgb::new(132, 68, 36), cmap.palette()[0], 0);
    }

    // --- Quantize/reconstruct stays within one bucket ---
    for v in 0..=255u8 {
        let cmap = quantize(&[Rgb::new(v, v, v)], 2).expect("quantize gray");
        rp.compare_colors(Rgb::new(v, v, v), cmap.dominant(), 7);
    }

    // --- Properties over synthetic images ---
    let gradient = fixtures::color_gradient(64, 48);
    let noise = fixtures::noise(3000, 11);
    let bands = fixtures::color_bands(
        &[
            Rgb::new(240, 20, 20),
            Rgb::new(20, 240, 20),
            Rgb::new(20, 20, 240),
            Rgb::new(128, 128, 128),
        ],
        &[8, 4, 2, 1],
        10,
    );
    for &k in &[2usize, 5, 8, 16, 64, 256] {
        check_properties(&mut rp, &gradient, k);
        check_properties(&mut rp, &noise, k);
        check_properties(&mut rp, &bands, k);
    }

    // --- Flat bands separate into their own colors ---
    let cmap = quantize(&bands, 4).expect("quantize bands");
    rp.compare_values(4.0, cmap.size() as f64, 0.0);
    rp.compare_colors(Rgb::new(244, 20, 20), cmap.map(Rgb::new(240, 20, 20)), 0);

    // --- Determinism ---
    let a = quantize(&noise, 16).expect("first run").palette();
    let b = quantize(&noise, 16).expect("second run").palette();
    rp.compare_palettes(&a, &b);

    // --- Tight iteration cap still yields a valid palette ---
    let opts = QuantizeOptions {
        max_colors: 64,
        max_iterations: 3,
        ..Default::default()
    };
    let cmap = quantize_with_options(&noise, &opts).expect("capped quantize");
    rp.check(cmap.size() <= 7, "at most one split per capped iteration");

    // --- Invalid input ---
    rp.check(
        matches!(quantize(&[], 10), Err(Error::EmptyInput)),
        "empty input rejected",
    );
    rp.check(
        matches!(quantize(&gradient, 1), Err(Error::InvalidMaxColors(1))),
        "max colors below 2 rejected",
    );
    rp.check(
        matches!(quantize(&gradient, 257), Err(Error::InvalidMaxColors(257))),
        "max colors above 256 rejected",
    );

    assert!(rp.cleanup());
}

#[test]
fn median_cut_reg() {
    let mut rp = RegParams::new("median_cut");

    let px = fixtures::noise(500, 3);
    let histo = Histogram::from_pixels(&px);
    let root = ColorBox::from_pixels(&px, &histo).expect("root box");

    // Recursively cut and check that children partition their parent
    let mut stack = vec![root];
    let mut leaves = 0u64;
    let mut leaf_population = 0u64;
    while let Some(vbox) = stack.pop() {
        if vbox.count() == 0 {
            leaves += 1;
            continue;
        }
        match median_cut_apply(&vbox).expect("cut") {
            Cut::Unchanged(b) => {
                rp.check(
                    b.count() == 1 || b.volume() == 1,
                    "only single pixels or single buckets stay whole",
                );
                leaves += 1;
                leaf_population += b.count();
            }
            Cut::Split(first, second) => {
                rp.compare_values(
                    vbox.count() as f64,
                    (first.count() + second.count()) as f64,
                    0.0,
                );
                stack.push(first);
                stack.push(second);
            }
        }
    }
    rp.compare_values(500.0, leaf_population as f64, 0.0);
    rp.check(leaves >= 2, "noise splits into several leaves");

    assert!(rp.cleanup());
}
