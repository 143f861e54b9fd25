use presage::image::ColorImageU8;
use presage::{DetectorParams, HandLineDetector};

fn main() {
    // Demo stub: runs the detector over a synthetic palm-like buffer
    let w = 320usize;
    let h = 240usize;
    let mut photo = ColorImageU8::new(w, h);
    photo.data.fill(205);
    // one long dark crease across the middle
    for y in 118..122 {
        for x in 40..280 {
            photo.set(x, y, [45, 45, 45]);
        }
    }

    let detector = HandLineDetector::new(DetectorParams::default());
    match detector.detect_with_trace(&photo) {
        Ok(detection) => println!(
            "segments raw={} merged={} total_ms={:.3}",
            detection.trace.raw_segments,
            detection.trace.merged_segments,
            detection.trace.timings.total_ms
        ),
        Err(err) => eprintln!("Error: {err}"),
    }
}
