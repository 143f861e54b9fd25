use presage::config::load_config;
use presage::detector::Detection;
use presage::image::io::{load_color_image, save_color_png, save_gray_png, write_json_file};
use presage::HandLineDetector;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "usage: handlines_demo <config.json>".to_string())?;
    let config = load_config(Path::new(&config_path))?;

    let photo = load_color_image(&config.input_path)?;
    let detector = HandLineDetector::new(config.detector.clone());
    let detection = detector
        .detect_with_trace(&photo)
        .map_err(|e| e.to_string())?;

    print_text_summary(&detection);

    if let Some(path) = &config.output.annotated {
        save_color_png(&detection.annotated, path)?;
        println!("Annotated image written to {}", path.display());
    }
    if let Some(path) = &config.output.edge_map {
        save_gray_png(&detection.edge_map, path)?;
        println!("Edge map written to {}", path.display());
    }
    if let Some(path) = &config.output.trace_json {
        write_json_file(path, &detection.trace)?;
        println!("JSON trace written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(detection: &Detection) {
    let trace = &detection.trace;
    println!("Detection summary");
    println!(
        "  input: {}x{}",
        trace.input.width, trace.input.height
    );
    for scale in &trace.scales {
        println!(
            "  scale {}x{}: segments={} elapsed_ms={:.3}",
            scale.kernel, scale.kernel, scale.segments, scale.elapsed_ms
        );
    }
    println!(
        "  segments: raw={} merged={}",
        trace.raw_segments, trace.merged_segments
    );
    for line in &trace.merged {
        println!(
            "    ({}, {}) -> ({}, {}) angle={:.1} len={:.1}",
            line.p0[0],
            line.p0[1],
            line.p1[0],
            line.p1[1],
            line.angle_deg,
            line.length()
        );
    }
    println!(
        "  timings (ms): extract={:.3} merge={:.3} composite={:.3} total={:.3}",
        trace.timings.extract_ms,
        trace.timings.merge_ms,
        trace.timings.composite_ms,
        trace.timings.total_ms
    );
}
