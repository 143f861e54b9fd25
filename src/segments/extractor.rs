//! Multi-scale line extraction from a color image.
//!
//! A single CLAHE pass feeds three independent smoothing scales; each
//! scale binarizes, cleans up morphologically, detects Canny edges and
//! runs the probabilistic Hough transform. Segments shorter than the
//! minimum length are dropped, the survivors are pooled across scales in
//! scale order.
//!
//! The returned edge map is whichever scale was processed last (the
//! largest kernel). This is an accepted artifact of the pipeline's
//! history, kept because only the merged line list is consumed
//! downstream; flagged for product-owner confirmation before any change
//! of behavior.
use crate::edges::canny;
use crate::error::ImageProcessingError;
use crate::filters::{adaptive_threshold_inv, bilateral_filter, clahe, close, dilate, gaussian_blur};
use crate::hough::{hough_lines_p, HoughParams};
use crate::image::{ColorImageU8, GrayImageU8};
use crate::segments::LineSegment;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Knobs for the multi-scale extraction chain.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorParams {
    /// CLAHE clip limit (multiplier on the uniform bin height).
    pub clahe_clip_limit: f32,
    /// CLAHE tile grid (columns, rows).
    pub clahe_tile_grid: (usize, usize),
    /// Bilateral filter window diameter in pixels.
    pub bilateral_diameter: usize,
    /// Bilateral sigma, applied to both color and space.
    pub bilateral_sigma: f32,
    /// Gaussian kernel sizes, one entry per smoothing scale.
    pub smoothing_kernels: Vec<usize>,
    /// Adaptive threshold neighborhood size.
    pub adaptive_block_size: usize,
    /// Adaptive threshold offset subtracted from the local mean.
    pub adaptive_offset: f32,
    /// Structuring element size for closing/dilation after thresholding.
    pub morph_kernel: usize,
    /// Canny hysteresis thresholds on the L1 gradient magnitude.
    pub canny_low: f32,
    pub canny_high: f32,
    /// Probabilistic Hough transform parameters.
    pub hough: HoughParams,
    /// Minimum Euclidean segment length kept after detection.
    pub min_segment_length: f32,
}

impl Default for ExtractorParams {
    fn default() -> Self {
        Self {
            clahe_clip_limit: 3.0,
            clahe_tile_grid: (8, 8),
            bilateral_diameter: 11,
            bilateral_sigma: 85.0,
            smoothing_kernels: vec![7, 9, 11],
            adaptive_block_size: 15,
            adaptive_offset: 3.0,
            morph_kernel: 5,
            canny_low: 30.0,
            canny_high: 150.0,
            hough: HoughParams::default(),
            min_segment_length: 50.0,
        }
    }
}

/// Per-scale summary recorded for diagnostics.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ScaleStats {
    /// Gaussian kernel size of the scale.
    pub kernel: usize,
    /// Segments surviving the length filter at this scale.
    pub segments: usize,
    pub elapsed_ms: f64,
}

/// Result of the extraction stage.
#[derive(Clone, Debug)]
pub struct Extraction {
    /// Binary edge map of the last processed scale.
    pub edge_map: GrayImageU8,
    /// Length-filtered segments pooled across all scales.
    pub segments: Vec<LineSegment>,
    /// Per-scale counters and timings.
    pub scales: Vec<ScaleStats>,
}

/// Extract candidate palm-line segments from a BGR color image.
pub fn extract_lines(
    image: &ColorImageU8,
    params: &ExtractorParams,
) -> Result<Extraction, ImageProcessingError> {
    if image.w == 0 || image.h == 0 {
        return Err(ImageProcessingError::new(
            "extract",
            format!("image has degenerate dimensions {}x{}", image.w, image.h),
        ));
    }
    if image.data.len() != image.w * image.h * 3 {
        return Err(ImageProcessingError::new(
            "extract",
            format!(
                "buffer length {} does not match {}x{}x3",
                image.data.len(),
                image.w,
                image.h
            ),
        ));
    }
    if params.smoothing_kernels.is_empty() {
        return Err(ImageProcessingError::new(
            "extract",
            "no smoothing scales configured",
        ));
    }

    let gray = image.to_gray();
    let enhanced = clahe(&gray, params.clahe_clip_limit, params.clahe_tile_grid);

    let mut segments = Vec::new();
    let mut scales = Vec::with_capacity(params.smoothing_kernels.len());
    let mut edge_map: Option<GrayImageU8> = None;

    for &kernel in &params.smoothing_kernels {
        let scale_start = Instant::now();

        let smoothed = bilateral_filter(
            &enhanced,
            params.bilateral_diameter,
            params.bilateral_sigma,
            params.bilateral_sigma,
        );
        let blurred = gaussian_blur(&smoothed, kernel);
        let binary = adaptive_threshold_inv(&blurred, params.adaptive_block_size, params.adaptive_offset);
        let closed = close(&binary, params.morph_kernel);
        let dilated = dilate(&closed, params.morph_kernel, 1);
        let edges = canny(&dilated, params.canny_low, params.canny_high);

        let mut kept = 0usize;
        for (p0, p1) in hough_lines_p(&edges, &params.hough) {
            let seg = LineSegment::from_endpoints(p0, p1);
            if seg.length() > params.min_segment_length {
                segments.push(seg);
                kept += 1;
            }
        }

        let elapsed_ms = scale_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "extract_lines scale {kernel}x{kernel}: segments={kept} elapsed_ms={elapsed_ms:.3}"
        );
        scales.push(ScaleStats {
            kernel,
            segments: kept,
            elapsed_ms,
        });
        edge_map = Some(edges);
    }

    // Checked non-empty above; the last scale's map is the one returned.
    let edge_map = edge_map
        .ok_or_else(|| ImageProcessingError::new("extract", "no smoothing scales configured"))?;

    Ok(Extraction {
        edge_map,
        segments,
        scales,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bright_image(w: usize, h: usize) -> ColorImageU8 {
        ColorImageU8::from_raw(w, h, vec![210u8; w * h * 3]).unwrap()
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        let img = ColorImageU8::new(0, 10);
        let err = extract_lines(&img, &ExtractorParams::default()).unwrap_err();
        assert_eq!(err.stage, "extract");
    }

    #[test]
    fn edge_map_matches_input_dimensions() {
        let img = bright_image(48, 36);
        let extraction = extract_lines(&img, &ExtractorParams::default()).unwrap();
        assert_eq!((extraction.edge_map.w, extraction.edge_map.h), (48, 36));
        assert_eq!(extraction.scales.len(), 3);
    }

    #[test]
    fn blank_image_yields_no_segments() {
        let img = ColorImageU8::new(64, 48);
        let extraction = extract_lines(&img, &ExtractorParams::default()).unwrap();
        assert!(extraction.segments.is_empty());
        assert!(extraction.scales.iter().all(|s| s.segments == 0));
    }

    #[test]
    fn long_dark_crease_is_detected() {
        // A 4-px-thick dark horizontal stroke across a bright field,
        // long enough to clear the 50-px length filter.
        let mut img = bright_image(160, 120);
        for y in 58..62 {
            for x in 20..140 {
                img.set(x, y, [40, 40, 40]);
            }
        }
        let extraction = extract_lines(&img, &ExtractorParams::default()).unwrap();
        assert!(
            !extraction.segments.is_empty(),
            "expected at least one segment"
        );
        assert!(extraction
            .segments
            .iter()
            .all(|s| s.length() > 50.0));
    }
}
