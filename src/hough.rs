//! Progressive probabilistic Hough transform for line segments.
//!
//! Ports the classic accumulator-with-early-walk formulation: edge points
//! are visited in a pseudo-random order; each point votes across all
//! angle bins, and once a bin crosses the vote threshold the supporting
//! line is walked pixel-by-pixel in both directions, tolerating gaps up
//! to `max_line_gap`. Pixels consumed by a walk are removed from the mask
//! and their votes retracted, so each edge pixel supports at most one
//! segment.
//!
//! Notes
//! - The visiting order comes from a multiply-with-carry generator with a
//!   fixed seed, so results are fully deterministic for a given input.
//! - The walk uses 16-bit fixed-point stepping along the major axis.
//! - Segment endpoints are reported in pixel coordinates of the edge map.
use crate::image::GrayImageU8;
use serde::{Deserialize, Serialize};

/// Knobs for the probabilistic line transform.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Distance resolution of the accumulator in pixels.
    pub rho: f32,
    /// Angular resolution of the accumulator in degrees.
    pub theta_deg: f32,
    /// Minimum accumulator votes before a candidate line is walked.
    pub threshold: i32,
    /// Minimum axis-aligned extent for a walked segment to be kept.
    pub min_line_length: f32,
    /// Maximum run of non-edge pixels bridged inside one segment.
    pub max_line_gap: f32,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            rho: 1.0,
            theta_deg: 1.0,
            threshold: 30,
            min_line_length: 50.0,
            max_line_gap: 15.0,
        }
    }
}

/// Multiply-with-carry generator; the fixed seed keeps the point
/// visiting order (and therefore the output) deterministic.
struct Mwc(u64);

impl Mwc {
    const A: u64 = 4_164_903_690;

    fn new() -> Self {
        Self(u64::MAX)
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0 = (self.0 as u32 as u64).wrapping_mul(Self::A) + (self.0 >> 32);
        self.0 as u32
    }

    #[inline]
    fn below(&mut self, n: usize) -> usize {
        (self.next_u32() as usize) % n
    }
}

const SHIFT: u32 = 16;

/// Extract line segments from a binary edge map.
pub fn hough_lines_p(edges: &GrayImageU8, params: &HoughParams) -> Vec<([i32; 2], [i32; 2])> {
    let (w, h) = (edges.w, edges.h);
    let mut lines = Vec::new();
    if w == 0 || h == 0 {
        return lines;
    }

    let theta = params.theta_deg.to_radians();
    let irho = 1.0 / params.rho;
    let numangle = (std::f32::consts::PI / theta).round().max(1.0) as usize;
    let numrho = (((w + h) as f32 * 2.0 + 1.0) * irho).round() as usize;
    let half_rho = ((numrho - 1) / 2) as i32;
    let max_gap = params.max_line_gap.round() as i32;
    let min_len = params.min_line_length.round() as i32;

    // cos/sin per angle bin, pre-scaled by 1/rho for voting.
    let ttab: Vec<(f32, f32)> = (0..numangle)
        .map(|n| {
            let ang = n as f32 * theta;
            (ang.cos() * irho, ang.sin() * irho)
        })
        .collect();

    let mut mask: Vec<bool> = edges.data.iter().map(|&v| v != 0).collect();
    let mut points: Vec<(i32, i32)> = Vec::new();
    for y in 0..h {
        let row = edges.row(y);
        for (x, &v) in row.iter().enumerate() {
            if v != 0 {
                points.push((x as i32, y as i32));
            }
        }
    }

    let mut accum = vec![0i32; numangle * numrho];
    let mut rng = Mwc::new();
    let mut count = points.len();

    while count > 0 {
        let pick = rng.below(count);
        let (x, y) = points[pick];
        points[pick] = points[count - 1];
        count -= 1;

        if !mask[y as usize * w + x as usize] {
            continue;
        }

        // Vote across every angle bin and remember the best one.
        let mut max_val = params.threshold - 1;
        let mut max_n = 0usize;
        for (n, &(c, s)) in ttab.iter().enumerate() {
            let r = ((x as f32 * c + y as f32 * s).round() as i32 + half_rho) as usize;
            let slot = &mut accum[n * numrho + r];
            *slot += 1;
            if *slot > max_val {
                max_val = *slot;
                max_n = n;
            }
        }
        if max_val < params.threshold {
            continue;
        }

        // Direction along the candidate line (perpendicular to the bin
        // normal), in fixed point along the major axis.
        let cos_t = ttab[max_n].0 * params.rho;
        let sin_t = ttab[max_n].1 * params.rho;
        let a = -sin_t;
        let b = cos_t;
        let (xflag, x0, y0, dx0, dy0) = if a.abs() > b.abs() {
            (
                true,
                x as i64,
                ((y as i64) << SHIFT) + (1i64 << (SHIFT - 1)),
                if a > 0.0 { 1i64 } else { -1 },
                (b * (1i64 << SHIFT) as f32 / a.abs()).round() as i64,
            )
        } else {
            (
                false,
                ((x as i64) << SHIFT) + (1i64 << (SHIFT - 1)),
                y as i64,
                (a * (1i64 << SHIFT) as f32 / b.abs()).round() as i64,
                if b > 0.0 { 1i64 } else { -1 },
            )
        };

        let mut line_end = [[x, y], [x, y]];
        for (k, end) in line_end.iter_mut().enumerate() {
            let (dx, dy) = if k == 0 { (dx0, dy0) } else { (-dx0, -dy0) };
            let (mut xx, mut yy) = (x0, y0);
            let mut gap = 0i32;
            loop {
                let (j1, i1) = if xflag {
                    (xx, yy >> SHIFT)
                } else {
                    (xx >> SHIFT, yy)
                };
                if j1 < 0 || j1 >= w as i64 || i1 < 0 || i1 >= h as i64 {
                    break;
                }
                if mask[i1 as usize * w + j1 as usize] {
                    gap = 0;
                    *end = [j1 as i32, i1 as i32];
                } else {
                    gap += 1;
                    if gap > max_gap {
                        break;
                    }
                }
                xx += dx;
                yy += dy;
            }
        }

        let good_line = (line_end[1][0] - line_end[0][0]).abs() >= min_len
            || (line_end[1][1] - line_end[0][1]).abs() >= min_len;

        // Second walk: consume the supporting pixels and retract their
        // votes so they cannot seed another segment.
        for (k, end) in line_end.iter().enumerate() {
            let (dx, dy) = if k == 0 { (dx0, dy0) } else { (-dx0, -dy0) };
            let (mut xx, mut yy) = (x0, y0);
            loop {
                let (j1, i1) = if xflag {
                    (xx, yy >> SHIFT)
                } else {
                    (xx >> SHIFT, yy)
                };
                if j1 < 0 || j1 >= w as i64 || i1 < 0 || i1 >= h as i64 {
                    break;
                }
                let midx = i1 as usize * w + j1 as usize;
                if mask[midx] {
                    if good_line {
                        for (n, &(c, s)) in ttab.iter().enumerate() {
                            let r = ((j1 as f32 * c + i1 as f32 * s).round() as i32 + half_rho)
                                as usize;
                            accum[n * numrho + r] -= 1;
                        }
                    }
                    mask[midx] = false;
                }
                if j1 as i32 == end[0] && i1 as i32 == end[1] {
                    break;
                }
                xx += dx;
                yy += dy;
            }
        }

        if good_line {
            lines.push((line_end[0], line_end[1]));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_row(w: usize, h: usize, y: usize, x0: usize, x1: usize) -> GrayImageU8 {
        let mut img = GrayImageU8::new(w, h);
        for x in x0..=x1 {
            img.set(x, y, 255);
        }
        img
    }

    #[test]
    fn finds_a_long_horizontal_line() {
        let edges = edge_row(128, 32, 10, 5, 115);
        let lines = hough_lines_p(&edges, &HoughParams::default());
        assert_eq!(lines.len(), 1, "expected one segment, got {:?}", lines);
        let (p0, p1) = lines[0];
        assert_eq!(p0[1], 10);
        assert_eq!(p1[1], 10);
        let span = (p1[0] - p0[0]).abs();
        assert!(span >= 100, "span too short: {span}");
    }

    #[test]
    fn short_runs_are_rejected() {
        let edges = edge_row(64, 16, 8, 10, 30); // 21 px < min length
        let lines = hough_lines_p(&edges, &HoughParams::default());
        assert!(lines.is_empty(), "got {:?}", lines);
    }

    #[test]
    fn empty_map_yields_no_lines() {
        let edges = GrayImageU8::new(40, 40);
        assert!(hough_lines_p(&edges, &HoughParams::default()).is_empty());
    }

    #[test]
    fn output_is_deterministic() {
        let edges = edge_row(128, 32, 20, 2, 120);
        let a = hough_lines_p(&edges, &HoughParams::default());
        let b = hough_lines_p(&edges, &HoughParams::default());
        assert_eq!(a, b);
    }

    #[test]
    fn bridges_gaps_up_to_the_limit() {
        // Two runs separated by a 10-px gap (≤ 15) should fuse into one
        // segment covering both.
        let mut img = GrayImageU8::new(160, 24);
        for x in 5..70 {
            img.set(x, 12, 255);
        }
        for x in 80..150 {
            img.set(x, 12, 255);
        }
        let lines = hough_lines_p(&img, &HoughParams::default());
        assert_eq!(lines.len(), 1, "got {:?}", lines);
        let (p0, p1) = lines[0];
        assert!((p1[0] - p0[0]).abs() > 120);
    }
}
