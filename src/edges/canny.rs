//! Canny edge detection with a 3×3 Sobel aperture.
//!
//! Stages: Sobel gradients with L1 magnitude, non-maximum suppression
//! along the quantized gradient direction (four sectors), then
//! double-threshold hysteresis grown with an explicit stack. The output
//! is a binary map: 255 on edges, 0 elsewhere.
use super::grad::sobel_gradients;
use crate::image::GrayImageU8;

// Sector boundaries: tan(22.5°) and tan(67.5°).
const TAN_22_5: f32 = 0.414_213_56;
const TAN_67_5: f32 = 2.414_213_6;

const WEAK: u8 = 1;
const STRONG: u8 = 2;

/// Detect edges; `low`/`high` are the hysteresis thresholds on the L1
/// gradient magnitude.
pub fn canny(src: &GrayImageU8, low: f32, high: f32) -> GrayImageU8 {
    let (w, h) = (src.w, src.h);
    let mut out = GrayImageU8::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    let grad = sobel_gradients(src);

    // Non-maximum suppression with a provisional weak/strong labeling.
    let mut labels = vec![0u8; w * h];
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let idx = y * w + x;
            let m = grad.mag[idx];
            if (m as f32) <= low {
                continue;
            }
            let gx = grad.gx[idx];
            let gy = grad.gy[idx];
            let ax = gx.abs() as f32;
            let ay = gy.abs() as f32;

            let (n1, n2) = if ay < TAN_22_5 * ax {
                (grad.mag[idx - 1], grad.mag[idx + 1])
            } else if ay > TAN_67_5 * ax {
                (grad.mag[idx - w], grad.mag[idx + w])
            } else if (gx >= 0) == (gy >= 0) {
                (grad.mag[idx - w - 1], grad.mag[idx + w + 1])
            } else {
                (grad.mag[idx - w + 1], grad.mag[idx + w - 1])
            };

            if m > n1 && m >= n2 {
                labels[idx] = if (m as f32) > high { STRONG } else { WEAK };
            }
        }
    }

    // Hysteresis: keep weak pixels 8-connected to a strong pixel.
    let mut stack: Vec<usize> = labels
        .iter()
        .enumerate()
        .filter_map(|(i, &l)| (l == STRONG).then_some(i))
        .collect();
    while let Some(idx) = stack.pop() {
        out.data[idx] = 255;
        let x = idx % w;
        let y = idx / w;
        for dy in -1isize..=1 {
            for dx in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let xn = x as isize + dx;
                let yn = y as isize + dy;
                if xn < 0 || yn < 0 || xn >= w as isize || yn >= h as isize {
                    continue;
                }
                let nidx = yn as usize * w + xn as usize;
                if labels[nidx] == WEAK && out.data[nidx] == 0 {
                    labels[nidx] = STRONG;
                    stack.push(nidx);
                }
            }
        }
    }

    out
}
