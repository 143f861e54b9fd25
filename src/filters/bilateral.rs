//! Edge-preserving bilateral smoothing.
use crate::image::GrayImageU8;

/// Bilateral filter over a circular window of the given diameter.
///
/// `sigma_color` weighs intensity differences, `sigma_space` weighs
/// geometric distance. Both weights are Gaussian; the color weight is
/// precomputed as a 256-entry table over absolute intensity difference.
pub fn bilateral_filter(
    src: &GrayImageU8,
    diameter: usize,
    sigma_color: f32,
    sigma_space: f32,
) -> GrayImageU8 {
    let (w, h) = (src.w, src.h);
    let radius = (diameter / 2).max(1) as isize;

    let gauss_color_coeff = -0.5 / (sigma_color * sigma_color);
    let gauss_space_coeff = -0.5 / (sigma_space * sigma_space);

    let color_weight: Vec<f32> = (0..256)
        .map(|d| ((d * d) as f32 * gauss_color_coeff).exp())
        .collect();

    // Circular neighborhood offsets with their spatial weights.
    let mut offsets: Vec<(isize, isize, f32)> = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let r2 = (dx * dx + dy * dy) as f32;
            if r2 > (radius * radius) as f32 {
                continue;
            }
            offsets.push((dx, dy, (r2 * gauss_space_coeff).exp()));
        }
    }

    let mut out = GrayImageU8::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let center = src.get(x, y);
            let mut sum = 0.0f32;
            let mut wsum = 0.0f32;
            for &(dx, dy, sw) in &offsets {
                let xn = (x as isize + dx).clamp(0, w as isize - 1) as usize;
                let yn = (y as isize + dy).clamp(0, h as isize - 1) as usize;
                let v = src.get(xn, yn);
                let weight = sw * color_weight[(v as i16 - center as i16).unsigned_abs() as usize];
                sum += v as f32 * weight;
                wsum += weight;
            }
            out.set(x, y, (sum / wsum).round().clamp(0.0, 255.0) as u8);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_image_is_unchanged() {
        let img = GrayImageU8::from_raw(20, 15, vec![77u8; 300]).unwrap();
        let filtered = bilateral_filter(&img, 11, 85.0, 85.0);
        assert_eq!(filtered.data, img.data);
    }

    #[test]
    fn preserves_a_strong_step_edge() {
        // A hard 0/255 step should stay a hard step: the color weight
        // suppresses contributions from across the edge.
        let mut img = GrayImageU8::new(30, 10);
        for y in 0..10 {
            for x in 15..30 {
                img.set(x, y, 255);
            }
        }
        let filtered = bilateral_filter(&img, 11, 30.0, 85.0);
        assert!(filtered.get(5, 5) < 30, "dark side drifted: {}", filtered.get(5, 5));
        assert!(filtered.get(25, 5) > 225, "bright side drifted: {}", filtered.get(25, 5));
    }
}
