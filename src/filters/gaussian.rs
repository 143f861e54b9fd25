//! Separable Gaussian blur on single-channel u8 buffers.
//!
//! The sigma is derived from the kernel size with the conventional rule
//! `sigma = 0.3 * ((ksize - 1) * 0.5 - 1) + 0.8`, so callers only pick an
//! odd kernel size. Borders clamp (replicate).
use crate::image::GrayImageU8;

/// Sigma implied by an odd kernel size.
#[inline]
pub fn sigma_for_ksize(ksize: usize) -> f32 {
    0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Normalized 1-D Gaussian kernel of the given odd size.
pub fn gaussian_kernel(ksize: usize) -> Vec<f32> {
    debug_assert!(ksize % 2 == 1, "kernel size must be odd");
    let sigma = sigma_for_ksize(ksize);
    let center = (ksize / 2) as f32;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (0..ksize)
        .map(|i| {
            let d = i as f32 - center;
            (-d * d / denom).exp()
        })
        .collect();
    let sum: f32 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

/// Blur with a `ksize × ksize` Gaussian, two separable 1-D passes.
pub fn gaussian_blur(src: &GrayImageU8, ksize: usize) -> GrayImageU8 {
    let kernel = gaussian_kernel(ksize);
    let tmp = convolve_rows(src, &kernel);
    convolve_cols(&tmp, &kernel, src)
}

/// Horizontal pass; keeps float precision for the vertical pass.
fn convolve_rows(src: &GrayImageU8, kernel: &[f32]) -> Vec<f32> {
    let (w, h) = (src.w, src.h);
    let radius = kernel.len() / 2;
    let mut out = vec![0.0f32; w * h];
    for y in 0..h {
        let row = src.row(y);
        let out_row = &mut out[y * w..(y + 1) * w];
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, &kv) in kernel.iter().enumerate() {
                let xi = (x + k).saturating_sub(radius).min(w - 1);
                acc += row[xi] as f32 * kv;
            }
            out_row[x] = acc;
        }
    }
    out
}

/// Vertical pass over the horizontal result, rounded back to u8.
fn convolve_cols(tmp: &[f32], kernel: &[f32], src: &GrayImageU8) -> GrayImageU8 {
    let (w, h) = (src.w, src.h);
    let radius = kernel.len() / 2;
    let mut out = GrayImageU8::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, &kv) in kernel.iter().enumerate() {
                let yi = (y + k).saturating_sub(radius).min(h - 1);
                acc += tmp[yi * w + x] * kv;
            }
            out.set(x, y, acc.round().clamp(0.0, 255.0) as u8);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_is_normalized_and_symmetric() {
        for ksize in [7usize, 9, 11, 15] {
            let k = gaussian_kernel(ksize);
            let sum: f32 = k.iter().sum();
            assert!((sum - 1.0).abs() < 1e-5, "ksize={ksize} sum={sum}");
            for i in 0..ksize / 2 {
                assert!((k[i] - k[ksize - 1 - i]).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn constant_image_is_unchanged() {
        let img = GrayImageU8::from_raw(16, 12, vec![137u8; 16 * 12]).unwrap();
        let blurred = gaussian_blur(&img, 9);
        assert_eq!(blurred.data, img.data);
    }

    #[test]
    fn blur_preserves_dimensions() {
        let img = GrayImageU8::new(33, 21);
        let blurred = gaussian_blur(&img, 7);
        assert_eq!((blurred.w, blurred.h), (33, 21));
    }
}
