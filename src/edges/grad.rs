//! Sobel gradients on 8-bit grayscale images.
//!
//! Convolves the 3×3 kernel pair with border clamping and stores the L1
//! magnitude `|gx| + |gy|` used by the Canny stage.
use crate::image::GrayImageU8;

type Kernel3 = [[i32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Horizontal derivative (convolution with kernel X)
    pub gx: Vec<i32>,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: Vec<i32>,
    /// L1 magnitude per pixel: `|gx| + |gy|`
    pub mag: Vec<i32>,
}

/// Compute Sobel gradients on a single-channel image.
pub fn sobel_gradients(src: &GrayImageU8) -> Grad {
    let w = src.w;
    let h = src.h;
    let mut gx = vec![0i32; w * h];
    let mut gy = vec![0i32; w * h];
    let mut mag = vec![0i32; w * h];

    if w == 0 || h == 0 {
        return Grad { w, h, gx, gy, mag };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [src.row(y_idx[0]), src.row(y_idx[1]), src.row(y_idx[2])];
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0i32;
            let mut sum_y = 0i32;
            for (ky, row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                for k in 0..3 {
                    let v = row[x_idx[k]] as i32;
                    sum_x += v * kx_row[k];
                    sum_y += v * ky_row[k];
                }
            }

            let idx = y * w + x;
            gx[idx] = sum_x;
            gy[idx] = sum_y;
            mag[idx] = sum_x.abs() + sum_y.abs();
        }
    }

    Grad { w, h, gx, gy, mag }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_step_has_horizontal_gradient() {
        let mut img = GrayImageU8::new(10, 6);
        for y in 0..6 {
            for x in 5..10 {
                img.set(x, y, 255);
            }
        }
        let grad = sobel_gradients(&img);
        let idx = 3 * 10 + 5; // just right of the step
        assert!(grad.gx[idx].abs() > 0);
        assert_eq!(grad.gy[idx], 0);
        assert_eq!(grad.mag[idx], grad.gx[idx].abs());
    }

    #[test]
    fn flat_image_has_zero_magnitude() {
        let img = GrayImageU8::from_raw(8, 8, vec![50u8; 64]).unwrap();
        let grad = sobel_gradients(&img);
        assert!(grad.mag.iter().all(|&m| m == 0));
    }
}
