//! Edge processing: image gradients and Canny edge detection.
//!
//! - Gradient computation (Sobel) returning `gx`, `gy` and an L1
//!   magnitude per pixel.
//! - A Canny detector: non-maximum suppression along the quantized
//!   gradient direction followed by double-threshold hysteresis.
//!
//! Design goals
//! - Favor clarity and cache-friendly row access over micro-optimizations.
//! - Handle borders by clamping indices (replicate).

pub mod canny;
pub mod grad;

pub use canny::canny;
pub use grad::{sobel_gradients, Grad};
