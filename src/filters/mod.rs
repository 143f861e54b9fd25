//! Per-pixel enhancement and binarization primitives.
//!
//! These are the building blocks of the line extractor's preprocessing
//! chain:
//!
//! - Contrast-limited adaptive histogram equalization (`clahe`).
//! - Edge-preserving bilateral smoothing (`bilateral_filter`).
//! - Separable Gaussian blur with the kernel-size-derived sigma rule
//!   (`gaussian_blur`).
//! - Gaussian-weighted adaptive thresholding (`adaptive_threshold_inv`).
//! - Grayscale and per-channel color morphology (`morphology`).
//!
//! Design goals
//! - Pure functions: every filter returns a new buffer.
//! - Handle borders by clamping indices (replicate).
//! - Favor clarity and cache-friendly row access over micro-optimizations.

pub mod bilateral;
pub mod clahe;
pub mod gaussian;
pub mod morphology;
pub mod threshold;

pub use bilateral::bilateral_filter;
pub use clahe::clahe;
pub use gaussian::{gaussian_blur, gaussian_kernel};
pub use morphology::{close, dilate, dilate_color, erode, erode_color};
pub use threshold::adaptive_threshold_inv;
