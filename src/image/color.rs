//! Owned three-channel u8 image, interleaved, row-major.
//!
//! Channel order is a convention of the surrounding code, not of this
//! type: the processing pipeline works in blue/green/red order and the
//! compositor swaps to red/green/blue for display right before handing
//! the image back (see `compositor`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorImageU8 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Interleaved channel triplets, row-major; length `w * h * 3`
    pub data: Vec<u8>,
}

impl ColorImageU8 {
    /// Construct a zero-initialized (black) buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0u8; w * h * 3],
        }
    }

    /// Wrap raw interleaved bytes; `data.len()` must equal `w * h * 3`.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Option<Self> {
        (data.len() == w * h * 3).then_some(Self { w, h, data })
    }

    #[inline]
    /// Linear index of the first channel of pixel (x, y).
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.w + x) * 3
    }

    #[inline]
    /// Get the channel triplet at (x, y).
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = self.idx(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    /// Set the channel triplet at (x, y).
    pub fn set(&mut self, x: usize, y: usize, px: [u8; 3]) {
        let i = self.idx(x, y);
        self.data[i] = px[0];
        self.data[i + 1] = px[1];
        self.data[i + 2] = px[2];
    }

    /// Convert to grayscale assuming BGR channel order.
    ///
    /// Uses the standard luma weights (0.299 R + 0.587 G + 0.114 B),
    /// rounded to the nearest integer.
    pub fn to_gray(&self) -> super::GrayImageU8 {
        let mut out = super::GrayImageU8::new(self.w, self.h);
        for (dst, px) in out.data.iter_mut().zip(self.data.chunks_exact(3)) {
            let luma =
                0.114 * px[0] as f32 + 0.587 * px[1] as f32 + 0.299 * px[2] as f32;
            *dst = luma.round().clamp(0.0, 255.0) as u8;
        }
        out
    }

    /// Return a copy with the first and third channels exchanged.
    ///
    /// Converts between the blue/green/red processing order and the
    /// red/green/blue display order in either direction.
    pub fn swap_channels(&self) -> ColorImageU8 {
        let mut out = self.clone();
        for px in out.data.chunks_exact_mut(3) {
            px.swap(0, 2);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_channels_exchanges_first_and_third() {
        let mut img = ColorImageU8::new(2, 1);
        img.set(0, 0, [10, 20, 30]);
        img.set(1, 0, [1, 2, 3]);
        let swapped = img.swap_channels();
        assert_eq!(swapped.get(0, 0), [30, 20, 10]);
        assert_eq!(swapped.get(1, 0), [3, 2, 1]);
        // Involution: swapping twice restores the original.
        assert_eq!(swapped.swap_channels(), img);
    }

    #[test]
    fn from_raw_checks_channel_count() {
        assert!(ColorImageU8::from_raw(2, 2, vec![0u8; 11]).is_none());
        assert!(ColorImageU8::from_raw(2, 2, vec![0u8; 12]).is_some());
    }
}
