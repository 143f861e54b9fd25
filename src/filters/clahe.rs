//! Contrast-limited adaptive histogram equalization.
//!
//! The image is partitioned into a grid of tiles; each tile gets its own
//! clipped histogram and equalization mapping, and pixels are remapped by
//! bilinear interpolation between the four surrounding tile mappings.
//! Clipped histogram mass is redistributed uniformly across all bins.
use crate::image::GrayImageU8;

const BINS: usize = 256;

/// Equalize with the given clip limit and tile grid (columns, rows).
///
/// `clip_limit` is the conventional multiplier on the uniform bin height;
/// the absolute per-bin cap for a tile of area `A` is
/// `max(1, clip_limit * A / 256)`.
pub fn clahe(src: &GrayImageU8, clip_limit: f32, tiles: (usize, usize)) -> GrayImageU8 {
    let (w, h) = (src.w, src.h);
    let tx = tiles.0.clamp(1, w.max(1));
    let ty = tiles.1.clamp(1, h.max(1));

    let luts = tile_mappings(src, clip_limit, tx, ty);

    let mut out = GrayImageU8::new(w, h);
    for y in 0..h {
        // Tile-space vertical coordinate and bracketing tile rows.
        let fy = (y as f32 + 0.5) * ty as f32 / h as f32 - 0.5;
        let jy = fy.floor();
        let wy = fy - jy;
        let j0 = (jy.max(0.0) as usize).min(ty - 1);
        let j1 = ((jy + 1.0).max(0.0) as usize).min(ty - 1);

        for x in 0..w {
            let fx = (x as f32 + 0.5) * tx as f32 / w as f32 - 0.5;
            let ix = fx.floor();
            let wx = fx - ix;
            let i0 = (ix.max(0.0) as usize).min(tx - 1);
            let i1 = ((ix + 1.0).max(0.0) as usize).min(tx - 1);

            let v = src.get(x, y) as usize;
            let top = lerp(
                luts[j0 * tx + i0][v] as f32,
                luts[j0 * tx + i1][v] as f32,
                wx,
            );
            let bottom = lerp(
                luts[j1 * tx + i0][v] as f32,
                luts[j1 * tx + i1][v] as f32,
                wx,
            );
            out.set(x, y, lerp(top, bottom, wy).round().clamp(0.0, 255.0) as u8);
        }
    }
    out
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// One clipped-equalization lookup table per tile, row-major over tiles.
fn tile_mappings(src: &GrayImageU8, clip_limit: f32, tx: usize, ty: usize) -> Vec<[u8; BINS]> {
    let (w, h) = (src.w, src.h);
    let mut luts = Vec::with_capacity(tx * ty);
    for j in 0..ty {
        let y0 = j * h / ty;
        let y1 = ((j + 1) * h / ty).max(y0 + 1).min(h);
        for i in 0..tx {
            let x0 = i * w / tx;
            let x1 = ((i + 1) * w / tx).max(x0 + 1).min(w);

            let mut hist = [0u32; BINS];
            for y in y0..y1 {
                let row = src.row(y);
                for &px in &row[x0..x1] {
                    hist[px as usize] += 1;
                }
            }

            let area = ((x1 - x0) * (y1 - y0)) as u32;
            clip_histogram(&mut hist, clip_limit, area);
            luts.push(histogram_to_lut(&hist, area));
        }
    }
    luts
}

/// Cap bins at the clip limit and spread the excess uniformly.
fn clip_histogram(hist: &mut [u32; BINS], clip_limit: f32, area: u32) {
    let limit = ((clip_limit * area as f32 / BINS as f32) as u32).max(1);
    let mut excess = 0u32;
    for bin in hist.iter_mut() {
        if *bin > limit {
            excess += *bin - limit;
            *bin = limit;
        }
    }
    let bump = excess / BINS as u32;
    let leftover = (excess % BINS as u32) as usize;
    for bin in hist.iter_mut() {
        *bin += bump;
    }
    for bin in hist.iter_mut().take(leftover) {
        *bin += 1;
    }
}

/// Cumulative mapping scaled to the full 8-bit range.
fn histogram_to_lut(hist: &[u32; BINS], area: u32) -> [u8; BINS] {
    let scale = 255.0 / area as f32;
    let mut lut = [0u8; BINS];
    let mut cdf = 0u32;
    for (i, &count) in hist.iter().enumerate() {
        cdf += count;
        lut[i] = (cdf as f32 * scale).round().clamp(0.0, 255.0) as u8;
    }
    lut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_matches_input_dimensions() {
        let img = GrayImageU8::new(100, 60);
        let eq = clahe(&img, 3.0, (8, 8));
        assert_eq!((eq.w, eq.h), (100, 60));
    }

    #[test]
    fn constant_image_stays_uniform() {
        let img = GrayImageU8::from_raw(64, 64, vec![90u8; 64 * 64]).unwrap();
        let eq = clahe(&img, 3.0, (8, 8));
        let first = eq.data[0];
        assert!(eq.data.iter().all(|&v| v == first));
    }

    #[test]
    fn stretches_low_contrast_gradient() {
        // A narrow-range horizontal ramp should span a wider range after
        // equalization.
        let mut img = GrayImageU8::new(128, 64);
        for y in 0..64 {
            for x in 0..128 {
                img.set(x, y, 100 + (x / 8) as u8);
            }
        }
        let eq = clahe(&img, 3.0, (8, 8));
        let min = *eq.data.iter().min().unwrap();
        let max = *eq.data.iter().max().unwrap();
        assert!(max - min > 16, "range not stretched: {min}..{max}");
    }

    #[test]
    fn handles_tiny_images() {
        let img = GrayImageU8::from_raw(3, 2, vec![10, 200, 30, 40, 50, 60]).unwrap();
        let eq = clahe(&img, 3.0, (8, 8));
        assert_eq!((eq.w, eq.h), (3, 2));
    }
}
