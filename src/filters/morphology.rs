//! Grayscale and per-channel color morphology with all-ones square
//! structuring elements. Windows clamp at the image border.
use crate::image::{ColorImageU8, GrayImageU8};

/// Dilate: per-pixel maximum over a `ksize × ksize` window.
pub fn dilate(src: &GrayImageU8, ksize: usize, iterations: usize) -> GrayImageU8 {
    apply_iterated(src, ksize, iterations, window_max)
}

/// Erode: per-pixel minimum over a `ksize × ksize` window.
pub fn erode(src: &GrayImageU8, ksize: usize, iterations: usize) -> GrayImageU8 {
    apply_iterated(src, ksize, iterations, window_min)
}

/// Morphological closing: dilate then erode, one iteration each.
pub fn close(src: &GrayImageU8, ksize: usize) -> GrayImageU8 {
    erode(&dilate(src, ksize, 1), ksize, 1)
}

fn apply_iterated(
    src: &GrayImageU8,
    ksize: usize,
    iterations: usize,
    op: fn(&GrayImageU8, usize, usize, isize) -> u8,
) -> GrayImageU8 {
    let radius = (ksize / 2) as isize;
    let mut current = src.clone();
    for _ in 0..iterations {
        let mut next = GrayImageU8::new(src.w, src.h);
        for y in 0..src.h {
            for x in 0..src.w {
                next.set(x, y, op(&current, x, y, radius));
            }
        }
        current = next;
    }
    current
}

fn window_max(img: &GrayImageU8, x: usize, y: usize, radius: isize) -> u8 {
    let mut best = 0u8;
    for dy in -radius..=radius {
        let yn = y as isize + dy;
        if yn < 0 || yn >= img.h as isize {
            continue;
        }
        for dx in -radius..=radius {
            let xn = x as isize + dx;
            if xn < 0 || xn >= img.w as isize {
                continue;
            }
            best = best.max(img.get(xn as usize, yn as usize));
        }
    }
    best
}

fn window_min(img: &GrayImageU8, x: usize, y: usize, radius: isize) -> u8 {
    let mut best = 255u8;
    for dy in -radius..=radius {
        let yn = y as isize + dy;
        if yn < 0 || yn >= img.h as isize {
            continue;
        }
        for dx in -radius..=radius {
            let xn = x as isize + dx;
            if xn < 0 || xn >= img.w as isize {
                continue;
            }
            best = best.min(img.get(xn as usize, yn as usize));
        }
    }
    best
}

/// Per-channel color dilation, used by the compositor's line smoothing.
pub fn dilate_color(src: &ColorImageU8, ksize: usize, iterations: usize) -> ColorImageU8 {
    apply_color(src, ksize, iterations, true)
}

/// Per-channel color erosion.
pub fn erode_color(src: &ColorImageU8, ksize: usize, iterations: usize) -> ColorImageU8 {
    apply_color(src, ksize, iterations, false)
}

fn apply_color(src: &ColorImageU8, ksize: usize, iterations: usize, max: bool) -> ColorImageU8 {
    let radius = (ksize / 2) as isize;
    let mut current = src.clone();
    for _ in 0..iterations {
        let mut next = ColorImageU8::new(src.w, src.h);
        for y in 0..src.h {
            for x in 0..src.w {
                let mut acc = if max { [0u8; 3] } else { [255u8; 3] };
                for dy in -radius..=radius {
                    let yn = y as isize + dy;
                    if yn < 0 || yn >= src.h as isize {
                        continue;
                    }
                    for dx in -radius..=radius {
                        let xn = x as isize + dx;
                        if xn < 0 || xn >= src.w as isize {
                            continue;
                        }
                        let px = current.get(xn as usize, yn as usize);
                        for c in 0..3 {
                            acc[c] = if max { acc[c].max(px[c]) } else { acc[c].min(px[c]) };
                        }
                    }
                }
                next.set(x, y, acc);
            }
        }
        current = next;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dilate_grows_a_single_pixel() {
        let mut img = GrayImageU8::new(9, 9);
        img.set(4, 4, 255);
        let grown = dilate(&img, 5, 1);
        assert_eq!(grown.get(2, 2), 255);
        assert_eq!(grown.get(6, 6), 255);
        assert_eq!(grown.get(1, 4), 0);
    }

    #[test]
    fn erode_removes_an_isolated_pixel() {
        let mut img = GrayImageU8::new(9, 9);
        img.set(4, 4, 255);
        let shrunk = erode(&img, 3, 1);
        assert!(shrunk.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn close_fills_a_small_gap() {
        // Two 255 runs separated by a 2-px gap on one row; a 5×5 closing
        // bridges the gap.
        let mut img = GrayImageU8::new(20, 7);
        for x in 2..9 {
            img.set(x, 3, 255);
        }
        for x in 11..18 {
            img.set(x, 3, 255);
        }
        let closed = close(&img, 5);
        assert_eq!(closed.get(9, 3), 255);
        assert_eq!(closed.get(10, 3), 255);
    }

    #[test]
    fn color_dilate_then_erode_keeps_thick_strokes() {
        let mut img = ColorImageU8::new(12, 12);
        for y in 4..8 {
            for x in 2..10 {
                img.set(x, y, [0, 0, 255]);
            }
        }
        let smoothed = erode_color(&dilate_color(&img, 3, 1), 3, 1);
        assert_eq!(smoothed.get(5, 5), [0, 0, 255]);
        assert_eq!(smoothed.get(0, 0), [0, 0, 0]);
    }
}
