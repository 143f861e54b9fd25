//! Rendering of merged palm lines back onto the photo.
//!
//! Merged segments are drawn in red on a blank canvas, the canvas is
//! smoothed with one dilate/erode round, alpha-blended over the original
//! image and the result is rescaled for contrast before converting from
//! the BGR processing order to RGB for display.
use crate::filters::{dilate_color, erode_color};
use crate::image::ColorImageU8;
use crate::segments::LineSegment;

/// Line color in BGR order.
const LINE_COLOR: [u8; 3] = [0, 0, 255];
/// Blend weight of the original image.
const BLEND_ORIGINAL: f32 = 0.7;
/// Blend weight of the line canvas.
const BLEND_LINES: f32 = 1.0;
/// Linear gain of the final enhancement.
const ENHANCE_GAIN: f32 = 1.2;
/// Additive offset of the final enhancement.
const ENHANCE_OFFSET: f32 = 10.0;

/// Composite merged lines over the original BGR image; the result is in
/// display (RGB) channel order. An empty line list simply yields the
/// enhanced original.
pub fn composite_lines(original: &ColorImageU8, lines: &[LineSegment]) -> ColorImageU8 {
    let mut canvas = ColorImageU8::new(original.w, original.h);
    for line in lines {
        draw_line_2px(&mut canvas, line.p0, line.p1, LINE_COLOR);
    }

    // One dilate/erode round smooths jagged stroke borders without
    // materially changing the stroke width.
    let smoothed = erode_color(&dilate_color(&canvas, 3, 1), 3, 1);

    let mut out = ColorImageU8::new(original.w, original.h);
    for i in 0..out.data.len() {
        let blended =
            BLEND_ORIGINAL * original.data[i] as f32 + BLEND_LINES * smoothed.data[i] as f32;
        let blended = blended.round().clamp(0.0, 255.0);
        let enhanced = (ENHANCE_GAIN * blended + ENHANCE_OFFSET).round().clamp(0.0, 255.0);
        out.data[i] = enhanced as u8;
    }

    out.swap_channels()
}

/// Rasterize a 2-px-wide stroke: each Bresenham pixel is stamped together
/// with its neighbor perpendicular to the major axis.
fn draw_line_2px(canvas: &mut ColorImageU8, p0: [i32; 2], p1: [i32; 2], color: [u8; 3]) {
    let (mut x, mut y) = (p0[0], p0[1]);
    let dx = (p1[0] - p0[0]).abs();
    let dy = (p1[1] - p0[1]).abs();
    let sx = if p0[0] < p1[0] { 1 } else { -1 };
    let sy = if p0[1] < p1[1] { 1 } else { -1 };
    let mut err = dx - dy;
    let x_major = dx >= dy;

    loop {
        stamp(canvas, x, y, color);
        if x_major {
            stamp(canvas, x, y + 1, color);
        } else {
            stamp(canvas, x + 1, y, color);
        }
        if x == p1[0] && y == p1[1] {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

#[inline]
fn stamp(canvas: &mut ColorImageU8, x: i32, y: i32, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as usize) < canvas.w && (y as usize) < canvas.h {
        canvas.set(x as usize, y as usize, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_list_applies_only_the_enhancement() {
        let original = ColorImageU8::from_raw(16, 12, vec![100u8; 16 * 12 * 3]).unwrap();
        let out = composite_lines(&original, &[]);
        assert_eq!((out.w, out.h), (16, 12));
        // blend: 0.7 * 100 = 70; enhance: 1.2 * 70 + 10 = 94.
        assert!(out.data.iter().all(|&v| v == 94));
    }

    #[test]
    fn drawn_line_shows_up_red_in_display_order() {
        let original = ColorImageU8::new(40, 40);
        let lines = [LineSegment::from_endpoints([5, 20], [35, 20])];
        let out = composite_lines(&original, &lines);
        // BGR (0,0,255) becomes RGB (255,...) after the swap; the line
        // pixel blends 0.7*0 + 255 → 255, then saturates at 255.
        let px = out.get(20, 20);
        assert_eq!(px[0], 255, "red channel on the stroke");
        // Background: 0 blends to 0, enhancement lifts it to 10.
        assert_eq!(out.get(20, 5), [10, 10, 10]);
    }

    #[test]
    fn stroke_is_at_least_two_pixels_wide() {
        let original = ColorImageU8::new(40, 40);
        let lines = [LineSegment::from_endpoints([5, 20], [35, 20])];
        let out = composite_lines(&original, &lines);
        assert_eq!(out.get(20, 20)[0], 255);
        assert_eq!(out.get(20, 21)[0], 255);
    }

    #[test]
    fn out_of_bounds_endpoints_are_clipped() {
        let original = ColorImageU8::new(20, 20);
        let lines = [LineSegment::from_endpoints([-10, -10], [30, 30])];
        let out = composite_lines(&original, &lines);
        assert_eq!((out.w, out.h), (20, 20));
        assert_eq!(out.get(10, 10)[0], 255);
    }
}
