//! First-fit merging of near-duplicate line segments.
//!
//! Segments are appended to an index arena in input order while disjoint
//! index groups grow alongside; each group's *reference line* is its
//! first-inserted member. A segment joins the first group (in creation
//! order) whose reference satisfies both thresholds; otherwise it opens a
//! new singleton group. Each group then collapses to one representative.
//!
//! Two deliberate simplifications are part of the contract, traded for
//! speed:
//! - comparisons use the group's reference line, not a running centroid;
//! - the distance check pairs endpoints by index (p0-to-p0, p1-to-p1),
//!   so segments recorded with swapped endpoint orientation can stay
//!   unmerged even when geometrically close.
//! Both can under-merge; callers compensate with the angle/distance
//! thresholds rather than a smarter matcher.
use super::LineSegment;
use crate::angle::endpoint_distance;

/// Default angular similarity threshold in degrees.
pub const DEFAULT_ANGLE_THRESHOLD_DEG: f32 = 10.0;
/// Default endpoint proximity threshold in pixels.
pub const DEFAULT_DISTANCE_THRESHOLD_PX: f32 = 20.0;

/// Collapse near-duplicate segments into representative averaged lines.
///
/// The angle comparison is a plain `|a - b|` on degree values with no
/// wraparound, and representatives of multi-member groups average the
/// endpoints component-wise (truncated to integer pixels) and the angle
/// (kept as float). Size-1 groups return the original segment unchanged.
/// An empty input returns an empty list.
pub fn merge_similar_lines(
    lines: &[LineSegment],
    angle_threshold_deg: f32,
    distance_threshold_px: f32,
) -> Vec<LineSegment> {
    if lines.is_empty() {
        return Vec::new();
    }

    let mut arena: Vec<LineSegment> = Vec::with_capacity(lines.len());
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for line in lines {
        let mut matched = false;
        for group in groups.iter_mut() {
            let reference = &arena[group[0]];
            if (line.angle_deg - reference.angle_deg).abs() < angle_threshold_deg {
                let dist = endpoint_distance(line.p0, reference.p0)
                    .min(endpoint_distance(line.p1, reference.p1));
                if dist < distance_threshold_px {
                    group.push(arena.len());
                    matched = true;
                    break;
                }
            }
        }
        if !matched {
            groups.push(vec![arena.len()]);
        }
        arena.push(*line);
    }

    groups
        .iter()
        .map(|group| {
            if group.len() == 1 {
                arena[group[0]]
            } else {
                representative(&arena, group)
            }
        })
        .collect()
}

/// Component-wise mean of a group, coordinates truncated to integers.
fn representative(arena: &[LineSegment], group: &[usize]) -> LineSegment {
    let inv = 1.0 / group.len() as f32;
    let mut x0 = 0.0f32;
    let mut y0 = 0.0f32;
    let mut x1 = 0.0f32;
    let mut y1 = 0.0f32;
    let mut angle = 0.0f32;
    for &i in group {
        let seg = &arena[i];
        x0 += seg.p0[0] as f32;
        y0 += seg.p0[1] as f32;
        x1 += seg.p1[0] as f32;
        y1 += seg.p1[1] as f32;
        angle += seg.angle_deg;
    }
    LineSegment::new(
        [(x0 * inv) as i32, (y0 * inv) as i32],
        [(x1 * inv) as i32, (y1 * inv) as i32],
        angle * inv,
    )
}
