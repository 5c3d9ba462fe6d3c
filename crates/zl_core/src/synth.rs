//! Trigger-box synthesis.
//!
//! The trigger must sit *before* the point where a reverse-traveling actor
//! arrives (the zone-in point), placed toward the zone interior, so that a
//! traveler who actually zones in appears beyond the box and does not
//! immediately re-trigger it.

use crate::coords::server_to_display;
use crate::model::{TriggerBox, ZonePoint};

/// Units the trigger sits before the zone-in point, toward the interior.
pub const SAFETY_MARGIN: f64 = 20.0;
/// Depth of the trigger box in the direction of travel.
pub const TRIGGER_DEPTH: f64 = 10.0;
/// Seed width of confined boxes (expanded at runtime).
pub const CONFINED_WIDTH: f64 = 5.0;
/// Seed depth of confined boxes.
pub const CONFINED_DEPTH: f64 = 5.0;
/// Half-range covering an entire border on the open axis.
pub const CONTINUOUS_SPAN: f64 = 5000.0;
/// Vertical half-extent around the zone-in height.
pub const VERTICAL_EXTENT: f64 = 30.0;
/// Below this displacement on both axes there is no direction signal.
pub const PORTAL_THRESHOLD: f64 = 10.0;

/// Crossing shape along the horizontal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CrossingShape {
    /// Open front along server x: the traveler keeps their x coordinate.
    ContinuousX,
    /// Open front along server y.
    ContinuousY,
    /// Pinpoint crossing (door, portal).
    Confined,
}

/// Synthesized volume plus its rationale.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    pub trigger_box: TriggerBox,
    pub notes: String,
    pub needs_review: bool,
}

/// Produce the trigger box for `point` given its (possibly absent) reverse
/// connection. Total: every input lands in exactly one branch and every
/// branch fills all six bounds and a non-empty rationale.
pub fn synthesize(point: &ZonePoint, reverse: Option<&ZonePoint>) -> Synthesis {
    let mut notes: Vec<String> = Vec::new();
    let mut needs_review = false;

    let shape = match (
        point.target_x.is_follow_source(),
        point.target_y.is_follow_source(),
    ) {
        (true, true) => {
            // Malformed record: a well-formed crossing keeps at most one axis
            // open. Fall back to the x axis and flag it.
            notes.push("both target axes open; assuming continuity on server x".to_string());
            needs_review = true;
            CrossingShape::ContinuousX
        }
        (true, false) => CrossingShape::ContinuousX,
        (false, true) => CrossingShape::ContinuousY,
        (false, false) => CrossingShape::Confined,
    };

    let (source_mx, source_my) = server_to_display(point.source_x, point.source_y);

    let Some(reverse) = reverse else {
        // No way back from the destination zone: approximate the zone-in
        // point with our own source position. Heuristic only.
        notes.push("no reverse connection - needs review".to_string());
        return Synthesis {
            trigger_box: fallback_box(shape, source_mx, source_my, point.source_z),
            notes: notes.join("; "),
            needs_review: true,
        };
    };

    // Zone-in point: where travelers from the destination zone arrive here.
    let zone_in_x = reverse.target_x.resolve(point.source_x);
    let zone_in_y = reverse.target_y.resolve(point.source_y);
    let zone_in_z = reverse.target_z;
    let (zone_in_mx, zone_in_my) = server_to_display(zone_in_x, zone_in_y);

    notes.push(format!(
        "zone-in at m_x={:.0}, m_y={:.0}",
        zone_in_mx, zone_in_my
    ));

    let dx = zone_in_mx - source_mx;
    let dy = zone_in_my - source_my;

    let min_z = zone_in_z - VERTICAL_EXTENT;
    let max_z = zone_in_z + VERTICAL_EXTENT;

    let trigger_box = if dx.abs() < PORTAL_THRESHOLD && dy.abs() < PORTAL_THRESHOLD {
        // Source and zone-in nearly coincide: step-on-the-spot portal with no
        // usable direction signal. Center a seed square on the zone-in point.
        notes.push("portal-like: centered box (needs direction review)".to_string());
        needs_review = true;
        let half = CONFINED_WIDTH / 2.0;
        TriggerBox {
            min_x: zone_in_mx - half,
            max_x: zone_in_mx + half,
            min_y: zone_in_my - half,
            max_y: zone_in_my + half,
            min_z,
            max_z,
        }
    } else {
        match shape {
            CrossingShape::ContinuousX => {
                // Server x is open -> display m_y spans the border; the
                // trigger band lies on the m_x axis.
                let (min_x, max_x) = interior_band(zone_in_mx, dx, TRIGGER_DEPTH);
                if dx >= 0.0 {
                    notes.push(format!("continuous m_y, trigger at m_x<{:.0}", max_x));
                } else {
                    notes.push(format!("continuous m_y, trigger at m_x>{:.0}", min_x));
                }
                TriggerBox {
                    min_x,
                    max_x,
                    min_y: -CONTINUOUS_SPAN,
                    max_y: CONTINUOUS_SPAN,
                    min_z,
                    max_z,
                }
            }
            CrossingShape::ContinuousY => {
                let (min_y, max_y) = interior_band(zone_in_my, dy, TRIGGER_DEPTH);
                if dy >= 0.0 {
                    notes.push(format!("continuous m_x, trigger at m_y<{:.0}", max_y));
                } else {
                    notes.push(format!("continuous m_x, trigger at m_y>{:.0}", min_y));
                }
                TriggerBox {
                    min_x: -CONTINUOUS_SPAN,
                    max_x: CONTINUOUS_SPAN,
                    min_y,
                    max_y,
                    min_z,
                    max_z,
                }
            }
            CrossingShape::Confined => {
                let half = CONFINED_WIDTH / 2.0;
                if dx.abs() > dy.abs() {
                    let (min_x, max_x) = interior_band(zone_in_mx, dx, CONFINED_DEPTH);
                    notes.push("confined, dominant m_x (seed box)".to_string());
                    TriggerBox {
                        min_x,
                        max_x,
                        min_y: zone_in_my - half,
                        max_y: zone_in_my + half,
                        min_z,
                        max_z,
                    }
                } else {
                    let (min_y, max_y) = interior_band(zone_in_my, dy, CONFINED_DEPTH);
                    notes.push("confined, dominant m_y (seed box)".to_string());
                    TriggerBox {
                        min_x: zone_in_mx - half,
                        max_x: zone_in_mx + half,
                        min_y,
                        max_y,
                        min_z,
                        max_z,
                    }
                }
            }
        }
    };

    Synthesis {
        trigger_box,
        notes: notes.join("; "),
        needs_review,
    }
}

/// Band of `depth` placed `SAFETY_MARGIN` before `zone_in`, on the side the
/// displacement came from (toward the zone interior).
fn interior_band(zone_in: f64, displacement: f64, depth: f64) -> (f64, f64) {
    if displacement >= 0.0 {
        // Zone-in lies in the positive direction; trigger before it.
        let boundary = zone_in - SAFETY_MARGIN;
        (boundary - depth, boundary)
    } else {
        let boundary = zone_in + SAFETY_MARGIN;
        (boundary, boundary + depth)
    }
}

/// Best-effort box when no reverse connection exists, seeded from the
/// point's own source position.
fn fallback_box(shape: CrossingShape, source_mx: f64, source_my: f64, source_z: f64) -> TriggerBox {
    let min_z = source_z - VERTICAL_EXTENT;
    let max_z = source_z + VERTICAL_EXTENT;
    match shape {
        CrossingShape::ContinuousX => TriggerBox {
            min_x: source_mx - TRIGGER_DEPTH / 2.0,
            max_x: source_mx + TRIGGER_DEPTH / 2.0,
            min_y: -CONTINUOUS_SPAN,
            max_y: CONTINUOUS_SPAN,
            min_z,
            max_z,
        },
        CrossingShape::ContinuousY => TriggerBox {
            min_x: -CONTINUOUS_SPAN,
            max_x: CONTINUOUS_SPAN,
            min_y: source_my - TRIGGER_DEPTH / 2.0,
            max_y: source_my + TRIGGER_DEPTH / 2.0,
            min_z,
            max_z,
        },
        CrossingShape::Confined => {
            let half = CONFINED_WIDTH / 2.0;
            TriggerBox {
                min_x: source_mx - half,
                max_x: source_mx + half,
                min_y: source_my - half,
                max_y: source_my + half,
                min_z,
                max_z,
            }
        }
    }
}
