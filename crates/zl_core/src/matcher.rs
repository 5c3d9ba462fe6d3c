//! Reverse-connection matching.
//!
//! For a transition out of zone S into zone T, the reverse connection is the
//! transition in T that leads back into S. Its target is where travelers
//! from T arrive in S (the zone-in point the synthesizer places boxes
//! against). When several candidates lead back, the tie-break is an ordered
//! list of strategies so each can be tested on its own: an exact ordinal
//! match wins outright, otherwise the candidate whose resolved target lies
//! nearest the forward point's source.

use crate::graph::ZoneGraph;
use crate::model::{ZonePoint, ZoneTable};

/// Find the reverse connection for `point`, if any.
///
/// Returns `None` when the origin zone has no id in the table, the
/// destination id has no name, or no point in the destination zone leads
/// back to the origin. Never an error; the synthesizer degrades instead.
pub fn find_reverse<'a>(
    graph: &'a ZoneGraph,
    table: &ZoneTable,
    point: &ZonePoint,
) -> Option<&'a ZonePoint> {
    let origin_id = table.id(&point.zone)?;
    let target_name = table.name(point.target_zone_id)?;

    let candidates: Vec<&ZonePoint> = graph
        .points_in(target_name)
        .iter()
        .filter(|c| c.target_zone_id == origin_id)
        .collect();

    match candidates.len() {
        0 => None,
        1 => Some(candidates[0]),
        _ => {
            let picked = match_by_number(&candidates, point.number)
                .or_else(|| match_by_proximity(&candidates, point));
            if let Some(chosen) = picked {
                log::debug!(
                    "ambiguous reverse for {}#{} -> {}: {} candidates, picked #{}",
                    point.zone,
                    point.number,
                    target_name,
                    candidates.len(),
                    chosen.number
                );
            }
            picked
        }
    }
}

/// Strategy 1: first candidate sharing the forward point's ordinal.
pub fn match_by_number<'a>(candidates: &[&'a ZonePoint], number: u32) -> Option<&'a ZonePoint> {
    candidates.iter().copied().find(|c| c.number == number)
}

/// Strategy 2: candidate whose resolved target (server convention, follow
/// markers replaced by the forward point's source) lies nearest the forward
/// point's source, by squared distance. Equal distances keep the earliest
/// candidate.
pub fn match_by_proximity<'a>(
    candidates: &[&'a ZonePoint],
    point: &ZonePoint,
) -> Option<&'a ZonePoint> {
    candidates.iter().copied().min_by(|a, b| {
        resolved_distance_sq(a, point).total_cmp(&resolved_distance_sq(b, point))
    })
}

fn resolved_distance_sq(candidate: &ZonePoint, point: &ZonePoint) -> f64 {
    let tx = candidate.target_x.resolve(point.source_x);
    let ty = candidate.target_y.resolve(point.source_y);
    let dx = tx - point.source_x;
    let dy = ty - point.source_y;
    dx * dx + dy * dy
}
