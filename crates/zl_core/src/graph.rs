//! Zone graph: transition points grouped by origin zone.

use crate::model::ZonePoint;
use std::collections::BTreeMap;

/// Transition points grouped by origin zone, in input order within each zone.
///
/// Built once, read-only afterwards. Zone keys iterate in name order so a
/// full traversal is deterministic.
#[derive(Debug, Clone, Default)]
pub struct ZoneGraph {
    zones: BTreeMap<String, Vec<ZonePoint>>,
}

impl ZoneGraph {
    /// Group points by origin zone. Pure grouping: no validation, no
    /// deduplication.
    pub fn build<I>(points: I) -> Self
    where
        I: IntoIterator<Item = ZonePoint>,
    {
        let mut zones: BTreeMap<String, Vec<ZonePoint>> = BTreeMap::new();
        for point in points {
            zones.entry(point.zone.clone()).or_default().push(point);
        }
        ZoneGraph { zones }
    }

    /// Points whose origin is `zone`, in input order. Empty for unknown zones.
    pub fn points_in(&self, zone: &str) -> &[ZonePoint] {
        self.zones.get(zone).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Origin zones with at least one point, in name order.
    pub fn zones(&self) -> impl Iterator<Item = (&str, &[ZonePoint])> {
        self.zones
            .iter()
            .map(|(name, points)| (name.as_str(), points.as_slice()))
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    pub fn point_count(&self) -> usize {
        self.zones.values().map(Vec::len).sum()
    }
}
