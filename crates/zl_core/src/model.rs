//! Value-object models for the zone-line resolver.
//!
//! Everything here is constructed once from loaded data and read-only
//! afterwards. Derived geometry (zone-in point, displacement, classification)
//! is computed by pure functions over these values, never cached as state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw wire value meaning "keep the traveler's coordinate on this axis".
pub const SAME_COORD_MARKER: f64 = 999_999.0;

/// One target-position axis: either a literal destination coordinate or a
/// marker meaning "carry the corresponding source coordinate forward".
///
/// The raw data encodes the marker as a reserved magnitude; classifying it
/// here, at the load boundary, keeps downstream logic from ever comparing
/// floats against the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AxisValue {
    Fixed(f64),
    FollowSource,
}

impl AxisValue {
    /// Classify a raw wire value. Matched with slack so both `999999` and
    /// `-999999` (and float noise around them) map to `FollowSource`.
    pub fn from_raw(raw: f64) -> Self {
        if raw.abs() >= SAME_COORD_MARKER - 1.0 {
            AxisValue::FollowSource
        } else {
            AxisValue::Fixed(raw)
        }
    }

    /// Raw wire representation, for emitting destination poses unchanged.
    pub fn to_raw(self) -> f64 {
        match self {
            AxisValue::Fixed(v) => v,
            AxisValue::FollowSource => SAME_COORD_MARKER,
        }
    }

    /// Substitute the corresponding source coordinate where required.
    pub fn resolve(self, source: f64) -> f64 {
        match self {
            AxisValue::Fixed(v) => v,
            AxisValue::FollowSource => source,
        }
    }

    pub fn is_follow_source(self) -> bool {
        matches!(self, AxisValue::FollowSource)
    }
}

/// One directed crossing: a position in the origin zone that sends a traveler
/// to a position (and heading) in the destination zone.
///
/// Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZonePoint {
    /// Origin zone name.
    pub zone: String,
    /// Ordinal within the origin zone. Matching hint only; not unique.
    pub number: u32,
    /// Source position, server convention.
    pub source_x: f64,
    pub source_y: f64,
    pub source_z: f64,
    /// Destination zone id.
    pub target_zone_id: u32,
    /// Destination position; x and y may follow the source coordinate.
    pub target_x: AxisValue,
    pub target_y: AxisValue,
    pub target_z: f64,
    /// Heading applied on arrival.
    pub target_heading: f64,
}

/// Axis-aligned trigger volume, display convention.
///
/// Invariant: `min <= max` on every axis. Synthesis constructs bounds in
/// that order on every branch; [`TriggerBox::is_well_formed`] exists so
/// tests can assert it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl TriggerBox {
    pub fn is_well_formed(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y && self.min_z <= self.max_z
    }
}

/// One resolved zone line: the synthesized trigger volume plus the pose the
/// traveler is placed at on arrival.
///
/// `dest_x`/`dest_y` keep the raw wire encoding (marker included) so output
/// round-trips the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneLine {
    pub zone_point_index: u32,
    pub destination_zone: String,
    pub destination_zone_id: u32,
    pub trigger_box: TriggerBox,
    pub dest_x: f64,
    pub dest_y: f64,
    pub dest_z: f64,
    pub dest_heading: f64,
    /// Free-text rationale for how the box was placed.
    pub notes: String,
    /// True when the placement rests on a flagged approximation.
    pub needs_review: bool,
}

/// Read-only zone-id <-> zone-name lookup.
///
/// Always injected into the matcher and emitter rather than held as global
/// state, so tests can substitute a synthetic table.
#[derive(Debug, Clone, Default)]
pub struct ZoneTable {
    id_to_name: BTreeMap<u32, String>,
    name_to_id: BTreeMap<String, u32>,
}

impl ZoneTable {
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<String>,
    {
        let mut table = ZoneTable::default();
        for (id, name) in pairs {
            let name = name.into();
            table.name_to_id.insert(name.clone(), id);
            table.id_to_name.insert(id, name);
        }
        table
    }

    pub fn name(&self, id: u32) -> Option<&str> {
        self.id_to_name.get(&id).map(String::as_str)
    }

    pub fn id(&self, name: &str) -> Option<u32> {
        self.name_to_id.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.id_to_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_name.is_empty()
    }
}
