//! Zone Lines Builder Library
//!
//! zone_points.json → graph → reverse matching → trigger boxes → zone_lines.json
//!
//! The resolver itself lives in `zl_core`; this crate is the glue around it:
//! loading the raw transition records, the static zone registry, and the
//! output document with its one-decimal trigger bounds.

pub mod zones;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use zl_core::{emit_zone_lines, AxisValue, EmitStats, ZoneGraph, ZoneLine, ZonePoint, ZoneTable};

/// Raw transition record as stored in zone_points.json. Target coordinates
/// still carry the numeric "keep this axis" marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawZonePoint {
    pub zone: String,
    pub number: u32,
    pub source_x: f64,
    pub source_y: f64,
    pub source_z: f64,
    pub target_zone_id: u32,
    pub target_x: f64,
    pub target_y: f64,
    pub target_z: f64,
    pub target_heading: f64,
}

impl From<RawZonePoint> for ZonePoint {
    /// The marker comparison happens exactly once, here at the load boundary.
    fn from(raw: RawZonePoint) -> Self {
        ZonePoint {
            zone: raw.zone,
            number: raw.number,
            source_x: raw.source_x,
            source_y: raw.source_y,
            source_z: raw.source_z,
            target_zone_id: raw.target_zone_id,
            target_x: AxisValue::from_raw(raw.target_x),
            target_y: AxisValue::from_raw(raw.target_y),
            target_z: raw.target_z,
            target_heading: raw.target_heading,
        }
    }
}

/// Load zone points from a zone_points.json file.
pub fn load_zone_points(path: &Path) -> Result<Vec<ZonePoint>> {
    let json_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read zone points file: {}", path.display()))?;

    let raw: Vec<RawZonePoint> = serde_json::from_str(&json_str)
        .with_context(|| format!("Failed to parse zone points JSON: {}", path.display()))?;

    Ok(raw.into_iter().map(ZonePoint::from).collect())
}

/// Trigger box as written to zone_lines.json: one decimal of precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerBoxDoc {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

/// Destination pose as written to zone_lines.json. The x/y values keep the
/// raw marker encoding so the file round-trips the source data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DestinationDoc {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub heading: f64,
}

/// One zone-line entry in the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneLineDoc {
    pub zone_point_index: u32,
    pub destination_zone: String,
    pub destination_zone_id: u32,
    pub trigger_box: TriggerBoxDoc,
    pub destination: DestinationDoc,
    pub notes: String,
    /// Present in the file only when true.
    #[serde(default, skip_serializing_if = "is_false")]
    pub needs_review: bool,
}

/// Per-zone section of the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDoc {
    pub zone_name: String,
    pub zone_lines: Vec<ZoneLineDoc>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl ZoneLineDoc {
    fn from_line(line: &ZoneLine) -> Self {
        ZoneLineDoc {
            zone_point_index: line.zone_point_index,
            destination_zone: line.destination_zone.clone(),
            destination_zone_id: line.destination_zone_id,
            trigger_box: TriggerBoxDoc {
                min_x: round1(line.trigger_box.min_x),
                max_x: round1(line.trigger_box.max_x),
                min_y: round1(line.trigger_box.min_y),
                max_y: round1(line.trigger_box.max_y),
                min_z: round1(line.trigger_box.min_z),
                max_z: round1(line.trigger_box.max_z),
            },
            destination: DestinationDoc {
                x: line.dest_x,
                y: line.dest_y,
                z: line.dest_z,
                heading: line.dest_heading,
            },
            notes: line.notes.clone(),
            needs_review: line.needs_review,
        }
    }
}

/// Resolve `points` into the output document, keyed by zone name.
///
/// The graph is built from every point so reverse matching can see zones
/// outside the filter; only filtered zones are emitted.
pub fn generate(
    points: Vec<ZonePoint>,
    table: &ZoneTable,
    filter: Option<&BTreeSet<String>>,
) -> (BTreeMap<String, ZoneDoc>, EmitStats) {
    let graph = ZoneGraph::build(points);
    let (resolved, stats) = emit_zone_lines(&graph, table, filter);

    let docs = resolved
        .into_iter()
        .map(|(zone_name, lines)| {
            let doc = ZoneDoc {
                zone_name: zone_name.clone(),
                zone_lines: lines.iter().map(ZoneLineDoc::from_line).collect(),
            };
            (zone_name, doc)
        })
        .collect();

    (docs, stats)
}

/// Serialize the document and write it to `output`, creating parent
/// directories as needed.
pub fn write_zone_lines(docs: &BTreeMap<String, ZoneDoc>, output: &Path) -> Result<()> {
    let json_str = serde_json::to_string_pretty(docs).context("Failed to serialize zone lines")?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(output, json_str)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    Ok(())
}

/// Full pipeline: load zone points, resolve, write zone_lines.json.
pub fn build_zone_lines(
    input: &Path,
    output: &Path,
    table: &ZoneTable,
    filter: Option<&BTreeSet<String>>,
) -> Result<EmitStats> {
    let points = load_zone_points(input)?;
    let (docs, stats) = generate(points, table, filter);
    write_zone_lines(&docs, output)?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_json() -> String {
        serde_json::json!([
            {
                "zone": "commons",
                "number": 0,
                "source_x": 100.0,
                "source_y": 200.33,
                "source_z": 0.0,
                "target_zone_id": 22,
                "target_x": 999999.0,
                "target_y": 300.0,
                "target_z": 5.0,
                "target_heading": 128.0
            },
            {
                "zone": "ecommons",
                "number": 0,
                "source_x": 100.0,
                "source_y": 320.0,
                "source_z": 0.0,
                "target_zone_id": 21,
                "target_x": 150.25,
                "target_y": 999999.0,
                "target_z": 0.0,
                "target_heading": 0.0
            },
            {
                "zone": "commons",
                "number": 1,
                "source_x": 0.0,
                "source_y": 0.0,
                "source_z": 0.0,
                "target_zone_id": 999,
                "target_x": 1.0,
                "target_y": 2.0,
                "target_z": 3.0,
                "target_heading": 0.0
            }
        ])
        .to_string()
    }

    #[test]
    fn loads_and_tags_markers_at_the_boundary() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(sample_json().as_bytes())?;

        let points = load_zone_points(file.path())?;
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].target_x, AxisValue::FollowSource);
        assert_eq!(points[0].target_y, AxisValue::Fixed(300.0));
        assert_eq!(points[1].target_y, AxisValue::FollowSource);
        Ok(())
    }

    #[test]
    fn generates_the_output_document() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(sample_json().as_bytes())?;

        let points = load_zone_points(file.path())?;
        let (docs, stats) = generate(points, &zones::zone_table(), None);

        assert_eq!(stats.emitted, 2);
        assert_eq!(stats.dropped_unknown_zone, 1);

        let commons = &docs["commons"];
        assert_eq!(commons.zone_name, "commons");
        assert_eq!(commons.zone_lines.len(), 1);
        let line = &commons.zone_lines[0];
        assert_eq!(line.destination_zone, "ecommons");
        // Marker survives into the destination pose
        assert_eq!(line.destination.x, 999_999.0);
        assert_eq!(line.destination.y, 300.0);
        Ok(())
    }

    #[test]
    fn bounds_are_rounded_to_one_decimal() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(sample_json().as_bytes())?;

        let points = load_zone_points(file.path())?;
        let (docs, _) = generate(points, &zones::zone_table(), None);

        // commons' fractional source_y flows into its band bounds; rounding
        // must apply to every bound of every box
        for doc in docs.values() {
            for line in &doc.zone_lines {
                for bound in [
                    line.trigger_box.min_x,
                    line.trigger_box.max_x,
                    line.trigger_box.min_y,
                    line.trigger_box.max_y,
                    line.trigger_box.min_z,
                    line.trigger_box.max_z,
                ] {
                    assert_eq!(round1(bound), bound, "unrounded bound {}", bound);
                }
            }
        }
        Ok(())
    }

    #[test]
    fn needs_review_is_omitted_when_false() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(sample_json().as_bytes())?;

        let points = load_zone_points(file.path())?;
        let (docs, _) = generate(points, &zones::zone_table(), None);
        let json = serde_json::to_string_pretty(&docs)?;

        let value: serde_json::Value = serde_json::from_str(&json)?;
        let line = &value["commons"]["zone_lines"][0];
        assert!(line.get("needs_review").is_none());
        assert!(line.get("notes").is_some());
        Ok(())
    }

    #[test]
    fn filter_limits_the_document() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(sample_json().as_bytes())?;

        let points = load_zone_points(file.path())?;
        let filter: BTreeSet<String> = ["ecommons".to_string()].into();
        let (docs, _) = generate(points, &zones::zone_table(), Some(&filter));

        assert_eq!(docs.len(), 1);
        assert!(docs.contains_key("ecommons"));
        // Reverse matching still saw commons: no review flag
        assert!(!docs["ecommons"].zone_lines[0].needs_review);
        Ok(())
    }

    #[test]
    fn full_pipeline_writes_deterministic_output() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(sample_json().as_bytes())?;

        let out_a = NamedTempFile::new()?;
        let out_b = NamedTempFile::new()?;
        let table = zones::zone_table();

        build_zone_lines(file.path(), out_a.path(), &table, None)?;
        build_zone_lines(file.path(), out_b.path(), &table, None)?;

        let a = fs::read_to_string(out_a.path())?;
        let b = fs::read_to_string(out_b.path())?;
        assert_eq!(a, b);
        assert!(a.contains("\"zone_name\": \"commons\""));
        Ok(())
    }
}
