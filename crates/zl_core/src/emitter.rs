//! Per-zone resolution and output assembly.

use crate::graph::ZoneGraph;
use crate::matcher::find_reverse;
use crate::model::{ZoneLine, ZoneTable};
use crate::synth::synthesize;
use std::collections::{BTreeMap, BTreeSet};

/// Resolution statistics for one emission pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitStats {
    /// Points considered (in emitted zones).
    pub total_points: u32,
    /// Zone lines produced.
    pub emitted: u32,
    /// Points dropped because their destination id has no table entry.
    pub dropped_unknown_zone: u32,
    /// Emitted lines carrying the review flag.
    pub needs_review: u32,
}

/// Resolve every transition in the graph into zone lines, grouped by origin
/// zone in name order.
///
/// `filter`, when present, restricts which origin zones are emitted; the
/// matcher always sees the full graph, so a filtered run still finds reverse
/// connections in zones outside the filter. Transitions targeting a zone id
/// the table does not know are dropped and counted, never an error. Zones
/// ending up with no lines are omitted from the result.
pub fn emit_zone_lines(
    graph: &ZoneGraph,
    table: &ZoneTable,
    filter: Option<&BTreeSet<String>>,
) -> (BTreeMap<String, Vec<ZoneLine>>, EmitStats) {
    let mut result: BTreeMap<String, Vec<ZoneLine>> = BTreeMap::new();
    let mut stats = EmitStats::default();

    for (zone_name, points) in graph.zones() {
        if let Some(filter) = filter {
            if !filter.contains(zone_name) {
                continue;
            }
        }

        let mut lines = Vec::new();

        for point in points {
            stats.total_points += 1;

            let Some(destination_zone) = table.name(point.target_zone_id) else {
                // Data-completeness gap upstream, not an error.
                log::debug!(
                    "dropping {}#{}: unregistered destination zone id {}",
                    zone_name,
                    point.number,
                    point.target_zone_id
                );
                stats.dropped_unknown_zone += 1;
                continue;
            };

            let reverse = find_reverse(graph, table, point);
            let synthesis = synthesize(point, reverse);

            stats.emitted += 1;
            if synthesis.needs_review {
                stats.needs_review += 1;
            }

            lines.push(ZoneLine {
                zone_point_index: point.number,
                destination_zone: destination_zone.to_string(),
                destination_zone_id: point.target_zone_id,
                trigger_box: synthesis.trigger_box,
                dest_x: point.target_x.to_raw(),
                dest_y: point.target_y.to_raw(),
                dest_z: point.target_z,
                dest_heading: point.target_heading,
                notes: synthesis.notes,
                needs_review: synthesis.needs_review,
            });
        }

        if !lines.is_empty() {
            result.insert(zone_name.to_string(), lines);
        }
    }

    (result, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AxisValue, ZonePoint, SAME_COORD_MARKER};

    const COMMONS: u32 = 21;
    const ECOMMONS: u32 = 22;
    const KITHICOR: u32 = 20;

    fn table() -> ZoneTable {
        ZoneTable::from_pairs([(KITHICOR, "kithicor"), (COMMONS, "commons"), (ECOMMONS, "ecommons")])
    }

    fn point(
        zone: &str,
        number: u32,
        source: (f64, f64, f64),
        target_zone_id: u32,
        target: (AxisValue, AxisValue, f64),
    ) -> ZonePoint {
        ZonePoint {
            zone: zone.to_string(),
            number,
            source_x: source.0,
            source_y: source.1,
            source_z: source.2,
            target_zone_id,
            target_x: target.0,
            target_y: target.1,
            target_z: target.2,
            target_heading: 128.0,
        }
    }

    fn sample_points() -> Vec<ZonePoint> {
        vec![
            point(
                "commons",
                0,
                (100.0, 200.0, 0.0),
                ECOMMONS,
                (AxisValue::FollowSource, AxisValue::Fixed(300.0), 5.0),
            ),
            point(
                "ecommons",
                0,
                (100.0, 320.0, 0.0),
                COMMONS,
                (AxisValue::Fixed(150.0), AxisValue::FollowSource, 0.0),
            ),
            // Destination id nobody registered
            point(
                "commons",
                1,
                (0.0, 0.0, 0.0),
                404,
                (AxisValue::Fixed(1.0), AxisValue::Fixed(2.0), 0.0),
            ),
        ]
    }

    #[test]
    fn resolves_and_groups_by_zone_in_name_order() {
        let graph = ZoneGraph::build(sample_points());
        let (result, stats) = emit_zone_lines(&graph, &table(), None);

        let zones: Vec<&String> = result.keys().collect();
        assert_eq!(zones, vec!["commons", "ecommons"]);

        let commons = &result["commons"];
        assert_eq!(commons.len(), 1);
        assert_eq!(commons[0].destination_zone, "ecommons");
        assert_eq!(commons[0].destination_zone_id, ECOMMONS);
        assert_eq!(commons[0].zone_point_index, 0);
        // Raw wire encoding kept for the destination pose
        assert_eq!(commons[0].dest_x, SAME_COORD_MARKER);
        assert_eq!(commons[0].dest_y, 300.0);
        assert_eq!(commons[0].dest_z, 5.0);
        assert_eq!(commons[0].dest_heading, 128.0);
        assert!(commons[0].trigger_box.is_well_formed());

        assert_eq!(stats.total_points, 3);
        assert_eq!(stats.emitted, 2);
        assert_eq!(stats.dropped_unknown_zone, 1);
    }

    #[test]
    fn unregistered_destination_never_appears_in_output() {
        let graph = ZoneGraph::build(sample_points());
        let (result, _) = emit_zone_lines(&graph, &table(), None);

        for lines in result.values() {
            for line in lines {
                assert_ne!(line.destination_zone_id, 404);
            }
        }
    }

    #[test]
    fn filter_restricts_emission_but_not_matching() {
        let graph = ZoneGraph::build(sample_points());
        let filter: BTreeSet<String> = ["commons".to_string()].into();
        let (result, stats) = emit_zone_lines(&graph, &table(), Some(&filter));

        assert_eq!(result.len(), 1);
        assert!(result.contains_key("commons"));
        // The reverse point lives in ecommons, outside the filter, and is
        // still found: the line is not flagged for review.
        assert!(!result["commons"][0].needs_review);
        assert_eq!(stats.emitted, 1);
    }

    #[test]
    fn missing_reverse_flags_review() {
        let lone = point(
            "kithicor",
            0,
            (50.0, 50.0, 0.0),
            COMMONS,
            (AxisValue::Fixed(10.0), AxisValue::Fixed(10.0), 0.0),
        );
        let graph = ZoneGraph::build([lone]);
        let (result, stats) = emit_zone_lines(&graph, &table(), None);

        let line = &result["kithicor"][0];
        assert!(line.needs_review);
        assert!(line.notes.contains("no reverse connection"));
        assert_eq!(stats.needs_review, 1);
    }

    #[test]
    fn zones_with_no_surviving_lines_are_omitted() {
        let only_unknown = point(
            "commons",
            0,
            (0.0, 0.0, 0.0),
            404,
            (AxisValue::Fixed(1.0), AxisValue::Fixed(2.0), 0.0),
        );
        let graph = ZoneGraph::build([only_unknown]);
        let (result, stats) = emit_zone_lines(&graph, &table(), None);

        assert!(result.is_empty());
        assert_eq!(stats.dropped_unknown_zone, 1);
    }

    #[test]
    fn resolution_is_deterministic() {
        let graph = ZoneGraph::build(sample_points());
        let (first, first_stats) = emit_zone_lines(&graph, &table(), None);
        let (second, second_stats) = emit_zone_lines(&graph, &table(), None);

        assert_eq!(first, second);
        assert_eq!(first_stats, second_stats);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
