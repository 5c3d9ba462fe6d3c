//! # zl_core - Deterministic Zone-Line Resolver
//!
//! Reconstructs crossing geometry for a world's zone transitions: given
//! one-directional transition points (a position in zone A that sends a
//! traveler to a position in zone B), synthesize the 3D trigger volume in
//! zone A that fires when a traveler approaches the crossing, plus the
//! destination pose to place them at on arrival.
//!
//! ## Features
//! - 100% deterministic resolution (same input = byte-identical output)
//! - Reverse-edge matching with an ordered, testable tie-break
//! - Graceful degradation when data is incomplete (review flags, never errors)
//!
//! The resolver is pure and synchronous; the [`graph::ZoneGraph`] is built
//! once and read-only afterwards, so distinct zones can be resolved in
//! parallel without locking if throughput ever matters.

pub mod coords;
pub mod emitter;
pub mod graph;
pub mod matcher;
pub mod model;
pub mod synth;

// Re-export the resolver surface
pub use coords::server_to_display;
pub use emitter::{emit_zone_lines, EmitStats};
pub use graph::ZoneGraph;
pub use matcher::find_reverse;
pub use model::{AxisValue, TriggerBox, ZoneLine, ZonePoint, ZoneTable};
pub use synth::{synthesize, Synthesis};
