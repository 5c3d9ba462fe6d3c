//! Server <-> display coordinate conversion.
//!
//! The two conventions are related by an axis swap: display x is server y,
//! display y is server x. The swap is its own inverse, so the same function
//! converts in either direction.

/// Convert a server-convention `(x, y)` pair to display convention.
pub fn server_to_display(server_x: f64, server_y: f64) -> (f64, f64) {
    (server_y, server_x)
}
