//! `ssm-core` — foundational types for the ssm street-map engine.
//!
//! This crate is a dependency of every other `ssm-*` crate. It has no
//! `ssm-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! | Module  | Contents                        |
//! |---------|---------------------------------|
//! | [`ids`] | `NodeId`, `WayId`               |
//! | [`geo`] | `GeoPoint`, Haversine distance  |

pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

pub use geo::GeoPoint;
pub use ids::{NodeId, WayId};
