//! `ssm-graph` — the street-map graph store and everything derived from it.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`map`]       | `Node`, `Way`, `StreetMap`; id lookup and name search |
//! | [`builder`]   | `StreetMapBuilder` — validated one-shot construction  |
//! | [`adjacency`] | `Neighbor`, `StreetMap::neighbors`                    |
//! | [`loader`]    | "Simple Street Map" text-format loading               |
//! | [`error`]     | `GraphError`, `LoadError`, `GraphResult<T>`           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Node`/`Way`.  |

pub mod adjacency;
pub mod builder;
pub mod error;
pub mod loader;
pub mod map;

mod spatial;

#[cfg(test)]
mod tests;

pub use adjacency::Neighbor;
pub use builder::StreetMapBuilder;
pub use error::{GraphError, GraphResult, LoadError};
pub use loader::{load_map, load_map_reader, parse_map};
pub use map::{Node, StreetMap, Way};
