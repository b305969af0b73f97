//! `ssm-routing` — route queries over a frozen [`StreetMap`].
//!
//! # Crate layout
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`heap`]   | `MinHeap` — indexed min-heap with decrease-key       |
//! | [`travel`] | `travel_time` — route validation + per-leg timing    |
//! | [`search`] | `shortest_path`, `Route` — Dijkstra's algorithm      |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                       |
//!
//! Queries are pure reads; the map is never touched, so any number of
//! them may run against it at once.
//!
//! [`StreetMap`]: ssm_graph::StreetMap

pub mod error;
pub mod heap;
pub mod search;
pub mod travel;


pub use error::{RouteError, RouteResult};
pub use heap::MinHeap;
pub use search::{Route, shortest_path};
pub use travel::travel_time;
