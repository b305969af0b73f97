//! Strongly typed, zero-cost identifier wrappers.
//!
//! Node and way ids are dense (`0..count`), so they double as direct
//! indices into the arena `Vec`s of the graph store. The inner integer is
//! `pub` for literal construction in tests and loaders; callers indexing
//! storage should prefer the `.index()` helper.
//!
//! `Display` prints the bare number (`"42"`, not `"NodeId(42)"`) because
//! these ids surface verbatim in user-facing output: error messages and
//! the space-joined id lists of the query REPL.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }
    };
}

typed_id! {
    /// Index of an intersection in the graph store.
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of a way (named road segment) in the graph store.
    pub struct WayId(u32);
}
