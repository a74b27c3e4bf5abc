//! Strongly typed, zero-cost identifier wrappers.
//!
//! Regions and portals live in flat arrays inside the mesh; these IDs are
//! the indices into those arrays.  `Copy + Ord + Hash` so they can be used
//! as map keys and sorted without ceremony.  The inner integer is `pub` to
//! allow direct indexing via `id.0 as usize`, but callers should prefer the
//! `.index()` helpers for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a region (traversable square) in the mesh.
    pub struct RegionId(u32);
}

typed_id! {
    /// Index of a portal (shared boundary segment) in the mesh.  One record
    /// per adjacency, referenced from both sides.
    pub struct PortalId(u32);
}
