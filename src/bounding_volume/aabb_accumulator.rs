use crate::bounding_volume::{Aabb, BoundingVolume};

/// A snapshot of the state of an [`AabbAccumulator`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct TrackedAabb {
    /// The accumulated box.
    ///
    /// Meaningless (and equal to [`Aabb::zero`]) if `valid` is `false`.
    pub aabb: Aabb,
    /// Whether at least one region has been accumulated into `aabb`.
    pub valid: bool,
}

impl TrackedAabb {
    /// The accumulated box, or `None` if nothing was accumulated yet.
    #[inline]
    pub fn get(&self) -> Option<Aabb> {
        if self.valid {
            Some(self.aabb)
        } else {
            None
        }
    }
}

/// Running union of the AABBs of every shape of a collision model.
///
/// The accumulated box can only grow: [`AabbAccumulator::expand`] is its only
/// mutator, and the result does not depend on the order in which regions are
/// accumulated.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct AabbAccumulator {
    aabb: Aabb,
    valid: bool,
}

impl Default for AabbAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl AabbAccumulator {
    /// An empty accumulator.
    pub fn new() -> Self {
        Self {
            aabb: Aabb::zero(),
            valid: false,
        }
    }

    /// Grows the accumulated box so it contains `extent`.
    ///
    /// The first call replaces the zero sentinel with `extent` itself.
    #[inline]
    pub fn expand(&mut self, extent: &Aabb) {
        if self.valid {
            self.aabb.merge(extent);
        } else {
            self.aabb = *extent;
            self.valid = true;
        }
    }

    /// The accumulated box together with its validity flag.
    #[inline]
    pub fn read(&self) -> TrackedAabb {
        TrackedAabb {
            aabb: self.aabb,
            valid: self.valid,
        }
    }

    /// The accumulated box, or `None` if [`AabbAccumulator::expand`] was never called.
    #[inline]
    pub fn get(&self) -> Option<Aabb> {
        self.read().get()
    }

    /// Whether at least one region has been accumulated.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}
