use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, DIM};
use crate::partitioning::{
    Decomposition, DecompositionError, DecompositionVersion, SubdomainId, Subdomains,
};
use core::ops::Range;

/// A decomposition of space into contiguous slabs along a single axis.
///
/// The slabs are defined by strictly increasing boundaries `b0 < b1 < ... < bn`.
/// The `i`-th sub-domain is the half-open interval `[b(i), b(i+1))` along
/// [`SlabDecomposition::axis`], and is unbounded along the other axes.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use distcol3d::bounding_volume::Aabb;
/// use distcol3d::math::Point;
/// use distcol3d::partitioning::{Decomposition, SlabDecomposition};
///
/// let slabs = SlabDecomposition::new(0, vec![0.0, 5.0, 10.0]).unwrap();
/// let straddling = Aabb::new(Point::new(4.0, 0.0, 0.0), Point::new(6.0, 1.0, 1.0));
/// let touching = Aabb::new(Point::new(5.0, 0.0, 0.0), Point::new(7.0, 1.0, 1.0));
///
/// assert_eq!(slabs.classify(&straddling).subdomains(), &[0, 1]);
/// assert_eq!(slabs.classify(&touching).subdomains(), &[1]);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SlabDecomposition {
    axis: usize,
    boundaries: Vec<Real>,
    version: DecompositionVersion,
}

impl SlabDecomposition {
    /// Creates a slab decomposition along `axis` from its sorted boundaries.
    ///
    /// The first and last boundaries may be infinite, so that the slabs cover
    /// the whole space.
    pub fn new(axis: usize, boundaries: Vec<Real>) -> Result<Self, DecompositionError> {
        if axis >= DIM {
            return Err(DecompositionError::InvalidAxis(axis));
        }

        if boundaries.len() < 2 {
            return Err(DecompositionError::TooFewBoundaries);
        }

        if let Some(index) = boundaries.iter().position(|b| b.is_nan()) {
            return Err(DecompositionError::NanBoundary { index });
        }

        if let Some(index) = (1..boundaries.len()).find(|&i| boundaries[i] <= boundaries[i - 1]) {
            return Err(DecompositionError::NonIncreasingBoundaries { index });
        }

        Ok(Self {
            axis,
            boundaries,
            version: DecompositionVersion::default(),
        })
    }

    /// Splits `[lo, hi)` along `axis` into `count` slabs of equal width.
    pub fn uniform(
        axis: usize,
        lo: Real,
        hi: Real,
        count: usize,
    ) -> Result<Self, DecompositionError> {
        if count == 0 {
            return Err(DecompositionError::TooFewBoundaries);
        }

        let width = hi - lo;
        let mut boundaries: Vec<Real> = (0..count)
            .map(|i| lo + width * (i as Real) / (count as Real))
            .collect();
        // Push `hi` itself so rounding never leaves a gap at the end.
        boundaries.push(hi);

        Self::new(axis, boundaries)
    }

    /// Creates slabs separated by the given `cuts`, extended to infinity on both ends.
    ///
    /// With no cut, the result has a single sub-domain covering the whole space.
    pub fn covering(axis: usize, cuts: &[Real]) -> Result<Self, DecompositionError> {
        let mut boundaries = Vec::with_capacity(cuts.len() + 2);
        boundaries.push(-Real::INFINITY);
        boundaries.extend_from_slice(cuts);
        boundaries.push(Real::INFINITY);
        Self::new(axis, boundaries)
    }

    /// Replaces the version of this decomposition.
    pub fn with_version(mut self, version: DecompositionVersion) -> Self {
        self.version = version;
        self
    }

    /// The axis this decomposition splits.
    #[inline]
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// The boundaries of the slabs, sorted in increasing order.
    #[inline]
    pub fn boundaries(&self) -> &[Real] {
        &self.boundaries[..]
    }

    /// The `[lo, hi)` interval of the sub-domain `i`.
    #[inline]
    pub fn interval(&self, i: SubdomainId) -> Option<(Real, Real)> {
        if i + 1 < self.boundaries.len() {
            Some((self.boundaries[i], self.boundaries[i + 1]))
        } else {
            None
        }
    }

    /// Does `aabb` intersect the sub-domain `i`?
    ///
    /// Sub-domains are half-open: a box whose upper bound touches the lower
    /// boundary of a sub-domain intersects it, and a box whose lower bound
    /// touches its upper boundary does not.
    #[inline]
    pub fn intersects(&self, i: SubdomainId, aabb: &Aabb) -> bool {
        match self.interval(i) {
            Some((lo, hi)) => aabb.mins[self.axis] < hi && aabb.maxs[self.axis] >= lo,
            None => false,
        }
    }

    /// The range of sub-domains whose interval intersects `[min, max]`.
    ///
    /// Because the boundaries are sorted, this is the same set as testing every
    /// sub-domain with [`SlabDecomposition::intersects`], found by binary search.
    pub fn range_intersecting(&self, min: Real, max: Real) -> Range<SubdomainId> {
        let n = self.num_subdomains();
        // Sub-domains entirely below `min` have their upper boundary `<= min`.
        let first = self.boundaries[1..].partition_point(|&hi| hi <= min);
        // Sub-domains that start at or before `max`.
        let end = self.boundaries[..n].partition_point(|&lo| lo <= max);

        if first < end {
            first..end
        } else {
            0..0
        }
    }

    /// The sub-domain whose interval contains the coordinate `x`.
    pub fn subdomain_containing_coord(&self, x: Real) -> Option<SubdomainId> {
        let k = self.boundaries.partition_point(|&b| b <= x);

        if k == 0 || k == self.boundaries.len() {
            None
        } else {
            Some(k - 1)
        }
    }
}

impl Decomposition for SlabDecomposition {
    fn version(&self) -> DecompositionVersion {
        self.version
    }

    fn num_subdomains(&self) -> usize {
        self.boundaries.len() - 1
    }

    fn subdomains_intersecting(&self, aabb: &Aabb, out: &mut Subdomains) {
        let (min, max) = aabb.axis_range(self.axis);
        out.extend(self.range_intersecting(min, max));
    }

    fn subdomain_containing(&self, point: &Point<Real>) -> Option<SubdomainId> {
        self.subdomain_containing_coord(point[self.axis])
    }
}
