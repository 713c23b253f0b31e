use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::partitioning::{Classification, SubdomainId, Subdomains};

/// Version tag of a domain decomposition.
///
/// Every node must classify bodies against the same version. A rebalancing step
/// replaces the decomposition as a whole with one carrying a new version.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecompositionVersion(pub u64);

impl DecompositionVersion {
    /// The version following this one.
    #[inline]
    pub fn next(self) -> Self {
        DecompositionVersion(self.0 + 1)
    }
}

/// A partition of space into sub-domains, each owned by one compute node.
///
/// Sub-domains are identified by a dense index in `0..self.num_subdomains()`.
pub trait Decomposition {
    /// The version of this decomposition.
    fn version(&self) -> DecompositionVersion;

    /// The number of sub-domains of this decomposition.
    fn num_subdomains(&self) -> usize;

    /// Appends to `out`, in increasing order, every sub-domain intersecting `aabb`.
    fn subdomains_intersecting(&self, aabb: &Aabb, out: &mut Subdomains);

    /// The sub-domain containing `point`, if any.
    fn subdomain_containing(&self, point: &Point<Real>) -> Option<SubdomainId>;

    /// Computes every sub-domain intersecting `aabb`.
    ///
    /// An empty result for a well-formed `aabb` means this decomposition does
    /// not cover the whole space, which is a configuration error.
    fn classify(&self, aabb: &Aabb) -> Classification {
        let mut subdomains = Subdomains::new();
        self.subdomains_intersecting(aabb, &mut subdomains);

        if subdomains.is_empty() && aabb.is_well_formed() {
            log::warn!(
                "The AABB {:?} does not intersect any sub-domain of the decomposition {:?}.",
                aabb,
                self.version()
            );
        }

        Classification::new(self.version(), subdomains)
    }
}
