use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real};
use crate::model::{CollisionModel, ShapeStore};
use crate::partitioning::{ClassificationError, Decomposition, DecompositionVersion};
use smallvec::SmallVec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Index of a sub-domain, equal to the rank of the compute node owning it.
pub type SubdomainId = usize;

/// A sorted set of sub-domains.
///
/// Most bodies overlap very few sub-domains, so small sets are kept inline.
pub type Subdomains = SmallVec<[SubdomainId; 4]>;

/// The sub-domains intersected by a body, for a given version of a decomposition.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    version: DecompositionVersion,
    subdomains: Subdomains,
}

impl Classification {
    /// Creates a classification from a set of sub-domains sorted in increasing order.
    pub fn new(version: DecompositionVersion, subdomains: Subdomains) -> Self {
        debug_assert!(subdomains.windows(2).all(|w| w[0] < w[1]));
        Self {
            version,
            subdomains,
        }
    }

    /// The version of the decomposition this classification was computed against.
    #[inline]
    pub fn version(&self) -> DecompositionVersion {
        self.version
    }

    /// The intersected sub-domains, in increasing order.
    #[inline]
    pub fn subdomains(&self) -> &[SubdomainId] {
        &self.subdomains[..]
    }

    /// The number of intersected sub-domains.
    #[inline]
    pub fn len(&self) -> usize {
        self.subdomains.len()
    }

    /// Does the body intersect no sub-domain at all?
    ///
    /// For a well-formed bounding box, this signals a decomposition that does
    /// not cover the whole space.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subdomains.is_empty()
    }

    /// Does the body straddle a boundary between sub-domains?
    #[inline]
    pub fn is_shared(&self) -> bool {
        self.subdomains.len() > 1
    }

    /// Does the body intersect the sub-domain `id`?
    #[inline]
    pub fn contains(&self, id: SubdomainId) -> bool {
        self.subdomains.binary_search(&id).is_ok()
    }

    /// The sub-domains that must host a ghost of the body, given the sub-domain owning it.
    pub fn ghosts(&self, owner: SubdomainId) -> impl Iterator<Item = SubdomainId> + '_ {
        self.subdomains.iter().copied().filter(move |&id| id != owner)
    }

    /// Checks that this classification was computed against `decomposition`'s current version.
    pub fn check_version(
        &self,
        decomposition: &impl Decomposition,
    ) -> Result<(), ClassificationError> {
        let expected = decomposition.version();

        if self.version == expected {
            Ok(())
        } else {
            Err(ClassificationError::VersionMismatch {
                expected,
                found: self.version,
            })
        }
    }
}

/// Classifies a body from its collision model, assuming the body frame is the world frame.
///
/// Fails if no shape was ever successfully added to `model`.
pub fn classify_model<D, S>(
    decomposition: &D,
    model: &CollisionModel<S>,
) -> Result<Classification, ClassificationError>
where
    D: Decomposition + ?Sized,
    S: ShapeStore,
{
    let aabb = model.aabb().ok_or(ClassificationError::EmptyModel)?;
    Ok(decomposition.classify(&aabb))
}

/// Classifies a body from its collision model, with the body placed at `body_position`.
///
/// The model bounding box is conservatively re-bounded in the world frame before
/// being classified.
pub fn classify_placed_model<D, S>(
    decomposition: &D,
    model: &CollisionModel<S>,
    body_position: &Isometry<Real>,
) -> Result<Classification, ClassificationError>
where
    D: Decomposition + ?Sized,
    S: ShapeStore,
{
    let aabb = model.aabb().ok_or(ClassificationError::EmptyModel)?;
    Ok(decomposition.classify(&aabb.transform_by(body_position)))
}

/// Classifies a batch of bounding boxes, preserving their order.
///
/// With the `parallel` feature, the boxes are classified on the rayon thread pool.
pub fn classify_batch<D>(decomposition: &D, aabbs: &[Aabb]) -> Vec<Classification>
where
    D: Decomposition + Sync + ?Sized,
{
    #[cfg(feature = "parallel")]
    let iter = aabbs.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = aabbs.iter();

    iter.map(|aabb| decomposition.classify(aabb)).collect()
}
