use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, DIM};
use crate::partitioning::{
    Decomposition, DecompositionError, DecompositionVersion, SlabDecomposition, SubdomainId,
    Subdomains,
};
use smallvec::SmallVec;

/// A decomposition of space into a grid of boxes, built from one slab decomposition per axis.
///
/// A grid cell is identified by the index of its slab along each partitioned
/// axis. Its [`SubdomainId`] is the row-major linearization of these indices,
/// taken in the order the slabs were given to [`GridDecomposition::new`].
///
/// A box intersects a cell iff it intersects the cell's slab along every
/// partitioned axis, so classifying against a grid amounts to intersecting the
/// per-axis classifications.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct GridDecomposition {
    slabs: Vec<SlabDecomposition>,
    version: DecompositionVersion,
}

impl GridDecomposition {
    /// Creates a grid from one slab decomposition per partitioned axis.
    ///
    /// The versions of the individual slabs are ignored; the grid starts at the
    /// default version.
    pub fn new(slabs: Vec<SlabDecomposition>) -> Result<Self, DecompositionError> {
        if slabs.is_empty() {
            return Err(DecompositionError::EmptyGrid);
        }

        let mut seen = [false; DIM];

        for slab in &slabs {
            if seen[slab.axis()] {
                return Err(DecompositionError::DuplicateAxis(slab.axis()));
            }

            seen[slab.axis()] = true;
        }

        Ok(Self {
            slabs,
            version: DecompositionVersion::default(),
        })
    }

    /// Replaces the version of this decomposition.
    pub fn with_version(mut self, version: DecompositionVersion) -> Self {
        self.version = version;
        self
    }

    /// The per-axis slabs of this grid.
    #[inline]
    pub fn slabs(&self) -> &[SlabDecomposition] {
        &self.slabs[..]
    }

    /// The sub-domain of the cell with the given per-slab indices.
    pub fn subdomain_at(&self, cell: &[SubdomainId]) -> Option<SubdomainId> {
        if cell.len() != self.slabs.len() {
            return None;
        }

        let mut id = 0;

        for (slab, &i) in self.slabs.iter().zip(cell) {
            if i >= slab.num_subdomains() {
                return None;
            }

            id = id * slab.num_subdomains() + i;
        }

        Some(id)
    }

    /// The per-slab indices of the cell of the sub-domain `id`.
    pub fn cell_of(&self, id: SubdomainId) -> Option<SmallVec<[SubdomainId; DIM]>> {
        if id >= self.num_subdomains() {
            return None;
        }

        let mut cell = SmallVec::from_elem(0, self.slabs.len());
        let mut rest = id;

        for (k, slab) in self.slabs.iter().enumerate().rev() {
            cell[k] = rest % slab.num_subdomains();
            rest /= slab.num_subdomains();
        }

        Some(cell)
    }
}

impl Decomposition for GridDecomposition {
    fn version(&self) -> DecompositionVersion {
        self.version
    }

    fn num_subdomains(&self) -> usize {
        self.slabs.iter().map(|s| s.num_subdomains()).product()
    }

    fn subdomains_intersecting(&self, aabb: &Aabb, out: &mut Subdomains) {
        let mut ids = Subdomains::new();
        ids.push(0);

        for slab in &self.slabs {
            let (min, max) = aabb.axis_range(slab.axis());
            let range = slab.range_intersecting(min, max);

            if range.is_empty() {
                return;
            }

            let n = slab.num_subdomains();
            // Row-major expansion keeps the ids sorted.
            ids = ids
                .iter()
                .flat_map(|&base| range.clone().map(move |i| base * n + i))
                .collect();
        }

        out.extend(ids);
    }

    fn subdomain_containing(&self, point: &Point<Real>) -> Option<SubdomainId> {
        let mut id = 0;

        for slab in &self.slabs {
            let i = slab.subdomain_containing(point)?;
            id = id * slab.num_subdomains() + i;
        }

        Some(id)
    }
}
