//! Spatial partitioning of the simulation domain into per-node sub-domains.
//!
//! A [`Decomposition`] is a cluster-wide, replicated description of which compute
//! node owns which region of space. Classifying the bounding box of a body
//! against it yields every sub-domain the body overlaps: the owning node keeps
//! the body, and every other node of the [`Classification`] hosts a ghost of it.

pub use self::classification::{
    classify_batch, classify_model, classify_placed_model, Classification, SubdomainId,
    Subdomains,
};
pub use self::decomposition::{Decomposition, DecompositionVersion};
pub use self::error::{ClassificationError, DecompositionError};
pub use self::grid::GridDecomposition;
pub use self::slab::SlabDecomposition;

mod classification;
mod decomposition;
mod error;
mod grid;
mod slab;
