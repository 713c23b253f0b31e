mod ghost_replication;
mod slab_boundaries;
