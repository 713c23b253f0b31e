mod model_aabb;
mod model_aabb_order;
