#[macro_use]
pub mod macros;

pub mod aabb;
pub mod bounds;
pub mod bvh;
pub mod camera;
pub mod fast_rand;
pub mod film;
pub mod geometry;
pub mod integrator;
pub mod interaction;
pub mod material;
pub mod math;
pub mod pdf;
pub mod renderer;
pub mod sampling;
pub mod scene;
pub mod scenes;
pub mod shapes;
pub mod spectrum;
pub mod texture;

pub type Float = f32;

pub type Vec2f = cgmath::Vector2<Float>;
pub type Vec3f = cgmath::Vector3<Float>;
pub type Point2f = cgmath::Point2<Float>;
pub type Point3f = cgmath::Point3<Float>;
pub type Point2i = cgmath::Point2<i32>;

pub use crate::aabb::Aabb;
pub use crate::bounds::Bounds2i;
pub use crate::geometry::Ray;
pub use crate::interaction::Interaction;
pub use crate::spectrum::Spectrum;

/// Rays are nudged this far along their direction at construction to keep
/// secondary rays from re-intersecting the surface they left.
pub const RAY_EPSILON: Float = 1e-5;

/// Lower parameter clip on all scene queries (shadow acne guard).
pub const T_MIN: Float = 1e-3;

/// Upper parameter clip on all scene queries.
pub const T_MAX: Float = 1e4;

pub const PI: Float = std::f32::consts::PI;
pub const INV_PI: Float = 1.0 / std::f32::consts::PI;
