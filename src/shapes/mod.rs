use crate::aabb::Aabb;
use crate::interaction::Interaction;
use crate::{Float, Point3f, Ray, Vec3f};

pub mod cuboid;
pub mod cylinder;
pub mod disk;
pub mod medium;
pub mod rect;
pub mod sphere;
pub mod transform;
pub mod triangle;

pub use self::cuboid::Cuboid;
pub use self::cylinder::{CappedCylinder, Cylinder};
pub use self::disk::Disk;
pub use self::medium::ConstantMedium;
pub use self::rect::{RectXY, RectXZ, RectYZ};
pub use self::sphere::{Motion, Sphere};
pub use self::transform::{FlipNormal, RotateY, Translate};
pub use self::triangle::{Mesh, Triangle};

/// All intersectable things, one variant per concrete shape so dispatch
/// monomorphizes at the match. Transform wrappers own a boxed child and are
/// primitives themselves.
pub enum Primitive {
    Sphere(Sphere),
    RectXY(RectXY),
    RectXZ(RectXZ),
    RectYZ(RectYZ),
    Disk(Disk),
    Cylinder(Cylinder),
    CappedCylinder(CappedCylinder),
    Cuboid(Cuboid),
    Triangle(Triangle),
    Mesh(Mesh),
    FlipNormal(FlipNormal),
    Translate(Translate),
    RotateY(RotateY),
    ConstantMedium(ConstantMedium),
}

impl Primitive {
    /// Closest interaction with parameter in the open interval
    /// (t_min, t_max), or None.
    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<Interaction> {
        match self {
            Primitive::Sphere(s) => s.intersect(ray, t_min, t_max),
            Primitive::RectXY(r) => r.intersect(ray, t_min, t_max),
            Primitive::RectXZ(r) => r.intersect(ray, t_min, t_max),
            Primitive::RectYZ(r) => r.intersect(ray, t_min, t_max),
            Primitive::Disk(d) => d.intersect(ray, t_min, t_max),
            Primitive::Cylinder(c) => c.intersect(ray, t_min, t_max),
            Primitive::CappedCylinder(c) => c.intersect(ray, t_min, t_max),
            Primitive::Cuboid(c) => c.intersect(ray, t_min, t_max),
            Primitive::Triangle(t) => t.intersect(ray, t_min, t_max),
            Primitive::Mesh(m) => m.intersect(ray, t_min, t_max),
            Primitive::FlipNormal(f) => f.intersect(ray, t_min, t_max),
            Primitive::Translate(t) => t.intersect(ray, t_min, t_max),
            Primitive::RotateY(r) => r.intersect(ray, t_min, t_max),
            Primitive::ConstantMedium(m) => m.intersect(ray, t_min, t_max),
        }
    }

    /// Conservative bounds used by the acceleration structure.
    pub fn bounding_box(&self) -> Option<Aabb> {
        match self {
            Primitive::Sphere(s) => Some(s.bounding_box()),
            Primitive::RectXY(r) => Some(r.bounding_box()),
            Primitive::RectXZ(r) => Some(r.bounding_box()),
            Primitive::RectYZ(r) => Some(r.bounding_box()),
            Primitive::Disk(d) => Some(d.bounding_box()),
            Primitive::Cylinder(c) => Some(c.bounding_box()),
            Primitive::CappedCylinder(c) => Some(c.bounding_box()),
            Primitive::Cuboid(c) => Some(c.bounding_box()),
            Primitive::Triangle(t) => Some(t.bounding_box()),
            Primitive::Mesh(m) => Some(m.bounding_box()),
            Primitive::FlipNormal(f) => f.child.bounding_box(),
            Primitive::Translate(t) => t.bounding_box(),
            Primitive::RotateY(r) => r.bounding_box(),
            Primitive::ConstantMedium(m) => m.bounding_box(),
        }
    }

    /// Density of `random_toward` samples in the given direction. Nonzero
    /// only for shapes that support explicit light sampling.
    pub fn pdf_value(&self, origin: Point3f, dir: Vec3f) -> Float {
        match self {
            Primitive::RectXZ(r) => r.pdf_value(origin, dir),
            Primitive::FlipNormal(f) => f.child.pdf_value(origin, dir),
            Primitive::Translate(t) => t.child.pdf_value(origin - t.offset, dir),
            _ => 0.0,
        }
    }

    /// Draws a unit direction from `origin` toward the shape's surface.
    pub fn random_toward(&self, origin: Point3f) -> Vec3f {
        match self {
            Primitive::RectXZ(r) => r.random_toward(origin),
            Primitive::FlipNormal(f) => f.child.random_toward(origin),
            Primitive::Translate(t) => t.child.random_toward(origin - t.offset),
            _ => Vec3f::new(1.0, 0.0, 0.0),
        }
    }
}

/// Flat collection of primitives queried by linear scan. Used for the faces
/// of compound shapes and as the brute-force reference aggregate in tests.
pub struct PrimitiveSet {
    pub prims: Vec<Primitive>,
}

impl PrimitiveSet {
    pub fn new(prims: Vec<Primitive>) -> Self {
        Self { prims }
    }

    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<Interaction> {
        let mut closest_so_far = t_max;
        let mut hit = None;
        for (i, prim) in self.prims.iter().enumerate() {
            if let Some(mut isect) = prim.intersect(ray, t_min, closest_so_far) {
                closest_so_far = isect.t;
                isect.prim = i;
                hit = Some(isect);
            }
        }
        hit
    }

    pub fn bounding_box(&self) -> Option<Aabb> {
        if self.prims.is_empty() {
            return None;
        }
        let mut bounds = Aabb::empty();
        for prim in &self.prims {
            bounds = bounds.join(&prim.bounding_box()?);
        }
        Some(bounds)
    }
}
