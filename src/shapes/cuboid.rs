use crate::aabb::Aabb;
use crate::interaction::{Interaction, MaterialId};
use crate::shapes::{FlipNormal, Primitive, PrimitiveSet, RectXY, RectXZ, RectYZ};
use crate::{Float, Point2f, Point3f, Ray};

/// Axis-aligned box assembled from six rectangles in a nested primitive
/// set. Faces on the min side are normal-flipped so every normal points
/// outward.
pub struct Cuboid {
    pub min: Point3f,
    pub max: Point3f,
    faces: PrimitiveSet,
}

impl Cuboid {
    pub fn new(min: Point3f, max: Point3f, material: MaterialId) -> Self {
        let front = Primitive::RectXY(RectXY::new(
            Point2f::new(min.x, min.y),
            Point2f::new(max.x, max.y),
            max.z,
            material,
        ));
        let back = Primitive::FlipNormal(FlipNormal::new(Primitive::RectXY(RectXY::new(
            Point2f::new(min.x, min.y),
            Point2f::new(max.x, max.y),
            min.z,
            material,
        ))));
        let top = Primitive::RectXZ(RectXZ::new(
            Point2f::new(min.x, min.z),
            Point2f::new(max.x, max.z),
            max.y,
            material,
        ));
        let bottom = Primitive::FlipNormal(FlipNormal::new(Primitive::RectXZ(RectXZ::new(
            Point2f::new(min.x, min.z),
            Point2f::new(max.x, max.z),
            min.y,
            material,
        ))));
        let left = Primitive::RectYZ(RectYZ::new(
            Point2f::new(min.y, min.z),
            Point2f::new(max.y, max.z),
            max.x,
            material,
        ));
        let right = Primitive::FlipNormal(FlipNormal::new(Primitive::RectYZ(RectYZ::new(
            Point2f::new(min.y, min.z),
            Point2f::new(max.y, max.z),
            min.x,
            material,
        ))));

        Self {
            min,
            max,
            faces: PrimitiveSet::new(vec![front, back, top, bottom, left, right]),
        }
    }

    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<Interaction> {
        self.faces.intersect(ray, t_min, t_max)
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::with_bounds(self.min, self.max)
    }
}
