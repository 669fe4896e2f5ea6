use crate::aabb::Aabb;
use crate::fast_rand;
use crate::interaction::{Interaction, MaterialId};
use crate::{Float, Point2f, Point3f, Ray, Vec3f, T_MIN};
use cgmath::InnerSpace;

// The faces of an axis-aligned rectangle are padded by this much so its
// bounding box has nonzero extent along the fixed axis.
const PAD: Float = 1e-4;

/// Rectangle in the z = k plane, normal +z.
pub struct RectXY {
    pub min: Point2f,
    pub max: Point2f,
    pub k: Float,
    pub material: MaterialId,
}

impl RectXY {
    pub fn new(min: Point2f, max: Point2f, k: Float, material: MaterialId) -> Self {
        Self { min, max, k, material }
    }

    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<Interaction> {
        let t = (self.k - ray.origin.z) / ray.dir.z;
        if !(t > t_min && t < t_max) {
            return None;
        }
        let x = ray.origin.x + t * ray.dir.x;
        let y = ray.origin.y + t * ray.dir.y;
        if x <= self.min.x || x >= self.max.x || y <= self.min.y || y >= self.max.y {
            return None;
        }
        let uv = Point2f::new(
            (x - self.min.x) / (self.max.x - self.min.x),
            (y - self.min.y) / (self.max.y - self.min.y),
        );
        Some(Interaction::new(
            t,
            Point3f::new(x, y, self.k),
            Vec3f::new(0.0, 0.0, 1.0),
            uv,
            ray.time,
            self.material,
        ))
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::with_bounds(
            Point3f::new(self.min.x, self.min.y, self.k - PAD),
            Point3f::new(self.max.x, self.max.y, self.k + PAD),
        )
    }
}

/// Rectangle in the y = k plane, normal +y. This is the variant area lights
/// use, so it also answers directional-pdf queries.
pub struct RectXZ {
    pub min: Point2f,
    pub max: Point2f,
    pub k: Float,
    pub material: MaterialId,
}

impl RectXZ {
    pub fn new(min: Point2f, max: Point2f, k: Float, material: MaterialId) -> Self {
        Self { min, max, k, material }
    }

    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<Interaction> {
        let t = (self.k - ray.origin.y) / ray.dir.y;
        if !(t > t_min && t < t_max) {
            return None;
        }
        let x = ray.origin.x + t * ray.dir.x;
        let z = ray.origin.z + t * ray.dir.z;
        if x <= self.min.x || x >= self.max.x || z <= self.min.y || z >= self.max.y {
            return None;
        }
        let uv = Point2f::new(
            (x - self.min.x) / (self.max.x - self.min.x),
            (z - self.min.y) / (self.max.y - self.min.y),
        );
        Some(Interaction::new(
            t,
            Point3f::new(x, self.k, z),
            Vec3f::new(0.0, 1.0, 0.0),
            uv,
            ray.time,
            self.material,
        ))
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::with_bounds(
            Point3f::new(self.min.x, self.k - PAD, self.min.y),
            Point3f::new(self.max.x, self.k + PAD, self.max.y),
        )
    }

    /// Solid-angle density of sampling this rectangle from `origin` along
    /// `dir`: dist^2 / (cos * area).
    pub fn pdf_value(&self, origin: Point3f, dir: Vec3f) -> Float {
        let ray = Ray::new(origin, dir, 0.0);
        if let Some(isect) = self.intersect(&ray, T_MIN, std::f32::INFINITY) {
            let area = (self.max.x - self.min.x) * (self.max.y - self.min.y);
            let dist_sq = isect.t * isect.t * dir.magnitude2();
            let cosine = (dir.dot(isect.n) / dir.magnitude()).abs();
            dist_sq / (cosine * area)
        } else {
            0.0
        }
    }

    /// Uniform point on the rectangle, returned as a unit direction from
    /// `origin`.
    pub fn random_toward(&self, origin: Point3f) -> Vec3f {
        let point = Point3f::new(
            self.min.x + fast_rand::rand::<Float>() * (self.max.x - self.min.x),
            self.k,
            self.min.y + fast_rand::rand::<Float>() * (self.max.y - self.min.y),
        );
        (point - origin).normalize()
    }
}

/// Rectangle in the x = k plane, normal +x.
pub struct RectYZ {
    pub min: Point2f,
    pub max: Point2f,
    pub k: Float,
    pub material: MaterialId,
}

impl RectYZ {
    pub fn new(min: Point2f, max: Point2f, k: Float, material: MaterialId) -> Self {
        Self { min, max, k, material }
    }

    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<Interaction> {
        let t = (self.k - ray.origin.x) / ray.dir.x;
        if !(t > t_min && t < t_max) {
            return None;
        }
        let y = ray.origin.y + t * ray.dir.y;
        let z = ray.origin.z + t * ray.dir.z;
        if y <= self.min.x || y >= self.max.x || z <= self.min.y || z >= self.max.y {
            return None;
        }
        let uv = Point2f::new(
            (y - self.min.x) / (self.max.x - self.min.x),
            (z - self.min.y) / (self.max.y - self.min.y),
        );
        Some(Interaction::new(
            t,
            Point3f::new(self.k, y, z),
            Vec3f::new(1.0, 0.0, 0.0),
            uv,
            ray.time,
            self.material,
        ))
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::with_bounds(
            Point3f::new(self.k - PAD, self.min.x, self.min.y),
            Point3f::new(self.k + PAD, self.max.x, self.max.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::T_MAX;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_xy_hit() {
        let r = RectXY::new(Point2f::new(-1.0, -1.0), Point2f::new(1.0, 1.0), 2.0, 0);
        let ray = Ray::new(point3f!(0.5, -0.5, 0), vec3f!(0, 0, 1), 0.0);
        let isect = r.intersect(&ray, T_MIN, T_MAX).unwrap();
        assert_abs_diff_eq!(isect.t, 2.0, epsilon = 1e-4);
        assert_eq!(isect.n, vec3f!(0, 0, 1));
        assert_abs_diff_eq!(isect.uv.x, 0.75, epsilon = 1e-4);
        assert_abs_diff_eq!(isect.uv.y, 0.25, epsilon = 1e-4);
    }

    #[test]
    fn test_outside_extent_misses() {
        let r = RectXY::new(Point2f::new(-1.0, -1.0), Point2f::new(1.0, 1.0), 2.0, 0);
        let ray = Ray::new(point3f!(3, 0, 0), vec3f!(0, 0, 1), 0.0);
        assert!(r.intersect(&ray, T_MIN, T_MAX).is_none());
    }

    #[test]
    fn test_parallel_ray_misses() {
        let r = RectXZ::new(Point2f::new(-1.0, -1.0), Point2f::new(1.0, 1.0), 0.0, 0);
        // direction has no y component, so the ray never reaches the plane
        let ray = Ray::new(point3f!(0, 1, -5), vec3f!(0, 0, 1), 0.0);
        assert!(r.intersect(&ray, T_MIN, T_MAX).is_none());

        // even a ray lying exactly in the plane must miss
        let ray = Ray::new(point3f!(0, 0, -5), vec3f!(0, 0, 1), 0.0);
        assert!(r.intersect(&ray, T_MIN, T_MAX).is_none());
    }

    #[test]
    fn test_xz_pdf_directly_below() {
        // unit-area rectangle one unit above the origin
        let r = RectXZ::new(Point2f::new(-0.5, -0.5), Point2f::new(0.5, 0.5), 1.0, 0);
        let pdf = r.pdf_value(point3f!(0, 0, 0), vec3f!(0, 1, 0));
        // dist^2 / (cos * area) = 1 / (1 * 1)
        assert_abs_diff_eq!(pdf, 1.0, epsilon = 1e-3);

        // direction away from the rectangle has zero density
        assert_eq!(r.pdf_value(point3f!(0, 0, 0), vec3f!(0, -1, 0)), 0.0);
    }

    #[test]
    fn test_xz_random_toward_hits() {
        let r = RectXZ::new(Point2f::new(-0.5, -0.5), Point2f::new(0.5, 0.5), 1.0, 0);
        for _ in 0..200 {
            let dir = r.random_toward(point3f!(0, 0, 0));
            assert_abs_diff_eq!(dir.magnitude(), 1.0, epsilon = 1e-4);
            let ray = Ray::new(point3f!(0, 0, 0), dir, 0.0);
            assert!(r.intersect(&ray, T_MIN, T_MAX).is_some());
        }
    }

    #[test]
    fn test_yz_normal() {
        let r = RectYZ::new(Point2f::new(0.0, 0.0), Point2f::new(1.0, 1.0), -2.0, 0);
        let ray = Ray::new(point3f!(3, 0.5, 0.5), vec3f!(-1, 0, 0), 0.0);
        let isect = r.intersect(&ray, T_MIN, T_MAX).unwrap();
        assert_eq!(isect.n, vec3f!(1, 0, 0));
    }
}
