use crate::aabb::Aabb;
use crate::fast_rand;
use crate::interaction::{Interaction, MaterialId};
use crate::shapes::Primitive;
use crate::{Float, Point2f, Ray, Vec3f};

/// Constant-density participating medium bounded by a convex primitive.
/// A ray entering the boundary scatters after an exponentially distributed
/// free path; the isotropic material supplies the phase function.
pub struct ConstantMedium {
    pub boundary: Box<Primitive>,
    neg_inv_density: Float,
    pub material: MaterialId,
}

impl ConstantMedium {
    pub fn new(boundary: Primitive, density: Float, material: MaterialId) -> Self {
        Self {
            boundary: Box::new(boundary),
            neg_inv_density: -1.0 / density,
            material,
        }
    }

    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<Interaction> {
        let enter = self
            .boundary
            .intersect(ray, std::f32::NEG_INFINITY, std::f32::INFINITY)?;
        let exit = self
            .boundary
            .intersect(ray, enter.t + 1e-4, std::f32::INFINITY)?;

        let t_enter = enter.t.max(t_min).max(0.0);
        let t_exit = exit.t.min(t_max);
        if t_enter >= t_exit {
            return None;
        }

        // direction is unit length, so the parameter is a distance
        let distance_inside = t_exit - t_enter;
        let hit_distance = self.neg_inv_density * fast_rand::rand::<Float>().ln();
        if hit_distance > distance_inside {
            return None;
        }

        let t = t_enter + hit_distance;
        Some(Interaction::new(
            t,
            ray.at(t),
            Vec3f::new(1.0, 0.0, 0.0), // arbitrary, the phase function ignores it
            Point2f::new(0.0, 0.0),
            ray.time,
            self.material,
        ))
    }

    pub fn bounding_box(&self) -> Option<Aabb> {
        self.boundary.bounding_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Sphere;
    use crate::{T_MAX, T_MIN};

    fn boundary() -> Primitive {
        Primitive::Sphere(Sphere::new(point3f!(0, 0, 0), 1.0, 0))
    }

    #[test]
    fn test_dense_medium_always_scatters() {
        let medium = ConstantMedium::new(boundary(), 1e6, 0);
        let ray = Ray::new(point3f!(0, 0, -5), vec3f!(0, 0, 1), 0.0);
        for _ in 0..100 {
            let isect = medium.intersect(&ray, T_MIN, T_MAX).unwrap();
            assert!(isect.t > 3.9 && isect.t < 6.1);
        }
    }

    #[test]
    fn test_thin_medium_rarely_scatters() {
        let medium = ConstantMedium::new(boundary(), 1e-6, 0);
        let ray = Ray::new(point3f!(0, 0, -5), vec3f!(0, 0, 1), 0.0);
        let hits = (0..1000)
            .filter(|_| medium.intersect(&ray, T_MIN, T_MAX).is_some())
            .count();
        assert!(hits < 10);
    }

    #[test]
    fn test_ray_past_boundary_misses() {
        let medium = ConstantMedium::new(boundary(), 1e6, 0);
        let ray = Ray::new(point3f!(0, 5, -5), vec3f!(0, 0, 1), 0.0);
        assert!(medium.intersect(&ray, T_MIN, T_MAX).is_none());
    }
}
