use crate::{Float, Point3f, Vec3f, RAY_EPSILON};
use cgmath::InnerSpace;

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: Point3f,
    pub dir: Vec3f,
    pub time: Float,
}

impl Ray {
    /// Normalizes the direction and nudges the origin forward by
    /// `RAY_EPSILON` so secondary rays don't re-hit their surface.
    pub fn new(origin: Point3f, dir: Vec3f, time: Float) -> Self {
        let dir = dir.normalize();
        Self {
            origin: origin + dir * RAY_EPSILON,
            dir,
            time,
        }
    }

    pub fn at(&self, t: Float) -> Point3f {
        self.origin + (self.dir * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_direction_normalized() {
        let r = Ray::new(point3f!(0, 0, 0), vec3f!(0, 0, 10), 0.0);
        assert_abs_diff_eq!(r.dir.magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_origin_offset() {
        let r = Ray::new(point3f!(1, 2, 3), vec3f!(1, 0, 0), 0.0);
        assert_abs_diff_eq!(r.origin.x, 1.0 + crate::RAY_EPSILON, epsilon = 1e-9);
        assert_eq!(r.origin.y, 2.0);
    }

    #[test]
    fn test_at_param() {
        let r = Ray::new(point3f!(0, 0, 0), vec3f!(0, 1, 0), 0.0);
        let p = r.at(2.5);
        assert_abs_diff_eq!(p.y, 2.5 + crate::RAY_EPSILON, epsilon = 1e-6);
    }
}
