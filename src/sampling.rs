use crate::{fast_rand, Float, Point2f, Vec2f, Vec3f, PI};
use cgmath::InnerSpace;
use std::f32;

pub fn concentric_sample_disk(u: Point2f) -> Point2f {
    // map sample from [0, 1] to [-1, 1]
    let u_offset = 2.0 * u - Vec2f::new(1.0, 1.0);
    if u_offset == Point2f::new(0.0, 0.0) {
        return Point2f::new(0.0, 0.0);
    }

    let (theta, r) = if u_offset.x.abs() > u_offset.y.abs() {
        (f32::consts::FRAC_PI_4 * (u_offset.y / u_offset.x), u_offset.x)
    } else {
        (f32::consts::FRAC_PI_2 - f32::consts::FRAC_PI_4 * (u_offset.x / u_offset.y), u_offset.y)
    };

    r * Point2f::new(theta.cos(), theta.sin())
}

/// Malley's method: lift a concentric disk sample onto the hemisphere.
pub fn cosine_sample_hemisphere(u: Point2f) -> Vec3f {
    let d = concentric_sample_disk(u);
    let z = Float::sqrt(Float::max(0.0, 1.0 - d.x * d.x - d.y * d.y));
    Vec3f::new(d.x, d.y, z)
}

pub fn uniform_sample_hemisphere(u: Point2f) -> Vec3f {
    let z = u.x;
    let r = Float::sqrt(Float::max(0.0, 1.0 - z * z));
    let phi = 2.0 * PI * u.y;
    Vec3f::new(r * phi.cos(), r * phi.sin(), z)
}

pub fn uniform_sample_sphere(u: Point2f) -> Vec3f {
    let z = 1.0 - 2.0 * u.x;
    let r = Float::sqrt(Float::max(0.0, 1.0 - z * z));
    let phi = 2.0 * PI * u.y;
    Vec3f::new(r * phi.cos(), r * phi.sin(), z)
}

pub fn random_2d() -> Point2f {
    Point2f::new(fast_rand::rand(), fast_rand::rand())
}

/// Power heuristic for combining two sampling strategies.
pub fn power_heuristic(nf: i32, f_pdf: Float, ng: i32, g_pdf: Float) -> Float {
    let f = nf as Float * f_pdf;
    let g = ng as Float * g_pdf;
    (f * f) / (f * f + g * g)
}

/// Orthonormal basis with `w` along a given direction.
#[derive(Copy, Clone, Debug)]
pub struct Onb {
    axis: [Vec3f; 3],
}

impl Onb {
    pub fn from_w(n: Vec3f) -> Self {
        let w = n.normalize();

        // pick a helper vector not parallel to w
        let a = if w.x.abs() > 0.9 {
            Vec3f::new(0.0, 1.0, 0.0)
        } else {
            Vec3f::new(1.0, 0.0, 0.0)
        };
        let v = w.cross(a).normalize();
        let u = w.cross(v);
        Self { axis: [u, v, w] }
    }

    pub fn u(&self) -> Vec3f { self.axis[0] }
    pub fn v(&self) -> Vec3f { self.axis[1] }
    pub fn w(&self) -> Vec3f { self.axis[2] }

    pub fn local(&self, a: Vec3f) -> Vec3f {
        a.x * self.u() + a.y * self.v() + a.z * self.w()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::prelude::*;

    #[test]
    fn test_disk_samples_in_disk() {
        let mut rng = StdRng::from_seed([1; 32]);
        for _ in 0..1000 {
            let p = concentric_sample_disk(Point2f::new(rng.gen(), rng.gen()));
            assert!(p.x * p.x + p.y * p.y <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn test_cosine_hemisphere_upper() {
        let mut rng = StdRng::from_seed([2; 32]);
        for _ in 0..1000 {
            let d = cosine_sample_hemisphere(Point2f::new(rng.gen(), rng.gen()));
            assert!(d.z >= 0.0);
            assert_abs_diff_eq!(d.magnitude(), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_uniform_sphere_unit_length() {
        let mut rng = StdRng::from_seed([3; 32]);
        for _ in 0..1000 {
            let d = uniform_sample_sphere(Point2f::new(rng.gen(), rng.gen()));
            assert_abs_diff_eq!(d.magnitude(), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_power_heuristic() {
        assert_abs_diff_eq!(power_heuristic(1, 1.0, 1, 1.0), 0.5);
        assert_abs_diff_eq!(power_heuristic(1, 2.0, 1, 0.0), 1.0);
    }

    #[test]
    fn test_onb_orthonormal() {
        let mut rng = StdRng::from_seed([4; 32]);
        for _ in 0..100 {
            let n = Vec3f::new(
                rng.gen_range(-1.0, 1.0),
                rng.gen_range(-1.0, 1.0),
                rng.gen_range(-1.0, 1.0),
            );
            if n.magnitude2() < 1e-4 { continue; }
            let onb = Onb::from_w(n);
            assert_abs_diff_eq!(onb.u().dot(onb.v()), 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(onb.u().dot(onb.w()), 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(onb.v().dot(onb.w()), 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(onb.w().magnitude(), 1.0, epsilon = 1e-5);
        }
    }
}
