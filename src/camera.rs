use crate::fast_rand::{random_in_unit_disk, with_rng};
use crate::{Float, Point3f, Ray, Vec3f};
use cgmath::InnerSpace;
use rand::distributions::{Distribution, Uniform};

pub struct Lens {
    pub aperture: Float,
    pub focus_dist: Float,
}

/// Thin-lens camera. Primary rays originate on the lens disk and pass
/// through the focus plane; each ray carries a time drawn uniformly from
/// the shutter interval.
pub struct Camera {
    lower_left_corner: Point3f,
    horizontal: Vec3f,
    vertical: Vec3f,
    origin: Point3f,
    lens_radius: Float,
    orientation: (Vec3f, Vec3f, Vec3f),
    time_distribution: Option<Uniform<Float>>,
}

impl Camera {
    pub fn new(
        lookfrom: Point3f,
        lookat: Point3f,
        up: Vec3f,
        vfov: Float,
        aspect: Float,
        lens: Option<Lens>,
        shutter: Option<(Float, Float)>,
    ) -> Camera {
        let lens = lens.unwrap_or(Lens { aperture: 0.0, focus_dist: 1.0 });
        let half_height = Float::tan(vfov / 2.0);
        let half_width = aspect * half_height;

        let forward = (lookat - lookfrom).normalize();
        let right = up.cross(forward).normalize();
        let up = forward.cross(right).normalize();

        let lower_left_corner = lookfrom
            - (half_width * lens.focus_dist * right)
            - (half_height * lens.focus_dist * up)
            + lens.focus_dist * forward;
        let horizontal = 2.0 * half_width * lens.focus_dist * right;
        let vertical = 2.0 * half_height * lens.focus_dist * up;

        Camera {
            lower_left_corner,
            horizontal,
            vertical,
            origin: lookfrom,
            lens_radius: lens.aperture / 2.0,
            orientation: (right, up, forward),
            time_distribution: shutter.map(|t| Uniform::new_inclusive(t.0, t.1)),
        }
    }

    pub fn with_aspect(aspect: Float) -> Camera {
        Camera::new(
            point3f!(0, 0, 0),
            point3f!(0, 0, -1),
            vec3f!(0, 1, 0),
            90f32.to_radians(),
            aspect,
            None,
            None,
        )
    }

    /// Primary ray for normalized image coordinates (u, v) in [0, 1]^2.
    pub fn get_ray(&self, u: Float, v: Float) -> Ray {
        let rd = self.lens_radius * random_in_unit_disk();
        let (right, up, _) = self.orientation;
        let offset = right * rd.x + up * rd.y;
        let time = self
            .time_distribution
            .map_or(0.0, |dist| with_rng(|rng| dist.sample(rng)));
        let origin = self.origin + offset;
        Ray::new(
            origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - origin,
            time,
        )
    }
}
