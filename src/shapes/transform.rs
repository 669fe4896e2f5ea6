use crate::aabb::Aabb;
use crate::interaction::Interaction;
use crate::shapes::Primitive;
use crate::{Float, Point3f, Ray, Vec3f};
use cgmath::MetricSpace;

/// Delegates to the child and negates the shading normal.
pub struct FlipNormal {
    pub child: Box<Primitive>,
}

impl FlipNormal {
    pub fn new(child: Primitive) -> Self {
        Self { child: Box::new(child) }
    }

    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<Interaction> {
        let mut isect = self.child.intersect(ray, t_min, t_max)?;
        isect.n = -isect.n;
        Some(isect)
    }
}

/// Intersects the child with the ray shifted by -offset, then shifts the
/// hit point back.
pub struct Translate {
    pub child: Box<Primitive>,
    pub offset: Vec3f,
}

impl Translate {
    pub fn new(child: Primitive, offset: Vec3f) -> Self {
        Self { child: Box::new(child), offset }
    }

    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<Interaction> {
        let local_ray = Ray {
            origin: ray.origin - self.offset,
            dir: ray.dir,
            time: ray.time,
        };
        let mut isect = self.child.intersect(&local_ray, t_min, t_max)?;
        isect.p += self.offset;
        Some(isect)
    }

    pub fn bounding_box(&self) -> Option<Aabb> {
        let bounds = self.child.bounding_box()?;
        Some(Aabb::with_bounds(bounds.min + self.offset, bounds.max + self.offset))
    }
}

/// Rotation about the y axis. The ray is rotated into the child's local
/// space; the hit point and normal are rotated back out.
pub struct RotateY {
    pub child: Box<Primitive>,
    sin_theta: Float,
    cos_theta: Float,
    bounds: Option<Aabb>,
}

impl RotateY {
    pub fn new(child: Primitive, angle_degrees: Float) -> Self {
        let radians = angle_degrees.to_radians();
        let sin_theta = radians.sin();
        let cos_theta = radians.cos();

        // rotated box is the box of the child's eight rotated corners
        let bounds = child.bounding_box().map(|bbox| {
            let mut rotated = Aabb::empty();
            for i in 0..2 {
                for j in 0..2 {
                    for k in 0..2 {
                        let x = i as Float * bbox.max.x + (1 - i) as Float * bbox.min.x;
                        let y = j as Float * bbox.max.y + (1 - j) as Float * bbox.min.y;
                        let z = k as Float * bbox.max.z + (1 - k) as Float * bbox.min.z;
                        let new_x = cos_theta * x + sin_theta * z;
                        let new_z = -sin_theta * x + cos_theta * z;
                        rotated = rotated.join_point(Point3f::new(new_x, y, new_z));
                    }
                }
            }
            rotated
        });

        Self {
            child: Box::new(child),
            sin_theta,
            cos_theta,
            bounds,
        }
    }

    fn to_local(&self, v: [Float; 3]) -> [Float; 3] {
        [
            self.cos_theta * v[0] - self.sin_theta * v[2],
            v[1],
            self.sin_theta * v[0] + self.cos_theta * v[2],
        ]
    }

    fn to_world(&self, v: [Float; 3]) -> [Float; 3] {
        [
            self.cos_theta * v[0] + self.sin_theta * v[2],
            v[1],
            -self.sin_theta * v[0] + self.cos_theta * v[2],
        ]
    }

    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<Interaction> {
        let o = self.to_local([ray.origin.x, ray.origin.y, ray.origin.z]);
        let d = self.to_local([ray.dir.x, ray.dir.y, ray.dir.z]);
        let local_ray = Ray {
            origin: Point3f::new(o[0], o[1], o[2]),
            dir: Vec3f::new(d[0], d[1], d[2]),
            time: ray.time,
        };

        let mut isect = self.child.intersect(&local_ray, t_min, t_max)?;

        let p = self.to_world([isect.p.x, isect.p.y, isect.p.z]);
        let n = self.to_world([isect.n.x, isect.n.y, isect.n.z]);
        isect.p = Point3f::new(p[0], p[1], p[2]);
        isect.n = Vec3f::new(n[0], n[1], n[2]);
        isect.t = isect.p.distance(ray.origin);
        Some(isect)
    }

    pub fn bounding_box(&self) -> Option<Aabb> {
        self.bounds
    }
}
