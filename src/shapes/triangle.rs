use crate::aabb::Aabb;
use crate::interaction::{Interaction, MaterialId};
use crate::{Float, Point2f, Point3f, Ray};
use cgmath::InnerSpace;

const DEGENERATE_EPS: Float = 1e-5;

/// Möller–Trumbore. Returns the interaction with barycentric (u, v) in the
/// uv slot and a unit face normal.
fn ray_triangle_intersect(
    ray: &Ray,
    p0: Point3f,
    p1: Point3f,
    p2: Point3f,
    t_min: Float,
    t_max: Float,
    material: MaterialId,
) -> Option<Interaction> {
    let e0 = p1 - p0;
    let e1 = p2 - p0;
    let pvec = ray.dir.cross(e1);
    let det = e0.dot(pvec);
    if det.abs() < DEGENERATE_EPS {
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = ray.origin - p0;
    let u = tvec.dot(pvec) * inv_det;
    if u < 0.0 || u > 1.0 {
        return None;
    }

    let qvec = tvec.cross(e0);
    let v = ray.dir.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = e1.dot(qvec) * inv_det;
    if !(t > t_min && t < t_max) {
        return None;
    }

    let n = (p2 - p0).cross(p1 - p0).normalize();
    Some(Interaction::new(
        t,
        ray.at(t),
        n,
        Point2f::new(u, v),
        ray.time,
        material,
    ))
}

pub struct Triangle {
    pub points: [Point3f; 3],
    pub material: MaterialId,
}

impl Triangle {
    pub fn new(p0: Point3f, p1: Point3f, p2: Point3f, material: MaterialId) -> Self {
        Self { points: [p0, p1, p2], material }
    }

    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<Interaction> {
        ray_triangle_intersect(
            ray,
            self.points[0],
            self.points[1],
            self.points[2],
            t_min,
            t_max,
            self.material,
        )
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::empty()
            .join_point(self.points[0])
            .join_point(self.points[1])
            .join_point(self.points[2])
    }
}

/// Indexed triangle mesh. Triangles are scanned linearly; the mesh as a
/// whole carries a real bounding box so the acceleration structure can
/// partition it like any other primitive.
pub struct Mesh {
    positions: Vec<Point3f>,
    indices: Vec<u32>,
    pub material: MaterialId,
    bounds: Aabb,
}

impl Mesh {
    pub fn new(positions: Vec<Point3f>, indices: Vec<u32>, material: MaterialId) -> Self {
        assert_eq!(indices.len() % 3, 0, "mesh indices must form whole triangles");
        let bounds = positions
            .iter()
            .fold(Aabb::empty(), |bounds, &p| bounds.join_point(p));
        Self { positions, indices, material, bounds }
    }

    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<Interaction> {
        let mut closest_so_far = t_max;
        let mut hit = None;
        for tri in self.indices.chunks(3) {
            let p0 = self.positions[tri[0] as usize];
            let p1 = self.positions[tri[1] as usize];
            let p2 = self.positions[tri[2] as usize];
            if let Some(isect) =
                ray_triangle_intersect(ray, p0, p1, p2, t_min, closest_so_far, self.material)
            {
                closest_so_far = isect.t;
                hit = Some(isect);
            }
        }
        hit
    }

    pub fn bounding_box(&self) -> Aabb {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{T_MAX, T_MIN};
    use approx::assert_abs_diff_eq;

    fn unit_triangle() -> Triangle {
        Triangle::new(point3f!(0, 0, 0), point3f!(1, 0, 0), point3f!(0, 1, 0), 0)
    }

    #[test]
    fn test_hit_barycentrics() {
        let tri = unit_triangle();
        let ray = Ray::new(point3f!(0.25, 0.25, 5), vec3f!(0, 0, -1), 0.0);
        let isect = tri.intersect(&ray, T_MIN, T_MAX).unwrap();
        assert_abs_diff_eq!(isect.t, 5.0, epsilon = 1e-3);
        assert_abs_diff_eq!(isect.uv.x, 0.25, epsilon = 1e-4);
        assert_abs_diff_eq!(isect.uv.y, 0.25, epsilon = 1e-4);
        assert_abs_diff_eq!(isect.n.magnitude(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_outside_barycentrics_miss() {
        let tri = unit_triangle();
        let ray = Ray::new(point3f!(0.75, 0.75, 5), vec3f!(0, 0, -1), 0.0);
        assert!(tri.intersect(&ray, T_MIN, T_MAX).is_none());
    }

    #[test]
    fn test_behind_origin_misses() {
        let tri = unit_triangle();
        let ray = Ray::new(point3f!(0.25, 0.25, -5), vec3f!(0, 0, -1), 0.0);
        assert!(tri.intersect(&ray, T_MIN, T_MAX).is_none());
    }

    #[test]
    fn test_edge_on_degenerate_misses() {
        let tri = unit_triangle();
        let ray = Ray::new(point3f!(-5, 0.25, 0), vec3f!(1, 0, 0), 0.0);
        assert!(tri.intersect(&ray, T_MIN, T_MAX).is_none());
    }

    #[test]
    fn test_t_max_cuts_hit() {
        let tri = unit_triangle();
        let ray = Ray::new(point3f!(0.25, 0.25, 5), vec3f!(0, 0, -1), 0.0);
        assert!(tri.intersect(&ray, T_MIN, 4.0).is_none());
    }

    fn quad_mesh() -> Mesh {
        // two triangles forming the unit square at z = 0
        Mesh::new(
            vec![
                point3f!(0, 0, 0),
                point3f!(1, 0, 0),
                point3f!(1, 1, 0),
                point3f!(0, 1, 0),
            ],
            vec![0, 1, 2, 0, 2, 3],
            0,
        )
    }

    #[test]
    fn test_mesh_closest_triangle() {
        let mesh = quad_mesh();
        let ray = Ray::new(point3f!(0.9, 0.5, 5), vec3f!(0, 0, -1), 0.0);
        let isect = mesh.intersect(&ray, T_MIN, T_MAX).unwrap();
        assert_abs_diff_eq!(isect.t, 5.0, epsilon = 1e-3);
    }

    #[test]
    fn test_mesh_bounds_cover_vertices() {
        let mesh = quad_mesh();
        let bounds = mesh.bounding_box();
        assert!(bounds.contains(point3f!(0, 0, 0), 1e-6));
        assert!(bounds.contains(point3f!(1, 1, 0), 1e-6));
        assert!(!bounds.contains(point3f!(2, 0, 0), 1e-6));
    }
}
