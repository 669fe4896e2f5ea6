use crate::bvh::Bvh;
use crate::interaction::Interaction;
use crate::material::Material;
use crate::shapes::Primitive;
use crate::{Float, Ray};

/// Immutable world: primitives, the material table they index into, the
/// subset of primitive indices that emit (used for explicit light
/// sampling), and the acceleration structure. Populated once at startup and
/// only read during rendering.
pub struct Scene {
    pub primitives: Vec<Primitive>,
    pub materials: Vec<Material>,
    pub lights: Vec<usize>,
    bvh: Bvh,
}

impl Scene {
    pub fn new(primitives: Vec<Primitive>, materials: Vec<Material>) -> Self {
        let lights: Vec<usize> = primitives
            .iter()
            .enumerate()
            .filter(|(_, prim)| {
                prim_material(prim, &materials).map_or(false, |m| m.is_emitter())
            })
            .map(|(i, _)| i)
            .collect();

        let bvh = Bvh::build(&primitives);

        tracing::info!(
            primitives = primitives.len(),
            lights = lights.len(),
            "scene built"
        );

        Self { primitives, materials, lights, bvh }
    }

    pub fn material(&self, id: usize) -> &Material {
        &self.materials[id]
    }

    /// First emissive primitive, if the scene has one. The diffuse
    /// importance-sampling mixture aims at it.
    pub fn first_light(&self) -> Option<&Primitive> {
        self.lights.first().map(|&i| &self.primitives[i])
    }

    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<Interaction> {
        self.bvh.intersect(&self.primitives, ray, t_min, t_max)
    }
}

fn prim_material<'m>(prim: &Primitive, materials: &'m [Material]) -> Option<&'m Material> {
    let id = match prim {
        Primitive::Sphere(s) => s.material,
        Primitive::RectXY(r) => r.material,
        Primitive::RectXZ(r) => r.material,
        Primitive::RectYZ(r) => r.material,
        Primitive::Disk(d) => d.material,
        Primitive::Cylinder(c) => c.material,
        Primitive::Triangle(t) => t.material,
        Primitive::Mesh(m) => m.material,
        Primitive::ConstantMedium(m) => m.material,
        Primitive::FlipNormal(f) => return prim_material(&f.child, materials),
        Primitive::Translate(t) => return prim_material(&t.child, materials),
        Primitive::RotateY(r) => return prim_material(&r.child, materials),
        // compounds hold per-face ids and are never emitters themselves
        Primitive::CappedCylinder(_) | Primitive::Cuboid(_) => return None,
    };
    materials.get(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::shapes::{FlipNormal, RectXZ, Sphere};
    use crate::spectrum::Spectrum;
    use crate::texture::Texture;
    use crate::{Point2f, T_MAX, T_MIN};

    fn test_materials() -> Vec<Material> {
        vec![
            Material::Lambertian { albedo: Texture::Constant(Spectrum::uniform(0.5)) },
            Material::DiffuseLight { emit: Texture::Constant(Spectrum::uniform(4.0)) },
        ]
    }

    #[test]
    fn test_empty_scene_always_misses() {
        let scene = Scene::new(vec![], test_materials());
        let ray = Ray::new(point3f!(0, 0, 0), vec3f!(0, 0, 1), 0.0);
        assert!(scene.intersect(&ray, T_MIN, T_MAX).is_none());
    }

    #[test]
    fn test_light_detection_through_wrappers() {
        let scene = Scene::new(
            vec![
                Primitive::Sphere(Sphere::new(point3f!(0, 0, 0), 1.0, 0)),
                Primitive::FlipNormal(FlipNormal::new(Primitive::RectXZ(RectXZ::new(
                    Point2f::new(-1.0, -1.0),
                    Point2f::new(1.0, 1.0),
                    5.0,
                    1,
                )))),
            ],
            test_materials(),
        );
        assert_eq!(scene.lights, vec![1]);
        assert!(scene.first_light().is_some());
    }

    #[test]
    fn test_emissive_mesh_is_a_light() {
        use crate::shapes::Mesh;
        let panel = Mesh::new(
            vec![
                point3f!(0, 5, 0),
                point3f!(1, 5, 0),
                point3f!(1, 5, 1),
                point3f!(0, 5, 1),
            ],
            vec![0, 1, 2, 0, 2, 3],
            1,
        );
        let scene = Scene::new(vec![Primitive::Mesh(panel)], test_materials());
        assert_eq!(scene.lights, vec![0]);
    }

    #[test]
    fn test_intersect_reports_scene_index() {
        let scene = Scene::new(
            vec![
                Primitive::Sphere(Sphere::new(point3f!(0, 0, 10), 1.0, 0)),
                Primitive::Sphere(Sphere::new(point3f!(0, 0, 5), 1.0, 0)),
            ],
            test_materials(),
        );
        let ray = Ray::new(point3f!(0, 0, 0), vec3f!(0, 0, 1), 0.0);
        let isect = scene.intersect(&ray, T_MIN, T_MAX).unwrap();
        assert_eq!(isect.prim, 1);
        assert_eq!(isect.material, 0);
    }
}
