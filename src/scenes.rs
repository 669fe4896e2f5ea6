//! Built-in demo scenes.

use crate::camera::{Camera, Lens};
use crate::fast_rand::{rand, rand_range};
use crate::material::Material;
use crate::scene::Scene;
use crate::shapes::{
    CappedCylinder, ConstantMedium, Cuboid, FlipNormal, Mesh, Motion, Primitive, RectXY, RectXZ,
    RectYZ, RotateY, Sphere, Translate, Triangle,
};
use crate::spectrum::Spectrum;
use crate::texture::Texture;
use crate::{Float, Point2f, Vec3f};

/// The classic emitter box: red and green side walls, white everything
/// else, one overhead area light, two rotated boxes.
pub fn cornell_box(aspect: Float) -> (Scene, Camera) {
    let (primitives, materials) = cornell_interior();
    (Scene::new(primitives, materials), cornell_camera(aspect))
}

fn cornell_interior() -> (Vec<Primitive>, Vec<Material>) {
    let materials = vec![
        Material::Lambertian { albedo: Texture::Constant(Spectrum::from([0.65, 0.05, 0.05])) },
        Material::Lambertian { albedo: Texture::Constant(Spectrum::uniform(0.73)) },
        Material::Lambertian { albedo: Texture::Constant(Spectrum::from([0.12, 0.45, 0.15])) },
        Material::DiffuseLight { emit: Texture::Constant(Spectrum::uniform(15.0)) },
    ];
    const RED: usize = 0;
    const WHITE: usize = 1;
    const GREEN: usize = 2;
    const LIGHT: usize = 3;

    let whole_wall = (Point2f::new(0.0, 0.0), Point2f::new(555.0, 555.0));

    let primitives = vec![
        // red wall at x = 0 faces +x, into the room
        Primitive::RectYZ(RectYZ::new(whole_wall.0, whole_wall.1, 0.0, RED)),
        Primitive::FlipNormal(FlipNormal::new(Primitive::RectYZ(RectYZ::new(
            whole_wall.0,
            whole_wall.1,
            555.0,
            GREEN,
        )))),
        Primitive::FlipNormal(FlipNormal::new(Primitive::RectXZ(RectXZ::new(
            Point2f::new(213.0, 227.0),
            Point2f::new(343.0, 332.0),
            554.0,
            LIGHT,
        )))),
        Primitive::RectXZ(RectXZ::new(whole_wall.0, whole_wall.1, 0.0, WHITE)),
        Primitive::FlipNormal(FlipNormal::new(Primitive::RectXZ(RectXZ::new(
            whole_wall.0,
            whole_wall.1,
            555.0,
            WHITE,
        )))),
        Primitive::FlipNormal(FlipNormal::new(Primitive::RectXY(RectXY::new(
            whole_wall.0,
            whole_wall.1,
            555.0,
            WHITE,
        )))),
        Primitive::Translate(Translate::new(
            Primitive::RotateY(RotateY::new(
                Primitive::Cuboid(Cuboid::new(
                    point3f!(0, 0, 0),
                    point3f!(165, 330, 165),
                    WHITE,
                )),
                15.0,
            )),
            vec3f!(265, 0, 295),
        )),
        Primitive::Translate(Translate::new(
            Primitive::RotateY(RotateY::new(
                Primitive::Cuboid(Cuboid::new(
                    point3f!(0, 0, 0),
                    point3f!(165, 165, 165),
                    WHITE,
                )),
                -18.0,
            )),
            vec3f!(130, 0, 65),
        )),
    ];

    (primitives, materials)
}

/// Cornell variant with the boxes replaced by constant-density media: a
/// wisp of white smoke and a block of dense dark fog.
pub fn cornell_smoke(aspect: Float) -> (Scene, Camera) {
    let (mut primitives, mut materials) = cornell_interior();

    let smoke = materials.len();
    materials.push(Material::Isotropic { albedo: Texture::Constant(Spectrum::uniform(1.0)) });
    let fog = materials.len();
    materials.push(Material::Isotropic { albedo: Texture::Constant(Spectrum::black()) });

    // swap the two boxes for media with the same boundaries
    let tall = primitives.len() - 2;
    primitives[tall] = Primitive::ConstantMedium(ConstantMedium::new(
        Primitive::Translate(Translate::new(
            Primitive::RotateY(RotateY::new(
                Primitive::Cuboid(Cuboid::new(point3f!(0, 0, 0), point3f!(165, 330, 165), 1)),
                15.0,
            )),
            vec3f!(265, 0, 295),
        )),
        0.01,
        fog,
    ));
    let short = primitives.len() - 1;
    primitives[short] = Primitive::ConstantMedium(ConstantMedium::new(
        Primitive::Translate(Translate::new(
            Primitive::RotateY(RotateY::new(
                Primitive::Cuboid(Cuboid::new(point3f!(0, 0, 0), point3f!(165, 165, 165), 1)),
                -18.0,
            )),
            vec3f!(130, 0, 65),
        )),
        0.01,
        smoke,
    ));

    (Scene::new(primitives, materials), cornell_camera(aspect))
}

fn cornell_camera(aspect: Float) -> Camera {
    Camera::new(
        point3f!(278, 278, -800),
        point3f!(278, 278, 0),
        vec3f!(0, 1, 0),
        40f32.to_radians(),
        aspect,
        Some(Lens { aperture: 0.0, focus_dist: 10.0 }),
        Some((0.0, 1.0)),
    )
}

/// Checkered ground plus three hero spheres and a field of random small
/// ones, some with shutter-interval motion.
pub fn cover_scene(aspect: Float) -> (Scene, Camera) {
    let mut materials = vec![
        Material::Lambertian {
            albedo: Texture::checker(
                Texture::Constant(Spectrum::from([0.2, 0.3, 0.1])),
                Texture::Constant(Spectrum::from([0.9, 0.9, 0.9])),
            ),
        },
        Material::Dielectric { refractive_index: 1.5 },
        Material::Lambertian { albedo: Texture::noise(4.0) },
        Material::metal(Texture::Constant(Spectrum::from([0.7, 0.6, 0.5])), 0.01),
    ];

    let mut primitives = vec![
        Primitive::Sphere(Sphere::new(point3f!(0, -1000, 0), 1000.0, 0)),
        Primitive::Sphere(Sphere::new(point3f!(0, 1, 0), 1.0, 1)),
        Primitive::Sphere(Sphere::new(point3f!(-4, 1, 0), 1.0, 2)),
        Primitive::Sphere(Sphere::new(point3f!(4, 1, 0), 1.0, 3)),
    ];

    for a in -6..6 {
        for b in -6..6 {
            let center = point3f!(
                a as Float + 0.9 * rand::<Float>(),
                0.2,
                b as Float + 0.9 * rand::<Float>()
            );

            let choose_mat: Float = rand();
            let material = if choose_mat < 0.8 {
                Material::Lambertian {
                    albedo: Texture::Constant(Spectrum::from([
                        rand::<Float>() * rand::<Float>(),
                        rand::<Float>() * rand::<Float>(),
                        rand::<Float>() * rand::<Float>(),
                    ])),
                }
            } else if choose_mat < 0.95 {
                Material::metal(
                    Texture::Constant(Spectrum::from([
                        0.5 * (1.0 + rand::<Float>()),
                        0.5 * (1.0 + rand::<Float>()),
                        0.5 * (1.0 + rand::<Float>()),
                    ])),
                    rand_range(0.0, 0.5),
                )
            } else {
                Material::Dielectric { refractive_index: 1.5 }
            };

            materials.push(material);
            let material_id = materials.len() - 1;

            let sphere = if rand::<Float>() < 0.25 {
                Sphere::moving(
                    center,
                    0.2,
                    material_id,
                    Motion {
                        start: Vec3f::new(0.0, 0.0, 0.0),
                        end: Vec3f::new(0.0, rand_range(0.0, 0.5), 0.0),
                    },
                )
            } else {
                Sphere::new(center, 0.2, material_id)
            };
            primitives.push(Primitive::Sphere(sphere));
        }
    }

    let camera = Camera::new(
        point3f!(13, 2, 3),
        point3f!(0, 0, 0),
        vec3f!(0, 1, 0),
        20f32.to_radians(),
        aspect,
        Some(Lens { aperture: 0.1, focus_dist: 10.0 }),
        Some((0.0, 1.0)),
    );

    (Scene::new(primitives, materials), camera)
}

/// One of everything: the shapes the other scenes don't reach.
pub fn shapes_demo(aspect: Float) -> (Scene, Camera) {
    let materials = vec![
        Material::Lambertian { albedo: Texture::Constant(Spectrum::from([0.48, 0.53, 0.6])) },
        Material::metal(Texture::Constant(Spectrum::from([0.8, 0.7, 0.55])), 0.1),
        Material::Lambertian { albedo: Texture::Constant(Spectrum::from([0.7, 0.3, 0.25])) },
        Material::DiffuseLight { emit: Texture::Constant(Spectrum::uniform(6.0)) },
    ];

    // a little tetrahedron built as an indexed mesh
    let tetrahedron = Mesh::new(
        vec![
            point3f!(2.2, 0.0, -1.2),
            point3f!(3.2, 0.0, -1.0),
            point3f!(2.6, 0.0, -0.2),
            point3f!(2.7, 1.1, -0.8),
        ],
        vec![0, 1, 2, 0, 3, 1, 1, 3, 2, 2, 3, 0],
        2,
    );

    let primitives = vec![
        Primitive::RectXZ(RectXZ::new(
            Point2f::new(-12.0, -12.0),
            Point2f::new(12.0, 12.0),
            0.0,
            0,
        )),
        Primitive::FlipNormal(FlipNormal::new(Primitive::RectXZ(RectXZ::new(
            Point2f::new(-2.0, -2.0),
            Point2f::new(2.0, 2.0),
            8.0,
            3,
        )))),
        Primitive::CappedCylinder(CappedCylinder::new(0.8, 0.0, 2.0, 1)),
        Primitive::Translate(Translate::new(
            Primitive::RotateY(RotateY::new(
                Primitive::Cuboid(Cuboid::new(point3f!(-0.7, 0.0, -0.7), point3f!(0.7, 1.4, 0.7), 2)),
                30.0,
            )),
            vec3f!(-2.5, 0, 0.5),
        )),
        Primitive::Triangle(Triangle::new(
            point3f!(-1.5, 0.0, -2.5),
            point3f!(0.0, 0.0, -3.5),
            point3f!(-0.8, 1.8, -3.0),
            2,
        )),
        Primitive::Mesh(tetrahedron),
    ];

    let camera = Camera::new(
        point3f!(0, 3, 9),
        point3f!(0, 1, 0),
        vec3f!(0, 1, 0),
        35f32.to_radians(),
        aspect,
        None,
        None,
    );

    (Scene::new(primitives, materials), camera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cornell_has_one_light() {
        let (scene, _) = cornell_box(1.0);
        assert_eq!(scene.lights.len(), 1);
        assert_eq!(scene.primitives.len(), 8);
    }

    #[test]
    fn test_cornell_smoke_swaps_boxes_for_media() {
        let (scene, _) = cornell_smoke(1.0);
        let media = scene
            .primitives
            .iter()
            .filter(|p| match p {
                Primitive::ConstantMedium(_) => true,
                _ => false,
            })
            .count();
        assert_eq!(media, 2);
        // still exactly one emitter
        assert_eq!(scene.lights.len(), 1);
    }

    #[test]
    fn test_cover_scene_builds() {
        let (scene, _) = cover_scene(1.5);
        assert!(scene.primitives.len() > 100);
        // every small sphere carries its own material
        assert_eq!(scene.materials.len(), scene.primitives.len());
        assert!(scene.lights.is_empty());
    }

    #[test]
    fn test_shapes_demo_builds() {
        let (scene, _) = shapes_demo(1.0);
        assert_eq!(scene.lights.len(), 1);
    }
}
