//! End-to-end scenarios through the full camera/driver/film pipeline.

use pathtracer::camera::Camera;
use pathtracer::film::Film;
use pathtracer::integrator::{PathIntegrator, Sky};
use pathtracer::renderer::Renderer;
use pathtracer::scene::Scene;
use pathtracer::scenes;
use pathtracer::spectrum::Spectrum;

/// Film pixels are gamma corrected; square them to reason about linear
/// radiance again.
fn linear(pixel: Spectrum) -> Spectrum {
    pixel * pixel
}

#[test]
fn sky_gradient_renders_bluer_at_top() {
    let scene = Scene::new(vec![], vec![]);
    let sky = Sky {
        horizon: Spectrum::uniform(1.0),
        zenith: Spectrum::from([0.5, 0.7, 1.0]),
    };

    let film = Film::new(16, 16);
    let renderer = Renderer::new(Camera::with_aspect(1.0), PathIntegrator::new(sky), 16);
    renderer.render_parallel(&scene, &film);

    let top = linear(film.pixel(8, 15));
    let bottom = linear(film.pixel(8, 0));

    // top of the frame leans toward the zenith blue
    assert!(top[2] - top[0] >= 0.3, "top B - R = {}", top[2] - top[0]);
    assert!(top[2] - top[0] > bottom[2] - bottom[0]);
    // the bottom looks at the horizon, which is nearly white
    assert!(bottom[0] > 0.9 && bottom[2] > 0.9);
}

#[test]
fn cornell_walls_bleed_their_colors() {
    let (scene, camera) = scenes::cornell_box(1.0);
    let sky = Sky { horizon: Spectrum::black(), zenith: Spectrum::black() };

    let size = 24;
    let film = Film::new(size, size);
    let renderer = Renderer::new(camera, PathIntegrator::new(sky), 100);
    renderer.render_parallel(&scene, &film);

    // sum a full column of pixels hugging each side of the frame
    let mut left = Spectrum::black();
    let mut right = Spectrum::black();
    for y in size / 4..3 * size / 4 {
        left += linear(film.pixel(1, y));
        right += linear(film.pixel(size - 2, y));
    }

    // red wall on the left of the frame, green wall on the right
    assert!(left[0] > 1.2 * left[1], "left column R={} G={}", left[0], left[1]);
    assert!(right[1] > 1.2 * right[0], "right column R={} G={}", right[1], right[0]);

    // the white floor reflects both about equally
    let floor = linear(film.pixel(size / 2, 1));
    let (r, g) = (floor[0], floor[1]);
    assert!(r > 0.0 && g > 0.0);
    assert!((r - g).abs() / r.max(g) < 0.3, "floor R={} G={}", r, g);
}

#[test]
fn render_writes_spec_ppm() {
    let scene = Scene::new(vec![], vec![]);
    let film = Film::new(6, 4);
    let renderer = Renderer::new(
        Camera::with_aspect(6.0 / 4.0),
        PathIntegrator::new(Sky::overcast()),
        4,
    );
    renderer.render_parallel(&scene, &film);

    let path = std::env::temp_dir().join("pathtracer_e2e_test.ppm");
    film.write_ppm(&path).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("P3"));
    assert_eq!(lines.next(), Some("6 4"));
    assert_eq!(lines.next(), Some("255"));

    let body: Vec<&str> = lines.collect();
    assert_eq!(body.len(), 6 * 4);
    // uniform white sky: every channel saturates
    for line in body {
        assert_eq!(line, "255 255 255");
    }
}

#[test]
fn smoke_scene_renders_finite_radiance() {
    let (scene, camera) = scenes::cornell_smoke(1.0);
    let sky = Sky { horizon: Spectrum::black(), zenith: Spectrum::black() };

    let film = Film::new(8, 8);
    let renderer = Renderer::new(camera, PathIntegrator::new(sky), 16);
    renderer.render_parallel(&scene, &film);

    for pixel in film.into_pixels() {
        assert!(!pixel.has_nans());
        assert!(pixel[0] >= 0.0 && pixel[0].is_finite());
    }
}

#[test]
fn moving_spheres_blur_over_the_shutter() {
    // a sphere sweeping upward through a still camera's center pixel:
    // some samples catch it, some see past it to the sky, so the pixel
    // lands strictly between the two pure values
    use pathtracer::material::Material;
    use pathtracer::shapes::{Motion, Primitive, Sphere};
    use pathtracer::texture::Texture;
    use pathtracer::Vec3f;
    use pathtracer::{point3f, vec3f};

    let scene = Scene::new(
        vec![Primitive::Sphere(Sphere::moving(
            point3f!(0, 0, -3),
            0.5,
            0,
            Motion { start: Vec3f::new(0.0, 0.0, 0.0), end: Vec3f::new(0.0, 4.0, 0.0) },
        ))],
        vec![Material::Lambertian { albedo: Texture::Constant(Spectrum::black()) }],
    );

    let camera = Camera::new(
        point3f!(0, 0, 0),
        point3f!(0, 0, -1),
        vec3f!(0, 1, 0),
        90f32.to_radians(),
        1.0,
        None,
        Some((0.0, 1.0)),
    );

    let film = Film::new(9, 9);
    let renderer = Renderer::new(camera, PathIntegrator::new(Sky::overcast()), 256);
    renderer.render_parallel(&scene, &film);

    let center = film.pixel(4, 4);
    // black sphere part of the time, white sky the rest
    assert!(center[0] > 0.5 && center[0] < 0.99, "center = {}", center[0]);
}
