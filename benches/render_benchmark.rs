use criterion::{criterion_group, criterion_main, Criterion};
use pathtracer::film::Film;
use pathtracer::integrator::{PathIntegrator, Sky};
use pathtracer::renderer::Renderer;
use pathtracer::scenes;
use pathtracer::spectrum::Spectrum;

fn bench_cornell(c: &mut Criterion) {
    let (scene, camera) = scenes::cornell_box(1.0);
    let sky = Sky { horizon: Spectrum::black(), zenith: Spectrum::black() };
    let renderer = Renderer::new(camera, PathIntegrator::new(sky), 4);

    c.bench_function("cornell 32x32 4spp", |b| {
        b.iter(|| {
            let film = Film::new(32, 32);
            renderer.render_parallel(&scene, &film);
            film
        })
    });
}

fn bench_cover_scene(c: &mut Criterion) {
    let (scene, camera) = scenes::cover_scene(1.0);
    let renderer = Renderer::new(camera, PathIntegrator::new(Sky::daylight()), 2);

    c.bench_function("cover scene 32x32 2spp", |b| {
        b.iter(|| {
            let film = Film::new(32, 32);
            renderer.render_parallel(&scene, &film);
            film
        })
    });
}

criterion_group!(benches, bench_cornell, bench_cover_scene);
criterion_main!(benches);
