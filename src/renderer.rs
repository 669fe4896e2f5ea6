use crate::bounds::Bounds2i;
use crate::camera::Camera;
use crate::fast_rand;
use crate::film::{Film, FilmTile};
use crate::integrator::PathIntegrator;
use crate::scene::Scene;
use crate::spectrum::Spectrum;
use crate::Float;
use rayon::prelude::*;
use std::ops::Add;

const TILE_SIZE: usize = 16;

/// Top-level driver: distributes film tiles across worker threads and,
/// within each pixel, reduces the per-sample loop in parallel as well. Both
/// levels ride the same work-stealing pool. Pixels are written by exactly
/// one tile task, so the film merge never races.
pub struct Renderer {
    pub camera: Camera,
    pub integrator: PathIntegrator,
    pub samples_per_pixel: u32,
}

impl Renderer {
    pub fn new(camera: Camera, integrator: PathIntegrator, samples_per_pixel: u32) -> Self {
        Self { camera, integrator, samples_per_pixel }
    }

    pub fn render_parallel(&self, scene: &Scene, film: &Film) {
        let span = tracing::info_span!(
            "render",
            width = film.width,
            height = film.height,
            spp = self.samples_per_pixel
        );
        let _enter = span.enter();

        let tiles: Vec<Bounds2i> = film.bounds().iter_tiles(TILE_SIZE).collect();
        let progress = Self::make_progress_bar(tiles.len() as u64);
        let progress_ref = &progress;

        tiles.into_par_iter().for_each(move |tile| {
            let film_tile = self.render_tile(scene, film, tile, true);
            film.merge_tile(film_tile);
            progress_ref.inc(1);
        });
        progress.finish();

        tracing::info!("render complete");
    }

    /// Single-threaded variant, mostly useful for tests and debugging.
    pub fn render(&self, scene: &Scene, film: &Film) {
        for tile in film.bounds().iter_tiles(TILE_SIZE) {
            let film_tile = self.render_tile(scene, film, tile, false);
            film.merge_tile(film_tile);
        }
    }

    fn render_tile(
        &self,
        scene: &Scene,
        film: &Film,
        tile: Bounds2i,
        parallel_samples: bool,
    ) -> FilmTile {
        let mut film_tile = film.tile(tile);
        for (x, y) in tile.iter_points() {
            let sum = if parallel_samples {
                (0..self.samples_per_pixel)
                    .into_par_iter()
                    .map(|_| self.sample_pixel(scene, film, x, y))
                    .reduce(Spectrum::black, Add::add)
            } else {
                (0..self.samples_per_pixel)
                    .map(|_| self.sample_pixel(scene, film, x, y))
                    .sum()
            };

            let mean = sum / self.samples_per_pixel as Float;
            // gamma correction
            film_tile.set(x, y, mean.sqrt());
        }
        film_tile
    }

    fn sample_pixel(&self, scene: &Scene, film: &Film, x: i32, y: i32) -> Spectrum {
        let u = (x as Float + fast_rand::rand::<Float>()) / film.width as Float;
        let v = (y as Float + fast_rand::rand::<Float>()) / film.height as Float;
        let ray = self.camera.get_ray(u, v);
        self.integrator.li(scene, ray)
    }

    fn make_progress_bar(total_size: u64) -> indicatif::ProgressBar {
        let bar = indicatif::ProgressBar::new(total_size);
        bar.set_draw_delta(7);
        bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrator::{PathIntegrator, Sky};
    use crate::material::Material;
    use crate::shapes::{Primitive, Sphere};
    use crate::spectrum::Spectrum;
    use crate::texture::Texture;

    fn mirror_scene() -> Scene {
        Scene::new(
            vec![Primitive::Sphere(Sphere::new(point3f!(0, 0, -3), 1.0, 0))],
            vec![Material::metal(Texture::Constant(Spectrum::uniform(1.0)), 0.0)],
        )
    }

    #[test]
    fn test_every_pixel_written() {
        let scene = mirror_scene();
        let film = Film::new(20, 12);
        let renderer = Renderer::new(
            Camera::with_aspect(20.0 / 12.0),
            PathIntegrator::new(Sky::daylight()),
            4,
        );
        renderer.render(&scene, &film);

        for pixel in film.into_pixels() {
            assert!(!pixel.is_black());
            assert!(!pixel.has_nans());
        }
    }

    #[test]
    fn test_parallel_matches_serial_statistically() {
        // not bit-equal (threads draw independently); compare image means
        let scene = mirror_scene();
        let renderer = Renderer::new(
            Camera::with_aspect(1.0),
            PathIntegrator::new(Sky::daylight()),
            32,
        );

        let serial = Film::new(8, 8);
        renderer.render(&scene, &serial);
        let parallel = Film::new(8, 8);
        renderer.render_parallel(&scene, &parallel);

        let mean = |film: Film| {
            let pixels = film.into_pixels();
            let n = pixels.len() as Float;
            pixels.into_iter().sum::<Spectrum>() / n
        };

        let a = mean(serial);
        let b = mean(parallel);
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 0.05, "channel {}: {} vs {}", i, a[i], b[i]);
        }
    }
}
