use pathtracer::film::Film;
use pathtracer::integrator::{PathIntegrator, Sky};
use pathtracer::renderer::Renderer;
use pathtracer::scenes;
use pathtracer::{Float, Spectrum};
use std::env::args;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // render [scene] [width] [height] [spp] [output]
    let scene_name = args().nth(1).unwrap_or_else(|| "cornell".to_string());
    let width: usize = args().nth(2).map_or(Ok(800), |a| a.parse())?;
    let height: usize = args().nth(3).map_or(Ok(600), |a| a.parse())?;
    let spp: u32 = args().nth(4).map_or(Ok(100), |a| a.parse())?;
    let output = args().nth(5).unwrap_or_else(|| "image.ppm".to_string());

    let aspect = width as Float / height as Float;
    let ((scene, camera), sky) = match scene_name.as_str() {
        "cornell" => (
            scenes::cornell_box(aspect),
            Sky { horizon: Spectrum::black(), zenith: Spectrum::black() },
        ),
        "smoke" => (
            scenes::cornell_smoke(aspect),
            Sky { horizon: Spectrum::black(), zenith: Spectrum::black() },
        ),
        "cover" => (scenes::cover_scene(aspect), Sky::daylight()),
        "shapes" => (scenes::shapes_demo(aspect), Sky::night()),
        other => anyhow::bail!(
            "unknown scene {:?} (expected cornell, smoke, cover or shapes)",
            other
        ),
    };

    let film = Film::new(width, height);
    let renderer = Renderer::new(camera, PathIntegrator::new(sky), spp);
    renderer.render_parallel(&scene, &film);

    film.write_ppm(&output)?;
    tracing::info!(output = output.as_str(), "wrote image");
    Ok(())
}
