use crate::pdf::Pdf;
use crate::scene::Scene;
use crate::spectrum::Spectrum;
use crate::material::Material;
use crate::{Ray, INV_PI, T_MAX, T_MIN};
use cgmath::InnerSpace;

/// How diffuse bounce directions are drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DiffusePdf {
    /// Fair-coin mixture of the first emitter's shape pdf and a cosine pdf
    /// about the shading normal. Falls back to cosine when the scene has no
    /// emitters.
    Mixture,
    Cosine,
    UniformHemisphere,
}

/// Sky gradient evaluated on escaped rays: lerp on 0.5 * (dir.y + 1)
/// between the horizon and zenith spectra.
#[derive(Copy, Clone, Debug)]
pub struct Sky {
    pub horizon: Spectrum,
    pub zenith: Spectrum,
}

impl Sky {
    pub fn daylight() -> Self {
        Self {
            horizon: Spectrum::uniform(1.0),
            zenith: Spectrum::from([0.5, 0.7, 1.0]),
        }
    }

    pub fn overcast() -> Self {
        Self {
            horizon: Spectrum::uniform(1.0),
            zenith: Spectrum::uniform(1.0),
        }
    }

    pub fn night() -> Self {
        Self {
            horizon: Spectrum::black(),
            zenith: Spectrum::from([0.14, 0.12, 0.14]),
        }
    }

    pub fn radiance(&self, ray: &Ray) -> Spectrum {
        let t = 0.5 * (ray.dir.y + 1.0);
        Spectrum::lerp(t, self.horizon, self.zenith)
    }
}

/// Iterative evaluation of the light-transport recursion with a fixed
/// bounce cap and no russian roulette. State carried across bounces is the
/// current ray, the multiplied-up throughput, and the radiance accumulated
/// so far.
pub struct PathIntegrator {
    pub max_depth: u32,
    pub sky: Sky,
    pub diffuse_pdf: DiffusePdf,
    /// Clamp emission to [0, 1] when an emitter is the first thing a
    /// primary ray hits. Suppresses bloom on directly visible lights; an
    /// observable knob, not a correctness feature.
    pub clamp_first_emission: bool,
}

impl PathIntegrator {
    pub fn new(sky: Sky) -> Self {
        Self {
            max_depth: 50,
            sky,
            diffuse_pdf: DiffusePdf::Mixture,
            clamp_first_emission: true,
        }
    }

    /// Incident radiance along a primary ray. NaN components arising from
    /// degenerate pdf divisions are scrubbed to zero before returning.
    pub fn li(&self, scene: &Scene, primary: Ray) -> Spectrum {
        let mut ray = primary;
        let mut radiance = Spectrum::black();
        let mut throughput = Spectrum::uniform(1.0);

        for depth in 0..self.max_depth {
            let isect = match scene.intersect(&ray, T_MIN, T_MAX) {
                Some(isect) => isect,
                None => {
                    radiance += throughput * self.sky.radiance(&ray);
                    break;
                }
            };

            let material = scene.material(isect.material);
            let emitted = material.emitted(isect.uv, isect.p);

            let scattered = match material.scatter(&ray, &isect) {
                Some(scattered) => scattered,
                None => {
                    // absorbed: emitters end their paths here
                    let emitted = if depth == 0 && self.clamp_first_emission {
                        emitted.clamp(0.0, 1.0)
                    } else {
                        emitted
                    };
                    radiance += throughput * emitted;
                    break;
                }
            };

            radiance += throughput * emitted;

            match material {
                Material::Lambertian { albedo } => {
                    let albedo = albedo.value(isect.uv, isect.p);
                    let (next_ray, weight) = self.sample_diffuse(scene, &ray, &isect, albedo);
                    throughput *= weight;
                    ray = next_ray;
                }
                Material::Metal { albedo, .. } => {
                    throughput *= albedo.value(isect.uv, isect.p);
                    ray = scattered;
                }
                Material::Dielectric { .. } => {
                    // attenuation is unity
                    ray = scattered;
                }
                Material::Isotropic { albedo } => {
                    throughput *= albedo.value(isect.uv, isect.p);
                    ray = scattered;
                }
                Material::DiffuseLight { .. } => unreachable!("emitters never scatter"),
            }
        }

        radiance.de_nan()
    }

    /// Draws the diffuse bounce direction from the configured pdf and
    /// returns the new ray with its importance weight
    /// albedo * scattering_pdf / pdf.
    fn sample_diffuse(
        &self,
        scene: &Scene,
        ray: &Ray,
        isect: &crate::Interaction,
        albedo: Spectrum,
    ) -> (Ray, Spectrum) {
        let cosine = Pdf::cosine(isect.n);

        let (dir, pdf_value) = match (self.diffuse_pdf, scene.first_light()) {
            (DiffusePdf::Mixture, Some(light)) => {
                let toward_light = Pdf::shape(light, isect.p);
                let mixture = Pdf::mixture(&toward_light, &cosine);
                let dir = mixture.generate();
                (dir, mixture.value(dir))
            }
            (DiffusePdf::UniformHemisphere, _) => {
                let uniform = Pdf::uniform_hemisphere(isect.n);
                let dir = uniform.generate();
                (dir, uniform.value(dir))
            }
            // Mixture without any emitter degrades to plain cosine
            _ => {
                let dir = cosine.generate();
                (dir, cosine.value(dir))
            }
        };

        let next_ray = Ray::new(isect.p, dir, ray.time);
        let scattering_pdf = isect.n.normalize().dot(next_ray.dir).abs() * INV_PI;
        let weight = albedo * scattering_pdf / pdf_value;
        (next_ray, weight)
    }
}
