use crate::fast_rand::{self, random_in_unit_sphere};
use crate::interaction::Interaction;
use crate::sampling::{cosine_sample_hemisphere, random_2d, uniform_sample_sphere, Onb};
use crate::spectrum::Spectrum;
use crate::texture::Texture;
use crate::{Float, Point2f, Point3f, Ray, Vec3f};
use cgmath::InnerSpace;

pub fn reflect(v: Vec3f, n: Vec3f) -> Vec3f {
    v - 2.0 * v.dot(n) * n
}

/// Snell's law. None on total internal reflection.
pub fn refract(v: Vec3f, n: Vec3f, ni_over_nt: Float) -> Option<Vec3f> {
    let uv = v.normalize();
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some(ni_over_nt * (uv - n * dt) - n * discriminant.sqrt())
    } else {
        None
    }
}

/// Schlick's approximation to the Fresnel reflectance.
pub fn schlick(cosine: Float, refractive_index: Float) -> Float {
    let r0 = (1.0 - refractive_index) / (1.0 + refractive_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powf(5.0)
}

/// Surface (and phase-function) behavior, one variant per BSDF model.
pub enum Material {
    Lambertian { albedo: Texture },
    Metal { albedo: Texture, fuzz: Float },
    Dielectric { refractive_index: Float },
    DiffuseLight { emit: Texture },
    Isotropic { albedo: Texture },
}

impl Material {
    pub fn metal(albedo: Texture, fuzz: Float) -> Self {
        Material::Metal { albedo, fuzz: fuzz.max(0.0).min(1.0) }
    }

    pub fn is_emitter(&self) -> bool {
        match self {
            Material::DiffuseLight { .. } => true,
            _ => false,
        }
    }

    /// Continuation ray, or None when the path is absorbed. Lambertian
    /// surfaces return a cosine-sampled default; the integrator usually
    /// overrides that direction with an externally chosen pdf.
    pub fn scatter(&self, ray: &Ray, isect: &Interaction) -> Option<Ray> {
        match self {
            Material::Lambertian { .. } => {
                let onb = Onb::from_w(isect.n);
                let dir = onb.local(cosine_sample_hemisphere(random_2d()));
                Some(Ray::new(isect.p, dir, ray.time))
            }

            Material::Metal { fuzz, .. } => {
                let reflected = reflect(ray.dir, isect.n);
                let dir = reflected + *fuzz * random_in_unit_sphere();
                // a fuzzed direction pushed below the surface is absorbed
                if dir.dot(isect.n) > 0.0 {
                    Some(Ray::new(isect.p, dir, ray.time))
                } else {
                    None
                }
            }

            Material::Dielectric { refractive_index } => {
                let eta = *refractive_index;
                let (outward_normal, ni_over_nt, cosine) = if ray.dir.dot(isect.n) > 0.0 {
                    // exiting the medium
                    (
                        -isect.n,
                        eta,
                        eta * ray.dir.dot(isect.n) / ray.dir.magnitude(),
                    )
                } else {
                    (
                        isect.n,
                        1.0 / eta,
                        -ray.dir.dot(isect.n) / ray.dir.magnitude(),
                    )
                };

                let dir = match refract(ray.dir, outward_normal, ni_over_nt) {
                    Some(refracted) => {
                        if fast_rand::rand::<Float>() < schlick(cosine, eta) {
                            reflect(ray.dir, isect.n)
                        } else {
                            refracted
                        }
                    }
                    // total internal reflection
                    None => reflect(ray.dir, isect.n),
                };
                Some(Ray::new(isect.p, dir, ray.time))
            }

            Material::DiffuseLight { .. } => None,

            Material::Isotropic { .. } => {
                let dir = uniform_sample_sphere(random_2d());
                Some(Ray::new(isect.p, dir, ray.time))
            }
        }
    }

    /// Emitted radiance; zero for everything but emitters.
    pub fn emitted(&self, uv: Point2f, p: Point3f) -> Spectrum {
        match self {
            Material::DiffuseLight { emit } => emit.value(uv, p),
            _ => Spectrum::black(),
        }
    }
}
