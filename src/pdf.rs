use crate::fast_rand;
use crate::sampling::{cosine_sample_hemisphere, random_2d, uniform_sample_hemisphere, Onb};
use crate::shapes::Primitive;
use crate::{Float, Point3f, Vec3f, INV_PI};
use cgmath::InnerSpace;

/// A directional probability density: evaluate it for a direction, or draw
/// a direction from it. Mixtures borrow their components so a pdf can be
/// assembled on the stack per bounce without allocation.
pub enum Pdf<'a> {
    /// Density reported as a flat 1/pi over the hemisphere about w, not
    /// the normalized 1/(2 pi).
    UniformHemisphere { uvw: Onb },
    /// cos(theta)/pi about w, generated by Malley's method.
    Cosine { uvw: Onb },
    /// Directions toward a shape's surface, delegated to the shape's
    /// area-light queries.
    Shape { prim: &'a Primitive, origin: Point3f },
    /// Equal-weight mixture: average density, fair-coin sampling.
    Mixture { a: &'a Pdf<'a>, b: &'a Pdf<'a> },
}

impl<'a> Pdf<'a> {
    pub fn uniform_hemisphere(w: Vec3f) -> Self {
        Pdf::UniformHemisphere { uvw: Onb::from_w(w) }
    }

    pub fn cosine(w: Vec3f) -> Self {
        Pdf::Cosine { uvw: Onb::from_w(w) }
    }

    pub fn shape(prim: &'a Primitive, origin: Point3f) -> Self {
        Pdf::Shape { prim, origin }
    }

    pub fn mixture(a: &'a Pdf<'a>, b: &'a Pdf<'a>) -> Self {
        Pdf::Mixture { a, b }
    }

    pub fn value(&self, dir: Vec3f) -> Float {
        match self {
            Pdf::UniformHemisphere { .. } => INV_PI,
            Pdf::Cosine { uvw } => {
                let cosine = dir.normalize().dot(uvw.w());
                if cosine > 0.0 {
                    cosine * INV_PI
                } else {
                    0.0
                }
            }
            Pdf::Shape { prim, origin } => prim.pdf_value(*origin, dir),
            Pdf::Mixture { a, b } => 0.5 * a.value(dir) + 0.5 * b.value(dir),
        }
    }

    pub fn generate(&self) -> Vec3f {
        match self {
            Pdf::UniformHemisphere { uvw } => uvw.local(uniform_sample_hemisphere(random_2d())),
            Pdf::Cosine { uvw } => uvw.local(cosine_sample_hemisphere(random_2d())),
            Pdf::Shape { prim, origin } => prim.random_toward(*origin),
            Pdf::Mixture { a, b } => {
                if fast_rand::rand::<Float>() < 0.5 {
                    a.generate()
                } else {
                    b.generate()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::RectXZ;
    use crate::Point2f;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cosine_density_shape() {
        let pdf = Pdf::cosine(vec3f!(0, 0, 1));
        assert_abs_diff_eq!(pdf.value(vec3f!(0, 0, 1)), INV_PI, epsilon = 1e-6);
        assert_eq!(pdf.value(vec3f!(0, 0, -1)), 0.0);
        // density follows the cosine, not the sample length
        assert_abs_diff_eq!(pdf.value(vec3f!(0, 0, 7)), INV_PI, epsilon = 1e-6);
    }

    #[test]
    fn test_cosine_generates_above_horizon() {
        let pdf = Pdf::cosine(vec3f!(0, 1, 0));
        for _ in 0..1000 {
            let dir = pdf.generate();
            assert!(dir.y >= 0.0);
        }
    }

    /// Monte-Carlo check that the cosine density integrates to one over
    /// the hemisphere.
    #[test]
    fn test_cosine_density_integrates_to_one() {
        crate::fast_rand::set_seed(31);
        let pdf = Pdf::cosine(vec3f!(0, 0, 1));
        let n = 1_000_000;
        let mut sum = 0.0f64;
        for _ in 0..n {
            // uniform directions over the hemisphere, density 1/(2 pi)
            let dir = uniform_sample_hemisphere(random_2d());
            sum += pdf.value(dir) as f64 * 2.0 * std::f64::consts::PI;
        }
        let integral = sum / n as f64;
        assert!((integral - 1.0).abs() < 0.01, "integral = {}", integral);
    }

    #[test]
    fn test_mixture_density_is_average() {
        let cosine = Pdf::cosine(vec3f!(0, 0, 1));
        let uniform = Pdf::uniform_hemisphere(vec3f!(0, 0, 1));
        let mix = Pdf::mixture(&cosine, &uniform);
        let dir = vec3f!(0, 0, 1);
        assert_abs_diff_eq!(
            mix.value(dir),
            0.5 * cosine.value(dir) + 0.5 * uniform.value(dir),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_shape_pdf_delegates() {
        let rect = Primitive::RectXZ(RectXZ::new(
            Point2f::new(-0.5, -0.5),
            Point2f::new(0.5, 0.5),
            1.0,
            0,
        ));
        let pdf = Pdf::shape(&rect, point3f!(0, 0, 0));
        assert!(pdf.value(vec3f!(0, 1, 0)) > 0.0);
        assert_eq!(pdf.value(vec3f!(0, -1, 0)), 0.0);

        for _ in 0..100 {
            let dir = pdf.generate();
            assert!(pdf.value(dir) > 0.0);
        }
    }
}
