use crate::spectrum::Spectrum;
use crate::{Float, Point2f, Point3f};

pub mod image;
pub mod perlin;

pub use self::image::ImageTexture;
pub use self::perlin::Perlin;

use std::sync::Arc;

/// Map from surface UV (plus the world-space hit point, which the
/// procedural variants key off) to a spectrum.
pub enum Texture {
    Constant(Spectrum),
    Checker {
        even: Box<Texture>,
        odd: Box<Texture>,
        frequency: Float,
    },
    Image(Arc<ImageTexture>),
    Noise {
        perlin: Perlin,
        scale: Float,
    },
}

impl Texture {
    pub fn checker(even: Texture, odd: Texture) -> Self {
        Texture::Checker {
            even: Box::new(even),
            odd: Box::new(odd),
            frequency: 10.0,
        }
    }

    pub fn noise(scale: Float) -> Self {
        Texture::Noise { perlin: Perlin::new(), scale }
    }

    pub fn value(&self, uv: Point2f, p: Point3f) -> Spectrum {
        match self {
            Texture::Constant(color) => *color,
            Texture::Checker { even, odd, frequency } => {
                let sines = (frequency * p.x).sin()
                    * (frequency * p.y).sin()
                    * (frequency * p.z).sin();
                if sines < 0.0 {
                    even.value(uv, p)
                } else {
                    odd.value(uv, p)
                }
            }
            Texture::Image(image) => image.value(uv),
            Texture::Noise { perlin, scale } => {
                Spectrum::uniform(perlin.turbulence(p * *scale, 7))
            }
        }
    }
}
