use crate::spectrum::Spectrum;
use crate::{Float, Point2f};
use anyhow::Context;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Decoded 8-bit RGB bitmap sampled by clamped UV lookup.
pub struct ImageTexture {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
    channels: usize,
}

impl ImageTexture {
    /// Decodes the file eagerly; failure here is fatal at scene
    /// construction, before any rendering starts.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .with_context(|| format!("failed to load texture image {:?}", path))?;
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        Ok(Self {
            pixels: rgb.into_raw(),
            width: width as usize,
            height: height as usize,
            channels: 3,
        })
    }

    /// Shared, process-wide cache so a bitmap referenced by several
    /// materials is decoded once.
    pub fn cached(path: impl AsRef<Path>) -> anyhow::Result<Arc<Self>> {
        static CACHE: Lazy<Mutex<HashMap<PathBuf, Arc<ImageTexture>>>> =
            Lazy::new(|| Mutex::new(HashMap::new()));

        let mut cache = CACHE.lock();
        match cache.entry(path.as_ref().to_path_buf()) {
            Entry::Occupied(e) => Ok(e.get().clone()),
            Entry::Vacant(e) => {
                let texture = Arc::new(Self::load(e.key())?);
                Ok(e.insert(texture).clone())
            }
        }
    }

    pub fn from_raw(pixels: Vec<u8>, width: usize, height: usize, channels: usize) -> Self {
        assert!(channels == 3 || channels == 4);
        assert_eq!(pixels.len(), width * height * channels);
        Self { pixels, width, height, channels }
    }

    pub fn value(&self, uv: Point2f) -> Spectrum {
        let x = ((uv.x * self.width as Float) as i64)
            .max(0)
            .min(self.width as i64 - 1) as usize;
        let y = ((uv.y * self.height as Float) as i64)
            .max(0)
            .min(self.height as i64 - 1) as usize;

        let base = self.channels * (x + self.width * y);
        Spectrum::from([
            self.pixels[base] as Float / 255.0,
            self.pixels[base + 1] as Float / 255.0,
            self.pixels[base + 2] as Float / 255.0,
        ])
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}
