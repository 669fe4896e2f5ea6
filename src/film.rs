use crate::bounds::Bounds2i;
use crate::spectrum::Spectrum;
use crate::Point2i;
use anyhow::Context;
use parking_lot::Mutex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Per-pixel radiance accumulator. Pixel (0, 0) is the bottom-left corner,
/// matching the camera's v axis; the serializer is responsible for the
/// top-row-first output order and nothing else may rely on storage order.
pub struct Film {
    pub width: usize,
    pub height: usize,
    pixels: Mutex<Vec<Spectrum>>,
}

/// Privately accumulated rectangle of pixels, merged into the film under
/// its lock when the tile finishes. Each pixel belongs to exactly one tile,
/// so merging never loses writes.
pub struct FilmTile {
    bounds: Bounds2i,
    pixels: Vec<Spectrum>,
}

impl Film {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: Mutex::new(vec![Spectrum::black(); width * height]),
        }
    }

    pub fn bounds(&self) -> Bounds2i {
        Bounds2i::with_bounds(
            Point2i::new(0, 0),
            Point2i::new(self.width as i32, self.height as i32),
        )
    }

    pub fn tile(&self, bounds: Bounds2i) -> FilmTile {
        FilmTile {
            bounds,
            pixels: vec![Spectrum::black(); bounds.area().max(0) as usize],
        }
    }

    pub fn merge_tile(&self, tile: FilmTile) {
        let mut pixels = self.pixels.lock();
        for (x, y) in tile.bounds.iter_points() {
            let value = tile.pixels[tile.pixel_index(Point2i::new(x, y))];
            pixels[self.pixel_index(x, y)] = value;
        }
    }

    fn pixel_index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    pub fn pixel(&self, x: usize, y: usize) -> Spectrum {
        self.pixels.lock()[y * self.width + x]
    }

    pub fn into_pixels(self) -> Vec<Spectrum> {
        self.pixels.into_inner()
    }

    /// Plain ASCII PPM (P3), top row first, channels truncated from
    /// value * 255.99.
    pub fn write_ppm(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("failed to create output image {:?}", path))?;
        let mut out = BufWriter::new(file);

        write!(out, "P3\n{} {}\n255\n", self.width, self.height)?;

        let pixels = self.pixels.lock();
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let color = pixels[y * self.width + x].clamp(0.0, 1.0);
                let ir = (color[0] * 255.99) as u32;
                let ig = (color[1] * 255.99) as u32;
                let ib = (color[2] * 255.99) as u32;
                write!(out, "{} {} {}\n", ir, ig, ib)?;
            }
        }
        Ok(())
    }
}

impl FilmTile {
    pub fn set(&mut self, x: i32, y: i32, value: Spectrum) {
        let idx = self.pixel_index(Point2i::new(x, y));
        self.pixels[idx] = value;
    }

    fn pixel_index(&self, p: Point2i) -> usize {
        let width = self.bounds.max.x - self.bounds.min.x;
        ((p.y - self.bounds.min.y) * width + (p.x - self.bounds.min.x)) as usize
    }
}
