use crate::fast_rand::with_rng;
use crate::{Float, Point3f, Vec3f};
use cgmath::InnerSpace;
use rand::Rng;

const POINT_COUNT: usize = 256;

/// Gradient noise over lattice points with shuffled permutation tables.
pub struct Perlin {
    ranvec: Vec<Vec3f>,
    perm_x: Vec<usize>,
    perm_y: Vec<usize>,
    perm_z: Vec<usize>,
}

impl Perlin {
    pub fn new() -> Self {
        let ranvec = with_rng(|rng| {
            (0..POINT_COUNT)
                .map(|_| {
                    Vec3f::new(
                        rng.gen_range(-1.0, 1.0),
                        rng.gen_range(-1.0, 1.0),
                        rng.gen_range(-1.0, 1.0),
                    )
                    .normalize()
                })
                .collect()
        });

        Self {
            ranvec,
            perm_x: Self::generate_perm(),
            perm_y: Self::generate_perm(),
            perm_z: Self::generate_perm(),
        }
    }

    fn generate_perm() -> Vec<usize> {
        let mut perm: Vec<usize> = (0..POINT_COUNT).collect();
        with_rng(|rng| {
            for i in (1..POINT_COUNT).rev() {
                perm.swap(i, rng.gen_range(0, i + 1));
            }
        });
        perm
    }

    /// Smoothed gradient noise in roughly [-1, 1].
    pub fn noise(&self, p: Point3f) -> Float {
        let u = p.x - p.x.floor();
        let v = p.y - p.y.floor();
        let w = p.z - p.z.floor();

        let i = p.x.floor() as i64;
        let j = p.y.floor() as i64;
        let k = p.z.floor() as i64;

        let mut c = [[[Vec3f::new(0.0, 0.0, 0.0); 2]; 2]; 2];
        for (di, plane) in c.iter_mut().enumerate() {
            for (dj, row) in plane.iter_mut().enumerate() {
                for (dk, cell) in row.iter_mut().enumerate() {
                    let idx = self.perm_x[((i + di as i64) & 255) as usize]
                        ^ self.perm_y[((j + dj as i64) & 255) as usize]
                        ^ self.perm_z[((k + dk as i64) & 255) as usize];
                    *cell = self.ranvec[idx];
                }
            }
        }

        Self::trilinear_interp(&c, u, v, w)
    }

    /// Sum of octaves of |noise| at doubling frequencies.
    pub fn turbulence(&self, p: Point3f, octaves: u32) -> Float {
        let mut accum = 0.0;
        let mut temp = p;
        let mut weight = 1.0;
        for _ in 0..octaves {
            accum += weight * self.noise(temp);
            weight *= 0.5;
            temp = temp * 2.0;
        }
        accum.abs()
    }

    fn trilinear_interp(c: &[[[Vec3f; 2]; 2]; 2], u: Float, v: Float, w: Float) -> Float {
        // hermite smoothing avoids the grid artifacts of raw weights
        let uu = u * u * (3.0 - 2.0 * u);
        let vv = v * v * (3.0 - 2.0 * v);
        let ww = w * w * (3.0 - 2.0 * w);

        let mut accum = 0.0;
        for (i, plane) in c.iter().enumerate() {
            for (j, row) in plane.iter().enumerate() {
                for (k, cell) in row.iter().enumerate() {
                    let (fi, fj, fk) = (i as Float, j as Float, k as Float);
                    let weight = Vec3f::new(u - fi, v - fj, w - fk);
                    accum += (fi * uu + (1.0 - fi) * (1.0 - uu))
                        * (fj * vv + (1.0 - fj) * (1.0 - vv))
                        * (fk * ww + (1.0 - fk) * (1.0 - ww))
                        * cell.dot(weight);
                }
            }
        }
        accum
    }
}

impl Default for Perlin {
    fn default() -> Self {
        Self::new()
    }
}
