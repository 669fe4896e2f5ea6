use crate::{Float, Point2f, Point3f, Vec3f};

/// Index of a material in the scene's material table.
pub type MaterialId = usize;

/// Record of a successful ray/primitive query.
///
/// Back-references are indices rather than pointers: `material` indexes the
/// scene's material table, `prim` the scene's top-level primitive array.
/// `prim` is assigned by whichever aggregate (BVH or linear set) found the
/// hit; a shape inside a compound reports the compound's index.
#[derive(Copy, Clone, Debug)]
pub struct Interaction {
    pub t: Float,
    pub p: Point3f,
    pub n: Vec3f,
    pub uv: Point2f,
    pub time: Float,
    pub material: MaterialId,
    pub prim: usize,
}

impl Interaction {
    pub fn new(
        t: Float,
        p: Point3f,
        n: Vec3f,
        uv: Point2f,
        time: Float,
        material: MaterialId,
    ) -> Self {
        Self {
            t,
            p,
            n,
            uv,
            time,
            material,
            prim: 0,
        }
    }
}
