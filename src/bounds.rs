use crate::Point2i;

/// Half-open 2D integer bounds over film pixels.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bounds2i {
    pub min: Point2i,
    pub max: Point2i,
}

impl Bounds2i {
    pub fn with_bounds(min: Point2i, max: Point2i) -> Self {
        Self { min, max }
    }

    pub fn area(&self) -> i32 {
        let d = self.max - self.min;
        d.x * d.y
    }

    pub fn dimensions(&self) -> (i32, i32) {
        (self.max.x - self.min.x, self.max.y - self.min.y)
    }

    pub fn iter_points(self) -> impl Iterator<Item = (i32, i32)> {
        let x1 = self.min.x;
        let x2 = self.max.x;
        let y1 = self.min.y;
        let y2 = self.max.y;

        (x1..x2).flat_map(move |x| (y1..y2).map(move |y| (x, y)))
    }

    pub fn iter_tiles(self, tile_size: usize) -> impl Iterator<Item = Bounds2i> {
        let xmin = self.min.x;
        let xmax = self.max.x;
        let ymin = self.min.y;
        let ymax = self.max.y;

        (xmin..xmax).step_by(tile_size)
            .flat_map(move |x| (ymin..ymax).step_by(tile_size).map(move |y| {
                let min = Point2i::new(x, y);
                let max = Point2i::new(
                    (x + tile_size as i32).min(xmax),
                    (y + tile_size as i32).min(ymax),
                );
                Bounds2i::with_bounds(min, max)
            }))
    }
}

impl<T> From<(T, T)> for Bounds2i
where
    Point2i: From<T>,
{
    fn from(t: (T, T)) -> Self {
        Self::with_bounds(t.0.into(), t.1.into())
    }
}
