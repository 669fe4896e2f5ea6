use crate::Float;

pub const INFINITY: Float = std::f32::INFINITY;

pub fn lerp(t: Float, v1: Float, v2: Float) -> Float {
    (1.0 - t) * v1 + t * v2
}

/// Solves `a*t^2 + b*t + c = 0`, returning the roots in ascending order.
/// The discriminant is widened to f64 to keep nearly-tangent hits stable.
/// A zero discriminant is treated as a miss, matching the strict-positive
/// test the intersection routines rely on.
pub fn quadratic(a: Float, b: Float, c: Float) -> Option<(Float, Float)> {
    let discrim = b as f64 * b as f64 - 4.0 * a as f64 * c as f64;
    if discrim <= 0.0 {
        return None;
    }
    let root_discrim = discrim.sqrt() as Float;

    let t0 = (-b - root_discrim) / (2.0 * a);
    let t1 = (-b + root_discrim) / (2.0 * a);
    if t0 > t1 {
        Some((t1, t0))
    } else {
        Some((t0, t1))
    }
}
