use std::f64::consts::PI;

/// Converts degrees to radians.
pub fn rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Converts radians to degrees.
pub fn deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Logarithm of `x` in an arbitrary `base`.
pub fn log_base(base: f64, x: f64) -> f64 {
    x.ln() / base.ln()
}
