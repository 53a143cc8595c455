use crate::core::error::{AngleLeg, GeometryError};
use nalgebra::{Point3, Vector3};

/// Unit in which an angle is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    /// Radians, in the range `[0, π]`.
    #[default]
    Radians,
    /// Degrees, in the range `[0, 180]`.
    Degrees,
}

impl AngleUnit {
    /// Maps a `degrees` flag onto the matching unit.
    pub fn from_degrees_flag(degrees: bool) -> Self {
        if degrees { Self::Degrees } else { Self::Radians }
    }

    fn convert(self, radians: f64) -> f64 {
        match self {
            Self::Radians => radians,
            Self::Degrees => radians.to_degrees(),
        }
    }
}

/// Calculates the Euclidean distance between two points.
pub fn calculate_distance(p1: &Point3<f64>, p2: &Point3<f64>) -> f64 {
    (p1 - p2).norm()
}

/// Calculates the angle formed at `p2` by the legs `p2 -> p1` and `p2 -> p3`.
///
/// Each leg is rescaled by its largest absolute component before the cosine
/// is taken, so very short or very long legs neither underflow nor overflow.
/// The cosine is clamped to `[-1, 1]` before `acos`, so collinear legs report
/// exactly `0` or `π` instead of NaN from rounding.
///
/// # Arguments
///
/// * `p1` - End point of the first leg.
/// * `p2` - The vertex.
/// * `p3` - End point of the second leg.
/// * `unit` - Unit of the returned angle.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateVector`] if either leg is exactly zero
/// or contains non-finite components, since the angle is undefined there.
pub fn calculate_angle(
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
    unit: AngleUnit,
) -> Result<f64, GeometryError> {
    let v1 = checked_leg(p1 - p2, AngleLeg::First)?;
    let v3 = checked_leg(p3 - p2, AngleLeg::Second)?;

    let cos_theta = (v1.dot(&v3) / (v1.norm() * v3.norm())).clamp(-1.0, 1.0);
    Ok(unit.convert(cos_theta.acos()))
}

// Returns the leg scaled so its largest absolute component is 1.
fn checked_leg(v: Vector3<f64>, leg: AngleLeg) -> Result<Vector3<f64>, GeometryError> {
    if v.iter().any(|c| !c.is_finite()) {
        return Err(GeometryError::DegenerateVector { leg });
    }
    let scale = v.amax();
    if scale == 0.0 {
        return Err(GeometryError::DegenerateVector { leg });
    }
    Ok(v / scale)
}

/// Weighted center of a set of points.
///
/// Returns `None` when the inputs are empty, differ in length, or the weights
/// sum to zero.
pub fn calculate_weighted_center(points: &[Point3<f64>], weights: &[f64]) -> Option<Point3<f64>> {
    if points.is_empty() || points.len() != weights.len() {
        return None;
    }
    let total: f64 = weights.iter().sum();
    if total.abs() < f64::EPSILON {
        return None;
    }
    let weighted = points
        .iter()
        .zip(weights)
        .fold(Vector3::zeros(), |acc, (p, w)| acc + p.coords * *w);
    Some(Point3::from(weighted / total))
}
