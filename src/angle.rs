//! Joint angle computation.
//!
//! The angle at a joint is measured at the middle point of a three-point
//! chain (e.g. hip, knee, ankle): the angle between the leg vector `b - a`
//! and the leg vector `c - b`. A straight chain measures 0, a fully folded
//! one measures pi.

use nalgebra::DVector;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, Result};

/// Zero-norm threshold below which a leg vector is considered degenerate.
const DEGENERATE_EPS: f64 = 1e-10;

/// Unit of a returned angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleUnit {
    /// Radians, in `[0, pi]`.
    #[default]
    Radians,
    /// Degrees, in `[0, 180]`.
    Degrees,
}

/// Compute the angle formed at point `b` by the chain `a -> b -> c`.
///
/// Points may have any dimensionality `d >= 1` as long as all three agree.
/// The result is the angle between the leg vectors `b - a` and `c - b`,
/// always non-negative.
///
/// # Errors
///
/// - [`MetricsError::InvalidInput`] if the points are zero-dimensional.
/// - [`MetricsError::DimensionMismatch`] if the points disagree on
///   dimensionality.
/// - [`MetricsError::DegenerateInput`] if `a` and `b` (or `b` and `c`)
///   coincide, leaving a zero-length leg with no defined angle.
///
/// # Example
///
/// ```
/// use pose_metrics::{calculate_angle, AngleUnit};
///
/// let a = [1.0, 0.0];
/// let b = [0.0, 0.0];
/// let c = [0.0, 1.0];
///
/// let rad = calculate_angle(&a, &b, &c, AngleUnit::Radians)?;
/// let deg = calculate_angle(&a, &b, &c, AngleUnit::Degrees)?;
///
/// assert!((rad - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert!((deg - 90.0).abs() < 1e-12);
/// # Ok::<(), pose_metrics::MetricsError>(())
/// ```
pub fn calculate_angle(a: &[f64], b: &[f64], c: &[f64], unit: AngleUnit) -> Result<f64> {
    if a.is_empty() {
        return Err(MetricsError::invalid_input(
            "points must have at least one dimension",
        ));
    }
    if b.len() != a.len() {
        return Err(MetricsError::dimension_mismatch(a.len(), b.len()));
    }
    if c.len() != a.len() {
        return Err(MetricsError::dimension_mismatch(a.len(), c.len()));
    }

    let a = DVector::from_column_slice(a);
    let b = DVector::from_column_slice(b);
    let c = DVector::from_column_slice(c);

    let ab = &b - &a;
    let bc = &c - &b;

    let norm_ab = ab.norm();
    let norm_bc = bc.norm();

    if norm_ab < DEGENERATE_EPS {
        return Err(MetricsError::degenerate("ab"));
    }
    if norm_bc < DEGENERATE_EPS {
        return Err(MetricsError::degenerate("bc"));
    }

    // Clamp against floating-point drift pushing the cosine outside [-1, 1].
    let cos_angle = (ab.dot(&bc) / (norm_ab * norm_bc)).clamp(-1.0, 1.0);
    let radians = cos_angle.acos();

    Ok(match unit {
        AngleUnit::Radians => radians,
        AngleUnit::Degrees => radians.to_degrees(),
    })
}
