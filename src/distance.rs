//! Point-to-point distance computation.
//!
//! Produces the distance scalars of a frame measurement (knee distance,
//! ankle distance) from pairs of tracked keypoints.

use nalgebra::DVector;

use crate::error::{MetricsError, Result};

/// Compute the Euclidean distance between two points of dimensionality
/// `d >= 1`.
///
/// Coincident points are a valid zero-distance case.
///
/// # Errors
///
/// - [`MetricsError::InvalidInput`] if the points are zero-dimensional.
/// - [`MetricsError::DimensionMismatch`] if the points disagree on
///   dimensionality.
///
/// # Example
///
/// ```
/// use pose_metrics::distance_between;
///
/// let d = distance_between(&[0.0, 0.0], &[3.0, 4.0])?;
/// assert!((d - 5.0).abs() < 1e-12);
/// # Ok::<(), pose_metrics::MetricsError>(())
/// ```
pub fn distance_between(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.is_empty() {
        return Err(MetricsError::invalid_input(
            "points must have at least one dimension",
        ));
    }
    if b.len() != a.len() {
        return Err(MetricsError::dimension_mismatch(a.len(), b.len()));
    }

    let diff = DVector::from_column_slice(b) - DVector::from_column_slice(a);
    Ok(diff.norm())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pythagorean() {
        let d = distance_between(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
        assert_relative_eq!(d, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_3d() {
        let d = distance_between(&[1.0, 2.0, 3.0], &[1.0, 2.0, 7.0]).unwrap();
        assert_relative_eq!(d, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_coincident_points() {
        let d = distance_between(&[1.5, -2.5], &[1.5, -2.5]).unwrap();
        assert_relative_eq!(d, 0.0);
    }

    #[test]
    fn test_symmetry() {
        let a = [0.3, -1.2, 0.7];
        let b = [1.1, 0.4, -0.2];
        assert_relative_eq!(
            distance_between(&a, &b).unwrap(),
            distance_between(&b, &a).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = distance_between(&[1.0, 0.0], &[0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            MetricsError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_empty_points() {
        let err = distance_between(&[], &[]).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidInput(_)));
    }
}
