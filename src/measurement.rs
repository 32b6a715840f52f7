//! Per-frame joint measurement container.
//!
//! A [`FrameMeasurement`] holds the four scalar measurements extracted from
//! one frame of pose-tracking data and exports them as a fixed-order
//! numeric vector for downstream model input.
//!
//! # Vector Layout
//!
//! | Index | Field |
//! |-------|-------------------|
//! | 0 | `right_knee_angle` |
//! | 1 | `left_knee_angle` |
//! | 2 | `knee_distance` |
//! | 3 | `ankle_distance` |
//!
//! The layout is the field declaration order and is part of the export
//! contract: adding, removing, or reordering fields changes the vector.
//!
//! Fields default to unset rather than 0.0. An unset field is a
//! [`MissingField`](crate::MetricsError::MissingField) error on export;
//! callers that want a sentinel instead opt in with
//! [`to_vector_filled`](FrameMeasurement::to_vector_filled).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, Result};

/// Joint measurements for a single frame of pose-tracking data.
///
/// Fields are plain optional scalars; no method mutates an instance after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameMeasurement {
    /// Angle of the right knee.
    pub right_knee_angle: Option<f64>,

    /// Angle of the left knee.
    pub left_knee_angle: Option<f64>,

    /// Distance between the knees.
    pub knee_distance: Option<f64>,

    /// Distance between the ankles.
    pub ankle_distance: Option<f64>,
}

impl FrameMeasurement {
    /// Exported vector dimension (always 4).
    pub const DIM: usize = 4;

    /// Field names in declaration (and export) order.
    pub const FIELD_NAMES: [&'static str; 4] = [
        "right_knee_angle",
        "left_knee_angle",
        "knee_distance",
        "ankle_distance",
    ];

    /// Create a fully-specified measurement.
    #[must_use]
    pub const fn new(
        right_knee_angle: f64,
        left_knee_angle: f64,
        knee_distance: f64,
        ankle_distance: f64,
    ) -> Self {
        Self {
            right_knee_angle: Some(right_knee_angle),
            left_knee_angle: Some(left_knee_angle),
            knee_distance: Some(knee_distance),
            ankle_distance: Some(ankle_distance),
        }
    }

    /// Set the right knee angle.
    #[must_use]
    pub const fn with_right_knee_angle(mut self, angle: f64) -> Self {
        self.right_knee_angle = Some(angle);
        self
    }

    /// Set the left knee angle.
    #[must_use]
    pub const fn with_left_knee_angle(mut self, angle: f64) -> Self {
        self.left_knee_angle = Some(angle);
        self
    }

    /// Set the knee distance.
    #[must_use]
    pub const fn with_knee_distance(mut self, distance: f64) -> Self {
        self.knee_distance = Some(distance);
        self
    }

    /// Set the ankle distance.
    #[must_use]
    pub const fn with_ankle_distance(mut self, distance: f64) -> Self {
        self.ankle_distance = Some(distance);
        self
    }

    /// Whether all four fields are set.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.right_knee_angle.is_some()
            && self.left_knee_angle.is_some()
            && self.knee_distance.is_some()
            && self.ankle_distance.is_some()
    }

    /// Export as a fixed-order 4D array.
    ///
    /// The element order is the field declaration order, regardless of the
    /// order fields were populated in.
    ///
    /// # Errors
    ///
    /// [`MetricsError::MissingField`] naming the first unset field in
    /// declaration order.
    ///
    /// # Example
    ///
    /// ```
    /// use pose_metrics::FrameMeasurement;
    ///
    /// let frame = FrameMeasurement::new(30.0, 25.0, 10.0, 5.0);
    /// assert_eq!(frame.to_vector()?, [30.0, 25.0, 10.0, 5.0]);
    /// # Ok::<(), pose_metrics::MetricsError>(())
    /// ```
    pub fn to_vector(&self) -> Result<[f64; 4]> {
        let fields = [
            self.right_knee_angle,
            self.left_knee_angle,
            self.knee_distance,
            self.ankle_distance,
        ];

        let mut arr = [0.0; 4];
        for (i, field) in fields.into_iter().enumerate() {
            arr[i] = field.ok_or(MetricsError::missing_field(Self::FIELD_NAMES[i]))?;
        }

        Ok(arr)
    }

    /// Export as a fixed-order `Vec`.
    ///
    /// # Errors
    ///
    /// Same as [`to_vector`](Self::to_vector).
    pub fn to_vec(&self) -> Result<Vec<f64>> {
        Ok(self.to_vector()?.to_vec())
    }

    /// Export as a fixed-order 4D array, substituting `fill` for any unset
    /// field.
    #[must_use]
    pub fn to_vector_filled(&self, fill: f64) -> [f64; 4] {
        [
            self.right_knee_angle.unwrap_or(fill),
            self.left_knee_angle.unwrap_or(fill),
            self.knee_distance.unwrap_or(fill),
            self.ankle_distance.unwrap_or(fill),
        ]
    }

    /// Reconstruct a complete measurement from an exported vector.
    #[must_use]
    pub const fn from_vector(vector: [f64; 4]) -> Self {
        Self::new(vector[0], vector[1], vector[2], vector[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_order() {
        let frame = FrameMeasurement::new(30.0, 25.0, 10.0, 5.0);
        assert_eq!(frame.to_vector().unwrap(), [30.0, 25.0, 10.0, 5.0]);
        assert_eq!(frame.to_vec().unwrap(), vec![30.0, 25.0, 10.0, 5.0]);
    }

    #[test]
    fn test_builder_order_does_not_change_export_order() {
        let frame = FrameMeasurement::default()
            .with_ankle_distance(5.0)
            .with_knee_distance(10.0)
            .with_left_knee_angle(25.0)
            .with_right_knee_angle(30.0);

        assert_eq!(frame.to_vector().unwrap(), [30.0, 25.0, 10.0, 5.0]);
    }

    #[test]
    fn test_default_is_unset() {
        let frame = FrameMeasurement::default();
        assert!(!frame.is_complete());

        let err = frame.to_vector().unwrap_err();
        assert!(matches!(
            err,
            MetricsError::MissingField {
                field: "right_knee_angle"
            }
        ));
    }

    #[test]
    fn test_missing_field_names_first_unset() {
        let frame = FrameMeasurement::default()
            .with_right_knee_angle(30.0)
            .with_left_knee_angle(25.0)
            .with_ankle_distance(5.0);

        let err = frame.to_vector().unwrap_err();
        assert!(matches!(
            err,
            MetricsError::MissingField {
                field: "knee_distance"
            }
        ));
    }

    #[test]
    fn test_filled_export() {
        let frame = FrameMeasurement::default().with_knee_distance(10.0);
        assert_eq!(frame.to_vector_filled(0.0), [0.0, 0.0, 10.0, 0.0]);
        assert_eq!(
            frame.to_vector_filled(f64::NAN).map(f64::is_nan),
            [true, true, false, true]
        );
    }

    #[test]
    fn test_is_complete() {
        let frame = FrameMeasurement::new(1.0, 2.0, 3.0, 4.0);
        assert!(frame.is_complete());

        let frame = FrameMeasurement::default().with_right_knee_angle(1.0);
        assert!(!frame.is_complete());
    }

    #[test]
    fn test_from_vector() {
        let frame = FrameMeasurement::from_vector([30.0, 25.0, 10.0, 5.0]);
        assert!(frame.is_complete());
        assert_eq!(frame.right_knee_angle, Some(30.0));
        assert_eq!(frame.to_vector().unwrap(), [30.0, 25.0, 10.0, 5.0]);
    }

    #[test]
    fn test_field_names_match_dim() {
        assert_eq!(FrameMeasurement::FIELD_NAMES.len(), FrameMeasurement::DIM);
    }

    #[test]
    fn test_direct_field_mutation() {
        let mut frame = FrameMeasurement::new(1.0, 2.0, 3.0, 4.0);
        frame.knee_distance = Some(9.0);
        assert_eq!(frame.to_vector().unwrap(), [1.0, 2.0, 9.0, 4.0]);
    }
}
