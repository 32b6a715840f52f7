//! Pose Metrics Library
//!
//! Joint-angle and frame-measurement utilities for pose-analysis pipelines.
//!
//! This library provides the leaf-level computations of a pose pipeline:
//! the angle formed at a joint by three tracked keypoints, the distance
//! between two keypoints, and a per-frame measurement container with a
//! fixed-order numeric vector export for ML consumption.
//!
//! # Features
//!
//! - **Dimension-agnostic**: points may be 2D, 3D, or any `d >= 1`
//! - **Typed units**: radians/degrees selected by enum, not by string
//! - **Strict exports**: unset measurements are errors, never silent zeros
//! - **Stable layout**: the exported vector order is a declared contract
//!
//! # Quick Start
//!
//! ```
//! use pose_metrics::{calculate_angle, distance_between, AngleUnit, FrameMeasurement};
//!
//! // Keypoints from one frame of tracking data (x, y).
//! let right_hip = [0.35, 0.50];
//! let right_knee = [0.36, 0.72];
//! let right_ankle = [0.34, 0.94];
//!
//! let right_knee_angle = calculate_angle(&right_hip, &right_knee, &right_ankle, AngleUnit::Degrees)?;
//!
//! let frame = FrameMeasurement::default()
//!     .with_right_knee_angle(right_knee_angle)
//!     .with_left_knee_angle(4.2)
//!     .with_knee_distance(distance_between(&[0.36, 0.72], &[0.64, 0.71])?)
//!     .with_ankle_distance(distance_between(&[0.34, 0.94], &[0.66, 0.93])?);
//!
//! // 4D fixed-order vector for downstream model input.
//! let vector = frame.to_vector()?;
//! assert_eq!(vector.len(), 4);
//! # Ok::<(), pose_metrics::MetricsError>(())
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

pub mod angle;
pub mod distance;
pub mod error;
pub mod measurement;

// Re-exports for convenient access
pub use angle::{calculate_angle, AngleUnit};
pub use distance::distance_between;
pub use error::{MetricsError, Result};
pub use measurement::FrameMeasurement;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exported frame vector dimension.
pub const FRAME_DIM: usize = 4;
