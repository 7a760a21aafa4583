//! Validated parameters for the stretch-and-slice transform.

use std::ops::RangeInclusive;

use crate::error::ValidationError;

/// Horizontal stretch applied when the caller does not pick one.
pub const DEFAULT_STRETCH_FACTOR: f64 = 1.5;

/// Per-strip preview enlargement applied when the caller does not pick one.
pub const DEFAULT_OUTPUT_SCALE_FACTOR: f64 = 2.0;

/// Accepted stretch factors. Larger values distort beyond recognition.
pub const STRETCH_FACTOR_RANGE: RangeInclusive<f64> = 1.0..=3.0;

/// Accepted output scale factors. Keeps strip files within upload limits.
pub const OUTPUT_SCALE_RANGE: RangeInclusive<f64> = 0.5..=4.0;

/// Parameters of one `biggify` call.
///
/// Only constructible through [`StretchParameters::new`], so a value of this
/// type always satisfies the range checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StretchParameters {
    rows: u32,
    stretch_factor: f64,
    output_scale_factor: f64,
}

impl StretchParameters {
    /// Validate and build parameters.
    ///
    /// Checks run in order (rows, stretch factor, output scale) and the first
    /// failure is returned. NaN factors are rejected.
    pub fn new(
        rows: i64,
        stretch_factor: f64,
        output_scale_factor: f64,
    ) -> Result<Self, ValidationError> {
        let rows = u32::try_from(rows)
            .ok()
            .filter(|&r| r > 0)
            .ok_or(ValidationError::InvalidRows(rows))?;
        if !STRETCH_FACTOR_RANGE.contains(&stretch_factor) {
            return Err(ValidationError::StretchFactorOutOfRange(stretch_factor));
        }
        if !OUTPUT_SCALE_RANGE.contains(&output_scale_factor) {
            return Err(ValidationError::OutputScaleOutOfRange(output_scale_factor));
        }
        Ok(Self {
            rows,
            stretch_factor,
            output_scale_factor,
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn stretch_factor(&self) -> f64 {
        self.stretch_factor
    }

    pub fn output_scale_factor(&self) -> f64 {
        self.output_scale_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_boundaries() {
        assert!(StretchParameters::new(1, 1.0, 0.5).is_ok());
        assert!(StretchParameters::new(10, 3.0, 4.0).is_ok());
    }

    #[test]
    fn default_factors_are_valid() {
        let params =
            StretchParameters::new(4, DEFAULT_STRETCH_FACTOR, DEFAULT_OUTPUT_SCALE_FACTOR).unwrap();
        assert_eq!(params.rows(), 4);
        assert_eq!(params.stretch_factor(), 1.5);
        assert_eq!(params.output_scale_factor(), 2.0);
    }

    #[test]
    fn rejects_non_positive_rows() {
        assert_eq!(
            StretchParameters::new(0, 1.5, 2.0),
            Err(ValidationError::InvalidRows(0))
        );
        assert_eq!(
            StretchParameters::new(-1, 1.5, 2.0),
            Err(ValidationError::InvalidRows(-1))
        );
    }

    #[test]
    fn rejects_rows_beyond_u32() {
        let huge = i64::from(u32::MAX) + 1;
        assert_eq!(
            StretchParameters::new(huge, 1.5, 2.0),
            Err(ValidationError::InvalidRows(huge))
        );
    }

    #[test]
    fn rejects_stretch_outside_range() {
        assert_eq!(
            StretchParameters::new(4, 0.5, 2.0),
            Err(ValidationError::StretchFactorOutOfRange(0.5))
        );
        assert_eq!(
            StretchParameters::new(4, 5.0, 2.0),
            Err(ValidationError::StretchFactorOutOfRange(5.0))
        );
        assert!(StretchParameters::new(4, f64::NAN, 2.0).is_err());
    }

    #[test]
    fn rejects_output_scale_outside_range() {
        assert_eq!(
            StretchParameters::new(4, 1.5, 0.1),
            Err(ValidationError::OutputScaleOutOfRange(0.1))
        );
        assert!(StretchParameters::new(4, 1.5, 4.5).is_err());
    }

    #[test]
    fn rows_are_checked_first() {
        // Both rows and stretch are invalid; rows wins.
        assert_eq!(
            StretchParameters::new(0, 9.0, 0.0),
            Err(ValidationError::InvalidRows(0))
        );
    }
}
