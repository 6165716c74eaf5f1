use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Inclusive bounds of one numeric control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlBounds {
    pub min: f64,
    pub max: f64,
}

impl ControlBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

pub const PE_BOUNDS: ControlBounds = ControlBounds::new(0.0, 100.0);
pub const PB_BOUNDS: ControlBounds = ControlBounds::new(0.0, 20.0);
pub const DIVIDEND_YIELD_BOUNDS: ControlBounds = ControlBounds::new(0.0, 10.0);
pub const ROE_BOUNDS: ControlBounds = ControlBounds::new(0.0, 50.0);

/// User-chosen ratio thresholds.
///
/// P/E and P/B are closed ranges. Dividend yield and ROE are minimums, in
/// percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSelection {
    pub pe_min: f64,
    pub pe_max: f64,
    pub pb_min: f64,
    pub pb_max: f64,
    pub dividend_yield_min: f64,
    pub roe_min: f64,
}

impl Default for ThresholdSelection {
    fn default() -> Self {
        Self {
            pe_min: 0.0,
            pe_max: 50.0,
            pb_min: 0.0,
            pb_max: 10.0,
            dividend_yield_min: 0.0,
            roe_min: 0.0,
        }
    }
}

impl ThresholdSelection {
    pub fn new(
        pe_min: f64,
        pe_max: f64,
        pb_min: f64,
        pb_max: f64,
        dividend_yield_min: f64,
        roe_min: f64,
    ) -> Result<Self, ValidationError> {
        check_bounds("pe_min", pe_min, PE_BOUNDS)?;
        check_bounds("pe_max", pe_max, PE_BOUNDS)?;
        check_bounds("pb_min", pb_min, PB_BOUNDS)?;
        check_bounds("pb_max", pb_max, PB_BOUNDS)?;
        check_bounds("dividend_yield_min", dividend_yield_min, DIVIDEND_YIELD_BOUNDS)?;
        check_bounds("roe_min", roe_min, ROE_BOUNDS)?;
        check_order("P/E", pe_min, pe_max)?;
        check_order("P/B", pb_min, pb_max)?;

        Ok(Self {
            pe_min,
            pe_max,
            pb_min,
            pb_max,
            dividend_yield_min,
            roe_min,
        })
    }
}

fn check_bounds(
    field: &'static str,
    value: f64,
    bounds: ControlBounds,
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteThreshold { field });
    }
    if !bounds.contains(value) {
        return Err(ValidationError::ThresholdOutOfBounds {
            field,
            value,
            min: bounds.min,
            max: bounds.max,
        });
    }
    Ok(())
}

fn check_order(range: &'static str, min: f64, max: f64) -> Result<(), ValidationError> {
    if min > max {
        return Err(ValidationError::InvertedRange { range, min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_initial_slider_positions() {
        let defaults = ThresholdSelection::default();
        assert_eq!((defaults.pe_min, defaults.pe_max), (0.0, 50.0));
        assert_eq!((defaults.pb_min, defaults.pb_max), (0.0, 10.0));
        assert_eq!(defaults.dividend_yield_min, 0.0);
        assert_eq!(defaults.roe_min, 0.0);
    }

    #[test]
    fn accepts_extreme_bounds() {
        let thresholds =
            ThresholdSelection::new(0.0, 100.0, 0.0, 20.0, 10.0, 50.0).expect("bounds are inclusive");
        assert_eq!(thresholds.pe_max, 100.0);
    }

    #[test]
    fn rejects_value_outside_control_range() {
        let err = ThresholdSelection::new(0.0, 120.0, 0.0, 10.0, 0.0, 0.0).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::ThresholdOutOfBounds { field: "pe_max", .. }
        ));
    }

    #[test]
    fn rejects_negative_minimum() {
        let err = ThresholdSelection::new(0.0, 50.0, 0.0, 10.0, -1.0, 0.0).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::ThresholdOutOfBounds { field: "dividend_yield_min", .. }
        ));
    }

    #[test]
    fn rejects_inverted_range() {
        let err = ThresholdSelection::new(0.0, 50.0, 8.0, 2.0, 0.0, 0.0).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvertedRange { range: "P/B", .. }));
    }

    #[test]
    fn rejects_nan() {
        let err =
            ThresholdSelection::new(f64::NAN, 50.0, 0.0, 10.0, 0.0, 0.0).expect_err("must fail");
        assert!(matches!(err, ValidationError::NonFiniteThreshold { field: "pe_min" }));
    }
}
