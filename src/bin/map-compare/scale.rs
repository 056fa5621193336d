//! Derives the "current scale" label from the shared zoom level.
//!
//! The label is recomputed from the store every frame and never cached, so
//! it cannot drift from the zoom it describes.

/// How the scale label is computed from the zoom level. Both historical
/// formulas are kept; each is a pure, monotonic non-decreasing function of
/// zoom over `[ZOOM_MIN, ZOOM_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleFormula {
    /// The zoom level itself, one decimal.
    #[default]
    ZoomValue,
    /// `10^(zoom / 10) / 10000`, no decimals; a rough scale-denominator
    /// reading of the slider position.
    Denominator,
}

impl ScaleFormula {
    pub fn label(self, zoom: f64) -> String {
        match self {
            Self::ZoomValue => format!("{zoom:.1}"),
            Self::Denominator => format!("{:.0}", 10f64.powf(zoom / 10.0) / 10_000.0),
        }
    }

    /// Short name for the formula toggle in the top bar.
    pub fn name(self) -> &'static str {
        match self {
            Self::ZoomValue => "zoom",
            Self::Denominator => "1:n",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ZOOM_MAX, ZOOM_MIN};

    fn numeric(formula: ScaleFormula, zoom: f64) -> f64 {
        formula.label(zoom).parse().expect("numeric label")
    }

    #[test]
    fn zoom_value_label_is_the_zoom_to_one_decimal() {
        assert_eq!(ScaleFormula::ZoomValue.label(15.0), "15.0");
        assert_eq!(ScaleFormula::ZoomValue.label(7.25), "7.2");
    }

    #[test]
    fn denominator_label_matches_the_log_formula() {
        // 10^(15/10) / 10000, rounded to zero decimals
        let expected = format!("{:.0}", 10f64.powf(1.5) / 10_000.0);
        assert_eq!(ScaleFormula::Denominator.label(15.0), expected);
        // At full zoom the exponent is 2: 10^2 / 10000 = 0.01 -> "0"
        assert_eq!(ScaleFormula::Denominator.label(20.0), "0");
    }

    #[test]
    fn both_formulas_are_monotonic_non_decreasing() {
        for formula in [ScaleFormula::ZoomValue, ScaleFormula::Denominator] {
            let mut prev = numeric(formula, ZOOM_MIN);
            let mut zoom = ZOOM_MIN;
            while zoom <= ZOOM_MAX {
                let current = numeric(formula, zoom);
                assert!(
                    current >= prev,
                    "{formula:?} decreased at zoom {zoom}: {current} < {prev}"
                );
                prev = current;
                zoom += 0.1;
            }
        }
    }

    #[test]
    fn labels_are_total_over_the_valid_range() {
        for formula in [ScaleFormula::ZoomValue, ScaleFormula::Denominator] {
            for zoom in [ZOOM_MIN, 0.05, 10.0, 19.95, ZOOM_MAX] {
                assert!(!formula.label(zoom).is_empty());
            }
        }
    }
}
