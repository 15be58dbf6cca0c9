use super::Config;

/// Step-size scale derived from one pair of embedded estimates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Scale {
    /// Scale factor of the most restrictive component.
    Finite(f64),

    /// The estimates agree exactly in every component.
    Singular,

    /// At least one component's error is not a number.
    NotANumber,
}

/// Computes the step-size scale for an attempted step of size `h`.
///
/// For each component `j`:
///
/// ```text
/// q_j = safety · (tolerance · h / |low_j − high_j|)^(1 / order)
/// ```
///
/// and the result is the smallest `q_j`. Components whose estimates agree
/// exactly allow unbounded growth and do not constrain the result.
pub(super) fn scale(low: &[f64], high: &[f64], h: f64, config: &Config) -> Scale {
    let exponent = config.order().recip();
    let allowed = config.tolerance() * h;

    let mut q_min = f64::INFINITY;
    for (low, high) in low.iter().zip(high) {
        let error = (low - high).abs();
        if error.is_nan() {
            return Scale::NotANumber;
        }
        if error == 0.0 {
            continue;
        }
        let q = config.safety() * (allowed / error).powf(exponent);
        q_min = q_min.min(q);
    }

    if q_min.is_infinite() {
        Scale::Singular
    } else {
        Scale::Finite(q_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn config(tolerance: f64, order: f64, safety: f64) -> Config {
        Config::new(tolerance, order, safety).unwrap()
    }

    #[test]
    fn matches_hand_calculation() {
        // tolerance·h / error = 0.5 / (1/32) = 16, and 16^(1/4) = 2.
        let config = config(0.5, 4.0, 0.1);

        let Scale::Finite(q) = scale(&[0.0], &[0.031_25], 1.0, &config) else {
            panic!("expected a finite scale");
        };

        assert_relative_eq!(q, 0.2, epsilon = 1e-15);
    }

    #[test]
    fn most_restrictive_component_governs() {
        let config = config(0.5, 4.0, 1.0);

        // Errors of 1/32 (q = 2) and 0.5 (q = 1).
        let scale = scale(&[1.0, 2.0], &[1.031_25, 2.5], 1.0, &config);

        assert_eq!(scale, Scale::Finite(1.0));
    }

    #[test]
    fn larger_step_allows_more_error() {
        let config = config(1e-3, 4.0, 0.1);

        let Scale::Finite(small) = scale(&[0.0], &[1e-6], 0.01, &config) else {
            panic!("expected a finite scale");
        };
        let Scale::Finite(large) = scale(&[0.0], &[1e-6], 0.16, &config) else {
            panic!("expected a finite scale");
        };

        assert_relative_eq!(large / small, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn identical_estimates_are_singular() {
        let config = Config::default();

        assert_eq!(scale(&[1.0, -3.0], &[1.0, -3.0], 0.1, &config), Scale::Singular);
    }

    #[test]
    fn singular_components_are_skipped() {
        let config = config(0.5, 4.0, 1.0);

        let scale = scale(&[7.0, 0.0], &[7.0, 0.5], 1.0, &config);

        assert_eq!(scale, Scale::Finite(1.0));
    }

    #[test]
    fn nan_error_is_reported() {
        let config = Config::default();

        assert_eq!(
            scale(&[0.0, f64::NAN], &[1.0, 0.0], 0.1, &config),
            Scale::NotANumber
        );
        assert_eq!(
            scale(&[f64::INFINITY], &[f64::INFINITY], 0.1, &config),
            Scale::NotANumber
        );
    }
}
