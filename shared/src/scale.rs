//! Continuous and quantized scales used to turn a metric value into a fill.

use crate::colors::Rgb;
use crate::palette::Palette;

/// Upper end of the intermediate range every metric is normalized into.
pub const NORMALIZED_MAX: f64 = 1000.0;

/// Observed maxima above this are ignored when fitting the normalization
/// domain, so a single outlier saturates instead of flattening every other
/// region into the lowest bucket.
pub const OUTLIER_CEILING: f64 = 10_000_000.0;

/// Linear map from `domain` onto `range`. Not clamped: inputs outside the
/// domain extrapolate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Normalization scale for a set of observed values.
    /// An empty set collapses to the domain `[0, 0]`.
    pub fn normalizing(values: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .filter(|v| !v.is_nan())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 0.0));
        Self::new((min, max.min(OUTLIER_CEILING)), (0.0, NORMALIZED_MAX))
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        // Degenerate domains land in the middle of the range.
        let t = if span == 0.0 || span.is_nan() {
            0.5
        } else {
            (value - d0) / span
        };
        r0 + (r1 - r0) * t
    }
}

/// Splits `[domain.0, domain.1]` into equal-width buckets, one per color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantizeScale {
    pub domain: (f64, f64),
    pub palette: Palette,
}

impl QuantizeScale {
    /// Color scale over the normalized range.
    pub const fn normalized(palette: Palette) -> Self {
        Self {
            domain: (0.0, NORMALIZED_MAX),
            palette,
        }
    }

    /// Same domain, different colors.
    pub const fn with_palette(self, palette: Palette) -> Self {
        Self {
            domain: self.domain,
            palette,
        }
    }

    /// Bucket index for `value`. Out-of-domain values clamp to the first or
    /// last bucket; NaN falls into the first.
    pub fn bucket(&self, value: f64) -> usize {
        let stops = self.palette.stops().len();
        let (d0, d1) = self.domain;
        if value.is_nan() || d1 <= d0 {
            return 0;
        }
        // Interpolated thresholds, bit-for-bit with d3's scaleQuantize; a
        // value equal to a threshold belongs to the bucket above it.
        let n = stops as f64;
        let threshold = |i: usize| (d0 * (n - 1.0 - i as f64) + d1 * (i as f64 + 1.0)) / n;
        let mut bucket = 0;
        while bucket < stops - 1 && value >= threshold(bucket) {
            bucket += 1;
        }
        bucket
    }

    pub fn apply(&self, value: f64) -> Rgb {
        self.palette.stops()[self.bucket(value)]
    }
}

#[cfg(test)]
mod tests {
    use super::{LinearScale, NORMALIZED_MAX, QuantizeScale};
    use crate::palette::Palette;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual} (diff: {diff})"
        );
    }

    #[test]
    fn linear_maps_endpoints_and_midpoint() {
        let scale = LinearScale::new((10.0, 1000.0), (0.0, 1000.0));
        assert_close(scale.apply(10.0), 0.0);
        assert_close(scale.apply(1000.0), 1000.0);
        assert_close(scale.apply(505.0), 500.0);
    }

    #[test]
    fn linear_extrapolates_outside_domain() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1000.0));
        assert_close(scale.apply(200.0), 2000.0);
        assert_close(scale.apply(-10.0), -100.0);
    }

    #[test]
    fn linear_degenerate_domain_maps_to_middle() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 1000.0));
        assert_close(scale.apply(5.0), 500.0);
        assert_close(scale.apply(1e9), 500.0);
    }

    #[test]
    fn normalizing_caps_domain_at_outlier_ceiling() {
        let scale = LinearScale::normalizing([3.0, 50_000_000.0, 7.0]);
        assert_eq!(scale.domain, (3.0, 10_000_000.0));
        assert_eq!(scale.range, (0.0, NORMALIZED_MAX));
        assert_close(scale.apply(10_000_000.0), NORMALIZED_MAX);
    }

    #[test]
    fn normalizing_ignores_nan_and_handles_empty() {
        let scale = LinearScale::normalizing([f64::NAN, 4.0, 2.0]);
        assert_eq!(scale.domain, (2.0, 4.0));
        let empty = LinearScale::normalizing(std::iter::empty());
        assert_eq!(empty.domain, (0.0, 0.0));
    }

    #[test]
    fn quantize_bucket_boundaries() {
        let scale = QuantizeScale::normalized(Palette::Blues);
        assert_eq!(scale.bucket(0.0), 0);
        assert_eq!(scale.bucket(111.0), 0);
        assert_eq!(scale.bucket(1000.0 / 9.0), 1);
        assert_eq!(scale.bucket(500.0), 4);
        assert_eq!(scale.bucket(999.9), 8);
        assert_eq!(scale.bucket(1000.0), 8);
    }

    #[test]
    fn values_on_a_threshold_move_up_a_bucket() {
        let scale = QuantizeScale::normalized(Palette::Blues);
        assert_eq!(scale.bucket(3000.0 / 9.0), 3);
        assert_eq!(scale.bucket(6000.0 / 9.0), 6);
        for i in 1..9 {
            let threshold = (i as f64 * NORMALIZED_MAX) / 9.0;
            assert_eq!(scale.bucket(threshold), i, "threshold {threshold}");
        }
    }

    #[test]
    fn quantize_clamps_out_of_domain() {
        let scale = QuantizeScale::normalized(Palette::Greens);
        assert_eq!(scale.bucket(-50.0), 0);
        assert_eq!(scale.bucket(5000.0), 8);
        assert_eq!(scale.bucket(f64::NAN), 0);
    }

    #[test]
    fn quantize_colors_follow_palette() {
        let blues = QuantizeScale::normalized(Palette::Blues);
        let reds = blues.with_palette(Palette::Reds);
        assert_eq!(blues.domain, reds.domain);
        assert_eq!(blues.apply(0.0), Palette::Blues.stops()[0]);
        assert_eq!(reds.apply(1000.0), Palette::Reds.stops()[8]);
    }
}
