//! Metric normalization.

use crate::roster::{Candidate, Metric, Metrics};

/// Rescales every metric to `[0, 1]` by dividing by its catalog maximum.
///
/// A metric whose maximum is not positive becomes `0.0` for everyone.
/// Negative or non-finite raw values count as `0.0`. Returns the raw
/// maxima that were used.
pub fn normalize_metrics(candidates: &mut [Candidate]) -> Metrics {
    let mut maxima = Metrics::default();
    for metric in Metric::ALL {
        let max = candidates
            .iter()
            .map(|c| sanitize(c.metrics.get(metric)))
            .fold(0.0, f64::max);
        maxima.set(metric, max);
    }

    for c in candidates.iter_mut() {
        for metric in Metric::ALL {
            let max = maxima.get(metric);
            let value = if max > 0.0 {
                (sanitize(c.metrics.get(metric)) / max).clamp(0.0, 1.0)
            } else {
                0.0
            };
            c.metrics.set(metric, value);
        }
    }
    maxima
}

fn sanitize(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw
    } else {
        0.0
    }
}
