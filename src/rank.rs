use indexmap::IndexMap;

use crate::models::ProviderMetrics;

/// The provider with the highest total token usage. Comparison is strictly
/// greater, so ties go to the first-encountered provider; the map's
/// insertion order makes that deterministic.
pub fn max_token_provider(
    metrics: &IndexMap<String, ProviderMetrics>,
) -> Option<(&str, &ProviderMetrics)> {
    let mut best: Option<(&str, &ProviderMetrics)> = None;
    for (id, m) in metrics {
        let beats = best.is_none_or(|(_, b)| m.total_tokens > b.total_tokens);
        if beats {
            best = Some((id.as_str(), m));
        }
    }
    best
}

/// Percentage savings per provider relative to the most token-intensive one.
///
/// Empty input, or a maximum of zero tokens, yields an empty map: there is
/// nothing meaningful to compare against. Providers at the maximum get 0.0,
/// everyone else `(max - tokens) / max * 100`.
pub fn savings_percentages(metrics: &IndexMap<String, ProviderMetrics>) -> IndexMap<String, f64> {
    let Some((_, max)) = max_token_provider(metrics) else {
        return IndexMap::new();
    };
    let max_tokens = max.total_tokens;
    if max_tokens == 0 {
        return IndexMap::new();
    }

    metrics
        .iter()
        .map(|(id, m)| {
            let savings = if m.total_tokens == max_tokens {
                0.0
            } else {
                (max_tokens - m.total_tokens) as f64 / max_tokens as f64 * 100.0
            };
            (id.clone(), savings)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(pairs: &[(&str, u64)]) -> IndexMap<String, ProviderMetrics> {
        pairs
            .iter()
            .map(|(id, total)| {
                (
                    id.to_string(),
                    ProviderMetrics {
                        total_tokens: *total,
                        ..Default::default()
                    },
                )
            })
            .collect()
    }

    #[test]
    fn empty_input_gives_empty_savings() {
        assert!(savings_percentages(&IndexMap::new()).is_empty());
    }

    #[test]
    fn zero_max_tokens_gives_empty_savings() {
        assert!(savings_percentages(&metrics(&[("a", 0), ("b", 0)])).is_empty());
    }

    #[test]
    fn max_provider_saves_nothing_others_in_range() {
        let savings = savings_percentages(&metrics(&[("big", 100), ("small", 50), ("tiny", 1)]));
        assert_eq!(savings["big"], 0.0);
        assert_eq!(savings["small"], 50.0);
        assert_eq!(savings["tiny"], 99.0);
        for (id, pct) in &savings {
            if id != "big" {
                assert!(*pct > 0.0 && *pct < 100.0);
            }
        }
    }

    #[test]
    fn ties_go_to_first_encountered() {
        let m = metrics(&[("first", 100), ("second", 100), ("third", 10)]);
        let (id, _) = max_token_provider(&m).unwrap();
        assert_eq!(id, "first");

        // Both tied providers sit at the maximum, so both save 0.0
        let savings = savings_percentages(&m);
        assert_eq!(savings["first"], 0.0);
        assert_eq!(savings["second"], 0.0);
        assert_eq!(savings["third"], 90.0);
    }
}
