use indexmap::IndexMap;

use crate::models::{EvalResults, ProviderMetrics};

/// Walk every result record once and accumulate per-provider metrics.
///
/// Records are attributed to their provider id, or `"unknown"` when the
/// provider block carries no id. Missing numeric fields count as zero, but
/// `test_count` still increments for every record so empty responses remain
/// visible in the report. Insertion order of the returned map is
/// first-encounter order, which downstream tie-breaking relies on.
pub fn aggregate(doc: &EvalResults) -> IndexMap<String, ProviderMetrics> {
    let mut by_provider: IndexMap<String, ProviderMetrics> = IndexMap::new();

    for record in doc.records() {
        let provider_id = record
            .provider
            .as_ref()
            .and_then(|p| p.id.as_deref())
            .unwrap_or("unknown");

        let metrics = by_provider.entry(provider_id.to_string()).or_default();

        if let Some(response) = &record.response {
            if let Some(usage) = &response.token_usage {
                metrics.total_tokens += usage.total.unwrap_or(0);
                metrics.prompt_tokens += usage.prompt.unwrap_or(0);
                metrics.completion_tokens += usage.completion.unwrap_or(0);
            }
            metrics.cost += response.cost.unwrap_or(0.0);
        }

        metrics.assertion_tokens += record
            .grading_result
            .as_ref()
            .and_then(|g| g.tokens_used.as_ref())
            .and_then(|t| t.total)
            .unwrap_or(0);

        metrics.total_latency_ms += record.latency_ms.unwrap_or(0);
        metrics.test_count += 1;
    }

    by_provider
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EvalResults;

    fn doc(json: serde_json::Value) -> EvalResults {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn accumulates_per_provider() {
        let doc = doc(serde_json::json!({
            "results": { "results": [
                {
                    "provider": { "id": "openai:chat:gpt-4" },
                    "response": {
                        "tokenUsage": { "total": 100, "prompt": 60, "completion": 40 },
                        "cost": 0.01
                    },
                    "gradingResult": { "tokensUsed": { "total": 7 } },
                    "latencyMs": 500
                },
                {
                    "provider": { "id": "openai:chat:gpt-4" },
                    "response": {
                        "tokenUsage": { "total": 30, "prompt": 20, "completion": 10 },
                        "cost": 0.002
                    },
                    "latencyMs": 250
                },
                {
                    "provider": { "id": "anthropic:claude" },
                    "response": {
                        "tokenUsage": { "total": 50, "prompt": 30, "completion": 20 },
                        "cost": 0.005
                    },
                    "latencyMs": 300
                }
            ]}
        }));

        let metrics = aggregate(&doc);
        assert_eq!(metrics.len(), 2);

        let gpt4 = &metrics["openai:chat:gpt-4"];
        assert_eq!(gpt4.total_tokens, 130);
        assert_eq!(gpt4.prompt_tokens, 80);
        assert_eq!(gpt4.completion_tokens, 50);
        assert_eq!(gpt4.assertion_tokens, 7);
        assert_eq!(gpt4.test_count, 2);
        assert_eq!(gpt4.total_latency_ms, 750);
        assert!((gpt4.cost - 0.012).abs() < 1e-9);

        let claude = &metrics["anthropic:claude"];
        assert_eq!(claude.total_tokens, 50);
        assert_eq!(claude.test_count, 1);

        // Sum over providers matches the sum over records
        let grand: u64 = metrics.values().map(|m| m.total_tokens).sum();
        assert_eq!(grand, 180);
    }

    #[test]
    fn empty_record_still_counts_as_a_test() {
        let doc = doc(serde_json::json!({
            "results": { "results": [ {}, { "provider": { "id": "x" } } ] }
        }));
        let metrics = aggregate(&doc);

        let unknown = &metrics["unknown"];
        assert_eq!(unknown.test_count, 1);
        assert_eq!(unknown.total_tokens, 0);
        assert_eq!(unknown.total_latency_ms, 0);

        assert_eq!(metrics["x"].test_count, 1);
    }

    #[test]
    fn null_fields_default_like_absent_ones() {
        let doc = doc(serde_json::json!({
            "results": { "results": [
                {
                    "provider": { "id": null },
                    "response": { "tokenUsage": null, "cost": null },
                    "gradingResult": null,
                    "latencyMs": null
                }
            ]}
        }));
        let metrics = aggregate(&doc);
        assert_eq!(metrics["unknown"], ProviderMetrics {
            test_count: 1,
            ..Default::default()
        });
    }

    #[test]
    fn missing_results_sequence_yields_empty_map() {
        assert!(aggregate(&doc(serde_json::json!({}))).is_empty());
        assert!(aggregate(&doc(serde_json::json!({ "results": {} }))).is_empty());
        assert!(
            aggregate(&doc(serde_json::json!({ "results": { "results": [] } }))).is_empty()
        );
    }

    #[test]
    fn preserves_first_encounter_order() {
        let doc = doc(serde_json::json!({
            "results": { "results": [
                { "provider": { "id": "b" } },
                { "provider": { "id": "a" } },
                { "provider": { "id": "b" } }
            ]}
        }));
        let agg = aggregate(&doc);
        let keys: Vec<&str> = agg.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
    }
}
