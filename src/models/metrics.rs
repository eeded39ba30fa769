/// Accumulated usage for one provider. `Default` is the all-zero record that
/// new providers start from; fields only ever grow during a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProviderMetrics {
    pub total_tokens: u64,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub assertion_tokens: u64,
    pub cost: f64,
    pub test_count: u64,
    pub total_latency_ms: u64,
}

impl ProviderMetrics {
    /// Mean latency across tests, `None` when no tests were recorded.
    pub fn avg_latency_ms(&self) -> Option<f64> {
        (self.test_count > 0).then(|| self.total_latency_ms as f64 / self.test_count as f64)
    }

    /// Mean cost per test, `None` when no tests were recorded.
    pub fn avg_cost_per_test(&self) -> Option<f64> {
        (self.test_count > 0).then(|| self.cost / self.test_count as f64)
    }
}
