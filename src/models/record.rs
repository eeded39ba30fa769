use serde::Deserialize;

/// Top-level shape of a promptfoo results file. Everything below the root is
/// optional: evals produced by older harness versions or partial runs may
/// omit any of these fields, and a missing branch simply contributes nothing.
#[derive(Deserialize, Debug, Default)]
pub struct EvalResults {
    pub results: Option<ResultsEnvelope>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ResultsEnvelope {
    pub results: Option<Vec<ResultRecord>>,
}

impl EvalResults {
    /// The per-test record list, empty when the envelope is absent.
    pub fn records(&self) -> &[ResultRecord] {
        self.results
            .as_ref()
            .and_then(|env| env.results.as_deref())
            .unwrap_or(&[])
    }
}

/// One test execution. Fields are `Option` so both absent and `null` values
/// fall back to zero/empty during aggregation.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub provider: Option<Provider>,
    pub response: Option<Response>,
    pub grading_result: Option<GradingResult>,
    pub latency_ms: Option<u64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Provider {
    pub id: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub token_usage: Option<TokenUsage>,
    pub cost: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct TokenUsage {
    pub total: Option<u64>,
    pub prompt: Option<u64>,
    pub completion: Option<u64>,
}

/// Grading step output; only the assertion token total is of interest here.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GradingResult {
    pub tokens_used: Option<TokensUsed>,
}

#[derive(Deserialize, Debug, Default)]
pub struct TokensUsed {
    pub total: Option<u64>,
}
