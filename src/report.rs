use indexmap::IndexMap;

#[cfg(feature = "colors")]
use owo_colors::OwoColorize;

// Provide a no-op color shim when "colors" feature is disabled
#[cfg(not(feature = "colors"))]
pub mod color_shim {
    use std::fmt::{self, Display, Formatter};

    #[derive(Clone)]
    pub struct Plain(pub String);

    impl Display for Plain {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    pub trait ColorizeShim {
        fn as_str(&self) -> &str;

        fn bold(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn yellow(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
    }

    impl ColorizeShim for &str {
        fn as_str(&self) -> &str {
            self
        }
    }
    impl ColorizeShim for String {
        fn as_str(&self) -> &str {
            self.as_str()
        }
    }
}

#[cfg(not(feature = "colors"))]
use color_shim::ColorizeShim as OwoColorize;

use crate::models::ProviderMetrics;
use crate::rank::max_token_provider;

/// Known provider id prefixes, most specific first. "openai:chat:" must come
/// before "openai:" so chat ids lose the whole namespace.
const PROVIDER_PREFIXES: [&str; 3] = ["anthropic:", "openai:chat:", "openai:"];

/// Strip one recognized provider prefix from the front of an id. Ids with no
/// recognized prefix pass through unchanged, so re-applying is a no-op.
pub fn display_name(provider_id: &str) -> String {
    for prefix in PROVIDER_PREFIXES {
        if let Some(rest) = provider_id.strip_prefix(prefix) {
            return rest.to_string();
        }
    }
    provider_id.to_string()
}

/// Comma-separated thousands, e.g. 1234567 -> "1,234,567".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render the full comparison report: header naming the most token-intensive
/// provider, the fixed-width table, then the detailed per-provider breakdown.
///
/// Rows are sorted by total tokens descending; the stable sort keeps tied
/// providers in first-encounter order, matching the max-provider tie-break.
/// When the savings map carries no entry for a provider (the all-zero-token
/// edge case) the savings column shows "n/a" instead of a percentage.
pub fn render_report(
    metrics: &IndexMap<String, ProviderMetrics>,
    savings: &IndexMap<String, f64>,
) -> String {
    let mut out = String::new();

    let Some((max_id, max_metrics)) = max_token_provider(metrics) else {
        out.push_str("No provider data found in results.\n");
        return out;
    };

    let mut sorted: Vec<(&String, &ProviderMetrics)> = metrics.iter().collect();
    sorted.sort_by(|a, b| b.1.total_tokens.cmp(&a.1.total_tokens));

    let rule_heavy = "=".repeat(100);
    let rule_light = "-".repeat(100);

    out.push('\n');
    out.push_str(&rule_heavy);
    out.push('\n');
    out.push_str(&format!(
        "{}\n",
        "TOKEN USAGE COMPARISON - PROMPTFOO RESULTS".bold()
    ));
    out.push_str(&rule_heavy);
    out.push('\n');
    out.push_str(&format!(
        "\nMost Token-Intensive Provider: {}\n",
        display_name(max_id)
    ));
    out.push_str(&format!(
        "  Total Tokens: {}\n\n",
        group_thousands(max_metrics.total_tokens)
    ));

    out.push_str(&format!(
        "{:<50} {:<15} {:<12} {:<12} {:<8}\n",
        "Provider", "Total Tokens", "Cost ($)", "Savings %", "Tests"
    ));
    out.push_str(&rule_light);
    out.push('\n');

    for &(id, m) in &sorted {
        let savings_cell = match savings.get(id) {
            Some(pct) => format!("{pct:>11.2}%"),
            None => format!("{:>12}", "n/a"),
        };
        let indicator = if id == max_id {
            format!(" {}", "⭐ (Most)".yellow())
        } else {
            String::new()
        };
        out.push_str(&format!(
            "{:<50} {:>14} {:>11.6} {} {:>7}{}\n",
            display_name(id),
            group_thousands(m.total_tokens),
            m.cost,
            savings_cell,
            m.test_count,
            indicator
        ));
    }

    out.push_str(&rule_light);
    out.push('\n');

    out.push_str(&format!("\n{}\n", "DETAILED BREAKDOWN:".bold()));
    out.push_str(&rule_light);
    out.push('\n');

    for &(id, m) in &sorted {
        out.push_str(&format!("\n{}:\n", display_name(id)));
        out.push_str(&format!(
            "  Prompt Tokens:        {}\n",
            group_thousands(m.prompt_tokens)
        ));
        out.push_str(&format!(
            "  Completion Tokens:    {}\n",
            group_thousands(m.completion_tokens)
        ));
        out.push_str(&format!(
            "  Assertion Tokens:     {}\n",
            group_thousands(m.assertion_tokens)
        ));
        out.push_str(&format!(
            "  Total Tokens:         {}\n",
            group_thousands(m.total_tokens)
        ));
        out.push_str(&format!("  Total Cost:          ${:.6}\n", m.cost));
        out.push_str(&format!("  Number of Tests:      {}\n", m.test_count));
        if let Some(avg_latency) = m.avg_latency_ms() {
            out.push_str(&format!("  Avg Latency:          {avg_latency:.0} ms\n"));
        }
        if let Some(avg_cost) = m.avg_cost_per_test() {
            out.push_str(&format!("  Avg Cost per Test:    ${avg_cost:.6}\n"));
        }
    }

    out.push('\n');
    out.push_str(&rule_heavy);
    out.push('\n');

    out
}

/// Write the rendered report to stdout.
pub fn print_report(metrics: &IndexMap<String, ProviderMetrics>, savings: &IndexMap<String, f64>) {
    print!("{}", render_report(metrics, savings));
}
