use std::process::exit;

use promptfoo_tokens::aggregate::aggregate;
use promptfoo_tokens::cli::Args;
use promptfoo_tokens::loader::load;
use promptfoo_tokens::rank::savings_percentages;
use promptfoo_tokens::report::print_report;

fn main() {
    let args = Args::parse();

    println!("Loading results from: {}", args.results_file.display());

    // Diagnostics go to stdout alongside the report, matching the upstream
    // harness tooling this feeds into.
    let doc = match load(&args.results_file) {
        Ok(doc) => doc,
        Err(e) => {
            println!("Error: {e:#}");
            exit(1);
        }
    };

    let metrics = aggregate(&doc);
    if metrics.is_empty() {
        println!("No provider data found in results. Make sure the results file contains test results.");
        exit(1);
    }

    let savings = savings_percentages(&metrics);
    print_report(&metrics, &savings);
}
