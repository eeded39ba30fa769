//! # Promptfoo Token Report
//!
//! A small reporting utility that reads a promptfoo evaluation results file
//! (`results.json`) and prints a per-provider comparison of token usage and
//! cost to the console.
//!
//! ## Overview
//!
//! The pipeline is a straight line over one loaded document:
//! load → aggregate → rank → report. Per-provider metrics cover prompt,
//! completion, assertion, and total token counts, monetary cost, test count,
//! and latency. Providers are ranked by total token usage and everyone else
//! gets a savings percentage relative to the most token-intensive one.
//!
//! ## Features
//!
//! - `colors` (default): terminal color accents via owo-colors

/// Per-provider accumulation over the result records
pub mod aggregate;

/// Command-line argument parsing
pub mod cli;

/// Results file loading and parsing
pub mod loader;

/// Data models for the results document and the metrics accumulator
pub mod models;

/// Max-usage provider lookup and savings percentages
pub mod rank;

/// Console report rendering
pub mod report;
