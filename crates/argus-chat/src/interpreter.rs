//! Natural-language query interpreter.
//!
//! Maps a raw user utterance to a [`StructuredQuery`] by literal,
//! case-insensitive substring matching against fixed keyword lists. This is
//! deliberately deterministic and keyword-literal, not a learned classifier.

use regex::Regex;
use std::sync::LazyLock;

use argus_core::types::{StructuredQuery, DEFAULT_HIGHEST_RISK_LIMIT};

// =============================================================================
// Keyword lists (fixed reference order; first hit wins)
// =============================================================================

/// Industry names recognized by the interpreter, in priority order. Two
/// industries present in one utterance resolve by this order, not by input
/// position.
static INDUSTRY_KEYWORDS: &[&str] = &[
    "healthcare",
    "transportation",
    "technology",
    "agriculture",
    "manufacturing",
    "financial services",
    "electronics",
    "automotive",
    "energy",
];

/// Risk category names recognized by the interpreter, in priority order.
static RISK_CATEGORY_KEYWORDS: &[&str] = &[
    "financial compliance",
    "data security",
    "regulatory",
    "environmental",
    "operational",
    "legal",
    "supply chain",
];

/// Extracts N from a "top N" phrase, e.g. "top 5 suppliers".
static TOP_N_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"top\s+(\d+)").expect("Invalid limit regex"));

// =============================================================================
// QueryInterpreter
// =============================================================================

/// Rule-based utterance interpreter.
pub struct QueryInterpreter;

impl QueryInterpreter {
    pub fn new() -> Self {
        Self
    }

    /// Interpret a raw utterance into a structured query.
    ///
    /// Rules are tested in a fixed priority order, first match wins:
    /// 1. "highest risk", or both "top" and "risk" → `highestRisk`, with the
    ///    limit taken from a "top N" digit phrase when present, default
    ///    [`DEFAULT_HIGHEST_RISK_LIMIT`] otherwise.
    /// 2. Any industry keyword → `industry` with that name.
    /// 3. Any risk category keyword → `riskCategory` with that name.
    /// 4. Nothing recognized → `all`.
    pub fn interpret(&self, utterance: &str) -> StructuredQuery {
        let lower = utterance.to_lowercase();

        if lower.contains("highest risk") || (lower.contains("top") && lower.contains("risk")) {
            let limit = TOP_N_RE
                .captures(&lower)
                .and_then(|caps| caps.get(1))
                .and_then(|m| m.as_str().parse::<usize>().ok())
                .unwrap_or(DEFAULT_HIGHEST_RISK_LIMIT);
            return StructuredQuery::HighestRisk { limit: Some(limit) };
        }

        if let Some(industry) = INDUSTRY_KEYWORDS.iter().find(|k| lower.contains(*k)) {
            return StructuredQuery::Industry {
                industry: (*industry).to_string(),
            };
        }

        if let Some(category) = RISK_CATEGORY_KEYWORDS.iter().find(|k| lower.contains(*k)) {
            return StructuredQuery::RiskCategory {
                risk_category: (*category).to_string(),
            };
        }

        StructuredQuery::All
    }
}

impl Default for QueryInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
