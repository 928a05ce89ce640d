//! Response formatting for supplier search results.
//!
//! Renders a structured query result back into a natural-language,
//! line-broken message for display. Output is plain text; converting line
//! breaks to display markup is the UI layer's concern.

use argus_core::types::{StructuredQuery, SupplierProfile};

/// Fixed message returned for an empty result set, regardless of query kind.
pub const NO_RESULTS_MESSAGE: &str =
    "No suppliers found matching your search. Please try a different search.";

/// Renders search results into assistant-voiced display text.
pub struct ResponseFormatter;

impl ResponseFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Format a result set for the given query.
    ///
    /// Non-empty results produce a header naming the query's intent, one
    /// enumerated block per supplier, and a trailing follow-up prompt whose
    /// wording varies by query kind.
    pub fn format(&self, query: &StructuredQuery, results: &[SupplierProfile]) -> String {
        if results.is_empty() {
            return NO_RESULTS_MESSAGE.to_string();
        }

        let mut sections = vec![self.header(query, results.len())];
        for (index, supplier) in results.iter().enumerate() {
            sections.push(self.block(query, index + 1, supplier));
        }
        sections.push(self.follow_up(query).to_string());
        sections.join("\n\n")
    }

    fn header(&self, query: &StructuredQuery, count: usize) -> String {
        match query {
            StructuredQuery::HighestRisk { .. } => {
                if count == 1 {
                    "Here is the highest-risk supplier:".to_string()
                } else {
                    format!("Here are the top {} highest-risk suppliers:", count)
                }
            }
            StructuredQuery::Industry { industry } => {
                if count == 1 {
                    format!("Here is the supplier in the {} industry:", industry)
                } else {
                    format!("Here are the suppliers in the {} industry:", industry)
                }
            }
            StructuredQuery::RiskCategory { risk_category } => {
                if count == 1 {
                    format!("Here is the supplier with {} risk exposure:", risk_category)
                } else {
                    format!("Here are the suppliers with {} risk exposure:", risk_category)
                }
            }
            StructuredQuery::All => {
                format!("Here are all {} suppliers currently tracked:", count)
            }
        }
    }

    fn block(&self, query: &StructuredQuery, index: usize, supplier: &SupplierProfile) -> String {
        let mut lines = vec![format!(
            "{}. {} (Risk Score: {:.1})",
            index, supplier.name, supplier.risk_score
        )];
        match query {
            StructuredQuery::HighestRisk { .. } | StructuredQuery::RiskCategory { .. } => {
                lines.push(format!("   Industry: {}", supplier.industry));
            }
            StructuredQuery::Industry { .. } => {
                lines.push(format!("   Location: {}", supplier.location));
            }
            StructuredQuery::All => {
                lines.push(format!("   Industry: {}", supplier.industry));
                lines.push(format!("   Location: {}", supplier.location));
            }
        }
        if !supplier.risk_categories.is_empty() {
            lines.push(format!(
                "   Risk Categories: {}",
                supplier.risk_categories.join(", ")
            ));
        }
        lines.join("\n")
    }

    fn follow_up(&self, query: &StructuredQuery) -> &'static str {
        match query {
            StructuredQuery::HighestRisk { .. } => {
                "Would you like more detail on any of these high-risk suppliers?"
            }
            StructuredQuery::Industry { .. } => {
                "Would you like to see the risk profile of any of these suppliers?"
            }
            StructuredQuery::RiskCategory { .. } => {
                "Would you like to compare how these suppliers handle other risk categories?"
            }
            StructuredQuery::All => {
                "You can ask about a specific industry, a risk category, or the highest-risk suppliers to narrow this down."
            }
        }
    }
}

impl Default for ResponseFormatter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
