use serde::{Deserialize, Serialize};

/// Number of suppliers a highest-risk query returns when no limit is given.
pub const DEFAULT_HIGHEST_RISK_LIMIT: usize = 3;

// =============================================================================
// Entity Structs
// =============================================================================

/// A vendor entity with a risk score, industry, and location.
///
/// Identifiers are assigned by the store, monotonically from 1. Suppliers are
/// immutable once created; no update or delete operation exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: u32,
    pub name: String,
    /// Observed domain range 0.0 to 10.0.
    pub risk_score: f64,
    pub industry: String,
    pub location: String,
}

/// A qualitative risk label attached to a supplier, one row per label.
///
/// Category strings are free text compared case-insensitively; no canonical
/// enumeration is enforced at the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskCategory {
    pub id: u32,
    pub supplier_id: u32,
    pub category: String,
}

/// Fields for creating a supplier; the store allocates the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSupplier {
    pub name: String,
    pub risk_score: f64,
    pub industry: String,
    pub location: String,
}

/// A supplier joined with its risk category labels in insertion order.
///
/// The unit returned by every store read operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierProfile {
    pub id: u32,
    pub name: String,
    pub risk_score: f64,
    pub industry: String,
    pub location: String,
    pub risk_categories: Vec<String>,
}

// =============================================================================
// StructuredQuery
// =============================================================================

/// The normalized, typed representation of search intent.
///
/// Exactly one kind is active per instance (enum invariant). The wire form
/// carries the kind in a `type` tag, e.g. `{"type":"industry","industry":
/// "healthcare"}`; unknown tags and missing required parameters are
/// deserialization errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StructuredQuery {
    /// Suppliers sorted by risk score descending, limited to `limit` entries
    /// (default [`DEFAULT_HIGHEST_RISK_LIMIT`]).
    #[serde(rename_all = "camelCase")]
    HighestRisk {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<usize>,
    },
    /// Case-insensitive exact match on the industry field.
    Industry { industry: String },
    /// Case-insensitive exact match against any of a supplier's labels.
    #[serde(rename_all = "camelCase")]
    RiskCategory { risk_category: String },
    /// Every supplier, unfiltered.
    All,
}

impl StructuredQuery {
    /// Short kind name as it appears in the wire tag.
    pub fn kind(&self) -> &'static str {
        match self {
            StructuredQuery::HighestRisk { .. } => "highestRisk",
            StructuredQuery::Industry { .. } => "industry",
            StructuredQuery::RiskCategory { .. } => "riskCategory",
            StructuredQuery::All => "all",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
