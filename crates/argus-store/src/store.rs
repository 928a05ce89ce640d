//! Thread-safe in-memory supplier store with structured search.
//!
//! Suppliers and their category rows live in `BTreeMap`s keyed by
//! monotonically assigned identifiers, so iteration order equals insertion
//! order and reads are deterministic.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use tracing::{info, warn};

use argus_core::error::{ArgusError, Result};
use argus_core::types::{
    NewSupplier, RiskCategory, StructuredQuery, Supplier, SupplierProfile,
    DEFAULT_HIGHEST_RISK_LIMIT,
};

use crate::seed::SEED_ENTRIES;

/// In-memory supplier dataset guarded by a single mutex.
///
/// The dataset is written only by [`SupplierStore::initialize`] and
/// [`SupplierStore::create`]; every read returns owned
/// [`SupplierProfile`] values so no lock is held across callers.
pub struct SupplierStore {
    inner: Mutex<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    suppliers: BTreeMap<u32, Supplier>,
    risk_categories: BTreeMap<u32, RiskCategory>,
    next_supplier_id: u32,
    next_category_id: u32,
    seeded: bool,
}

impl SupplierStore {
    /// Create an empty store. Identifier allocation starts at 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                suppliers: BTreeMap::new(),
                risk_categories: BTreeMap::new(),
                next_supplier_id: 1,
                next_category_id: 1,
                seeded: false,
            }),
        }
    }

    /// Seed the fixed demo roster.
    ///
    /// Guarded against re-entry: the first call inserts the ten roster
    /// entries, every later call is a no-op.
    pub fn initialize(&self) -> Result<()> {
        let mut inner = self.lock()?;
        if inner.seeded {
            warn!("Supplier store already seeded, skipping initialization");
            return Ok(());
        }
        for entry in SEED_ENTRIES {
            let fields = NewSupplier {
                name: entry.name.to_string(),
                risk_score: entry.risk_score,
                industry: entry.industry.to_string(),
                location: entry.location.to_string(),
            };
            let categories: Vec<String> =
                entry.categories.iter().map(|c| c.to_string()).collect();
            inner.insert(fields, &categories);
        }
        inner.seeded = true;
        info!(
            suppliers = inner.suppliers.len(),
            categories = inner.risk_categories.len(),
            "Seeded supplier roster"
        );
        Ok(())
    }

    /// Return every supplier with its category labels, in insertion order.
    pub fn get_all(&self) -> Result<Vec<SupplierProfile>> {
        let inner = self.lock()?;
        Ok(inner.all_profiles())
    }

    /// Look up one supplier by identifier.
    pub fn get_by_id(&self, id: u32) -> Result<Option<SupplierProfile>> {
        let inner = self.lock()?;
        Ok(inner.suppliers.get(&id).map(|s| inner.profile(s)))
    }

    /// Evaluate a structured query against the dataset.
    ///
    /// `highestRisk` sorts by score descending (stable, ties keep insertion
    /// order) and takes the first `limit` entries, default
    /// [`DEFAULT_HIGHEST_RISK_LIMIT`]. A limit larger than the dataset
    /// returns everything; a literal limit of 0 returns nothing. `industry`
    /// and `riskCategory` are case-insensitive exact matches, not substring
    /// matches.
    pub fn search(&self, query: &StructuredQuery) -> Result<Vec<SupplierProfile>> {
        let inner = self.lock()?;
        let mut profiles = inner.all_profiles();
        match query {
            StructuredQuery::All => {}
            StructuredQuery::HighestRisk { limit } => {
                profiles.sort_by(|a, b| b.risk_score.total_cmp(&a.risk_score));
                profiles.truncate(limit.unwrap_or(DEFAULT_HIGHEST_RISK_LIMIT));
            }
            StructuredQuery::Industry { industry } => {
                let needle = industry.to_lowercase();
                profiles.retain(|p| p.industry.to_lowercase() == needle);
            }
            StructuredQuery::RiskCategory { risk_category } => {
                let needle = risk_category.to_lowercase();
                profiles.retain(|p| {
                    p.risk_categories
                        .iter()
                        .any(|c| c.to_lowercase() == needle)
                });
            }
        }
        Ok(profiles)
    }

    /// Insert a supplier with its category labels, allocating the next
    /// identifier. Used at seed time; the dataset is read-only afterward
    /// during normal operation.
    pub fn create(&self, fields: NewSupplier, categories: &[String]) -> Result<SupplierProfile> {
        let mut inner = self.lock()?;
        Ok(inner.insert(fields, categories))
    }

    /// Number of suppliers currently stored.
    pub fn len(&self) -> Result<usize> {
        let inner = self.lock()?;
        Ok(inner.suppliers.len())
    }

    /// Whether the store holds no suppliers.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>> {
        self.inner
            .lock()
            .map_err(|e| ArgusError::Store(format!("store lock poisoned: {}", e)))
    }
}

impl Default for SupplierStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreInner {
    fn insert(&mut self, fields: NewSupplier, categories: &[String]) -> SupplierProfile {
        let id = self.next_supplier_id;
        self.next_supplier_id += 1;
        self.suppliers.insert(
            id,
            Supplier {
                id,
                name: fields.name,
                risk_score: fields.risk_score,
                industry: fields.industry,
                location: fields.location,
            },
        );
        for category in categories {
            let category_id = self.next_category_id;
            self.next_category_id += 1;
            self.risk_categories.insert(
                category_id,
                RiskCategory {
                    id: category_id,
                    supplier_id: id,
                    category: category.clone(),
                },
            );
        }
        // Just inserted, so this lookup cannot miss.
        let supplier = &self.suppliers[&id];
        self.profile(supplier)
    }

    fn profile(&self, supplier: &Supplier) -> SupplierProfile {
        SupplierProfile {
            id: supplier.id,
            name: supplier.name.clone(),
            risk_score: supplier.risk_score,
            industry: supplier.industry.clone(),
            location: supplier.location.clone(),
            risk_categories: self.categories_of(supplier.id),
        }
    }

    /// Category labels for one supplier, in insertion order.
    fn categories_of(&self, supplier_id: u32) -> Vec<String> {
        self.risk_categories
            .values()
            .filter(|rc| rc.supplier_id == supplier_id)
            .map(|rc| rc.category.clone())
            .collect()
    }

    fn all_profiles(&self) -> Vec<SupplierProfile> {
        self.suppliers.values().map(|s| self.profile(s)).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> SupplierStore {
        let store = SupplierStore::new();
        store.initialize().unwrap();
        store
    }

    fn names(profiles: &[SupplierProfile]) -> Vec<&str> {
        profiles.iter().map(|p| p.name.as_str()).collect()
    }

    // ---- Construction and seeding ----

    #[test]
    fn test_new_store_is_empty() {
        let store = SupplierStore::new();
        assert!(store.is_empty().unwrap());
        assert_eq!(store.get_all().unwrap().len(), 0);
    }

    #[test]
    fn test_initialize_seeds_ten_suppliers() {
        let store = seeded_store();
        assert_eq!(store.len().unwrap(), 10);
    }

    #[test]
    fn test_initialize_twice_does_not_duplicate() {
        let store = seeded_store();
        store.initialize().unwrap();
        store.initialize().unwrap();
        assert_eq!(store.len().unwrap(), 10);
    }

    #[test]
    fn test_identifiers_assigned_from_one_in_order() {
        let store = seeded_store();
        let all = store.get_all().unwrap();
        let ids: Vec<u32> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_seeded_categories_match_roster() {
        let store = seeded_store();
        let meditech = store.get_by_id(1).unwrap().unwrap();
        assert_eq!(meditech.risk_categories, vec!["Data Security", "Regulatory"]);
        let technova = store.get_by_id(3).unwrap().unwrap();
        assert_eq!(
            technova.risk_categories,
            vec!["Financial Compliance", "Data Security", "Legal"]
        );
    }

    // ---- get_all ----

    #[test]
    fn test_get_all_insertion_order() {
        let store = seeded_store();
        let all = store.get_all().unwrap();
        assert_eq!(all[0].name, "MediTech Solutions");
        assert_eq!(all[1].name, "Global Logistics Co.");
        assert_eq!(all[9].name, "EnergySystems Global");
    }

    #[test]
    fn test_get_all_idempotent() {
        let store = seeded_store();
        let first = store.get_all().unwrap();
        let second = store.get_all().unwrap();
        assert_eq!(first, second);
    }

    // ---- get_by_id ----

    #[test]
    fn test_get_by_id_found() {
        let store = seeded_store();
        let supplier = store.get_by_id(5).unwrap().unwrap();
        assert_eq!(supplier.name, "ChemCorp Industries");
        assert_eq!(supplier.industry, "Manufacturing");
        assert_eq!(supplier.location, "Hamburg, Germany");
    }

    #[test]
    fn test_get_by_id_absent() {
        let store = seeded_store();
        assert!(store.get_by_id(99).unwrap().is_none());
        assert!(store.get_by_id(0).unwrap().is_none());
    }

    // ---- search: all ----

    #[test]
    fn test_search_all_returns_full_roster() {
        let store = seeded_store();
        let results = store.search(&StructuredQuery::All).unwrap();
        assert_eq!(results.len(), 10);
        assert_eq!(results, store.get_all().unwrap());
    }

    // ---- search: highestRisk ----

    #[test]
    fn test_search_highest_risk_top_three() {
        let store = seeded_store();
        let results = store
            .search(&StructuredQuery::HighestRisk { limit: Some(3) })
            .unwrap();
        assert_eq!(
            names(&results),
            vec!["TechNova Inc.", "MediTech Solutions", "ChemCorp Industries"]
        );
        assert!((results[0].risk_score - 9.1).abs() < f64::EPSILON);
        assert!((results[1].risk_score - 8.5).abs() < f64::EPSILON);
        assert!((results[2].risk_score - 7.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_search_highest_risk_default_limit() {
        let store = seeded_store();
        let results = store
            .search(&StructuredQuery::HighestRisk { limit: None })
            .unwrap();
        assert_eq!(results.len(), DEFAULT_HIGHEST_RISK_LIMIT);
        assert_eq!(results[0].name, "TechNova Inc.");
    }

    #[test]
    fn test_search_highest_risk_limit_exceeds_size() {
        let store = seeded_store();
        let results = store
            .search(&StructuredQuery::HighestRisk { limit: Some(50) })
            .unwrap();
        assert_eq!(results.len(), 10);
        // Fully sorted by score descending
        for pair in results.windows(2) {
            assert!(pair[0].risk_score >= pair[1].risk_score);
        }
    }

    #[test]
    fn test_search_highest_risk_limit_zero_returns_nothing() {
        let store = seeded_store();
        let results = store
            .search(&StructuredQuery::HighestRisk { limit: Some(0) })
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_search_highest_risk_ties_keep_insertion_order() {
        let store = SupplierStore::new();
        for name in ["First Corp", "Second Corp", "Third Corp"] {
            store
                .create(
                    NewSupplier {
                        name: name.to_string(),
                        risk_score: 5.0,
                        industry: "Testing".to_string(),
                        location: "Nowhere".to_string(),
                    },
                    &[],
                )
                .unwrap();
        }
        let results = store
            .search(&StructuredQuery::HighestRisk { limit: Some(3) })
            .unwrap();
        assert_eq!(names(&results), vec!["First Corp", "Second Corp", "Third Corp"]);
    }

    // ---- search: industry ----

    #[test]
    fn test_search_industry_healthcare() {
        let store = seeded_store();
        let results = store
            .search(&StructuredQuery::Industry {
                industry: "Healthcare".to_string(),
            })
            .unwrap();
        assert_eq!(names(&results), vec!["MediTech Solutions", "PharmaGen Research"]);
    }

    #[test]
    fn test_search_industry_case_insensitive() {
        let store = seeded_store();
        let results = store
            .search(&StructuredQuery::Industry {
                industry: "healthcare".to_string(),
            })
            .unwrap();
        assert_eq!(results.len(), 2);

        let shouted = store
            .search(&StructuredQuery::Industry {
                industry: "ENERGY".to_string(),
            })
            .unwrap();
        assert_eq!(names(&shouted), vec!["EnergySystems Global"]);
    }

    #[test]
    fn test_search_industry_exact_not_substring() {
        let store = seeded_store();
        // "Tech" is a substring of "Technology" but not an exact match
        let results = store
            .search(&StructuredQuery::Industry {
                industry: "Tech".to_string(),
            })
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_search_industry_unknown_returns_empty() {
        let store = seeded_store();
        let results = store
            .search(&StructuredQuery::Industry {
                industry: "Aerospace".to_string(),
            })
            .unwrap();
        assert!(results.is_empty());
    }

    // ---- search: riskCategory ----

    #[test]
    fn test_search_risk_category_data_security() {
        let store = seeded_store();
        let results = store
            .search(&StructuredQuery::RiskCategory {
                risk_category: "Data Security".to_string(),
            })
            .unwrap();
        assert_eq!(
            names(&results),
            vec![
                "MediTech Solutions",
                "TechNova Inc.",
                "FinSecure Partners",
                "PharmaGen Research"
            ]
        );
    }

    #[test]
    fn test_search_risk_category_case_insensitive() {
        let store = seeded_store();
        let results = store
            .search(&StructuredQuery::RiskCategory {
                risk_category: "data security".to_string(),
            })
            .unwrap();
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn test_search_risk_category_exact_not_substring() {
        let store = seeded_store();
        let results = store
            .search(&StructuredQuery::RiskCategory {
                risk_category: "Security".to_string(),
            })
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_search_risk_category_unknown_returns_empty() {
        let store = seeded_store();
        let results = store
            .search(&StructuredQuery::RiskCategory {
                risk_category: "Geopolitical".to_string(),
            })
            .unwrap();
        assert!(results.is_empty());
    }

    // ---- search on empty store ----

    #[test]
    fn test_search_empty_store() {
        let store = SupplierStore::new();
        assert!(store.search(&StructuredQuery::All).unwrap().is_empty());
        assert!(store
            .search(&StructuredQuery::HighestRisk { limit: None })
            .unwrap()
            .is_empty());
    }

    // ---- create ----

    #[test]
    fn test_create_allocates_next_id() {
        let store = seeded_store();
        let created = store
            .create(
                NewSupplier {
                    name: "Orbital Metals".to_string(),
                    risk_score: 6.0,
                    industry: "Mining".to_string(),
                    location: "Perth, Australia".to_string(),
                },
                &["Environmental".to_string()],
            )
            .unwrap();
        assert_eq!(created.id, 11);
        assert_eq!(created.risk_categories, vec!["Environmental"]);
        assert_eq!(store.len().unwrap(), 11);
    }

    #[test]
    fn test_create_without_categories() {
        let store = SupplierStore::new();
        let created = store
            .create(
                NewSupplier {
                    name: "Bare Supplier".to_string(),
                    risk_score: 1.0,
                    industry: "Testing".to_string(),
                    location: "Nowhere".to_string(),
                },
                &[],
            )
            .unwrap();
        assert_eq!(created.id, 1);
        assert!(created.risk_categories.is_empty());
    }

    #[test]
    fn test_created_supplier_visible_to_search() {
        let store = seeded_store();
        store
            .create(
                NewSupplier {
                    name: "HealthBridge Corp".to_string(),
                    risk_score: 2.0,
                    industry: "Healthcare".to_string(),
                    location: "Toronto, Canada".to_string(),
                },
                &["Regulatory".to_string()],
            )
            .unwrap();
        let results = store
            .search(&StructuredQuery::Industry {
                industry: "healthcare".to_string(),
            })
            .unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[2].name, "HealthBridge Corp");
    }

    // ---- Concurrent reads ----

    #[test]
    fn test_concurrent_reads() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(seeded_store());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                let all = store.get_all().unwrap();
                assert_eq!(all.len(), 10);
                let top = store
                    .search(&StructuredQuery::HighestRisk { limit: Some(3) })
                    .unwrap();
                assert_eq!(top[0].name, "TechNova Inc.");
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
