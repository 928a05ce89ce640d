//! The fixed demo roster loaded into the store at startup.

/// One supplier in the seed roster, with its risk category labels.
#[derive(Debug, Clone, Copy)]
pub struct SeedEntry {
    pub name: &'static str,
    pub risk_score: f64,
    pub industry: &'static str,
    pub location: &'static str,
    pub categories: &'static [&'static str],
}

/// The ten-entry roster, in insertion order. Identifiers are assigned by the
/// store at seed time, starting from 1 in this order.
pub const SEED_ENTRIES: &[SeedEntry] = &[
    SeedEntry {
        name: "MediTech Solutions",
        risk_score: 8.5,
        industry: "Healthcare",
        location: "Boston, USA",
        categories: &["Data Security", "Regulatory"],
    },
    SeedEntry {
        name: "Global Logistics Co.",
        risk_score: 5.3,
        industry: "Transportation",
        location: "Singapore",
        categories: &["Supply Chain", "Environmental"],
    },
    SeedEntry {
        name: "TechNova Inc.",
        risk_score: 9.1,
        industry: "Technology",
        location: "San Francisco, USA",
        categories: &["Financial Compliance", "Data Security", "Legal"],
    },
    SeedEntry {
        name: "EcoFarm Produce",
        risk_score: 3.2,
        industry: "Agriculture",
        location: "Melbourne, Australia",
        categories: &["Environmental", "Supply Chain"],
    },
    SeedEntry {
        name: "ChemCorp Industries",
        risk_score: 7.8,
        industry: "Manufacturing",
        location: "Hamburg, Germany",
        categories: &["Environmental", "Operational"],
    },
    SeedEntry {
        name: "FinSecure Partners",
        risk_score: 6.7,
        industry: "Financial Services",
        location: "London, UK",
        categories: &["Financial Compliance", "Data Security"],
    },
    SeedEntry {
        name: "MicroElectronics Ltd",
        risk_score: 4.9,
        industry: "Electronics",
        location: "Taipei, Taiwan",
        categories: &["Supply Chain", "Regulatory"],
    },
    SeedEntry {
        name: "PharmaGen Research",
        risk_score: 7.2,
        industry: "Healthcare",
        location: "Basel, Switzerland",
        categories: &["Regulatory", "Legal", "Data Security"],
    },
    SeedEntry {
        name: "AutoParts Alliance",
        risk_score: 5.8,
        industry: "Automotive",
        location: "Detroit, USA",
        categories: &["Operational", "Supply Chain"],
    },
    SeedEntry {
        name: "EnergySystems Global",
        risk_score: 6.4,
        industry: "Energy",
        location: "Houston, USA",
        categories: &["Environmental", "Regulatory", "Operational"],
    },
];
