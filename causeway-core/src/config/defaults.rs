// Single source of truth for all default values.

use crate::data::DataType;

// --- Site matching ---
pub const DEFAULT_FORCE_SITE_MATCHING: bool = true;
pub const DEFAULT_SITE_PROXIMITY_THRESHOLD: u32 = 0;

// --- Bookkeeping ---
pub const DEFAULT_COLLECT_DATA_WITH_MISSING_EFFECT: bool = true;
pub const DEFAULT_COLLECT_DATA_USED_FOR_INFERENCE: bool = true;

// --- Source eligibility ---
pub const DEFAULT_MANDATE_ACTIVITY_UPSTREAM_OF_EXPRESSION: bool = false;
pub const DEFAULT_USE_STRONGEST_PROTEOMICS_FOR_ACTIVITY: bool = false;
pub const DEFAULT_GENERAL_ACTIVITY_INDICATORS: [DataType; 3] =
    [DataType::Protein, DataType::PhosphoProtein, DataType::Activity];

// --- Target eligibility ---
pub const DEFAULT_EXPRESSION_EVIDENCE: &[DataType] = &[DataType::Protein];

// --- Logging ---
pub const DEFAULT_LOG_ENV_VAR: &str = "CAUSEWAY_LOG";
pub const DEFAULT_LOG_FILTER: &str = "causeway=info";
