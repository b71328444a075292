//! Stable error codes attached to every error enum.

pub const CONFIG_ERROR: &str = "CCD-CONFIG";
pub const NO_MINIMIZING_SET: &str = "CCD-SEARCH-NO-MIN-SET";
pub const MISSING_SEPSET: &str = "CCD-SEARCH-MISSING-SEPSET";
pub const MISSING_SUPERSEPSET: &str = "CCD-SEARCH-MISSING-SUPERSEPSET";
pub const INCONSISTENT_MODEL: &str = "CCD-SEARCH-INCONSISTENT";

/// Maps an error to its stable code.
pub trait CcdErrorCode {
    fn error_code(&self) -> &'static str;
}
