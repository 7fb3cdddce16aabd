use serde::{Deserialize, Serialize};

/// Filter options for listing properties
///
/// Every field is optional; an absent field places no constraint on that
/// dimension, so the default filter returns everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyFilter {
    /// Match against the listing's county or region (exact)
    pub county: Option<String>,
    /// Minimum numeric price (inclusive)
    pub min_price: Option<u64>,
    /// Maximum numeric price (inclusive)
    pub max_price: Option<u64>,
    /// Minimum number of bedrooms (inclusive)
    pub bedrooms: Option<u32>,
}

impl PropertyFilter {
    /// Filter scoped to a county or region
    pub fn in_county(county: impl Into<String>) -> Self {
        Self {
            county: Some(county.into()),
            ..Self::default()
        }
    }
}
