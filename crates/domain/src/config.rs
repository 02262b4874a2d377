//! Static client configuration
//!
//! Plan tiers, costing defaults, and upload limits mirrored from the
//! backend. These are display/validation aids; the server remains the
//! authority on what a subscription actually allows.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::request::FormField;

/// Subscription plan tiers offered by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    /// Free tier.
    Free,
    /// Basic paid tier.
    Basic,
    /// Standard paid tier.
    Standard,
    /// Premium tier, no usage limits.
    Premium,
}

/// Limits and pricing of one subscription plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionPlan {
    /// Spanish display name.
    pub name: &'static str,
    /// Maximum number of price databases; `None` means unlimited.
    pub max_databases: Option<u32>,
    /// Maximum number of workbooks; `None` means unlimited.
    pub max_workbooks: Option<u32>,
    /// Monthly price in bolivianos.
    pub monthly_price: f64,
}

impl PlanTier {
    /// Returns all tiers, cheapest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Free, Self::Basic, Self::Standard, Self::Premium]
    }

    /// Returns the limits and pricing for this tier.
    #[must_use]
    pub const fn plan(self) -> SubscriptionPlan {
        match self {
            Self::Free => SubscriptionPlan {
                name: "Gratis",
                max_databases: Some(1),
                max_workbooks: Some(5),
                monthly_price: 0.0,
            },
            Self::Basic => SubscriptionPlan {
                name: "Básico",
                max_databases: Some(2),
                max_workbooks: Some(10),
                monthly_price: 49.99,
            },
            Self::Standard => SubscriptionPlan {
                name: "Estándar",
                max_databases: Some(5),
                max_workbooks: Some(25),
                monthly_price: 99.99,
            },
            Self::Premium => SubscriptionPlan {
                name: "Premium",
                max_databases: None,
                max_workbooks: None,
                monthly_price: 199.99,
            },
        }
    }
}

impl SubscriptionPlan {
    /// Returns true if the plan allows one more price database on top of
    /// `existing` ones.
    #[must_use]
    pub fn allows_another_database(&self, existing: u32) -> bool {
        self.max_databases.is_none_or(|max| existing < max)
    }

    /// Returns true if the plan allows one more workbook on top of
    /// `existing` ones.
    #[must_use]
    pub fn allows_another_workbook(&self, existing: u32) -> bool {
        self.max_workbooks.is_none_or(|max| existing < max)
    }
}

/// Default costing parameters applied to new workbooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostingDefaults {
    /// Profit margin as a fraction of cost.
    pub profit_margin: f64,
    /// Tax rate as a fraction of price.
    pub tax_rate: f64,
    /// Operational cost as a fraction of direct cost.
    pub operational_cost_rate: f64,
    /// Default number of units produced per batch.
    pub production_units: u32,
}

impl Default for CostingDefaults {
    fn default() -> Self {
        Self {
            profit_margin: 0.20,
            tax_rate: 0.16,
            operational_cost_rate: 0.20,
            production_units: 1,
        }
    }
}

/// Content types the backend accepts for price database uploads.
pub const ACCEPTED_UPLOAD_TYPES: &[&str] = &[
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "text/csv",
];

/// Maximum upload size in bytes (10 MiB).
pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// Size and content-type limits for file uploads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Maximum file size in bytes.
    pub max_size: usize,
    /// Accepted content types.
    pub accepted_types: &'static [&'static str],
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_size: MAX_UPLOAD_SIZE,
            accepted_types: ACCEPTED_UPLOAD_TYPES,
        }
    }
}

impl UploadPolicy {
    /// Returns true if the content type is accepted.
    #[must_use]
    pub fn accepts_type(&self, content_type: &str) -> bool {
        self.accepted_types.iter().any(|t| *t == content_type)
    }

    /// Validates a file form field against the policy.
    ///
    /// Text fields pass unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OversizedUpload`] when the file exceeds the
    /// size limit, or [`DomainError::UnsupportedFileType`] when its
    /// effective content type is not accepted (or cannot be determined).
    pub fn validate(&self, field: &FormField) -> DomainResult<()> {
        let Some(size) = field.size() else {
            return Ok(());
        };
        if size > self.max_size {
            return Err(DomainError::OversizedUpload {
                size,
                max: self.max_size,
            });
        }
        let content_type = field
            .effective_content_type()
            .ok_or_else(|| DomainError::UnsupportedFileType("unknown".to_string()))?;
        if !self.accepts_type(&content_type) {
            return Err(DomainError::UnsupportedFileType(content_type));
        }
        Ok(())
    }
}
