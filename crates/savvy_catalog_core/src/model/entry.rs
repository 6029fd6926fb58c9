//! Catalog entry domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted for every cataloged tool/concept.
//! - Provide trimming/normalization and validation helpers used by services.
//! - Model partial updates as an explicit per-field presence set.
//!
//! # Invariants
//! - `name` is the only identity; there is no surrogate key.
//! - Name comparison is case-insensitive; stored casing is preserved.
//! - Absent optional fields are `None`, never empty strings.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Full ordered catalog. Order is insertion order and is significant.
pub type Catalog = Vec<CatalogEntry>;

/// One "thing encountered in modern work".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Commonly used name; the human-recognizable identifier.
    pub name: String,
    /// One plain-language sentence explaining what it is.
    pub description: String,
    /// Actively part of the current working setup.
    pub in_current_stack: bool,
    /// Used in real work with real stakes.
    pub pressure_tested: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliate_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Name of the entry that replaced this one in the stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replaced_by: Option<String>,
    /// Why the switch to `replaced_by` was made.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_reason: Option<String>,
}

/// Validation failures for entry input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValidationError {
    /// `name` is empty or whitespace-only.
    EmptyName,
    /// `description` is empty or whitespace-only.
    EmptyDescription,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "entry name cannot be empty"),
            Self::EmptyDescription => write!(f, "entry description cannot be empty"),
        }
    }
}

impl Error for EntryValidationError {}

impl CatalogEntry {
    /// Creates an entry with both flags cleared and no optional fields.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            in_current_stack: false,
            pressure_tested: false,
            website_url: None,
            pricing_url: None,
            affiliate_url: None,
            api_url: None,
            replaced_by: None,
            replacement_reason: None,
        }
    }

    /// Checks creation-time field rules.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is blank after trim.
    /// - `EmptyDescription` when `description` is blank after trim.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.name.trim().is_empty() {
            return Err(EntryValidationError::EmptyName);
        }
        if self.description.trim().is_empty() {
            return Err(EntryValidationError::EmptyDescription);
        }
        Ok(())
    }

    /// Returns the persisted shape of this entry.
    ///
    /// Trims every string; optional fields that are blank after trimming are
    /// dropped instead of kept as empty placeholders.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            in_current_stack: self.in_current_stack,
            pressure_tested: self.pressure_tested,
            website_url: normalize_optional(self.website_url.as_deref()),
            pricing_url: normalize_optional(self.pricing_url.as_deref()),
            affiliate_url: normalize_optional(self.affiliate_url.as_deref()),
            api_url: normalize_optional(self.api_url.as_deref()),
            replaced_by: normalize_optional(self.replaced_by.as_deref()),
            replacement_reason: normalize_optional(self.replacement_reason.as_deref()),
        }
    }

    /// Case-insensitive name match against a trimmed lookup key.
    pub fn matches_name(&self, name: &str) -> bool {
        names_equal(&self.name, name)
    }
}

/// Partial update for an existing entry.
///
/// Each field is a presence wrapper: `None` leaves the stored value untouched,
/// `Some(..)` overwrites it. `Some(false)` clears a flag. For optional string
/// fields a blank value clears the field. The entry name is not updatable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryUpdate {
    pub description: Option<String>,
    pub in_current_stack: Option<bool>,
    pub pressure_tested: Option<bool>,
    pub website_url: Option<String>,
    pub pricing_url: Option<String>,
    pub affiliate_url: Option<String>,
    pub api_url: Option<String>,
    pub replaced_by: Option<String>,
    pub replacement_reason: Option<String>,
}

impl EntryUpdate {
    /// Returns `true` when no field is provided.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Checks update-time field rules.
    ///
    /// # Errors
    /// - `EmptyDescription` when a provided `description` is blank.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        match self.description.as_deref() {
            Some(description) if description.trim().is_empty() => {
                Err(EntryValidationError::EmptyDescription)
            }
            _ => Ok(()),
        }
    }

    /// Merges provided fields into `entry` in place.
    pub fn apply_to(&self, entry: &mut CatalogEntry) {
        if let Some(description) = &self.description {
            entry.description = description.trim().to_string();
        }
        if let Some(flag) = self.in_current_stack {
            entry.in_current_stack = flag;
        }
        if let Some(flag) = self.pressure_tested {
            entry.pressure_tested = flag;
        }
        merge_optional(&mut entry.website_url, self.website_url.as_deref());
        merge_optional(&mut entry.pricing_url, self.pricing_url.as_deref());
        merge_optional(&mut entry.affiliate_url, self.affiliate_url.as_deref());
        merge_optional(&mut entry.api_url, self.api_url.as_deref());
        merge_optional(&mut entry.replaced_by, self.replaced_by.as_deref());
        merge_optional(
            &mut entry.replacement_reason,
            self.replacement_reason.as_deref(),
        );
    }
}

/// Case-insensitive, whitespace-trimmed name equality.
pub fn names_equal(left: &str, right: &str) -> bool {
    left.trim().to_lowercase() == right.trim().to_lowercase()
}

fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_string)
}

fn merge_optional(target: &mut Option<String>, provided: Option<&str>) {
    if provided.is_some() {
        *target = normalize_optional(provided);
    }
}
