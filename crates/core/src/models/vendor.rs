//! Vendor profiles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Email, Rating, Timestamp, UserId, VendorId};

/// How buyers reach a vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorContact {
    pub email: Email,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A seller profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: VendorId,
    /// User who onboarded the vendor and may edit the profile.
    pub owner_id: UserId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub contact: VendorContact,
    /// Platform name (e.g. `instagram`) to profile URL.
    #[serde(default)]
    pub social_links: BTreeMap<String, String>,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub review_count: u32,
    /// Set by marketplace staff after checking the vendor's documents.
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Timestamp,
}

impl Vendor {
    /// Whether `user` may edit this profile.
    #[must_use]
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner_id == user
    }

    /// Profile URL for a social platform, matched case-insensitively.
    #[must_use]
    pub fn social_link(&self, platform: &str) -> Option<&str> {
        self.social_links
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(platform))
            .map(|(_, url)| url.as_str())
    }
}
