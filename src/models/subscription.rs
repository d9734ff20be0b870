//! Azure subscription model.

use serde::{Deserialize, Serialize};

/// Subscription as returned by `az account list`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    /// Subscription id (GUID).
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// `Enabled`, `Disabled`, `Warned`, `PastDue` ...
    #[serde(default)]
    pub state: String,
}

impl Subscription {
    pub fn is_enabled(&self) -> bool {
        self.state.eq_ignore_ascii_case("enabled")
    }
}
