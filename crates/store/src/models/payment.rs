//! Payment method records.

use std::collections::BTreeMap;

use lipoimports_core::{PaymentMethodId, PaymentProvider};
use serde::{Deserialize, Serialize};

use crate::collection::Entity;
use crate::storage::keys;

/// A payment integration stub.
///
/// The `config` map holds provider credentials intended for a future backend;
/// values are persisted as plain strings, exactly as entered. The collection
/// is fixed: methods are toggled and reconfigured but never added or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    pub name: String,
    #[serde(rename = "type")]
    pub provider: PaymentProvider,
    pub enabled: bool,
    pub config: BTreeMap<String, String>,
}

impl Entity for PaymentMethod {
    type Id = PaymentMethodId;
    const STORAGE_KEY: &'static str = keys::PAYMENTS;

    fn id(&self) -> &PaymentMethodId {
        &self.id
    }
}

/// Field-by-field patch for a payment method. A provided `config` replaces
/// the whole map.
#[derive(Debug, Clone, Default)]
pub struct PaymentMethodPatch {
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub config: Option<BTreeMap<String, String>>,
}

impl PaymentMethodPatch {
    pub fn apply(self, method: &mut PaymentMethod) {
        if let Some(name) = self.name {
            method.name = name;
        }
        if let Some(enabled) = self.enabled {
            method.enabled = enabled;
        }
        if let Some(config) = self.config {
            method.config = config;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_uses_type_field() {
        let method = PaymentMethod {
            id: PaymentMethodId::new("pm-1"),
            name: "PIX".into(),
            provider: PaymentProvider::Pix,
            enabled: true,
            config: BTreeMap::new(),
        };
        let json = serde_json::to_value(&method).unwrap();
        assert_eq!(json.get("type").and_then(|v| v.as_str()), Some("pix"));
        assert!(json.get("provider").is_none());
    }
}
