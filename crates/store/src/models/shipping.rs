//! Shipping integration records.

use std::collections::BTreeMap;

use lipoimports_core::{ShippingCarrier, ShippingIntegrationId};
use serde::{Deserialize, Serialize};

use crate::collection::Entity;
use crate::storage::keys;

/// A shipping carrier integration stub.
///
/// Like payment methods: a fixed collection with plaintext credential config,
/// toggled and reconfigured but never added or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingIntegration {
    pub id: ShippingIntegrationId,
    pub name: String,
    #[serde(rename = "type")]
    pub carrier: ShippingCarrier,
    pub enabled: bool,
    pub config: BTreeMap<String, String>,
}

impl Entity for ShippingIntegration {
    type Id = ShippingIntegrationId;
    const STORAGE_KEY: &'static str = keys::SHIPPING;

    fn id(&self) -> &ShippingIntegrationId {
        &self.id
    }
}

/// Field-by-field patch for a shipping integration. A provided `config`
/// replaces the whole map.
#[derive(Debug, Clone, Default)]
pub struct ShippingIntegrationPatch {
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub config: Option<BTreeMap<String, String>>,
}

impl ShippingIntegrationPatch {
    pub fn apply(self, integration: &mut ShippingIntegration) {
        if let Some(name) = self.name {
            integration.name = name;
        }
        if let Some(enabled) = self.enabled {
            integration.enabled = enabled;
        }
        if let Some(config) = self.config {
            integration.config = config;
        }
    }
}
