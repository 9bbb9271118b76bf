//! Stored payment details of an account

use serde::{Deserialize, Serialize};

use crate::constants::{ACCOUNTS, BILLING_INFO};
use crate::macros::xml_collection;
use crate::resource::{Addressable, Resource, ResourceKind};
use crate::types::account::Account;
use crate::utils::serde_helpers::is_zero_u32;
use crate::utils::Reference;

/// Card or billing-agreement details attached to one account.
///
/// The server never returns the full card number; `first_six`, `last_four`
/// and `card_type` are read-only echoes of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "billing_info")]
pub struct BillingInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Reference<Account>>,
    /// Code of the owning account; never sent, bound by the client.
    #[serde(skip)]
    pub account_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub company: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address1: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address2: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zip: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vat_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ip_address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ip_address_country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub verification_value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_six: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_four: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub card_type: String,
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub month: u32,
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub year: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub billing_agreement_id: String,
}

xml_collection!(BillingInfos, "billing_infos", BillingInfo, "billing_info");

impl BillingInfo {
    /// Code of the owning account, from the bound code or the account link.
    pub fn owner_code(&self) -> Option<&str> {
        if !self.account_code.is_empty() {
            return Some(self.account_code.as_str());
        }
        self.account.as_ref().and_then(Reference::code)
    }

    /// Payload sent on update: card echoes and the owner link removed.
    pub fn update_payload(&self) -> Self {
        Self {
            account: None,
            account_code: String::new(),
            first_six: String::new(),
            last_four: String::new(),
            card_type: String::new(),
            ..self.clone()
        }
    }
}

impl Resource for BillingInfo {
    const KIND: ResourceKind = ResourceKind::BillingInfo;
    const ROOT: &'static str = "billing_info";
    const COLLECTION_ROOT: &'static str = "billing_infos";
    type Collection = BillingInfos;

    fn is_persisted(&self) -> bool {
        !self.last_four.is_empty() || !self.billing_agreement_id.is_empty()
    }

    fn bind_parent(&mut self, parent: &str) {
        self.account_code = parent.to_string();
    }
}

/// Keyed by the owning account's code.
impl Addressable for BillingInfo {
    fn item_path(id: &str) -> String {
        format!("{ACCOUNTS}/{id}/{BILLING_INFO}")
    }
}
