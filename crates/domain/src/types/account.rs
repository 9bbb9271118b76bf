//! Customer accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::ACCOUNTS;
use crate::macros::xml_collection;
use crate::resource::{Addressable, Resource, ResourceKind};
use crate::types::billing_info::BillingInfo;
use crate::utils::serde_helpers::xml_datetime;
use crate::utils::Reference;

/// Account state reported once an account has been closed.
pub const ACCOUNT_STATE_CLOSED: &str = "closed";

/// A customer account, keyed by the caller-chosen `account_code`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "account")]
pub struct Account {
    #[serde(default)]
    pub account_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub company_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub accept_language: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hosted_login_token: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "xml_datetime::deserialize"
    )]
    pub created_at: Option<DateTime<Utc>>,
    /// Billing info to create along with the account. Never filled from a
    /// response; see [`Account::billing_info_link`].
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub billing_info: Option<BillingInfo>,
    /// Link to the account's billing info as reported by the server. Its
    /// trailing segment is not the account code, so load the record through
    /// the client's `load_billing_info` rather than resolving the link.
    #[serde(rename(deserialize = "billing_info"), default, skip_serializing)]
    pub billing_info_link: Option<Reference<BillingInfo>>,
}

xml_collection!(
    /// Collection document for accounts.
    Accounts,
    "accounts",
    Account,
    "account"
);

impl Account {
    pub fn new(account_code: impl Into<String>) -> Self {
        Self { account_code: account_code.into(), ..Self::default() }
    }

    pub fn is_closed(&self) -> bool {
        self.state == ACCOUNT_STATE_CLOSED
    }

    /// Payload sent on update: the record minus server-managed fields.
    ///
    /// Billing info is updated through its own endpoint, and sending the
    /// state of a closed account back would be rejected.
    pub fn update_payload(&self) -> Self {
        Self {
            state: String::new(),
            hosted_login_token: String::new(),
            created_at: None,
            billing_info: None,
            ..self.clone()
        }
    }

    /// Payload sent on create, standalone or embedded in a subscription or
    /// transaction. Billing info rides along.
    pub fn create_payload(&self) -> Self {
        Self {
            state: String::new(),
            hosted_login_token: String::new(),
            created_at: None,
            ..self.clone()
        }
    }
}

impl Resource for Account {
    const KIND: ResourceKind = ResourceKind::Account;
    const ROOT: &'static str = "account";
    const COLLECTION_ROOT: &'static str = "accounts";
    type Collection = Accounts;

    fn is_persisted(&self) -> bool {
        self.created_at.is_some()
    }
}

impl Addressable for Account {
    fn item_path(id: &str) -> String {
        format!("{ACCOUNTS}/{id}")
    }
}
