//! Payment transactions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::TRANSACTIONS;
use crate::errors::{ApiError, Result};
use crate::macros::xml_collection;
use crate::resource::{Addressable, Resource, ResourceKind};
use crate::types::account::Account;
use crate::types::invoice::Invoice;
use crate::types::subscription::Subscription;
use crate::utils::serde_helpers::{is_false, is_zero, xml_datetime};
use crate::utils::Reference;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "transaction")]
pub struct Transaction {
    /// Payment method family (`credit_card`, `paypal`); an attribute.
    #[serde(rename = "@type", default, skip_serializing_if = "String::is_empty")]
    pub payment_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Reference<Account>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice: Option<Reference<Invoice>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Reference<Subscription>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uuid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub action: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub amount_in_cents: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub tax_in_cents: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub currency: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reference: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub recurring: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub test: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub voidable: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub refundable: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cvv_result: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub avs_result: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub avs_result_street: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub avs_result_postal: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "xml_datetime::deserialize"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// Account to charge, embedded on create.
    #[serde(skip)]
    pub new_account: Option<Account>,
}

xml_collection!(Transactions, "transactions", Transaction, "transaction");

impl Transaction {
    /// A one-time charge of `amount_in_cents`.
    pub fn charge(amount_in_cents: i64, currency: impl Into<String>) -> Self {
        Self { amount_in_cents, currency: currency.into(), ..Self::default() }
    }

    pub fn account_code(&self) -> Option<&str> {
        if let Some(code) = self.account.as_ref().and_then(Reference::code) {
            return Some(code);
        }
        self.new_account
            .as_ref()
            .map(|a| a.account_code.as_str())
            .filter(|code| !code.is_empty())
    }

    /// Embed the account (and its billing info) to charge.
    pub fn attach_account(&mut self, account: &Account) -> Result<()> {
        if self.is_persisted() {
            return Err(ApiError::already_exists(
                "transaction already created; cannot attach an account",
            )
            .into());
        }
        self.new_account = Some(account.create_payload());
        Ok(())
    }
}

impl Resource for Transaction {
    const KIND: ResourceKind = ResourceKind::Transaction;
    const ROOT: &'static str = "transaction";
    const COLLECTION_ROOT: &'static str = "transactions";
    type Collection = Transactions;

    fn is_persisted(&self) -> bool {
        !self.uuid.is_empty()
    }
}

impl Addressable for Transaction {
    fn item_path(id: &str) -> String {
        format!("{TRANSACTIONS}/{id}")
    }
}

/// Document posted to create a one-time transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "transaction")]
pub struct TransactionCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    pub amount_in_cents: i64,
    pub currency: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl From<&Transaction> for TransactionCreate {
    fn from(tx: &Transaction) -> Self {
        Self {
            account: tx.new_account.clone(),
            amount_in_cents: tx.amount_in_cents,
            currency: tx.currency.clone(),
            description: tx.description.clone(),
        }
    }
}
