//! Invoices

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::INVOICES;
use crate::macros::xml_collection;
use crate::resource::{Addressable, Resource, ResourceKind};
use crate::types::account::Account;
use crate::types::adjustment::Adjustment;
use crate::types::transaction::Transaction;
use crate::utils::serde_helpers::{is_zero, xml_datetime};
use crate::utils::Reference;

/// Adjustments billed on an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItems {
    #[serde(rename = "adjustment", default)]
    pub adjustments: Vec<Adjustment>,
}

impl LineItems {
    pub fn is_empty(&self) -> bool {
        self.adjustments.is_empty()
    }
}

/// Payments collected against an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTransactions {
    #[serde(rename = "transaction", default)]
    pub transactions: Vec<Transaction>,
}

impl InvoiceTransactions {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// An invoice, addressed by its sequential `invoice_number`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "invoice")]
pub struct Invoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Reference<Account>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uuid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub invoice_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub po_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vat_number: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub subtotal_in_cents: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub tax_in_cents: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub total_in_cents: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub currency: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "xml_datetime::deserialize"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "LineItems::is_empty")]
    pub line_items: LineItems,
    #[serde(default, skip_serializing_if = "InvoiceTransactions::is_empty")]
    pub transactions: InvoiceTransactions,
}

xml_collection!(Invoices, "invoices", Invoice, "invoice");

impl Invoice {
    pub fn account_code(&self) -> Option<&str> {
        self.account.as_ref().and_then(Reference::code)
    }
}

impl Resource for Invoice {
    const KIND: ResourceKind = ResourceKind::Invoice;
    const ROOT: &'static str = "invoice";
    const COLLECTION_ROOT: &'static str = "invoices";
    type Collection = Invoices;

    fn is_persisted(&self) -> bool {
        !self.uuid.is_empty()
    }
}

impl Addressable for Invoice {
    fn item_path(id: &str) -> String {
        format!("{INVOICES}/{id}")
    }
}
