//! One-off charges and credits

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::ADJUSTMENTS;
use crate::macros::xml_collection;
use crate::resource::{Addressable, Resource, ResourceKind};
use crate::types::account::Account;
use crate::types::invoice::Invoice;
use crate::utils::serde_helpers::{is_false, is_zero, xml_datetime};
use crate::utils::Reference;

/// A charge or credit posted to an account.
///
/// Created against an account, after which the server assigns the `uuid`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "adjustment")]
pub struct Adjustment {
    /// `charge` or `credit`; reported as an attribute.
    #[serde(rename = "@type", default, skip_serializing_if = "String::is_empty")]
    pub adjustment_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Reference<Account>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice: Option<Reference<Invoice>>,
    /// Code of the account the adjustment is posted to; never sent.
    #[serde(skip)]
    pub account_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uuid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub accounting_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub origin: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub unit_amount_in_cents: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub discount_in_cents: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub tax_in_cents: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub total_in_cents: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub currency: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub taxable: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "xml_datetime::deserialize"
    )]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "xml_datetime::deserialize"
    )]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "xml_datetime::deserialize"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

xml_collection!(Adjustments, "adjustments", Adjustment, "adjustment");

impl Adjustment {
    /// A new charge of `unit_amount_in_cents` for `account_code`.
    pub fn charge(
        account_code: impl Into<String>,
        description: impl Into<String>,
        unit_amount_in_cents: i64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            account_code: account_code.into(),
            description: description.into(),
            unit_amount_in_cents,
            currency: currency.into(),
            ..Self::default()
        }
    }

    /// Code of the account the adjustment belongs to.
    pub fn owner_code(&self) -> Option<&str> {
        if !self.account_code.is_empty() {
            return Some(self.account_code.as_str());
        }
        self.account.as_ref().and_then(Reference::code)
    }

    /// Payload sent on create: only caller-settable fields.
    pub fn create_payload(&self) -> Self {
        Self {
            description: self.description.clone(),
            accounting_code: self.accounting_code.clone(),
            unit_amount_in_cents: self.unit_amount_in_cents,
            quantity: self.quantity,
            currency: self.currency.clone(),
            taxable: self.taxable,
            ..Self::default()
        }
    }
}

impl Resource for Adjustment {
    const KIND: ResourceKind = ResourceKind::Adjustment;
    const ROOT: &'static str = "adjustment";
    const COLLECTION_ROOT: &'static str = "adjustments";
    type Collection = Adjustments;

    fn is_persisted(&self) -> bool {
        !self.uuid.is_empty()
    }

    fn bind_parent(&mut self, parent: &str) {
        self.account_code = parent.to_string();
    }
}

impl Addressable for Adjustment {
    fn item_path(id: &str) -> String {
        format!("{ADJUSTMENTS}/{id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_has_no_identity() {
        let mut adjustment = Adjustment::charge("1", "Setup fee", 5000, "USD");
        adjustment.uuid = "626db120a84102b1809909071c701c60".into();
        let xml = quick_xml::se::to_string(&adjustment.create_payload()).unwrap();
        assert_eq!(
            xml,
            "<adjustment><description>Setup fee</description>\
             <unit_amount_in_cents>5000</unit_amount_in_cents>\
             <currency>USD</currency></adjustment>"
        );
    }

    #[test]
    fn decodes_type_attribute_and_links() {
        let xml = r#"<adjustment type="credit" href="https://api.recurly.com/v2/adjustments/abc">
            <account href="https://api.recurly.com/v2/accounts/100"/>
            <invoice href="https://api.recurly.com/v2/invoices/1108"/>
            <uuid>abc</uuid>
            <state>invoiced</state>
            <description>Refund for being a great customer</description>
            <unit_amount_in_cents>-2000</unit_amount_in_cents>
            <quantity>1</quantity>
            <currency>USD</currency>
            <taxable>false</taxable>
            <start_date>2011-08-31T03:30:00Z</start_date>
            <end_date nil="nil"></end_date>
        </adjustment>"#;
        let adjustment: Adjustment = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(adjustment.adjustment_type, "credit");
        assert_eq!(adjustment.owner_code(), Some("100"));
        assert_eq!(adjustment.invoice.as_ref().and_then(Reference::code), Some("1108"));
        assert_eq!(adjustment.unit_amount_in_cents, -2000);
        assert!(adjustment.start_date.is_some());
        assert!(adjustment.end_date.is_none());
        assert!(adjustment.is_persisted());
    }
}
