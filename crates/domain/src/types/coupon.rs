//! Discount coupons and their redemptions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{ACCOUNTS, COUPONS, REDEMPTION};
use crate::macros::xml_collection;
use crate::resource::{Addressable, Resource, ResourceKind};
use crate::types::account::Account;
use crate::utils::serde_helpers::{is_false, is_zero, xml_datetime};
use crate::utils::{CurrencyAmounts, Reference};

/// Plan codes a coupon is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCodes {
    #[serde(rename = "plan_code", default)]
    pub codes: Vec<String>,
}

impl PlanCodes {
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "coupon")]
pub struct Coupon {
    #[serde(default)]
    pub coupon_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hosted_description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub invoice_description: String,
    /// `percent` or `dollars`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub discount_type: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub discount_percent: i64,
    #[serde(default, skip_serializing_if = "CurrencyAmounts::is_empty")]
    pub discount_in_cents: CurrencyAmounts,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "xml_datetime::deserialize"
    )]
    pub redeem_by_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub single_use: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub applies_for_months: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_redemptions: i64,
    #[serde(default, skip_serializing_if = "is_false")]
    pub applies_to_all_plans: bool,
    #[serde(default, skip_serializing_if = "PlanCodes::is_empty")]
    pub plan_codes: PlanCodes,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "xml_datetime::deserialize"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

xml_collection!(Coupons, "coupons", Coupon, "coupon");

impl Coupon {
    /// A percentage coupon.
    pub fn percent(code: impl Into<String>, name: impl Into<String>, percent: i64) -> Self {
        Self {
            coupon_code: code.into(),
            name: name.into(),
            discount_type: "percent".into(),
            discount_percent: percent,
            ..Self::default()
        }
    }

    /// A fixed-amount coupon; amounts are per currency.
    pub fn fixed(code: impl Into<String>, name: impl Into<String>, amounts: CurrencyAmounts) -> Self {
        Self {
            coupon_code: code.into(),
            name: name.into(),
            discount_type: "dollars".into(),
            discount_in_cents: amounts,
            ..Self::default()
        }
    }

    /// Payload sent on create: the record minus server-managed fields.
    pub fn create_payload(&self) -> Self {
        Self { state: String::new(), created_at: None, ..self.clone() }
    }
}

impl Resource for Coupon {
    const KIND: ResourceKind = ResourceKind::Coupon;
    const ROOT: &'static str = "coupon";
    const COLLECTION_ROOT: &'static str = "coupons";
    type Collection = Coupons;

    fn is_persisted(&self) -> bool {
        self.created_at.is_some()
    }
}

impl Addressable for Coupon {
    fn item_path(id: &str) -> String {
        format!("{COUPONS}/{id}")
    }
}

/// A coupon applied to an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "redemption")]
pub struct Redemption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon: Option<Reference<Coupon>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Reference<Account>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub account_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uuid: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub single_use: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub total_discounted_in_cents: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub currency: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "xml_datetime::deserialize"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

xml_collection!(Redemptions, "redemptions", Redemption, "redemption");

impl Redemption {
    /// Payload posted to redeem a coupon for an account.
    pub fn request(account_code: impl Into<String>, currency: impl Into<String>) -> Self {
        Self { account_code: account_code.into(), currency: currency.into(), ..Self::default() }
    }

    pub fn coupon_code(&self) -> Option<&str> {
        self.coupon.as_ref().and_then(Reference::code)
    }
}

impl Resource for Redemption {
    const KIND: ResourceKind = ResourceKind::Redemption;
    const ROOT: &'static str = "redemption";
    const COLLECTION_ROOT: &'static str = "redemptions";
    type Collection = Redemptions;

    fn is_persisted(&self) -> bool {
        self.created_at.is_some()
    }

    fn bind_parent(&mut self, parent: &str) {
        if self.account_code.is_empty() {
            self.account_code = parent.to_string();
        }
    }
}

/// Keyed by the redeeming account's code.
impl Addressable for Redemption {
    fn item_path(id: &str) -> String {
        format!("{ACCOUNTS}/{id}/{REDEMPTION}")
    }
}
