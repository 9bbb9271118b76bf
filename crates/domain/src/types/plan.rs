//! Subscription plans

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::PLANS;
use crate::macros::xml_collection;
use crate::resource::{Addressable, Resource, ResourceKind};
use crate::utils::serde_helpers::{is_false, is_zero, xml_datetime};
use crate::utils::CurrencyAmounts;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "plan")]
pub struct Plan {
    #[serde(default)]
    pub plan_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub success_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cancel_url: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub display_donation_amounts: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub display_quantity: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub display_phone_number: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bypass_hosted_confirmation: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub unit_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub payment_page_tos_link: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub plan_interval_length: i64,
    /// `days` or `months`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub plan_interval_unit: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub trial_interval_length: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub trial_interval_unit: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub total_billing_cycles: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub accounting_code: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "xml_datetime::deserialize"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "CurrencyAmounts::is_empty")]
    pub unit_amount_in_cents: CurrencyAmounts,
    #[serde(default, skip_serializing_if = "CurrencyAmounts::is_empty")]
    pub setup_fee_in_cents: CurrencyAmounts,
}

xml_collection!(Plans, "plans", Plan, "plan");

impl Plan {
    /// A monthly plan priced in the given currencies.
    pub fn monthly(code: impl Into<String>, name: impl Into<String>, unit_amounts: CurrencyAmounts) -> Self {
        Self {
            plan_code: code.into(),
            name: name.into(),
            plan_interval_length: 1,
            plan_interval_unit: "months".into(),
            unit_amount_in_cents: unit_amounts,
            ..Self::default()
        }
    }

    /// Payload sent on create and update: the record minus `created_at`.
    pub fn write_payload(&self) -> Self {
        Self { created_at: None, ..self.clone() }
    }
}

impl Resource for Plan {
    const KIND: ResourceKind = ResourceKind::Plan;
    const ROOT: &'static str = "plan";
    const COLLECTION_ROOT: &'static str = "plans";
    type Collection = Plans;

    fn is_persisted(&self) -> bool {
        self.created_at.is_some()
    }
}

impl Addressable for Plan {
    fn item_path(id: &str) -> String {
        format!("{PLANS}/{id}")
    }
}
