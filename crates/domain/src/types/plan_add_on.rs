//! Add-ons offered on a plan

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{ADD_ONS, PLANS};
use crate::macros::xml_collection;
use crate::resource::{Resource, ResourceKind};
use crate::types::plan::Plan;
use crate::utils::serde_helpers::{is_false, is_zero, xml_datetime};
use crate::utils::{CurrencyAmounts, Reference};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "add_on")]
pub struct PlanAddOn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Reference<Plan>>,
    /// Code of the owning plan; never sent, bound by the client.
    #[serde(skip)]
    pub plan_code: String,
    #[serde(default)]
    pub add_on_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub display_quantity_on_hosted_page: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub default_quantity: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub accounting_code: String,
    #[serde(default, skip_serializing_if = "CurrencyAmounts::is_empty")]
    pub unit_amount_in_cents: CurrencyAmounts,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "xml_datetime::deserialize"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

xml_collection!(PlanAddOns, "add_ons", PlanAddOn, "add_on");

impl PlanAddOn {
    pub fn new(add_on_code: impl Into<String>, name: impl Into<String>, unit_amounts: CurrencyAmounts) -> Self {
        Self {
            add_on_code: add_on_code.into(),
            name: name.into(),
            unit_amount_in_cents: unit_amounts,
            ..Self::default()
        }
    }

    /// Code of the owning plan, from the bound code or the plan link.
    pub fn owner_code(&self) -> Option<&str> {
        if !self.plan_code.is_empty() {
            return Some(self.plan_code.as_str());
        }
        self.plan.as_ref().and_then(Reference::code)
    }

    /// Endpoint path of the add-on under its plan.
    pub fn path(plan_code: &str, add_on_code: &str) -> String {
        format!("{PLANS}/{plan_code}/{ADD_ONS}/{add_on_code}")
    }

    /// Payload sent on create and update.
    pub fn write_payload(&self) -> Self {
        Self { plan: None, plan_code: String::new(), created_at: None, ..self.clone() }
    }
}

impl Resource for PlanAddOn {
    const KIND: ResourceKind = ResourceKind::PlanAddOn;
    const ROOT: &'static str = "add_on";
    const COLLECTION_ROOT: &'static str = "add_ons";
    type Collection = PlanAddOns;

    fn is_persisted(&self) -> bool {
        self.created_at.is_some()
    }

    fn bind_parent(&mut self, parent: &str) {
        self.plan_code = parent.to_string();
    }
}
