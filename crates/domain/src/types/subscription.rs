//! Subscriptions, their add-ons and the payloads that change them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::SUBSCRIPTIONS;
use crate::errors::{ApiError, Result};
use crate::impl_domain_status_conversions;
use crate::macros::xml_collection;
use crate::resource::{Addressable, Resource, ResourceKind};
use crate::types::account::Account;
use crate::types::plan::Plan;
use crate::utils::serde_helpers::{as_display, is_zero, xml_datetime};
use crate::utils::Reference;

/// When a subscription change takes effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Timeframe {
    #[default]
    Now,
    Renewal,
}

impl_domain_status_conversions!(Timeframe {
    Now => "now",
    Renewal => "renewal",
});

/// How much of the current period to refund on termination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RefundType {
    #[default]
    None,
    Partial,
    Full,
}

impl_domain_status_conversions!(RefundType {
    None => "none",
    Partial => "partial",
    Full => "full",
});

/// One add-on line of a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "subscription_add_on")]
pub struct SubscriptionAddOn {
    #[serde(default)]
    pub add_on_code: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub unit_amount_in_cents: i64,
}

/// The add-on lines of a subscription, unique by `add_on_code`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionAddOns {
    #[serde(rename = "subscription_add_on", default)]
    pub add_ons: Vec<SubscriptionAddOn>,
}

impl SubscriptionAddOns {
    /// Insert `add_on`, replacing any line with the same code.
    pub fn upsert(&mut self, add_on: SubscriptionAddOn) {
        match self.add_ons.iter_mut().find(|a| a.add_on_code == add_on.add_on_code) {
            Some(existing) => *existing = add_on,
            None => self.add_ons.push(add_on),
        }
    }

    pub fn remove(&mut self, add_on_code: &str) -> Option<SubscriptionAddOn> {
        let index = self.add_ons.iter().position(|a| a.add_on_code == add_on_code)?;
        Some(self.add_ons.remove(index))
    }

    pub fn get(&self, add_on_code: &str) -> Option<&SubscriptionAddOn> {
        self.add_ons.iter().find(|a| a.add_on_code == add_on_code)
    }

    pub fn len(&self) -> usize {
        self.add_ons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.add_ons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubscriptionAddOn> {
        self.add_ons.iter()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "subscription")]
pub struct Subscription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Reference<Account>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Reference<Plan>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uuid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub unit_amount_in_cents: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub currency: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub quantity: i64,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "xml_datetime::deserialize"
    )]
    pub activated_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "xml_datetime::deserialize"
    )]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "xml_datetime::deserialize"
    )]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "xml_datetime::deserialize"
    )]
    pub current_period_started_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "xml_datetime::deserialize"
    )]
    pub current_period_ends_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "xml_datetime::deserialize"
    )]
    pub trial_started_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "xml_datetime::deserialize"
    )]
    pub trial_ends_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub total_billing_cycles: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub remaining_billing_cycles: i64,
    #[serde(default, skip_serializing_if = "SubscriptionAddOns::is_empty")]
    pub subscription_add_ons: SubscriptionAddOns,

    // Create and update inputs; the server reports them through the links
    // above instead.
    #[serde(skip)]
    pub plan_code: String,
    #[serde(skip)]
    pub coupon_code: String,
    #[serde(skip)]
    pub new_account: Option<Account>,
    #[serde(skip)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub first_renewal_date: Option<DateTime<Utc>>,
}

xml_collection!(Subscriptions, "subscriptions", Subscription, "subscription");

impl Subscription {
    /// A new subscription to `plan_code` in `currency`.
    pub fn new(plan_code: impl Into<String>, currency: impl Into<String>) -> Self {
        Self { plan_code: plan_code.into(), currency: currency.into(), ..Self::default() }
    }

    /// Plan code, from the input field or the plan link.
    pub fn plan_code(&self) -> Option<&str> {
        if !self.plan_code.is_empty() {
            return Some(self.plan_code.as_str());
        }
        self.plan.as_ref().and_then(Reference::code)
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

    /// Embed a full account to be created along with the subscription.
    pub fn attach_account(&mut self, account: &Account) -> Result<()> {
        self.ensure_unsaved()?;
        self.new_account = Some(account.create_payload());
        Ok(())
    }

    /// Subscribe an account that already exists; only its code is sent.
    pub fn attach_existing_account(&mut self, account_code: impl Into<String>) -> Result<()> {
        self.ensure_unsaved()?;
        self.new_account = Some(Account::new(account_code));
        Ok(())
    }

    fn ensure_unsaved(&self) -> Result<()> {
        if self.is_persisted() {
            return Err(ApiError::already_exists(
                "subscription already created; cannot attach an account",
            )
            .into());
        }
        Ok(())
    }
}

impl Resource for Subscription {
    const KIND: ResourceKind = ResourceKind::Subscription;
    const ROOT: &'static str = "subscription";
    const COLLECTION_ROOT: &'static str = "subscriptions";
    type Collection = Subscriptions;

    fn is_persisted(&self) -> bool {
        !self.uuid.is_empty()
    }
}

impl Addressable for Subscription {
    fn item_path(id: &str) -> String {
        format!("{SUBSCRIPTIONS}/{id}")
    }
}

/// Document posted to create a subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "subscription")]
pub struct SubscriptionCreate {
    pub plan_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub coupon_code: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub unit_amount_in_cents: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub currency: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    #[serde(skip_serializing_if = "SubscriptionAddOns::is_empty")]
    pub subscription_add_ons: SubscriptionAddOns,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_ends_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_renewal_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "is_zero")]
    pub total_billing_cycles: i64,
}

impl From<&Subscription> for SubscriptionCreate {
    fn from(sub: &Subscription) -> Self {
        Self {
            plan_code: sub.plan_code().unwrap_or_default().to_string(),
            coupon_code: sub.coupon_code.clone(),
            unit_amount_in_cents: sub.unit_amount_in_cents,
            currency: sub.currency.clone(),
            quantity: sub.quantity,
            account: sub.new_account.clone(),
            subscription_add_ons: sub.subscription_add_ons.clone(),
            trial_ends_at: sub.trial_ends_at,
            starts_at: sub.starts_at,
            first_renewal_date: sub.first_renewal_date,
            total_billing_cycles: sub.total_billing_cycles,
        }
    }
}

/// Document sent to change a subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "subscription")]
pub struct SubscriptionUpdate {
    #[serde(serialize_with = "as_display")]
    pub timeframe: Timeframe,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub plan_code: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub unit_amount_in_cents: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub quantity: i64,
    #[serde(skip_serializing_if = "SubscriptionAddOns::is_empty")]
    pub subscription_add_ons: SubscriptionAddOns,
}

impl SubscriptionUpdate {
    /// Changes requested through the subscription's input fields.
    ///
    /// A plan change is only sent when `plan_code` was set explicitly; the
    /// plan link alone names the current plan.
    pub fn from_subscription(sub: &Subscription, timeframe: Timeframe) -> Self {
        Self {
            timeframe,
            plan_code: sub.plan_code.clone(),
            unit_amount_in_cents: sub.unit_amount_in_cents,
            quantity: sub.quantity,
            subscription_add_ons: sub.subscription_add_ons.clone(),
        }
    }
}
