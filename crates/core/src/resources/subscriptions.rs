//! Subscription lifecycle

use chrono::{DateTime, SecondsFormat, Utc};
use recurly_domain::constants::{
    ACCOUNTS, ACTION_CANCEL, ACTION_POSTPONE, ACTION_REACTIVATE, ACTION_TERMINATE,
    PARAM_NEXT_RENEWAL_DATE, PARAM_REFUND, SUBSCRIPTIONS,
};
use recurly_domain::{
    Addressable, RefundType, Result, Subscription, SubscriptionCreate, SubscriptionUpdate, Timeframe,
};

use crate::client::{Client, Pager};
use crate::http::{HttpMethod, QueryParams, Transport};

impl<T: Transport> Client<T> {
    /// List subscriptions; `params` may filter by `state`.
    pub fn list_subscriptions(&self, params: &QueryParams) -> Result<Pager<'_, Subscription, T>> {
        self.list(SUBSCRIPTIONS.to_string(), None, params)
    }

    pub fn list_account_subscriptions(
        &self,
        account_code: &str,
        params: &QueryParams,
    ) -> Result<Pager<'_, Subscription, T>> {
        let code = self.require(Some(account_code), "account code")?;
        self.list(format!("{ACCOUNTS}/{code}/{SUBSCRIPTIONS}"), Some(code), params)
    }

    pub fn get_subscription(&self, uuid: &str) -> Result<Subscription> {
        let uuid = self.require(Some(uuid), "subscription uuid")?;
        self.fetch(&Subscription::item_path(uuid), &QueryParams::new())
    }

    /// Create `subscription` for its attached account.
    ///
    /// Requires a plan code and an account (see
    /// [`Subscription::attach_account`]).
    pub fn create_subscription(&self, subscription: &mut Subscription) -> Result<()> {
        self.ensure_new(subscription)?;
        self.require(subscription.plan_code(), "subscription plan code")?;
        self.require(subscription.account_code(), "subscription account")?;
        let payload = SubscriptionCreate::from(&*subscription);
        self.create(SUBSCRIPTIONS, &payload, subscription)
    }

    /// Apply plan, quantity, price and add-on changes now or at renewal.
    pub fn update_subscription(&self, subscription: &mut Subscription, timeframe: Timeframe) -> Result<()> {
        let path = self.subscription_path(subscription, None)?;
        let payload = SubscriptionUpdate::from_subscription(subscription, timeframe);
        self.update(&path, &payload, subscription)
    }

    /// Cancel at the end of the current period.
    pub fn cancel_subscription(&self, subscription: &mut Subscription) -> Result<()> {
        let path = self.subscription_path(subscription, Some(ACTION_CANCEL))?;
        self.act(HttpMethod::Put, &path, &QueryParams::new(), subscription)
    }

    /// Undo a cancellation before the period ends.
    pub fn reactivate_subscription(&self, subscription: &mut Subscription) -> Result<()> {
        let path = self.subscription_path(subscription, Some(ACTION_REACTIVATE))?;
        self.act(HttpMethod::Put, &path, &QueryParams::new(), subscription)
    }

    /// Move the next renewal to `next_renewal`.
    pub fn postpone_subscription(&self, subscription: &mut Subscription, next_renewal: DateTime<Utc>) -> Result<()> {
        let path = self.subscription_path(subscription, Some(ACTION_POSTPONE))?;
        let query = QueryParams::new().with(
            PARAM_NEXT_RENEWAL_DATE,
            next_renewal.to_rfc3339_opts(SecondsFormat::Secs, true),
        );
        self.act(HttpMethod::Put, &path, &query, subscription)
    }

    /// End the subscription immediately, refunding as requested.
    pub fn terminate_subscription(&self, subscription: &mut Subscription, refund: RefundType) -> Result<()> {
        let path = self.subscription_path(subscription, Some(ACTION_TERMINATE))?;
        let query = QueryParams::new().with(PARAM_REFUND, refund.as_str());
        self.act(HttpMethod::Put, &path, &query, subscription)
    }

    /// Remove the subscription record outright. Use
    /// [`Client::terminate_subscription`] to end billing with a refund.
    pub fn delete_subscription(&self, uuid: &str) -> Result<()> {
        let uuid = self.require(Some(uuid), "subscription uuid")?;
        self.delete(&Subscription::item_path(uuid), &QueryParams::new())
    }

    fn subscription_path(&self, subscription: &Subscription, action: Option<&str>) -> Result<String> {
        let item = Subscription::item_path(self.require(Some(subscription.uuid.as_str()), "subscription uuid")?);
        Ok(match action {
            Some(action) => format!("{item}/{action}"),
            None => item,
        })
    }
}
