//! Billing info operations

use recurly_domain::{Addressable, BillingInfo, Resource, Result};

use crate::client::Client;
use crate::http::{QueryParams, Transport};

impl<T: Transport> Client<T> {
    pub fn get_billing_info(&self, account_code: &str) -> Result<BillingInfo> {
        let code = self.require(Some(account_code), "account code")?;
        let mut billing: BillingInfo = self.fetch(&BillingInfo::item_path(code), &QueryParams::new())?;
        billing.bind_parent(code);
        Ok(billing)
    }

    /// Create or replace the billing info of its owning account.
    ///
    /// The owner comes from `account_code`, falling back to the account
    /// link. Card echoes (`first_six`, `last_four`, `card_type`) are never
    /// sent.
    pub fn update_billing_info(&self, billing: &mut BillingInfo) -> Result<()> {
        let code = self.require(billing.owner_code(), "billing info account code")?.to_string();
        let payload = billing.update_payload();
        self.update(&BillingInfo::item_path(&code), &payload, billing)?;
        billing.bind_parent(&code);
        Ok(())
    }

    /// Remove stored billing info from the account.
    pub fn delete_billing_info(&self, account_code: &str) -> Result<()> {
        let code = self.require(Some(account_code), "account code")?;
        self.delete(&BillingInfo::item_path(code), &QueryParams::new())
    }
}
