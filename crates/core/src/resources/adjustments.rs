//! Charges and credits

use recurly_domain::constants::{ACCOUNTS, ADJUSTMENTS};
use recurly_domain::{Addressable, Adjustment, Resource, Result};

use crate::client::{Client, Pager};
use crate::http::{QueryParams, Transport};

impl<T: Transport> Client<T> {
    pub fn list_adjustments(&self, params: &QueryParams) -> Result<Pager<'_, Adjustment, T>> {
        self.list(ADJUSTMENTS.to_string(), None, params)
    }

    /// Adjustments of one account; `params` may filter by `type` and `state`.
    pub fn list_account_adjustments(
        &self,
        account_code: &str,
        params: &QueryParams,
    ) -> Result<Pager<'_, Adjustment, T>> {
        let code = self.require(Some(account_code), "account code")?;
        self.list(format!("{ACCOUNTS}/{code}/{ADJUSTMENTS}"), Some(code), params)
    }

    pub fn get_adjustment(&self, uuid: &str) -> Result<Adjustment> {
        let uuid = self.require(Some(uuid), "adjustment uuid")?;
        self.fetch(&Adjustment::item_path(uuid), &QueryParams::new())
    }

    /// Post `adjustment` to its account.
    pub fn create_adjustment(&self, adjustment: &mut Adjustment) -> Result<()> {
        self.ensure_new(adjustment)?;
        let code = self.require(adjustment.owner_code(), "adjustment account code")?.to_string();
        let payload = adjustment.create_payload();
        self.create(&format!("{ACCOUNTS}/{code}/{ADJUSTMENTS}"), &payload, adjustment)?;
        adjustment.bind_parent(&code);
        Ok(())
    }

    /// Remove a pending adjustment.
    pub fn delete_adjustment(&self, uuid: &str) -> Result<()> {
        let uuid = self.require(Some(uuid), "adjustment uuid")?;
        self.delete(&Adjustment::item_path(uuid), &QueryParams::new())
    }
}
