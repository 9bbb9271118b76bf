//! Account operations

use recurly_domain::constants::{ACCOUNTS, ACTION_REOPEN};
use recurly_domain::{Account, Addressable, Result};

use crate::client::{Client, Pager};
use crate::http::{HttpMethod, QueryParams, Transport};

impl<T: Transport> Client<T> {
    /// List accounts; `params` may filter by `state` and set `per_page`.
    pub fn list_accounts(&self, params: &QueryParams) -> Result<Pager<'_, Account, T>> {
        self.list(ACCOUNTS.to_string(), None, params)
    }

    pub fn get_account(&self, account_code: &str) -> Result<Account> {
        let code = self.require(Some(account_code), "account code")?;
        self.fetch(&Account::item_path(code), &QueryParams::new())
    }

    /// Create `account`; on success it is replaced by the server's copy.
    ///
    /// Billing info sent along is not echoed back; load it separately with
    /// [`Client::load_billing_info`].
    pub fn create_account(&self, account: &mut Account) -> Result<()> {
        self.ensure_new(account)?;
        let payload = account.create_payload();
        self.create(ACCOUNTS, &payload, account)?;
        account.billing_info = None;
        Ok(())
    }

    /// Update `account`, sending everything except server-managed fields.
    pub fn update_account(&self, account: &mut Account) -> Result<()> {
        let path = Account::item_path(self.require(Some(account.account_code.as_str()), "account code")?);
        let payload = account.update_payload();
        self.update(&path, &payload, account)
    }

    /// Close the account. Its subscriptions are canceled by the server.
    pub fn close_account(&self, account_code: &str) -> Result<()> {
        let code = self.require(Some(account_code), "account code")?;
        self.delete(&Account::item_path(code), &QueryParams::new())
    }

    pub fn reopen_account(&self, account: &mut Account) -> Result<()> {
        let code = self.require(Some(account.account_code.as_str()), "account code")?;
        let path = format!("{}/{ACTION_REOPEN}", Account::item_path(code));
        self.act(HttpMethod::Put, &path, &QueryParams::new(), account)
    }

    /// Fetch the account's billing info into `account.billing_info`.
    pub fn load_billing_info(&self, account: &mut Account) -> Result<()> {
        let billing = self.get_billing_info(&account.account_code)?;
        account.billing_info = Some(billing);
        Ok(())
    }
}
