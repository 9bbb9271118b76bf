//! One-time transactions and refunds

use recurly_domain::constants::{ACCOUNTS, PARAM_AMOUNT_IN_CENTS, TRANSACTIONS};
use recurly_domain::{Addressable, Result, Transaction, TransactionCreate};

use crate::client::{Client, Pager};
use crate::http::{QueryParams, Transport};

impl<T: Transport> Client<T> {
    /// List transactions; `params` may filter by `state` and `type`.
    pub fn list_transactions(&self, params: &QueryParams) -> Result<Pager<'_, Transaction, T>> {
        self.list(TRANSACTIONS.to_string(), None, params)
    }

    pub fn list_account_transactions(
        &self,
        account_code: &str,
        params: &QueryParams,
    ) -> Result<Pager<'_, Transaction, T>> {
        let code = self.require(Some(account_code), "account code")?;
        self.list(format!("{ACCOUNTS}/{code}/{TRANSACTIONS}"), Some(code), params)
    }

    pub fn get_transaction(&self, uuid: &str) -> Result<Transaction> {
        let uuid = self.require(Some(uuid), "transaction uuid")?;
        self.fetch(&Transaction::item_path(uuid), &QueryParams::new())
    }

    /// Charge the attached account once.
    pub fn create_transaction(&self, transaction: &mut Transaction) -> Result<()> {
        self.ensure_new(transaction)?;
        self.require(transaction.account_code(), "transaction account")?;
        let payload = TransactionCreate::from(&*transaction);
        self.create(TRANSACTIONS, &payload, transaction)
    }

    /// Refund part of a transaction.
    pub fn refund_transaction(&self, uuid: &str, amount_in_cents: i64) -> Result<()> {
        let uuid = self.require(Some(uuid), "transaction uuid")?;
        let query = QueryParams::new().with(PARAM_AMOUNT_IN_CENTS, amount_in_cents.to_string());
        self.delete(&Transaction::item_path(uuid), &query)
    }

    /// Refund (or void) the whole transaction.
    pub fn refund_transaction_in_full(&self, uuid: &str) -> Result<()> {
        let uuid = self.require(Some(uuid), "transaction uuid")?;
        self.delete(&Transaction::item_path(uuid), &QueryParams::new())
    }
}
