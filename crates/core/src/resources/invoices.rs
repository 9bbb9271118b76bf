//! Invoice operations

use recurly_domain::constants::{ACCOUNTS, ACTION_MARK_FAILED, ACTION_MARK_SUCCESSFUL, INVOICES};
use recurly_domain::{Addressable, Invoice, Result};

use crate::client::{Client, Pager};
use crate::http::{HttpMethod, QueryParams, Transport};

impl<T: Transport> Client<T> {
    /// List invoices; `params` may filter by `state`.
    pub fn list_invoices(&self, params: &QueryParams) -> Result<Pager<'_, Invoice, T>> {
        self.list(INVOICES.to_string(), None, params)
    }

    pub fn list_account_invoices(&self, account_code: &str, params: &QueryParams) -> Result<Pager<'_, Invoice, T>> {
        let code = self.require(Some(account_code), "account code")?;
        self.list(format!("{ACCOUNTS}/{code}/{INVOICES}"), Some(code), params)
    }

    pub fn get_invoice(&self, invoice_number: &str) -> Result<Invoice> {
        let number = self.require(Some(invoice_number), "invoice number")?;
        self.fetch(&Invoice::item_path(number), &QueryParams::new())
    }

    /// Invoice every pending charge on the account.
    pub fn invoice_pending_charges(&self, account_code: &str) -> Result<Invoice> {
        let code = self.require(Some(account_code), "account code")?;
        let mut invoice = Invoice::default();
        let path = format!("{ACCOUNTS}/{code}/{INVOICES}");
        self.act(HttpMethod::Post, &path, &QueryParams::new(), &mut invoice)?;
        Ok(invoice)
    }

    /// Record an out-of-band payment for the invoice.
    pub fn mark_invoice_successful(&self, invoice: &mut Invoice) -> Result<()> {
        self.mark_invoice(invoice, ACTION_MARK_SUCCESSFUL)
    }

    /// Record a failed out-of-band collection for the invoice.
    pub fn mark_invoice_failed(&self, invoice: &mut Invoice) -> Result<()> {
        self.mark_invoice(invoice, ACTION_MARK_FAILED)
    }

    fn mark_invoice(&self, invoice: &mut Invoice, action: &str) -> Result<()> {
        self.require(Some(invoice.uuid.as_str()), "invoice uuid")?;
        let number = self.require(Some(invoice.invoice_number.as_str()), "invoice number")?;
        let path = format!("{}/{action}", Invoice::item_path(number));
        self.act(HttpMethod::Put, &path, &QueryParams::new(), invoice)
    }
}
