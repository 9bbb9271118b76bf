//! Coupons and redemptions

use recurly_domain::constants::{COUPONS, REDEEM};
use recurly_domain::{Addressable, Coupon, Redemption, Resource, Result};

use crate::client::{Client, Pager};
use crate::http::{QueryParams, Transport};

impl<T: Transport> Client<T> {
    pub fn list_coupons(&self, params: &QueryParams) -> Result<Pager<'_, Coupon, T>> {
        self.list(COUPONS.to_string(), None, params)
    }

    pub fn get_coupon(&self, coupon_code: &str) -> Result<Coupon> {
        let code = self.require(Some(coupon_code), "coupon code")?;
        self.fetch(&Coupon::item_path(code), &QueryParams::new())
    }

    pub fn create_coupon(&self, coupon: &mut Coupon) -> Result<()> {
        self.ensure_new(coupon)?;
        let payload = coupon.create_payload();
        self.create(COUPONS, &payload, coupon)
    }

    /// Stop further redemptions; existing redemptions stay active.
    pub fn deactivate_coupon(&self, coupon_code: &str) -> Result<()> {
        let code = self.require(Some(coupon_code), "coupon code")?;
        self.delete(&Coupon::item_path(code), &QueryParams::new())
    }

    /// Redeem `coupon_code` for an account, returning the redemption.
    pub fn redeem_coupon(&self, coupon_code: &str, account_code: &str, currency: &str) -> Result<Redemption> {
        let code = self.require(Some(coupon_code), "coupon code")?;
        let account = self.require(Some(account_code), "account code")?;
        let payload = Redemption::request(account, currency);
        let mut redemption = Redemption::default();
        self.create(&format!("{}/{REDEEM}", Coupon::item_path(code)), &payload, &mut redemption)?;
        redemption.bind_parent(account);
        Ok(redemption)
    }

    /// The active redemption on an account.
    pub fn get_redemption(&self, account_code: &str) -> Result<Redemption> {
        let code = self.require(Some(account_code), "account code")?;
        let mut redemption: Redemption = self.fetch(&Redemption::item_path(code), &QueryParams::new())?;
        redemption.bind_parent(code);
        Ok(redemption)
    }

    /// Remove the active coupon from an account.
    pub fn delete_redemption(&self, account_code: &str) -> Result<()> {
        let code = self.require(Some(account_code), "account code")?;
        self.delete(&Redemption::item_path(code), &QueryParams::new())
    }
}
