//! Resource records
//!
//! One module per API resource. Every record decodes from and encodes to the
//! XML document rooted at its element name; zero-valued and empty fields are
//! left out of encoded payloads.

pub mod account;
pub mod adjustment;
pub mod billing_info;
pub mod coupon;
pub mod invoice;
pub mod plan;
pub mod plan_add_on;
pub mod subscription;
pub mod transaction;

pub use account::{Account, Accounts};
pub use adjustment::{Adjustment, Adjustments};
pub use billing_info::{BillingInfo, BillingInfos};
pub use coupon::{Coupon, Coupons, PlanCodes, Redemption, Redemptions};
pub use invoice::{Invoice, InvoiceTransactions, Invoices, LineItems};
pub use plan::{Plan, Plans};
pub use plan_add_on::{PlanAddOn, PlanAddOns};
pub use subscription::{
    RefundType, Subscription, SubscriptionAddOn, SubscriptionAddOns, SubscriptionCreate,
    SubscriptionUpdate, Subscriptions, Timeframe,
};
pub use transaction::{Transaction, TransactionCreate, Transactions};
