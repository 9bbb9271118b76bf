//! Resource operations
//!
//! Each module adds the operations of one resource to [`crate::Client`].
//! They only compose the CRUD primitives; none talks to the transport
//! directly.

mod accounts;
mod adjustments;
mod billing_info;
mod coupons;
mod invoices;
mod plans;
mod subscriptions;
mod transactions;
