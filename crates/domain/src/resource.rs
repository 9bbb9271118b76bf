//! Resource kinds and the traits every record implements
//!
//! The client stays generic over records: one `Resource` impl per record type
//! names its document roots and how a decoded record is tied to the parent it
//! was fetched under.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::impl_domain_status_conversions;

/// Every record type the client knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Account,
    BillingInfo,
    Adjustment,
    Coupon,
    Redemption,
    Invoice,
    Plan,
    PlanAddOn,
    Subscription,
    Transaction,
}

impl_domain_status_conversions!(ResourceKind {
    Account => "account",
    BillingInfo => "billing_info",
    Adjustment => "adjustment",
    Coupon => "coupon",
    Redemption => "redemption",
    Invoice => "invoice",
    Plan => "plan",
    PlanAddOn => "add_on",
    Subscription => "subscription",
    Transaction => "transaction",
});

/// A record type exchanged with the API.
pub trait Resource: Serialize + DeserializeOwned + Clone + Default + Debug {
    const KIND: ResourceKind;

    /// Root element of a single-record document.
    const ROOT: &'static str;

    /// Root element of a collection document.
    const COLLECTION_ROOT: &'static str;

    /// Decoded form of a collection document.
    type Collection: DeserializeOwned + Into<Vec<Self>>;

    /// True once the server has assigned the record's identity.
    fn is_persisted(&self) -> bool;

    /// Record the identifier of the parent the record was fetched under.
    ///
    /// Records nested below another resource (billing info, adjustments,
    /// plan add-ons) do not always echo their parent's code, so the client
    /// hands it over after every decode.
    fn bind_parent(&mut self, _parent: &str) {}
}

/// A record that can be fetched from its kind and a single identifier.
pub trait Addressable: Resource {
    /// Endpoint path of the record with identifier `id`, relative to the
    /// API root.
    fn item_path(id: &str) -> String;
}
