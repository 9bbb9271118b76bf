//! Serde building blocks shared by the resource records

pub mod currency;
pub mod reference;
pub mod serde_helpers;

pub use currency::{CurrencyAmount, CurrencyAmounts};
pub use reference::Reference;
