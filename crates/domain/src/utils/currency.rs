//! Per-currency amount maps
//!
//! Plans, add-ons and coupons carry prices keyed by currency:
//!
//! ```xml
//! <unit_amount_in_cents>
//!   <USD>1000</USD>
//!   <EUR>800</EUR>
//! </unit_amount_in_cents>
//! ```
//!
//! Each child element's name is the currency code and its text is the amount
//! in cents. Insertion order is preserved on encode.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One currency and its amount in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAmount {
    pub currency: String,
    pub amount_in_cents: i64,
}

/// Ordered currency code to amount map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyAmounts(Vec<CurrencyAmount>);

impl CurrencyAmounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`CurrencyAmounts::set`].
    #[must_use]
    pub fn with(mut self, currency: impl Into<String>, amount_in_cents: i64) -> Self {
        self.set(currency, amount_in_cents);
        self
    }

    /// Insert or replace the amount for `currency`.
    pub fn set(&mut self, currency: impl Into<String>, amount_in_cents: i64) {
        let currency = currency.into();
        match self.0.iter_mut().find(|a| a.currency == currency) {
            Some(existing) => existing.amount_in_cents = amount_in_cents,
            None => self.0.push(CurrencyAmount { currency, amount_in_cents }),
        }
    }

    pub fn get(&self, currency: &str) -> Option<i64> {
        self.0.iter().find(|a| a.currency == currency).map(|a| a.amount_in_cents)
    }

    pub fn remove(&mut self, currency: &str) -> Option<i64> {
        let index = self.0.iter().position(|a| a.currency == currency)?;
        Some(self.0.remove(index).amount_in_cents)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurrencyAmount> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<C: Into<String>> FromIterator<(C, i64)> for CurrencyAmounts {
    fn from_iter<I: IntoIterator<Item = (C, i64)>>(iter: I) -> Self {
        let mut amounts = Self::new();
        for (currency, amount) in iter {
            amounts.set(currency, amount);
        }
        amounts
    }
}

impl Serialize for CurrencyAmounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for amount in &self.0 {
            map.serialize_entry(&amount.currency, &amount.amount_in_cents)?;
        }
        map.end()
    }
}

struct CurrencyAmountsVisitor;

impl<'de> Visitor<'de> for CurrencyAmountsVisitor {
    type Value = CurrencyAmounts;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of currency codes to amounts in cents")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut amounts = CurrencyAmounts::new();
        while let Some(key) = access.next_key::<String>()? {
            // Attributes on the container element (`type="array"`) and
            // stray text are not amounts.
            if key.starts_with('@') || key == "$text" {
                access.next_value::<IgnoredAny>()?;
                continue;
            }
            let cents = access.next_value::<i64>()?;
            amounts.set(key, cents);
        }
        Ok(amounts)
    }
}

impl<'de> Deserialize<'de> for CurrencyAmounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CurrencyAmountsVisitor)
    }
}
