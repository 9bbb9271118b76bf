//! Declarative helpers shared by the resource modules
//!
//! `impl_domain_status_conversions!` gives small string-backed enums
//! (`Timeframe`, `RefundType`, `ResourceKind`) their wire spelling through
//! `Display` and a case-insensitive `FromStr`.
//!
//! # Example
//!
//! ```rust
//! use recurly_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum CouponState {
//!     Redeemable,
//!     Expired,
//!     Inactive,
//! }
//!
//! impl_domain_status_conversions!(CouponState {
//!     Redeemable => "redeemable",
//!     Expired => "expired",
//!     Inactive => "inactive",
//! });
//!
//! assert_eq!(CouponState::Expired.to_string(), "expired");
//! assert_eq!("INACTIVE".parse::<CouponState>().unwrap(), CouponState::Inactive);
//! ```

/// Implements Display and FromStr for wire-spelled enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire spelling
///
/// Parsing is case-insensitive; output is always the spelling given here.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Wire spelling of the variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => ::std::result::Result::Ok(Self::$variant),)+
                    _ => ::std::result::Result::Err(::std::format!(
                        "Invalid {}: {}",
                        ::std::stringify!($enum_name),
                        s
                    )),
                }
            }
        }
    };
}

/// Declares the document type of a collection response.
///
/// A collection document is a root element (`<accounts>`) holding zero or
/// more record elements (`<account>`). The generated struct decodes it and
/// converts into the plain item vector.
macro_rules! xml_collection {
    ($(#[$meta:meta])* $name:ident, $root:tt, $item:ident, $tag:tt) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
        #[serde(rename = $root)]
        pub struct $name {
            #[serde(rename = $tag, default)]
            pub items: Vec<$item>,
        }

        impl From<$name> for Vec<$item> {
            fn from(page: $name) -> Self {
                page.items
            }
        }
    };
}

pub(crate) use xml_collection;
