//! Client constants
//!
//! Endpoint segments, header names and defaults shared by every crate in the
//! workspace.

// Connection defaults
pub const DEFAULT_BASE_URL: &str = "https://api.recurly.com/v2/";
pub const USER_AGENT: &str = concat!("Recurly-Rust/", env!("CARGO_PKG_VERSION"));
pub const ACCEPT_XML: &str = "application/xml";
pub const CONTENT_TYPE_XML: &str = "application/xml; charset=utf-8";
pub const ACCEPT_LANGUAGE: &str = "en-US";

// Request headers
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_ACCEPT: &str = "Accept";
pub const HEADER_ACCEPT_LANGUAGE: &str = "Accept-Language";
pub const HEADER_USER_AGENT: &str = "User-Agent";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

// Paging headers and query keys
pub const HEADER_LINK: &str = "Link";
pub const HEADER_RECORD_COUNT: &str = "X-Records";
pub const PARAM_CURSOR: &str = "cursor";
pub const PARAM_PER_PAGE: &str = "per_page";

// Endpoint segments
pub const ACCOUNTS: &str = "accounts";
pub const ADJUSTMENTS: &str = "adjustments";
pub const BILLING_INFO: &str = "billing_info";
pub const COUPONS: &str = "coupons";
pub const REDEMPTION: &str = "redemption";
pub const REDEEM: &str = "redeem";
pub const INVOICES: &str = "invoices";
pub const PLANS: &str = "plans";
pub const ADD_ONS: &str = "add_ons";
pub const SUBSCRIPTIONS: &str = "subscriptions";
pub const TRANSACTIONS: &str = "transactions";

// Action segments
pub const ACTION_REOPEN: &str = "reopen";
pub const ACTION_CANCEL: &str = "cancel";
pub const ACTION_REACTIVATE: &str = "reactivate";
pub const ACTION_POSTPONE: &str = "postpone";
pub const ACTION_TERMINATE: &str = "terminate";
pub const ACTION_MARK_SUCCESSFUL: &str = "mark_successful";
pub const ACTION_MARK_FAILED: &str = "mark_failed";

// Action query keys
pub const PARAM_NEXT_RENEWAL_DATE: &str = "next_renewal_date";
pub const PARAM_REFUND: &str = "refund";
pub const PARAM_AMOUNT_IN_CENTS: &str = "amount_in_cents";

// Environment variables read by the config loader
pub const ENV_API_KEY: &str = "RECURLY_API_KEY";
pub const ENV_JS_KEY: &str = "RECURLY_JS_KEY";
pub const ENV_BASE_URL: &str = "RECURLY_BASE_URL";
pub const ENV_DEBUG: &str = "RECURLY_DEBUG";
pub const ENV_TIMEOUT_SECS: &str = "RECURLY_TIMEOUT_SECS";
