//! Print every active account code.
//!
//! Reads `RECURLY_API_KEY` (and friends) from the environment or a config
//! file, see `recurly_infra::config`.
//!
//! ```sh
//! RECURLY_API_KEY=... RUST_LOG=debug cargo run -p recurly-infra --example list_accounts
//! ```

use recurly_core::QueryParams;
use recurly_domain::Result;
use recurly_infra::{connect_from_env, observability};

fn main() -> Result<()> {
    observability::init_tracing();

    let client = connect_from_env()?;
    let params = QueryParams::new().with("state", "active").with("per_page", "50");
    let mut pager = client.list_accounts(&params)?;

    tracing::info!(total = ?pager.record_count(), "listing accounts");
    loop {
        for account in pager.items() {
            tracing::info!(code = %account.account_code, email = %account.email, "account");
        }
        if !pager.next()? {
            break;
        }
    }
    Ok(())
}
