//! Run a mock checkout against the fixture catalog.
//!
//! # Usage
//!
//! ```bash
//! cm-cli checkout script.yaml --session cs_test_123 --intent pi_test_123
//! cm-cli checkout script.yaml --session cs_test_123 --intent pi_test_123 --decline
//! ```

use std::path::Path;

use chrono::Utc;
use commons_market_core::checkout::{Checkout, PaymentOutcome, settle};
use commons_market_core::models::{PaymentSession, ShippingAddress};
use commons_market_core::{Timestamp, UserId, fixtures};
use tracing::{info, warn};

use super::cart::{apply_script, load_script};
use super::emit;
use crate::config::CliConfig;

/// Arguments for a mock checkout.
#[derive(Debug)]
pub struct CheckoutArgs<'a> {
    pub script: &'a Path,
    pub user_id: UserId,
    pub session_id: String,
    pub payment_intent_id: String,
    pub decline: bool,
}

/// Replay a cart script, place the order and settle it.
///
/// Prints the resulting order document as JSON, including declined orders.
///
/// # Errors
///
/// Returns an error if the script cannot be loaded, checkout validation
/// fails, or the payment is declined.
pub async fn run(args: CheckoutArgs<'_>, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let actions = load_script(args.script).await?;
    let (ctx, rejected) = apply_script(args.user_id, config.pricing, actions);
    if rejected > 0 {
        warn!(rejected, "Some cart actions were rejected");
    }

    let catalog = fixtures::products()?;
    let checkout = Checkout::new(&catalog, config.pricing);
    let mut order = checkout.place(
        &ctx.snapshot(),
        PaymentSession {
            session_id: args.session_id,
            payment_intent_id: args.payment_intent_id,
        },
        ShippingAddress {
            name: "Mock Buyer".to_string(),
            line1: "1 Market Square".to_string(),
            line2: None,
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62701".to_string(),
            country: "US".to_string(),
        },
        Timestamp::at(Utc::now()),
    )?;

    let outcome = if args.decline {
        PaymentOutcome::Declined {
            reason: "card_declined".to_string(),
        }
    } else {
        PaymentOutcome::Confirmed
    };

    let settled = settle(&mut order, outcome, Timestamp::at(Utc::now()));
    emit(serde_json::to_string_pretty(&order)?)?;

    settled?;
    info!(order_id = %order.id(), status = %order.status(), "Checkout complete");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use commons_market_core::pricing::PricingPolicy;

    use super::*;
    use crate::config::LogFormat;

    const SCRIPT: &str = r"
- type: ADD_TO_CART
  payload: { productId: 1, quantity: 2, price: 850, vendorId: 1, name: Country Sourdough Loaf }
";

    async fn write_script(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("cm-cli-{}-{name}.yaml", std::process::id()));
        tokio::fs::write(&path, SCRIPT).await.unwrap();
        path
    }

    fn config() -> CliConfig {
        CliConfig {
            pricing: PricingPolicy::default(),
            log_format: LogFormat::Pretty,
        }
    }

    fn args(script: &Path, decline: bool) -> CheckoutArgs<'_> {
        CheckoutArgs {
            script,
            user_id: UserId::new(3),
            session_id: "cs_test_1".to_string(),
            payment_intent_id: "pi_test_1".to_string(),
            decline,
        }
    }

    #[tokio::test]
    async fn test_run_confirmed_checkout() {
        let path = write_script("confirmed").await;
        let result = run(args(&path, false), &config()).await;
        tokio::fs::remove_file(&path).await.unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_declined_checkout_fails() {
        let path = write_script("declined").await;
        let result = run(args(&path, true), &config()).await;
        tokio::fs::remove_file(&path).await.unwrap();

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "payment declined: card_declined");
    }
}
