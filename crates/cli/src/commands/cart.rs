//! Replay cart action scripts.
//!
//! A script is a YAML list of cart actions in their wire form:
//!
//! ```yaml
//! - type: ADD_TO_CART
//!   payload: { productId: 1, quantity: 2, price: 850, vendorId: 1, name: Country Sourdough Loaf }
//! - type: UPDATE_QUANTITY
//!   payload: { id: 1, quantity: 3 }
//! - type: REMOVE_FROM_CART
//!   payload: 2
//! ```
//!
//! # Usage
//!
//! ```bash
//! cm-cli cart replay script.yaml --user 42
//! cm-cli cart replay script.yaml --json
//! ```

use std::path::Path;

use commons_market_core::UserId;
use commons_market_core::cart::{CartAction, CartContext, CartStore, MemoryCartStore};
use commons_market_core::pricing::PricingPolicy;
use commons_market_core::views::CartSummary;
use tracing::{info, warn};

use super::emit;
use crate::config::CliConfig;

/// Read a YAML action script.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable or not a list of actions.
pub async fn load_script(path: &Path) -> Result<Vec<CartAction>, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()).into());
    }

    info!(path = %path.display(), "Loading cart script");
    let content = tokio::fs::read_to_string(path).await?;
    let actions: Vec<CartAction> = serde_yaml::from_str(&content)?;
    info!(actions = actions.len(), "Parsed cart script");
    Ok(actions)
}

/// Apply `actions` to a fresh cart, skipping any the cart rejects.
///
/// Returns the context and the number of rejected actions.
pub fn apply_script(
    user_id: UserId,
    policy: PricingPolicy,
    actions: Vec<CartAction>,
) -> (CartContext, usize) {
    let mut ctx = CartContext::new(user_id, policy);
    let mut rejected = 0;

    for (step, action) in actions.into_iter().enumerate() {
        let kind = action.kind();
        if let Err(e) = ctx.dispatch(action) {
            warn!(step = step + 1, action = kind, "Skipping action: {e}");
            rejected += 1;
        }
    }

    (ctx, rejected)
}

/// Replay a script, persist the result and print it.
///
/// # Errors
///
/// Returns an error if the script cannot be loaded or the cart cannot be saved.
pub async fn replay(
    path: &Path,
    user_id: UserId,
    json: bool,
    config: &CliConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let actions = load_script(path).await?;
    let (ctx, rejected) = apply_script(user_id, config.pricing, actions);

    let mut store = MemoryCartStore::new();
    ctx.persist(&mut store)?;
    let stored = store
        .load(user_id)?
        .ok_or("cart missing from store after save")?;

    info!(
        user_id = %user_id,
        lines = stored.items.len(),
        rejected,
        "Replay complete"
    );

    if json {
        emit(serde_json::to_string_pretty(&stored)?)?;
    } else {
        emit(CartSummary::new(&stored.items, ctx.totals()))?;
    }
    Ok(())
}
