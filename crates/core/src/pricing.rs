//! Cart totals.
//!
//! Tax, shipping and the platform fee are business policy and live in
//! [`PricingPolicy`]. Whatever the policy, every total carries all five
//! amounts and `total == subtotal + tax + shipping + platform_fee`.

use serde::{Deserialize, Serialize};

use crate::models::CartItem;
use crate::types::Cents;

/// Rates and thresholds used to price a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPolicy {
    /// Sales tax on the subtotal, in basis points.
    pub tax_rate_bps: u32,
    /// Shipping charged on non-empty carts below the free-shipping threshold.
    pub flat_shipping: Cents,
    /// Subtotal at which shipping becomes free. `None` always charges.
    pub free_shipping_threshold: Option<Cents>,
    /// Marketplace cut on the subtotal, in basis points.
    pub platform_fee_bps: u32,
}

impl PricingPolicy {
    pub const DEFAULT_TAX_RATE_BPS: u32 = 825;
    pub const DEFAULT_FLAT_SHIPPING: Cents = Cents::new(599);
    pub const DEFAULT_FREE_SHIPPING_THRESHOLD: Cents = Cents::new(5000);
    pub const DEFAULT_PLATFORM_FEE_BPS: u32 = 500;

    /// Shipping for a cart with the given subtotal.
    #[must_use]
    pub fn shipping_for(&self, subtotal: Cents, is_empty: bool) -> Cents {
        if is_empty {
            return Cents::ZERO;
        }
        match self.free_shipping_threshold {
            Some(threshold) if subtotal >= threshold => Cents::ZERO,
            _ => self.flat_shipping,
        }
    }

    /// Price a list of cart lines.
    #[must_use]
    pub fn totals(&self, items: &[CartItem]) -> CartTotals {
        let subtotal: Cents = items.iter().map(CartItem::line_total).sum();
        let tax = subtotal.apply_bps(self.tax_rate_bps);
        let shipping = self.shipping_for(subtotal, items.is_empty());
        let platform_fee = subtotal.apply_bps(self.platform_fee_bps);

        CartTotals {
            subtotal,
            tax,
            shipping,
            platform_fee,
            total: subtotal + tax + shipping + platform_fee,
        }
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            tax_rate_bps: Self::DEFAULT_TAX_RATE_BPS,
            flat_shipping: Self::DEFAULT_FLAT_SHIPPING,
            free_shipping_threshold: Some(Self::DEFAULT_FREE_SHIPPING_THRESHOLD),
            platform_fee_bps: Self::DEFAULT_PLATFORM_FEE_BPS,
        }
    }
}

/// The five amounts of a priced cart, all in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub subtotal: Cents,
    pub tax: Cents,
    pub shipping: Cents,
    pub platform_fee: Cents,
    pub total: Cents,
}

/// Price `items` under the default policy.
#[must_use]
pub fn calculate_totals(items: &[CartItem]) -> CartTotals {
    PricingPolicy::default().totals(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductId;

    fn item(id: u32, quantity: u32, cents: i64) -> CartItem {
        CartItem::new(ProductId::new(id), quantity, Cents::new(cents))
    }

    #[test]
    fn test_empty_cart_is_all_zero() {
        let totals = calculate_totals(&[]);
        assert_eq!(totals, CartTotals::default());
    }

    #[test]
    fn test_default_policy_below_free_shipping() {
        // 2 x $12.00 + 1 x $5.50 = $29.50
        let totals = calculate_totals(&[item(1, 2, 1200), item(2, 1, 550)]);
        assert_eq!(totals.subtotal, Cents::new(2950));
        assert_eq!(totals.tax, Cents::new(243)); // 243.375
        assert_eq!(totals.shipping, Cents::new(599));
        assert_eq!(totals.platform_fee, Cents::new(148)); // 147.5
        assert_eq!(totals.total, Cents::new(2950 + 243 + 599 + 148));
    }

    #[test]
    fn test_free_shipping_at_threshold() {
        let totals = calculate_totals(&[item(1, 1, 5000)]);
        assert_eq!(totals.shipping, Cents::ZERO);
    }

    #[test]
    fn test_no_threshold_always_charges_shipping() {
        let policy = PricingPolicy {
            free_shipping_threshold: None,
            ..PricingPolicy::default()
        };
        let totals = policy.totals(&[item(1, 100, 5000)]);
        assert_eq!(totals.shipping, PricingPolicy::DEFAULT_FLAT_SHIPPING);
    }

    #[test]
    fn test_total_is_sum_of_parts() {
        let policy = PricingPolicy {
            tax_rate_bps: 1_000,
            flat_shipping: Cents::new(350),
            free_shipping_threshold: None,
            platform_fee_bps: 250,
        };
        for quantity in [1, 3, 17, 250] {
            let t = policy.totals(&[item(1, quantity, 333), item(2, 1, 99)]);
            assert_eq!(t.total, t.subtotal + t.tax + t.shipping + t.platform_fee);
        }
    }
}
