use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::product::Product;

/// The price actually charged: the sale price when the feed carries one,
/// otherwise the regular price.
pub fn effective_price(product: &Product) -> Decimal {
    product.sale_price.unwrap_or(product.regular_price)
}

/// Integer discount percentage for badges and for the discount sort policy.
///
/// Rounds half-up. A missing sale price means no discount. A zero or negative
/// regular price would make the ratio meaningless, so it floors to 0, and a
/// sale price above the regular price clamps to 0 instead of surfacing a
/// negative percentage.
pub fn discount_percent(regular_price: Decimal, sale_price: Option<Decimal>) -> u32 {
    let Some(sale_price) = sale_price else {
        return 0;
    };
    if regular_price <= Decimal::ZERO {
        return 0;
    }

    let percent = (regular_price - sale_price) / regular_price * Decimal::ONE_HUNDRED;
    percent
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

pub fn product_discount_percent(product: &Product) -> u32 {
    discount_percent(product.regular_price, product.sale_price)
}
