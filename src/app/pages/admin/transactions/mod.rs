//! Money flowing through the panel: deposits, products and coupons.

mod coupons;
mod deposits;
mod products;

pub use coupons::AdminCoupons;
pub use deposits::AdminDeposits;
pub use products::AdminProducts;
