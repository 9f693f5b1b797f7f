//! Price calculation for configured products.
//!
//! A pure mapping from a configuration snapshot to a price breakdown:
//! catalog-priced base plus per-option deltas. Whole price units, no currency
//! minor units. Missing table entries contribute zero and are logged, never
//! raised.

pub mod breakdown;
pub mod price_list;

pub use breakdown::PriceBreakdown;
pub use price_list::PriceList;
