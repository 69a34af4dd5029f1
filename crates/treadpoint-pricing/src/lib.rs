//! Pricing tables keyed by vehicle category and rim diameter, and the
//! slider/tab widget state that drives them.

mod book;
mod nearest;
mod widget;

use thiserror::Error;

pub use book::{PriceBook, TableView, DEFAULT_COLUMNS};
pub use nearest::nearest;
pub use widget::{PricingWidget, TableRender};

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("unknown vehicle category: {0}")]
    UnknownCategory(String),
}
