//! The location directory: normalization of raw location records into a
//! searchable form, substring filtering, and match highlighting.
//!
//! Records are normalized once at load time; the `search_key` computed there
//! is the only field the query path reads. Everything here is pure and
//! synchronous except [`QueryDebouncer`], which owns the input-side timing.

mod debounce;
mod highlight;
mod key;
mod normalize;
mod search;
mod types;

pub use debounce::{debounce_channel, QueryDebouncer, QueryInput};
pub use highlight::{escape_html, highlight};
pub use key::location_key;
pub use normalize::{format_phone, normalize_location, normalize_search_text};
pub use search::filter;
pub use types::{Location, Phone, RawLocation};
