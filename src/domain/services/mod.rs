//! Domain Services
//!
//! Pure helpers with no I/O.

mod normalize;

pub use normalize::{normalize, split_comma_list, RawValues};
