//! Property tests for Exoframe.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "idempotent".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/labels.rs"]
mod labels;

#[path = "properties/normalize.rs"]
mod normalize;
