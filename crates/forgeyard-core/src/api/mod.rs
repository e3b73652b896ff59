//! API implementation submodules.
//!
//! Each submodule contains `impl ForgeyardApi` blocks that extend the public
//! API with domain-specific methods. The struct definition lives in `lib.rs`.

mod builder;
mod catalog;
mod matching;
mod planner;

pub use builder::ForgeyardApiBuilder;
