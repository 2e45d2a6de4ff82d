//! Products domain module.
//!
//! Catalog entries with an exact price and a mutable availability flag. Pure
//! data and rules, no storage.

pub mod product;

pub use product::Product;
