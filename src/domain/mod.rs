//! Product domain models and the mutable draft edited by a form.

pub mod draft;
pub mod product;

pub use draft::ProductDraft;
pub use product::{Product, ProductKind, ShampooProduct, ShoeProduct, SodaProduct};
