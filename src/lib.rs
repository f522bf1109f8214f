#![doc(test(attr(deny(warnings))))]

//! Catalog Core provides the product-form building blocks behind a small
//! catalog app: per-kind form configuration, draft editing and validation,
//! and a persisted collection of submitted products.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;
pub mod validation;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Catalog Core tracing initialized.");
    });
}
