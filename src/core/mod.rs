//! Stateful services binding the domain, config, and validation layers
//! together: the form controller and the persisted product collection.

pub mod form;
pub mod store;

pub use form::{FormController, SubmitOutcome};
pub use store::ProductStore;
