//! Validation and preparation pipelines.
//!
//! A collection carries three ordered sets of named callables: validation
//! predicates checked on insert/change, input transforms applied before a
//! value enters the store, and output transforms applied to copies on read.
//! Rules run in registration order; putting a rule under an existing name
//! replaces it in place.

mod rules;

pub(crate) use rules::RuleSet;
pub use rules::{Transform, Validator};
