// ============================================================================
// trackvec Library
// ============================================================================

//! Mutable, ordered collection with change tracking, validation and
//! preparation pipelines, and page-based traversal.
//!
//! The collection keeps two generations of state: the current elements and
//! the baseline established at construction or at the last checkpoint.
//! Mutations are tracked well enough to restore single elements or the whole
//! baseline; inserted values run through named validation and preparation
//! pipelines; reads run through a separate output pipeline. Out-of-range
//! operations no-op and validation failures accumulate in a polled error
//! log, so mutator calls chain freely.
//!
//! # Examples
//!
//! ```
//! use trackvec::Collection;
//!
//! let mut names = Collection::from_elements(vec!["ann", "bob", "cid"]);
//! names.change(1, "rob");
//! assert_eq!(names.get(1), Some("rob"));
//! assert_eq!(names.original_at(1), Some("bob"));
//! assert!(names.changed());
//!
//! names.restore_one(1);
//! assert_eq!(names.get(1), Some("bob"));
//! assert!(!names.changed());
//! ```
//!
//! Validation and preparation rules are named callables, run in order:
//!
//! ```
//! use trackvec::Collection;
//!
//! let mut scores: Collection<i64> = Collection::new();
//! scores.put_validator("non_negative", |_, value, _| *value >= 0);
//! scores.put_input_transform("cap", |_, value: i64, _| value.min(100));
//!
//! scores.add(250).add(-5);
//! assert_eq!(scores.elements(), vec![100]);
//! assert!(scores.has_errors());
//! ```

pub mod codec;
pub mod collection;
pub mod core;
pub mod pipeline;

// Re-export main types for convenience
pub use collection::{Collection, Elements, Pages};
pub use core::{CollectionConfig, CollectionError, DataSource, ErrorEntry, Result};
pub use pipeline::{Transform, Validator};
