use std::sync::Arc;

use crate::collection::Collection;
use crate::pipeline::{Transform, Validator};

/// Initial data payload for a collection.
///
/// `Elements` takes values directly; `Json` and `Encoded` carry a serialized
/// sequence that is decoded during construction. Decode failures land in the
/// collection error log and leave the collection empty.
#[derive(Debug, Clone)]
pub enum DataSource<T> {
    Elements(Vec<T>),
    Json(String),
    Encoded(String),
}

/// Construction options for [`Collection::with_config`].
///
/// Defaults: no data, no rules, page size 10, plain keys.
pub struct CollectionConfig<T> {
    pub data: Option<DataSource<T>>,
    pub(crate) validators: Vec<(String, Validator<T>)>,
    pub(crate) input_transforms: Vec<(String, Transform<T>)>,
    pub page_size: usize,
    pub section_keys: bool,
}

impl<T> Default for CollectionConfig<T> {
    fn default() -> Self {
        Self {
            data: None,
            validators: Vec::new(),
            input_transforms: Vec::new(),
            page_size: 10,
            section_keys: false,
        }
    }
}

impl<T> CollectionConfig<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(mut self, source: DataSource<T>) -> Self {
        self.data = Some(source);
        self
    }

    pub fn elements(self, items: Vec<T>) -> Self {
        self.data(DataSource::Elements(items))
    }

    pub fn json(self, text: impl Into<String>) -> Self {
        self.data(DataSource::Json(text.into()))
    }

    pub fn encoded(self, text: impl Into<String>) -> Self {
        self.data(DataSource::Encoded(text.into()))
    }

    pub fn validator<F>(mut self, name: impl Into<String>, rule: F) -> Self
    where
        F: Fn(Option<usize>, &T, &Collection<T>) -> bool + Send + Sync + 'static,
    {
        self.validators.push((name.into(), Arc::new(rule)));
        self
    }

    pub fn input_transform<F>(mut self, name: impl Into<String>, transform: F) -> Self
    where
        F: Fn(Option<usize>, T, &Collection<T>) -> T + Send + Sync + 'static,
    {
        self.input_transforms.push((name.into(), Arc::new(transform)));
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Reserved for sectioned text sources where a `[section]` line becomes
    /// an element key. Stored on the collection but not interpreted yet.
    pub fn section_keys(mut self, enabled: bool) -> Self {
        self.section_keys = enabled;
        self
    }
}
