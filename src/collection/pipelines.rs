use std::sync::Arc;

use super::Collection;
use crate::pipeline::{Transform, Validator};

/// Rule management. The three pipelines are symmetric: put (single or bulk,
/// same-name puts replace in place), list names, remove by name, clear, and
/// a global switch each.
impl<T> Collection<T> {
    pub fn put_validator<F>(&mut self, name: impl Into<String>, rule: F) -> &mut Self
    where
        F: Fn(Option<usize>, &T, &Collection<T>) -> bool + Send + Sync + 'static,
    {
        self.validators.put(name, Arc::new(rule));
        self
    }

    pub fn put_validators(&mut self, rules: Vec<(String, Validator<T>)>) -> &mut Self {
        for (name, rule) in rules {
            self.validators.put(name, rule);
        }
        self
    }

    pub fn validator_names(&self) -> Vec<&str> {
        self.validators.names()
    }

    pub fn remove_validator(&mut self, name: &str) -> &mut Self {
        self.validators.remove(name);
        self
    }

    pub fn clear_validators(&mut self) -> &mut Self {
        self.validators.clear();
        self
    }

    pub fn put_input_transform<F>(&mut self, name: impl Into<String>, transform: F) -> &mut Self
    where
        F: Fn(Option<usize>, T, &Collection<T>) -> T + Send + Sync + 'static,
    {
        self.input_transforms.put(name, Arc::new(transform));
        self
    }

    pub fn put_input_transforms(&mut self, transforms: Vec<(String, Transform<T>)>) -> &mut Self {
        for (name, transform) in transforms {
            self.input_transforms.put(name, transform);
        }
        self
    }

    pub fn input_transform_names(&self) -> Vec<&str> {
        self.input_transforms.names()
    }

    pub fn remove_input_transform(&mut self, name: &str) -> &mut Self {
        self.input_transforms.remove(name);
        self
    }

    pub fn clear_input_transforms(&mut self) -> &mut Self {
        self.input_transforms.clear();
        self
    }

    pub fn put_output_transform<F>(&mut self, name: impl Into<String>, transform: F) -> &mut Self
    where
        F: Fn(Option<usize>, T, &Collection<T>) -> T + Send + Sync + 'static,
    {
        self.output_transforms.put(name, Arc::new(transform));
        self
    }

    pub fn put_output_transforms(&mut self, transforms: Vec<(String, Transform<T>)>) -> &mut Self {
        for (name, transform) in transforms {
            self.output_transforms.put(name, transform);
        }
        self
    }

    pub fn output_transform_names(&self) -> Vec<&str> {
        self.output_transforms.names()
    }

    pub fn remove_output_transform(&mut self, name: &str) -> &mut Self {
        self.output_transforms.remove(name);
        self
    }

    pub fn clear_output_transforms(&mut self) -> &mut Self {
        self.output_transforms.clear();
        self
    }

    /// With validation off every value passes unconditionally.
    pub fn disable_validation(&mut self) -> &mut Self {
        self.validation_on = false;
        self
    }

    pub fn enable_validation(&mut self) -> &mut Self {
        self.validation_on = true;
        self
    }

    pub fn validation_enabled(&self) -> bool {
        self.validation_on
    }

    pub fn disable_input_preparation(&mut self) -> &mut Self {
        self.input_on = false;
        self
    }

    pub fn enable_input_preparation(&mut self) -> &mut Self {
        self.input_on = true;
        self
    }

    pub fn input_preparation_enabled(&self) -> bool {
        self.input_on
    }

    pub fn disable_output_preparation(&mut self) -> &mut Self {
        self.output_on = false;
        self
    }

    pub fn enable_output_preparation(&mut self) -> &mut Self {
        self.output_on = true;
        self
    }

    pub fn output_preparation_enabled(&self) -> bool {
        self.output_on
    }
}
