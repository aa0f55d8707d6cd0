use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::model::{DeltaDifference, DeltaDifferenceSS, FnModel, ModelError, ObjectiveModel};
use crate::{AssessmentData, ParameterSet, StocksolError};

/// Registry of objective models, keyed by model identifier.
///
/// The registry is the dispatch table for objective-function evaluations: the
/// host names a model per evaluation, and the registry resolves that name to
/// exactly one registered [`ObjectiveModel`]. Resolution is an exact,
/// case-sensitive string match with no fallback; an identifier that matches
/// no entry is [`ModelError::UnrecognizedModel`].
///
/// [`ModelRegistry::with_builtins`] seeds the recognized set with the
/// delta-difference family (`"DD"`, `"DD_SS"`). New models extend the set by
/// registering under new identifiers; embedding applications attach the
/// likelihood body of a built-in by replacing its entry under the same
/// identifier.
///
/// # Example
///
/// ```
/// use stocksol::{AssessmentData, ModelRegistry, ParameterSet};
///
/// let mut registry = ModelRegistry::with_builtins();
/// registry.register_fn("TWICE", |_data, params| Ok(2.0 * params[0]));
///
/// let data = AssessmentData::new();
/// let params = ParameterSet::from_slice(&["x"], &[3.0]).unwrap();
/// assert_eq!(registry.evaluate("TWICE", &data, &params).unwrap(), 6.0);
/// assert!(registry.evaluate("twice", &data, &params).is_err());
/// ```
#[derive(Clone, Default)]
pub struct ModelRegistry {
    entries: HashMap<String, Arc<dyn ObjectiveModel>>,
}

impl ModelRegistry {
    /// An empty registry. Nothing is recognized until something registers.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// A registry seeded with the built-in delta-difference family.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(DeltaDifference);
        registry.register(DeltaDifferenceSS);
        registry
    }

    /// Register a model under its own identifier.
    ///
    /// Replaces and returns any previous entry under the same identifier.
    pub fn register<M: ObjectiveModel + 'static>(
        &mut self,
        model: M,
    ) -> Option<Arc<dyn ObjectiveModel>> {
        let name = model.name().to_string();
        tracing::debug!(model = %name, "registering objective model");
        self.entries.insert(name, Arc::new(model))
    }

    /// Register a closure as the model body for `name`.
    ///
    /// This is the usual way an embedding application supplies the likelihood
    /// computation for an identifier, built-in or new.
    pub fn register_fn<F>(
        &mut self,
        name: impl Into<String>,
        body: F,
    ) -> Option<Arc<dyn ObjectiveModel>>
    where
        F: Fn(&AssessmentData, &ParameterSet) -> Result<f64, StocksolError> + Send + Sync + 'static,
    {
        self.register(FnModel::new(name.into(), body))
    }

    /// Remove and return the entry for `name`, if any.
    pub fn unregister(&mut self, name: &str) -> Option<Arc<dyn ObjectiveModel>> {
        self.entries.remove(name)
    }

    /// Whether `name` is a recognized identifier.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The recognized identifiers, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve an identifier to its registered model.
    pub fn resolve(&self, name: &str) -> Result<&Arc<dyn ObjectiveModel>, ModelError> {
        self.entries.get(name).ok_or_else(|| {
            tracing::error!(model = %name, "no model found for identifier");
            ModelError::UnrecognizedModel {
                name: name.to_string(),
            }
        })
    }

    /// Resolve `name` and evaluate the matched model once.
    ///
    /// The lookup happens on every call; nothing about the selection is
    /// retained between evaluations.
    pub fn evaluate(
        &self,
        name: &str,
        data: &AssessmentData,
        params: &ParameterSet,
    ) -> Result<f64, StocksolError> {
        let model = self.resolve(name)?;
        model.objective(data, params)
    }
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.names())
            .finish()
    }
}
