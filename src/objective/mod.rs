use crate::data::{AssessmentData, ParameterSet};
use crate::model::registry::ModelRegistry;
use crate::StocksolError;

/// Running scalar objective value.
///
/// Model bodies sum their negative log-likelihood and penalty contributions
/// into this. The total starts at zero, so a body that contributes nothing
/// yields the neutral objective.
///
/// # Example
///
/// ```
/// use stocksol::ObjectiveAccumulator;
///
/// let mut nll = ObjectiveAccumulator::new();
/// nll.add(1.25);
/// nll.add(0.5);
/// assert_eq!(nll.total(), 1.75);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectiveAccumulator {
    total: f64,
}

impl ObjectiveAccumulator {
    pub fn new() -> Self {
        Self { total: 0.0 }
    }

    /// Add a contribution, e.g. one observation's negative log-likelihood.
    pub fn add(&mut self, contribution: f64) {
        self.total += contribution;
    }

    /// The accumulated objective value.
    pub fn total(&self) -> f64 {
        self.total
    }
}

/// One objective function, as seen by the optimization host.
///
/// Binds a model identifier and a data set against a registry. The host calls
/// [`ObjectiveFunction::evaluate`] once per optimizer iteration (and for any
/// gradient or Hessian passes it runs itself); each call resolves the
/// identifier afresh, runs the matched model once, and returns a fresh scalar.
/// Nothing is retained between calls, so consecutive evaluations are
/// independent, and several objective functions may share one registry.
///
/// An identifier that matches no registry entry fails the evaluation with
/// [`ModelError::UnrecognizedModel`](crate::model::ModelError); no partial
/// value is produced and no fallback model runs.
pub struct ObjectiveFunction<'a> {
    registry: &'a ModelRegistry,
    model: String,
    data: AssessmentData,
}

impl<'a> ObjectiveFunction<'a> {
    pub fn new(registry: &'a ModelRegistry, model: impl Into<String>, data: AssessmentData) -> Self {
        Self {
            registry,
            model: model.into(),
            data,
        }
    }

    /// The model identifier evaluations dispatch on.
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn data(&self) -> &AssessmentData {
        &self.data
    }

    /// Evaluate the objective at one trial point.
    pub fn evaluate(&self, params: &ParameterSet) -> Result<f64, StocksolError> {
        self.registry.evaluate(&self.model, &self.data, params)
    }
}
