use crate::model::{ModelKind, ObjectiveModel};
use crate::objective::ObjectiveAccumulator;
use crate::{AssessmentData, ParameterSet, StocksolError};

/// Delta-difference stock assessment model (`"DD"`).
///
/// This is the dispatch target for the delayed-recruitment biomass dynamics
/// family. The population-dynamics likelihood body ships with the embedding
/// application, which attaches it by registering a replacement under the same
/// identifier (see
/// [`ModelRegistry::register_fn`](crate::ModelRegistry::register_fn)).
///
/// With no body attached, an evaluation contributes nothing and yields the
/// neutral objective value, 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeltaDifference;

impl ObjectiveModel for DeltaDifference {
    fn name(&self) -> &str {
        ModelKind::DD.as_str()
    }

    fn objective(
        &self,
        _data: &AssessmentData,
        _params: &ParameterSet,
    ) -> Result<f64, StocksolError> {
        Ok(ObjectiveAccumulator::new().total())
    }
}
