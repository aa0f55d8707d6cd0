use crate::model::{ModelKind, ObjectiveModel};
use crate::objective::ObjectiveAccumulator;
use crate::{AssessmentData, ParameterSet, StocksolError};

/// State-space delta-difference model (`"DD_SS"`).
///
/// Same dispatch role as [`DeltaDifference`](crate::DeltaDifference), for the
/// variant with latent biomass states and process error. The body is supplied
/// by the embedding application; detached, it evaluates to 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeltaDifferenceSS;

impl ObjectiveModel for DeltaDifferenceSS {
    fn name(&self) -> &str {
        ModelKind::DDSS.as_str()
    }

    fn objective(
        &self,
        _data: &AssessmentData,
        _params: &ParameterSet,
    ) -> Result<f64, StocksolError> {
        Ok(ObjectiveAccumulator::new().total())
    }
}
