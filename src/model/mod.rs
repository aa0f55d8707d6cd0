use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod registry;

mod dd;
mod dd_ss;
pub use dd::DeltaDifference;
pub use dd_ss::DeltaDifferenceSS;

use crate::{AssessmentData, ParameterSet, StocksolError};

/// Errors raised while selecting a model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The identifier matches no registered model. Matching is exact and
    /// case-sensitive; no trimming or case-folding is applied.
    #[error("No model found: unrecognized model identifier {name:?}")]
    UnrecognizedModel { name: String },
}

/// The built-in model identifiers.
///
/// This is the typed form of the identifier string the host passes per
/// evaluation. Parsing accepts exactly `"DD"` and `"DD_SS"`; anything else,
/// including case variants, is [`ModelError::UnrecognizedModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    /// Delta-difference biomass dynamics model
    DD,
    /// State-space variant with latent biomass states
    #[serde(rename = "DD_SS")]
    DDSS,
}

impl ModelKind {
    pub const ALL: [ModelKind; 2] = [ModelKind::DD, ModelKind::DDSS];

    /// The identifier string this kind registers under.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DD => "DD",
            Self::DDSS => "DD_SS",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ModelError::UnrecognizedModel {
                name: s.to_string(),
            })
    }
}

/// Trait for model computations that evaluate to a scalar objective value.
///
/// This is the capability the dispatcher selects on: given the data supplied
/// by the host and one trial point of parameter values, produce the objective
/// value (typically a negative log-likelihood) that the host's optimizer
/// minimizes.
///
/// Implementations must be stateless across calls: every evaluation is an
/// independent computation, and the host may call [`ObjectiveModel::objective`]
/// many times per fit (once per optimizer iteration plus any derivative passes
/// it performs itself).
pub trait ObjectiveModel: Send + Sync + fmt::Debug {
    /// The identifier this model registers under.
    fn name(&self) -> &str;

    /// Evaluate the scalar objective at one trial point.
    fn objective(&self, data: &AssessmentData, params: &ParameterSet)
        -> Result<f64, StocksolError>;
}

/// Adapter wrapping a closure as an [`ObjectiveModel`].
///
/// This is how an embedding application attaches a model body to an
/// identifier without defining a named type; see
/// [`registry::ModelRegistry::register_fn`].
pub struct FnModel<F> {
    name: String,
    body: F,
}

impl<F> FnModel<F>
where
    F: Fn(&AssessmentData, &ParameterSet) -> Result<f64, StocksolError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, body: F) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}

impl<F> fmt::Debug for FnModel<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnModel").field("name", &self.name).finish()
    }
}

impl<F> ObjectiveModel for FnModel<F>
where
    F: Fn(&AssessmentData, &ParameterSet) -> Result<f64, StocksolError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn objective(
        &self,
        data: &AssessmentData,
        params: &ParameterSet,
    ) -> Result<f64, StocksolError> {
        (self.body)(data, params)
    }
}
