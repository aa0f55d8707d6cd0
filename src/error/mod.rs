use thiserror::Error;

use crate::data::parameters::ParameterError;
use crate::data::parser::DatafileError;
use crate::data::DataError;
use crate::model::ModelError;

#[derive(Error, Debug)]
pub enum StocksolError {
    #[error("Model error: {0}")]
    ModelError(#[from] ModelError),
    #[error("Data error: {0}")]
    DataError(#[from] DataError),
    #[error("Parameter error: {0}")]
    ParameterError(#[from] ParameterError),
    #[error("Datafile error: {0}")]
    DatafileError(#[from] DatafileError),
    #[error("Error: {0}")]
    OtherError(String),
}
