//! The dispatcher entry point in miniature: one model identifier in, one
//! scalar objective out. Pass an identifier as the first argument to see the
//! dispatch succeed ("DD", "DD_SS") or fail (anything else).

use stocksol::{AssessmentData, ModelRegistry, ObjectiveFunction, ParameterSet, StocksolError};

fn main() -> Result<(), StocksolError> {
    let model = std::env::args().nth(1).unwrap_or_else(|| "DD".to_string());

    let registry = ModelRegistry::with_builtins();
    println!("Recognized models: {:?}", registry.names());

    let data = AssessmentData::builder()
        .scalar("M", 0.2)
        .series("catch_obs", vec![110.0, 95.0, 130.0, 122.0])
        .series("cpue", vec![1.1, f64::NAN, 0.8, 0.9])
        .build();
    let params = ParameterSet::from_slice(&["log_R0", "h"], &[8.5, 0.8])?;

    let objective = ObjectiveFunction::new(&registry, &model, data);
    let value = objective.evaluate(&params)?;
    println!("{}: objective = {}", model, value);
    Ok(())
}
