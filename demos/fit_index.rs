//! Host-side fitting demo.
//!
//! The crate owns dispatch and evaluation; iteration, convergence, and any
//! derivative work belong to the host. Here the host registers a log-normal
//! survey-index likelihood as a new model, then minimizes it with Nelder-Mead
//! over a synthetic series.

use argmin::core::{CostFunction, Error, Executor};
use argmin::solver::neldermead::NelderMead;
use rand_distr::{Distribution, Normal};

use stocksol::{fetch_data, AssessmentData, ModelRegistry, ObjectiveFunction, ParameterSet};

const PARAM_NAMES: [&str; 2] = ["mu", "log_sigma"];
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

struct HostCost<'a> {
    objective: ObjectiveFunction<'a>,
}

impl CostFunction for HostCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;
    fn cost(&self, point: &Self::Param) -> Result<Self::Output, Error> {
        let params = ParameterSet::from_slice(&PARAM_NAMES, point)?;
        Ok(self.objective.evaluate(&params)?)
    }
}

fn main() -> Result<(), Error> {
    let mut registry = ModelRegistry::with_builtins();
    registry.register_fn("INDEX_LN", |data, params| {
        fetch_data!(data, log_cpue);
        let mu = params.value("mu")?;
        let sigma = params.value("log_sigma")?.exp();

        let nll = log_cpue
            .iter()
            .filter(|y| !y.is_nan())
            .map(|y| sigma.ln() + LN_SQRT_2PI + (y - mu).powi(2) / (2.0 * sigma * sigma))
            .sum();
        Ok(nll)
    });

    let data = AssessmentData::builder()
        .series("log_cpue", synthetic_log_index(40, 0.5, 0.2))
        .build();
    let objective = ObjectiveFunction::new(&registry, "INDEX_LN", data);

    let solver: NelderMead<Vec<f64>, f64> =
        NelderMead::new(initial_simplex(&[0.0, 0.0])).with_sd_tolerance(1e-8)?;
    let res = Executor::new(HostCost { objective }, solver)
        .configure(|state| state.max_iters(500))
        .run()?;

    let best = res.state.best_param.expect("solver produced a best point");
    println!(
        "mu = {:.4}, sigma = {:.4} (truth: 0.5, 0.2)",
        best[0],
        best[1].exp()
    );
    Ok(())
}

fn synthetic_log_index(n: usize, mu: f64, sigma: f64) -> Vec<f64> {
    let mut rng = rand::rng();
    let noise = Normal::new(0.0, sigma).unwrap();
    (0..n).map(|_| mu + noise.sample(&mut rng)).collect()
}

fn initial_simplex(initial_point: &[f64]) -> Vec<Vec<f64>> {
    let mut vertices = vec![initial_point.to_vec()];
    for i in 0..initial_point.len() {
        let perturbation = if initial_point[i] == 0.0 {
            0.1
        } else {
            0.05 * initial_point[i]
        };
        let mut perturbed = initial_point.to_owned();
        perturbed[i] += perturbation;
        vertices.push(perturbed);
    }
    vertices
}
