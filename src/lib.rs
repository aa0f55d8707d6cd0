pub mod data;
pub mod error;
pub mod model;
pub mod objective;

pub use crate::data::builder::AssessmentDataBuilder;
pub use crate::data::parameters::ParameterSet;
pub use crate::data::parser::{parse_json, parse_table, read_json, read_table};
pub use crate::data::{AssessmentData, DataValue};
pub use crate::model::registry::ModelRegistry;
pub use crate::model::{DeltaDifference, DeltaDifferenceSS, FnModel, ModelKind, ObjectiveModel};
pub use crate::objective::{ObjectiveAccumulator, ObjectiveFunction};
pub use error::StocksolError;

pub mod prelude {
    pub mod data {
        pub use crate::data::{
            parser::{read_json, read_table},
            AssessmentData, DataValue, ParameterSet,
        };
    }
    pub mod model {
        pub use crate::model::{
            registry::ModelRegistry, DeltaDifference, DeltaDifferenceSS, FnModel, ModelKind,
            ObjectiveModel,
        };
    }

    pub use crate::data::builder::AssessmentDataBuilder;
    pub use crate::objective::{ObjectiveAccumulator, ObjectiveFunction};

    #[macro_export]
    macro_rules! fetch_params {
        ($p:expr, $($name:ident),*) => {
            let p = $p;
            let mut idx = 0;
            $(
                #[allow(unused_mut)]
                let mut $name = p[idx];
                idx += 1;
            )*
            let _ = idx; // Consume idx to avoid unused_assignments warning
        };
    }

    /// Macro for reading named series out of an [`crate::AssessmentData`].
    ///
    /// Each identifier becomes a `&Array1<f64>` binding for the slot of the
    /// same name. Missing or mismatched slots propagate as errors, so this can
    /// only be used in functions returning a `Result` whose error type
    /// converts from [`crate::data::DataError`].
    ///
    /// # Example
    ///
    /// ```ignore
    /// fetch_data!(data, cpue, catch_obs);
    /// let n = cpue.len().min(catch_obs.len());
    /// ```
    #[macro_export]
    macro_rules! fetch_data {
        ($data:expr, $($name:ident),*) => {
            $(
                let $name = $data.vector(stringify!($name))?;
            )*
        };
    }

    /// Like [`fetch_data!`], but for scalar slots.
    #[macro_export]
    macro_rules! fetch_scalars {
        ($data:expr, $($name:ident),*) => {
            $(
                let $name = $data.scalar(stringify!($name))?;
            )*
        };
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::data::DataError;
    use crate::AssessmentData;
    use crate::{fetch_data, fetch_params, fetch_scalars};

    #[test]
    fn test_fetch_params_macro() {
        // Test basic parameter fetching
        let params = vec![1.0, 2.5, 3.7];

        fetch_params!(params, r0, h, m);

        assert_eq!(r0, 1.0);
        assert_eq!(h, 2.5);
        assert_eq!(m, 3.7);
    }

    #[test]
    fn test_fetch_data_macro() {
        fn read(data: &AssessmentData) -> Result<f64, DataError> {
            fetch_data!(data, cpue);
            fetch_scalars!(data, m);
            Ok(cpue.sum() + m)
        }

        let data = AssessmentData::builder()
            .series("cpue", vec![1.0, 2.0, 3.0])
            .scalar("m", 0.2)
            .build();

        assert_relative_eq!(read(&data).unwrap(), 6.2);

        let empty = AssessmentData::new();
        assert!(read(&empty).is_err());
    }
}
