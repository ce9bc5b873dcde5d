mod types;
pub use types::*;

mod parameters;
pub use parameters::{parse_parameters, ParametersError};
