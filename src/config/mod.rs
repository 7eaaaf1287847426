pub mod model_params;

pub use model_params::{ConfigError, ModelParams};
