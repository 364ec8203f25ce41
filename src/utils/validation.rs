use crate::utils::error::{FunctionError, Result};
use tracing_subscriber::EnvFilter;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_filter_directives(field_name: &str, directives: &str) -> Result<()> {
    EnvFilter::try_new(directives)
        .map(|_| ())
        .map_err(|e| FunctionError::InvalidConfigValueError {
            field: field_name.to_string(),
            reason: format!("Invalid filter directives {:?}: {}", directives, e),
        })
}
