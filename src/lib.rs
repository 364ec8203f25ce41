pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{FunctionConfig, LogConfig, LogFormat, StdIo};
pub use crate::core::{engine::FunctionEngine, transformer::Transformer};
pub use domain::model::{InputDocument, OutputDocument};
pub use utils::error::{FunctionError, Result};
