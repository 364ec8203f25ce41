pub mod engine;
pub mod json_line;
pub mod message_text;
pub mod transformer;

pub use crate::domain::model::{InputDocument, OutputDocument};
pub use crate::domain::ports::{ConfigProvider, EventIo, Pipeline};
pub use crate::utils::error::Result;
