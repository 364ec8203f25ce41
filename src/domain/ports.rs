use crate::domain::model::{InputDocument, OutputDocument};
use crate::utils::error::Result;

/// Where an invocation's payload comes from and where its line goes.
pub trait EventIo {
    fn read_input(&mut self) -> Result<Vec<u8>>;
    fn write_output(&mut self, line: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn message_key(&self) -> &str;
    fn default_message(&self) -> &str;
    fn prefix(&self) -> &str;
}

pub trait Pipeline {
    /// Never fails: anything unparsable becomes `InputDocument::empty()`.
    fn extract(&self, raw: &[u8]) -> InputDocument;
    fn transform(&self, input: InputDocument) -> OutputDocument;
    /// Renders the output as a single line, without the trailing newline.
    fn load(&self, output: &OutputDocument) -> Result<String>;
}
