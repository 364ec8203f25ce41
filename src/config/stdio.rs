use crate::domain::ports::EventIo;
use crate::utils::error::Result;
use std::io::{self, Read, Write};

/// Process stdin/stdout as an `EventIo`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdIo;

impl StdIo {
    pub fn new() -> Self {
        Self
    }
}

impl EventIo for StdIo {
    fn read_input(&mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;
        Ok(buf)
    }

    fn write_output(&mut self, line: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(line.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
