use crate::core::{EventIo, OutputDocument, Pipeline, Result};

pub struct FunctionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> FunctionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs one invocation: read the whole input, emit exactly one line.
    pub fn run<I: EventIo>(&self, io: &mut I) -> Result<OutputDocument> {
        tracing::debug!("Reading input...");
        let raw = match io.read_input() {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to read input, treating it as empty: {}", e);
                Vec::new()
            }
        };
        tracing::debug!("Read {} bytes", raw.len());

        let (output, line) = self.process(&raw)?;

        tracing::debug!("Writing output line ({} bytes)", line.len());
        io.write_output(&format!("{}\n", line))?;

        Ok(output)
    }

    /// Same transformation as `run`, without the I/O. Returns the line
    /// without its trailing newline.
    pub fn run_bytes(&self, raw: &[u8]) -> Result<String> {
        let (_, line) = self.process(raw)?;
        Ok(line)
    }

    fn process(&self, raw: &[u8]) -> Result<(OutputDocument, String)> {
        let input = self.pipeline.extract(raw);
        let output = self.pipeline.transform(input);
        tracing::debug!("Result message: {}", output.message);
        let line = self.pipeline.load(&output)?;
        Ok((output, line))
    }
}
