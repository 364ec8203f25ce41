use crate::config::FunctionConfig;
use crate::core::json_line;
use crate::core::message_text::message_text;
use crate::core::{ConfigProvider, InputDocument, OutputDocument, Pipeline, Result};
use serde_json::Value;

/// Wraps the payload's message field into a result document.
pub struct Transformer<C: ConfigProvider = FunctionConfig> {
    pub(crate) config: C,
}

impl<C: ConfigProvider> Transformer<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

impl Default for Transformer<FunctionConfig> {
    fn default() -> Self {
        Self::new(FunctionConfig::default())
    }
}

impl<C: ConfigProvider> Pipeline for Transformer<C> {
    fn extract(&self, raw: &[u8]) -> InputDocument {
        let text = match std::str::from_utf8(raw) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("Input is not valid UTF-8, using empty document: {}", e);
                return InputDocument::empty();
            }
        };

        if text.trim().is_empty() {
            tracing::debug!("Input is empty, using empty document");
            return InputDocument::empty();
        }

        match serde_json::from_str::<Value>(text) {
            Ok(value) => InputDocument::from(value),
            Err(e) => {
                tracing::debug!("Input is not valid JSON, using empty document: {}", e);
                InputDocument::empty()
            }
        }
    }

    fn transform(&self, input: InputDocument) -> OutputDocument {
        let message = match input.field(self.config.message_key()) {
            Some(value) => message_text(value),
            None => {
                if !input.is_mapping() {
                    tracing::debug!("Input is not a mapping, using default message");
                }
                self.config.default_message().to_string()
            }
        };

        OutputDocument {
            message: format!("{}{}", self.config.prefix(), message),
            input_received: input,
        }
    }

    fn load(&self, output: &OutputDocument) -> Result<String> {
        let value = serde_json::to_value(output)?;
        Ok(json_line::to_line(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(raw: &str) -> OutputDocument {
        let transformer: Transformer = Transformer::default();
        let input = transformer.extract(raw.as_bytes());
        transformer.transform(input)
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        for raw in ["", "   ", "\n\t \r\n"] {
            let output = run(raw);
            assert_eq!(output.message, "Processed: No message");
            assert_eq!(output.input_received, InputDocument::empty());
        }
    }

    #[test]
    fn test_message_field_is_wrapped() {
        let output = run(r#"{"message": "hi"}"#);
        assert_eq!(output.message, "Processed: hi");
        assert_eq!(output.input_received.as_value(), &json!({"message": "hi"}));
    }

    #[test]
    fn test_malformed_input_becomes_empty_mapping() {
        for raw in ["not json", "{\"message\": ", "{'message': 'hi'}", "NaN", "[1, 2,]"] {
            let output = run(raw);
            assert_eq!(output.message, "Processed: No message", "input: {}", raw);
            assert_eq!(output.input_received, InputDocument::empty(), "input: {}", raw);
        }
    }

    #[test]
    fn test_missing_message_keeps_input() {
        let output = run(r#"{"other": 1}"#);
        assert_eq!(output.message, "Processed: No message");
        assert_eq!(output.input_received.as_value(), &json!({"other": 1}));
    }

    #[test]
    fn test_non_mapping_documents_pass_through() {
        let cases = [
            ("42", json!(42)),
            ("[1, 2]", json!([1, 2])),
            ("\"message\"", json!("message")),
            ("null", json!(null)),
        ];
        for (raw, expected) in cases {
            let output = run(raw);
            assert_eq!(output.message, "Processed: No message");
            assert_eq!(output.input_received.as_value(), &expected);
        }
    }

    #[test]
    fn test_non_string_message_values() {
        assert_eq!(run(r#"{"message": 5}"#).message, "Processed: 5");
        assert_eq!(run(r#"{"message": true}"#).message, "Processed: True");
        assert_eq!(run(r#"{"message": null}"#).message, "Processed: None");
        assert_eq!(run(r#"{"message": 2.50}"#).message, "Processed: 2.5");
        assert_eq!(run(r#"{"message": [1, "a"]}"#).message, "Processed: [1, 'a']");
        assert_eq!(
            run(r#"{"message": {"nested": 1}}"#).message,
            "Processed: {'nested': 1}"
        );
    }

    #[test]
    fn test_invalid_utf8_becomes_empty_mapping() {
        let transformer: Transformer = Transformer::default();
        let input = transformer.extract(&[0xff, 0xfe, b'{', b'}']);
        assert_eq!(input, InputDocument::empty());
    }

    #[test]
    fn test_passthrough_preserves_key_order() {
        let output = run(r#"{"z": 1, "a": 2, "message": "m"}"#);
        let keys: Vec<&String> = output
            .input_received
            .as_value()
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(keys, vec!["z", "a", "message"]);
    }

    #[test]
    fn test_large_integers_pass_through_exactly() {
        let transformer: Transformer = Transformer::default();
        let output = run(r#"{"message": 123456789012345678901234567890, "n": -0}"#);
        assert_eq!(output.message, "Processed: 123456789012345678901234567890");
        let line = transformer.load(&output).unwrap();
        assert_eq!(
            line,
            r#"{"message": "Processed: 123456789012345678901234567890", "input_received": {"message": 123456789012345678901234567890, "n": -0}}"#
        );
    }

    #[test]
    fn test_load_escapes_non_ascii() {
        let transformer: Transformer = Transformer::default();
        let output = run(r#"{"message": "héllo 😀"}"#);
        assert_eq!(output.message, "Processed: héllo 😀");
        let line = transformer.load(&output).unwrap();
        assert_eq!(
            line,
            r#"{"message": "Processed: h\u00e9llo \ud83d\ude00", "input_received": {"message": "h\u00e9llo \ud83d\ude00"}}"#
        );
    }

    #[test]
    fn test_load_renders_single_line() {
        let transformer: Transformer = Transformer::default();
        let output = run(r#"{"message": "hi"}"#);
        let line = transformer.load(&output).unwrap();
        assert_eq!(
            line,
            r#"{"message": "Processed: hi", "input_received": {"message": "hi"}}"#
        );
    }

    #[test]
    fn test_custom_config() {
        let transformer = Transformer::new(FunctionConfig {
            message_key: "text".to_string(),
            default_message: "nothing".to_string(),
            prefix: "Got: ".to_string(),
        });
        let output = transformer.transform(transformer.extract(br#"{"text": "x"}"#));
        assert_eq!(output.message, "Got: x");
        let output = transformer.transform(transformer.extract(b"{}"));
        assert_eq!(output.message, "Got: nothing");
        assert_eq!(transformer.config().message_key(), "text");
    }
}
