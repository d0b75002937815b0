use crate::error::InitProcessError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub capture: CaptureConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CaptureConfig {
    pub enabled: bool,
    pub interface: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InitProcessError> {
        let enabled = matches!(
            std::env::var("CAPTURE_MODE").as_deref(),
            Ok("1") | Ok("true")
        );
        let interface = std::env::var("CAPTURE_INTERFACE")
            .ok()
            .filter(|name| !name.is_empty());
        let format = match std::env::var("OUTPUT_FORMAT") {
            Ok(value) => parse_output_format(&value)?,
            Err(_) => OutputFormat::Text,
        };

        Ok(Self {
            capture: CaptureConfig { enabled, interface },
            output: OutputConfig { format },
        })
    }

    #[cfg(test)]
    pub fn for_testing() -> Self {
        Self {
            capture: CaptureConfig {
                enabled: false,
                interface: None,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

fn parse_output_format(value: &str) -> Result<OutputFormat, InitProcessError> {
    match value {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(InitProcessError::EnvVarParseError(format!(
            "不明な出力形式です: {}",
            other
        ))),
    }
}
