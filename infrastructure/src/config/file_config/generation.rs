//! Generation configuration from TOML (`[generation]` section)

use super::ConfigValidationError;
use lateral_application::{GenerationParams, RoleTemperatures};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Highest temperature accepted by common backends
const MAX_TEMPERATURE: f32 = 2.0;

/// Raw generation configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Timeout in seconds for each generation call
    pub timeout_seconds: u64,
    /// Pause after each call, in milliseconds
    pub call_delay_ms: u64,
    pub analyst_temperature: f32,
    pub challenger_temperature: f32,
    pub evaluator_temperature: f32,
    pub domain_temperature: f32,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            timeout_seconds: params.request_timeout.as_secs(),
            call_delay_ms: params.call_delay.as_millis() as u64,
            analyst_temperature: params.temperatures.analyst,
            challenger_temperature: params.temperatures.challenger,
            evaluator_temperature: params.temperatures.evaluator,
            domain_temperature: params.temperatures.domain,
        }
    }
}

impl FileGenerationConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError::ZeroTimeout);
        }

        let temperatures = [
            ("analyst", self.analyst_temperature),
            ("challenger", self.challenger_temperature),
            ("evaluator", self.evaluator_temperature),
            ("domain", self.domain_temperature),
        ];
        for (role, value) in temperatures {
            if !(0.0..=MAX_TEMPERATURE).contains(&value) {
                return Err(ConfigValidationError::TemperatureOutOfRange { role, value });
            }
        }
        Ok(())
    }

    pub fn to_generation_params(&self) -> GenerationParams {
        GenerationParams::default()
            .with_request_timeout(Duration::from_secs(self.timeout_seconds))
            .with_call_delay(Duration::from_millis(self.call_delay_ms))
            .with_temperatures(RoleTemperatures {
                analyst: self.analyst_temperature,
                challenger: self.challenger_temperature,
                evaluator: self.evaluator_temperature,
                domain: self.domain_temperature,
            })
    }
}
