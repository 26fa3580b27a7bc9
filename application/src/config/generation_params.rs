//! Generation parameters - per-call behavior of the text backend.
//!
//! [`GenerationParams`] groups the knobs every generation call shares:
//! the request timeout, the throttling delay that follows each call, and the
//! sampling temperature of each [`GenerationRole`].

use lateral_domain::GenerationRole;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sampling temperature per generation role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleTemperatures {
    pub analyst: f32,
    pub challenger: f32,
    pub evaluator: f32,
    pub domain: f32,
}

impl Default for RoleTemperatures {
    fn default() -> Self {
        Self {
            analyst: GenerationRole::Analyst.default_temperature(),
            challenger: GenerationRole::Challenger.default_temperature(),
            evaluator: GenerationRole::Evaluator.default_temperature(),
            domain: GenerationRole::Domain.default_temperature(),
        }
    }
}

impl RoleTemperatures {
    pub fn for_role(&self, role: GenerationRole) -> f32 {
        match role {
            GenerationRole::Analyst => self.analyst,
            GenerationRole::Challenger => self.challenger,
            GenerationRole::Evaluator => self.evaluator,
            GenerationRole::Domain => self.domain,
        }
    }
}

/// Per-call generation behavior.
///
/// The delay is a rate-limit courtesy applied after every call, successful
/// or not. It never bounds call latency; `request_timeout` does that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Maximum time to wait for a single generation call.
    pub request_timeout: Duration,
    /// Pause after each generation call.
    pub call_delay: Duration,
    /// Temperature used for each role.
    pub temperatures: RoleTemperatures,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            call_delay: Duration::from_millis(800),
            temperatures: RoleTemperatures::default(),
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_call_delay(mut self, delay: Duration) -> Self {
        self.call_delay = delay;
        self
    }

    pub fn with_temperatures(mut self, temperatures: RoleTemperatures) -> Self {
        self.temperatures = temperatures;
        self
    }

    /// Parameters without throttling, for tests and local backends.
    pub fn unthrottled() -> Self {
        Self::default().with_call_delay(Duration::ZERO)
    }

    pub fn temperature(&self, role: GenerationRole) -> f32 {
        self.temperatures.for_role(role)
    }
}
