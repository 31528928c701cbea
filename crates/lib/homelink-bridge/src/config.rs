use std::time::Duration;

pub const DEFAULT_BACKEND_PORT: u16 = 443;
pub const DEFAULT_BACKEND_TIMEOUT_MS: u64 = 8_000;

#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub backend: BackendConfig,
    pub skill: SkillConfig,
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Host serving v2 traffic and v3 control.
    pub hostname: String,
    /// Host serving v3 discovery and authorization.
    pub auth_hostname: String,
    pub port: u16,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct SkillConfig {
    /// Region tag forwarded on authorization requests (NA, EU, FE, ...).
    pub region: String,
}
