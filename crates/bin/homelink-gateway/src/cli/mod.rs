use crate::error::GatewayError;
use clap::Parser;
use homelink_bridge::config::{
    BackendConfig, BridgeConfig, DEFAULT_BACKEND_PORT, DEFAULT_BACKEND_TIMEOUT_MS, SkillConfig,
};
use homelink_bridge::server::config::{DEFAULT_BIND_ADDRESS, ServerConfig, ServerHttpConfig};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Backend host serving v2 traffic and v3 control directives
    #[arg(long, env = "BACKEND_HOSTNAME")]
    pub backend_hostname: String,

    /// Backend host serving v3 discovery and account linking
    #[arg(long, env = "BACKEND_AUTH_HOSTNAME")]
    pub backend_auth_hostname: String,

    #[arg(long, env = "BACKEND_PORT", default_value_t = DEFAULT_BACKEND_PORT)]
    pub backend_port: u16,

    /// Voice assistant region tag forwarded on account linking (NA, EU, FE, ...)
    #[arg(long, env = "ALEXA_REGION")]
    pub alexa_region: String,

    /// Upper bound for a single backend call, in milliseconds
    #[arg(long, env = "BACKEND_TIMEOUT_MS", default_value_t = DEFAULT_BACKEND_TIMEOUT_MS)]
    pub backend_timeout_ms: u64,

    /// Address the gateway listens on for directives
    #[arg(long, env = "GATEWAY_BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind_address: SocketAddr,
}

impl Cli {
    pub fn bridge_config(&self) -> Result<BridgeConfig, GatewayError> {
        if self.backend_timeout_ms == 0 {
            return Err(GatewayError::InvalidTimeout);
        }

        Ok(BridgeConfig {
            backend: BackendConfig {
                hostname: non_blank(&self.backend_hostname, "backend hostname")?,
                auth_hostname: non_blank(&self.backend_auth_hostname, "backend auth hostname")?,
                port: self.backend_port,
                timeout: Duration::from_millis(self.backend_timeout_ms),
            },
            skill: SkillConfig {
                region: non_blank(&self.alexa_region, "region")?,
            },
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            http: ServerHttpConfig {
                bind_address: self.bind_address,
            },
        }
    }
}

fn non_blank(value: &str, name: &'static str) -> Result<String, GatewayError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(GatewayError::MissingSetting(name));
    }
    Ok(value.to_string())
}
