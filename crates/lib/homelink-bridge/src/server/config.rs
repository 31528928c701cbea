use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

pub struct ServerConfig {
    pub http: ServerHttpConfig,
}

pub struct ServerHttpConfig {
    pub bind_address: SocketAddr,
}
