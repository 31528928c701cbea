//! Translates smart home directives into calls against the home automation cloud.
//!
//! [`SkillBridge`] owns the configuration and a [`backend::BackendTransport`]; it resolves the
//! route of each inbound request, performs a single backend call and maps the reply back into
//! the envelope the voice assistant expects. [`server::Server`] exposes the bridge over HTTP.

pub mod backend;
pub mod bridge;
pub mod config;
pub mod error;
pub mod server;

mod handlers;
mod router;

#[cfg(test)]
mod testing;

pub use bridge::SkillBridge;
