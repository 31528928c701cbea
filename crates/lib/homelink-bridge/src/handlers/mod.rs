//! One translator per backend operation, each an `impl SkillBridge` block.
//!
//! Every translator performs exactly one backend call. Credential rejections (`res_code` 401)
//! and transport failures become protocol level error responses; only malformed requests or
//! unparseable backend bodies surface as [`crate::error::BridgeError`].

mod authorization;
mod control;
mod discovery;

const EXPIRED_CREDENTIAL_MESSAGE: &str = "The access token is invalid or has expired";

fn unreachable_message(error: &crate::backend::error::TransportError) -> String {
    format!("The home automation cloud is unreachable: {error}")
}
