//! Wire types for the voice-assistant smart home protocol, payload versions 2 and 3.
//!
//! Inbound requests stay as raw JSON so they can be forwarded to the backend untouched;
//! [`request::InboundRequest`] resolves the route and reads the few fields the bridge needs.
//! Outbound responses are built from the typed [`message`] structures.

pub mod error;
pub mod message;
pub mod request;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::message::status::{ErrorPayload, ErrorType};
    pub use crate::message::{Directive, Event, EventEnvelope, Header, PayloadVersion, SkillResponse};
    pub use crate::request::{InboundRequest, Route};
}
