//! Namespace and message name tags used on the wire.

pub const CONTROL_V2: &str = "Alexa.ConnectedHome.Control";
pub const DISCOVERY_V2: &str = "Alexa.ConnectedHome.Discovery";

pub const CONTROL_V3: &str = "Alexa";
pub const DISCOVERY_V3: &str = "Alexa.Discovery";
pub const AUTHORIZATION_V3: &str = "Alexa.Authorization";

pub mod name {
    pub const DISCOVER_APPLIANCES_RESPONSE: &str = "DiscoverAppliancesResponse";
    pub const DISCOVER_RESPONSE: &str = "Discover.Response";

    pub const EXPIRED_ACCESS_TOKEN_ERROR: &str = "ExpiredAccessTokenError";
    pub const DEPENDENT_SERVICE_UNAVAILABLE_ERROR: &str = "DependentServiceUnavailableError";
    pub const UNEXPECTED_INFORMATION_RECEIVED_ERROR: &str = "UnexpectedInformationReceivedError";

    pub const ERROR_RESPONSE: &str = "ErrorResponse";
}
