//! SBD relay - bridges RockBLOCK satellite messaging and Twilio SMS.
//!
//! Each inbound webhook is translated and forwarded to the other network:
//! - RockBLOCK MO deliveries become one SMS, addressed by the payload
//! - Twilio incoming SMS become one MT message to the registered device

pub mod api;
pub mod codec;
pub mod config;
pub mod directory;
pub mod error;
pub mod gateway;
pub mod origin;
pub mod relay;

pub use config::Config;
pub use directory::Directory;
pub use error::{RelayError, RelayResult};
pub use origin::Origin;
pub use relay::{Relay, RelayResponse, RelaySettings};
