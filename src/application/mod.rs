//! Application Layer
//!
//! Use cases wiring the domain ports together.

mod message_sender;

pub use message_sender::{MessageSender, SendError, IP_ADDRESS_HEADER};
