//! In-memory transports for testing.
//!
//! Available behind the `test-utils` feature flag. Both transports record
//! every request they receive so tests can assert on what was sent.

mod echo_transport;
mod fault_transport;

pub use echo_transport::EchoTransport;
pub use fault_transport::FaultTransport;
