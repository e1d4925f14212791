//! Gateway implementations.

mod embedded;

pub use embedded::EmbeddedGateway;
