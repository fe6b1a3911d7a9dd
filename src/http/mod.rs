//! HTTP client construction and the transport seam used by the probe engine.
mod client;
mod transport;

#[cfg(test)]
mod tests;

pub use client::{ClientSettings, build_client};
pub use transport::{
    ProbeTransport, ReqwestTransport, TransportError, TransportErrorKind, TransportResponse,
};
