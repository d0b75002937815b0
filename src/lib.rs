pub mod config;
pub mod error;
pub mod network;
pub mod select_device;
pub mod setup_logger;
pub mod summary;

pub use error::ProtocolError;
pub use network::packet::IPv4Header;
