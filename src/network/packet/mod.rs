pub mod ethernet;
pub mod ipv4;
pub mod protocols;

pub use ethernet::EthernetHeader;
pub use ipv4::IPv4Header;
pub use protocols::protocol_name;
