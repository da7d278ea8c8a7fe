//! Capability traits (ports) for the transformation pipeline

mod ports;

pub use ports::{Mapping, MessageDelivery};
