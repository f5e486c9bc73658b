pub mod gateway;
pub mod ports;
