pub mod console;
pub mod gateways;
pub mod in_memory;
