pub mod common;
pub mod http;
pub mod rpc;
pub mod size;
