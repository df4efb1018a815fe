pub mod client_ip;
pub mod parser;
pub mod pipeline;
