// Library exports for testing and reuse

pub mod check;
pub mod cli;
pub mod config;
pub mod decode;
pub mod docs;
pub mod error;
