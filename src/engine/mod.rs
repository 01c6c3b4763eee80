pub mod allocation;
pub mod builder;
pub mod service;
