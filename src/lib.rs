// lib.rs - Library exports for the CLMM zap planner

pub mod chain;
pub mod config;
pub mod engine;
pub mod error;
pub mod math;
pub mod models;

pub use error::PlannerError;
