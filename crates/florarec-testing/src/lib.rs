//! Testing infrastructure for florarec integration tests.
//!
//! This crate provides utilities for writing orchestration tests:
//! - `MockGateway`: scripted in-memory recommendation gateway
//! - `fixtures`: sample criteria and plant records

pub mod fixtures;
pub mod gateway;

pub use gateway::MockGateway;
