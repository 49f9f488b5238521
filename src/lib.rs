//! Campus Engine
//!
//! This crate computes faculty leave statistics (annual quota, monthly cap
//! and loss-of-pay days) and student attendance aggregates (monthly totals,
//! excused-inclusive percentages and standing), with policy loaded from YAML
//! and an optional HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
