//! Shift Reconstruction and Attendance Analytics Engine
//!
//! This crate reconstructs discrete work shifts from raw clock-in/clock-out
//! event logs, applies business rules (break deduction, overtime thresholds,
//! cross-midnight handling), and produces per-staff attendance analytics for
//! a reporting window.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod reconstruction;
