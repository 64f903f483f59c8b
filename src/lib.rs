//! Payroll and working-days engine for the Romanian fiscal regime
//!
//! This crate converts gross salaries to net (and, by bisection, net to
//! gross) under a configurable fiscal year, and computes legal holidays and
//! per-month working days from the Orthodox Easter calendar.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
