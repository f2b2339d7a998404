//! Payroll and attendance computation engine
//!
//! This crate turns daily attendance records for shift-based teams into
//! hours, hourly rates and pay: per-shift-type earnings, per-agent and
//! per-range summaries, net pay after adjustments, invoice data and
//! shareable read-only links, served over a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod share_link;
pub mod store;
