//! Vacation pay calculation engine
//!
//! This crate derives average monthly and daily income from a reference period of
//! monthly earnings plus bonuses, counts payable vacation days over a date range
//! (Sundays and holidays excluded), and computes the vacation pay. Results carry
//! soft diagnostics and an audit trace, and can be exported as CSV or served over
//! a small JSON API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
