//! Year-End Bonus Engine for Brazilian payroll
//!
//! This crate calculates the décimo terceiro salário: the proportional bonus for
//! the months worked in the year, split into installments, with INSS and IRRF
//! withholding explained bracket by bracket.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
