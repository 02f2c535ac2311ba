//! UI components for the Employee Manager GUI
//!
//! These modules extend the `App` struct with rendering methods.
//! They are imported for their side effects (impl blocks).

mod auth;
mod common;
mod dashboard;
mod employee_detail;
mod employee_form;
mod employee_list;
mod navbar;
