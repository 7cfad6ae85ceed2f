//! Fuel and charging station finder.
//!
//! A web application that answers: "which stations are closest to this
//! Massachusetts town?"

pub mod config;
pub mod dataset;
pub mod geo;
pub mod nearby;
pub mod web;
