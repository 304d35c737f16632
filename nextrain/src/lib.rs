//! Irish Rail departure search.
//!
//! Answers: "which trains leave this station soon, and which of them
//! terminate where I want to go?"

pub mod config;
pub mod decode;
pub mod domain;
pub mod irish_rail;
pub mod transport;
pub mod web;
