//! Console shop: configuration, presentation and the demo walkthrough.
//!
//! Entities never format themselves; everything user-facing is rendered here
//! from read-only views.

pub mod config;
pub mod dto;
pub mod presentation;
pub mod scenario;
