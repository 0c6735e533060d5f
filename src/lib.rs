//! VoidVendor Integration
//!
//! Forum posting with live threat-intel context for LucyVO1D.
//! Fetches the void's intel feed, composes a transmission through a
//! generation collaborator, and posts it to the community forum.

pub mod action;
pub mod compose;
pub mod config;
pub mod forum;
pub mod inference;
pub mod intel;
pub mod types;
