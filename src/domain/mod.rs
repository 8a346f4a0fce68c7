//! Domain layer containing business entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//! - [`clock`] - Time source abstraction
//!
//! The domain layer has no dependencies on infrastructure or transport
//! layers. Business logic lives in [`crate::application::services`].

pub mod clock;
pub mod entities;
pub mod repositories;
