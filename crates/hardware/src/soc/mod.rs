//! Platform Components.
//!
//! This module organizes the collaborators an atomic instruction talks to,
//! the traits they implement, and the builder that assembles the default
//! platform.

/// Default platform construction.
pub mod builder;

/// Default extension hook, trap handler and oracle.
pub mod hooks;

/// Flat RAM.
pub mod memory;

/// Bare-mode address translation.
pub mod mmu;

/// Collaborator trait definitions.
pub mod traits;

pub use builder::System;
pub use traits::Platform;
