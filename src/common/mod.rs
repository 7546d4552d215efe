//! Common module - shared traits and interfaces
//!
//! This module contains the seams between the lifecycle pipeline and its collaborators:
//! the registry it reads from and the sink it reports to.

pub mod traits;

pub use traits::*;
