//! Acknowledgements domain layer.
//!
//! Pure business logic for collecting license and authorship metadata:
//! domain models, the license source selection policy, and the collector
//! service that produces the acknowledgements document.

pub mod domain;
pub mod policies;
pub mod services;
