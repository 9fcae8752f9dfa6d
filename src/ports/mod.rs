//! Port definitions (interfaces) between the application core and
//! infrastructure.

pub mod outbound;
