//! Application layer: request/response DTOs and use cases.

pub mod dto;
pub mod use_cases;
