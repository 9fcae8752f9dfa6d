pub mod generate_acknowledgements;

pub use generate_acknowledgements::GenerateAcknowledgementsUseCase;
