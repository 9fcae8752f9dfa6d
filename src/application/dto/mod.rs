pub mod acknowledgements_request;
pub mod acknowledgements_response;

pub use acknowledgements_request::AcknowledgementsRequest;
pub use acknowledgements_response::AcknowledgementsResponse;
