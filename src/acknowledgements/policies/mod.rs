pub mod license_source;

pub use license_source::LicenseSource;
