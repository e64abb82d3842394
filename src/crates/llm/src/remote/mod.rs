//! Remote completion providers.

pub mod zai;

pub use zai::ZaiClient;
