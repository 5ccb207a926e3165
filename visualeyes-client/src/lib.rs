//! # visualeyes-client
//!
//! Everything that leaves the machine or touches disk: the prediction
//! service client, the image codec used for transport, and the API-key
//! credential store.

pub mod codec;
pub mod credentials;
pub mod prediction;

pub use credentials::{FileCredentialStore, KeyEntrySession};
pub use prediction::PredictionClient;
