pub mod download;
pub mod models;
pub mod transcribe;
