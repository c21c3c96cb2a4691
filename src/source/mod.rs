//! Remote country dataset (REST Countries API).

mod client;
mod error;

pub use client::CountrySource;
pub use error::SourceError;
