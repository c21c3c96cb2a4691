//! Server-rendered countries catalog.
//!
//! Every request fetches the full country dataset from the remote source,
//! builds a throwaway fuzzy-search index over it, shapes the records with
//! the query processor and renders the result as HTML or JSON.

pub mod catalog;
pub mod config;
pub mod country;
pub mod source;
pub mod web;
