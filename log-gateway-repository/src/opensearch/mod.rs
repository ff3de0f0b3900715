//! OpenSearch implementation of the log index provider.
//!
//! This module provides a concrete implementation of `LogIndexProvider`
//! using OpenSearch as the backend.

mod index_config;
mod provider;

pub use index_config::{
    get_index_settings, CATEGORIES_ANALYZER, CONTENT_ANALYZER, PROGRAMMING_LANGUAGE_CHAR_FILTER,
};
pub use provider::OpenSearchProvider;
