//! OpenSearch index configuration and mappings.
//!
//! This module defines the analysis settings and mappings for the log index.

use log_gateway_shared::LOG_ID_FIELD;
use serde_json::{json, Value};

/// Name of the mapping char filter that normalizes `c#` spellings.
pub const PROGRAMMING_LANGUAGE_CHAR_FILTER: &str = "programming_language";

/// Analyzer for long-form text: strips HTML and stop words.
pub const CONTENT_ANALYZER: &str = "content";

/// Analyzer for short labels: no HTML stripping, keeps stop words.
pub const CATEGORIES_ANALYZER: &str = "categories";

/// Get the index settings and mappings for the log index.
///
/// The configuration includes:
/// - **programming_language**: mapping char filter. `c#` and `C#` map to
///   different replacements on purpose; existing indexed data depends on it.
/// - **content**: `html_strip` + `programming_language`, standard tokenizer,
///   `lowercase` and `stop` filters
/// - **categories**: `programming_language`, standard tokenizer, `lowercase`
/// - **id**: keyword field so term queries on it match exactly
///
/// Other log fields are mapped dynamically.
pub fn get_index_settings() -> Value {
    json!({
        "settings": {
            "analysis": {
                "char_filter": {
                    PROGRAMMING_LANGUAGE_CHAR_FILTER: {
                        "type": "mapping",
                        "mappings": [
                            "c# => csharp",
                            "C# => Csharp"
                        ]
                    }
                },
                "analyzer": {
                    CONTENT_ANALYZER: {
                        "type": "custom",
                        "char_filter": ["html_strip", PROGRAMMING_LANGUAGE_CHAR_FILTER],
                        "tokenizer": "standard",
                        "filter": ["lowercase", "stop"]
                    },
                    CATEGORIES_ANALYZER: {
                        "type": "custom",
                        "char_filter": [PROGRAMMING_LANGUAGE_CHAR_FILTER],
                        "tokenizer": "standard",
                        "filter": ["lowercase"]
                    }
                }
            }
        },
        "mappings": {
            "properties": {
                LOG_ID_FIELD: {
                    "type": "keyword"
                }
            }
        }
    })
}
