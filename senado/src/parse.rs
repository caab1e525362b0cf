// Copyright 2024 Andrew Conway.
// This file is part of SenadoResults.
// SenadoResults is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// SenadoResults is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with SenadoResults.  If not, see <https://www.gnu.org/licenses/>.

//! Turn the downloaded bytes into an [ElectionSummary].

use serde_json::Value;
use thiserror::Error;
use crate::election_results::ElectionSummary;

#[derive(Error, Debug)]
pub enum DecodeError {
    /// Not JSON, or a value of the wrong type (e.g. a string where a number should be).
    #[error("Error unmarshaling JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Unknown fields are ignored; missing or null ones are left at zero.
/// Keys match regardless of case, and if a key is repeated the last one wins.
pub fn decode(bytes:&[u8]) -> Result<ElectionSummary,DecodeError> {
    let document : Value = serde_json::from_slice(bytes)?;
    let summary : ElectionSummary = serde_json::from_value(lowercase_keys(document))?;
    tracing::debug!(parties=summary.parties.len(), name=%summary.name, "Decoded election results");
    Ok(summary)
}

/// Lowercase every object key, at any depth. Keys that collide after lowercasing keep the later value.
fn lowercase_keys(value:Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut res = serde_json::Map::with_capacity(map.len());
            for (key,value) in map {
                res.insert(key.to_lowercase(),lowercase_keys(value));
            }
            Value::Object(res)
        }
        Value::Array(values) => Value::Array(values.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::parse::{decode, lowercase_keys, DecodeError};

    #[test]
    fn test_empty_object_is_all_zero() {
        let summary = decode(b"{}").unwrap();
        assert_eq!(summary.census,0);
        assert_eq!(summary.scrutinized_percentage,0.0);
        assert!(summary.name.is_empty());
        assert!(summary.parties.is_empty());
    }

    #[test]
    fn test_truncated_json_is_an_error() {
        let err = decode(br#"{"censo": 12"#).unwrap_err();
        assert!(matches!(err,DecodeError::Parse(_)));
        assert!(err.to_string().starts_with("Error unmarshaling JSON: "));
    }

    #[test]
    fn test_lowercase_keys_nested() {
        let folded = lowercase_keys(json!({"Censo": 1, "PARTIDOS": [{"Siglas": "PP", "Extra": {"Deep": null}}]}));
        assert_eq!(folded,json!({"censo": 1, "partidos": [{"siglas": "PP", "extra": {"deep": null}}]}));
    }

    #[test]
    fn test_lowercase_keys_later_value_wins() {
        let folded = lowercase_keys(json!({"censo": 1, "CENSO": 2}));
        assert_eq!(folded,json!({"censo": 2}));
    }
}
