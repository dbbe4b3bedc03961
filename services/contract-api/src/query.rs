use axum::extract::{rejection::QueryRejection, Query};

use crate::api_error::{bad_request, ApiFailure};

/// Raw `key=value` pairs in request order. Taken as a `Result` so a bad query
/// string still gets a JSON error body.
pub type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// First value for `key`; later repeats are ignored.
pub fn first_value(query: QueryPairs, key: &str) -> Result<Option<String>, ApiFailure> {
    let Query(pairs) = query.map_err(|e| bad_request(format!("Invalid query string: {e}")))?;
    Ok(pairs.into_iter().find(|(k, _)| k == key).map(|(_, v)| v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        Ok(Query(raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()))
    }

    #[test]
    fn test_first_value_wins() {
        let q = pairs(&[("id", "0"), ("other", "x"), ("id", "1")]);
        assert_eq!(first_value(q, "id").unwrap().as_deref(), Some("0"));
    }

    #[test]
    fn test_absent_key() {
        assert!(first_value(pairs(&[("x", "1")]), "id").unwrap().is_none());
        assert!(first_value(pairs(&[]), "id").unwrap().is_none());
    }
}
