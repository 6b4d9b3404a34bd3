//! Shape detection and flattening of provider responses
//!
//! Providers wrap the same match data in different structures depending on
//! endpoint and version: a `matches` list, a per-date group carrying a
//! `matchList`, a bare match object, or arrays nesting any of these. The
//! walk here recognizes each shape and produces one flat, order-preserving
//! sequence of raw match objects, so the normalizer never needs to know
//! which provider or version it is looking at.

use serde_json::Value;
use tracing::debug;

/// Keys whose presence marks an object as a single match.
/// `id` alone is too common (teams carry one too), so it only counts
/// together with a start-time field.
const MATCH_MARKER_KEY: &str = "matchId";
const START_KEYS: [&str; 3] = ["startDate", "startTime", "scheduledAt"];

/// Whether a provider envelope reports success.
///
/// The REST provider wraps payloads in `{"code": 200, "content": ...}`.
/// A missing code field means the payload has no envelope (GraphQL lists,
/// pre-extracted nodes) and is taken at face value.
pub fn response_succeeded(response: &Value) -> bool {
    match response.get("code").and_then(Value::as_i64) {
        Some(code) => code == 200,
        None => true,
    }
}

/// Flattens a provider response into the raw match objects it contains.
///
/// Recognized shapes, in priority order per node:
/// 1. object with a `matches` array - its entries are walked;
/// 2. object that is itself a match (carries `matchId`, or `id` plus a
///    start-time field) - yielded as-is;
/// 3. object with a `matchList` array (grouped-by-date wrapper) - its
///    entries are walked;
/// 4. array - each element walked depth-first, order preserved.
///
/// Objects matching none of the shapes are skipped and counted, never an
/// error: one malformed group must not lose the rest of the response. If
/// the envelope reports failure the body is not walked at all - a provider
/// failure is not the same thing as "zero matches exist".
pub fn flatten_matches(response: &Value) -> Vec<&Value> {
    if !response_succeeded(response) {
        debug!("Provider envelope reports failure, skipping body walk");
        return Vec::new();
    }

    let body = response.get("content").unwrap_or(response);

    let mut matches = Vec::new();
    let mut skipped = 0usize;
    collect(body, &mut matches, &mut skipped);

    if skipped > 0 {
        debug!(
            "Skipped {} unrecognized nodes while flattening response",
            skipped
        );
    }
    matches
}

fn looks_like_match(map: &serde_json::Map<String, Value>) -> bool {
    map.contains_key(MATCH_MARKER_KEY)
        || (map.contains_key("id") && START_KEYS.iter().any(|key| map.contains_key(*key)))
}

fn collect<'a>(node: &'a Value, out: &mut Vec<&'a Value>, skipped: &mut usize) {
    match node {
        Value::Object(map) => {
            if let Some(Value::Array(list)) = map.get("matches") {
                for item in list {
                    collect(item, out, skipped);
                }
            } else if looks_like_match(map) {
                out.push(node);
            } else if let Some(Value::Array(list)) = map.get("matchList") {
                for item in list {
                    collect(item, out, skipped);
                }
            } else {
                *skipped += 1;
            }
        }
        Value::Array(list) => {
            for item in list {
                collect(item, out, skipped);
            }
        }
        Value::Null => {}
        _ => *skipped += 1,
    }
}
