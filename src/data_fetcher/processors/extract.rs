//! Prioritized fallback key extraction over raw provider JSON
//!
//! Provider schemas drift between versions: the same logical attribute
//! shows up under different keys depending on provider and API version.
//! Every logical attribute therefore has one ordered candidate-key list,
//! evaluated first-match-wins. The candidate orders are part of the
//! contract - reordering them changes output.

use serde_json::Value;

/// Team display name candidates, in priority order: provider team code,
/// acronym fields (REST then GraphQL spelling), short name, English name,
/// full display name.
pub const TEAM_NAME_KEYS: [&str; 6] = [
    "teamCode",
    "nameAcronym",
    "acronym",
    "shortName",
    "nameEng",
    "name",
];

/// Team logo URL candidates, in priority order: primary image, color
/// variant, light-theme variants (REST then GraphQL spelling), dark-theme
/// variants.
pub const TEAM_LOGO_KEYS: [&str; 6] = [
    "imageUrl",
    "colorImageUrl",
    "whiteImageUrl",
    "imageUrlLightMode",
    "blackImageUrl",
    "imageUrlDarkMode",
];

/// Returns the first candidate key whose value is a non-empty string.
///
/// Numbers are accepted and rendered as strings since some provider
/// versions send numeric codes where others send text. A non-object
/// `obj` uniformly yields `None`, never a type error.
pub fn first_string(obj: Option<&Value>, keys: &[&str]) -> Option<String> {
    let map = obj?.as_object()?;
    for key in keys {
        match map.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => continue,
        }
    }
    None
}

/// Returns the first candidate key whose value is a JSON number, as i64.
///
/// A present-but-null candidate is skipped in favor of later candidates;
/// a present 0 is returned as a real value. (Upstream used truthiness here,
/// which silently skipped 0 scores; first-present wins instead.)
pub fn first_number(obj: &Value, keys: &[&str]) -> Option<i64> {
    let map = obj.as_object()?;
    for key in keys {
        if let Some(value) = map.get(*key) {
            if let Some(n) = value.as_i64() {
                return Some(n);
            }
        }
    }
    None
}

/// Extracts a usable display name from a raw team object.
///
/// The team value may be absent, null, or not an object at all - each is
/// treated uniformly as "no data". Callers map `None` to the empty-string
/// sentinel.
pub fn team_name(team: Option<&Value>) -> Option<String> {
    first_string(team, &TEAM_NAME_KEYS)
}

/// Extracts a usable logo URL from a raw team object.
///
/// Same tolerance rules as [`team_name`].
pub fn team_logo(team: Option<&Value>) -> Option<String> {
    first_string(team, &TEAM_LOGO_KEYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_name_priority_order() {
        let team = json!({
            "name": "Gen.G Esports",
            "nameAcronym": "GEN",
            "teamCode": "GENG"
        });
        // teamCode outranks both acronym and full name
        assert_eq!(team_name(Some(&team)), Some("GENG".to_string()));
    }

    #[test]
    fn test_team_name_third_priority_wins_when_earlier_absent() {
        // Only the third-priority key is populated; the first two are absent.
        let team = json!({ "acronym": "DRX" });
        assert_eq!(team_name(Some(&team)), Some("DRX".to_string()));
    }

    #[test]
    fn test_team_name_skips_empty_strings() {
        let team = json!({
            "teamCode": "",
            "nameAcronym": "",
            "shortName": "T1"
        });
        assert_eq!(team_name(Some(&team)), Some("T1".to_string()));
    }

    #[test]
    fn test_team_name_tolerates_absent_null_and_non_object() {
        assert_eq!(team_name(None), None);
        assert_eq!(team_name(Some(&Value::Null)), None);
        assert_eq!(team_name(Some(&json!("just a string"))), None);
        assert_eq!(team_name(Some(&json!(42))), None);
        assert_eq!(team_name(Some(&json!({}))), None);
    }

    #[test]
    fn test_team_logo_priority_order() {
        let team = json!({
            "blackImageUrl": "https://img.example.com/black.png",
            "colorImageUrl": "https://img.example.com/color.png"
        });
        assert_eq!(
            team_logo(Some(&team)),
            Some("https://img.example.com/color.png".to_string())
        );
    }

    #[test]
    fn test_team_logo_graphql_variants() {
        let team = json!({
            "imageUrlDarkMode": "https://img.example.com/dark.png",
            "imageUrlLightMode": "https://img.example.com/light.png"
        });
        assert_eq!(
            team_logo(Some(&team)),
            Some("https://img.example.com/light.png".to_string())
        );
    }

    #[test]
    fn test_first_string_renders_numeric_codes() {
        let obj = json!({ "teamCode": 77 });
        assert_eq!(
            first_string(Some(&obj), &TEAM_NAME_KEYS),
            Some("77".to_string())
        );
    }

    #[test]
    fn test_first_number_zero_is_a_real_value() {
        let m = json!({ "homeScore": 0, "team1Score": 2 });
        assert_eq!(first_number(&m, &["homeScore", "team1Score"]), Some(0));
    }

    #[test]
    fn test_first_number_skips_null_candidates() {
        let m = json!({ "homeScore": null, "team1Score": 2 });
        assert_eq!(first_number(&m, &["homeScore", "team1Score"]), Some(2));
    }

    #[test]
    fn test_first_number_absent_everywhere() {
        let m = json!({ "somethingElse": 1 });
        assert_eq!(first_number(&m, &["homeScore", "team1Score"]), None);
    }
}
