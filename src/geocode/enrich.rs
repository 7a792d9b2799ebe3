//! Response model and city/state enrichment.
//!
//! The upstream payload is passed through unmodified apart from two
//! fields added to every feature. Provider-defined fields we do not
//! model are carried in flattened maps so nothing is dropped on the
//! way back out.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level upstream geocoding payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub features: Vec<Feature>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One geocoding result, annotated with derived city/state.
///
/// `city` and `state` are always serialized, as a string or null,
/// never absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub context: Vec<ContextEntry>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One hierarchical component of a place (neighborhood, place, region,
/// country), identified by a prefixed id like `place.12345`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextEntry {
    pub id: String,
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Annotate every feature with `city` and `state` derived from its
/// context entries.
///
/// Both fields start at null and are overwritten by each matching
/// entry in order, so the last match wins. The `place` and `region`
/// matches are evaluated independently; an id containing both
/// substrings sets both fields.
pub fn enrich(response: &mut GeocodeResponse) {
    for feature in &mut response.features {
        feature.city = None;
        feature.state = None;

        for entry in &feature.context {
            if entry.id.contains("place") {
                feature.city = Some(entry.text.clone());
            }
            if entry.id.contains("region") {
                feature.state = Some(entry.text.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response_from(value: Value) -> GeocodeResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn derives_city_and_state_from_context() {
        let mut response = response_from(json!({
            "features": [{
                "context": [
                    {"id": "region.1", "text": "California"},
                    {"id": "place.1", "text": "Los Angeles"}
                ]
            }]
        }));

        enrich(&mut response);

        assert_eq!(response.features[0].city.as_deref(), Some("Los Angeles"));
        assert_eq!(response.features[0].state.as_deref(), Some("California"));
    }

    #[test]
    fn last_matching_entry_wins() {
        let mut response = response_from(json!({
            "features": [{
                "context": [
                    {"id": "place.1", "text": "A"},
                    {"id": "place.2", "text": "B"}
                ]
            }]
        }));

        enrich(&mut response);

        assert_eq!(response.features[0].city.as_deref(), Some("B"));
        assert_eq!(response.features[0].state, None);
    }

    #[test]
    fn empty_context_leaves_fields_null() {
        let mut response = response_from(json!({
            "features": [{"context": []}]
        }));

        enrich(&mut response);

        assert_eq!(response.features[0].city, None);
        assert_eq!(response.features[0].state, None);
    }

    #[test]
    fn one_entry_can_satisfy_both_substrings() {
        let mut response = response_from(json!({
            "features": [{
                "context": [{"id": "place.region.1", "text": "Both"}]
            }]
        }));

        enrich(&mut response);

        assert_eq!(response.features[0].city.as_deref(), Some("Both"));
        assert_eq!(response.features[0].state.as_deref(), Some("Both"));
    }

    #[test]
    fn enrichment_resets_any_inbound_city_state() {
        // A feature arriving with city/state already set still gets
        // the derived values, not the upstream ones.
        let mut response = response_from(json!({
            "features": [{
                "city": "stale",
                "state": "stale",
                "context": []
            }]
        }));

        enrich(&mut response);

        assert_eq!(response.features[0].city, None);
        assert_eq!(response.features[0].state, None);
    }

    #[test]
    fn original_fields_are_preserved_in_output() {
        let mut response = response_from(json!({
            "type": "FeatureCollection",
            "query": ["paris"],
            "features": [{
                "id": "place.42",
                "place_name": "Paris, France",
                "relevance": 1.0,
                "context": [
                    {"id": "region.9", "text": "Ile-de-France", "wikidata": "Q13917"}
                ]
            }]
        }));

        enrich(&mut response);
        let output: Value = serde_json::to_value(&response).unwrap();

        assert_eq!(output["type"], "FeatureCollection");
        assert_eq!(output["query"], json!(["paris"]));
        let feature = &output["features"][0];
        assert_eq!(feature["id"], "place.42");
        assert_eq!(feature["place_name"], "Paris, France");
        assert_eq!(feature["relevance"], 1.0);
        assert_eq!(feature["context"][0]["wikidata"], "Q13917");
        assert_eq!(feature["city"], Value::Null);
        assert_eq!(feature["state"], "Ile-de-France");
    }

    #[test]
    fn null_fields_are_serialized_not_omitted() {
        let mut response = response_from(json!({
            "features": [{"context": []}]
        }));

        enrich(&mut response);
        let output: Value = serde_json::to_value(&response).unwrap();
        let feature = output["features"][0].as_object().unwrap();

        assert!(feature.contains_key("city"));
        assert!(feature.contains_key("state"));
        assert_eq!(feature["city"], Value::Null);
        assert_eq!(feature["state"], Value::Null);
    }

    #[test]
    fn missing_context_is_a_shape_failure() {
        let result: Result<GeocodeResponse, _> =
            serde_json::from_value(json!({"features": [{"id": "place.1"}]}));
        assert!(result.is_err());
    }

    #[test]
    fn missing_features_is_a_shape_failure() {
        let result: Result<GeocodeResponse, _> = serde_json::from_value(json!({"ok": true}));
        assert!(result.is_err());
    }
}
