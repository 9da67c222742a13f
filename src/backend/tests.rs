//! Backend Module Tests
//!
//! Validates hit deserialization against the Elasticsearch response envelope,
//! the lossy typed-conversion pipeline, and the query bodies sent to the
//! cluster (built by pure functions, so no network is involved).

#[cfg(test)]
mod tests {
    use crate::backend::elastic::{match_all_query, nearest_query};
    use crate::backend::types::{PlaceHit, SearchEnvelope};

    fn hit_json(id: &str, lat: &str, lon: &str) -> String {
        format!(
            r#"{{
                "_index": "places",
                "_id": "{id}",
                "_score": 1.0,
                "_source": {{
                    "name": "Cafe",
                    "address": "Main st. 1",
                    "phone": "(495) 123-45-67",
                    "location": {{ "lat": "{lat}", "lon": "{lon}" }}
                }}
            }}"#
        )
    }

    // ============================================================
    // ENVELOPE DESERIALIZATION
    // ============================================================

    #[test]
    fn test_envelope_deserialization() {
        let body = format!(
            r#"{{
                "took": 3,
                "hits": {{
                    "total": {{ "value": 1, "relation": "eq" }},
                    "max_score": 1.0,
                    "hits": [{}]
                }}
            }}"#,
            hit_json("42", "55.76", "37.64")
        );

        let envelope: SearchEnvelope = serde_json::from_str(&body).unwrap();
        assert_eq!(envelope.hits.hits.len(), 1);

        let hit = &envelope.hits.hits[0];
        assert_eq!(hit.id, "42");
        assert_eq!(hit.score, Some(1.0));
        assert_eq!(hit.fields.name, "Cafe");
        assert_eq!(hit.fields.location.lat, "55.76");
    }

    #[test]
    fn test_null_score_from_geo_sort() {
        // Geo-sorted responses carry "_score": null
        let body = hit_json("7", "55.0", "37.0").replace("1.0", "null");
        let hit: PlaceHit = serde_json::from_str(&body).unwrap();
        assert_eq!(hit.score, None);
    }

    // ============================================================
    // TYPED CONVERSION (lossy-drop pipeline)
    // ============================================================

    #[test]
    fn test_to_place_parses_all_fields() {
        let hit: PlaceHit = serde_json::from_str(&hit_json("42", "55.76", "37.64")).unwrap();
        let place = hit.to_place().expect("valid hit should convert");

        assert_eq!(place.id, 42);
        assert_eq!(place.name, "Cafe");
        assert!((place.location.lat - 55.76).abs() < f64::EPSILON);
        assert!((place.location.lon - 37.64).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_place_rejects_bad_lat() {
        let hit: PlaceHit = serde_json::from_str(&hit_json("42", "north", "37.64")).unwrap();
        assert!(hit.to_place().is_none());
    }

    #[test]
    fn test_to_place_rejects_bad_lon() {
        let hit: PlaceHit = serde_json::from_str(&hit_json("42", "55.76", "")).unwrap();
        assert!(hit.to_place().is_none());
    }

    #[test]
    fn test_to_place_rejects_non_numeric_id() {
        let hit: PlaceHit = serde_json::from_str(&hit_json("doc-42", "55.76", "37.64")).unwrap();
        assert!(hit.to_place().is_none());
    }

    // ============================================================
    // QUERY BODIES
    // ============================================================

    #[test]
    fn test_match_all_query_shape() {
        let query = match_all_query(20_000);

        assert_eq!(query["size"], 20_000);
        assert!(query["query"]["match_all"].is_object());
    }

    #[test]
    fn test_nearest_query_shape() {
        let query = nearest_query(55.797129, 37.579789, 3);

        assert_eq!(query["size"], 3);
        let sort = &query["sort"][0]["_geo_distance"];
        assert_eq!(sort["order"], "asc");
        assert_eq!(sort["unit"], "km");
        assert_eq!(sort["mode"], "min");
        assert_eq!(sort["distance_type"], "arc");
        assert_eq!(sort["ignore_unmapped"], true);
        assert_eq!(sort["location"]["lat"], 55.797129);
        assert_eq!(sort["location"]["lon"], 37.579789);
    }
}
