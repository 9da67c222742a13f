//! Ingestion Module Tests
//!
//! Validates the row-to-document mapping, in particular the lon-before-lat
//! column order of the source file.

#[cfg(test)]
mod tests {
    use csv::StringRecord;

    use crate::ingest::loader::record_to_doc;

    #[test]
    fn test_record_maps_columns() {
        let record = StringRecord::from(vec![
            "17",
            "Bar Centrale",
            "Main st. 5",
            "(495) 111-22-33",
            "37.632745", // lon comes before lat in the file
            "55.805825",
        ]);

        let (id, doc) = record_to_doc(&record).unwrap();

        assert_eq!(id, "17");
        assert_eq!(doc["name"], "Bar Centrale");
        assert_eq!(doc["address"], "Main st. 5");
        assert_eq!(doc["phone"], "(495) 111-22-33");
        assert_eq!(doc["location"]["lat"], "55.805825");
        assert_eq!(doc["location"]["lon"], "37.632745");
    }

    #[test]
    fn test_short_record_is_rejected() {
        let record = StringRecord::from(vec!["17", "Bar Centrale", "Main st. 5"]);
        assert!(record_to_doc(&record).is_none());
    }

    #[test]
    fn test_coordinates_stay_strings() {
        // Parsing is deferred to the serving pipeline; the index stores the
        // file's strings verbatim, bad ones included
        let record = StringRecord::from(vec![
            "18",
            "No Fixed Abode",
            "Nowhere 0",
            "",
            "not-a-lon",
            "not-a-lat",
        ]);

        let (_, doc) = record_to_doc(&record).unwrap();
        assert_eq!(doc["location"]["lat"], "not-a-lat");
        assert_eq!(doc["location"]["lon"], "not-a-lon");
    }
}
