//! Scan report serialization for the Download Report action.
//!
//! Reports are built entirely client-side from the in-memory result; nothing
//! is persisted.

use serde::Serialize;

use crate::detection::DetectionResult;

/// Everything that goes into a downloadable scan report.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport<'a> {
    pub product: &'static str,
    pub image_file: &'a str,
    pub result: &'a DetectionResult,
}

/// Pretty-printed JSON for the report download.
pub fn report_json(image_file: &str, result: &DetectionResult) -> String {
    let report = ScanReport {
        product: "Areca AI",
        image_file,
        result,
    };
    // Serialization of these derive-only types cannot fail.
    serde_json::to_string_pretty(&report).unwrap_or_default()
}

/// File name offered for the download, derived from the uploaded image name.
pub fn report_file_name(image_file: &str) -> String {
    let stem = image_file
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(image_file);
    if stem.is_empty() {
        "plant-health-report.json".to_string()
    } else {
        format!("{}-report.json", stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::simulated_result;

    #[test]
    fn test_report_json_contains_result_fields() {
        let json = report_json("palm.jpg", &simulated_result());
        assert!(json.contains("\"image_file\": \"palm.jpg\""));
        assert!(json.contains("Leaf Spot Disease"));
        assert!(json.contains("\"confidence\": 87"));
        assert!(json.contains("\"diseased\""));
    }

    #[test]
    fn test_report_file_name_from_image() {
        assert_eq!(report_file_name("palm.jpg"), "palm-report.json");
        assert_eq!(report_file_name("front-yard.photo.png"), "front-yard.photo-report.json");
        assert_eq!(report_file_name("noext"), "noext-report.json");
        assert_eq!(report_file_name(""), "plant-health-report.json");
    }
}
