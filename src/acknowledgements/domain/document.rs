use serde::Serialize;

/// One acknowledgement record per unique root component.
///
/// Field spellings follow the downstream UI schema, so the serialized keys
/// are `socialMediaURL`, `licenseType`, and `licenseText`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcknowledgementEntry {
    pub name: String,
    pub version: String,
    pub authors: Vec<String>,
    #[serde(rename = "socialMediaURL")]
    pub social_media_url: Option<String>,
    pub summary: String,
    /// Rendered rich text, never raw markup
    pub description: Option<String>,
    pub license_type: Option<String>,
    pub license_text: Option<String>,
    pub homepage: String,
}

/// Ordered acknowledgements document consumed by a downstream UI.
///
/// The document is only constructed when at least one entry exists; an
/// empty acknowledgements set is represented by the absence of a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcknowledgementDocument {
    pub specs: Vec<AcknowledgementEntry>,
}

impl AcknowledgementDocument {
    pub fn new(specs: Vec<AcknowledgementEntry>) -> Self {
        Self { specs }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> AcknowledgementEntry {
        AcknowledgementEntry {
            name: "Alamofire".to_string(),
            version: "5.9.0".to_string(),
            authors: vec!["Alamofire Software Foundation".to_string()],
            social_media_url: Some("https://twitter.com/AlamofireSF".to_string()),
            summary: "Elegant HTTP Networking".to_string(),
            description: Some("<p>Networking library</p>".to_string()),
            license_type: Some("MIT".to_string()),
            license_text: Some("MIT License text".to_string()),
            homepage: "https://github.com/Alamofire/Alamofire".to_string(),
        }
    }

    #[test]
    fn test_entry_serializes_ui_key_spellings() {
        let json = serde_json::to_value(entry()).unwrap();
        assert_eq!(json["name"], "Alamofire");
        assert_eq!(json["socialMediaURL"], "https://twitter.com/AlamofireSF");
        assert_eq!(json["licenseType"], "MIT");
        assert_eq!(json["licenseText"], "MIT License text");
        assert_eq!(json["homepage"], "https://github.com/Alamofire/Alamofire");
    }

    #[test]
    fn test_entry_serializes_absent_fields_as_null() {
        let mut absent = entry();
        absent.social_media_url = None;
        absent.license_type = None;
        absent.license_text = None;
        absent.description = None;

        let json = serde_json::to_value(absent).unwrap();
        assert!(json["socialMediaURL"].is_null());
        assert!(json["licenseType"].is_null());
        assert!(json["licenseText"].is_null());
        assert!(json["description"].is_null());
    }

    #[test]
    fn test_document_serializes_specs_key() {
        let document = AcknowledgementDocument::new(vec![entry()]);
        let json = serde_json::to_value(&document).unwrap();
        assert!(json["specs"].is_array());
        assert_eq!(json["specs"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_document_len() {
        let document = AcknowledgementDocument::new(vec![entry(), entry()]);
        assert_eq!(document.len(), 2);
        assert!(!document.is_empty());
    }
}
