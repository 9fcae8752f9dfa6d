/// License declaration attached to a component description.
///
/// All fields are optional; a declaration with neither literal text nor a
/// declared file still carries the license type for display purposes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LicenseDeclaration {
    /// License type identifier, e.g. "MIT" or "Apache-2.0"
    pub license_type: Option<String>,
    /// Literal license text embedded in the component description
    pub text: Option<String>,
    /// File name of the license file declared by the component,
    /// relative to the component's installed root
    pub file: Option<String>,
}

/// Resolved description of a single third-party component.
///
/// Descriptions are read-only inputs produced by an external dependency
/// resolver. Several descriptions may share the same root component; the
/// acknowledgements document reports one entry per root.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDescription {
    /// Unique component identifier
    pub name: String,
    pub version: String,
    /// Ordered author list
    pub authors: Vec<String>,
    pub social_media_url: Option<String>,
    pub summary: String,
    /// Description in lightweight markup, rendered before output
    pub description: Option<String>,
    pub license: Option<LicenseDeclaration>,
    pub homepage: String,
    /// Name of the root component this description belongs to.
    /// `None` means the component is its own root.
    pub root: Option<String>,
}

impl ComponentDescription {
    /// Returns the name of the root component this description rolls up to.
    pub fn root_name(&self) -> &str {
        self.root.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn description(name: &str, root: Option<&str>) -> ComponentDescription {
        ComponentDescription {
            name: name.to_string(),
            version: "1.0.0".to_string(),
            authors: vec!["Author".to_string()],
            social_media_url: None,
            summary: "A component".to_string(),
            description: None,
            license: None,
            homepage: "https://example.com".to_string(),
            root: root.map(str::to_string),
        }
    }

    #[test]
    fn test_root_name_self_rooted() {
        let component = description("Alamofire", None);
        assert_eq!(component.root_name(), "Alamofire");
    }

    #[test]
    fn test_root_name_sub_component() {
        let component = description("Alamofire/Core", Some("Alamofire"));
        assert_eq!(component.root_name(), "Alamofire");
    }

    #[test]
    fn test_license_declaration_default() {
        let license = LicenseDeclaration::default();
        assert_eq!(license.license_type, None);
        assert_eq!(license.text, None);
        assert_eq!(license.file, None);
    }
}
