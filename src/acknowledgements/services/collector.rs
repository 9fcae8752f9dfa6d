use crate::acknowledgements::domain::{
    AcknowledgementDocument, AcknowledgementEntry, ComponentDescription, Platform,
};
use crate::acknowledgements::policies::LicenseSource;
use crate::ports::outbound::{DiagnosticSink, FileLocator, MarkupRenderer};
use std::collections::HashSet;

/// AcknowledgementCollector - core service producing the acknowledgements
/// document for a target's resolved component list
///
/// The collector deduplicates components by root, filters excluded roots,
/// resolves license text by precedence, and renders description markup.
/// It holds no mutable state; the renderer and diagnostic sink are
/// injected so a single collector can be reused across calls.
///
/// # Type Parameters
/// * `MR` - MarkupRenderer implementation
/// * `DS` - DiagnosticSink implementation
pub struct AcknowledgementCollector<MR, DS> {
    renderer: MR,
    diagnostics: DS,
}

impl<MR, DS> AcknowledgementCollector<MR, DS>
where
    MR: MarkupRenderer,
    DS: DiagnosticSink,
{
    /// Creates a new collector with injected renderer and diagnostic sink
    pub fn new(renderer: MR, diagnostics: DS) -> Self {
        Self {
            renderer,
            diagnostics,
        }
    }

    /// Generates the acknowledgements document for a component list
    ///
    /// # Arguments
    /// * `components` - Ordered component descriptions, possibly containing
    ///   several sub-components of the same root
    /// * `locator` - Capability to obtain per-component file accessors
    /// * `platform` - Platform the generation request targets
    /// * `excluded` - Root component names to suppress entirely
    ///
    /// # Returns
    /// The ordered document, or `None` when no entries remain after
    /// deduplication and exclusion
    pub fn generate(
        &self,
        components: &[ComponentDescription],
        locator: &dyn FileLocator,
        platform: &Platform,
        excluded: &HashSet<String>,
    ) -> Option<AcknowledgementDocument> {
        let roots = self.root_components(components, excluded);

        if roots.is_empty() {
            return None;
        }

        let specs = roots
            .into_iter()
            .map(|(name, spec)| self.build_entry(name, spec, locator, platform))
            .collect();

        Some(AcknowledgementDocument::new(specs))
    }

    /// Maps descriptions to their roots, deduplicated by root name in
    /// first-occurrence order, with excluded roots dropped before they can
    /// claim a dedup slot.
    ///
    /// A root referenced by name but missing from the list is represented
    /// by the first description that references it.
    fn root_components<'a>(
        &self,
        components: &'a [ComponentDescription],
        excluded: &HashSet<String>,
    ) -> Vec<(&'a str, &'a ComponentDescription)> {
        let mut seen = HashSet::new();
        let mut roots = Vec::new();

        for component in components {
            let root_name = component.root_name();
            if excluded.contains(root_name) {
                continue;
            }
            if !seen.insert(root_name) {
                continue;
            }
            let root = components
                .iter()
                .find(|candidate| candidate.name == root_name)
                .unwrap_or(component);
            roots.push((root_name, root));
        }

        roots
    }

    fn build_entry(
        &self,
        name: &str,
        spec: &ComponentDescription,
        locator: &dyn FileLocator,
        platform: &Platform,
    ) -> AcknowledgementEntry {
        let license_text = self.license_text(spec, locator, platform);
        let license_type = spec
            .license
            .as_ref()
            .and_then(|license| license.license_type.clone());

        AcknowledgementEntry {
            name: name.to_string(),
            version: spec.version.clone(),
            authors: spec.authors.clone(),
            social_media_url: spec.social_media_url.clone(),
            summary: spec.summary.clone(),
            description: spec
                .description
                .as_deref()
                .map(|markup| self.renderer.render(markup)),
            license_type,
            license_text,
            homepage: spec.homepage.clone(),
        }
    }

    /// Resolves the license text for a component by precedence: literal
    /// text, then a declared license file, otherwise absent.
    ///
    /// A declared file that is missing or unreadable produces a warning
    /// and leaves the text absent; generation never fails here.
    fn license_text(
        &self,
        spec: &ComponentDescription,
        locator: &dyn FileLocator,
        platform: &Platform,
    ) -> Option<String> {
        let mut accessor = None;
        let source = LicenseSource::select(spec.license.as_ref(), || {
            accessor = locator.file_accessor(spec, platform);
            accessor.as_ref().and_then(|accessor| accessor.license_file())
        });

        match source {
            LicenseSource::Inline(text) => Some(text),
            LicenseSource::Absent => None,
            LicenseSource::File(path) => {
                let accessor = accessor.as_ref()?;
                if !accessor.exists(&path) {
                    self.warn_unreadable(&path, &spec.name);
                    return None;
                }
                match accessor.read(&path) {
                    Ok(text) => Some(text),
                    Err(_) => {
                        self.warn_unreadable(&path, &spec.name);
                        None
                    }
                }
            }
        }
    }

    fn warn_unreadable(&self, path: &std::path::Path, component: &str) {
        self.diagnostics.warn(&format!(
            "Unable to read the license file `{}` for the component `{}`",
            path.display(),
            component
        ));
    }
}
