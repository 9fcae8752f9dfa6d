use crate::acknowledgements::services::AcknowledgementCollector;
use crate::application::dto::{AcknowledgementsRequest, AcknowledgementsResponse};
use crate::ports::outbound::{ComponentResolver, DiagnosticSink, FileLocator, MarkupRenderer};
use std::collections::HashSet;

/// GenerateAcknowledgementsUseCase - Core use case for acknowledgements
/// generation
///
/// Orchestrates the generation workflow using generic dependency
/// injection for all infrastructure dependencies: resolve the component
/// list, run the collector, and wrap the result in a response DTO.
///
/// # Type Parameters
/// * `CR` - ComponentResolver implementation
/// * `FL` - FileLocator implementation
/// * `MR` - MarkupRenderer implementation
/// * `DS` - DiagnosticSink implementation
pub struct GenerateAcknowledgementsUseCase<CR, FL, MR, DS> {
    component_resolver: CR,
    file_locator: FL,
    collector: AcknowledgementCollector<MR, DS>,
}

impl<CR, FL, MR, DS> GenerateAcknowledgementsUseCase<CR, FL, MR, DS>
where
    CR: ComponentResolver,
    FL: FileLocator,
    MR: MarkupRenderer,
    DS: DiagnosticSink,
{
    /// Creates a new use case with injected dependencies
    pub fn new(component_resolver: CR, file_locator: FL, renderer: MR, diagnostics: DS) -> Self {
        Self {
            component_resolver,
            file_locator,
            collector: AcknowledgementCollector::new(renderer, diagnostics),
        }
    }

    /// Executes the acknowledgements generation use case
    ///
    /// # Arguments
    /// * `request` - Generation request with manifest path, platform, and
    ///   exclusions
    ///
    /// # Returns
    /// A response holding the generated document (or `None` when no
    /// acknowledgements are needed) and the resolved component count
    ///
    /// # Errors
    /// Returns an error only when the component manifest cannot be
    /// resolved; collection itself never fails.
    pub fn execute(
        &self,
        request: AcknowledgementsRequest,
    ) -> crate::shared::Result<AcknowledgementsResponse> {
        let components = self
            .component_resolver
            .resolve_components(&request.manifest_path)?;

        let excluded: HashSet<String> = request.excluded_names.iter().cloned().collect();

        let document = self.collector.generate(
            &components,
            &self.file_locator,
            &request.platform,
            &excluded,
        );

        Ok(AcknowledgementsResponse::new(document, components.len()))
    }
}
