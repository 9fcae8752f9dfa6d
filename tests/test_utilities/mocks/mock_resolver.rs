use ackgen::prelude::*;
use std::path::Path;

/// Mock ComponentResolver serving a fixed component list
pub struct MockComponentResolver {
    pub components: Vec<ComponentDescription>,
    pub should_fail: bool,
}

impl MockComponentResolver {
    pub fn new(components: Vec<ComponentDescription>) -> Self {
        Self {
            components,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            components: vec![],
            should_fail: true,
        }
    }
}

impl ComponentResolver for MockComponentResolver {
    fn resolve_components(&self, _manifest_path: &Path) -> Result<Vec<ComponentDescription>> {
        if self.should_fail {
            anyhow::bail!("Mock component resolver failure");
        }
        Ok(self.components.clone())
    }
}
