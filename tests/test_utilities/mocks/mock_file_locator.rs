use ackgen::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock FileLocator serving in-memory accessors keyed by component name
#[derive(Default)]
pub struct MockFileLocator {
    accessors: HashMap<String, MockAccessorState>,
}

#[derive(Clone, Default)]
struct MockAccessorState {
    declared: Option<PathBuf>,
    files: HashMap<PathBuf, String>,
}

impl MockFileLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a readable license file for a component
    pub fn with_license_file(mut self, component: &str, file: &str, contents: &str) -> Self {
        let path = PathBuf::from(file);
        let mut files = HashMap::new();
        files.insert(path.clone(), contents.to_string());
        self.accessors.insert(
            component.to_string(),
            MockAccessorState {
                declared: Some(path),
                files,
            },
        );
        self
    }

    /// Registers a declared license file that does not exist
    pub fn with_missing_license_file(mut self, component: &str, file: &str) -> Self {
        self.accessors.insert(
            component.to_string(),
            MockAccessorState {
                declared: Some(PathBuf::from(file)),
                files: HashMap::new(),
            },
        );
        self
    }
}

impl FileLocator for MockFileLocator {
    fn file_accessor(
        &self,
        component: &ComponentDescription,
        _platform: &Platform,
    ) -> Option<Box<dyn FileAccessor>> {
        self.accessors
            .get(&component.name)
            .cloned()
            .map(|state| Box::new(MockAccessor { state }) as Box<dyn FileAccessor>)
    }
}

struct MockAccessor {
    state: MockAccessorState,
}

impl FileAccessor for MockAccessor {
    fn license_file(&self) -> Option<PathBuf> {
        self.state.declared.clone()
    }

    fn exists(&self, path: &Path) -> bool {
        self.state.files.contains_key(path)
    }

    fn read(&self, path: &Path) -> Result<String> {
        self.state
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no such file: {}", path.display()))
    }
}
