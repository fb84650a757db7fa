//! Service container for dependency injection
//!
//! Wires the navigator service to its collaborators.

use std::sync::Arc;

use crate::application::services::NavigatorService;
use crate::config::Settings;
use crate::infrastructure::traits::{DocumentCodec, FileSystem, RealFileSystem};
use crate::infrastructure::xml::XmlCodec;

/// Container holding the application services.
pub struct ServiceContainer {
    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// XML engine abstraction
    pub codec: Arc<dyn DocumentCodec>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        let codec = Arc::new(XmlCodec::from_settings(&settings));
        Self::with_deps(Arc::new(RealFileSystem), codec)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(fs: Arc<dyn FileSystem>, codec: Arc<dyn DocumentCodec>) -> Self {
        Self { fs, codec }
    }

    pub fn navigator(&self) -> NavigatorService {
        NavigatorService::new(Arc::clone(&self.fs), Arc::clone(&self.codec))
    }
}
