//! Navigator service
//!
//! Loads a document, runs a step chain over it and writes it back only when
//! the chain changed something and finished successfully.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{
    ApplicationError, ApplicationResult, IoResultExt, Pipeline, StepContext,
};
use crate::domain::Document;
use crate::infrastructure::traits::{DocumentCodec, FileSystem};

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Type names from the root to the node selected last
    pub selection: Vec<String>,
    /// Whether the document was written back
    pub saved: bool,
}

/// Service that drives one invocation against one document file.
pub struct NavigatorService {
    fs: Arc<dyn FileSystem>,
    codec: Arc<dyn DocumentCodec>,
}

impl NavigatorService {
    /// Create a new navigator service.
    pub fn new(fs: Arc<dyn FileSystem>, codec: Arc<dyn DocumentCodec>) -> Self {
        Self { fs, codec }
    }

    /// Read and parse the document at `path`.
    pub fn load(&self, path: &Path) -> ApplicationResult<Document> {
        debug!("load: {}", path.display());
        let text = self.fs.read_to_string(path).on_open(path)?;
        self.codec
            .parse(&text)
            .map_err(|source| ApplicationError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Load `path`, run `pipeline`, and persist if the run made changes.
    ///
    /// Step output and navigation diagnostics go to `out`. A failing step
    /// aborts the run before anything is written.
    #[instrument(level = "debug", skip(self, pipeline, out))]
    pub fn run(
        &self,
        path: &Path,
        pipeline: &Pipeline,
        out: &mut dyn Write,
    ) -> ApplicationResult<RunReport> {
        let mut document = self.load(path)?;

        let outcome = {
            let mut ctx = StepContext {
                codec: self.codec.as_ref(),
                out: &mut *out,
            };
            pipeline.run(&mut document, &mut ctx)?
        };
        out.flush().on_output()?;

        let selection = document
            .path_of(outcome.current)?
            .into_iter()
            .map(String::from)
            .collect();

        if outcome.dirty {
            self.persist(path, &document)?;
        } else {
            debug!("document unchanged, not saving");
        }

        Ok(RunReport {
            selection,
            saved: outcome.dirty,
        })
    }

    /// Serialize the whole document and replace the file with it.
    ///
    /// Always writes from the root, whatever node the chain ended on.
    pub fn persist(&self, path: &Path, document: &Document) -> ApplicationResult<()> {
        let mut text = self.codec.serialize(document, document.root())?;
        text.push('\n');
        self.fs.write_atomic(path, &text).on_write(path)?;
        info!("saved {}", path.display());
        Ok(())
    }
}
