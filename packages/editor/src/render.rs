//! Raster-preview collaborator interface.
//!
//! Rendering itself is a black box that lives outside the engine; this
//! module only defines the contract and the retry discipline around
//! it: bounded exponential backoff, a fresh isolated working directory
//! per attempt, and degradation to a stale preview when a previous
//! render exists.

use crate::errors::{EditError, EditResult};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Black-box "render the container to a raster image" collaborator.
pub trait Renderer {
    /// Render `container` using `workdir` as scratch space, returning
    /// the path of the produced raster.
    fn render(&self, container: &Path, workdir: &Path) -> EditResult<PathBuf>;
}

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
        }
    }
}

impl RetryPolicy {
    fn delay(&self, attempt: u32) -> Duration {
        let scaled = self.base_delay.saturating_mul(1u32 << attempt.min(16));
        scaled.min(self.max_delay)
    }
}

/// Outcome of a preview render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// Freshly rendered raster.
    Fresh(PathBuf),
    /// All attempts failed; this is the last successful render.
    Stale(PathBuf),
}

/// Invoke the renderer with retries.
///
/// Each attempt gets its own temporary working directory so a crashed
/// attempt can never poison the next one. When every attempt fails and
/// `last_good` is available, the job degrades to a stale preview
/// instead of failing.
pub fn render_with_retry(
    renderer: &dyn Renderer,
    container: &Path,
    last_good: Option<&Path>,
    policy: &RetryPolicy,
) -> EditResult<Preview> {
    let mut last_err: Option<EditError> = None;

    for attempt in 0..policy.attempts.max(1) {
        let workdir = tempfile::tempdir()?;
        match renderer.render(container, workdir.path()) {
            Ok(raster) => return Ok(Preview::Fresh(raster)),
            Err(err) => {
                tracing::warn!(attempt, %err, "render attempt failed");
                last_err = Some(err);
                if attempt + 1 < policy.attempts {
                    std::thread::sleep(policy.delay(attempt));
                }
            }
        }
    }

    if let Some(previous) = last_good {
        tracing::warn!("rendering failed, serving stale preview");
        return Ok(Preview::Stale(previous.to_path_buf()));
    }
    Err(last_err.unwrap_or_else(|| {
        EditError::ExternalTool("renderer produced no result".to_string())
    }))
}
