//! Pipeline lifecycle states.

use std::fmt;

/// Where a [`TrianglePipeline`](super::TrianglePipeline) is in its lifecycle.
///
/// `Uninitialized → Initialized → Ready → Destroyed`, with `Failed`
/// terminal for rendering (it can still be destroyed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    #[default]
    Uninitialized,
    /// Geometry uploaded, program not built yet.
    Initialized,
    Ready,
    Failed,
    Destroyed,
}

impl PipelineState {
    /// Whether `destroy` is allowed from this state.
    pub fn can_destroy(self) -> bool {
        matches!(self, PipelineState::Ready | PipelineState::Failed)
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineState::Uninitialized => "uninitialized",
            PipelineState::Initialized => "initialized",
            PipelineState::Ready => "ready",
            PipelineState::Failed => "failed",
            PipelineState::Destroyed => "destroyed",
        };
        f.write_str(name)
    }
}
