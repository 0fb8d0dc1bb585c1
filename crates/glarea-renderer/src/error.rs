use crate::backend::ShaderStage;
use crate::pipeline::PipelineState;

/// Errors raised by the triangle pipeline and its surface.
///
/// None of these are fatal to the process: initialization errors leave
/// the pipeline `Failed`, render errors drop a single frame.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("GL context error: {0}")]
    Context(String),

    #[error("compile failure in {stage} shader: {log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("linking failure: {0}")]
    Link(String),

    #[error("failed fetching {stage} shader resource {path}")]
    ResourceNotFound { stage: ShaderStage, path: String },

    #[error("failed to allocate {0}")]
    Allocation(String),

    #[error("pipeline is not ready (state: {0})")]
    NotReady(PipelineState),

    #[error("cannot {op} a pipeline in state {state}")]
    InvalidState {
        op: &'static str,
        state: PipelineState,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_display() {
        let err = RendererError::Context("context lost".into());
        assert_eq!(err.to_string(), "GL context error: context lost");
    }

    #[test]
    fn compile_display_names_stage() {
        let err = RendererError::Compile {
            stage: ShaderStage::Fragment,
            log: "0:3: syntax error".into(),
        };
        assert_eq!(
            err.to_string(),
            "compile failure in fragment shader: 0:3: syntax error"
        );
    }

    #[test]
    fn link_display() {
        let err = RendererError::Link("undefined varying".into());
        assert_eq!(err.to_string(), "linking failure: undefined varying");
    }

    #[test]
    fn resource_not_found_display() {
        let err = RendererError::ResourceNotFound {
            stage: ShaderStage::Vertex,
            path: "/glarea/v.glsl".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed fetching vertex shader resource /glarea/v.glsl"
        );
    }

    #[test]
    fn state_errors_display() {
        let err = RendererError::NotReady(PipelineState::Failed);
        assert_eq!(err.to_string(), "pipeline is not ready (state: failed)");

        let err = RendererError::InvalidState {
            op: "destroy",
            state: PipelineState::Destroyed,
        };
        assert_eq!(err.to_string(), "cannot destroy a pipeline in state destroyed");
    }
}
