//! End-to-end runs of a `GlArea` over the recording backend.

use glarea_config::GlAreaConfig;
use glarea_renderer::backend::{GlCall, ObjectKind};
use glarea_renderer::{
    compute_matrix, Axis, GlArea, PipelineState, RecordingBackend, RendererError,
};
use std::collections::HashMap;

const EPS: f32 = 1e-6;

fn realized() -> GlArea<RecordingBackend> {
    glarea_renderer::init_logging(&GlAreaConfig::default().logging);
    let mut area = GlArea::from_config(RecordingBackend::new(), &GlAreaConfig::default());
    area.realize().expect("realize with embedded shaders");
    area
}

#[test]
fn y_rotation_reaches_the_uniform() {
    let mut area = realized();
    area.set_axis_angle(Axis::Y, 45.0);
    area.render().unwrap();

    let uploaded = area.backend().last_uniform_matrix().unwrap();
    let half_sqrt2 = std::f32::consts::FRAC_1_SQRT_2;
    assert!((uploaded[0] - half_sqrt2).abs() < EPS);
    assert!((uploaded[2] - half_sqrt2).abs() < EPS);
    assert!((uploaded[5] - 1.0).abs() < EPS);
    assert_eq!(uploaded[15], 1.0);
}

#[test]
fn every_frame_uses_latest_angles() {
    let mut area = realized();
    let angles = [(Axis::X, 10.0), (Axis::Z, -20.0), (Axis::Y, 370.0)];
    for (axis, degrees) in angles {
        area.set_axis_angle(axis, degrees);
        area.render().unwrap();
    }

    let uploads = area.backend().uniform_uploads();
    assert_eq!(uploads.len(), 3);
    assert_eq!(uploads[0], compute_matrix(10.0, 0.0, 0.0));
    assert_eq!(uploads[1], compute_matrix(10.0, 0.0, -20.0));
    assert_eq!(uploads[2], compute_matrix(10.0, 370.0, -20.0));
    assert_eq!(area.backend().draw_count(), 3);
}

#[test]
fn invalid_fragment_shader_fails_quietly() {
    let mut sources = HashMap::new();
    sources.insert(
        "/glarea/v.glsl".to_string(),
        "uniform mat4 mvp;\nvoid main() { gl_Position = mvp * position; }".to_string(),
    );
    sources.insert("/glarea/f.glsl".to_string(), "void main() {".to_string());

    let mut area = GlArea::new(
        RecordingBackend::new(),
        &GlAreaConfig::default(),
        Box::new(sources),
    );
    let err = area.realize().unwrap_err();
    assert!(err.to_string().starts_with("compile failure in fragment shader"));
    assert_eq!(area.pipeline().state(), PipelineState::Failed);
    assert!(area.pipeline().program().is_none());
    assert_eq!(area.backend().live_count(ObjectKind::Shader), 0);

    area.backend().clear_calls();
    assert!(matches!(
        area.render(),
        Err(RendererError::NotReady(PipelineState::Failed))
    ));
    assert!(area.backend().calls().is_empty());

    area.unrealize().unwrap();
    assert_eq!(area.backend().live_count(ObjectKind::Buffer), 0);
}

#[test]
fn teardown_releases_each_object_once() {
    let mut area = realized();
    area.render().unwrap();
    area.unrealize().unwrap();

    let gl = area.backend();
    assert_eq!(gl.delete_calls(ObjectKind::Program), 1);
    assert_eq!(gl.delete_calls(ObjectKind::Buffer), 1);
    assert_eq!(gl.delete_calls(ObjectKind::VertexArray), 1);
    for kind in [
        ObjectKind::Program,
        ObjectKind::Buffer,
        ObjectKind::VertexArray,
        ObjectKind::Shader,
    ] {
        assert_eq!(gl.live_count(kind), 0, "{kind:?} still alive");
    }

    assert!(matches!(
        area.unrealize(),
        Err(RendererError::InvalidState { op: "destroy", .. })
    ));
    assert!(matches!(
        area.render(),
        Err(RendererError::InvalidState { op: "render", .. })
    ));
    for kind in [ObjectKind::Program, ObjectKind::Buffer, ObjectKind::VertexArray] {
        assert_eq!(area.backend().delete_calls(kind), 1, "{kind:?} deleted again");
    }
}

#[test]
fn dropped_frame_recovers() {
    let mut area = realized();
    area.set_axis_angle(Axis::Z, 15.0);

    area.backend().raise_error_on_next_draw("GL_INVALID_OPERATION");
    assert!(matches!(area.render(), Err(RendererError::Context(_))));
    assert!(area.needs_redraw());
    assert_eq!(area.pipeline().state(), PipelineState::Ready);

    area.render().unwrap();
    assert!(!area.needs_redraw());
    assert_eq!(area.backend().draw_count(), 1);
}

#[test]
fn frame_restores_binding_state() {
    let mut area = realized();
    area.set_axis_angle(Axis::X, 90.0);
    area.render().unwrap();

    let gl = area.backend();
    assert_eq!(gl.bound_program(), None);
    assert_eq!(gl.bound_array_buffer(), None);
    assert_eq!(gl.bound_vertex_array(), None);
    assert!(gl.enabled_attribs().is_empty());
    assert_eq!(gl.calls().last(), Some(&GlCall::Flush));
}

#[test]
fn realize_with_lost_context_allocates_nothing() {
    let gl = RecordingBackend::new();
    gl.lose_context("surface not realized");
    let mut area = GlArea::from_config(gl, &GlAreaConfig::default());

    assert!(matches!(area.realize(), Err(RendererError::Context(_))));
    assert_eq!(area.pipeline().state(), PipelineState::Failed);
    assert!(area.backend().calls().is_empty());
}
