use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use glam::Vec3;

use shuriken_engine::coords::Viewport;
use shuriken_engine::core::{App, AppControl, FrameCtx};
use shuriken_engine::device::Gpu;
use shuriken_engine::paint::Color;
use shuriken_engine::shader::{ProgramConfig, ShaderSource};
use shuriken_engine::transform::{Camera, Projection, Spin, TransformState};

use crate::geometry::{SHURIKEN, SPINNING_TRIANGLE, TRIANGLE};
use crate::pipeline::DemoPipeline;
use crate::shaders::{COLOR_FRAGMENT, FLAT_VERTEX, TRANSFORM_VERTEX};
use crate::state::{messages_from_input, AppState};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DemoKind {
    Triangle,
    Spinning,
    Shuriken,
}

impl FromStr for DemoKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "triangle" => Ok(DemoKind::Triangle),
            "spinning" | "spinning-triangle" => Ok(DemoKind::Spinning),
            "shuriken" => Ok(DemoKind::Shuriken),
            other => bail!("unknown demo `{other}` (expected triangle, spinning or shuriken)"),
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DemoKind::Triangle => "triangle",
            DemoKind::Spinning => "spinning",
            DemoKind::Shuriken => "shuriken",
        })
    }
}

/// How the view matrix is produced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum View {
    /// No transform uniforms at all.
    None,
    /// Set once from this eye.
    Fixed(Vec3),
    /// Starts at this eye and follows WASD.
    Keyboard(Vec3),
}

/// Static description of one demo.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DemoConfig {
    pub title: &'static str,
    pub vertex: ShaderSource,
    pub clear: Color,
    pub spin: Option<Spin>,
    pub view: View,
    pub depth: bool,
}

impl DemoKind {
    pub fn config(self) -> DemoConfig {
        match self {
            DemoKind::Triangle => DemoConfig {
                title: "Triangle",
                vertex: FLAT_VERTEX,
                clear: Color::rgb(0.8, 0.5, 1.0),
                spin: None,
                view: View::None,
                depth: false,
            },
            DemoKind::Spinning => DemoConfig {
                title: "Spinning Triangle",
                vertex: TRANSFORM_VERTEX,
                clear: Color::rgb(0.6, 0.6, 0.6),
                spin: Some(Spin::new(Vec3::Y, 10.0)),
                view: View::Fixed(Vec3::new(0.0, 0.0, 3.0)),
                depth: false,
            },
            DemoKind::Shuriken => DemoConfig {
                title: "Shuriken",
                vertex: TRANSFORM_VERTEX,
                clear: Color::rgb(0.6, 0.6, 0.6),
                spin: Some(Spin::new(Vec3::Z, 30.0)),
                view: View::Keyboard(Vec3::new(0.0, 0.0, 5.0)),
                depth: true,
            },
        }
    }
}

struct Running {
    pipeline: DemoPipeline,
    /// `None` for demos without transform uniforms.
    transforms: Option<TransformState>,
    viewport: Viewport,
}

enum Phase {
    Uninitialized,
    Running(Running),
}

/// One demo hosted by the engine runtime.
pub struct DemoApp {
    kind: DemoKind,
    demo: DemoConfig,
    program_config: ProgramConfig,
    projection: Projection,
    state: AppState,
    phase: Phase,
}

impl DemoApp {
    pub fn new(kind: DemoKind) -> Self {
        let demo = kind.config();
        let camera = match demo.view {
            View::Keyboard(eye) => Some(Camera::looking_at_origin(eye)),
            View::None | View::Fixed(_) => None,
        };

        Self {
            kind,
            demo,
            program_config: ProgramConfig::default(),
            projection: Projection::default(),
            state: AppState::new(camera),
            phase: Phase::Uninitialized,
        }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.demo
    }

    fn initial_transforms(&self, viewport: Viewport) -> Option<TransformState> {
        let eye = match self.demo.view {
            View::None => return None,
            View::Fixed(eye) | View::Keyboard(eye) => eye,
        };
        let view = Camera::looking_at_origin(eye).view_matrix();
        Some(TransformState::new(view, self.projection.matrix(viewport)))
    }
}

impl App for DemoApp {
    fn init(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let label = self.kind.to_string();
        let pipeline = match self.kind {
            DemoKind::Triangle => DemoPipeline::build(
                gpu,
                &label,
                self.demo.vertex,
                COLOR_FRAGMENT,
                &TRIANGLE,
                self.program_config,
            )?,
            DemoKind::Spinning => DemoPipeline::build(
                gpu,
                &label,
                self.demo.vertex,
                COLOR_FRAGMENT,
                &SPINNING_TRIANGLE,
                self.program_config,
            )?,
            DemoKind::Shuriken => DemoPipeline::build(
                gpu,
                &label,
                self.demo.vertex,
                COLOR_FRAGMENT,
                &SHURIKEN,
                self.program_config,
            )?,
        };

        let viewport = gpu.viewport();
        self.phase = Phase::Running(Running {
            pipeline,
            transforms: self.initial_transforms(viewport),
            viewport,
        });

        log::info!("{} running", self.demo.title);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Phase::Running(running) = &mut self.phase else {
            log::error!("frame requested before initialization");
            return AppControl::Exit;
        };

        let mut exit = false;
        for msg in messages_from_input(ctx.input_frame) {
            exit |= self.state.apply(msg);
        }
        if exit {
            return AppControl::Exit;
        }

        let frame = self.state.advance();

        if let Some(transforms) = &mut running.transforms {
            let viewport = ctx.gpu.viewport();
            if viewport != running.viewport && viewport.is_valid() {
                transforms.proj = self.projection.matrix(viewport);
                running.viewport = viewport;
            }

            transforms.update(self.demo.spin.as_ref(), frame, self.state.camera());
            running.pipeline.push_transforms(ctx.gpu.queue(), transforms);
        }

        let pipeline = &running.pipeline;
        ctx.render(self.demo.clear, |pass| pipeline.draw(pass))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    // ── demo table ────────────────────────────────────────────────────────

    #[test]
    fn names_round_trip() {
        for kind in [DemoKind::Triangle, DemoKind::Spinning, DemoKind::Shuriken] {
            assert_eq!(kind.to_string().parse::<DemoKind>().unwrap(), kind);
        }
        assert!("cube".parse::<DemoKind>().is_err());
    }

    #[test]
    fn only_the_shuriken_tests_depth_and_moves() {
        let shuriken = DemoKind::Shuriken.config();
        assert!(shuriken.depth);
        assert!(matches!(shuriken.view, View::Keyboard(_)));

        for kind in [DemoKind::Triangle, DemoKind::Spinning] {
            let demo = kind.config();
            assert!(!demo.depth);
            assert!(!matches!(demo.view, View::Keyboard(_)));
        }
    }

    #[test]
    fn spin_divisors() {
        assert_eq!(DemoKind::Triangle.config().spin, None);
        assert_eq!(DemoKind::Spinning.config().spin.unwrap().frames_per_radian, 10.0);
        assert_eq!(DemoKind::Shuriken.config().spin.unwrap().frames_per_radian, 30.0);
    }

    // ── initial state ─────────────────────────────────────────────────────

    #[test]
    fn triangle_has_no_transforms() {
        let app = DemoApp::new(DemoKind::Triangle);
        assert!(app.initial_transforms(Viewport::new(800.0, 800.0)).is_none());
    }

    #[test]
    fn spinning_starts_at_identity_world_with_fixed_eye() {
        let app = DemoApp::new(DemoKind::Spinning);
        let t = app.initial_transforms(Viewport::new(800.0, 800.0)).unwrap();
        assert_eq!(t.world, Mat4::IDENTITY);
        assert_eq!(t.view, Mat4::look_at_rh(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y));
        assert!(app.state.camera().is_none());
    }

    #[test]
    fn shuriken_camera_starts_five_units_back() {
        let app = DemoApp::new(DemoKind::Shuriken);
        assert_eq!(app.state.camera().unwrap().eye, Vec3::new(0.0, 0.0, 5.0));
    }
}
