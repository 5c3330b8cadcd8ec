//! Standalone window that feeds touch and mouse input into a
//! [`TouchCameraController`] driving a [`FreeCamera`].
//!
//! The window draws nothing; the camera pose is reported through the `log`
//! facade, which makes it handy for tuning sensitivity presets on a touch
//! screen.
//!
//! ```no_run
//! # use touchcam::Viewer;
//! Viewer::builder()
//!     .with_title("touchcam")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use glam::Vec3;
use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    camera::{FreeCamera, TouchCameraController},
    error::TouchCamError,
    input::{FocusChannel, InputEvent, InputSurface, PointerId},
    options::Options,
    util::frame_timing::FrameTiming,
};

/// How often the camera pose is logged while the window is open.
const POSE_LOG_INTERVAL: Duration = Duration::from_secs(1);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
    start: Vec3,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "touchcam", default
    /// options, camera at the origin).
    fn new() -> Self {
        Self {
            options: None,
            title: "touchcam".into(),
            start: Vec3::ZERO,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial camera position.
    #[must_use]
    pub fn with_start_position(mut self, position: Vec3) -> Self {
        self.start = position;
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
            start: self.start,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window whose touch input steers a free camera.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
    start: Vec3,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), TouchCamError> {
        self.options.validate()?;

        let event_loop = EventLoop::new()
            .map_err(|e| TouchCamError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            surface: InputSurface::new(),
            focus: FocusChannel::new(),
            controller: TouchCameraController::with_options(
                &self.options.touch,
            ),
            camera: FreeCamera::new(self.start, &self.options.camera),
            timing: FrameTiming::new(),
            cursor: (0.0, 0.0),
            last_pose_log: Instant::now(),
            prevent_default: self.options.touch.prevent_default,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| TouchCamError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Window>,
    surface: InputSurface,
    focus: FocusChannel,
    controller: TouchCameraController,
    camera: FreeCamera,
    timing: FrameTiming,
    /// Last cursor position, used to place emulated mouse presses.
    cursor: (f32, f32),
    last_pose_log: Instant,
    prevent_default: bool,
    title: String,
}

impl ViewerApp {
    fn dispatch(&mut self, event: InputEvent) {
        let consumed = self.surface.dispatch(event);
        log::trace!("dispatched {event:?} (consumed: {consumed})");
    }

    fn mouse_event(&mut self, state: ElementState) {
        let (x, y) = self.cursor;
        let pointer = PointerId::MOUSE;
        let event = match state {
            ElementState::Pressed => InputEvent::PointerDown { pointer, x, y },
            ElementState::Released => InputEvent::PointerUp { pointer, x, y },
        };
        self.dispatch(event);
    }

    fn frame(&mut self) {
        let dt = self.timing.end_frame();
        self.camera.set_frame_timing(dt, self.timing.fps());
        self.controller.update(&mut self.camera);

        let now = Instant::now();
        if now.duration_since(self.last_pose_log) >= POSE_LOG_INTERVAL {
            self.last_pose_log = now;
            log::debug!(
                "camera at {:?}, pitch {:.3}, yaw {:.3}, {} pointer(s), {:.0} fps",
                self.camera.position,
                self.camera.rotation.x,
                self.camera.rotation.y,
                self.controller.pointer_count(),
                self.timing.fps()
            );
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = Window::default_attributes().with_title(&self.title);
            let window = match event_loop.create_window(attrs) {
                Ok(w) => w,
                Err(e) => {
                    log::error!("Failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };
            let inner = window.inner_size();
            self.camera.resize(inner.width, inner.height);
            window.request_redraw();
            self.window = Some(window);
        }

        let _ = self.controller.attach(
            &mut self.surface,
            &mut self.focus,
            self.prevent_default,
        );
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        let _ = self.controller.detach(&mut self.surface, &mut self.focus);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            let _ = self.controller.detach(&mut self.surface, &mut self.focus);
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                self.camera.resize(size.width, size.height);
            }

            WindowEvent::Focused(false) => {
                self.focus.notify_focus_lost();
            }

            WindowEvent::Touch(touch) => {
                self.dispatch(InputEvent::from(&touch));
            }

            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => self.mouse_event(state),

            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let (x, y) = (position.x as f32, position.y as f32);
                self.cursor = (x, y);
                self.dispatch(InputEvent::PointerMove {
                    pointer: PointerId::MOUSE,
                    x,
                    y,
                });
            }

            WindowEvent::CursorLeft { .. } => {
                self.dispatch(InputEvent::PointerOut {
                    pointer: PointerId::MOUSE,
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    let _ = self
                        .controller
                        .detach(&mut self.surface, &mut self.focus);
                    event_loop.exit();
                }
            }

            WindowEvent::RedrawRequested => {
                self.frame();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            _ => (),
        }
    }
}
