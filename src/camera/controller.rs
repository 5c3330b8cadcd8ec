use std::sync::mpsc::{self, Receiver};

use glam::{EulerRot, Quat, Vec2, Vec3};

use super::rig::CameraRig;
use crate::input::{
    FocusChannel, InputEvent, InputSurface, ListenerId, Offset,
    OffsetAccumulator, PointerId, PointerSet, SurfaceId,
};
use crate::options::TouchOptions;

/// Queue depth at which [`TouchCameraController::process_events`] warns that
/// the host is not draining events every frame.
const BACKLOG_WARNING: usize = 4096;

/// Live binding to one input surface.
struct Attachment {
    surface: SurfaceId,
    surface_listener: ListenerId,
    focus_listener: ListenerId,
    events: Receiver<InputEvent>,
    prevent_default: bool,
}

/// Drives a [`CameraRig`] from touch input.
///
/// One finger looks left/right and walks forward/back; two or more fingers
/// look around without moving. The first-pressed, still-held pointer is the
/// only one whose movement counts.
///
/// Events reach the controller through the surface it is attached to and
/// are queued until [`update`](Self::update), which handles them in
/// delivery order before mapping the pending offset onto the rig. The queue
/// is unbounded: call `update` (or [`process_events`](Self::process_events))
/// once per frame while attached so it stays drained.
///
/// ```
/// # use touchcam::camera::{FreeCamera, TouchCameraController};
/// # use touchcam::input::{FocusChannel, InputEvent, InputSurface, PointerId};
/// let mut surface = InputSurface::new();
/// let mut focus = FocusChannel::new();
/// let mut camera = FreeCamera::default();
/// let mut controller = TouchCameraController::new();
///
/// assert!(controller.attach(&mut surface, &mut focus, true));
/// let finger = PointerId(0);
/// let _ = surface.dispatch(InputEvent::PointerDown { pointer: finger, x: 10.0, y: 10.0 });
/// let _ = surface.dispatch(InputEvent::PointerMove { pointer: finger, x: 40.0, y: 10.0 });
///
/// camera.set_delta_time(1.0 / 60.0);
/// controller.update(&mut camera);
/// assert!(camera.rotation.y > 0.0);
/// ```
pub struct TouchCameraController {
    pointers: PointerSet,
    accumulator: OffsetAccumulator,
    angular_sensibility: f32,
    move_sensibility: f32,
    attachment: Option<Attachment>,
}

impl Default for TouchCameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchCameraController {
    /// Create a detached controller with default sensitivity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&TouchOptions::default())
    }

    /// Create a detached controller with the given sensitivity.
    #[must_use]
    pub fn with_options(options: &TouchOptions) -> Self {
        Self {
            pointers: PointerSet::new(),
            accumulator: OffsetAccumulator::new(),
            angular_sensibility: options.angular_sensibility,
            move_sensibility: options.move_sensibility,
            attachment: None,
        }
    }

    /// Replace both sensibilities.
    pub fn apply_options(&mut self, options: &TouchOptions) {
        self.angular_sensibility = options.angular_sensibility;
        self.move_sensibility = options.move_sensibility;
    }

    /// Pixels of offset per radian of rotation. Must be non-zero.
    #[must_use]
    pub fn angular_sensibility(&self) -> f32 {
        self.angular_sensibility
    }

    /// Set the rotation divisor. Must be non-zero.
    pub fn set_angular_sensibility(&mut self, value: f32) {
        self.angular_sensibility = value;
    }

    /// Divisor for forward movement. Must be non-zero.
    #[must_use]
    pub fn move_sensibility(&self) -> f32 {
        self.move_sensibility
    }

    /// Set the movement divisor. Must be non-zero.
    pub fn set_move_sensibility(&mut self, value: f32) {
        self.move_sensibility = value;
    }

    // ── Attachment ───────────────────────────────────────────────────────

    /// Start listening to `surface` and to focus-loss notifications.
    ///
    /// Does nothing and returns `false` while already attached to any
    /// surface. `prevent_default` makes the surface report pointer events
    /// as consumed so the host skips its own handling.
    ///
    /// Delivered events wait in an unbounded queue until the next
    /// [`update`](Self::update).
    pub fn attach(
        &mut self,
        surface: &mut InputSurface,
        focus: &mut FocusChannel,
        prevent_default: bool,
    ) -> bool {
        if let Some(current) = &self.attachment {
            log::trace!(
                "attach to {:?} ignored, already attached to {:?}",
                surface.id(),
                current.surface
            );
            return false;
        }

        let (sender, events) = mpsc::channel();
        let surface_listener =
            surface.hub_mut().subscribe(sender.clone(), prevent_default);
        let focus_listener = focus.hub_mut().subscribe(sender, false);

        self.attachment = Some(Attachment {
            surface: surface.id(),
            surface_listener,
            focus_listener,
            events,
            prevent_default,
        });
        log::debug!("touch camera attached to {:?}", surface.id());
        true
    }

    /// Stop listening and discard all pointer and offset state.
    ///
    /// Does nothing and returns `false` unless attached to exactly
    /// `surface`. Events queued but not yet handled are dropped.
    pub fn detach(
        &mut self,
        surface: &mut InputSurface,
        focus: &mut FocusChannel,
    ) -> bool {
        if self.attached_surface() != Some(surface.id()) {
            log::trace!("detach from {:?} ignored", surface.id());
            return false;
        }
        let Some(attachment) = self.attachment.take() else {
            return false;
        };

        if !surface.hub_mut().unsubscribe(attachment.surface_listener) {
            log::debug!(
                "{:?} was not registered on {:?}",
                attachment.surface_listener,
                attachment.surface
            );
        }
        if !focus.hub_mut().unsubscribe(attachment.focus_listener) {
            // The stale listener is pruned on that channel's next broadcast
            // once the receiver below is dropped.
            log::debug!(
                "{:?} was not registered on this focus channel",
                attachment.focus_listener
            );
        }
        self.pointers.clear();
        self.accumulator.reset();
        log::debug!("touch camera detached from {:?}", attachment.surface);
        true
    }

    /// Whether the controller is bound to a surface.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Surface the controller is bound to.
    #[must_use]
    pub fn attached_surface(&self) -> Option<SurfaceId> {
        self.attachment.as_ref().map(|a| a.surface)
    }

    // ── Event handling ───────────────────────────────────────────────────

    /// Apply a single event immediately.
    ///
    /// Returns true if the host should suppress its default handling.
    /// Ignored while detached.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        let Some(prevent_default) =
            self.attachment.as_ref().map(|a| a.prevent_default)
        else {
            log::trace!("{event:?} ignored, controller detached");
            return false;
        };

        match event {
            InputEvent::PointerDown { pointer, x, y } => {
                self.on_press(pointer, Vec2::new(x, y));
            }
            InputEvent::PointerMove { pointer, x, y } => {
                self.on_move(pointer, Vec2::new(x, y));
            }
            InputEvent::FocusLost => {
                self.accumulator.reset();
                return false;
            }
            release => {
                if let Some(pointer) =
                    release.pointer().filter(|_| release.is_release())
                {
                    self.on_release(pointer);
                }
            }
        }
        prevent_default
    }

    /// Handle every queued event in delivery order. Returns how many were
    /// handled; the queue is empty afterwards.
    pub fn process_events(&mut self) -> usize {
        let queued: Vec<InputEvent> = match &self.attachment {
            Some(attachment) => attachment.events.try_iter().collect(),
            None => return 0,
        };
        let count = queued.len();
        if count > BACKLOG_WARNING {
            log::warn!(
                "{count} input events were queued since the last update; \
                 call update once per frame"
            );
        }
        for event in queued {
            let _ = self.handle_event(event);
        }
        count
    }

    fn on_press(&mut self, pointer: PointerId, at: Vec2) {
        if self.pointers.press(pointer) {
            self.accumulator.begin(at);
        }
    }

    fn on_release(&mut self, pointer: PointerId) {
        match self.pointers.release(pointer) {
            Some(0) => self.accumulator.reset(),
            Some(_) => {}
            None => log::trace!("release of unknown pointer {pointer:?}"),
        }
    }

    fn on_move(&mut self, pointer: PointerId, at: Vec2) {
        if self.pointers.primary() != Some(pointer) {
            return;
        }
        let _ = self.accumulator.track(at);
    }

    // ── Per-frame mapping ────────────────────────────────────────────────

    /// Per-frame hook: handle queued events, map the offset onto `rig`, then
    /// let the rig integrate.
    pub fn update<R: CameraRig>(&mut self, rig: &mut R) {
        let _ = self.process_events();
        self.check_inputs(rig);
    }

    /// Map the pending offset onto `rig` and run its integration step.
    ///
    /// The offset is not consumed: a held drag keeps steering every frame
    /// until the pointer moves again or is released.
    pub fn check_inputs<R: CameraRig>(&self, rig: &mut R) {
        if let Some(Offset { dx, dy }) = self.accumulator.offset() {
            rig.add_yaw(dx / self.angular_sensibility);

            if self.pointers.is_multi_touch() {
                rig.add_pitch(-dy / self.angular_sensibility);
            } else {
                let speed = rig.local_speed();
                let local =
                    Vec3::new(0.0, 0.0, speed * dy / self.move_sensibility);
                let rotation =
                    Quat::from_euler(EulerRot::YXZ, rig.yaw(), rig.pitch(), 0.0);
                rig.add_direction(rotation * local);
            }
        }

        rig.integrate();
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// Held pointers in press order.
    #[must_use]
    pub fn pointers(&self) -> &PointerSet {
        &self.pointers
    }

    /// Number of held pointers.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Whether two or more pointers are held.
    #[must_use]
    pub fn is_multi_touch(&self) -> bool {
        self.pointers.is_multi_touch()
    }

    /// Pending screen offset of the primary pointer.
    #[must_use]
    pub fn offset(&self) -> Option<Offset> {
        self.accumulator.offset()
    }

    /// Press location the pending offset is measured from.
    #[must_use]
    pub fn origin(&self) -> Option<Vec2> {
        self.accumulator.origin()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::camera::FreeCamera;

    /// Rig that records what the controller pushes into it.
    #[derive(Default)]
    struct RecordingRig {
        yaw: f32,
        pitch: f32,
        speed: f32,
        yaw_delta: f32,
        pitch_delta: f32,
        direction: Vec3,
        integrations: usize,
    }

    impl CameraRig for RecordingRig {
        fn yaw(&self) -> f32 {
            self.yaw
        }
        fn pitch(&self) -> f32 {
            self.pitch
        }
        fn add_yaw(&mut self, delta: f32) {
            self.yaw_delta += delta;
        }
        fn add_pitch(&mut self, delta: f32) {
            self.pitch_delta += delta;
        }
        fn local_speed(&self) -> f32 {
            self.speed
        }
        fn add_direction(&mut self, delta: Vec3) {
            self.direction += delta;
        }
        fn integrate(&mut self) {
            self.integrations += 1;
        }
    }

    struct Harness {
        surface: InputSurface,
        focus: FocusChannel,
        controller: TouchCameraController,
    }

    impl Harness {
        fn attached() -> Self {
            let mut surface = InputSurface::new();
            let mut focus = FocusChannel::new();
            let mut controller = TouchCameraController::new();
            assert!(controller.attach(&mut surface, &mut focus, true));
            Self {
                surface,
                focus,
                controller,
            }
        }

        fn down(&mut self, id: u64, x: f32, y: f32) {
            let _ = self.surface.dispatch(InputEvent::PointerDown {
                pointer: PointerId(id),
                x,
                y,
            });
        }

        fn up(&mut self, id: u64) {
            let _ = self.surface.dispatch(InputEvent::PointerUp {
                pointer: PointerId(id),
                x: 0.0,
                y: 0.0,
            });
        }

        fn drag(&mut self, id: u64, x: f32, y: f32) {
            let _ = self.surface.dispatch(InputEvent::PointerMove {
                pointer: PointerId(id),
                x,
                y,
            });
        }

        fn frame(&mut self, rig: &mut RecordingRig) {
            self.controller.update(rig);
        }
    }

    fn rig() -> RecordingRig {
        RecordingRig {
            speed: 2.0,
            ..RecordingRig::default()
        }
    }

    #[test]
    fn single_touch_yaws_and_moves_forward() {
        let mut h = Harness::attached();
        h.down(1, 100.0, 100.0);
        h.drag(1, 130.0, 70.0);

        let mut rig = rig();
        h.frame(&mut rig);

        assert_eq!(h.controller.offset(), Some(Offset { dx: 30.0, dy: 30.0 }));
        assert!((rig.yaw_delta - 0.00015).abs() < 1e-9);
        assert_eq!(rig.pitch_delta, 0.0);
        let expected = 2.0 * 30.0 / 500.0;
        assert!((rig.direction - Vec3::new(0.0, 0.0, expected)).length() < 1e-6);
        assert_eq!(rig.integrations, 1);
    }

    #[test]
    fn multi_touch_looks_without_moving() {
        let mut h = Harness::attached();
        h.down(1, 100.0, 100.0);
        h.down(2, 300.0, 300.0);
        h.drag(1, 130.0, 70.0);

        let mut rig = rig();
        h.frame(&mut rig);

        assert!(h.controller.is_multi_touch());
        assert!((rig.yaw_delta - 30.0 / 200_000.0).abs() < 1e-9);
        assert!((rig.pitch_delta - (-30.0 / 200_000.0)).abs() < 1e-9);
        assert_eq!(rig.direction, Vec3::ZERO);
    }

    #[test]
    fn movement_follows_camera_facing() {
        let mut h = Harness::attached();
        h.down(1, 0.0, 100.0);
        h.drag(1, 0.0, 50.0);

        let mut rig = rig();
        rig.yaw = FRAC_PI_2;
        h.frame(&mut rig);

        let expected = 2.0 * 50.0 / 500.0;
        assert!((rig.direction - Vec3::new(expected, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn releasing_primary_clears_offset_with_others_held() {
        let mut h = Harness::attached();
        h.down(1, 0.0, 0.0);
        h.down(2, 50.0, 50.0);
        h.down(3, 80.0, 80.0);
        h.drag(1, 10.0, -10.0);
        h.up(1);

        let mut rig = rig();
        h.frame(&mut rig);

        assert_eq!(h.controller.offset(), None);
        assert_eq!(h.controller.origin(), None);
        assert_eq!(h.controller.pointer_count(), 2);
        assert_eq!(h.controller.pointers().primary(), Some(PointerId(2)));
        assert_eq!(rig.yaw_delta, 0.0);
        assert_eq!(rig.integrations, 1);
    }

    #[test]
    fn new_primary_waits_for_fresh_press_sequence() {
        let mut h = Harness::attached();
        h.down(1, 0.0, 0.0);
        h.down(2, 50.0, 50.0);
        h.up(1);
        h.drag(2, 90.0, 90.0);

        let mut rig = rig();
        h.frame(&mut rig);
        assert_eq!(h.controller.offset(), None);

        h.up(2);
        h.down(3, 10.0, 10.0);
        h.drag(3, 20.0, 10.0);
        h.frame(&mut rig);
        assert_eq!(h.controller.offset(), Some(Offset { dx: 10.0, dy: 0.0 }));
    }

    #[test]
    fn releasing_secondary_keeps_offset() {
        let mut h = Harness::attached();
        h.down(1, 0.0, 0.0);
        h.down(2, 50.0, 50.0);
        h.drag(1, 10.0, 0.0);
        h.up(2);
        h.frame(&mut rig());

        assert_eq!(h.controller.offset(), Some(Offset { dx: 10.0, dy: 0.0 }));
        assert!(!h.controller.is_multi_touch());
    }

    #[test]
    fn non_primary_move_is_ignored() {
        let mut h = Harness::attached();
        h.down(1, 0.0, 0.0);
        h.down(2, 50.0, 50.0);
        h.drag(1, 5.0, 0.0);
        h.drag(2, 500.0, 500.0);
        h.drag(9, 500.0, 500.0);
        h.frame(&mut rig());

        assert_eq!(h.controller.offset(), Some(Offset { dx: 5.0, dy: 0.0 }));
    }

    #[test]
    fn offset_is_reapplied_every_frame() {
        let mut h = Harness::attached();
        h.down(1, 0.0, 0.0);
        h.drag(1, 20.0, 0.0);

        let mut rig = rig();
        h.frame(&mut rig);
        h.frame(&mut rig);
        h.frame(&mut rig);

        assert!((rig.yaw_delta - 3.0 * 20.0 / 200_000.0).abs() < 1e-9);
        assert_eq!(rig.integrations, 3);
    }

    #[test]
    fn offset_is_measured_from_press_point() {
        let mut h = Harness::attached();
        h.down(1, 100.0, 100.0);
        h.drag(1, 110.0, 100.0);
        h.drag(1, 125.0, 100.0);
        h.frame(&mut rig());

        assert_eq!(h.controller.offset(), Some(Offset { dx: 25.0, dy: 0.0 }));
    }

    #[test]
    fn focus_loss_makes_next_frame_a_noop() {
        let mut h = Harness::attached();
        h.down(1, 100.0, 100.0);
        h.drag(1, 130.0, 70.0);
        h.focus.notify_focus_lost();

        let mut rig = rig();
        h.frame(&mut rig);

        assert_eq!(h.controller.offset(), None);
        assert_eq!(rig.yaw_delta, 0.0);
        assert_eq!(rig.direction, Vec3::ZERO);
        assert_eq!(rig.integrations, 1);
        // Pointer is still held; no release happened.
        assert_eq!(h.controller.pointer_count(), 1);
    }

    #[test]
    fn events_are_handled_in_delivery_order() {
        let mut h = Harness::attached();
        h.down(1, 0.0, 0.0);
        h.focus.notify_focus_lost();
        h.drag(1, 40.0, 0.0);
        h.frame(&mut rig());

        // Focus loss cleared the origin before the move was handled.
        assert_eq!(h.controller.offset(), None);
    }

    #[test]
    fn cancel_and_out_release_the_pointer() {
        let mut h = Harness::attached();
        h.down(1, 0.0, 0.0);
        h.drag(1, 10.0, 10.0);
        let _ = h.surface.dispatch(InputEvent::PointerCancel {
            pointer: PointerId(1),
        });
        h.frame(&mut rig());
        assert_eq!(h.controller.offset(), None);
        assert_eq!(h.controller.pointer_count(), 0);

        h.down(2, 0.0, 0.0);
        h.drag(2, 10.0, 10.0);
        let _ = h.surface.dispatch(InputEvent::PointerOut {
            pointer: PointerId(2),
        });
        h.frame(&mut rig());
        assert_eq!(h.controller.offset(), None);
        assert_eq!(h.controller.pointer_count(), 0);
    }

    #[test]
    fn unknown_release_is_ignored() {
        let mut h = Harness::attached();
        h.down(1, 0.0, 0.0);
        h.drag(1, 10.0, 0.0);
        h.up(42);
        h.frame(&mut rig());
        assert_eq!(h.controller.offset(), Some(Offset { dx: 10.0, dy: 0.0 }));
    }

    #[test]
    fn attach_twice_is_noop() {
        let mut h = Harness::attached();
        let mut other = InputSurface::new();
        assert!(!h.controller.attach(&mut h.surface, &mut h.focus, true));
        assert!(!h.controller.attach(&mut other, &mut h.focus, true));
        assert_eq!(h.controller.attached_surface(), Some(h.surface.id()));
        assert_eq!(h.surface.listener_count(), 1);
        assert_eq!(other.listener_count(), 0);
        assert_eq!(h.focus.listener_count(), 1);
    }

    #[test]
    fn detach_from_other_surface_is_noop() {
        let mut h = Harness::attached();
        let mut other = InputSurface::new();
        assert!(!h.controller.detach(&mut other, &mut h.focus));
        assert!(h.controller.is_attached());
        assert_eq!(h.surface.listener_count(), 1);
    }

    #[test]
    fn detach_twice_matches_detach_once() {
        let mut h = Harness::attached();
        h.down(1, 0.0, 0.0);
        h.drag(1, 10.0, 0.0);
        h.frame(&mut rig());

        assert!(h.controller.detach(&mut h.surface, &mut h.focus));
        assert!(!h.controller.detach(&mut h.surface, &mut h.focus));

        assert!(!h.controller.is_attached());
        assert_eq!(h.controller.pointer_count(), 0);
        assert_eq!(h.controller.offset(), None);
        assert_eq!(h.surface.listener_count(), 0);
        assert_eq!(h.focus.listener_count(), 0);
    }

    #[test]
    fn detach_discards_queued_events() {
        let mut h = Harness::attached();
        h.down(1, 0.0, 0.0);
        h.drag(1, 10.0, 0.0);
        assert!(h.controller.detach(&mut h.surface, &mut h.focus));
        assert!(h.controller.attach(&mut h.surface, &mut h.focus, true));

        let mut rig = rig();
        h.frame(&mut rig);
        assert_eq!(h.controller.pointer_count(), 0);
        assert_eq!(rig.yaw_delta, 0.0);
    }

    #[test]
    fn reattach_to_new_surface_starts_clean() {
        let mut h = Harness::attached();
        h.down(1, 0.0, 0.0);
        h.down(2, 5.0, 5.0);
        h.drag(1, 10.0, 0.0);
        h.frame(&mut rig());
        assert!(h.controller.detach(&mut h.surface, &mut h.focus));

        let mut second = InputSurface::new();
        assert!(h.controller.attach(&mut second, &mut h.focus, false));
        assert_eq!(h.controller.pointer_count(), 0);

        // The old surface no longer reaches the controller.
        h.down(7, 0.0, 0.0);
        h.drag(7, 50.0, 0.0);
        let mut rig = rig();
        h.frame(&mut rig);
        assert_eq!(rig.yaw_delta, 0.0);
        assert_eq!(h.controller.pointer_count(), 0);

        let pointer = PointerId(8);
        let _ = second.dispatch(InputEvent::PointerDown {
            pointer,
            x: 0.0,
            y: 0.0,
        });
        let _ = second.dispatch(InputEvent::PointerMove {
            pointer,
            x: 20.0,
            y: 0.0,
        });
        h.frame(&mut rig);
        assert!((rig.yaw_delta - 20.0 / 200_000.0).abs() < 1e-9);
    }

    #[test]
    fn detached_controller_ignores_direct_events() {
        let mut controller = TouchCameraController::new();
        assert!(!controller.handle_event(InputEvent::PointerDown {
            pointer: PointerId(1),
            x: 0.0,
            y: 0.0,
        }));
        assert_eq!(controller.pointer_count(), 0);
        assert_eq!(controller.process_events(), 0);
    }

    #[test]
    fn prevent_default_is_reported_by_surface() {
        let mut surface = InputSurface::new();
        let mut focus = FocusChannel::new();
        let mut controller = TouchCameraController::new();
        let down = InputEvent::PointerDown {
            pointer: PointerId(1),
            x: 0.0,
            y: 0.0,
        };

        assert!(!surface.dispatch(down));
        assert!(controller.attach(&mut surface, &mut focus, true));
        assert!(surface.dispatch(down));
        assert!(controller.detach(&mut surface, &mut focus));

        assert!(controller.attach(&mut surface, &mut focus, false));
        assert!(!surface.dispatch(down));
    }

    #[test]
    fn sensitivity_setters_change_mapping() {
        let mut h = Harness::attached();
        h.controller.set_angular_sensibility(1000.0);
        h.controller.set_move_sensibility(100.0);
        h.down(1, 0.0, 0.0);
        h.drag(1, 10.0, -10.0);

        let mut rig = rig();
        h.frame(&mut rig);
        assert!((rig.yaw_delta - 0.01).abs() < 1e-7);
        assert!((rig.direction.z - 2.0 * 10.0 / 100.0).abs() < 1e-6);
    }

    #[test]
    fn detach_with_other_focus_channel_still_detaches() {
        let mut h = Harness::attached();
        let mut other_focus = FocusChannel::new();
        h.down(1, 0.0, 0.0);

        assert!(h.controller.detach(&mut h.surface, &mut other_focus));
        assert!(!h.controller.is_attached());
        assert_eq!(h.surface.listener_count(), 0);
        assert_eq!(other_focus.listener_count(), 0);

        // The original channel keeps a dead listener until it broadcasts.
        assert_eq!(h.focus.listener_count(), 1);
        h.focus.notify_focus_lost();
        assert_eq!(h.focus.listener_count(), 0);
    }

    #[test]
    fn update_drains_the_queue() {
        let mut h = Harness::attached();
        h.down(1, 0.0, 0.0);
        for x in 0..100_u16 {
            h.drag(1, f32::from(x), 0.0);
        }
        h.up(1);

        let mut rig = rig();
        h.frame(&mut rig);
        assert_eq!(h.controller.process_events(), 0);
        assert_eq!(h.controller.pointer_count(), 0);

        h.down(2, 0.0, 0.0);
        assert_eq!(h.controller.process_events(), 1);
        assert_eq!(h.controller.process_events(), 0);
    }

    #[test]
    fn drag_moves_free_camera_forward() {
        let mut h = Harness::attached();
        let mut camera = FreeCamera::default();
        camera.set_delta_time(1.0 / 60.0);
        h.down(1, 200.0, 400.0);
        h.drag(1, 200.0, 100.0);

        for _ in 0..10 {
            h.controller.update(&mut camera);
        }
        assert!(camera.position.z > 0.0);
        assert!(camera.position.x.abs() < 1e-6);
        assert_eq!(camera.rotation, Vec2::ZERO);

        h.up(1);
        h.controller.update(&mut camera);
        assert_eq!(h.controller.offset(), None);
    }
}
