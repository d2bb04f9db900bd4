use std::rc::Rc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{CursorIcon, Fullscreen, Window};

use player_overlay::cli::StartupConfig;
use player_overlay::config::SettingsFile;
use player_overlay::controller::OverlayController;
use player_overlay::document::{Document, PointerEvent, PointerKind};
use player_overlay::geometry::{Point, Rect};
use player_overlay::panel::PanelRegistry;
use player_overlay::settings_watcher::SettingsWatcher;
use player_overlay::sleep::SleepTracker;
use player_overlay::theme::OverlayTheme;
use player_overlay::view::{hit_test_overlay, HitTarget, OverlayLayout, Renderer};

use super::chat::spawn_stdin_reader;
use super::mouse::ClickTracker;

const WINDOW_TITLE: &str = "Player Overlay";

/// Pixels scrolled per wheel line
const WHEEL_LINE_HEIGHT: f32 = 40.0;

/// Longest the loop sleeps before checking background channels
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct App {
    controller: OverlayController<SettingsFile, SleepTracker>,
    document: Document,
    watcher: Option<SettingsWatcher>,
    theme: OverlayTheme,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    window_size: (u32, u32),
    /// Scene geometry from the last layout pass
    layout: OverlayLayout,
    clicks: ClickTracker,
    mouse_position: Option<Point>,
    hovered: Option<HitTarget>,
    _chat_reader: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(config: StartupConfig) -> Self {
        let now = Instant::now();

        let settings = match config.settings_path {
            Some(path) => SettingsFile::open(path),
            None => SettingsFile::load(),
        };

        let watcher = settings
            .path()
            .and_then(|path| match SettingsWatcher::new(path.to_path_buf()) {
                Ok(watcher) => Some(watcher),
                Err(e) => {
                    tracing::warn!("Failed to watch settings file: {}", e);
                    None
                }
            });

        let mut document = Document::new();
        let controller = OverlayController::mount(
            PanelRegistry::with_defaults(),
            settings,
            SleepTracker::new(now, config.idle_timeout),
            &mut document,
        );

        let chat_reader = if config.chat_enabled {
            match spawn_stdin_reader(controller.sender()) {
                Ok(handle) => Some(handle),
                Err(e) => {
                    tracing::warn!("Failed to start chat reader: {}", e);
                    None
                }
            }
        } else {
            None
        };

        let (width, height) = config.window_size;
        let layout = OverlayLayout::compute(
            Rect::new(0.0, 0.0, width as f32, height as f32),
            controller.state(),
            controller.registry(),
            controller.is_visible(),
        );

        Self {
            controller,
            document,
            watcher,
            theme: OverlayTheme::default_dark(),
            renderer: None,
            window: None,
            context: None,
            window_size: config.window_size,
            layout,
            clicks: ClickTracker::default(),
            mouse_position: None,
            hovered: None,
            _chat_reader: chat_reader,
        }
    }

    fn init_renderer(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.window_size;
        let window_attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(width, height));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create softbuffer context: {}", e))?;

        self.renderer = Some(Renderer::new(Rc::clone(&window), &context)?);
        self.window = Some(window);
        self.context = Some(context);
        self.relayout();
        Ok(())
    }

    /// Recompute scene geometry from the current state
    fn relayout(&mut self) {
        let container = match &self.renderer {
            Some(renderer) => renderer.container(),
            None => self.layout.container,
        };
        self.layout = OverlayLayout::compute(
            container,
            self.controller.state(),
            self.controller.registry(),
            self.controller.is_visible(),
        );
    }

    fn handle_event(&mut self, event: &WindowEvent) -> bool {
        let now = Instant::now();

        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.resize(size.width, size.height) {
                        tracing::error!("Resize failed: {}", e);
                    }
                }
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                let point = Point::new(position.x as f32, position.y as f32);
                self.mouse_position = Some(point);
                let woke = self.register_activity(now);

                let moved = self.controller.drag_move(point, &self.layout, now);
                let hover_changed = self.update_hover(point);
                woke | moved | hover_changed | self.controller.tick(now)
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let Some(point) = self.mouse_position else {
                    return false;
                };
                let woke = self.register_activity(now);

                if hit_test_overlay(&self.layout, point) == Some(HitTarget::DragHandle) {
                    self.controller.drag_press(point);
                }
                woke | self.controller.tick(now)
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                let Some(point) = self.mouse_position else {
                    return false;
                };
                let mut redraw = self.register_activity(now);

                if self.controller.is_dragging() {
                    self.clicks.reset();
                    return redraw | self.controller.drag_release(now);
                }
                // Armed without movement: not a drag
                self.controller.drag_release(now);

                for event in self.clicks.events_for(now, point) {
                    redraw |= self.dispatch_pointer(event, now);
                }
                redraw
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let Some(point) = self.mouse_position else {
                    return false;
                };
                let woke = self.register_activity(now);

                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_HEIGHT,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                let scrolled = matches!(
                    hit_test_overlay(&self.layout, point),
                    Some(HitTarget::Panel(_))
                ) && self.controller.panel_scroll(point, delta_y, &self.layout);
                woke | scrolled | self.controller.tick(now)
            }
            _ => false,
        }
    }

    /// User input keeps the player awake. Returns true if this made the
    /// overlay visible again.
    fn register_activity(&mut self, now: Instant) -> bool {
        let was_visible = self.layout.visible;
        self.controller.sleep_bus_mut().activity(now);
        self.relayout();
        was_visible != self.layout.visible
    }

    /// Route one document event: capture listeners first, then the target
    fn dispatch_pointer(&mut self, mut event: PointerEvent, now: Instant) -> bool {
        let mut redraw = false;
        let controller = &mut self.controller;
        let layout = &self.layout;
        let reached = self.document.dispatch(&mut event, |_, e| {
            redraw |= controller.capture(e, layout, now);
        });

        if !reached {
            return redraw;
        }

        // The capture phase may have closed a panel
        self.relayout();

        match (event.kind, hit_test_overlay(&self.layout, event.position)) {
            (PointerKind::Click, Some(HitTarget::Button(key))) => {
                redraw |= self.controller.click(&key, &self.layout, now);
            }
            (PointerKind::Click, Some(HitTarget::Panel(_))) => {
                redraw |= self.controller.panel_click(event.position, &self.layout);
            }
            (PointerKind::DoubleClick, _) => self.toggle_fullscreen(),
            _ => {}
        }
        redraw
    }

    /// The player's default double click action
    fn toggle_fullscreen(&self) {
        let Some(window) = &self.window else { return };
        let fullscreen = match window.fullscreen() {
            Some(_) => None,
            None => Some(Fullscreen::Borderless(None)),
        };
        tracing::debug!(fullscreen = fullscreen.is_some(), "Toggling fullscreen");
        window.set_fullscreen(fullscreen);
    }

    /// Track the element under the pointer. Button labels go to the window
    /// title and the handle gets a move cursor.
    fn update_hover(&mut self, point: Point) -> bool {
        let target = hit_test_overlay(&self.layout, point);
        if target == self.hovered {
            return false;
        }

        if let Some(window) = &self.window {
            let label = match &target {
                Some(HitTarget::Button(key)) => self.layout.button(key).map(|b| b.title),
                _ => None,
            };
            match label {
                Some(label) => window.set_title(&format!("{} - {}", WINDOW_TITLE, label)),
                None => window.set_title(WINDOW_TITLE),
            }

            let cursor = match &target {
                Some(HitTarget::DragHandle) => CursorIcon::Move,
                Some(HitTarget::Button(_)) => CursorIcon::Pointer,
                _ => CursorIcon::Default,
            };
            window.set_cursor(cursor);
        }

        self.hovered = target;
        true
    }

    fn render(&mut self) -> Result<()> {
        self.relayout();
        self.controller.measure_active(&self.layout);

        if let Some(renderer) = &mut self.renderer {
            renderer.render(
                &self.layout,
                self.controller.registry(),
                &self.theme,
                self.hovered.as_ref(),
            )?;
        }
        Ok(())
    }

    /// Background work between events. Returns true if a redraw is needed.
    fn poll_background(&mut self, now: Instant) -> bool {
        let mut redraw = self.controller.sleep_bus_mut().tick(now);

        let settings_changed = self
            .watcher
            .as_ref()
            .is_some_and(|watcher| watcher.poll_changed());
        if settings_changed && self.controller.settings_mut().reload() {
            tracing::info!("Settings changed on disk, re-applying");
            redraw |= self.controller.settings_changed(now);
        }

        redraw | self.controller.tick(now)
    }

    fn next_wakeup(&self, now: Instant) -> Instant {
        [
            self.controller.next_deadline(),
            self.controller.sleep_bus().next_deadline(),
        ]
        .into_iter()
        .flatten()
        .fold(now + POLL_INTERVAL, Instant::min)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_renderer(event_loop) {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.controller.unmount(&mut self.document);
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render failed: {}", e);
                }
            }
            event => {
                if self.handle_event(&event) {
                    window.request_redraw();
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if self.poll_background(now) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_wakeup(now)));
    }
}
