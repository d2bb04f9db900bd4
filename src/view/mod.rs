//! View module - scene layout, hit-testing and software rendering
//!
//! [`Renderer`] owns the softbuffer surface. Each frame the runtime computes
//! an [`OverlayLayout`], paints it with [`paint_scene`] into a back buffer,
//! then copies the buffer to the surface and presents it.

pub mod frame;
pub mod layout;

pub use frame::Frame;
pub use hit_test::{hit_test_overlay, HitTarget};
pub use layout::{ButtonLayout, OverlayLayout, Surface};

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use winit::window::Window;

use crate::geometry::Rect;
use crate::panel::{PanelIcon, PanelRegistry};
use crate::theme::OverlayTheme;

/// Width of the grip drawn inside the drag handle
const GRIP_WIDTH: f32 = 40.0;

pub struct Renderer {
    surface: softbuffer::Surface<Rc<Window>, Rc<Window>>,
    /// Softbuffer doesn't guarantee buffer contents between frames, so the
    /// scene is painted here and copied to the surface on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let (width, height) = {
            let size = window.inner_size();
            (size.width.max(1), size.height.max(1))
        };

        let mut surface = softbuffer::Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;
        resize_surface(&mut surface, width, height)?;

        Ok(Self {
            surface,
            back_buffer: vec![0u32; (width as usize) * (height as usize)],
            width,
            height,
        })
    }

    /// Window area in layout coordinates
    pub fn container(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    /// Track a new window size. Zero-sized windows keep a 1x1 buffer.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let (width, height) = (width.max(1), height.max(1));
        if (width, height) == (self.width, self.height) {
            return Ok(());
        }

        self.width = width;
        self.height = height;
        self.back_buffer
            .resize((width as usize) * (height as usize), 0);
        resize_surface(&mut self.surface, width, height)
    }

    pub fn render(
        &mut self,
        layout: &OverlayLayout,
        registry: &PanelRegistry,
        theme: &OverlayTheme,
        hovered: Option<&HitTarget>,
    ) -> Result<()> {
        {
            let mut frame = Frame::new(
                &mut self.back_buffer,
                self.width as usize,
                self.height as usize,
            );
            paint_scene(&mut frame, layout, registry, theme, hovered);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}

fn resize_surface(
    surface: &mut softbuffer::Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
) -> Result<()> {
    let width = NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN);
    let height = NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN);
    surface
        .resize(width, height)
        .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))
}

/// Paint the player stand-in and, unless hidden, the overlay on top
pub fn paint_scene(
    frame: &mut Frame<'_>,
    layout: &OverlayLayout,
    registry: &PanelRegistry,
    theme: &OverlayTheme,
    hovered: Option<&HitTarget>,
) {
    frame.clear(theme.player_background.to_argb_u32());

    if !layout.visible {
        return;
    }

    // Panel first: the cluster is stacked above it
    if let Some((key, rect)) = &layout.panel {
        if let Some(entry) = registry.get(key) {
            entry.content.paint(frame, *rect, theme);
        }
    }

    paint_cluster(frame, layout, theme, hovered);
}

fn paint_cluster(
    frame: &mut Frame<'_>,
    layout: &OverlayLayout,
    theme: &OverlayTheme,
    hovered: Option<&HitTarget>,
) {
    frame.fill_rect_blended(layout.cluster, theme.cluster_background.to_argb_u32());

    let handle = layout.drag_handle;
    let grip = Rect::new(
        handle.x + (handle.width - GRIP_WIDTH.min(handle.width)) / 2.0,
        handle.y + handle.height / 2.0 - 2.0,
        GRIP_WIDTH.min(handle.width),
        4.0,
    );
    frame.fill_rect(grip, theme.drag_handle.to_argb_u32());

    for button in &layout.buttons {
        let is_hovered = matches!(hovered, Some(HitTarget::Button(key)) if *key == button.key);
        let fill = if button.pressed {
            theme.button_pressed
        } else if is_hovered {
            theme.button_hover
        } else {
            theme.button
        };
        frame.fill_rect(button.rect, fill.to_argb_u32());
        paint_icon(frame, button.icon, button.rect, theme);
    }
}

/// Simple vector stand-ins for the button glyphs
fn paint_icon(frame: &mut Frame<'_>, icon: PanelIcon, rect: Rect, theme: &OverlayTheme) {
    let color = theme.icon.to_argb_u32();
    let side = rect.width.min(rect.height) * 0.5;
    let x = rect.x + (rect.width - side) / 2.0;
    let y = rect.y + (rect.height - side) / 2.0;

    match icon {
        PanelIcon::Welcome => {
            // List: three bars
            let bar = (side / 5.0).max(1.0);
            for i in 0..3 {
                frame.fill_rect(Rect::new(x, y + i as f32 * 2.0 * bar, side, bar), color);
            }
        }
        PanelIcon::Settings => {
            // Gear: square ring
            let stroke = (side / 6.0).max(1.0);
            frame.fill_rect(Rect::new(x, y, side, stroke), color);
            frame.fill_rect(Rect::new(x, y + side - stroke, side, stroke), color);
            frame.fill_rect(Rect::new(x, y, stroke, side), color);
            frame.fill_rect(Rect::new(x + side - stroke, y, stroke, side), color);
        }
    }
}
