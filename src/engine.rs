use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Color;
use crate::doc::{CanvasState, Stroke};
use crate::hit::{self, HitTarget};
use crate::render::{self, Chrome, DrawCommands};
use crate::settings::Settings;
use crate::tool::{DrawingConfig, ToolPanel};
use crate::viewport::{Point, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The scene changed; the host should schedule a render.
    RenderNeeded,
    /// A gesture was committed as the stroke at this store index.
    StrokeCommitted { index: usize },
    /// The tool panel was opened or closed.
    PanelToggled { open: bool },
    /// The user pressed the close affordance. The host hides the canvas.
    CloseRequested,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub state: CanvasState,
    pub panel: ToolPanel,
    pub settings: Settings,
    pub viewport: Viewport,
    pub visible: bool,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A hidden, empty canvas configured by host settings.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            state: CanvasState::new(),
            panel: ToolPanel::new(&settings),
            settings,
            viewport: Viewport::default(),
            visible: false,
        }
    }

    // --- Mount ---

    /// Show or hide the canvas.
    ///
    /// Becoming visible re-opens the tool panel. Hiding abandons any gesture
    /// in progress; committed strokes stay until the engine is dropped.
    pub fn set_visible(&mut self, visible: bool) -> Vec<Action> {
        if visible == self.visible {
            return Vec::new();
        }
        self.visible = visible;
        if visible {
            self.panel.open();
        } else {
            self.state.tracker.cancel();
        }
        tracing::debug!(visible, strokes = self.state.strokes.len(), "canvas visibility changed");
        vec![Action::RenderNeeded]
    }

    /// Update the host-allocated rectangle.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Vec<Action> {
        self.viewport = viewport;
        vec![Action::RenderNeeded]
    }

    /// The user asked to leave the canvas.
    pub fn request_close(&mut self) -> Vec<Action> {
        self.state.tracker.cancel();
        tracing::debug!(strokes = self.state.strokes.len(), "close requested");
        vec![Action::CloseRequested]
    }

    // --- Pointer input ---

    /// Pointer pressed at `client_pt` (page coordinates).
    pub fn on_pointer_down(&mut self, client_pt: Point) -> Vec<Action> {
        if !self.visible {
            return Vec::new();
        }
        let local = self.viewport.client_to_local(client_pt);
        match hit::hit_test(local, &self.viewport, self.panel.is_open()) {
            Some(HitTarget::CloseButton) => self.request_close(),
            Some(HitTarget::PanelToggle) => self.open_panel(),
            None => {
                self.state.tracker.on_gesture_start(local);
                vec![Action::RenderNeeded]
            }
        }
    }

    /// Pointer moved to `client_pt`. Ignored unless a gesture is active.
    pub fn on_pointer_move(&mut self, client_pt: Point) -> Vec<Action> {
        if !self.visible {
            return Vec::new();
        }
        let local = self.viewport.client_to_local(client_pt);
        if self.state.tracker.on_gesture_move(local) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Pointer released. Commits the gesture with the pen settings in effect now.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let config = *self.panel.config();
        let Some(stroke) = self.state.commit(&config) else {
            return Vec::new();
        };
        tracing::debug!(
            points = stroke.points().len(),
            color = %stroke.color(),
            width = stroke.width(),
            eraser = stroke.is_eraser(),
            "stroke committed"
        );
        let index = self.state.strokes.len() - 1;
        vec![Action::StrokeCommitted { index }, Action::RenderNeeded]
    }

    /// The platform took the pointer away. Drops the gesture without committing.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        if self.state.tracker.cancel() {
            tracing::debug!("gesture cancelled");
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    // --- Tool panel ---

    pub fn set_color(&mut self, color: Color) -> Vec<Action> {
        self.panel.set_color(color);
        self.preview_changed()
    }

    pub fn set_width(&mut self, width: f64) -> Vec<Action> {
        self.panel.set_width(width);
        self.preview_changed()
    }

    pub fn increment_width(&mut self) -> Vec<Action> {
        self.panel.increment_width();
        self.preview_changed()
    }

    pub fn decrement_width(&mut self) -> Vec<Action> {
        self.panel.decrement_width();
        self.preview_changed()
    }

    pub fn set_eraser(&mut self, is_eraser: bool) -> Vec<Action> {
        self.panel.set_eraser(is_eraser);
        self.preview_changed()
    }

    pub fn open_panel(&mut self) -> Vec<Action> {
        self.panel.open();
        self.panel_changed()
    }

    pub fn close_panel(&mut self) -> Vec<Action> {
        self.panel.close();
        self.panel_changed()
    }

    pub fn toggle_panel(&mut self) -> Vec<Action> {
        self.panel.toggle();
        self.panel_changed()
    }

    /// Only the in-progress stroke previews the live pen, so only it needs a redraw.
    fn preview_changed(&self) -> Vec<Action> {
        if self.state.tracker.is_active() { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    fn panel_changed(&self) -> Vec<Action> {
        vec![Action::PanelToggled { open: self.panel.is_open() }, Action::RenderNeeded]
    }

    // --- History ---

    /// Remove the most recent stroke. No-op when there is none.
    pub fn undo(&mut self) -> Vec<Action> {
        match self.state.undo() {
            Some(_) => {
                tracing::debug!(remaining = self.state.strokes.len(), "undo");
                vec![Action::RenderNeeded]
            }
            None => Vec::new(),
        }
    }

    /// Remove every stroke and any gesture in progress.
    pub fn clear(&mut self) -> Vec<Action> {
        tracing::debug!(removed = self.state.strokes.len(), "canvas cleared");
        self.state.clear();
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// Committed strokes, bottom first.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        self.state.strokes.strokes()
    }

    /// Points of the gesture in progress; empty when idle.
    #[must_use]
    pub fn in_progress_points(&self) -> &[Point] {
        self.state.in_progress_points()
    }

    /// The live pen configuration.
    #[must_use]
    pub fn config(&self) -> &DrawingConfig {
        self.panel.config()
    }

    /// Draw commands for the current frame.
    #[must_use]
    pub fn draw_commands(&self) -> DrawCommands<'_> {
        render::draw_commands(&self.state, self.panel.config(), self.settings.background)
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    /// Create a new engine with host-supplied settings.
    #[must_use]
    pub fn with_settings(canvas: HtmlCanvasElement, settings: Settings) -> Self {
        Self { canvas, core: EngineCore::with_settings(settings) }
    }

    // --- Delegated mount ---

    pub fn set_visible(&mut self, visible: bool) -> Vec<Action> {
        self.core.set_visible(visible)
    }

    pub fn request_close(&mut self) -> Vec<Action> {
        self.core.request_close()
    }

    // --- Viewport ---

    /// Update the canvas position, CSS size, and device pixel ratio, and
    /// resize the backing store to match.
    pub fn set_viewport(&mut self, origin_x: f64, origin_y: f64, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let viewport = Viewport { origin_x, origin_y, width: width_css, height: height_css, dpr };
        let (w, h) = viewport.device_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        self.core.set_viewport(viewport)
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, client_pt: Point) -> Vec<Action> {
        self.core.on_pointer_down(client_pt)
    }

    pub fn on_pointer_move(&mut self, client_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(client_pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.core.on_pointer_cancel()
    }

    // --- Delegated tool panel ---

    pub fn set_color(&mut self, color: Color) -> Vec<Action> {
        self.core.set_color(color)
    }

    pub fn set_width(&mut self, width: f64) -> Vec<Action> {
        self.core.set_width(width)
    }

    pub fn increment_width(&mut self) -> Vec<Action> {
        self.core.increment_width()
    }

    pub fn decrement_width(&mut self) -> Vec<Action> {
        self.core.decrement_width()
    }

    pub fn set_eraser(&mut self, is_eraser: bool) -> Vec<Action> {
        self.core.set_eraser(is_eraser)
    }

    pub fn open_panel(&mut self) -> Vec<Action> {
        self.core.open_panel()
    }

    pub fn close_panel(&mut self) -> Vec<Action> {
        self.core.close_panel()
    }

    pub fn toggle_panel(&mut self) -> Vec<Action> {
        self.core.toggle_panel()
    }

    // --- Delegated history ---

    pub fn undo(&mut self) -> Vec<Action> {
        self.core.undo()
    }

    pub fn clear(&mut self) -> Vec<Action> {
        self.core.clear()
    }

    // --- Render ---

    /// Draw the current state to the canvas. A hidden canvas is left blank.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self.context()?;
        if !self.core.visible {
            return render::clear(&ctx, &self.core.viewport);
        }
        let chrome = Chrome { panel_open: self.core.panel.is_open() };
        render::draw(&ctx, self.core.draw_commands(), self.core.settings.background, &self.core.viewport, chrome)
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?;
        Ok(ctx.dyn_into::<CanvasRenderingContext2d>()?)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        self.core.strokes()
    }

    #[must_use]
    pub fn config(&self) -> &DrawingConfig {
        self.core.config()
    }
}
