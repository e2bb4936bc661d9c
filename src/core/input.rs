//! Input state tracking for the editor viewport

use winit::event::{ElementState, MouseButton, WindowEvent};

use crate::core::types::{UVec2, Vec2};

/// Tracks the mouse relative to the editor viewport
///
/// The viewport is the region of the window the scene is drawn into; the
/// GUI panels around it own the rest. Positions are viewport-local pixels,
/// origin top-left, Y down.
pub struct InputState {
    /// Window-space position of the viewport's top-left corner
    viewport_origin: Vec2,
    /// Viewport size in pixels
    viewport_size: UVec2,
    /// Viewport-local mouse position
    mouse_position: Vec2,
    /// Mouse position in normalized device coordinates (Y up)
    ndc_mouse_position: Vec2,
    /// Left button level (the brush trigger)
    left_pressed: bool,
}

impl InputState {
    /// Create new input state for a viewport of the given size
    pub fn new(viewport_size: UVec2) -> Self {
        Self {
            viewport_origin: Vec2::ZERO,
            viewport_size: viewport_size.max(UVec2::ONE),
            mouse_position: Vec2::ZERO,
            ndc_mouse_position: Vec2::new(-1.0, 1.0),
            left_pressed: false,
        }
    }

    /// Process a window event
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_button(*button, *state);
            }
            _ => {}
        }
    }

    /// Cursor moved to a window-space position
    pub fn cursor_moved(&mut self, window_position: Vec2) {
        self.mouse_position = window_position - self.viewport_origin;
        let size = self.viewport_size.as_vec2();
        self.ndc_mouse_position = Vec2::new(
            self.mouse_position.x / size.x * 2.0 - 1.0,
            -(self.mouse_position.y / size.y * 2.0 - 1.0),
        );
    }

    /// Mouse button changed state
    pub fn mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.left_pressed = state == ElementState::Pressed;
        }
    }

    /// Move or resize the viewport inside the window
    pub fn set_viewport(&mut self, origin: Vec2, size: UVec2) {
        let window_position = self.mouse_position + self.viewport_origin;
        self.viewport_origin = origin;
        self.viewport_size = size.max(UVec2::ONE);
        self.cursor_moved(window_position);
    }

    /// Viewport-local mouse position in pixels
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Mouse position in normalized device coordinates
    pub fn ndc_mouse_position(&self) -> Vec2 {
        self.ndc_mouse_position
    }

    pub fn viewport_size(&self) -> UVec2 {
        self.viewport_size
    }

    /// Whether the cursor is over the viewport
    pub fn is_viewport_hovered(&self) -> bool {
        let p = self.mouse_position;
        let size = self.viewport_size.as_vec2();
        p.x >= 0.0 && p.y >= 0.0 && p.x < size.x && p.y < size.y
    }

    /// Whether the brush trigger is held over the viewport
    pub fn is_brush_held(&self) -> bool {
        self.left_pressed && self.is_viewport_hovered()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(UVec2::new(800, 500))
    }
}
