//! The drawing surface: DPI-aware metrics and recorded draw commands.
//!
//! The engine never touches a real canvas. It records [`DrawCommand`]s into
//! a [`DrawList`]; the host replays them against whatever surface it owns
//! (2D canvas, GPU quad batch, test recorder).

use keepsake_shared::{Color, Vec2, Viewport};

/// Surface dimensions, tracking viewport resizes and device pixel ratio.
///
/// Logical size is what particles are simulated in; physical size is what
/// the host allocates so shapes stay crisp on high-density displays.
/// Resizing never touches particle state - positions are logical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMetrics {
    logical: Viewport,
    scale_factor: f32,
}

impl SurfaceMetrics {
    /// Creates surface metrics. A non-positive scale factor falls back to 1.
    #[must_use]
    pub fn new(logical: Viewport, scale_factor: f32) -> Self {
        Self {
            logical,
            scale_factor: if scale_factor > 0.0 { scale_factor } else { 1.0 },
        }
    }

    /// Re-derives dimensions after a viewport resize or a DPR change
    /// (e.g. the window moved to another monitor).
    pub fn resize(&mut self, logical: Viewport, scale_factor: f32) {
        *self = Self::new(logical, scale_factor);
    }

    /// Logical size, in CSS pixels.
    #[must_use]
    pub const fn logical(&self) -> Viewport {
        self.logical
    }

    /// Device pixel ratio.
    #[must_use]
    pub const fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Physical pixel width the host should allocate.
    #[must_use]
    pub fn physical_width(&self) -> u32 {
        (self.logical.width * self.scale_factor).floor() as u32
    }

    /// Physical pixel height the host should allocate.
    #[must_use]
    pub fn physical_height(&self) -> u32 {
        (self.logical.height * self.scale_factor).floor() as u32
    }
}

/// One drawing operation, in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface.
    Clear,
    /// Filled circle.
    Circle {
        /// Center position.
        center: Vec2,
        /// Radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// Filled rectangle, centered on `center` and rotated around it.
    Quad {
        /// Center position.
        center: Vec2,
        /// Width.
        width: f32,
        /// Height.
        height: f32,
        /// Rotation in radians.
        rotation: f32,
        /// Fill color.
        color: Color,
    },
}

/// Recorder that collects one frame's draw commands.
#[derive(Debug)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Creates an empty draw list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(1024),
        }
    }

    /// Begins a new frame, discarding the previous one's commands.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Records a command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// The commands recorded so far this frame.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of commands recorded this frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if nothing has been recorded this frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}
