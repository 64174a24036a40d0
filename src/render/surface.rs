use crate::foundation::core::{Canvas, Point, Rect, Rgba8};
use crate::foundation::error::BorderResult;

/// Stroke styling for the border outline. Caps and joins are always round.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderStyle {
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke width in pixels.
    pub line_width: f64,
}

impl RenderStyle {
    /// `kurbo` stroke description with round caps and joins.
    pub fn stroke(&self) -> kurbo::Stroke {
        kurbo::Stroke::new(self.line_width)
            .with_caps(kurbo::Cap::Round)
            .with_join(kurbo::Join::Round)
    }
}

/// Minimal 2D raster canvas the animator draws into.
///
/// Path calls between [`DrawSurface::begin_path`] and [`DrawSurface::stroke`] build one path;
/// the surface keeps its pixels between frames.
pub trait DrawSurface {
    /// Resize the logical pixel dimensions. Contents may be discarded.
    fn set_size(&mut self, canvas: Canvas) -> BorderResult<()>;

    /// Current logical pixel dimensions.
    fn size(&self) -> Canvas;

    /// Clear `rect` to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Discard any pending path and start a new one.
    fn begin_path(&mut self);

    /// Start a new subpath at `p`.
    fn move_to(&mut self, p: Point);

    /// Extend the current subpath with a straight line to `p`.
    fn line_to(&mut self, p: Point);

    /// Close the current subpath.
    fn close_path(&mut self);

    /// Stroke the pending path.
    fn stroke(&mut self, style: &RenderStyle) -> BorderResult<()>;
}

/// One call received by a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// [`DrawSurface::set_size`].
    SetSize {
        /// Requested size.
        canvas: Canvas,
    },
    /// [`DrawSurface::clear_rect`].
    ClearRect {
        /// Cleared region.
        rect: Rect,
    },
    /// [`DrawSurface::begin_path`].
    BeginPath,
    /// [`DrawSurface::move_to`].
    MoveTo {
        /// Target point.
        p: Point,
    },
    /// [`DrawSurface::line_to`].
    LineTo {
        /// Target point.
        p: Point,
    },
    /// [`DrawSurface::close_path`].
    ClosePath,
    /// [`DrawSurface::stroke`].
    Stroke {
        /// Style used.
        style: RenderStyle,
    },
}

/// Surface that rasterizes nothing and records every call, for tests and tracing.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    canvas: Canvas,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Build an empty recorder with the given initial size.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            commands: Vec::new(),
        }
    }

    /// All commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the log empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of strokes issued so far.
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke { .. }))
            .count()
    }

    /// Points passed to `move_to`/`line_to`, in order.
    pub fn path_points(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::MoveTo { p } | DrawCommand::LineTo { p } => Some(*p),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn set_size(&mut self, canvas: Canvas) -> BorderResult<()> {
        self.canvas = canvas;
        self.commands.push(DrawCommand::SetSize { canvas });
        Ok(())
    }

    fn size(&self) -> Canvas {
        self.canvas
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClearRect { rect });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(DrawCommand::MoveTo { p });
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(DrawCommand::LineTo { p });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn stroke(&mut self, style: &RenderStyle) -> BorderResult<()> {
        self.commands.push(DrawCommand::Stroke { style: *style });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
