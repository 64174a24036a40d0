use crate::foundation::core::{BezPath, Canvas, Point, Rect};
use crate::foundation::error::{BorderError, BorderResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::frame::FrameRGBA;
use crate::render::surface::{DrawSurface, RenderStyle};

/// CPU raster surface powered by `vello_cpu`.
///
/// Holds a persistent premultiplied RGBA8 buffer. Each [`DrawSurface::stroke`] rasterizes the
/// pending path into a scratch layer and composites it source-over onto the buffer.
pub struct CpuSurface {
    canvas: Canvas,
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
    layer: vello_cpu::Pixmap,
    ctx: Option<vello_cpu::RenderContext>,
    path: BezPath,
}

impl CpuSurface {
    /// Allocate a transparent surface of the given size.
    pub fn new(canvas: Canvas) -> BorderResult<Self> {
        let (width, height) = raster_dims(canvas)?;
        Ok(Self {
            canvas,
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
            layer: vello_cpu::Pixmap::new(width, height),
            ctx: None,
            path: BezPath::new(),
        })
    }

    /// Copy out the current pixel buffer.
    pub fn frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn with_ctx_mut<R>(
        &mut self,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> R,
    ) -> R {
        let (width, height) = (self.width, self.height);
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx);
        self.ctx = Some(ctx);
        out
    }
}

impl DrawSurface for CpuSurface {
    fn set_size(&mut self, canvas: Canvas) -> BorderResult<()> {
        if canvas == self.canvas {
            return Ok(());
        }
        *self = Self::new(canvas)?;
        Ok(())
    }

    fn size(&self) -> Canvas {
        self.canvas
    }

    fn clear_rect(&mut self, rect: Rect) {
        let bounds = self.canvas.rect().intersect(rect);
        if bounds.is_zero_area() {
            return;
        }
        let x0 = bounds.x0.floor() as usize;
        let x1 = bounds.x1.ceil() as usize;
        let y0 = bounds.y0.floor() as usize;
        let y1 = bounds.y1.ceil() as usize;
        let stride = usize::from(self.width) * 4;

        let data = self.pixmap.data_as_u8_slice_mut();
        for row in data.chunks_exact_mut(stride).take(y1).skip(y0) {
            row[x0 * 4..x1 * 4].fill(0);
        }
    }

    fn begin_path(&mut self) {
        self.path = BezPath::new();
    }

    fn move_to(&mut self, p: Point) {
        self.path.move_to(p);
    }

    fn line_to(&mut self, p: Point) {
        self.path.line_to(p);
    }

    fn close_path(&mut self) {
        self.path.close_path();
    }

    fn stroke(&mut self, style: &RenderStyle) -> BorderResult<()> {
        // Widths a canvas would reject paint nothing.
        if self.path.elements().is_empty()
            || !(style.line_width.is_finite() && style.line_width > 0.0)
        {
            return Ok(());
        }

        let cpu_path = bezpath_to_cpu(&self.path);
        let stroke = stroke_to_cpu(&style.stroke());
        let color = style.color;

        self.with_ctx_mut(|surface, ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                color.r, color.g, color.b, color.a,
            ));
            ctx.set_stroke(stroke);
            ctx.stroke_path(&cpu_path);
            ctx.flush();

            surface.layer.data_as_u8_slice_mut().fill(0);
            ctx.render_to_pixmap(&mut surface.layer);
        });

        composite_over(
            self.pixmap.data_as_u8_slice_mut(),
            self.layer.data_as_u8_slice(),
        );
        Ok(())
    }
}

fn raster_dims(canvas: Canvas) -> BorderResult<(u16, u16)> {
    let width: u16 = canvas
        .width
        .try_into()
        .map_err(|_| BorderError::render("surface width exceeds u16"))?;
    let height: u16 = canvas
        .height
        .try_into()
        .map_err(|_| BorderError::render("surface height exceeds u16"))?;
    if width == 0 || height == 0 {
        return Err(BorderError::render("surface must be at least 1x1 pixels"));
    }
    Ok((width, height))
}

/// Premultiplied source-over: `dst = src + dst * (1 - src_a)`.
fn composite_over(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let inv = 255 - u16::from(s[3]);
        if inv == 255 {
            continue;
        }
        for (dc, &sc) in d.iter_mut().zip(s) {
            *dc = sc.saturating_add(mul_div255_u8(u16::from(*dc), inv));
        }
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn stroke_to_cpu(stroke: &kurbo::Stroke) -> vello_cpu::kurbo::Stroke {
    let cap = |c: kurbo::Cap| match c {
        kurbo::Cap::Butt => vello_cpu::kurbo::Cap::Butt,
        kurbo::Cap::Square => vello_cpu::kurbo::Cap::Square,
        kurbo::Cap::Round => vello_cpu::kurbo::Cap::Round,
    };
    let join = match stroke.join {
        kurbo::Join::Bevel => vello_cpu::kurbo::Join::Bevel,
        kurbo::Join::Miter => vello_cpu::kurbo::Join::Miter,
        kurbo::Join::Round => vello_cpu::kurbo::Join::Round,
    };
    vello_cpu::kurbo::Stroke::new(stroke.width)
        .with_start_cap(cap(stroke.start_cap))
        .with_end_cap(cap(stroke.end_cap))
        .with_join(join)
        .with_miter_limit(stroke.miter_limit)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
