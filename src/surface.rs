/// 2D drawing surfaces.
///
/// `Surface` is the opaque drawing collaborator the renderer talks to: clear,
/// filled rectangles and filled polygon paths under a settable fill colour.
/// `PixelCanvas` rasterises into an in-memory framebuffer that the terminal
/// presenter later samples; `RecordingSurface` just remembers the calls.

use crate::entities::Rgb;

pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_fill(&mut self, color: Rgb);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    /// Fill every subpath of the current path (open subpaths are closed implicitly).
    fn fill(&mut self);
}

// ── Path bookkeeping shared by both surfaces ─────────────────────────────────

#[derive(Clone, Debug, Default)]
struct PathBuilder {
    subpaths: Vec<Vec<(f64, f64)>>,
}

impl PathBuilder {
    fn begin(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.subpaths.push(vec![(x, y)]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        match self.subpaths.last_mut() {
            Some(points) => points.push((x, y)),
            // A line with no current point acts as a move, like a canvas does.
            None => self.subpaths.push(vec![(x, y)]),
        }
    }

    fn close(&mut self) {
        let start = self.subpaths.last().and_then(|points| points.first().copied());
        if let Some(start) = start {
            // Subsequent drawing continues from the subpath's start point.
            self.subpaths.push(vec![start]);
        }
    }
}

// ── Pixel framebuffer ─────────────────────────────────────────────────────────

/// Fixed-size RGB framebuffer.  Pixel `(x, y)` is covered by a shape when its
/// centre `(x + 0.5, y + 0.5)` lies inside it.
#[derive(Clone, Debug)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
    fill: Rgb,
    path: PathBuilder,
}

impl PixelCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width * height],
            fill: Rgb::BLACK,
            path: PathBuilder::default(),
        }
    }

    pub fn pixel_width(&self) -> usize {
        self.width
    }

    pub fn pixel_height(&self) -> usize {
        self.height
    }

    /// Colour at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Column/row span of pixel centres inside `[start, end)`, clipped to `limit`.
    fn span(start: f64, end: f64, limit: usize) -> (usize, usize) {
        let lo = (start - 0.5).ceil().max(0.0);
        let hi = (end - 0.5).ceil().max(0.0);
        let lo = (lo as usize).min(limit);
        let hi = (hi as usize).min(limit);
        (lo, hi)
    }

    fn paint(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb) {
        let (col_lo, col_hi) = Self::span(x0, x1, self.width);
        let (row_lo, row_hi) = Self::span(y0, y1, self.height);
        for row in row_lo..row_hi {
            let base = row * self.width;
            for px in &mut self.pixels[base + col_lo..base + col_hi] {
                *px = color;
            }
        }
    }

    /// Even-odd scanline fill of every subpath.
    fn fill_polygons(&mut self) {
        let edges: Vec<((f64, f64), (f64, f64))> = self
            .path
            .subpaths
            .iter()
            .filter(|points| points.len() >= 3)
            .flat_map(|points| {
                points
                    .iter()
                    .zip(points.iter().cycle().skip(1))
                    .map(|(&a, &b)| (a, b))
            })
            .collect();
        if edges.is_empty() {
            return;
        }

        let min_y = edges.iter().map(|(a, b)| a.1.min(b.1)).fold(f64::INFINITY, f64::min);
        let max_y = edges
            .iter()
            .map(|(a, b)| a.1.max(b.1))
            .fold(f64::NEG_INFINITY, f64::max);
        let (row_lo, row_hi) = Self::span(min_y, max_y, self.height);

        let mut crossings: Vec<f64> = Vec::new();
        for row in row_lo..row_hi {
            let cy = row as f64 + 0.5;
            crossings.clear();
            for &((ax, ay), (bx, by)) in &edges {
                if (ay <= cy && cy < by) || (by <= cy && cy < ay) {
                    crossings.push(ax + (cy - ay) * (bx - ax) / (by - ay));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                let (col_lo, col_hi) = Self::span(pair[0], pair[1], self.width);
                let base = row * self.width;
                for px in &mut self.pixels[base + col_lo..base + col_hi] {
                    *px = self.fill;
                }
            }
        }
    }
}

impl Surface for PixelCanvas {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.paint(x, y, x + width, y + height, Rgb::BLACK);
    }

    fn set_fill(&mut self, color: Rgb) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.paint(x, y, x + width, y + height, self.fill);
    }

    fn begin_path(&mut self) {
        self.path.begin();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.path.close();
    }

    fn fill(&mut self) {
        self.fill_polygons();
    }
}

// ── Call recorder ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { x: f64, y: f64, width: f64, height: f64 },
    FillRect { x: f64, y: f64, width: f64, height: f64, color: Rgb },
    /// A filled path; one point list per subpath.
    FillPath { subpaths: Vec<Vec<(f64, f64)>>, color: Rgb },
}

/// A surface that draws nothing and remembers everything.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    fill: Rgb,
    path: PathBuilder,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            fill: Rgb::BLACK,
            path: PathBuilder::default(),
            commands: Vec::new(),
        }
    }

    pub fn fill_rects_of(&self, color: Rgb) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::FillRect { color: fill, .. } if *fill == color))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { x, y, width, height });
    }

    fn set_fill(&mut self, color: Rgb) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRect { x, y, width, height, color: self.fill });
    }

    fn begin_path(&mut self) {
        self.path.begin();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.path.close();
    }

    fn fill(&mut self) {
        let subpaths: Vec<Vec<(f64, f64)>> = self
            .path
            .subpaths
            .iter()
            .filter(|points| points.len() >= 2)
            .cloned()
            .collect();
        self.commands.push(DrawCommand::FillPath { subpaths, color: self.fill });
    }
}
