use crate::game::{EnvConfig, GameState, Position};

/// An RGB pixel.
pub type Rgb = [u8; 3];

/// Board background
pub const BACKGROUND: Rgb = [255, 255, 255];
/// Apple square
pub const APPLE_COLOR: Rgb = [210, 0, 0];
/// Snake head square
pub const HEAD_COLOR: Rgb = [0, 155, 0];

/// Surface the frame encoder draws on.
///
/// The encoder itself has no display or file dependency; anything that can
/// clear itself and fill cell-sized squares works, and the in-memory
/// [`FrameBuffer`] is the implementation the environment uses.
pub trait RenderTarget {
    fn clear(&mut self, color: Rgb);
    fn draw_cell(&mut self, pos: Position, size: i32, color: Rgb);
}

/// In-memory RGB pixel buffer, row-major, sized to the board in pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; width * height],
        }
    }

    /// Buffer sized for a configuration's board.
    pub fn for_board(config: &EnvConfig) -> Self {
        Self::new(config.board_width as usize, config.board_height as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw pixels, row-major from the top-left corner.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }
}

impl RenderTarget for FrameBuffer {
    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Fill a cell-sized square anchored at `pos`. Parts outside the buffer
    /// are clipped, so a head that just left the board draws nothing.
    fn draw_cell(&mut self, pos: Position, size: i32, color: Rgb) {
        for dy in 0..size {
            let y = pos.y + dy;
            if y < 0 || y as usize >= self.height {
                continue;
            }
            for dx in 0..size {
                let x = pos.x + dx;
                if x < 0 || x as usize >= self.width {
                    continue;
                }
                self.pixels[y as usize * self.width + x as usize] = color;
            }
        }
    }
}

/// Rasterize the current state onto a render target.
///
/// Only the apple and the head are drawn; the rest of the body is
/// intentionally not rendered, so a frame shows the snake as its head
/// alone. The head is drawn last and overdraws the apple on overlap.
pub fn encode_frame(state: &GameState, config: &EnvConfig, target: &mut impl RenderTarget) {
    target.clear(BACKGROUND);
    if let Some(apple) = state.apple {
        target.draw_cell(apple, config.cell_size, APPLE_COLOR);
    }
    target.draw_cell(state.head, config.cell_size, HEAD_COLOR);
}
