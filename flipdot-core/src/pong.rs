//! Pong demo simulation
//!
//! A ball bouncing between two self-playing paddles, drawn onto any
//! [`Canvas`] once per frame. Pure logic: the firmware render loop owns
//! clearing, redrawing and frame pacing.

use crate::error::FlipdotError;
use crate::geometry::Geometry;
use crate::traits::Canvas;

/// Paddle length in dots
pub const PADDLE_HEIGHT: i16 = 4;

/// Paddle travel per frame
pub const PADDLE_SPEED: i16 = 1;

/// Paddles ignore the ball when it is further away than this many columns
pub const PADDLE_REACH: i16 = 10;

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ball {
    pub x: i16,
    pub y: i16,
    pub dx: i16,
    pub dy: i16,
}

impl Ball {
    /// Ball at the panel centre heading left and down
    pub fn new(geometry: Geometry) -> Self {
        Self {
            x: (geometry.width / 2) as i16,
            y: (geometry.height / 2) as i16,
            dx: -1,
            dy: 1,
        }
    }

    /// Move one frame, bouncing off the panel edges
    pub fn update(&mut self, geometry: Geometry) {
        self.x += self.dx;
        self.y += self.dy;

        if self.x <= 0 || self.x >= geometry.width as i16 - 1 {
            self.dx = -self.dx;
        }
        if self.y <= 0 || self.y >= geometry.height as i16 - 1 {
            self.dy = -self.dy;
        }
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), FlipdotError> {
        plot(canvas, self.x, self.y)
    }
}

/// A vertical paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Paddle {
    pub x: i16,
    /// Top dot
    pub y: i16,
}

impl Paddle {
    /// Paddle in column `x`, vertically centred
    pub fn new(x: i16, geometry: Geometry) -> Self {
        Self {
            x,
            y: geometry.height as i16 / 2 - PADDLE_HEIGHT / 2,
        }
    }

    /// Track the ball when it is within reach
    pub fn update(&mut self, ball: &Ball, geometry: Geometry) {
        if (ball.x - self.x).abs() > PADDLE_REACH {
            return;
        }

        if ball.y < self.y {
            self.y -= PADDLE_SPEED;
        }
        if ball.y > self.y + PADDLE_HEIGHT {
            self.y += PADDLE_SPEED;
        }

        let max_y = geometry.height as i16 - PADDLE_HEIGHT;
        self.y = self.y.clamp(0, max_y);
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), FlipdotError> {
        for i in 0..PADDLE_HEIGHT {
            plot(canvas, self.x, self.y + i)?;
        }
        Ok(())
    }
}

/// Game state
#[derive(Debug, Clone)]
pub struct Pong {
    geometry: Geometry,
    ball: Ball,
    left: Paddle,
    right: Paddle,
    frame: u32,
}

impl Pong {
    /// Start a game sized to the panel
    ///
    /// The panel needs at least three columns and room for a paddle. Both
    /// dimensions must fit in `i16`, the coordinate type of the game.
    pub fn new(geometry: Geometry) -> Result<Self, FlipdotError> {
        let width = i16::try_from(geometry.width).map_err(|_| FlipdotError::InvalidGeometry)?;
        let height = i16::try_from(geometry.height).map_err(|_| FlipdotError::InvalidGeometry)?;
        if width < 3 || height < PADDLE_HEIGHT {
            return Err(FlipdotError::InvalidGeometry);
        }

        Ok(Self {
            geometry,
            ball: Ball::new(geometry),
            left: Paddle::new(0, geometry),
            right: Paddle::new(width - 1, geometry),
            frame: 0,
        })
    }

    /// Advance one frame
    pub fn update(&mut self) {
        self.ball.update(self.geometry);
        self.left.update(&self.ball, self.geometry);
        self.right.update(&self.ball, self.geometry);
        self.frame = self.frame.wrapping_add(1);
    }

    /// Draw the centre net, ball and paddles
    ///
    /// Only sets dots; the caller clears the canvas first.
    pub fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), FlipdotError> {
        let net_x = self.geometry.width / 2;
        for y in 0..self.geometry.height {
            canvas.set_pixel(net_x, y, true)?;
        }

        self.ball.draw(canvas)?;
        self.left.draw(canvas)?;
        self.right.draw(canvas)
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Left and right paddles
    pub fn paddles(&self) -> (&Paddle, &Paddle) {
        (&self.left, &self.right)
    }

    /// Frames simulated so far
    pub fn frame(&self) -> u32 {
        self.frame
    }
}

fn plot<C: Canvas>(canvas: &mut C, x: i16, y: i16) -> Result<(), FlipdotError> {
    // Negative coordinates map to u16::MAX so they fail the bounds check
    let x = u16::try_from(x).unwrap_or(u16::MAX);
    let y = u16::try_from(y).unwrap_or(u16::MAX);
    canvas.set_pixel(x, y, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::PanelBuffer;

    #[test]
    fn test_initial_layout() {
        let pong = Pong::new(Geometry::PANEL_32X16).unwrap();
        let (left, right) = pong.paddles();

        assert_eq!(*pong.ball(), Ball { x: 16, y: 8, dx: -1, dy: 1 });
        assert_eq!(*left, Paddle { x: 0, y: 6 });
        assert_eq!(*right, Paddle { x: 31, y: 6 });
        assert_eq!(pong.frame(), 0);
    }

    #[test]
    fn test_rejects_tiny_panel() {
        assert_eq!(
            Pong::new(Geometry::new(2, 16)).unwrap_err(),
            FlipdotError::InvalidGeometry
        );
        assert_eq!(
            Pong::new(Geometry::new(32, 3)).unwrap_err(),
            FlipdotError::InvalidGeometry
        );
    }

    #[test]
    fn test_rejects_panel_beyond_i16() {
        let too_wide = i16::MAX as u16 + 1;

        assert_eq!(
            Pong::new(Geometry::new(too_wide, 16)).unwrap_err(),
            FlipdotError::InvalidGeometry
        );
        assert_eq!(
            Pong::new(Geometry::new(32, too_wide)).unwrap_err(),
            FlipdotError::InvalidGeometry
        );

        let widest = Pong::new(Geometry::new(i16::MAX as u16, 16)).unwrap();
        assert_eq!(widest.paddles().1.x, i16::MAX - 1);
    }

    #[test]
    fn test_ball_bounces_off_left_edge() {
        let geometry = Geometry::PANEL_32X16;
        let mut ball = Ball { x: 1, y: 5, dx: -1, dy: 1 };

        ball.update(geometry);

        assert_eq!((ball.x, ball.y), (0, 6));
        assert_eq!(ball.dx, 1);
        assert_eq!(ball.dy, 1);
    }

    #[test]
    fn test_ball_bounces_off_bottom_edge() {
        let geometry = Geometry::PANEL_32X16;
        let mut ball = Ball { x: 10, y: 14, dx: 1, dy: 1 };

        ball.update(geometry);

        assert_eq!(ball.y, 15);
        assert_eq!(ball.dy, -1);
    }

    #[test]
    fn test_ball_stays_on_panel() {
        let geometry = Geometry::PANEL_32X16;
        let mut ball = Ball::new(geometry);

        for _ in 0..1_000 {
            ball.update(geometry);
            assert!(geometry.contains(ball.x as u16, ball.y as u16));
            assert!(ball.x >= 0 && ball.y >= 0);
        }
    }

    #[test]
    fn test_paddle_ignores_distant_ball() {
        let geometry = Geometry::PANEL_32X16;
        let mut paddle = Paddle::new(0, geometry);
        let ball = Ball { x: 20, y: 0, dx: 1, dy: 1 };

        paddle.update(&ball, geometry);

        assert_eq!(paddle.y, 6);
    }

    #[test]
    fn test_paddle_tracks_ball() {
        let geometry = Geometry::PANEL_32X16;
        let mut paddle = Paddle::new(0, geometry);

        let above = Ball { x: 5, y: 0, dx: -1, dy: 1 };
        paddle.update(&above, geometry);
        assert_eq!(paddle.y, 5);

        let below = Ball { x: 5, y: 15, dx: -1, dy: 1 };
        paddle.update(&below, geometry);
        assert_eq!(paddle.y, 6);
    }

    #[test]
    fn test_paddle_clamped_to_panel() {
        let geometry = Geometry::PANEL_32X16;
        let mut paddle = Paddle { x: 0, y: 12 };
        let ball = Ball { x: 1, y: 20, dx: -1, dy: 1 };

        for _ in 0..10 {
            paddle.update(&ball, geometry);
        }

        assert_eq!(paddle.y, 12);
    }

    #[test]
    fn test_draw_frame() {
        let pong = Pong::new(Geometry::PANEL_32X16).unwrap();
        let mut canvas = PanelBuffer::new(Geometry::PANEL_32X16).unwrap();

        pong.draw(&mut canvas).unwrap();

        // Net column, ball and two paddles
        for y in 0..16 {
            assert_eq!(canvas.get_pixel(16, y), Ok(true));
        }
        for y in 6..10 {
            assert_eq!(canvas.get_pixel(0, y), Ok(true));
            assert_eq!(canvas.get_pixel(31, y), Ok(true));
        }
        // Ball starts on the net
        assert_eq!(canvas.lit_count(), 16 + 4 + 4);
    }

    #[test]
    fn test_many_frames_draw_cleanly() {
        let geometry = Geometry::PANEL_32X16;
        let mut pong = Pong::new(geometry).unwrap();
        let mut canvas = PanelBuffer::new(geometry).unwrap();

        for _ in 0..500 {
            canvas.clear_all();
            pong.update();
            assert_eq!(pong.draw(&mut canvas), Ok(()));
        }

        assert_eq!(pong.frame(), 500);
    }

    #[test]
    fn test_plot_negative_is_out_of_range() {
        let mut canvas = PanelBuffer::new(Geometry::PANEL_32X16).unwrap();

        assert_eq!(
            plot(&mut canvas, -1, 0),
            Err(FlipdotError::OutOfRange { x: u16::MAX, y: 0 })
        );
    }
}
