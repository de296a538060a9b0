//! Hall diagram renderer.
//!
//! Draws a cinema seating chart: a screen bar on top, a grid of seats below
//! it, and a legend on the right. The layout is fully determined by
//! [`HallParams`]; only seat occupancy is sampled from the caller's random
//! source, so a seeded RNG yields a reproducible image.

pub mod draw;

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use rand::Rng;

use crate::error::CoreError;
use draw::{draw_text, fill_rect, stroke_rect, text_width};

/* --------------------------------------------------------------------------
Named constants
-------------------------------------------------------------------------- */

pub const DEFAULT_ROWS: u32 = 8;
pub const DEFAULT_COLS: u32 = 12;
pub const DEFAULT_OCCUPIED_PCT: u32 = 30;

/// Upper bound on rows; keeps row letters within `A..=Z`.
pub const MAX_ROWS: u32 = 26;

/// Upper bound on seats per row.
pub const MAX_COLS: u32 = 40;

/// Number of trailing rows flagged VIP.
pub const VIP_ROW_COUNT: u32 = 2;

pub const SEAT_SIZE: i32 = 36;
pub const SEAT_GAP: i32 = 6;
pub const MARGIN: i32 = 20;
pub const LEGEND_WIDTH: i32 = 220;
pub const SCREEN_HEIGHT: i32 = 16;

/// Vertical space between the screen bar and the first seat row.
const SCREEN_GAP: i32 = 4;

const LEGEND_OFFSET: i32 = 20;
const LEGEND_ITEM_HEIGHT: i32 = 28;
const LEGEND_SWATCH: i32 = 18;

pub const COLOR_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const COLOR_FREE: Rgba<u8> = Rgba([0, 180, 0, 255]);
pub const COLOR_OCCUPIED: Rgba<u8> = Rgba([200, 0, 0, 255]);
pub const COLOR_VIP_FREE: Rgba<u8> = Rgba([0, 70, 200, 255]);
pub const COLOR_VIP_OCCUPIED: Rgba<u8> = Rgba([150, 50, 150, 255]);
pub const COLOR_SEAT_BORDER: Rgba<u8> = Rgba([30, 30, 30, 255]);
pub const COLOR_SCREEN: Rgba<u8> = Rgba([120, 120, 120, 255]);
pub const COLOR_TEXT: Rgba<u8> = Rgba([0, 0, 0, 255]);

/* --------------------------------------------------------------------------
Parameters
-------------------------------------------------------------------------- */

/// Grid size and occupancy for one diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HallParams {
    pub rows: u32,
    pub cols: u32,
    /// Probability, in percent, that any given seat is occupied.
    pub occupied_pct: u32,
}

impl Default for HallParams {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            occupied_pct: DEFAULT_OCCUPIED_PCT,
        }
    }
}

impl HallParams {
    /// Build parameters from raw query-string values.
    ///
    /// Never fails. Each value that is missing, non-numeric, zero or negative
    /// falls back to its own default; the others are kept as given up to
    /// [`MAX_ROWS`], [`MAX_COLS`] and 100%, which bound the canvas size.
    pub fn from_query(rows: Option<&str>, cols: Option<&str>, occupied_pct: Option<&str>) -> Self {
        Self {
            rows: positive_or(rows, DEFAULT_ROWS).min(MAX_ROWS),
            cols: positive_or(cols, DEFAULT_COLS).min(MAX_COLS),
            occupied_pct: positive_or(occupied_pct, DEFAULT_OCCUPIED_PCT).min(100),
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        (MARGIN * 2 + self.grid_width() + LEGEND_WIDTH) as u32
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        (MARGIN * 2 + span(self.rows)) as u32
    }

    fn grid_width(&self) -> i32 {
        span(self.cols)
    }
}

fn positive_or(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|v| *v > 0)
        .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
        .unwrap_or(default)
}

/// Pixels covered by `count` seats laid out side by side.
fn span(count: u32) -> i32 {
    count as i32 * (SEAT_SIZE + SEAT_GAP) - SEAT_GAP
}

/* --------------------------------------------------------------------------
Seats
-------------------------------------------------------------------------- */

/// One seat of the rendered grid. Exists only while drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    /// Zero-based row index; row 0 is closest to the screen.
    pub row: u32,
    /// Zero-based column index.
    pub col: u32,
    pub vip: bool,
    pub occupied: bool,
}

impl Seat {
    /// Row letter followed by the one-based column number, e.g. `C7`.
    pub fn label(&self) -> String {
        let letter = char::from(b'A' + (self.row % 26) as u8);
        format!("{letter}{}", self.col + 1)
    }

    /// Fill color keyed by the (VIP, occupied) pair.
    pub fn fill(&self) -> Rgba<u8> {
        match (self.vip, self.occupied) {
            (true, true) => COLOR_VIP_OCCUPIED,
            (true, false) => COLOR_VIP_FREE,
            (false, true) => COLOR_OCCUPIED,
            (false, false) => COLOR_FREE,
        }
    }

    /// Top-left pixel of the seat square.
    pub fn origin(&self) -> (i32, i32) {
        (
            MARGIN + self.col as i32 * (SEAT_SIZE + SEAT_GAP),
            seats_top() + self.row as i32 * (SEAT_SIZE + SEAT_GAP),
        )
    }
}

fn seats_top() -> i32 {
    MARGIN + SCREEN_HEIGHT + SCREEN_GAP
}

/// Lay out every seat in row-major order, sampling occupancy from `rng`.
pub fn layout_seats<R: Rng + ?Sized>(params: &HallParams, rng: &mut R) -> Vec<Seat> {
    let vip_from = params.rows.saturating_sub(VIP_ROW_COUNT);
    let mut seats = Vec::with_capacity((params.rows * params.cols) as usize);
    for row in 0..params.rows {
        for col in 0..params.cols {
            seats.push(Seat {
                row,
                col,
                vip: row >= vip_from,
                occupied: rng.random_range(0..100) < params.occupied_pct,
            });
        }
    }
    seats
}

/* --------------------------------------------------------------------------
Rendering
-------------------------------------------------------------------------- */

/// Render the hall diagram.
pub fn render_hall<R: Rng + ?Sized>(params: &HallParams, rng: &mut R) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(params.width(), params.height(), COLOR_BACKGROUND);
    let grid_width = params.grid_width();

    // Screen
    fill_rect(&mut img, MARGIN, MARGIN, grid_width, SCREEN_HEIGHT, COLOR_SCREEN);
    let label = "SCREEN";
    let label_x = MARGIN + (grid_width - text_width(label)).max(0) / 2;
    draw_text(&mut img, label_x, MARGIN - 2, label, COLOR_TEXT);

    for seat in layout_seats(params, rng) {
        let (x, y) = seat.origin();
        fill_rect(&mut img, x, y, SEAT_SIZE, SEAT_SIZE, seat.fill());
        stroke_rect(&mut img, x, y, SEAT_SIZE, SEAT_SIZE, COLOR_SEAT_BORDER);
        draw_text(&mut img, x + 4, y + SEAT_SIZE / 2 + 6, &seat.label(), COLOR_TEXT);
    }

    draw_legend(&mut img, params, MARGIN + grid_width + LEGEND_OFFSET, MARGIN + 10);
    img
}

fn draw_legend(img: &mut RgbaImage, params: &HallParams, x: i32, y: i32) {
    let items = [
        ("Free", COLOR_FREE),
        ("Occupied", COLOR_OCCUPIED),
        ("VIP Free", COLOR_VIP_FREE),
        ("VIP Occupied", COLOR_VIP_OCCUPIED),
    ];
    for (i, (text, color)) in items.iter().enumerate() {
        let item_y = y + i as i32 * LEGEND_ITEM_HEIGHT;
        fill_rect(img, x, item_y, LEGEND_SWATCH, LEGEND_SWATCH, *color);
        stroke_rect(img, x, item_y, LEGEND_SWATCH, LEGEND_SWATCH, COLOR_SEAT_BORDER);
        draw_text(img, x + LEGEND_SWATCH + 6, item_y + 14, text, COLOR_TEXT);
    }

    let info = format!("Rows: {}  Cols: {}", params.rows, params.cols);
    draw_text(img, x, y + 5 * LEGEND_ITEM_HEIGHT, &info, COLOR_TEXT);
}

/// Encode a rendered diagram as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, CoreError> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| CoreError::Encoding(format!("PNG encoding failed: {e}")))?;
    Ok(buf.into_inner())
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn params(rows: u32, cols: u32, occupied_pct: u32) -> HallParams {
        HallParams {
            rows,
            cols,
            occupied_pct,
        }
    }

    /// Top-left corners of border-colored squares inside the seat grid.
    fn seat_corners(img: &RgbaImage, p: &HallParams) -> Vec<(u32, u32)> {
        let grid_right = (MARGIN + p.grid_width()) as u32;
        let is_border = |x: u32, y: u32| {
            x < img.width() && y < img.height() && *img.get_pixel(x, y) == COLOR_SEAT_BORDER
        };
        let mut corners = Vec::new();
        for y in 0..img.height() {
            for x in 0..grid_right {
                if is_border(x, y)
                    && (x == 0 || !is_border(x - 1, y))
                    && (y == 0 || !is_border(x, y - 1))
                    && is_border(x + 1, y)
                    && is_border(x, y + 1)
                {
                    corners.push((x, y));
                }
            }
        }
        corners
    }

    // -- HallParams::from_query --

    #[test]
    fn missing_params_use_defaults() {
        assert_eq!(HallParams::from_query(None, None, None), HallParams::default());
    }

    #[test]
    fn invalid_param_falls_back_only_for_itself() {
        let p = HallParams::from_query(Some("0"), Some("5"), Some("50"));
        assert_eq!(p, params(DEFAULT_ROWS, 5, 50));

        let p = HallParams::from_query(Some("4"), Some("-3"), Some("10"));
        assert_eq!(p, params(4, DEFAULT_COLS, 10));

        let p = HallParams::from_query(Some("4"), Some("6"), Some("lots"));
        assert_eq!(p, params(4, 6, DEFAULT_OCCUPIED_PCT));
    }

    #[test]
    fn zero_occupancy_falls_back_to_default() {
        let p = HallParams::from_query(None, None, Some("0"));
        assert_eq!(p.occupied_pct, DEFAULT_OCCUPIED_PCT);
    }

    #[test]
    fn oversized_params_are_clamped() {
        let p = HallParams::from_query(Some("500"), Some("99999999999"), Some("250"));
        assert_eq!(p, params(MAX_ROWS, MAX_COLS, 100));
    }

    #[test]
    fn params_within_bounds_are_kept_as_given() {
        let p = HallParams::from_query(Some("26"), Some("40"), Some("100"));
        assert_eq!(p, params(MAX_ROWS, MAX_COLS, 100));

        let p = HallParams::from_query(Some("20"), Some("33"), Some("20"));
        assert_eq!(p, params(20, 33, 20));
        let width = MARGIN * 2 + 33 * (SEAT_SIZE + SEAT_GAP) - SEAT_GAP + LEGEND_WIDTH;
        assert_eq!(p.width(), width as u32);
    }

    #[test]
    fn caps_apply_before_sizing_the_canvas() {
        let p = HallParams::from_query(Some("30"), Some("50"), Some("20"));
        assert_eq!((p.rows, p.cols), (MAX_ROWS, MAX_COLS));
        assert_eq!(p.width(), 1934);
        assert_eq!(p.height(), 1126);
    }

    // -- layout_seats --

    #[test]
    fn last_two_rows_are_vip() {
        let seats = layout_seats(&params(5, 3, 30), &mut rng());
        assert_eq!(seats.len(), 15);
        for seat in &seats {
            assert_eq!(seat.vip, seat.row >= 3, "seat {}", seat.label());
        }
    }

    #[test]
    fn single_row_is_vip() {
        let seats = layout_seats(&params(1, 4, 30), &mut rng());
        assert!(seats.iter().all(|s| s.vip));
    }

    #[test]
    fn full_occupancy_marks_every_seat() {
        let seats = layout_seats(&params(3, 3, 100), &mut rng());
        assert!(seats.iter().all(|s| s.occupied));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let p = params(6, 10, 50);
        assert_eq!(layout_seats(&p, &mut rng()), layout_seats(&p, &mut rng()));
    }

    #[test]
    fn seat_labels_use_row_letter_and_one_based_column() {
        let seats = layout_seats(&params(3, 12, 30), &mut rng());
        assert_eq!(seats[0].label(), "A1");
        assert_eq!(seats[11].label(), "A12");
        assert_eq!(seats[35].label(), "C12");
    }

    #[test]
    fn fill_palette_lookup() {
        let seat = |vip, occupied| Seat {
            row: 0,
            col: 0,
            vip,
            occupied,
        };
        assert_eq!(seat(false, false).fill(), COLOR_FREE);
        assert_eq!(seat(false, true).fill(), COLOR_OCCUPIED);
        assert_eq!(seat(true, false).fill(), COLOR_VIP_FREE);
        assert_eq!(seat(true, true).fill(), COLOR_VIP_OCCUPIED);
    }

    // -- render_hall --

    #[test]
    fn image_dimensions_follow_layout_formula() {
        let p = params(3, 4, 30);
        let img = render_hall(&p, &mut rng());
        let width = MARGIN * 2 + 4 * (SEAT_SIZE + SEAT_GAP) - SEAT_GAP + LEGEND_WIDTH;
        let height = MARGIN * 2 + 3 * (SEAT_SIZE + SEAT_GAP) - SEAT_GAP;
        assert_eq!(img.width(), width as u32);
        assert_eq!(img.height(), height as u32);
    }

    #[test]
    fn grid_contains_one_bordered_cell_per_seat() {
        let p = params(3, 4, 30);
        let img = render_hall(&p, &mut rng());
        assert_eq!(seat_corners(&img, &p).len(), 12);
    }

    #[test]
    fn vip_rows_use_vip_palette_regardless_of_occupancy() {
        for pct in [1, 50, 100] {
            let p = params(3, 4, pct);
            let img = render_hall(&p, &mut rng());
            for row in 0..3 {
                for col in 0..4 {
                    let seat = Seat {
                        row,
                        col,
                        vip: false,
                        occupied: false,
                    };
                    let (x, y) = seat.origin();
                    let fill = *img.get_pixel((x + 2) as u32, (y + 2) as u32);
                    let vip_fill = fill == COLOR_VIP_FREE || fill == COLOR_VIP_OCCUPIED;
                    let normal_fill = fill == COLOR_FREE || fill == COLOR_OCCUPIED;
                    if row >= 1 {
                        assert!(vip_fill, "row {row} col {col} should be VIP, got {fill:?}");
                    } else {
                        assert!(normal_fill, "row {row} col {col} should be normal, got {fill:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn screen_bar_spans_grid() {
        let p = params(2, 5, 30);
        let img = render_hall(&p, &mut rng());
        let y = (MARGIN + SCREEN_HEIGHT / 2) as u32;
        assert_eq!(*img.get_pixel(MARGIN as u32, y), COLOR_SCREEN);
        assert_eq!(*img.get_pixel((MARGIN + p.grid_width() - 1) as u32, y), COLOR_SCREEN);
        assert_eq!(*img.get_pixel((MARGIN + p.grid_width()) as u32, y), COLOR_BACKGROUND);
    }

    #[test]
    fn legend_swatches_drawn_right_of_grid() {
        let p = HallParams::default();
        let img = render_hall(&p, &mut rng());
        let x = (MARGIN + p.grid_width() + LEGEND_OFFSET + 2) as u32;
        let y = (MARGIN + 10 + 2) as u32;
        assert_eq!(*img.get_pixel(x, y), COLOR_FREE);
        assert_eq!(*img.get_pixel(x, y + LEGEND_ITEM_HEIGHT as u32), COLOR_OCCUPIED);
        assert_eq!(*img.get_pixel(x, y + 2 * LEGEND_ITEM_HEIGHT as u32), COLOR_VIP_FREE);
        assert_eq!(*img.get_pixel(x, y + 3 * LEGEND_ITEM_HEIGHT as u32), COLOR_VIP_OCCUPIED);
    }

    #[test]
    fn legend_summary_line_reports_grid_size() {
        let p = HallParams::default();
        let img = render_hall(&p, &mut rng());
        let x0 = MARGIN + p.grid_width() + LEGEND_OFFSET;
        let x1 = x0 + draw::text_width("Rows: 8  Cols: 12");
        let baseline = MARGIN + 10 + 5 * LEGEND_ITEM_HEIGHT;
        assert!(baseline as u32 <= img.height());

        let text_pixels = (baseline - draw::GLYPH_SIZE..baseline)
            .flat_map(|y| (x0..x1).map(move |x| (x as u32, y as u32)))
            .filter(|&(x, y)| *img.get_pixel(x, y) == COLOR_TEXT)
            .count();
        assert!(text_pixels > 0);

        // Nothing is drawn past the end of the line.
        let after = (baseline - draw::GLYPH_SIZE..baseline)
            .flat_map(|y| (x1..x1 + 2 * draw::GLYPH_SIZE).map(move |x| (x as u32, y as u32)))
            .filter(|&(x, y)| x < img.width() && *img.get_pixel(x, y) == COLOR_TEXT)
            .count();
        assert_eq!(after, 0);
    }

    #[test]
    fn encodes_png_signature() {
        let img = render_hall(&params(2, 2, 30), &mut rng());
        let bytes = encode_png(&img).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
