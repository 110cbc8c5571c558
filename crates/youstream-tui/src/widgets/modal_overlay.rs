//! Helpers for centered boxes drawn on top of a dimmed screen.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::theme::palette;

/// Center a fixed-size rect within an area, clamping to the area's size.
///
/// ```
/// use ratatui::layout::Rect;
/// use youstream_tui::widgets::modal_overlay::centered_rect;
///
/// let modal = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

/// Repaint every cell in `area` with muted colors
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    dim_area(buf, area, Style::default().fg(palette::TEXT_MUTED).bg(palette::DEEPEST_BG));
}

/// Apply `style` on top of every cell in `area`, leaving symbols untouched
pub fn dim_area(buf: &mut Buffer, area: Rect, style: Style) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(style);
            }
        }
    }
}
