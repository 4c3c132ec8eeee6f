//! Phone-shaped frame
//!
//! Draws a fixed-size phone outline with a notch and hosts arbitrary
//! content in a vertically scrollable viewport. Content is rendered into an
//! off-screen buffer at its full height and the visible window is copied
//! onto the screen.

use crate::consts::cli_consts::frame::{
    FRAME_HEIGHT, FRAME_WIDTH, NOTCH_WIDTH, PADDING_X, PADDING_Y,
};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

/// Something that can be hosted inside the phone viewport.
pub trait FrameContent {
    /// Value handed back to the caller after rendering, in content space.
    type Output;

    /// Rows the content needs at the given width.
    fn content_height(&self, width: u16) -> u16;

    fn render_content(self, area: Rect, buf: &mut Buffer) -> Self::Output;
}

/// Hosts a plain widget with a fixed height.
pub struct Passthrough<W> {
    widget: W,
    height: u16,
}

impl<W: Widget> Passthrough<W> {
    pub fn new(widget: W, height: u16) -> Self {
        Self { widget, height }
    }
}

impl<W: Widget> FrameContent for Passthrough<W> {
    type Output = ();

    fn content_height(&self, _width: u16) -> u16 {
        self.height
    }

    fn render_content(self, area: Rect, buf: &mut Buffer) {
        self.widget.render(area, buf);
    }
}

/// Where the content ended up on screen.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Screen area of the scroll region.
    pub area: Rect,
    /// First content row shown at the top of `area`.
    pub scroll: u16,
    /// Largest useful scroll offset.
    pub max_scroll: u16,
}

impl Viewport {
    /// Maps a rectangle in content space (as seen by `render_content`) to
    /// screen space, clipped to the visible window. Fully hidden rectangles
    /// come back empty.
    pub fn to_screen(&self, rect: Rect) -> Rect {
        if rect.is_empty() {
            return Rect::default();
        }
        let top = i32::from(rect.y) - i32::from(self.scroll) + i32::from(self.area.y);
        let bottom = top + i32::from(rect.height);
        let visible_top = top.max(i32::from(self.area.y));
        let visible_bottom = bottom.min(i32::from(self.area.bottom()));
        let left = self.area.x.saturating_add(rect.x);
        let width = rect
            .width
            .min(self.area.right().saturating_sub(left));
        if visible_bottom <= visible_top || width == 0 {
            return Rect::default();
        }
        Rect::new(
            left,
            visible_top as u16,
            width,
            (visible_bottom - visible_top) as u16,
        )
    }
}

/// Fixed-size phone frame around scrollable content.
pub struct PhoneFrame<C> {
    content: C,
    scroll: u16,
    with_background_color: bool,
}

impl<C: FrameContent> PhoneFrame<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            scroll: 0,
            with_background_color: true,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn background(mut self, with_background_color: bool) -> Self {
        self.with_background_color = with_background_color;
        self
    }

    /// Renders the frame and its content, returning the viewport used and
    /// whatever the content produced.
    pub fn render(self, area: Rect, buf: &mut Buffer) -> (Viewport, C::Output) {
        let outline = frame_outline(area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(outline);
        block.render(outline, buf);

        let content_width = inner.width.saturating_sub(PADDING_X * 2);
        let content_height = self.content.content_height(content_width);
        let scratch_height = content_height.saturating_add(PADDING_Y * 2);
        let max_scroll = scratch_height.saturating_sub(inner.height);
        let scroll = self.scroll.min(max_scroll);

        let mut scratch = Buffer::empty(Rect::new(0, 0, inner.width, scratch_height));
        if self.with_background_color {
            paint_gradient(&mut scratch);
        }
        let content_area = Rect::new(PADDING_X, PADDING_Y, content_width, content_height);
        let output = self.content.render_content(content_area, &mut scratch);

        for row in 0..inner.height {
            let source_row = scroll + row;
            if source_row >= scratch_height {
                break;
            }
            for column in 0..inner.width {
                let source = scratch.cell((column, source_row));
                let target = buf.cell_mut((inner.x + column, inner.y + row));
                if let (Some(source), Some(target)) = (source, target) {
                    *target = source.clone();
                }
            }
        }

        render_notch(outline, buf);

        let viewport = Viewport {
            area: inner,
            scroll,
            max_scroll,
        };
        (viewport, output)
    }
}

/// Outer phone rectangle: fixed size, centered, clamped to `area`.
pub fn frame_outline(area: Rect) -> Rect {
    let width = FRAME_WIDTH.min(area.width);
    let height = FRAME_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Blue to teal, top to bottom.
fn paint_gradient(buf: &mut Buffer) {
    let area = buf.area;
    let (from, to) = ((59u8, 130u8, 246u8), (45u8, 212u8, 191u8));
    let steps = area.height.saturating_sub(1).max(1);
    for row in 0..area.height {
        let color = Color::Rgb(
            lerp(from.0, to.0, row, steps),
            lerp(from.1, to.1, row, steps),
            lerp(from.2, to.2, row, steps),
        );
        buf.set_style(
            Rect::new(area.x, area.y + row, area.width, 1),
            Style::default().bg(color),
        );
    }
}

fn lerp(from: u8, to: u8, step: u16, steps: u16) -> u8 {
    let from = i32::from(from);
    let to = i32::from(to);
    (from + (to - from) * i32::from(step) / i32::from(steps)) as u8
}

fn render_notch(outline: Rect, buf: &mut Buffer) {
    if outline.height < 3 {
        return;
    }
    let width = NOTCH_WIDTH.min(outline.width.saturating_sub(4));
    let notch = Rect::new(
        outline.x + (outline.width - width) / 2,
        outline.y + 1,
        width,
        1,
    );
    for column in notch.left()..notch.right() {
        if let Some(cell) = buf.cell_mut((column, notch.y)) {
            cell.set_symbol("▀").set_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Reset),
            );
        }
    }
}
