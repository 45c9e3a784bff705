//! Cursor flow inside a window or child: rows, same-line runs and groups.

use crate::{Rect, Vec2};

/// Saved cursor state for a `begin_group` / `end_group` pair.
#[derive(Debug, Clone, Copy)]
struct GroupState {
    start:            Vec2,
    start_x:          f32,
    content_max:      Vec2,
    curr_line_height: f32,
}

/// Per-window cursor state.
///
/// Items are placed top-to-bottom. `same_line` moves the cursor back up to
/// the right edge of the previous item; the next `place` then wraps to a new
/// line below the tallest item of the current line.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// Top-left of the next item.
    pub cursor: Vec2,
    /// Left edge new lines return to.
    pub start_x: f32,
    /// Window content origin; `set_cursor_pos` is relative to this.
    pub origin: Vec2,
    /// Content region width.
    pub content_width: f32,
    /// Bottom-right of everything placed so far (for auto-sizing).
    pub content_max: Vec2,
    /// Bounding box of the last placed item.
    pub last_item: Rect,

    prev_line_end:    Vec2,
    prev_line_height: f32,
    curr_line_height: f32,
    groups:           Vec<GroupState>,
}

impl Layout {
    pub fn new(start: Vec2, width: f32) -> Self {
        Self {
            cursor:        start,
            start_x:       start.x,
            origin:        start,
            content_width: width,
            content_max:   start,
            last_item:     Rect::new(start, start),
            prev_line_end: start,
            ..Default::default()
        }
    }

    /// Width left between the cursor and the right edge of the content region.
    pub fn available_width(&self) -> f32 {
        (self.origin.x + self.content_width - self.cursor.x).max(1.0)
    }

    /// Place an item of `size` at the cursor and advance to the next line.
    /// Returns the item's top-left position.
    pub fn place(&mut self, size: Vec2, item_spacing: (f32, f32)) -> Vec2 {
        let pos         = self.cursor;
        let line_height = self.curr_line_height.max(size.y);

        self.last_item   = Rect::from_min_size(pos, size);
        self.content_max = self.content_max.max(pos + size);

        self.prev_line_end    = Vec2::new(pos.x + size.x, pos.y);
        self.prev_line_height = line_height;
        self.curr_line_height = 0.0;

        self.cursor = Vec2::new(self.start_x, pos.y + line_height + item_spacing.1);
        pos
    }

    /// Continue on the line of the previous item, `spacing` pixels to its right.
    pub fn same_line(&mut self, spacing: f32) {
        self.cursor           = Vec2::new(self.prev_line_end.x + spacing, self.prev_line_end.y);
        self.curr_line_height = self.prev_line_height;
    }

    /// Advance cursor to the next line without placing a widget.
    pub fn new_line(&mut self, item_spacing: (f32, f32)) {
        if self.curr_line_height > 0.0 {
            // Undo a pending same_line.
            self.cursor.y += self.curr_line_height + item_spacing.1;
            self.curr_line_height = 0.0;
        } else {
            self.cursor.y += item_spacing.1;
        }
        self.cursor.x = self.start_x;
    }

    /// Insert blank space.
    pub fn dummy(&mut self, size: Vec2, item_spacing: (f32, f32)) {
        self.place(size, item_spacing);
    }

    /// Move the cursor to `pos`, relative to the content origin.
    pub fn set_cursor_pos(&mut self, pos: Vec2) {
        self.cursor           = self.origin + pos;
        self.curr_line_height = 0.0;
        self.content_max      = self.content_max.max(self.cursor);
    }

    /// Cursor position relative to the content origin.
    pub fn cursor_pos(&self) -> Vec2 { self.cursor - self.origin }

    // ── groups ────────────────────────────────────────────────────────────────

    /// Start a group: subsequent items line up under the current cursor x,
    /// and the whole group is later placed as one item.
    pub fn begin_group(&mut self) {
        self.groups.push(GroupState {
            start:            self.cursor,
            start_x:          self.start_x,
            content_max:      self.content_max,
            curr_line_height: self.curr_line_height,
        });
        self.start_x          = self.cursor.x;
        self.content_max      = self.cursor;
        self.curr_line_height = 0.0;
    }

    /// Close the innermost group and place its bounding box as one item.
    /// Returns the group's rectangle, or `None` without a matching begin.
    pub fn end_group(&mut self, item_spacing: (f32, f32)) -> Option<Rect> {
        let g    = self.groups.pop()?;
        let rect = Rect::new(g.start, self.content_max.max(g.start));

        self.start_x          = g.start_x;
        self.content_max      = g.content_max;
        self.cursor           = g.start;
        self.curr_line_height = g.curr_line_height;
        self.place(rect.size(), item_spacing);
        Some(rect)
    }

    pub fn group_depth(&self) -> usize { self.groups.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SP: (f32, f32) = (20.0, 4.0);

    #[test]
    fn items_stack_vertically() {
        let mut l = Layout::new(Vec2::new(10.0, 10.0), 200.0);
        assert_eq!(l.place(Vec2::new(50.0, 20.0), SP), Vec2::new(10.0, 10.0));
        assert_eq!(l.place(Vec2::new(50.0, 20.0), SP), Vec2::new(10.0, 34.0));
    }

    #[test]
    fn same_line_continues_right_and_wraps_below_tallest() {
        let mut l = Layout::new(Vec2::ZERO, 400.0);
        l.place(Vec2::new(50.0, 10.0), SP);
        l.same_line(SP.0);
        let p = l.place(Vec2::new(30.0, 40.0), SP);
        assert_eq!(p, Vec2::new(70.0, 0.0));
        let next = l.place(Vec2::new(10.0, 10.0), SP);
        assert_eq!(next, Vec2::new(0.0, 44.0));
    }

    #[test]
    fn groups_are_placed_as_single_items() {
        let mut l = Layout::new(Vec2::ZERO, 400.0);
        l.begin_group();
        l.place(Vec2::new(100.0, 30.0), SP);
        l.place(Vec2::new(80.0, 30.0), SP);
        let left = l.end_group(SP).unwrap_or(Rect::ZERO);
        assert_eq!(left.size(), Vec2::new(100.0, 64.0));

        l.same_line(SP.0);
        l.begin_group();
        let p = l.place(Vec2::new(100.0, 30.0), SP);
        assert_eq!(p, Vec2::new(120.0, 0.0));
        let q = l.place(Vec2::new(100.0, 30.0), SP);
        assert_eq!(q.x, 120.0, "group items line up under the group start");
        l.end_group(SP);

        assert_eq!(l.cursor, Vec2::new(0.0, 68.0));
        assert_eq!(l.group_depth(), 0);
    }

    #[test]
    fn unmatched_end_group_is_ignored() {
        let mut l = Layout::new(Vec2::ZERO, 100.0);
        assert!(l.end_group(SP).is_none());
    }

    #[test]
    fn set_cursor_pos_is_relative_to_origin() {
        let mut l = Layout::new(Vec2::new(100.0, 50.0), 300.0);
        l.set_cursor_pos(Vec2::new(26.0, 123.0));
        assert_eq!(l.cursor, Vec2::new(126.0, 173.0));
        assert_eq!(l.cursor_pos(), Vec2::new(26.0, 123.0));
        assert_eq!(l.available_width(), 274.0);
    }
}
