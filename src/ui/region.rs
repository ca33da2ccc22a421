use std::borrow::Cow;

use crate::ui::markup::{Markup, MarkupLine, Target};
use crate::ui::scroll::ScrollState;

pub const MIN_HEIGHT: u16 = 3;
pub const MAX_HEIGHT: u16 = 200;

/// The resizable part of the panel that holds the rendered content.
#[derive(Debug, Clone)]
pub struct ContentRegion {
    markup: Markup,
    height: u16,
    scroll: ScrollState,
    selected: usize,
}

impl ContentRegion {
    pub fn new(height: u16) -> Self {
        let height = height.clamp(MIN_HEIGHT, MAX_HEIGHT);
        Self {
            markup: Markup::new(),
            height,
            scroll: ScrollState::new(Some(height as usize)),
            selected: 0,
        }
    }

    /// Replaces everything previously displayed with `markup`.
    pub fn display(&mut self, markup: Markup) {
        self.markup = markup;
        self.selected = 0;
        self.scroll.offset = 0;
        self.follow_selection();
    }

    pub fn clear(&mut self) {
        self.display(Markup::new());
    }

    pub fn markup(&self) -> &Markup {
        &self.markup
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn resize(&mut self, delta: i32) -> u16 {
        let next = (i32::from(self.height) + delta).clamp(i32::from(MIN_HEIGHT), i32::from(MAX_HEIGHT));
        self.height = u16::try_from(next).unwrap_or(MIN_HEIGHT);
        self.scroll.max_visible = Some(self.height as usize);
        self.follow_selection();
        self.height
    }

    /// The region as drawn when at most `max_height` lines fit on screen.
    /// The configured height is left alone, so a larger screen restores it.
    pub fn fitted(&self, max_height: u16) -> Cow<'_, ContentRegion> {
        if max_height >= self.height {
            return Cow::Borrowed(self);
        }
        let mut region = self.clone();
        region.height = max_height.max(1);
        region.scroll.max_visible = Some(region.height as usize);
        region.follow_selection();
        Cow::Owned(region)
    }

    pub fn selected_row(&self) -> usize {
        self.selected
    }

    pub fn selected_line_index(&self) -> Option<usize> {
        if self.markup.row_count() == 0 {
            return None;
        }
        Some(self.markup.rows_start() + self.selected)
    }

    pub fn selected_target(&self) -> Option<&Target> {
        self.markup.row(self.selected)?.target.as_ref()
    }

    pub fn select_by(&mut self, delta: isize) {
        let total = self.markup.row_count();
        self.selected = self.selected.saturating_add_signed(delta);
        ScrollState::clamp_active(&mut self.selected, total);
        self.follow_selection();
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.follow_selection();
    }

    pub fn select_last(&mut self) {
        self.selected = self.markup.row_count().saturating_sub(1);
        self.follow_selection();
    }

    pub fn page_by(&mut self, pages: isize) {
        let step = (self.height as isize).saturating_sub(1).max(1);
        self.select_by(pages.saturating_mul(step));
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll.scroll_by(delta, self.markup.len());
    }

    /// Lines currently inside the viewport, with their index in the markup.
    pub fn visible_lines(&self) -> impl Iterator<Item = (usize, &MarkupLine)> {
        let (start, end) = self.scroll.visible_range(self.markup.len());
        self.markup.lines()[start..end]
            .iter()
            .enumerate()
            .map(move |(offset, line)| (start + offset, line))
    }

    pub fn footer(&self) -> Option<String> {
        self.scroll.footer(self.markup.len())
    }

    fn follow_selection(&mut self) {
        let total = self.markup.len();
        match self.selected_line_index() {
            Some(line) => self.scroll.ensure_visible(line, total),
            None => self.scroll.scroll_by(0, total),
        }
    }
}
