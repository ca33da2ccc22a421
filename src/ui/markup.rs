use std::ops::Range;

use crate::ui::span::SpanLine;

/// What a rendered element refers to. Carried next to the spans the way a
/// `data-*` attribute rides on an element, and read back on click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Breadcrumb(usize),
    Key(String),
    Close,
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkupLine {
    pub spans: SpanLine,
    pub target: Option<Target>,
}

impl MarkupLine {
    pub fn new(spans: SpanLine) -> Self {
        Self {
            spans,
            target: None,
        }
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }
}

/// Rendered panel content: breadcrumb lines, then the key/value rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Markup {
    lines: Vec<MarkupLine>,
    rows_start: usize,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: MarkupLine) {
        self.lines.push(line);
    }

    /// Marks the next pushed line as the first row.
    pub fn begin_rows(&mut self) {
        self.rows_start = self.lines.len();
    }

    pub fn lines(&self) -> &[MarkupLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn rows_start(&self) -> usize {
        self.rows_start
    }

    pub fn row_count(&self) -> usize {
        self.lines.len().saturating_sub(self.rows_start)
    }

    pub fn row(&self, index: usize) -> Option<&MarkupLine> {
        self.lines.get(self.rows_start.checked_add(index)?)
    }
}

/// A clickable screen area of a composed frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub row: u16,
    pub cols: Range<u16>,
    pub target: Target,
}

impl Hit {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        self.row == row && self.cols.contains(&col)
    }
}
