use unicode_width::UnicodeWidthStr;

use crate::core::view_model::{RowKind, ViewModel};
use crate::ui::markup::{Hit, Markup, MarkupLine, Target};
use crate::ui::region::ContentRegion;
use crate::ui::renderer::RenderFrame;
use crate::ui::span::{Span, line_width};
use crate::ui::theme::Theme;

/// Breadcrumb indent units per terminal column.
pub const UNITS_PER_COLUMN: u16 = 10;
pub const CLOSE_CONTROL: &str = "[x]";
/// Lines the shell adds around the region: title bar and footer.
pub const SHELL_CHROME: usize = 2;
const KEY_COLUMN_MAX: usize = 28;
const SEPARATOR_WIDTH: usize = 32;

/// Content template, re-rendered after every navigation.
pub fn render_content(model: &ViewModel, theme: &Theme) -> Markup {
    let mut markup = Markup::new();
    let last_crumb = model.breadcrumbs.len().saturating_sub(1);

    for crumb in &model.breadcrumbs {
        let indent = " ".repeat(usize::from(crumb.indent / UNITS_PER_COLUMN));
        let style = if crumb.index == last_crumb {
            theme.breadcrumb_current
        } else {
            theme.breadcrumb
        };
        let marker = if crumb.index == 0 { "" } else { "└ " };
        markup.push(
            MarkupLine::new(vec![
                Span::new(indent),
                Span::styled(marker, theme.separator),
                Span::styled(clean(&crumb.text), style),
            ])
            .with_target(Target::Breadcrumb(crumb.index)),
        );
    }

    markup.push(MarkupLine::new(vec![Span::styled(
        "─".repeat(SEPARATOR_WIDTH),
        theme.separator,
    )]));

    let key_width = model
        .rows
        .iter()
        .map(|row| UnicodeWidthStr::width(clean(&row.key).as_str()))
        .max()
        .unwrap_or(0)
        .min(KEY_COLUMN_MAX);

    markup.begin_rows();
    for row in &model.rows {
        let key = clean(&row.key);
        let pad = " ".repeat(key_width.saturating_sub(UnicodeWidthStr::width(key.as_str())));
        let (key_style, value_style) = match row.kind {
            RowKind::Object | RowKind::Array => (theme.key_link, theme.placeholder),
            RowKind::Scalar => (theme.key_plain, theme.value),
            RowKind::Placeholder => (theme.placeholder, theme.placeholder),
        };
        let line = MarkupLine::new(vec![
            Span::new("  "),
            Span::styled(key, key_style),
            Span::new(pad),
            Span::new("  "),
            Span::styled(clean(&row.display_value), value_style),
        ]);
        let line = if row.kind == RowKind::Placeholder {
            line
        } else {
            line.with_target(Target::Key(row.key.clone()))
        };
        markup.push(line);
    }

    markup
}

/// Shell template: title bar with close control, the content region and a
/// footer. Hits are relative to the first shell line.
pub fn render_shell(title: &str, region: &ContentRegion, width: u16, theme: &Theme) -> RenderFrame {
    let mut frame = RenderFrame::default();
    let width = usize::from(width);

    let title_text = format!(" {title}");
    let close_col = width.saturating_sub(CLOSE_CONTROL.len() + 1);
    let gap = close_col.saturating_sub(UnicodeWidthStr::width(title_text.as_str()));
    frame.lines.push(vec![
        Span::styled(title_text, theme.title),
        Span::new(" ".repeat(gap)),
        Span::styled(CLOSE_CONTROL, theme.close),
    ]);
    let close_start = u16::try_from(line_width(&frame.lines[0]) - CLOSE_CONTROL.len()).unwrap_or(0);
    frame.hits.push(Hit {
        row: 0,
        cols: close_start..close_start.saturating_add(CLOSE_CONTROL.len() as u16),
        target: Target::Close,
    });

    let selected = region.selected_line_index();
    let mut drawn = 0u16;
    for (index, line) in region.visible_lines() {
        let row = frame.lines.len() as u16;
        let mut spans = line.spans.clone();
        if Some(index) == selected {
            for span in &mut spans {
                span.style = span.style.patch(theme.selected);
            }
        }
        frame.lines.push(spans);
        if let Some(target) = &line.target {
            frame.hits.push(Hit {
                row,
                cols: 0..u16::MAX,
                target: target.clone(),
            });
        }
        drawn += 1;
    }
    while drawn < region.height() {
        frame.lines.push(Vec::new());
        drawn += 1;
    }

    let mut footer = vec![Span::styled(
        " ↑↓ select  Enter open  ← back  +/- resize  Esc close",
        theme.hint,
    )];
    if let Some(position) = region.footer() {
        footer.push(Span::styled(format!("  {position}"), theme.hint));
    }
    frame.lines.push(footer);

    frame
}

fn clean(text: &str) -> String {
    text.chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect()
}
