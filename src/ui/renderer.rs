use unicode_width::UnicodeWidthStr;

use crate::state::app_state::AppState;
use crate::state::panel::TOGGLE_COMMAND_LABEL;
use crate::terminal::TerminalSize;
use crate::ui::markup::{Hit, Target};
use crate::ui::span::{Span, SpanLine, line_text};
use crate::ui::template::{SHELL_CHROME, render_shell};
use crate::ui::theme::Theme;

/// A composed screen: styled lines plus the clickable areas on them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub hits: Vec<Hit>,
}

impl RenderFrame {
    /// Appends `other` below the current lines, shifting its hits.
    pub fn append(&mut self, other: RenderFrame) {
        let offset = self.lines.len() as u16;
        self.lines.extend(other.lines);
        self.hits.extend(other.hits.into_iter().map(|mut hit| {
            hit.row = hit.row.saturating_add(offset);
            hit
        }));
    }

    pub fn hit_at(&self, col: u16, row: u16) -> Option<&Target> {
        self.hits
            .iter()
            .find(|hit| hit.contains(col, row))
            .map(|hit| &hit.target)
    }

    pub fn text_lines(&self) -> Vec<String> {
        self.lines.iter().map(|line| line_text(line)).collect()
    }

    fn truncate(&mut self, height: usize) {
        self.lines.truncate(height);
        self.hits.retain(|hit| usize::from(hit.row) < height);
    }
}

const MENU_LINES: usize = 1;

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    /// Menu line on top, host area in the middle, the panel docked at the bottom.
    pub fn render(&self, state: &AppState, size: TerminalSize) -> RenderFrame {
        let height = usize::from(size.height);
        let panel = state.panel();
        let mut frame = RenderFrame::default();

        // The region gives up rows before the title bar or footer do.
        let shell = panel.is_open().then(|| {
            let rows = height.saturating_sub(MENU_LINES + SHELL_CHROME);
            let region = panel.region().fitted(u16::try_from(rows).unwrap_or(u16::MAX));
            render_shell(panel.title(), &region, size.width, &self.theme)
        });
        let shell_len = shell.as_ref().map_or(0, |shell| shell.lines.len());

        self.render_menu(&mut frame, panel.is_open());

        let mut host_lines = vec![vec![Span::styled(
            format!(" source: {}", panel.source_description()),
            self.theme.hint,
        )]];
        match state.status() {
            Some(status) => {
                let style = if status.is_error {
                    self.theme.error
                } else {
                    self.theme.status
                };
                host_lines.push(vec![Span::styled(format!(" {}", status.text), style)]);
            }
            None if !panel.is_open() => host_lines.push(vec![Span::styled(
                " Ctrl+L opens the viewer, q quits",
                self.theme.hint,
            )]),
            None => {}
        }

        let host_area = height.saturating_sub(frame.lines.len() + shell_len);
        host_lines.truncate(host_area);
        let filler = host_area.saturating_sub(host_lines.len());
        frame.lines.extend(host_lines);
        frame.lines.extend(std::iter::repeat_n(Vec::new(), filler));

        if let Some(shell) = shell {
            frame.append(shell);
        }
        frame.truncate(height);
        frame
    }

    fn render_menu(&self, frame: &mut RenderFrame, checked: bool) {
        let prefix = " View │ ";
        let item = format!(
            "[{}] {}",
            if checked { "x" } else { " " },
            TOGGLE_COMMAND_LABEL
        );
        let start = UnicodeWidthStr::width(prefix) as u16;
        let end = start.saturating_add(UnicodeWidthStr::width(item.as_str()) as u16);
        let row = frame.lines.len() as u16;
        frame.lines.push(vec![
            Span::styled(prefix, self.theme.menu),
            Span::styled(item, self.theme.menu),
            Span::styled("  Ctrl+L ", self.theme.menu),
        ]);
        frame.hits.push(Hit {
            row,
            cols: start..end,
            target: Target::Toggle,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderFrame, Renderer};
    use crate::source::MemorySource;
    use crate::state::app_state::{AppState, StatusMessage};
    use crate::state::panel::{PanelOptions, ViewerPanel};
    use crate::terminal::TerminalSize;
    use crate::ui::markup::{Hit, Target};
    use crate::ui::span::Span;

    fn state() -> AppState {
        let source = MemorySource::new()
            .with_entry("a", r#"{"x":1}"#)
            .with_entry("b", "hello");
        let options = PanelOptions {
            height: 4,
            ..PanelOptions::default()
        };
        AppState::new(ViewerPanel::new(Box::new(source), options))
    }

    const SIZE: TerminalSize = TerminalSize {
        width: 60,
        height: 12,
    };

    #[test]
    fn closed_panel_shows_unchecked_menu_item() {
        let frame = Renderer::default().render(&state(), SIZE);
        assert_eq!(frame.lines.len(), 12);
        let lines = frame.text_lines();
        assert!(lines[0].contains("[ ] Show Local Storage Viewer"));
        assert!(!lines.iter().any(|line| line.contains("[x]")));
        assert_eq!(frame.hit_at(8, 0), Some(&Target::Toggle));
    }

    #[test]
    fn open_panel_is_docked_at_the_bottom() {
        let mut state = state();
        state.panel_mut().show().expect("show");
        let frame = Renderer::default().render(&state, SIZE);

        assert_eq!(frame.lines.len(), 12);
        let lines = frame.text_lines();
        assert!(lines[0].contains("[x] Show Local Storage Viewer"));
        // shell = title + 4 content rows + footer
        assert!(lines[6].starts_with(" Local Storage"));
        assert_eq!(frame.hit_at(0, 7), Some(&Target::Breadcrumb(0)));
        assert_eq!(frame.hit_at(10, 9), Some(&Target::Key("a".to_string())));
        assert_eq!(frame.hit_at(10, 10), Some(&Target::Key("b".to_string())));
    }

    #[test]
    fn status_message_is_shown_in_host_area() {
        let mut state = state();
        state.set_status(StatusMessage::error("load failed"));
        let lines = Renderer::default().render(&state, SIZE).text_lines();
        assert_eq!(lines[2], " load failed");
    }

    #[test]
    fn small_terminals_drop_lines_and_hits_below_the_edge() {
        let mut state = state();
        state.panel_mut().show().expect("show");
        let frame = Renderer::default().render(
            &state,
            TerminalSize {
                width: 40,
                height: 4,
            },
        );
        assert_eq!(frame.lines.len(), 4);
        assert!(frame.hits.iter().all(|hit| hit.row < 4));
    }

    #[test]
    fn short_terminals_shrink_the_region_and_keep_the_footer() {
        let mut state = state();
        state.panel_mut().show().expect("show");
        let frame = Renderer::default().render(
            &state,
            TerminalSize {
                width: 60,
                height: 6,
            },
        );

        let lines = frame.text_lines();
        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with(" Local Storage"));
        assert!(lines[5].contains("Esc close"));
        assert!(lines[5].contains("[1-3 of 4]"));
        assert_eq!(frame.hit_at(0, 2), Some(&Target::Breadcrumb(0)));
        assert_eq!(frame.hit_at(10, 4), Some(&Target::Key("a".to_string())));
        assert_eq!(state.panel().region().height(), 4);
    }

    #[test]
    fn append_offsets_hits() {
        let mut top = RenderFrame::default();
        top.lines.push(vec![Span::new("a")]);
        let mut bottom = RenderFrame::default();
        bottom.lines.push(vec![Span::new("b")]);
        bottom.hits.push(Hit {
            row: 0,
            cols: 0..1,
            target: Target::Close,
        });
        top.append(bottom);
        assert_eq!(top.hit_at(0, 1), Some(&Target::Close));
        assert_eq!(top.hit_at(0, 0), None);
    }
}
