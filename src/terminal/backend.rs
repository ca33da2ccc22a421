use crate::ui::renderer::RenderFrame;
use crate::ui::span::SpanLine;
use crate::ui::style::Color;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode as CrosstermKeyCode,
    KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers as CrosstermKeyModifiers, MouseButton,
    MouseEventKind,
};
use crossterm::style::{
    Attribute, Color as CrosstermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::terminal::{
    self, BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Unknown,
    Char(char),
    F(u8),
    Enter,
    Tab,
    BackTab,
    Esc,
    Backspace,
    Delete,
    Home,
    End,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyModifiers(u8);

impl KeyModifiers {
    pub const NONE: Self = Self(0);
    pub const CONTROL: Self = Self(1 << 0);
    pub const ALT: Self = Self(1 << 1);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    Key(KeyEvent),
    Click { col: u16, row: u16 },
    Resize(TerminalSize),
    Scroll(i32),
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

pub struct Terminal {
    stdout: Stdout,
    size: TerminalSize,
    entered: bool,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout: io::stdout(),
            size: TerminalSize { width, height },
            entered: false,
        })
    }

    pub fn enter(&mut self) -> io::Result<()> {
        self.refresh_size()?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        self.entered = true;
        Ok(())
    }

    pub fn exit(&mut self) -> io::Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, DisableMouseCapture, LeaveAlternateScreen, Show)?;
        self.stdout.flush()
    }

    pub fn size(&self) -> TerminalSize {
        self.size
    }

    pub fn set_size(&mut self, size: TerminalSize) {
        self.size = size;
    }

    pub fn refresh_size(&mut self) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        self.size = TerminalSize { width, height };
        Ok(())
    }

    pub fn poll_event(&mut self, timeout: Duration) -> io::Result<TerminalEvent> {
        if !event::poll(timeout)? {
            return Ok(TerminalEvent::Tick);
        }
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                Ok(TerminalEvent::Key(map_key_event(key)))
            }
            CrosstermEvent::Resize(width, height) => {
                Ok(TerminalEvent::Resize(TerminalSize { width, height }))
            }
            CrosstermEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Ok(TerminalEvent::Click {
                    col: mouse.column,
                    row: mouse.row,
                }),
                MouseEventKind::ScrollUp => Ok(TerminalEvent::Scroll(-3)),
                MouseEventKind::ScrollDown => Ok(TerminalEvent::Scroll(3)),
                _ => Ok(TerminalEvent::Tick),
            },
            _ => Ok(TerminalEvent::Tick),
        }
    }

    /// Redraws the whole screen from `frame`. Lines past the bottom are not drawn.
    pub fn render_frame(&mut self, frame: &RenderFrame) -> io::Result<()> {
        let height = self.size.height as usize;
        let width = self.size.width;
        if height == 0 || width == 0 {
            return Ok(());
        }

        queue!(self.stdout, BeginSynchronizedUpdate, Hide, MoveTo(0, 0), Clear(ClearType::All))?;
        for (row_idx, line) in frame.lines.iter().take(height).enumerate() {
            queue!(self.stdout, MoveTo(0, row_idx as u16))?;
            self.write_span_line(line, width)?;
        }
        queue!(self.stdout, EndSynchronizedUpdate)?;

        self.stdout.flush()
    }

    fn write_span_line(&mut self, line: &SpanLine, width: u16) -> io::Result<()> {
        let render_width = usize::from(if width > 1 { width - 1 } else { width });
        let mut used = 0usize;
        for span in line {
            if used >= render_width {
                break;
            }
            let clipped = clip_to_width(&span.text, render_width.saturating_sub(used));
            if clipped.is_empty() {
                continue;
            }
            if let Some(color) = span.style.color {
                queue!(self.stdout, SetForegroundColor(map_color(color)))?;
            }
            if let Some(background) = span.style.background {
                queue!(self.stdout, SetBackgroundColor(map_color(background)))?;
            }
            if span.style.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            if span.style.dim {
                queue!(self.stdout, SetAttribute(Attribute::Dim))?;
            }
            if span.style.underline {
                queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
            }
            queue!(self.stdout, Print(clipped.as_str()), ResetColor)?;
            if span.style.bold || span.style.dim || span.style.underline {
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
            }
            used = used.saturating_add(UnicodeWidthStr::width(clipped.as_str()));
        }
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

fn map_color(color: Color) -> CrosstermColor {
    match color {
        Color::Reset => CrosstermColor::Reset,
        Color::Black => CrosstermColor::Black,
        Color::DarkGrey => CrosstermColor::DarkGrey,
        Color::Red => CrosstermColor::Red,
        Color::Green => CrosstermColor::Green,
        Color::Yellow => CrosstermColor::DarkYellow,
        Color::Blue => CrosstermColor::DarkBlue,
        Color::Magenta => CrosstermColor::DarkMagenta,
        Color::Cyan => CrosstermColor::DarkCyan,
        Color::White => CrosstermColor::White,
        Color::Rgb(r, g, b) => CrosstermColor::Rgb { r, g, b },
    }
}

fn map_key_event(key: CrosstermKeyEvent) -> KeyEvent {
    KeyEvent {
        code: map_key_code(key.code),
        modifiers: map_key_modifiers(key.modifiers),
    }
}

fn map_key_code(code: CrosstermKeyCode) -> KeyCode {
    match code {
        CrosstermKeyCode::Char(ch) => KeyCode::Char(ch),
        CrosstermKeyCode::F(n) => KeyCode::F(n),
        CrosstermKeyCode::Enter => KeyCode::Enter,
        CrosstermKeyCode::Tab => KeyCode::Tab,
        CrosstermKeyCode::BackTab => KeyCode::BackTab,
        CrosstermKeyCode::Esc => KeyCode::Esc,
        CrosstermKeyCode::Backspace => KeyCode::Backspace,
        CrosstermKeyCode::Delete => KeyCode::Delete,
        CrosstermKeyCode::Home => KeyCode::Home,
        CrosstermKeyCode::End => KeyCode::End,
        CrosstermKeyCode::Left => KeyCode::Left,
        CrosstermKeyCode::Right => KeyCode::Right,
        CrosstermKeyCode::Up => KeyCode::Up,
        CrosstermKeyCode::Down => KeyCode::Down,
        CrosstermKeyCode::PageUp => KeyCode::PageUp,
        CrosstermKeyCode::PageDown => KeyCode::PageDown,
        _ => KeyCode::Unknown,
    }
}

// Shift is dropped for printable characters: the character already carries it
// ('+' arrives as Shift+'=' on most layouts).
fn map_key_modifiers(modifiers: CrosstermKeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::NONE;
    if modifiers.contains(CrosstermKeyModifiers::CONTROL) {
        out.0 |= KeyModifiers::CONTROL.0;
    }
    if modifiers.contains(CrosstermKeyModifiers::ALT) {
        out.0 |= KeyModifiers::ALT.0;
    }
    out
}

fn clip_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut used = 0usize;
    let mut out = String::new();
    for ch in text.chars().filter(|ch| !matches!(ch, '\n' | '\r')) {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(ch_width) > max_width {
            break;
        }
        out.push(ch);
        used = used.saturating_add(ch_width);
    }
    out
}
