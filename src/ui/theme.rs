use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub menu: Style,
    pub title: Style,
    pub close: Style,
    pub breadcrumb: Style,
    pub breadcrumb_current: Style,
    pub key_link: Style,
    pub key_plain: Style,
    pub value: Style,
    pub placeholder: Style,
    pub separator: Style,
    pub selected: Style,
    pub hint: Style,
    pub status: Style,
    pub error: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            menu: Style::new().color(Color::Black).background(Color::White),
            title: Style::new().color(Color::Cyan).bold(),
            close: Style::new().color(Color::Red).bold(),
            breadcrumb: Style::new().color(Color::Blue).underline(),
            breadcrumb_current: Style::new().bold(),
            key_link: Style::new().color(Color::Cyan).underline(),
            key_plain: Style::new().color(Color::Cyan),
            value: Style::default(),
            placeholder: Style::new().color(Color::DarkGrey).dim(),
            separator: Style::new().color(Color::DarkGrey),
            selected: Style::new().background(Color::Rgb(40, 44, 52)).bold(),
            hint: Style::new().color(Color::DarkGrey),
            status: Style::new().color(Color::Green),
            error: Style::new().color(Color::Red).bold(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
