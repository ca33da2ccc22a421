use serde_json::{Value, json};

use crate::terminal::TerminalSize;
use crate::ui::markup::Target;
use crate::ui::renderer::RenderFrame;
use crate::ui::span::line_text;
use crate::ui::style::{Color, Style};

pub fn frame_to_json(frame: &RenderFrame, size: TerminalSize) -> Value {
    let lines = frame
        .lines
        .iter()
        .map(|line| {
            json!({
                "text": line_text(line),
                "spans": line
                    .iter()
                    .map(|span| json!({
                        "text": span.text,
                        "style": style_to_json(span.style),
                    }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect::<Vec<_>>();

    let hits = frame
        .hits
        .iter()
        .map(|hit| {
            json!({
                "row": hit.row,
                "cols": [hit.cols.start, hit.cols.end],
                "target": target_to_json(&hit.target),
            })
        })
        .collect::<Vec<_>>();

    json!({
        "terminal": {
            "width": size.width,
            "height": size.height,
        },
        "lines": lines,
        "hits": hits,
    })
}

pub fn target_to_json(target: &Target) -> Value {
    match target {
        Target::Breadcrumb(index) => json!({ "breadcrumb": index }),
        Target::Key(key) => json!({ "key": key }),
        Target::Close => json!("close"),
        Target::Toggle => json!("toggle"),
    }
}

fn style_to_json(style: Style) -> Value {
    json!({
        "color": style.color.map(color_to_json),
        "background": style.background.map(color_to_json),
        "bold": style.bold,
        "dim": style.dim,
        "underline": style.underline,
    })
}

fn color_to_json(color: Color) -> Value {
    match color {
        Color::Reset => json!("reset"),
        Color::Black => json!("black"),
        Color::DarkGrey => json!("dark_grey"),
        Color::Red => json!("red"),
        Color::Green => json!("green"),
        Color::Yellow => json!("yellow"),
        Color::Blue => json!("blue"),
        Color::Magenta => json!("magenta"),
        Color::Cyan => json!("cyan"),
        Color::White => json!("white"),
        Color::Rgb(r, g, b) => json!({ "rgb": [r, g, b] }),
    }
}
