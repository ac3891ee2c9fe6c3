//! Preview pane: the generated request as JSON or as SQL

use crate::app::App;
use crate::platform::GENERATE_SHORTCUT;
use crate::request::preview_sql;
use crate::state::PreviewMode;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let editor = &app.editor;
    let mode = match editor.preview_mode {
        PreviewMode::Json => "JSON",
        PreviewMode::Sql => "SQL",
    };

    let Some(generated) = &editor.generated else {
        let hint = Paragraph::new(Line::from(Span::styled(
            format!("Press {GENERATE_SHORTCUT} to generate"),
            Style::default().fg(Color::DarkGray),
        )))
        .block(
            Block::default()
                .title(format!(" {mode} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(hint, area);
        return;
    };

    let title = format!(
        " {mode} · generated {} ",
        generated.generated_at.format("%H:%M:%S")
    );

    let paragraph = match editor.preview_mode {
        PreviewMode::Json => {
            let lines: Vec<Line> = generated.json.lines().map(Line::from).collect();
            Paragraph::new(lines)
        }
        PreviewMode::Sql => {
            Paragraph::new(preview_sql(&generated.document, &app.results_table))
                .wrap(Wrap { trim: false })
        }
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(
        paragraph.block(block).scroll((editor.preview_scroll, 0)),
        area,
    );
}
