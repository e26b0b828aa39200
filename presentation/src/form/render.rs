//! Form rendering

use super::state::{Field, FormState, StatusKind, TextField};
use analyzer_domain::Model;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, state: &FormState, model: &Model) {
    let [header, key, document, question, result, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, model);
    render_key(frame, key, state);
    render_document(frame, document, state);
    render_question(frame, question, state);
    render_result(frame, result, state);
    render_status(frame, status, state);
}

fn field_block(title: String, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(style)
}

fn render_header(frame: &mut Frame, area: Rect, model: &Model) {
    let line = Line::from(vec![
        Span::styled(
            " Gemini Document Analyzer ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" model: {}", model), Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_key(frame: &mut Frame, area: Rect, state: &FormState) {
    let focused = state.focus == Field::ApiKey;
    let title = match &state.active_key {
        Some(masked) => format!(" 1. API Key (active: {}) ", masked),
        None => " 1. API Key (required) ".to_string(),
    };

    let masked = "*".repeat(state.api_key.text().chars().count());
    let content = if masked.is_empty() && !focused {
        Line::styled(
            "Enter your key to enable analysis",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Line::from(masked)
    };

    frame.render_widget(
        Paragraph::new(content).block(field_block(title, focused)),
        area,
    );
    if focused {
        place_single_line_cursor(frame, area, &state.api_key);
    }
}

fn render_document(frame: &mut Frame, area: Rect, state: &FormState) {
    let focused = state.focus == Field::Document;
    let title = if state.document_locked {
        format!(" 2. Document ({} chars, locked) ", state.document.text().chars().count())
    } else {
        format!(" 2. Document ({} chars) ", state.document.text().chars().count())
    };

    let inner_height = area.height.saturating_sub(2) as usize;
    let (line, col) = state.document.cursor_line_col();
    let scroll = (line + 1).saturating_sub(inner_height);

    let paragraph = Paragraph::new(state.document.text())
        .block(field_block(title, focused))
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);

    if focused && !state.document_locked {
        frame.set_cursor_position(Position::new(
            area.x + 1 + col as u16,
            area.y + 1 + line.saturating_sub(scroll) as u16,
        ));
    }
}

fn render_question(frame: &mut Frame, area: Rect, state: &FormState) {
    let focused = state.focus == Field::Question;
    frame.render_widget(
        Paragraph::new(state.question.text())
            .block(field_block(" 3. Question ".to_string(), focused)),
        area,
    );
    if focused {
        place_single_line_cursor(frame, area, &state.question);
    }
}

fn render_result(frame: &mut Frame, area: Rect, state: &FormState) {
    let (title, body, style) = match &state.result {
        None if state.busy => (
            " Result ".to_string(),
            "Working...".to_string(),
            Style::default().fg(Color::Yellow),
        ),
        None => (
            " Result ".to_string(),
            "F2: 3-sentence summary   F3: answer the question".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Some(outcome) => {
            let title = match outcome.action() {
                analyzer_domain::AnalysisAction::Summarize => " Summary Result ",
                analyzer_domain::AnalysisAction::Answer => " Q&A Result ",
            };
            let style = if outcome.is_success() {
                Style::default()
            } else {
                Style::default().fg(Color::Red)
            };
            (title.to_string(), outcome.display_text(), style)
        }
    };

    frame.render_widget(
        Paragraph::new(body)
            .style(style)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn render_status(frame: &mut Frame, area: Rect, state: &FormState) {
    let hints = "F2:summarize  F3:ask  Tab:next field  Esc:quit";
    let line = match &state.status {
        Some((kind, message)) => {
            let color = match kind {
                StatusKind::Info => Color::Cyan,
                StatusKind::Warning => Color::Yellow,
                StatusKind::Error => Color::Red,
            };
            Line::from(vec![
                Span::styled(format!(" {} ", message), Style::default().fg(color)),
                Span::styled(format!(" {}", hints), Style::default().fg(Color::DarkGray)),
            ])
        }
        None => Line::styled(format!(" {}", hints), Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn place_single_line_cursor(frame: &mut Frame, area: Rect, field: &TextField) {
    let max = area.width.saturating_sub(3) as usize;
    let col = field.cursor().min(max);
    frame.set_cursor_position(Position::new(area.x + 1 + col as u16, area.y + 1));
}
