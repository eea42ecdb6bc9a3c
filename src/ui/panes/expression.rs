//! Infix expression pane
//!
//! Shows the expression being converted with the character consumed by the
//! current step highlighted and marked with a caret, followed by the final
//! result (or error) of the conversion.

use super::utils::{border_style, token_style};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the expression pane
pub struct ExpressionRenderData<'a> {
    pub infix: &'a str,
    /// Character index consumed by the current step
    pub position: Option<usize>,
    /// Final postfix form, or the conversion error message
    pub outcome: Result<&'a str, &'a str>,
    /// Evaluation summary, when evaluation is enabled
    pub evaluation: Option<&'a str>,
}

/// Render the expression pane
pub fn render_expression_pane(
    frame: &mut Frame,
    area: Rect,
    data: ExpressionRenderData,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Infix Expression ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let mut expression_spans = vec![Span::styled(
        "  ",
        Style::default().fg(DEFAULT_THEME.comment),
    )];
    let mut caret_column = None;

    for (idx, c) in data.infix.chars().enumerate() {
        let mut style = token_style(c);
        if data.position == Some(idx) {
            style = style
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD);
            caret_column = Some(idx);
        }
        expression_spans.push(Span::styled(c.to_string(), style));
    }

    let caret_line = match caret_column {
        Some(col) => Line::from(Span::styled(
            format!("  {}^", " ".repeat(col)),
            Style::default().fg(DEFAULT_THEME.secondary),
        )),
        None => Line::from(""),
    };

    let outcome_line = match data.outcome {
        Ok(postfix) => Line::from(vec![
            Span::styled("  postfix ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                postfix.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Err(message) => Line::from(vec![
            Span::styled("  error   ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(message.to_string(), Style::default().fg(DEFAULT_THEME.error)),
        ]),
    };

    let mut lines = vec![
        Line::from(expression_spans),
        caret_line,
        Line::from(""),
        outcome_line,
    ];

    if let Some(evaluation) = data.evaluation {
        lines.push(Line::from(vec![
            Span::styled("  value   ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(evaluation.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
