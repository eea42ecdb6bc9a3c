//! Styling helpers shared by the panes

use crate::converter::token::Token;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style for a pane, highlighted when focused
pub fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Foreground colour for a single expression character
pub fn token_style(c: char) -> Style {
    match Token::classify(c) {
        Some(Token::Operand(_)) => Style::default().fg(DEFAULT_THEME.operand),
        Some(Token::Operator(_)) => Style::default()
            .fg(DEFAULT_THEME.operator)
            .add_modifier(Modifier::BOLD),
        Some(Token::LeftParen) | Some(Token::RightParen) => {
            Style::default().fg(DEFAULT_THEME.paren)
        }
        Some(Token::End) => Style::default().fg(DEFAULT_THEME.comment),
        None => Style::default().fg(DEFAULT_THEME.error),
    }
}

/// Keep `offset` within range so the last page of `total` items stays filled
pub fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}
