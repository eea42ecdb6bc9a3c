//! Postfix output pane
//!
//! Shows the postfix output written so far, with the characters emitted by
//! the current step highlighted, followed by a log of every step up to the
//! current one.

use super::utils::{border_style, clamp_scroll, token_style};
use crate::trace::{Snapshot, StepAction};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Data needed to render the output pane
pub struct OutputRenderData<'a> {
    pub infix: &'a str,
    /// Snapshots from the start up to and including the current one
    pub history: &'a [Snapshot],
}

/// Render the output pane
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    data: OutputRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Postfix Output ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    let Some(current) = data.history.last() else {
        frame.render_widget(block, area);
        return;
    };
    let previous_len = data
        .history
        .len()
        .checked_sub(2)
        .and_then(|i| data.history.get(i))
        .map_or(0, |s| s.output.len());

    let mut output_spans = Vec::new();
    if current.output.is_empty() {
        output_spans.push(Span::styled(
            "(no output)",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }
    for (idx, c) in current.output.char_indices() {
        let style = if idx >= previous_len {
            Style::default()
                .fg(DEFAULT_THEME.emitted)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            token_style(c)
        };
        output_spans.push(Span::styled(c.to_string(), style));
    }

    let infix: Vec<char> = data.infix.chars().collect();
    let log_items: Vec<ListItem> = data
        .history
        .iter()
        .enumerate()
        .map(|(step, snapshot)| {
            let token = snapshot
                .position
                .and_then(|p| infix.get(p))
                .map_or_else(|| " ".to_string(), |c| c.to_string());
            let style = if step + 1 == data.history.len() {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.current_line_bg)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3} ", step + 1), style),
                Span::styled(format!(" {} ", token), style.fg(DEFAULT_THEME.secondary)),
                Span::styled(
                    snapshot.action.to_string(),
                    if matches!(snapshot.action, StepAction::Failed(_)) {
                        style.fg(DEFAULT_THEME.error)
                    } else {
                        style
                    },
                ),
            ]))
        })
        .collect();

    let mut all_items = vec![
        ListItem::new(Line::from(output_spans)),
        ListItem::new(""),
    ];
    all_items.extend(log_items);

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, total_items, visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
