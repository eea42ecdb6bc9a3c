//! Operator stack pane
//!
//! Draws the operator stack top-first, one boxed cell per entry, with the
//! current depth and capacity limit in the title.

use super::utils::{border_style, clamp_scroll, token_style};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Scroll state for the stack pane
pub struct StackScrollState {
    pub offset: usize,
    pub prev_item_count: usize,
}

/// Data needed to render the stack pane
pub struct StackRenderData<'a> {
    /// Stack contents from bottom to top
    pub items: &'a [char],
    pub limit: Option<usize>,
}

/// Render the stack pane
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    data: StackRenderData,
    is_focused: bool,
    scroll_state: &mut StackScrollState,
) {
    let title = match data.limit {
        Some(limit) => format!(" Operator Stack ({}/{}) ", data.items.len(), limit),
        None => format!(" Operator Stack ({}) ", data.items.len()),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let mut all_items = Vec::new();

    if data.items.is_empty() {
        all_items.push(ListItem::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment)));
    } else {
        let cell_border = Style::default().fg(DEFAULT_THEME.comment);
        for (depth, c) in data.items.iter().rev().enumerate() {
            let marker = if depth == 0 { " top → " } else { "       " };
            all_items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    marker,
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("│ ", cell_border),
                Span::styled(c.to_string(), token_style(*c)),
                Span::styled(" │", cell_border),
            ])));
        }
        all_items.push(ListItem::new(Line::from(vec![
            Span::raw("       "),
            Span::styled("└───┘", Style::default().fg(DEFAULT_THEME.comment)),
        ])));
    }

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Snap back to the top whenever the stack changes size
    if total_items != scroll_state.prev_item_count {
        scroll_state.offset = 0;
        scroll_state.prev_item_count = total_items;
    }
    clamp_scroll(&mut scroll_state.offset, total_items, visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
