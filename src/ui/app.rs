//! Main TUI application state and logic

use super::panes::{
    render_expression_pane, render_output_pane, render_stack_pane, render_status_bar,
    ExpressionRenderData, OutputRenderData, StackRenderData, StackScrollState, StatusRenderData,
};
use crate::trace::Trace;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Expression,
    Output,
    Stack,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: expression -> output -> stack)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Expression => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Stack,
            FocusedPane::Stack => FocusedPane::Expression,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Expression => FocusedPane::Stack,
            FocusedPane::Output => FocusedPane::Expression,
            FocusedPane::Stack => FocusedPane::Output,
        }
    }
}

/// The main application state
pub struct App {
    /// Recorded conversion being stepped through
    pub trace: Trace,

    /// Final postfix form, or the conversion error message
    pub outcome: Result<String, String>,

    /// Evaluation summary shown under the result
    pub evaluation: Option<String>,

    /// Capacity limit of the operator stack, if any
    pub stack_limit: Option<usize>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub stack_scroll: StackScrollState,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app positioned at the start of `trace`
    pub fn new(mut trace: Trace, outcome: Result<String, String>) -> Self {
        trace.rewind_to_start();
        App {
            trace,
            outcome,
            evaluation: None,
            stack_limit: None,
            focused_pane: FocusedPane::Expression,
            stack_scroll: StackScrollState {
                offset: 0,
                prev_item_count: 0,
            },
            output_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    pub fn with_evaluation(mut self, evaluation: String) -> Self {
        self.evaluation = Some(evaluation);
        self
    }

    pub fn with_stack_limit(mut self, limit: Option<usize>) -> Self {
        self.stack_limit = limit;
        self
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_millis(700) {
                if self.trace.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                    self.output_scroll = usize::MAX;
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(pane_area);

        // Left column: Expression (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(0)])
            .split(columns[0]);

        let position = self.trace.position();
        let current = self.trace.current();
        let is_error = self.outcome.is_err();

        render_expression_pane(
            frame,
            left_rows[0],
            ExpressionRenderData {
                infix: self.trace.infix(),
                position: current.position,
                outcome: self.outcome.as_deref().map_err(String::as_str),
                evaluation: self.evaluation.as_deref(),
            },
            self.focused_pane == FocusedPane::Expression,
        );

        render_output_pane(
            frame,
            left_rows[1],
            OutputRenderData {
                infix: self.trace.infix(),
                history: &self.trace.snapshots()[..=position],
            },
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        render_stack_pane(
            frame,
            columns[1],
            StackRenderData {
                items: &current.stack,
                limit: self.stack_limit,
            },
            self.focused_pane == FocusedPane::Stack,
            &mut self.stack_scroll,
        );

        render_status_bar(
            frame,
            status_area,
            StatusRenderData {
                message: &self.status_message,
                current_step: position,
                total_steps: self.trace.len(),
                is_error: is_error && position + 1 >= self.trace.len(),
                is_playing: self.is_playing,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1);
                let mut stepped = 0;
                for _ in 0..n {
                    if self.trace.step_forward().is_err() {
                        break;
                    }
                    stepped += 1;
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.output_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Stack => {
                    self.stack_scroll.offset = self.stack_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
                FocusedPane::Expression => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Stack => {
                    self.stack_scroll.offset = self.stack_scroll.offset.saturating_add(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
                FocusedPane::Expression => {}
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_secs(1))
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.trace.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.output_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.trace.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
                self.output_scroll = 0;
            }
            _ => {}
        }
    }

    /// Step forward in the conversion
    fn step_forward(&mut self) {
        match self.trace.step_forward() {
            Ok(()) => {
                self.status_message = self.trace.current().action.to_string();
                self.output_scroll = usize::MAX;
            }
            Err(message) => {
                self.status_message = format!("Cannot step forward: {}", message);
            }
        }
    }

    /// Step backward in the conversion
    fn step_backward(&mut self) {
        match self.trace.step_backward() {
            Ok(()) => {
                self.status_message = self.trace.current().action.to_string();
                self.output_scroll = usize::MAX;
            }
            Err(message) => {
                self.status_message = format!("Cannot step backward: {}", message);
            }
        }
    }
}
