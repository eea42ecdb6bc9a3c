//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`expression`]: The infix expression with the current character marked
//! - [`stack`]: Operator stack contents, top first
//! - [`output`]: Postfix output so far and the step log
//! - [`status`]: Status bar with keybindings and playback state
//! - `utils`: Shared border and token styling
//!
//! Each pane module exports a `render_*` function taking a `*RenderData`
//! struct; panes that scroll also take their scroll state.

mod utils;

pub mod expression;
pub mod output;
pub mod stack;
pub mod status;

pub use expression::{render_expression_pane, ExpressionRenderData};
pub use output::{render_output_pane, OutputRenderData};
pub use stack::{render_stack_pane, StackRenderData, StackScrollState};
pub use status::{render_status_bar, StatusRenderData};
