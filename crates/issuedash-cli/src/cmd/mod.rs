pub mod completions;
pub mod list;
pub mod tui;
pub mod view_args;
