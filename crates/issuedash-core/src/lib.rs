//! issuedash-core library.
//!
//! Holds everything that is independent of the terminal: the issue model and
//! its seed data, the user-controlled [`view::ViewState`], the filter/sort
//! [`pipeline`], and the [`dashboard::Dashboard`] controller that keeps the
//! derived projection current.
//!
//! # Conventions
//!
//! - **Errors**: typed `thiserror` errors here; `anyhow` only at the binary edge.
//! - **Logging**: use `tracing` macros (`info!`, `warn!`, `debug!`, `trace!`).

pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod seed;
pub mod summary;
pub mod view;

pub use dashboard::{Dashboard, SortLocked};
pub use model::issue::{Issue, Priority, Status};
pub use view::{PriorityFilter, SortDirection, ViewState};
