//! Dashboard presentation: user actions, page models and HTML rendering.

pub mod action;
mod controller;
pub mod render;
pub mod views;

pub use action::{Action, DashboardState, Notice};
pub use controller::{Dashboard, ListParams};
pub use render::Renderer;
