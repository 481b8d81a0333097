//! Terminal rendering of the rule sidebar.
//!
//! Pure functions of a [`SidebarSnapshot`](crate::sync::SidebarSnapshot);
//! nothing here touches controller state.

mod ast;
mod sidebar;
mod theme;

pub use ast::{ast_lines, has_ast};
pub use sidebar::{render_sidebar, sidebar_lines};
