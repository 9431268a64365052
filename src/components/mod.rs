//! Shared UI components: chrome, the route guard, and the modals.

pub mod add_branch_modal;
pub mod add_staff_modal;
pub mod error_panel;
pub mod layout;
pub mod pagination;
pub mod route_guard;
pub mod sidebar;
