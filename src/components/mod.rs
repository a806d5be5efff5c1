//! UI Components
//!
//! Reusable Leptos components.

mod auth_buttons;
mod delete_confirm_button;
mod receipt_card;
mod sidebar;
mod top_bar;

pub use auth_buttons::AuthButtons;
pub use delete_confirm_button::DeleteConfirmButton;
pub use receipt_card::{LineItem, ReceiptCard};
pub use sidebar::Sidebar;
pub use top_bar::TopBar;
