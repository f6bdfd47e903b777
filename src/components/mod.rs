//! UI Components
//!
//! Reusable Leptos components.

mod spinner;
mod todo_form;
mod todo_list;

pub use spinner::Spinner;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
