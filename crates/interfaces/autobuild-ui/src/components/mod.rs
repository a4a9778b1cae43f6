pub mod forms;
pub mod header;
pub mod log_view;
pub mod notification;
