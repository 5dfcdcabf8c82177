pub(crate) mod alert;
pub(crate) mod appointment_modal;
pub(crate) mod chat_button;
pub(crate) mod chat_widget;
pub(crate) mod header_nav_item;
pub(crate) mod loading;
pub(crate) mod service_card;

#[cfg(test)]
mod components_test;

// Re-export components for convenience
pub use alert::{Alert, AlertKind};
pub use appointment_modal::AppointmentModal;
pub use chat_button::ChatButton;
pub use chat_widget::ChatWidget;
pub use loading::Loading;
pub use service_card::ServiceCard;
