//! Custom widget components

mod dashboard;
mod loader;
mod login_form;
pub mod modal_overlay;
mod register_form;
mod text_input;

pub use dashboard::{Dashboard, LOADING_VIDEOS_LABEL};
pub use loader::{LoaderOverlay, LOADING_FEED_LABEL, SIGNING_IN_LABEL};
pub use login_form::LoginForm;
pub use register_form::{RegisterForm, AVAILABLE_LABEL, SUBMITTING_LABEL, UNAVAILABLE_LABEL};
pub use text_input::TextInput;
