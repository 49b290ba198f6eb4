mod error_message;
mod spinner;

pub(crate) use error_message::ErrorMessage;
pub(crate) use spinner::LoadingSpinner;
