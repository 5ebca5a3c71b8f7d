//! Demo request form with inline validation and toast feedback.

mod component;
pub mod form;
pub mod toast;

pub use component::ContactForm;
pub use form::{SimulatedSubmitter, SubmitError, Submitter, is_valid_email};
pub use toast::{ToastHost, ToastKind, Toaster};
