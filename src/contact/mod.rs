pub mod form;
pub mod validation;

pub use form::ContactForm;
