//! Roaster creation: a pure form model plus the dialog component that
//! drives it.

mod form;
mod view;

pub use form::{FieldErrors, RoasterFormModel, RoasterFormValues};
pub use view::RoasterForm;
