//! State model for the roaster creation dialog.
//!
//! The dialog's behaviour lives here, away from any rendering: open/close,
//! field edits, validation on submit, and the resolution of an in-flight
//! request. The view layer only forwards events and renders snapshots.
//!
//! Submission is fire-and-forget from the dialog's perspective: a valid
//! submit closes the dialog immediately and yields the payload to send,
//! before the request outcome is known. Field values are only reset by a
//! successful outcome, so a failed request leaves them in place for
//! correction and resubmission.

use api::roaster::{location_error, name_error, NewRoaster};

/// Transient client-side field state bound to the form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoasterFormValues {
    pub name: String,
    pub location: String,
}

/// Per-field validation messages. Empty means the last validation passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub location: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_clear(&self) -> bool {
        self.name.is_none() && self.location.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoasterFormModel {
    pub values: RoasterFormValues,
    pub errors: FieldErrors,
    open: bool,
    submitting: bool,
}

impl RoasterFormModel {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while a creation request is in flight. The dialog is already
    /// closed by then; this only guards the submit control if the dialog
    /// is reopened mid-request.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Explicit cancel. No submission, no field reset.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_name(&mut self, name: String) {
        self.values.name = name;
    }

    pub fn set_location(&mut self, location: String) {
        self.values.location = location;
    }

    /// Validate the current values. On failure the dialog stays open with
    /// field messages attached and nothing is dispatched. On success the
    /// dialog closes immediately and the payload to send is returned.
    pub fn submit(&mut self) -> Option<NewRoaster> {
        if self.submitting {
            return None;
        }

        self.errors = FieldErrors {
            name: name_error(&self.values.name),
            location: location_error(&self.values.location),
        };
        if !self.errors.is_clear() {
            return None;
        }

        self.open = false;
        self.submitting = true;
        Some(NewRoaster {
            name: self.values.name.clone(),
            location: self.values.location.clone(),
        })
    }

    /// The server confirmed the record: clear the fields for the next entry.
    pub fn resolve_success(&mut self) {
        self.submitting = false;
        self.values = RoasterFormValues::default();
        self.errors = FieldErrors::default();
    }

    /// The request failed: keep the submitted values for correction.
    pub fn resolve_failure(&mut self) {
        self.submitting = false;
    }
}
