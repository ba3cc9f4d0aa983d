//! Required-field validation.
//!
//! A required field is valid iff its value is non-empty after trimming
//! whitespace. Fields carry no marker until first checked.

use std::rc::Rc;

use crate::host::{Field, FieldEvent, Page, Subscription};

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
}

impl Validity {
    pub fn of(value: &str) -> Self {
        if value.trim().is_empty() { Self::Invalid } else { Self::Valid }
    }

    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

/// Mark every field and report whether all of them are valid.
pub fn validate_fields(fields: &[Rc<dyn Field>]) -> bool {
    fields.iter().fold(true, |all_valid, field| {
        let validity = Validity::of(&field.value());
        field.set_validity(validity);
        all_valid && validity.is_valid()
    })
}

/// Validate the required fields of the form with `form_id`.
///
/// An unknown form counts as valid.
pub fn validate_form(page: &dyn Page, form_id: &str) -> bool {
    let Some(form) = page.form(form_id) else {
        return true;
    };
    let required: Vec<_> = form.fields().into_iter().filter(|f| f.is_required()).collect();
    validate_fields(&required)
}

/// Blur re-checks the field; input only ever clears an invalid marker.
pub fn watch_field(field: &Rc<dyn Field>) -> [Subscription; 2] {
    let target = Rc::clone(field);
    let on_blur = field.on(
        FieldEvent::Blur,
        Box::new(move || target.set_validity(Validity::of(&target.value()))),
    );

    let target = Rc::clone(field);
    let on_input = field.on(
        FieldEvent::Input,
        Box::new(move || {
            if target.validity() == Some(Validity::Invalid) && Validity::of(&target.value()).is_valid() {
                target.set_validity(Validity::Valid);
            }
        }),
    );
    [on_blur, on_input]
}

/// Attach blur/input validation to every required field on the page.
pub fn watch_required_fields(page: &dyn Page) -> Vec<Subscription> {
    page.required_fields().iter().flat_map(watch_field).collect()
}
