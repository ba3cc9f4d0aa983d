use super::*;
use crate::host::memory::{FieldSpec, MemoryPage};

#[test]
fn validity_trims_whitespace() {
    assert_eq!(Validity::of(""), Validity::Invalid);
    assert_eq!(Validity::of("   \t\n"), Validity::Invalid);
    assert_eq!(Validity::of(" x "), Validity::Valid);
}

#[test]
fn validate_form_fails_when_required_field_is_empty() {
    let page = MemoryPage::new();
    let form = page.add_form("signup");
    let name = form.add_field(FieldSpec::input("name").required());
    let email = form.add_field(FieldSpec::input("email").value("a@b.com"));

    assert!(!validate_form(&page, "signup"));
    assert_eq!(name.validity(), Some(Validity::Invalid));
    assert_eq!(email.validity(), None);
}

#[test]
fn validate_form_passes_when_required_field_is_filled() {
    let page = MemoryPage::new();
    let form = page.add_form("signup");
    let name = form.add_field(FieldSpec::input("name").required().value("x"));
    form.add_field(FieldSpec::input("email").value("a@b.com"));

    assert!(validate_form(&page, "signup"));
    assert_eq!(name.validity(), Some(Validity::Valid));
    assert_eq!(name.marker_class(), Some("is-valid"));
}

#[test]
fn validate_form_marks_every_field_without_short_circuit() {
    let page = MemoryPage::new();
    let form = page.add_form("f");
    let a = form.add_field(FieldSpec::input("a").required());
    let b = form.add_field(FieldSpec::input("b").required().value("ok"));
    let c = form.add_field(FieldSpec::input("c").required().value(" "));

    assert!(!validate_form(&page, "f"));
    assert_eq!(a.validity(), Some(Validity::Invalid));
    assert_eq!(b.validity(), Some(Validity::Valid));
    assert_eq!(c.validity(), Some(Validity::Invalid));
}

#[test]
fn validate_form_with_unknown_id_is_valid() {
    let page = MemoryPage::new();
    assert!(validate_form(&page, "nope"));
}

#[test]
fn validate_form_ignores_other_forms() {
    let page = MemoryPage::new();
    page.add_form("other").add_field(FieldSpec::input("x").required());
    page.add_form("mine").add_field(FieldSpec::input("y").required().value("filled"));
    assert!(validate_form(&page, "mine"));
}

#[test]
fn blur_marks_empty_required_field_invalid() {
    let page = MemoryPage::new();
    let field = page.add_field(FieldSpec::input("title").required());
    let _subs = watch_required_fields(&page);

    field.blur();
    assert_eq!(field.validity(), Some(Validity::Invalid));
    assert_eq!(field.marker_class(), Some("is-invalid"));
}

#[test]
fn blur_marks_filled_field_valid() {
    let page = MemoryPage::new();
    let field = page.add_field(FieldSpec::input("title").required().value("Hi"));
    let _subs = watch_required_fields(&page);

    field.blur();
    assert_eq!(field.validity(), Some(Validity::Valid));
}

#[test]
fn input_clears_invalid_marker_once_filled() {
    let page = MemoryPage::new();
    let field = page.add_field(FieldSpec::input("title").required());
    let _subs = watch_required_fields(&page);

    field.blur();
    field.type_text("H");
    assert_eq!(field.validity(), Some(Validity::Valid));
}

#[test]
fn input_never_marks_field_invalid() {
    let page = MemoryPage::new();
    let field = page.add_field(FieldSpec::input("title").required().value("x"));
    let _subs = watch_required_fields(&page);

    field.type_text("");
    assert_eq!(field.validity(), None);

    field.blur();
    field.type_text("y");
    field.type_text("   ");
    assert_eq!(field.validity(), Some(Validity::Valid));
}

#[test]
fn watchers_skip_optional_fields() {
    let page = MemoryPage::new();
    let optional = page.add_field(FieldSpec::input("nickname"));
    let subs = watch_required_fields(&page);

    optional.blur();
    assert!(subs.is_empty());
    assert_eq!(optional.validity(), None);
}

#[test]
fn dropping_watchers_detaches_them() {
    let page = MemoryPage::new();
    let field = page.add_field(FieldSpec::input("title").required());
    let subs = watch_required_fields(&page);
    assert_eq!(subs.len(), 2);
    drop(subs);

    field.blur();
    assert_eq!(field.validity(), None);
}
