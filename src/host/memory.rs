//! Headless page used off-browser and in tests.
//!
//! DESIGN
//! ======
//! Mirrors just enough of the DOM for the helpers: forms with fields, loose
//! fields, generic elements with classes and attributes, counter labels and
//! the toast container. Handles are cheap `Rc` clones sharing state with the
//! page, and expose simulation hooks (`type_text`, `blur`, `submit`,
//! `click`) that fire the same listeners the browser would.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::consts::{INVALID_CLASS, LOADING_OVERLAY_CLASS, VALID_CLASS};
use crate::host::event::Listeners;
use crate::host::{ClickEvent, Element, Field, FieldEvent, Form, Label, Page, Subscription, ToastSurface};
use crate::ui::counter::CounterTone;
use crate::ui::toast::{Toast, ToastId};
use crate::ui::validate::Validity;

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

// =============================================================
// Fields
// =============================================================

/// Blueprint for a field added to a [`MemoryPage`] or [`MemoryForm`].
#[derive(Clone, Debug, Default)]
pub struct FieldSpec {
    id: Option<String>,
    name: Option<String>,
    textarea: bool,
    required: bool,
    max_length: Option<usize>,
    disabled: bool,
    value: String,
}

impl FieldSpec {
    /// `<input name=...>`
    pub fn input(name: &str) -> Self {
        Self { name: Some(name.to_owned()), ..Self::default() }
    }

    /// `<textarea name=...>`
    pub fn textarea(name: &str) -> Self {
        Self { name: Some(name.to_owned()), textarea: true, ..Self::default() }
    }

    /// An `<input>` without a name.
    pub fn unnamed() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_owned());
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    #[must_use]
    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_owned();
        self
    }
}

struct FieldNode {
    spec: FieldSpec,
    value: RefCell<String>,
    validity: Cell<Option<Validity>>,
    input: Listeners<()>,
    blur: Listeners<()>,
}

#[derive(Clone)]
pub struct MemoryField {
    node: Rc<FieldNode>,
}

impl MemoryField {
    fn from_spec(spec: FieldSpec) -> Self {
        let value = RefCell::new(spec.value.clone());
        Self {
            node: Rc::new(FieldNode {
                spec,
                value,
                validity: Cell::new(None),
                input: Listeners::new(),
                blur: Listeners::new(),
            }),
        }
    }

    /// Replace the value as a user would, firing `input`.
    pub fn type_text(&self, value: &str) {
        *self.node.value.borrow_mut() = value.to_owned();
        self.node.input.emit(&mut ());
    }

    /// Fire `blur`.
    pub fn blur(&self) {
        self.node.blur.emit(&mut ());
    }

    /// Class list as the browser host would render the validity marker.
    pub fn marker_class(&self) -> Option<&'static str> {
        self.node.validity.get().map(|v| match v {
            Validity::Valid => VALID_CLASS,
            Validity::Invalid => INVALID_CLASS,
        })
    }

    /// Number of attached input listeners.
    pub fn input_listeners(&self) -> usize {
        self.node.input.len()
    }

    fn spec(&self) -> &FieldSpec {
        &self.node.spec
    }
}

impl Field for MemoryField {
    fn id(&self) -> Option<String> {
        self.spec().id.clone()
    }

    fn name(&self) -> Option<String> {
        self.spec().name.clone().filter(|n| !n.is_empty())
    }

    fn value(&self) -> String {
        self.node.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.node.value.borrow_mut() = value.to_owned();
    }

    fn is_required(&self) -> bool {
        self.spec().required
    }

    fn max_length(&self) -> Option<usize> {
        self.spec().max_length
    }

    fn is_submittable(&self) -> bool {
        !self.spec().disabled
    }

    fn validity(&self) -> Option<Validity> {
        self.node.validity.get()
    }

    fn set_validity(&self, validity: Validity) {
        self.node.validity.set(Some(validity));
    }

    fn on(&self, event: FieldEvent, mut callback: Box<dyn FnMut()>) -> Subscription {
        let listeners = match event {
            FieldEvent::Input => &self.node.input,
            FieldEvent::Blur => &self.node.blur,
        };
        listeners.subscribe(move |_: &mut ()| callback())
    }
}

// =============================================================
// Forms
// =============================================================

struct FormNode {
    id: String,
    fields: RefCell<Vec<MemoryField>>,
    submit: Listeners<()>,
}

#[derive(Clone)]
pub struct MemoryForm {
    node: Rc<FormNode>,
}

impl MemoryForm {
    pub fn add_field(&self, spec: FieldSpec) -> MemoryField {
        let field = MemoryField::from_spec(spec);
        self.node.fields.borrow_mut().push(field.clone());
        field
    }

    /// Handle to the first field named `name`.
    pub fn field(&self, name: &str) -> Option<MemoryField> {
        self.node
            .fields
            .borrow()
            .iter()
            .find(|f| f.spec().name.as_deref() == Some(name))
            .cloned()
    }

    /// Fire `submit`.
    pub fn submit(&self) {
        self.node.submit.emit(&mut ());
    }

    fn memory_fields(&self) -> Vec<MemoryField> {
        self.node.fields.borrow().clone()
    }
}

impl Form for MemoryForm {
    fn id(&self) -> String {
        self.node.id.clone()
    }

    fn fields(&self) -> Vec<Rc<dyn Field>> {
        self.memory_fields()
            .into_iter()
            .map(|f| Rc::new(f) as Rc<dyn Field>)
            .collect()
    }

    fn on_submit(&self, mut callback: Box<dyn FnMut()>) -> Subscription {
        self.node.submit.subscribe(move |_: &mut ()| callback())
    }
}

// =============================================================
// Elements
// =============================================================

/// Blueprint for a generic element.
#[derive(Clone, Debug, Default)]
pub struct ElementSpec {
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    text: String,
}

impl ElementSpec {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_owned());
        self
    }

    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_owned());
        self
    }

    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_owned();
        self
    }
}

struct ElementNode {
    spec: ElementSpec,
    hidden: Cell<bool>,
    fade_ms: Cell<Option<u32>>,
    removed: Cell<bool>,
    scrolls: Cell<u32>,
    click: Listeners<ClickEvent>,
}

#[derive(Clone)]
pub struct MemoryElement {
    node: Rc<ElementNode>,
}

impl MemoryElement {
    fn from_spec(spec: ElementSpec) -> Self {
        Self {
            node: Rc::new(ElementNode {
                spec,
                hidden: Cell::new(false),
                fade_ms: Cell::new(None),
                removed: Cell::new(false),
                scrolls: Cell::new(0),
                click: Listeners::new(),
            }),
        }
    }

    /// Fire `click`; returns `true` when the default action would proceed.
    pub fn click(&self) -> bool {
        let mut event = ClickEvent::default();
        self.node.click.emit(&mut event);
        !event.default_prevented
    }

    pub fn is_removed(&self) -> bool {
        self.node.removed.get()
    }

    /// Duration of the last fade-out, if one started.
    pub fn fade_ms(&self) -> Option<u32> {
        self.node.fade_ms.get()
    }

    pub fn scroll_count(&self) -> u32 {
        self.node.scrolls.get()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.node.spec.classes.iter().any(|c| c == class)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.node.spec.attributes.iter().any(|(n, _)| n == name)
    }
}

impl Element for MemoryElement {
    fn id(&self) -> Option<String> {
        self.node.spec.id.clone()
    }

    fn text_content(&self) -> String {
        self.node.spec.text.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.node
            .spec
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn set_hidden(&self, hidden: bool) {
        self.node.hidden.set(hidden);
    }

    fn is_hidden(&self) -> bool {
        self.node.hidden.get()
    }

    fn fade_out(&self, duration_ms: u32) {
        self.node.fade_ms.set(Some(duration_ms));
    }

    fn scroll_into_view(&self) {
        self.node.scrolls.set(self.node.scrolls.get() + 1);
    }

    fn remove(&self) {
        self.node.removed.set(true);
    }

    fn on_click(&self, mut callback: Box<dyn FnMut(&mut ClickEvent)>) -> Subscription {
        self.node.click.subscribe(move |event: &mut ClickEvent| callback(event))
    }
}

// =============================================================
// Labels and toasts
// =============================================================

#[derive(Clone, Default)]
pub struct MemoryLabel {
    text: Rc<RefCell<String>>,
    tone: Rc<Cell<Option<CounterTone>>>,
}

impl MemoryLabel {
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// `None` until a tone has been applied.
    pub fn tone(&self) -> Option<CounterTone> {
        self.tone.get()
    }
}

impl Label for MemoryLabel {
    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_owned();
    }

    fn set_tone(&self, tone: CounterTone) {
        self.tone.set(Some(tone));
    }
}

/// A toast node as it sits in the container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedToast {
    pub id: ToastId,
    pub message: String,
    pub class: String,
    /// Exit animation length once `slideOut` has started.
    pub exit_ms: Option<u32>,
}

#[derive(Default)]
struct MemoryToasts {
    nodes: RefCell<Vec<RenderedToast>>,
}

impl ToastSurface for MemoryToasts {
    fn mount(&self, toast: &Toast) {
        self.nodes.borrow_mut().push(RenderedToast {
            id: toast.id,
            message: toast.message.clone(),
            class: toast.severity.toast_class(),
            exit_ms: None,
        });
    }

    fn begin_exit(&self, id: ToastId, exit_ms: u32) {
        if let Some(node) = self.nodes.borrow_mut().iter_mut().find(|n| n.id == id) {
            node.exit_ms = Some(exit_ms);
        }
    }

    fn unmount(&self, id: ToastId) {
        self.nodes.borrow_mut().retain(|n| n.id != id);
    }
}

// =============================================================
// Page
// =============================================================

#[derive(Default)]
struct PageState {
    forms: RefCell<Vec<MemoryForm>>,
    loose_fields: RefCell<Vec<MemoryField>>,
    elements: RefCell<Vec<MemoryElement>>,
    labels: RefCell<Vec<(String, MemoryLabel)>>,
    toasts: RefCell<Option<Rc<MemoryToasts>>>,
    bodiless: Cell<bool>,
    confirm_replies: RefCell<VecDeque<bool>>,
    prompts: RefCell<Vec<String>>,
}

/// In-memory document. Clones share the same page.
#[derive(Clone, Default)]
pub struct MemoryPage {
    state: Rc<PageState>,
}

impl MemoryPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The page as the trait object the components take.
    pub fn shared(&self) -> Rc<dyn Page> {
        Rc::new(self.clone())
    }

    pub fn add_form(&self, id: &str) -> MemoryForm {
        let form = MemoryForm {
            node: Rc::new(FormNode { id: id.to_owned(), fields: RefCell::new(Vec::new()), submit: Listeners::new() }),
        };
        self.state.forms.borrow_mut().push(form.clone());
        form
    }

    /// Add a field outside any form (search boxes, standalone textareas).
    pub fn add_field(&self, spec: FieldSpec) -> MemoryField {
        let field = MemoryField::from_spec(spec);
        self.state.loose_fields.borrow_mut().push(field.clone());
        field
    }

    pub fn add_element(&self, spec: ElementSpec) -> MemoryElement {
        let element = MemoryElement::from_spec(spec);
        self.state.elements.borrow_mut().push(element.clone());
        element
    }

    /// Queue the answer for the next confirmation prompt. Unqueued prompts
    /// are accepted.
    pub fn queue_confirm(&self, accept: bool) {
        self.state.confirm_replies.borrow_mut().push_back(accept);
    }

    /// Messages of every confirmation prompt shown so far.
    pub fn prompts(&self) -> Vec<String> {
        self.state.prompts.borrow().clone()
    }

    /// Label created for the field with `field_id`, if any.
    pub fn counter_label_for(&self, field_id: &str) -> Option<MemoryLabel> {
        self.state
            .labels
            .borrow()
            .iter()
            .find(|(id, _)| id == field_id)
            .map(|(_, label)| label.clone())
    }

    pub fn counter_label_count(&self) -> usize {
        self.state.labels.borrow().len()
    }

    /// Simulate a document whose body is not parsed yet: no toast
    /// container can be created until this is set back to `true`.
    pub fn set_body_present(&self, present: bool) {
        self.state.bodiless.set(!present);
    }

    pub fn has_toast_container(&self) -> bool {
        self.state.toasts.borrow().is_some()
    }

    /// Toast nodes currently in the container, in insertion order.
    pub fn rendered_toasts(&self) -> Vec<RenderedToast> {
        self.state
            .toasts
            .borrow()
            .as_ref()
            .map_or_else(Vec::new, |t| t.nodes.borrow().clone())
    }

    /// Live (not removed) elements carrying `id`.
    pub fn live_elements_with_id(&self, id: &str) -> usize {
        self.live_elements()
            .iter()
            .filter(|e| e.node.spec.id.as_deref() == Some(id))
            .count()
    }

    fn live_elements(&self) -> Vec<MemoryElement> {
        self.state
            .elements
            .borrow()
            .iter()
            .filter(|e| !e.is_removed())
            .cloned()
            .collect()
    }

    fn all_fields(&self) -> Vec<MemoryField> {
        let mut fields: Vec<MemoryField> = self
            .state
            .forms
            .borrow()
            .iter()
            .flat_map(MemoryForm::memory_fields)
            .collect();
        fields.extend(self.state.loose_fields.borrow().iter().cloned());
        fields
    }
}

fn as_fields(fields: impl IntoIterator<Item = MemoryField>) -> Vec<Rc<dyn Field>> {
    fields.into_iter().map(|f| Rc::new(f) as Rc<dyn Field>).collect()
}

fn as_elements(elements: impl IntoIterator<Item = MemoryElement>) -> Vec<Rc<dyn Element>> {
    elements.into_iter().map(|e| Rc::new(e) as Rc<dyn Element>).collect()
}

impl Page for MemoryPage {
    fn form(&self, id: &str) -> Option<Rc<dyn Form>> {
        self.state
            .forms
            .borrow()
            .iter()
            .find(|f| f.node.id == id)
            .map(|f| Rc::new(f.clone()) as Rc<dyn Form>)
    }

    fn field(&self, id: &str) -> Option<Rc<dyn Field>> {
        self.all_fields()
            .into_iter()
            .find(|f| f.spec().id.as_deref() == Some(id))
            .map(|f| Rc::new(f) as Rc<dyn Field>)
    }

    fn element(&self, id: &str) -> Option<Rc<dyn Element>> {
        self.live_elements()
            .into_iter()
            .find(|e| e.node.spec.id.as_deref() == Some(id))
            .map(|e| Rc::new(e) as Rc<dyn Element>)
    }

    fn elements_by_class(&self, class: &str) -> Vec<Rc<dyn Element>> {
        as_elements(self.live_elements().into_iter().filter(|e| e.has_class(class)))
    }

    fn elements_with_attribute(&self, attribute: &str) -> Vec<Rc<dyn Element>> {
        as_elements(self.live_elements().into_iter().filter(|e| e.has_attribute(attribute)))
    }

    fn required_fields(&self) -> Vec<Rc<dyn Field>> {
        as_fields(self.all_fields().into_iter().filter(|f| f.spec().required))
    }

    fn textareas(&self) -> Vec<Rc<dyn Field>> {
        as_fields(self.all_fields().into_iter().filter(|f| f.spec().textarea))
    }

    fn counter_label(&self, field_id: &str) -> Option<Rc<dyn Label>> {
        self.field(field_id)?;
        let label = MemoryLabel::default();
        self.state.labels.borrow_mut().push((field_id.to_owned(), label.clone()));
        Some(Rc::new(label))
    }

    fn toast_surface(&self) -> Option<Rc<dyn ToastSurface>> {
        if self.state.bodiless.get() {
            return None;
        }
        let mut slot = self.state.toasts.borrow_mut();
        let surface = slot.get_or_insert_with(|| Rc::new(MemoryToasts::default()));
        Some(Rc::clone(surface) as Rc<dyn ToastSurface>)
    }

    fn append_overlay(&self, id: &str) {
        self.add_element(ElementSpec::new().id(id).class(LOADING_OVERLAY_CLASS));
    }

    fn confirm(&self, message: &str) -> bool {
        self.state.prompts.borrow_mut().push(message.to_owned());
        self.state.confirm_replies.borrow_mut().pop_front().unwrap_or(true)
    }
}
