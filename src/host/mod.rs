//! DOM seam between the components and whatever page they run in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components locate elements through [`Page`] and react through the
//! `on_*` hooks, each returning a [`Subscription`]. The traits are object
//! safe and handed around as `Rc<dyn ...>` because the page, like the
//! browser's UI thread, is single-threaded and shared by every component.
//!
//! `memory` is a headless page with simulated events; `browser` binds the
//! same traits to `web-sys` under the `hydrate` feature.

pub mod event;
pub mod memory;

#[cfg(feature = "hydrate")]
pub mod browser;

use std::rc::Rc;

pub use event::{Listeners, Subscription};

use crate::ui::counter::CounterTone;
use crate::ui::toast::{Toast, ToastId};
use crate::ui::validate::Validity;

/// Field events the components listen for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    Input,
    Blur,
}

/// Click delivered to a listener; set `default_prevented` to cancel the action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickEvent {
    pub default_prevented: bool,
}

impl ClickEvent {
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// An `input`, `textarea` or `select`.
pub trait Field {
    fn id(&self) -> Option<String>;
    /// The `name` attribute, when present and non-empty.
    fn name(&self) -> Option<String>;
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    fn is_required(&self) -> bool;
    /// Parsed `maxlength` attribute.
    fn max_length(&self) -> Option<usize>;
    /// Whether a form submission would include this field.
    fn is_submittable(&self) -> bool {
        true
    }
    /// Current valid/invalid marker; `None` until first checked.
    fn validity(&self) -> Option<Validity>;
    fn set_validity(&self, validity: Validity);
    fn on(&self, event: FieldEvent, callback: Box<dyn FnMut()>) -> Subscription;
}

pub trait Form {
    fn id(&self) -> String;
    /// Every field of the form, in document order.
    fn fields(&self) -> Vec<Rc<dyn Field>>;
    fn on_submit(&self, callback: Box<dyn FnMut()>) -> Subscription;

    /// First field whose `name` matches.
    fn field_named(&self, name: &str) -> Option<Rc<dyn Field>> {
        self.fields()
            .into_iter()
            .find(|field| field.name().as_deref() == Some(name))
    }
}

/// Any other element: list items, flash banners, overlays, confirm targets.
pub trait Element {
    fn id(&self) -> Option<String>;
    fn text_content(&self) -> String;
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_hidden(&self, hidden: bool);
    fn is_hidden(&self) -> bool;
    /// Start an opacity transition to fully transparent.
    fn fade_out(&self, duration_ms: u32);
    /// Smooth-scroll the viewport so the element's top is visible.
    fn scroll_into_view(&self);
    fn remove(&self);
    fn on_click(&self, callback: Box<dyn FnMut(&mut ClickEvent)>) -> Subscription;
}

/// Text label created next to a field by the character counter.
pub trait Label {
    fn set_text(&self, text: &str);
    fn set_tone(&self, tone: CounterTone);
}

/// The page-level toast container.
pub trait ToastSurface {
    fn mount(&self, toast: &Toast);
    fn begin_exit(&self, id: ToastId, exit_ms: u32);
    fn unmount(&self, id: ToastId);
}

/// The document a set of components is attached to.
pub trait Page {
    fn form(&self, id: &str) -> Option<Rc<dyn Form>>;
    /// Field by id, whether or not it belongs to a form.
    fn field(&self, id: &str) -> Option<Rc<dyn Field>>;
    fn element(&self, id: &str) -> Option<Rc<dyn Element>>;
    fn elements_by_class(&self, class: &str) -> Vec<Rc<dyn Element>>;
    fn elements_with_attribute(&self, attribute: &str) -> Vec<Rc<dyn Element>>;
    fn required_fields(&self) -> Vec<Rc<dyn Field>>;
    fn textareas(&self) -> Vec<Rc<dyn Field>>;
    /// Create a counter label adjacent to the field with `field_id`.
    fn counter_label(&self, field_id: &str) -> Option<Rc<dyn Label>>;
    /// Find or create the toast container; `None` while the page has no
    /// body to hold it.
    fn toast_surface(&self) -> Option<Rc<dyn ToastSurface>>;
    /// Append a full-page loading overlay carrying `id`.
    fn append_overlay(&self, id: &str);
    /// Blocking confirmation prompt.
    fn confirm(&self, message: &str) -> bool;
}
