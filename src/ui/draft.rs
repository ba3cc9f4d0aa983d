//! Draft auto-save for long-form inputs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The ask-question and answer forms persist their named fields to local
//! storage on every keystroke, so a reload before submit loses nothing.
//! One key per form; each save fully replaces the previous record and a
//! submit deletes it.
//!
//! TRADE-OFFS
//! ==========
//! A stored record that no longer decodes is treated as absent: it is
//! logged and left in place for the next save to overwrite, and the form is
//! not touched.

use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::consts::DRAFT_LOADED_MESSAGE;
use crate::error::UiError;
use crate::host::{FieldEvent, Form, Page, Subscription};
use crate::runtime::KeyValueStore;
use crate::runtime::storage::{load_json, save_json};
use crate::ui::toast::ToastCenter;

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

/// Field name → value, serialized as a flat JSON object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftRecord {
    fields: BTreeMap<String, String>,
}

impl DraftRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot every named, submittable field of `form`.
    ///
    /// When several fields share a name the last one wins.
    pub fn capture(form: &dyn Form) -> Self {
        let fields = form
            .fields()
            .into_iter()
            .filter(|field| field.is_submittable())
            .filter_map(|field| Some((field.name()?, field.value())))
            .collect();
        Self { fields }
    }

    /// Write each value into the same-named field; returns how many matched.
    pub fn apply(&self, form: &dyn Form) -> usize {
        self.fields
            .iter()
            .filter_map(|(name, value)| {
                let field = form.field_named(name)?;
                field.set_value(value);
                Some(())
            })
            .count()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Outcome of [`DraftManager::load`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftLoad {
    /// Nothing stored under the key.
    Absent,
    /// Record applied; `matched` fields received a value.
    Restored { matched: usize },
    /// Stored payload could not be read and was ignored.
    Unreadable,
}

struct Inner {
    form: Rc<dyn Form>,
    key: String,
    store: Rc<dyn KeyValueStore>,
    toasts: ToastCenter,
}

impl Inner {
    fn load(&self) -> DraftLoad {
        match load_json::<DraftRecord>(self.store.as_ref(), &self.key) {
            Ok(None) => DraftLoad::Absent,
            Ok(Some(record)) => {
                let matched = record.apply(self.form.as_ref());
                self.toasts.info(DRAFT_LOADED_MESSAGE);
                log::debug!("draft loaded: key={} fields={} matched={matched}", self.key, record.len());
                DraftLoad::Restored { matched }
            }
            Err(err) => {
                log::warn!("ignoring stored draft: key={} error={err}", self.key);
                DraftLoad::Unreadable
            }
        }
    }

    fn save(&self) -> Result<(), UiError> {
        let record = DraftRecord::capture(self.form.as_ref());
        save_json(self.store.as_ref(), &self.key, &record)?;
        log::debug!("draft saved: key={} fields={}", self.key, record.len());
        Ok(())
    }

    fn clear(&self) -> Result<(), UiError> {
        self.store.remove(&self.key)?;
        log::debug!("draft cleared: key={}", self.key);
        Ok(())
    }
}

/// Keeps one form's draft in sync with storage.
///
/// Dropping the manager detaches its listeners; the stored draft stays.
pub struct DraftManager {
    inner: Rc<Inner>,
    _subscriptions: Vec<Subscription>,
}

impl DraftManager {
    /// Restore any stored draft into the form, then save on every input and
    /// clear on submit.
    ///
    /// Returns `None`, attaching nothing, when the page has no such form.
    pub fn attach(
        page: &dyn Page,
        form_id: &str,
        storage_key: &str,
        store: Rc<dyn KeyValueStore>,
        toasts: ToastCenter,
    ) -> Option<Self> {
        let form = page.form(form_id)?;
        let inner = Rc::new(Inner { form: Rc::clone(&form), key: storage_key.to_owned(), store, toasts });
        inner.load();

        let mut subscriptions: Vec<Subscription> = form
            .fields()
            .iter()
            .map(|field| {
                let inner = Rc::clone(&inner);
                field.on(
                    FieldEvent::Input,
                    Box::new(move || {
                        if let Err(err) = inner.save() {
                            log::warn!("draft save failed: key={} error={err}", inner.key);
                        }
                    }),
                )
            })
            .collect();

        let on_submit = Rc::clone(&inner);
        subscriptions.push(form.on_submit(Box::new(move || {
            if let Err(err) = on_submit.clear() {
                log::warn!("draft clear failed: key={} error={err}", on_submit.key);
            }
        })));

        Some(Self { inner, _subscriptions: subscriptions })
    }

    pub fn load(&self) -> DraftLoad {
        self.inner.load()
    }

    pub fn save(&self) -> Result<(), UiError> {
        self.inner.save()
    }

    pub fn clear(&self) -> Result<(), UiError> {
        self.inner.clear()
    }

    pub fn storage_key(&self) -> &str {
        &self.inner.key
    }

    pub fn form_id(&self) -> String {
        self.inner.form.id()
    }
}

impl std::fmt::Debug for DraftManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftManager")
            .field("form_id", &self.inner.form.id())
            .field("key", &self.inner.key)
            .finish_non_exhaustive()
    }
}
