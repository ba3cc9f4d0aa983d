//! Character counters for text fields.

use std::rc::Rc;

use crate::host::{FieldEvent, Page, Subscription};

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CounterTone {
    #[default]
    Normal,
    OverLimit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterReading {
    pub length: usize,
    pub max: Option<usize>,
}

impl CounterReading {
    /// Measure `value` in UTF-16 code units, the unit `maxlength` limits.
    /// A maximum of zero means "no maximum".
    pub fn measure(value: &str, max: Option<usize>) -> Self {
        Self { length: value.encode_utf16().count(), max: max.filter(|m| *m > 0) }
    }

    pub fn text(&self) -> String {
        match self.max {
            Some(max) => format!("{} / {max} characters", self.length),
            None => format!("{} characters", self.length),
        }
    }

    /// `None` when there is no maximum to compare against.
    pub fn tone(&self) -> Option<CounterTone> {
        let max = self.max?;
        Some(if self.length > max { CounterTone::OverLimit } else { CounterTone::Normal })
    }
}

/// Add a counter label next to the field and keep it current.
///
/// Renders once immediately. Returns `None` when the field is missing.
pub fn attach_counter(page: &dyn Page, field_id: &str, max: Option<usize>) -> Option<Subscription> {
    let field = page.field(field_id)?;
    let label = page.counter_label(field_id)?;

    let target = Rc::clone(&field);
    let render = move || {
        let reading = CounterReading::measure(&target.value(), max);
        label.set_text(&reading.text());
        if let Some(tone) = reading.tone() {
            label.set_tone(tone);
        }
    };
    render();
    Some(field.on(FieldEvent::Input, Box::new(render)))
}

/// Counters for every textarea that declares a `maxlength`.
pub fn attach_textarea_counters(page: &dyn Page) -> Vec<Subscription> {
    page.textareas()
        .into_iter()
        .filter_map(|textarea| {
            let max = textarea.max_length()?;
            let id = textarea.id()?;
            attach_counter(page, &id, Some(max))
        })
        .collect()
}
