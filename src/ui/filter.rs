//! Live, case-insensitive list filtering.

use std::rc::Rc;

use crate::host::{Element, FieldEvent, Page, Subscription};

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Whether `text` contains `query`, ignoring case. An empty query matches.
pub fn matches(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Show matching items and hide the rest; returns how many stay visible.
pub fn apply_filter(items: &[Rc<dyn Element>], query: &str) -> usize {
    items
        .iter()
        .filter(|item| {
            let visible = matches(&item.text_content(), query);
            item.set_hidden(!visible);
            visible
        })
        .count()
}

/// Re-filter every `.item_class` element on each input of the search field.
///
/// Items are looked up on every keystroke, so elements added later are
/// filtered too. Returns `None` when the search field does not exist.
pub fn filter_list(page: &Rc<dyn Page>, search_input_id: &str, item_class: &str) -> Option<Subscription> {
    let search = page.field(search_input_id)?;
    let target = Rc::clone(&search);
    let page = Rc::clone(page);
    let item_class = item_class.to_owned();
    Some(search.on(
        FieldEvent::Input,
        Box::new(move || {
            let items = page.elements_by_class(&item_class);
            let visible = apply_filter(&items, &target.value());
            log::trace!("filter .{item_class}: {visible}/{} visible", items.len());
        }),
    ))
}
