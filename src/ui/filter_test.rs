use super::*;
use crate::host::memory::{ElementSpec, FieldSpec, MemoryElement, MemoryPage};

fn fruit_page() -> (MemoryPage, Vec<MemoryElement>) {
    let page = MemoryPage::new();
    let items = ["Apples", "Bananas", "Grapes"]
        .iter()
        .map(|name| page.add_element(ElementSpec::new().class("fruit").text(name)))
        .collect();
    (page, items)
}

fn visible(items: &[MemoryElement]) -> Vec<String> {
    items
        .iter()
        .filter(|item| !item.is_hidden())
        .map(|item| item.text_content())
        .collect()
}

#[test]
fn matches_is_case_insensitive() {
    assert!(matches("Bananas", "AN"));
    assert!(matches("Bananas", ""));
    assert!(!matches("Grapes", "an"));
}

#[test]
fn query_an_keeps_only_bananas() {
    let (page, items) = fruit_page();
    let shown = apply_filter(&page.elements_by_class("fruit"), "an");
    assert_eq!(shown, 1);
    assert_eq!(visible(&items), vec!["Bananas"]);
}

#[test]
fn search_input_filters_on_every_keystroke() {
    let (page, items) = fruit_page();
    let search = page.add_field(FieldSpec::input("q").id("search"));
    let _sub = filter_list(&page.shared(), "search", "fruit").unwrap();

    search.type_text("AP");
    assert_eq!(visible(&items), vec!["Apples", "Grapes"]);

    search.type_text("");
    assert_eq!(visible(&items), vec!["Apples", "Bananas", "Grapes"]);
}

#[test]
fn items_added_after_attach_are_filtered() {
    let (page, mut items) = fruit_page();
    let search = page.add_field(FieldSpec::input("q").id("search"));
    let _sub = filter_list(&page.shared(), "search", "fruit").unwrap();

    items.push(page.add_element(ElementSpec::new().class("fruit").text("Mango")));
    search.type_text("mango");
    assert_eq!(visible(&items), vec!["Mango"]);
}

#[test]
fn other_classes_are_untouched() {
    let (page, _items) = fruit_page();
    let veg = page.add_element(ElementSpec::new().class("veg").text("Carrot"));
    let search = page.add_field(FieldSpec::input("q").id("search"));
    let _sub = filter_list(&page.shared(), "search", "fruit").unwrap();

    search.type_text("zzz");
    assert!(!veg.is_hidden());
}

#[test]
fn missing_search_field_attaches_nothing() {
    let (page, _items) = fruit_page();
    assert!(filter_list(&page.shared(), "absent", "fruit").is_none());
}
