//! Markup Discovery
//!
//! Reads the server-rendered creator page: panel roots, their category
//! containers and any items already rendered inside them.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList};

use crate::config::{Markup, CONFIG_ELEMENT_ID};
use crate::models::{Category, Item, Panel};
use crate::registry::Registry;

/// A registered category container and the items it held at load time
pub struct Container {
    pub panel: Panel,
    pub category: Category,
    pub element: HtmlElement,
    pub seed: Vec<Item>,
}

pub struct Discovery {
    pub registry: Registry,
    pub containers: Vec<Container>,
}

pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Register a container label. `None` for unknown labels and for a
/// category the panel already has.
pub fn register_label(registry: &mut Registry, panel: Panel, label: &str) -> Option<Category> {
    let category = match label.parse::<Category>() {
        Ok(category) => category,
        Err(e) => {
            log::warn!("{} container skipped: {}", panel, e);
            return None;
        }
    };
    if !registry.register(panel, category) {
        log::warn!("{} has a second {} container, keeping the first", panel, category);
        return None;
    }
    Some(category)
}

/// Build an item from a rendered element. Attributes are not validated.
pub fn read_item(element: &Element, category: Category, markup: &Markup) -> Item {
    let id = element.get_attribute("data-id").unwrap_or_default();
    let path = element
        .get_attribute("src")
        .or_else(|| element.get_attribute("data-path"))
        .unwrap_or_default();
    let in_wardrobe = !element.class_list().contains(&markup.not_in_wardrobe_class);
    Item::new(id, path, category, in_wardrobe)
}

/// Scan each panel root for category containers. Missing markup gives an
/// empty registry.
pub fn discover(document: &Document, markup: &Markup) -> Discovery {
    let mut registry = Registry::new();
    let mut containers = Vec::new();

    for panel in Panel::ALL {
        let Some(root) = document.get_element_by_id(markup.root_id(panel)) else {
            continue;
        };
        let Ok(found) = root.query_selector_all(&markup.category_container) else {
            log::warn!("invalid container selector {:?}", markup.category_container);
            continue;
        };

        for element in elements(&found) {
            let Ok(element) = element.dyn_into::<HtmlElement>() else {
                continue;
            };
            let label = element.get_attribute("data-category").unwrap_or_default();
            let Some(category) = register_label(&mut registry, panel, &label) else {
                continue;
            };
            let seed = match element.query_selector_all("[data-id]") {
                Ok(list) => elements(&list)
                    .iter()
                    .map(|item| read_item(item, category, markup))
                    .collect(),
                Err(_) => Vec::new(),
            };
            containers.push(Container { panel, category, element, seed });
        }
    }

    log::debug!("discovered {} category container(s)", containers.len());
    Discovery { registry, containers }
}

/// Raw JSON of the embedded page config, if present
pub fn config_json(document: &Document) -> Option<String> {
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_label() {
        let mut registry = Registry::new();

        assert_eq!(register_label(&mut registry, Panel::Outfit, "shoes"), Some(Category::Shoes));
        assert_eq!(register_label(&mut registry, Panel::Outfit, "shoes"), None);
        assert_eq!(register_label(&mut registry, Panel::Outfit, "socks"), None);
        assert_eq!(register_label(&mut registry, Panel::Outfit, ""), None);
        assert_eq!(register_label(&mut registry, Panel::Wardrobe, "shoes"), Some(Category::Shoes));

        assert_eq!(registry.categories(Panel::Outfit), &[Category::Shoes]);
    }
}
