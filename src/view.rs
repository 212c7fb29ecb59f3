//! View contracts for the two page components.
//!
//! Business logic never touches rendering directly: the form orchestrator
//! and the translator emit their results through these traits, and the page
//! (or an in-memory stand-in) applies them. [`InMemoryForm`] and
//! [`InMemoryPage`] are the concrete implementations used by the driver
//! binary and the test suite.

use crate::validate::Field;
use std::collections::{BTreeMap, HashMap};

/// Transient status banners the contact form can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Banner {
    Loading,
    Success,
    Error,
    ConfigError,
}

/// Rendering surface for the contact form.
pub trait FormView {
    /// Current value of a field, or `None` when the input is absent from
    /// the markup. Absent fields read as empty downstream.
    fn field_value(&self, field: Field) -> Option<String>;

    /// Show an inline error next to a field.
    fn show_field_error(&mut self, field: Field, message: &str);

    /// Clear one field's inline error.
    fn clear_field_error(&mut self, field: Field);

    /// Clear every inline error.
    fn clear_field_errors(&mut self);

    /// Enable or disable the submit control.
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Show a status banner with the given text.
    fn show_banner(&mut self, banner: Banner, text: &str);

    /// Hide a status banner if it is visible.
    fn hide_banner(&mut self, banner: Banner);

    /// Reset all field values to empty.
    fn reset_fields(&mut self);
}

/// A page element carrying a translation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedNode {
    pub id: usize,
    /// Dot-separated key path into the dictionary.
    pub key: String,
    /// Whether the element declares a placeholder attribute
    /// (input/textarea); translated text goes there instead of the content.
    pub accepts_placeholder: bool,
}

/// Rendering surface for the translation applier.
pub trait PageView {
    /// Every element carrying a translation key, in document order.
    fn tagged_nodes(&self) -> Vec<TaggedNode>;

    fn set_text(&mut self, id: usize, value: &str);

    fn set_placeholder(&mut self, id: usize, value: &str);

    /// Set the document's language attribute.
    fn set_document_lang(&mut self, code: &str);

    /// Set the page title.
    fn set_title(&mut self, title: &str);

    /// Reflect the active language in the selector control.
    fn set_selector_value(&mut self, code: &str);
}

// ==================== In-memory implementations ====================

/// In-memory [`FormView`].
#[derive(Debug, Clone)]
pub struct InMemoryForm {
    /// Field values; a missing entry models an input absent from the markup.
    pub fields: HashMap<Field, String>,
    pub field_errors: BTreeMap<Field, String>,
    pub banners: Vec<(Banner, String)>,
    /// Every `show_banner` call, in order. Lets tests observe banners that
    /// have already auto-hidden by the time a submission returns.
    pub banner_log: Vec<(Banner, String)>,
    pub submit_enabled: bool,
}

impl InMemoryForm {
    /// A form with all four fields present and empty.
    pub fn new() -> Self {
        let fields = Field::ALL
            .iter()
            .map(|f| (*f, String::new()))
            .collect();
        Self {
            fields,
            field_errors: BTreeMap::new(),
            banners: Vec::new(),
            banner_log: Vec::new(),
            submit_enabled: true,
        }
    }

    pub fn set_field(&mut self, field: Field, value: &str) {
        self.fields.insert(field, value.to_string());
    }

    /// Drop a field entirely, as if its input were missing from the page.
    pub fn remove_field(&mut self, field: Field) {
        self.fields.remove(&field);
    }

    pub fn banner_text(&self, banner: Banner) -> Option<&str> {
        self.banners
            .iter()
            .find(|(b, _)| *b == banner)
            .map(|(_, text)| text.as_str())
    }

    pub fn banner_visible(&self, banner: Banner) -> bool {
        self.banner_text(banner).is_some()
    }
}

impl Default for InMemoryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormView for InMemoryForm {
    fn field_value(&self, field: Field) -> Option<String> {
        self.fields.get(&field).cloned()
    }

    fn show_field_error(&mut self, field: Field, message: &str) {
        self.field_errors.insert(field, message.to_string());
    }

    fn clear_field_error(&mut self, field: Field) {
        self.field_errors.remove(&field);
    }

    fn clear_field_errors(&mut self) {
        self.field_errors.clear();
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn show_banner(&mut self, banner: Banner, text: &str) {
        self.banners.retain(|(b, _)| *b != banner);
        self.banners.push((banner, text.to_string()));
        self.banner_log.push((banner, text.to_string()));
    }

    fn hide_banner(&mut self, banner: Banner) {
        self.banners.retain(|(b, _)| *b != banner);
    }

    fn reset_fields(&mut self) {
        for value in self.fields.values_mut() {
            value.clear();
        }
    }
}

/// One translatable element of an [`InMemoryPage`].
#[derive(Debug, Clone)]
pub struct PageNode {
    pub key: String,
    pub accepts_placeholder: bool,
    pub text: String,
    pub placeholder: String,
}

impl PageNode {
    /// A text element tagged with a translation key.
    pub fn text(key: &str) -> Self {
        Self {
            key: key.to_string(),
            accepts_placeholder: false,
            text: String::new(),
            placeholder: String::new(),
        }
    }

    /// An input/textarea element tagged with a translation key.
    pub fn input(key: &str) -> Self {
        Self {
            key: key.to_string(),
            accepts_placeholder: true,
            text: String::new(),
            placeholder: String::new(),
        }
    }
}

/// In-memory [`PageView`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryPage {
    pub nodes: Vec<PageNode>,
    pub document_lang: String,
    pub title: String,
    pub selector_value: String,
}

impl InMemoryPage {
    pub fn with_nodes(nodes: Vec<PageNode>) -> Self {
        Self {
            nodes,
            ..Self::default()
        }
    }
}

impl PageView for InMemoryPage {
    fn tagged_nodes(&self) -> Vec<TaggedNode> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(id, node)| TaggedNode {
                id,
                key: node.key.clone(),
                accepts_placeholder: node.accepts_placeholder,
            })
            .collect()
    }

    fn set_text(&mut self, id: usize, value: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.text = value.to_string();
        }
    }

    fn set_placeholder(&mut self, id: usize, value: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.placeholder = value.to_string();
        }
    }

    fn set_document_lang(&mut self, code: &str) {
        self.document_lang = code.to_string();
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_selector_value(&mut self, code: &str) {
        self.selector_value = code.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== InMemoryForm Tests ====================

    #[test]
    fn test_new_form_has_all_fields_empty() {
        let form = InMemoryForm::new();
        for field in Field::ALL {
            assert_eq!(form.field_value(field), Some(String::new()));
        }
        assert!(form.submit_enabled);
    }

    #[test]
    fn test_removed_field_reads_as_none() {
        let mut form = InMemoryForm::new();
        form.remove_field(Field::Subject);
        assert_eq!(form.field_value(Field::Subject), None);
    }

    #[test]
    fn test_show_banner_replaces_same_kind() {
        let mut form = InMemoryForm::new();
        form.show_banner(Banner::Error, "first");
        form.show_banner(Banner::Error, "second");

        assert_eq!(form.banners.len(), 1);
        assert_eq!(form.banner_text(Banner::Error), Some("second"));
    }

    #[test]
    fn test_hide_banner_only_hides_its_kind() {
        let mut form = InMemoryForm::new();
        form.show_banner(Banner::Loading, "Sending...");
        form.show_banner(Banner::Success, "Sent!");
        form.hide_banner(Banner::Loading);

        assert!(!form.banner_visible(Banner::Loading));
        assert!(form.banner_visible(Banner::Success));
    }

    #[test]
    fn test_reset_fields_keeps_missing_fields_missing() {
        let mut form = InMemoryForm::new();
        form.set_field(Field::Name, "Jane");
        form.remove_field(Field::Message);
        form.reset_fields();

        assert_eq!(form.field_value(Field::Name), Some(String::new()));
        assert_eq!(form.field_value(Field::Message), None);
    }

    // ==================== InMemoryPage Tests ====================

    #[test]
    fn test_tagged_nodes_preserve_document_order() {
        let page = InMemoryPage::with_nodes(vec![
            PageNode::text("nav.home"),
            PageNode::input("contact.name_placeholder"),
        ]);

        let nodes = page.tagged_nodes();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].key, "nav.home");
        assert!(!nodes[0].accepts_placeholder);
        assert_eq!(nodes[1].id, 1);
        assert!(nodes[1].accepts_placeholder);
    }

    #[test]
    fn test_set_text_out_of_range_is_noop() {
        let mut page = InMemoryPage::with_nodes(vec![PageNode::text("nav.home")]);
        page.set_text(5, "nothing");
        assert_eq!(page.nodes[0].text, "");
    }
}
