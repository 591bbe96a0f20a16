//! # Select Widget
//!
//! A searchable option picker supporting single or multiple selection.
//!
//! The widget is *controlled*: it never stores the selection. Callers pass the
//! current selection in and receive the complete new selection back from
//! [`SelectWidget::pick`]. The only state kept here is the open flag, the
//! search text and a keyboard highlight.
//!
//! ```text
//!            header click                  header click / outside click /
//!   Closed ───────────────▶ Open ──────▶   single-mode pick / Esc ──▶ Closed
//!                            │ ▲
//!                            └─┘ multi-mode pick, search edit, highlight move
//! ```

use super::pointer::{PointerRegistry, PointerSubscription};
use ratatui::layout::Rect;
use std::cell::Cell;
use std::rc::Rc;

/// One choice in a [`SelectWidget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub icon: Option<String>,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[derive(Debug)]
pub struct SelectWidget {
    options: Vec<SelectOption>,
    placeholder: String,
    multiple: bool,
    /// Shared with the outside-pointer callback, which closes the widget.
    open: Rc<Cell<bool>>,
    search: String,
    highlighted: usize,
    subscription: PointerSubscription,
}

impl SelectWidget {
    /// Create the widget and subscribe it to outside-pointer events. The
    /// subscription lives exactly as long as the widget.
    pub fn mount(
        registry: &PointerRegistry,
        options: Vec<SelectOption>,
        placeholder: impl Into<String>,
        multiple: bool,
    ) -> Self {
        let open = Rc::new(Cell::new(false));
        let dismiss = Rc::clone(&open);
        let subscription = registry.subscribe(move || dismiss.set(false));

        Self {
            options,
            placeholder: placeholder.into(),
            multiple,
            open,
            search: String::new(),
            highlighted: 0,
            subscription,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Index into [`Self::filtered_options`] of the keyboard highlight.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Header click.
    pub fn toggle(&mut self) {
        self.open.set(!self.open.get());
        self.clamp_highlight();
    }

    pub fn close(&mut self) {
        self.open.set(false);
    }

    /// Options whose label contains the search text, ignoring case.
    pub fn filtered_options(&self) -> Vec<&SelectOption> {
        let needle = self.search.to_lowercase();
        self.options
            .iter()
            .filter(|option| option.label.to_lowercase().contains(&needle))
            .collect()
    }

    /// Header text for the given selection.
    pub fn display_text(&self, selected: &[String]) -> String {
        if self.multiple {
            return if selected.is_empty() {
                self.placeholder.clone()
            } else {
                format!("{} selected", selected.len())
            };
        }

        selected
            .first()
            .and_then(|value| self.options.iter().find(|o| &o.value == value))
            .map_or_else(|| self.placeholder.clone(), |o| o.label.clone())
    }

    pub fn is_selected(&self, value: &str, selected: &[String]) -> bool {
        if self.multiple {
            selected.iter().any(|v| v == value)
        } else {
            selected.first().is_some_and(|v| v == value)
        }
    }

    /// Choose `value` and return the complete new selection.
    ///
    /// Single mode replaces the selection and closes. Multi mode toggles
    /// membership, appending new values, and stays open.
    pub fn pick(&mut self, value: &str, selected: &[String]) -> Vec<String> {
        if !self.multiple {
            self.open.set(false);
            return vec![value.to_string()];
        }

        if selected.iter().any(|v| v == value) {
            selected.iter().filter(|v| *v != value).cloned().collect()
        } else {
            let mut next = selected.to_vec();
            next.push(value.to_string());
            next
        }
    }

    /// Pick whatever the keyboard highlight is on, if anything.
    pub fn pick_highlighted(&mut self, selected: &[String]) -> Option<Vec<String>> {
        let value = self
            .filtered_options()
            .get(self.highlighted)
            .map(|option| option.value.clone())?;
        Some(self.pick(&value, selected))
    }

    pub fn search_push_char(&mut self, c: char) {
        self.search.push(c);
        self.highlighted = 0;
    }

    pub fn search_pop_char(&mut self) {
        self.search.pop();
        self.highlighted = 0;
    }

    pub fn highlight_next(&mut self) {
        let count = self.filtered_options().len();
        if count > 0 {
            self.highlighted = (self.highlighted + 1) % count;
        }
    }

    pub fn highlight_previous(&mut self) {
        let count = self.filtered_options().len();
        if count > 0 {
            self.highlighted = if self.highlighted == 0 {
                count - 1
            } else {
                self.highlighted - 1
            };
        }
    }

    /// Record where the widget (header plus open panel) was drawn this frame.
    pub fn set_region(&self, region: Option<Rect>) {
        self.subscription.set_region(region);
    }

    fn clamp_highlight(&mut self) {
        let count = self.filtered_options().len();
        if self.highlighted >= count {
            self.highlighted = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("USA", "United States").with_icon("🇺🇸"),
            SelectOption::new("India", "India").with_icon("🇮🇳"),
            SelectOption::new("UK", "United Kingdom").with_icon("🇬🇧"),
        ]
    }

    fn single(registry: &PointerRegistry) -> SelectWidget {
        SelectWidget::mount(registry, options(), "Country", false)
    }

    fn multi(registry: &PointerRegistry) -> SelectWidget {
        SelectWidget::mount(registry, options(), "Country", true)
    }

    #[test]
    fn test_starts_closed() {
        let registry = PointerRegistry::new();
        let widget = single(&registry);
        assert!(!widget.is_open());
        assert_eq!(widget.search_text(), "");
    }

    #[test]
    fn test_header_toggles() {
        let registry = PointerRegistry::new();
        let mut widget = single(&registry);
        widget.toggle();
        assert!(widget.is_open());
        widget.toggle();
        assert!(!widget.is_open());
    }

    #[test]
    fn test_single_mode_replaces_and_closes() {
        let registry = PointerRegistry::new();
        let mut widget = single(&registry);

        widget.toggle();
        let selection = widget.pick("USA", &[]);
        assert_eq!(selection, vec!["USA".to_string()]);
        assert!(!widget.is_open());

        widget.toggle();
        let selection = widget.pick("UK", &selection);
        assert_eq!(selection, vec!["UK".to_string()]);
        assert!(!widget.is_open());
    }

    #[test]
    fn test_multi_mode_accumulates_in_pick_order() {
        let registry = PointerRegistry::new();
        let mut widget = multi(&registry);

        widget.toggle();
        let selection = widget.pick("UK", &[]);
        let selection = widget.pick("USA", &selection);
        assert_eq!(selection, vec!["UK".to_string(), "USA".to_string()]);
        assert!(widget.is_open());
    }

    #[test]
    fn test_multi_mode_second_pick_toggles_off() {
        let registry = PointerRegistry::new();
        let mut widget = multi(&registry);

        widget.toggle();
        let selection = widget.pick("India", &[]);
        let selection = widget.pick("India", &selection);
        assert!(selection.is_empty());
        assert!(widget.is_open());
    }

    #[test]
    fn test_search_filters_by_label_without_touching_options() {
        let registry = PointerRegistry::new();
        let mut widget = single(&registry);

        for c in "UNITED".chars() {
            widget.search_push_char(c);
        }
        let labels: Vec<&str> = widget
            .filtered_options()
            .iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(labels, vec!["United States", "United Kingdom"]);
        assert_eq!(widget.options().len(), 3);

        widget.search_pop_char();
        assert_eq!(widget.search_text(), "UNITE");
    }

    #[test]
    fn test_display_text() {
        let registry = PointerRegistry::new();
        let single = single(&registry);
        assert_eq!(single.display_text(&[]), "Country");
        assert_eq!(single.display_text(&["UK".to_string()]), "United Kingdom");
        assert_eq!(single.display_text(&["Mars".to_string()]), "Country");

        let multi = multi(&registry);
        assert_eq!(multi.display_text(&[]), "Country");
        assert_eq!(
            multi.display_text(&["UK".to_string(), "USA".to_string()]),
            "2 selected"
        );
    }

    #[test]
    fn test_outside_click_closes_only_when_outside() {
        let registry = PointerRegistry::new();
        let mut widget = single(&registry);
        widget.toggle();
        widget.set_region(Some(Rect::new(0, 0, 20, 8)));

        registry.pointer_down(5, 5);
        assert!(widget.is_open());

        registry.pointer_down(40, 5);
        assert!(!widget.is_open());
    }

    #[test]
    fn test_dropping_widget_releases_listener() {
        let registry = PointerRegistry::new();
        {
            let _a = single(&registry);
            let _b = multi(&registry);
            assert_eq!(registry.len(), 2);
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_keyboard_highlight_picks_filtered_option() {
        let registry = PointerRegistry::new();
        let mut widget = single(&registry);
        widget.toggle();
        widget.search_push_char('i');
        // "United States", "India", "United Kingdom" all contain an 'i'.
        widget.highlight_next();
        let selection = widget.pick_highlighted(&[]).expect("option highlighted");
        assert_eq!(selection, vec!["India".to_string()]);

        widget.highlight_previous();
        assert_eq!(widget.highlighted(), 0);
    }

    #[test]
    fn test_pick_highlighted_with_no_matches() {
        let registry = PointerRegistry::new();
        let mut widget = single(&registry);
        widget.search_push_char('z');
        assert!(widget.pick_highlighted(&[]).is_none());
    }
}
