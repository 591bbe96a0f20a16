use crate::listing::{derive, Clock, Derived, Listing, Query, SortKey, SourceError};
use crate::ui::clipboard;
use crate::ui::filters::{self, FilterField, FilterSelects};
use crate::ui::hit::HitMap;
use crate::ui::pointer::PointerRegistry;
use crate::ui::select::SelectWidget;
use crate::ui::theme::Theme;
use std::collections::HashSet;

/// Where the initial data load stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

pub struct App {
    pub listings: Vec<Listing>,
    pub load_state: LoadState,
    /// Search text, filter criteria, sort key and page.
    pub query: Query,
    pub favorites: HashSet<String>,
    /// Listing shown in the detail overlay.
    pub open_listing: Option<Listing>,
    pub dark_mode: bool,
    /// Keyboard cursor within the visible page.
    pub selected_index: usize,
    pub search_mode: bool,
    pub show_info: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Dropdown receiving keyboard input, if one is open.
    pub active_select: Option<FilterField>,
    selects: FilterSelects,
    pointer: PointerRegistry,
    light_theme: &'static Theme,
    dark_theme: &'static Theme,
    clock: Box<dyn Clock>,
}

impl App {
    pub fn new(light_theme: &'static Theme, dark_theme: &'static Theme, clock: Box<dyn Clock>) -> Self {
        let pointer = PointerRegistry::new();
        let selects = FilterSelects::mount(&pointer, &[]);

        Self {
            listings: Vec::new(),
            load_state: LoadState::Loading,
            query: Query::default(),
            favorites: HashSet::new(),
            open_listing: None,
            dark_mode: false,
            selected_index: 0,
            search_mode: false,
            show_info: false,
            should_quit: false,
            status_message: None,
            active_select: None,
            selects,
            pointer,
            light_theme,
            dark_theme,
            clock,
        }
    }

    /// Install the result of the initial load. A failure leaves the dataset
    /// and every other field untouched apart from the load state.
    pub fn finish_loading(&mut self, result: Result<Vec<Listing>, SourceError>) {
        match result {
            Ok(listings) => {
                tracing::info!(count = listings.len(), "Listings loaded");
                // Remount so the country/industry options reflect the data.
                // The previous widgets drop here and release their listeners.
                self.selects = FilterSelects::mount(&self.pointer, &listings);
                self.active_select = None;
                self.listings = listings;
                self.load_state = LoadState::Ready;
                self.on_query_changed();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load listings");
                self.load_state = LoadState::Failed(e.to_string());
            }
        }
    }

    pub fn now(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Run the pipeline over the current state.
    pub fn derived(&self) -> Derived<'_> {
        derive(&self.listings, &self.query, self.now())
    }

    pub fn theme(&self) -> &'static Theme {
        if self.dark_mode {
            self.dark_theme
        } else {
            self.light_theme
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        tracing::debug!(dark_mode = self.dark_mode, "Theme switched");
    }

    pub fn toggle_info(&mut self) {
        self.show_info = !self.show_info;
    }

    // -- Search ---------------------------------------------------------------

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    /// Leave search mode, keeping the text.
    pub fn confirm_search(&mut self) {
        self.search_mode = false;
    }

    /// Leave search mode and drop the text.
    pub fn cancel_search(&mut self) {
        self.search_mode = false;
        self.set_search(String::new());
    }

    pub fn set_search(&mut self, text: String) {
        if self.query.search != text {
            self.query.search = text;
            self.on_query_changed();
        }
    }

    pub fn search_push_char(&mut self, c: char) {
        self.query.search.push(c);
        self.on_query_changed();
    }

    pub fn search_pop_char(&mut self) {
        if self.query.search.pop().is_some() {
            self.on_query_changed();
        }
    }

    // -- Sort -----------------------------------------------------------------

    pub fn set_sort(&mut self, key: SortKey) {
        if self.query.sort != key {
            self.query.sort = key;
            self.on_query_changed();
        }
    }

    pub fn cycle_sort(&mut self) {
        self.set_sort(self.query.sort.next());
    }

    // -- Filters --------------------------------------------------------------

    pub fn selects(&self) -> &FilterSelects {
        &self.selects
    }

    pub fn pointer(&self) -> &PointerRegistry {
        &self.pointer
    }

    /// Apply a complete new selection for one dropdown.
    pub fn change_filter(&mut self, field: FilterField, values: &[String]) {
        filters::apply_selection(&mut self.query.criteria, field, values);
        tracing::debug!(?field, ?values, "Filter changed");
        self.on_query_changed();
    }

    pub fn clear_filters(&mut self) {
        self.query.criteria = Default::default();
        self.query.search.clear();
        self.on_query_changed();
    }

    /// Header click or hotkey.
    pub fn toggle_select(&mut self, field: FilterField) {
        let widget = self.selects.get_mut(field);
        widget.toggle();
        if widget.is_open() {
            self.active_select = Some(field);
        } else if self.active_select == Some(field) {
            self.active_select = None;
        }
    }

    pub fn close_select(&mut self, field: FilterField) {
        self.selects.get_mut(field).close();
        self.refresh_active_select();
    }

    /// Choose `value` in `field`'s dropdown.
    pub fn pick_option(&mut self, field: FilterField, value: &str) {
        let current = filters::selection(&self.query.criteria, field);
        let next = self.selects.get_mut(field).pick(value, &current);
        self.change_filter(field, &next);
        self.refresh_active_select();
    }

    /// Choose the highlighted option of the active dropdown.
    pub fn pick_highlighted(&mut self) {
        let Some(field) = self.active_select else {
            return;
        };
        let current = filters::selection(&self.query.criteria, field);
        if let Some(next) = self.selects.get_mut(field).pick_highlighted(&current) {
            self.change_filter(field, &next);
        }
        self.refresh_active_select();
    }

    /// Keyboard access to the active dropdown, while it is open.
    pub fn with_active_select(&mut self, f: impl FnOnce(&mut SelectWidget)) {
        self.refresh_active_select();
        if let Some(field) = self.active_select {
            f(self.selects.get_mut(field));
        }
    }

    /// Move keyboard focus to the next dropdown, closing the current one.
    pub fn focus_next_select(&mut self) {
        let current = self.active_select.unwrap_or(FilterField::Age);
        let position = FilterField::ALL
            .iter()
            .position(|f| *f == current)
            .unwrap_or(0);
        let next = FilterField::ALL[(position + 1) % FilterField::ALL.len()];

        self.close_select(current);
        if !self.selects.get(next).is_open() {
            self.toggle_select(next);
        }
        self.active_select = Some(next);
    }

    /// Forget the active dropdown if it has been closed (e.g. by an outside click).
    pub fn refresh_active_select(&mut self) {
        if let Some(field) = self.active_select {
            if !self.selects.get(field).is_open() {
                self.active_select = FilterField::ALL
                    .into_iter()
                    .rev()
                    .find(|f| self.selects.get(*f).is_open());
            }
        }
    }

    /// Tell each dropdown where it was drawn on the last frame.
    pub fn sync_select_regions(&self, hits: &HitMap) {
        for field in FilterField::ALL {
            self.selects.get(field).set_region(hits.select_region(field));
        }
    }

    // -- Pagination -----------------------------------------------------------

    /// Jump to `page`, clamped to the pages the current matches fill.
    pub fn set_page(&mut self, page: usize) {
        let page_count = self.derived().page_count;
        let page = page.clamp(1, page_count);
        if page != self.query.page {
            self.query.page = page;
            self.selected_index = 0;
        }
    }

    pub fn next_page(&mut self) {
        self.set_page(self.query.page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.query.page.saturating_sub(1));
    }

    // -- Cursor ---------------------------------------------------------------

    pub fn next(&mut self) {
        let count = self.derived().items.len();
        if count > 0 {
            self.selected_index = (self.selected_index + 1) % count;
        }
    }

    pub fn previous(&mut self) {
        let count = self.derived().items.len();
        if count > 0 {
            if self.selected_index > 0 {
                self.selected_index -= 1;
            } else {
                self.selected_index = count - 1;
            }
        }
    }

    pub fn selected_listing(&self) -> Option<&Listing> {
        self.derived().items.get(self.selected_index).copied()
    }

    // -- Favorites & overlay --------------------------------------------------

    pub fn toggle_favorite(&mut self, id: &str) {
        if !self.favorites.remove(id) {
            self.favorites.insert(id.to_string());
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn toggle_selected_favorite(&mut self) {
        let id = match (&self.open_listing, self.selected_listing()) {
            (Some(open), _) => open.id.clone(),
            (None, Some(listing)) => listing.id.clone(),
            (None, None) => return,
        };
        self.toggle_favorite(&id);
    }

    pub fn open_details(&mut self, id: &str) {
        self.open_listing = self.listings.iter().find(|l| l.id == id).cloned();
    }

    pub fn open_selected(&mut self) {
        self.open_listing = self.selected_listing().cloned();
    }

    pub fn close_details(&mut self) {
        self.open_listing = None;
    }

    /// Copy the open listing's apply link to the terminal clipboard.
    pub fn copy_apply_link(&mut self) {
        let Some(link) = self.open_listing.as_ref().map(|l| l.apply_link.clone()) else {
            return;
        };
        self.status_message = Some(match clipboard::copy_to_clipboard(&link) {
            Ok(()) => format!("Copied {link}"),
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard copy failed");
                format!("Could not copy link: {e}")
            }
        });
    }

    /// Any change to search, filters or sort starts again from page 1.
    fn on_query_changed(&mut self) {
        self.query.page = 1;
        self.selected_index = 0;
    }
}
