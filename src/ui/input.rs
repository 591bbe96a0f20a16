//! Key and mouse dispatch.
//!
//! Modal layers are checked top-down: help overlay, detail overlay, an open
//! dropdown, search mode, then the board itself.

use crate::ui::app::App;
use crate::ui::filters::FilterField;
use crate::ui::hit::{HitMap, HitTarget};
use crate::ui::select::SelectWidget;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Any keypress dismisses the last status message.
    app.status_message = None;

    if app.show_info {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc
        ) {
            app.toggle_info();
        }
        return;
    }

    if app.open_listing.is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => app.close_details(),
            KeyCode::Char('y') => app.copy_apply_link(),
            KeyCode::Char('f') => app.toggle_selected_favorite(),
            _ => {}
        }
        return;
    }

    app.refresh_active_select();
    if app.active_select.is_some() {
        match key.code {
            KeyCode::Esc => {
                if let Some(field) = app.active_select {
                    app.close_select(field);
                }
            }
            KeyCode::Tab => app.focus_next_select(),
            KeyCode::Enter => app.pick_highlighted(),
            KeyCode::Down => app.with_active_select(SelectWidget::highlight_next),
            KeyCode::Up => app.with_active_select(SelectWidget::highlight_previous),
            KeyCode::Backspace => app.with_active_select(SelectWidget::search_pop_char),
            KeyCode::Char(c) => app.with_active_select(|w| w.search_push_char(c)),
            _ => {}
        }
        return;
    }

    if app.search_mode {
        match key.code {
            KeyCode::Esc => app.cancel_search(),
            KeyCode::Enter => app.confirm_search(),
            KeyCode::Backspace => app.search_pop_char(),
            KeyCode::Char(c) => app.search_push_char(c),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('?') => app.toggle_info(),
        KeyCode::Char('/') => app.enter_search_mode(),
        KeyCode::Char('d') => app.toggle_dark_mode(),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('c') => app.clear_filters(),
        KeyCode::Char('f') => app.toggle_selected_favorite(),
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(field) = FilterField::from_hotkey(c) {
                app.toggle_select(field);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.next(),
        KeyCode::Up | KeyCode::Char('k') => app.previous(),
        KeyCode::Right | KeyCode::Char(']') | KeyCode::Char('l') => app.next_page(),
        KeyCode::Left | KeyCode::Char('[') | KeyCode::Char('h') => app.previous_page(),
        KeyCode::Enter => app.open_selected(),
        _ => {}
    }
}

/// Dispatch a mouse event against the regions recorded by the last frame.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, hits: &HitMap) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {}
        MouseEventKind::ScrollDown => {
            app.next();
            return;
        }
        MouseEventKind::ScrollUp => {
            app.previous();
            return;
        }
        _ => return,
    }

    app.status_message = None;

    // Dropdowns hear every press first so a click elsewhere closes them.
    app.pointer().pointer_down(mouse.column, mouse.row);
    app.refresh_active_select();

    if app.show_info {
        app.toggle_info();
        return;
    }

    let Some(target) = hits.target_at(mouse.column, mouse.row).cloned() else {
        return;
    };
    tracing::trace!(?target, "Click");

    if app.search_mode && target != HitTarget::SearchBox {
        app.confirm_search();
    }

    match target {
        HitTarget::SelectHeader(field) => app.toggle_select(field),
        HitTarget::SelectOption(field, value) => app.pick_option(field, &value),
        HitTarget::SelectPanel(_) | HitTarget::Overlay => {}
        HitTarget::SearchBox => app.enter_search_mode(),
        HitTarget::SortToggle => app.cycle_sort(),
        HitTarget::DarkModeToggle => app.toggle_dark_mode(),
        HitTarget::Card(id) => app.open_details(&id),
        HitTarget::Favorite(id) => app.toggle_favorite(&id),
        HitTarget::Page(page) => app.set_page(page),
        HitTarget::CloseOverlay => app.close_details(),
        HitTarget::CopyApplyLink => app.copy_apply_link(),
    }
}
