use crate::listing::{AgeBucket, Derived, Listing, PAGE_SIZE};
use crate::ui::app::{App, LoadState};
use crate::ui::filters::{self, FilterField};
use crate::ui::hit::{HitMap, HitTarget};
use crate::ui::select::SelectWidget;
use crate::ui::theme::Theme;
use chrono::DateTime;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const CARD_COLUMNS: usize = 3;

/// Draw the whole board and return every clickable region drawn.
pub fn render(frame: &mut Frame, app: &App) -> HitMap {
    let theme = app.theme();
    let mut hits = HitMap::new();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        frame.area(),
    );

    // Header + Controls + Filters + Cards + Pagination + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search + sort
            Constraint::Length(3), // Filter dropdowns
            Constraint::Min(0),    // Cards
            Constraint::Length(1), // Pagination
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, main_chunks[0], &mut hits);
    render_controls(frame, app, main_chunks[1], &mut hits);
    let select_headers = render_filter_headers(frame, app, main_chunks[2], &mut hits);

    let derived = app.derived();
    render_body(frame, app, &derived, main_chunks[3], &mut hits);
    render_pagination(frame, theme, &derived, main_chunks[4], &mut hits);
    render_footer(frame, app, main_chunks[5]);

    // Open dropdowns float above the cards.
    for (field, header) in FilterField::ALL.into_iter().zip(select_headers) {
        let widget = app.selects().get(field);
        if widget.is_open() {
            let selected = filters::selection(&app.query.criteria, field);
            render_select_panel(frame, theme, field, widget, &selected, header, &mut hits);
        }
    }

    if let Some(listing) = &app.open_listing {
        render_detail_overlay(frame, app, listing, &mut hits);
    }

    if app.show_info {
        render_info_overlay(frame, theme, &mut hits);
    }

    hits
}

fn render_header(frame: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    let theme = app.theme();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20),
            Constraint::Min(0),
            Constraint::Length(20),
        ])
        .split(area);

    let toggle = Paragraph::new(Line::from(vec![
        Span::styled(
            if app.dark_mode { "☾ " } else { "☀ " },
            Style::default().fg(theme.secondary),
        ),
        Span::styled(
            format!("Dark mode: {}", if app.dark_mode { "on" } else { "off" }),
            Style::default().fg(theme.fg),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.fg_dim)),
    );
    frame.render_widget(toggle, chunks[0]);
    hits.push(chunks[0], HitTarget::DarkModeToggle);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "JOB CHRONICLE",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "The daily record of open positions",
            Style::default()
                .fg(theme.fg_dim)
                .add_modifier(Modifier::ITALIC),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    let saved = app.favorites.len();
    let dateline = Paragraph::new(vec![
        Line::from(Span::styled(
            format_date(app.now(), "%a %d %b %Y"),
            Style::default().fg(theme.fg),
        )),
        Line::from(Span::styled(
            format!("♥ {saved} saved"),
            Style::default().fg(if saved > 0 { theme.error } else { theme.fg_dim }),
        )),
    ])
    .alignment(Alignment::Right);
    frame.render_widget(dateline, chunks[2]);
}

fn render_controls(frame: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    let theme = app.theme();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let search_line = if app.query.search.is_empty() && !app.search_mode {
        Line::from(Span::styled(
            "Search by title or company...",
            Style::default().fg(theme.fg_dim),
        ))
    } else {
        let mut spans = vec![Span::styled(
            app.query.search.clone(),
            Style::default().fg(theme.secondary),
        )];
        if app.search_mode {
            spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
        }
        Line::from(spans)
    };

    let search_border = if app.search_mode {
        theme.accent
    } else {
        theme.fg_dim
    };
    let search = Paragraph::new(search_line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 🔍 Search [/] ")
            .border_style(Style::default().fg(search_border)),
    );
    frame.render_widget(search, chunks[0]);
    hits.push(chunks[0], HitTarget::SearchBox);

    let sort = Paragraph::new(Line::from(vec![
        Span::styled("⇅ ", Style::default().fg(theme.accent)),
        Span::styled(app.query.sort.label(), Style::default().fg(theme.fg)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Sort [s] ")
            .border_style(Style::default().fg(theme.fg_dim)),
    );
    frame.render_widget(sort, chunks[1]);
    hits.push(chunks[1], HitTarget::SortToggle);
}

/// Draw the four closed dropdown headers and return their areas.
fn render_filter_headers(frame: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) -> Vec<Rect> {
    let theme = app.theme();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (field, chunk) in FilterField::ALL.into_iter().zip(chunks.iter()) {
        let widget = app.selects().get(field);
        let selected = filters::selection(&app.query.criteria, field);
        let text_color = if selected.is_empty() {
            theme.fg_dim
        } else {
            theme.fg
        };
        let border_color = if widget.is_open() {
            theme.accent
        } else {
            theme.fg_dim
        };

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                if widget.is_open() { "▲ " } else { "▼ " },
                Style::default().fg(theme.accent),
            ),
            Span::styled(widget.display_text(&selected), Style::default().fg(text_color)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", field.hotkey()))
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(header, *chunk);
        hits.push(*chunk, HitTarget::SelectHeader(field));
    }

    chunks.to_vec()
}

fn render_body(frame: &mut Frame, app: &App, derived: &Derived<'_>, area: Rect, hits: &mut HitMap) {
    let theme = app.theme();

    match &app.load_state {
        LoadState::Loading => {
            render_notice(frame, theme, area, "Loading jobs...", None);
            return;
        }
        LoadState::Failed(message) if app.listings.is_empty() => {
            render_notice(
                frame,
                theme,
                area,
                "Could not load listings",
                Some(message.as_str()),
            );
            return;
        }
        _ => {}
    }

    if derived.is_empty() {
        render_notice(
            frame,
            theme,
            area,
            "No jobs found",
            Some("Press [c] to clear search and filters"),
        );
        return;
    }

    let rows = PAGE_SIZE.div_ceil(CARD_COLUMNS);
    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    let now = app.now();
    for (row, row_area) in row_chunks.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, CARD_COLUMNS as u32); CARD_COLUMNS])
            .split(*row_area);

        for (column, cell) in cells.iter().enumerate() {
            let index = row * CARD_COLUMNS + column;
            if let Some(listing) = derived.items.get(index) {
                let card = CardView {
                    listing,
                    cursor: index == app.selected_index,
                    favorite: app.is_favorite(&listing.id),
                    now,
                };
                render_card(frame, theme, &card, *cell, hits);
            }
        }
    }
}

fn render_notice(frame: &mut Frame, theme: &Theme, area: Rect, headline: &str, detail: Option<&str>) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline.to_string(),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(detail) = detail {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            detail.to_string(),
            Style::default().fg(theme.fg_dim),
        )));
    }

    let notice = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(notice, area);
}

struct CardView<'a> {
    listing: &'a Listing,
    cursor: bool,
    favorite: bool,
    now: i64,
}

fn render_card(frame: &mut Frame, theme: &Theme, card: &CardView<'_>, area: Rect, hits: &mut HitMap) {
    let listing = card.listing;
    let (border, background) = if card.cursor {
        (theme.accent, theme.selection_bg)
    } else {
        (theme.fg_dim, theme.bg)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(background));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    hits.push(area, HitTarget::Card(listing.id.clone()));

    if inner.height == 0 || inner.width < 4 {
        return;
    }

    let title_area = Rect::new(inner.x, inner.y, inner.width - 3, 1);
    let heart_area = Rect::new(inner.right() - 2, inner.y, 2, 1);
    let rest_area = Rect::new(
        inner.x,
        inner.y + 1,
        inner.width,
        inner.height.saturating_sub(1),
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            listing.title.clone(),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        title_area,
    );

    let (heart, heart_color) = if card.favorite {
        ("♥", theme.error)
    } else {
        ("♡", theme.fg_dim)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(heart, Style::default().fg(heart_color))),
        heart_area,
    );
    hits.push(heart_area, HitTarget::Favorite(listing.id.clone()));

    let age = AgeBucket::from_posted(listing.date_posted, card.now);
    let mut lines = vec![
        Line::from(Span::styled(
            listing.company.clone(),
            Style::default().fg(theme.accent),
        )),
        Line::from(Span::styled(
            format!("{}, {}", listing.location, listing.country),
            Style::default().fg(theme.fg_dim),
        )),
        Line::from(vec![
            Span::styled(listing.industry.clone(), Style::default().fg(theme.fg)),
            Span::styled(" · ", Style::default().fg(theme.fg_dim)),
            Span::styled(
                listing.company_scale.label(),
                Style::default().fg(theme.fg_dim),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} {}", age.icon(), age.label()),
            Style::default().fg(theme.secondary),
        )),
    ];
    if let Some(salary) = &listing.salary {
        lines.push(Line::from(Span::styled(
            salary.clone(),
            Style::default().fg(theme.success),
        )));
    }

    frame.render_widget(Paragraph::new(lines), rest_area);
}

fn render_pagination(frame: &mut Frame, theme: &Theme, derived: &Derived<'_>, area: Rect, hits: &mut HitMap) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Min(0),
            Constraint::Length(24),
        ])
        .split(area);

    if !derived.items.is_empty() {
        let first = (derived.page - 1) * PAGE_SIZE + 1;
        let last = first + derived.items.len() - 1;
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {first}-{last} of {}", derived.total_matches),
                Style::default().fg(theme.fg_dim),
            )),
            chunks[0],
        );
    }

    // Buttons are laid out by hand so each one gets its own hit region.
    let mut spans = Vec::new();
    let mut buttons = Vec::new();
    let mut offset = 0u16;
    for (i, slot) in page_window(derived.page, derived.page_count).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
            offset = offset.saturating_add(1);
        }
        let Some(page) = slot else {
            spans.push(Span::styled("…", Style::default().fg(theme.fg_dim)));
            offset = offset.saturating_add(1);
            continue;
        };
        let style = if page == derived.page {
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.accent)
        };
        let span = Span::styled(format!(" {page} "), style);
        let width = u16::try_from(span.width()).unwrap_or(u16::MAX);
        buttons.push((offset, width, page));
        offset = offset.saturating_add(width);
        spans.push(span);
    }

    let buttons_area = chunks[1];
    let start = buttons_area.x + buttons_area.width.saturating_sub(offset) / 2;
    for (button_offset, width, page) in buttons {
        let x = start.saturating_add(button_offset);
        if x.saturating_add(width) <= buttons_area.right() {
            hits.push(
                Rect::new(x, buttons_area.y, width, 1),
                HitTarget::Page(page),
            );
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        buttons_area,
    );
}

/// Page buttons to show: the first and last pages plus two either side of
/// `page`. `None` marks a gap.
fn page_window(page: usize, page_count: usize) -> Vec<Option<usize>> {
    const SPREAD: usize = 2;

    let last = page_count.max(1);
    let from = page.saturating_sub(SPREAD).max(2);
    let to = page.saturating_add(SPREAD).min(last.saturating_sub(1));

    let mut window = vec![Some(1)];
    if from > 2 {
        window.push(None);
    }
    window.extend((from..=to).map(Some));
    if to + 1 < last {
        window.push(None);
    }
    if last > 1 {
        window.push(Some(last));
    }
    window
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();

    if let Some(message) = &app.status_message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.clone(),
                Style::default().fg(theme.secondary),
            )),
            area,
        );
        return;
    }

    let help_text = if app.show_info {
        "[?/Esc] Close help"
    } else if app.open_listing.is_some() {
        "[y] Copy apply link  [f] Favorite  [Esc] Close"
    } else if app.active_select.is_some() {
        "[type] Search  [↑↓] Highlight  [Enter] Pick  [Tab] Next filter  [Esc] Close"
    } else if app.search_mode {
        "[type] Search  [Enter] Keep  [Esc] Clear"
    } else {
        "[/] Search  [1-4] Filters  [s] Sort  [←→] Page  [↑↓] Move  [Enter] Details  [f] Favorite  [d] Dark  [?] Help  [q] Quit"
    };

    frame.render_widget(
        Paragraph::new(help_text).style(Style::default().fg(theme.fg_dim)),
        area,
    );
}

fn render_select_panel(
    frame: &mut Frame,
    theme: &Theme,
    field: FilterField,
    widget: &SelectWidget,
    selected: &[String],
    header: Rect,
    hits: &mut HitMap,
) {
    let options = widget.filtered_options();
    let wanted = options.len().max(1) as u16 + 3;
    let available = frame.area().bottom().saturating_sub(header.bottom());
    let height = wanted.min(available);
    if height < 4 {
        return;
    }

    let panel = Rect::new(header.x, header.bottom(), header.width, height);
    frame.render_widget(Clear, panel);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.bg));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);
    hits.push(panel, HitTarget::SelectPanel(field));

    let search_line = if widget.search_text().is_empty() {
        Line::from(vec![
            Span::styled("⌕ ", Style::default().fg(theme.fg_dim)),
            Span::styled("Type to search", Style::default().fg(theme.fg_dim)),
        ])
    } else {
        Line::from(vec![
            Span::styled("⌕ ", Style::default().fg(theme.fg_dim)),
            Span::styled(
                widget.search_text().to_string(),
                Style::default().fg(theme.secondary),
            ),
            Span::styled("▏", Style::default().fg(theme.accent)),
        ])
    };
    frame.render_widget(
        Paragraph::new(search_line),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    let visible_rows = inner.height.saturating_sub(1) as usize;
    if options.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No options",
                Style::default().fg(theme.fg_dim),
            )),
            Rect::new(inner.x, inner.y + 1, inner.width, 1),
        );
        return;
    }

    // Scroll just far enough to keep the highlight visible.
    let scroll = widget
        .highlighted()
        .saturating_sub(visible_rows.saturating_sub(1));

    for (row, (index, option)) in options
        .iter()
        .enumerate()
        .skip(scroll)
        .take(visible_rows)
        .enumerate()
    {
        let row_area = Rect::new(inner.x, inner.y + 1 + row as u16, inner.width, 1);
        let is_selected = widget.is_selected(&option.value, selected);
        let marker = match (widget.is_multiple(), is_selected) {
            (true, true) => "[x] ",
            (true, false) => "[ ] ",
            (false, true) => "● ",
            (false, false) => "  ",
        };

        let mut style = Style::default().fg(theme.fg);
        if is_selected {
            style = style.fg(theme.accent).add_modifier(Modifier::BOLD);
        }
        if index == widget.highlighted() {
            style = style.bg(theme.selection_bg);
        }

        let mut spans = vec![Span::raw(marker)];
        if let Some(icon) = &option.icon {
            spans.push(Span::raw(format!("{icon} ")));
        }
        spans.push(Span::raw(option.label.clone()));

        frame.render_widget(Paragraph::new(Line::from(spans)).style(style), row_area);
        hits.push(row_area, HitTarget::SelectOption(field, option.value.clone()));
    }
}

fn render_detail_overlay(frame: &mut Frame, app: &App, listing: &Listing, hits: &mut HitMap) {
    let theme = app.theme();
    // The backdrop swallows clicks aimed at the board underneath.
    hits.push(frame.area(), HitTarget::Overlay);

    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Listing ")
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.bg).fg(theme.fg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let close_area = Rect::new(area.right().saturating_sub(5), area.y, 3, 1);
    frame.render_widget(
        Paragraph::new(Span::styled("[x]", Style::default().fg(theme.error))),
        close_area,
    );

    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<10}"), Style::default().fg(theme.fg_dim)),
            Span::styled(value, Style::default().fg(theme.fg)),
        ])
    };

    let age = AgeBucket::from_posted(listing.date_posted, app.now());
    let mut title = vec![Span::styled(
        listing.title.clone(),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )];
    if app.is_favorite(&listing.id) {
        title.push(Span::styled("  ♥", Style::default().fg(theme.error)));
    }

    let mut lines = vec![
        Line::from(title),
        Line::from(Span::styled(
            format!(
                "{} · {} {}",
                listing.company,
                listing.company_scale.icon(),
                listing.company_scale.label()
            ),
            Style::default().fg(theme.fg),
        )),
        Line::from(""),
        Line::from(listing.description.clone()),
        Line::from(""),
        field(
            "Location",
            format!("{}, {}", listing.location, listing.country),
        ),
        field("Industry", listing.industry.clone()),
        field(
            "Posted",
            format!(
                "{} ({})",
                format_date(listing.date_posted, "%Y-%m-%d"),
                age.label()
            ),
        ),
    ];
    if let Some(salary) = &listing.salary {
        lines.push(field("Salary", salary.clone()));
    }
    if let Some(site) = &listing.company_career_site {
        lines.push(field("Careers", site.clone()));
    }
    if let Some(source) = &listing.source_url {
        lines.push(field("Source", source.clone()));
    }
    lines.push(field("Apply", listing.apply_link.clone()));

    let body_area = Rect::new(
        inner.x,
        inner.y,
        inner.width,
        inner.height.saturating_sub(2),
    );
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        body_area,
    );

    if inner.height >= 2 {
        let button = Span::styled(
            " [y] Copy apply link ",
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );
        let width = (button.width() as u16).min(inner.width);
        let button_area = Rect::new(inner.x, inner.bottom() - 1, width, 1);
        frame.render_widget(Paragraph::new(button), button_area);
        hits.push(button_area, HitTarget::CopyApplyLink);
    }

    hits.push(close_area, HitTarget::CloseOverlay);
}

fn render_info_overlay(frame: &mut Frame, theme: &Theme, hits: &mut HitMap) {
    hits.push(frame.area(), HitTarget::Overlay);

    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let key = |keys: &str, action: &str| {
        Line::from(vec![
            Span::styled(format!("{keys:<14}"), Style::default().fg(theme.accent)),
            Span::styled(action.to_string(), Style::default().fg(theme.fg)),
        ])
    };

    let lines = vec![
        key("/", "Search titles and companies"),
        key("1 2 3 4", "Open scale, country, industry, age filter"),
        key("s", "Switch sort (newest first / relevance)"),
        key("c", "Clear search and filters"),
        key("← → [ ]", "Previous / next page"),
        key("↑ ↓ j k", "Move between cards"),
        key("Enter", "Open listing details"),
        key("f", "Favorite / unfavorite"),
        key("y", "Copy apply link (in details)"),
        key("d", "Toggle dark mode"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Mouse: click headers, options, cards, hearts and page numbers.",
            Style::default().fg(theme.fg_dim),
        )),
    ];

    let help = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Help ")
                .border_style(Style::default().fg(theme.accent))
                .style(Style::default().bg(theme.bg)),
        );
    frame.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn format_date(millis: i64, format: &str) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|date| date.format(format).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{mock, FixedClock};
    use ratatui::{backend::TestBackend, Terminal};

    const NOW: i64 = 1_750_000_000_000;

    fn app() -> App {
        let mut app = App::new(
            Theme::default_light(),
            Theme::default_dark(),
            Box::new(FixedClock(NOW)),
        );
        app.finish_loading(Ok(mock::listings(NOW)));
        app
    }

    fn draw(app: &App) -> (HitMap, String) {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        let mut hits = HitMap::new();
        terminal.draw(|f| hits = render(f, app)).unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        (hits, text)
    }

    fn count_targets(hits: &HitMap, area: Rect, matches: impl Fn(&HitTarget) -> bool) -> usize {
        let mut count = 0;
        for row in area.y..area.bottom() {
            for column in area.x..area.right() {
                if hits.target_at(column, row).is_some_and(&matches) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_board_shows_title_and_first_page() {
        let app = app();
        let (hits, text) = draw(&app);
        assert!(text.contains("JOB CHRONICLE"));
        for listing in &app.derived().items {
            assert!(text.contains(&listing.title), "missing {}", listing.title);
        }
        assert!(count_targets(&hits, Rect::new(0, 0, 140, 45), |t| {
            matches!(t, HitTarget::Page(3))
        }) > 0);
    }

    #[test]
    fn test_loading_and_empty_states() {
        let loading = App::new(
            Theme::default_light(),
            Theme::default_dark(),
            Box::new(FixedClock(NOW)),
        );
        let (_, text) = draw(&loading);
        assert!(text.contains("Loading jobs..."));

        let mut app = app();
        app.set_search("zzzz".to_string());
        let (hits, text) = draw(&app);
        assert!(text.contains("No jobs found"));
        assert!(count_targets(&hits, Rect::new(0, 0, 140, 45), |t| {
            matches!(t, HitTarget::Card(_))
        }) == 0);
    }

    #[test]
    fn test_open_select_draws_options_on_top() {
        let mut app = app();
        app.toggle_select(FilterField::Country);
        let (hits, text) = draw(&app);
        assert!(text.contains("United Kingdom"));
        assert!(hits.select_region(FilterField::Country).is_some());
        assert!(count_targets(&hits, Rect::new(0, 0, 140, 45), |t| {
            *t == HitTarget::SelectOption(FilterField::Country, "UK".to_string())
        }) > 0);
    }

    #[test]
    fn test_favorite_region_sits_inside_card() {
        let app = app();
        let (hits, _) = draw(&app);
        let id = app.derived().items[0].id.clone();
        assert!(count_targets(&hits, Rect::new(0, 0, 140, 45), |t| {
            *t == HitTarget::Favorite(id.clone())
        }) == 2);
    }

    #[test]
    fn test_detail_overlay_covers_board() {
        let mut app = app();
        app.open_details("1");
        let (hits, text) = draw(&app);
        assert!(text.contains("Copy apply link"));
        assert!(count_targets(&hits, Rect::new(0, 0, 140, 45), |t| {
            matches!(t, HitTarget::Card(_) | HitTarget::Page(_))
        }) == 0);
        assert!(count_targets(&hits, Rect::new(0, 0, 140, 45), |t| {
            *t == HitTarget::CloseOverlay
        }) == 3);
    }

    #[test]
    fn test_dark_mode_changes_background() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|f| {
            render(f, &app);
        })
        .unwrap();
        let light_bg = terminal.backend().buffer()[(70, 20)].bg;

        app.toggle_dark_mode();
        terminal.draw(|f| {
            render(f, &app);
        })
        .unwrap();
        let dark_bg = terminal.backend().buffer()[(70, 20)].bg;
        assert_ne!(light_bg, dark_bg);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 1), vec![Some(1)]);
        assert_eq!(page_window(1, 3), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(
            page_window(1, 10),
            vec![Some(1), Some(2), Some(3), None, Some(10)]
        );
        assert_eq!(
            page_window(6, 10),
            vec![Some(1), None, Some(4), Some(5), Some(6), Some(7), Some(8), None, Some(10)]
        );
        assert_eq!(
            page_window(10, 10),
            vec![Some(1), None, Some(8), Some(9), Some(10)]
        );
    }

    #[test]
    fn test_thousands_of_pages_draw_a_window_of_buttons() {
        let mut app = app();
        let template = app.listings[0].clone();
        app.finish_loading(Ok((0..72_000)
            .map(|i| {
                let mut listing = template.clone();
                listing.id = i.to_string();
                listing
            })
            .collect()));
        app.set_page(6_000);

        let (hits, text) = draw(&app);
        let board = Rect::new(0, 0, 140, 45);
        for page in [1, 5_998, 6_000, 6_002, 12_000] {
            assert!(
                count_targets(&hits, board, |t| *t == HitTarget::Page(page)) > 0,
                "page {page} button missing"
            );
        }
        assert_eq!(count_targets(&hits, board, |t| *t == HitTarget::Page(2)), 0);
        assert!(text.contains("…"));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(0, "%Y-%m-%d"), "1970-01-01");
    }
}
