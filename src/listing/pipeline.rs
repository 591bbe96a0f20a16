//! # Filter / Sort / Paginate
//!
//! Pure derivation of the visible page from the full dataset. Nothing here is
//! cached: [`derive`] recomputes from scratch and is deterministic for a
//! given `(listings, query, now)`.
//!
//! ```text
//! listings ──filter──▶ matches ──sort──▶ ordered ──slice──▶ page
//! ```

use super::age::AgeBucket;
use super::model::{CompanyScale, Listing};

/// Number of listings shown per page.
pub const PAGE_SIZE: usize = 6;

/// Active filter criteria. Unset (or empty) criteria always match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Selected scales, kept in selection order. Empty means "any scale".
    pub scales: Vec<CompanyScale>,
    pub country: Option<String>,
    pub industry: Option<String>,
    pub age: Option<AgeBucket>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
            && self.country.is_none()
            && self.industry.is_none()
            && self.age.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first.
    #[default]
    Date,
    /// Source order. No ranking is applied.
    Relevance,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Date => "Date (newest first)",
            SortKey::Relevance => "Relevance (source order)",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SortKey::Date => SortKey::Relevance,
            SortKey::Relevance => SortKey::Date,
        }
    }
}

/// Everything the pipeline reads besides the dataset and the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub search: String,
    pub criteria: FilterCriteria,
    pub sort: SortKey,
    /// 1-based page number. Values below 1 are treated as 1.
    pub page: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search: String::new(),
            criteria: FilterCriteria::default(),
            sort: SortKey::Date,
            page: 1,
        }
    }
}

/// One consistent snapshot of pipeline output.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived<'a> {
    /// Listings on the requested page, in display order.
    pub items: Vec<&'a Listing>,
    /// Number of listings that passed the filters.
    pub total_matches: usize,
    /// Pages needed for `total_matches` (at least 1).
    pub page_count: usize,
    /// The page that was sliced (the requested page clamped to at least 1).
    pub page: usize,
}

impl Derived<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Whether a listing satisfies every active criterion and the search text.
pub fn matches(listing: &Listing, criteria: &FilterCriteria, search: &str, now: i64) -> bool {
    let scale_ok =
        criteria.scales.is_empty() || criteria.scales.contains(&listing.company_scale);

    let country_ok = criteria
        .country
        .as_ref()
        .map_or(true, |country| &listing.country == country);

    let industry_ok = criteria
        .industry
        .as_ref()
        .map_or(true, |industry| &listing.industry == industry);

    let age_ok = criteria
        .age
        .map_or(true, |age| AgeBucket::from_posted(listing.date_posted, now) == age);

    scale_ok && country_ok && industry_ok && age_ok && matches_search(listing, search)
}

/// Case-insensitive substring match against title or company.
fn matches_search(listing: &Listing, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }

    let query = search.to_lowercase();
    listing.title.to_lowercase().contains(&query)
        || listing.company.to_lowercase().contains(&query)
}

pub fn filter_listings<'a>(
    listings: &'a [Listing],
    criteria: &FilterCriteria,
    search: &str,
    now: i64,
) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|listing| matches(listing, criteria, search, now))
        .collect()
}

/// Order listings in place. `Date` is a stable newest-first sort; `Relevance`
/// leaves the order untouched.
pub fn sort_listings(items: &mut [&Listing], key: SortKey) {
    if key == SortKey::Date {
        items.sort_by(|a, b| b.date_posted.cmp(&a.date_posted));
    }
}

/// Pages needed to show `total` items, never less than 1.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// The `[(page-1)*size, page*size)` window of `items`. Out of range pages are empty.
pub fn page_slice<'s, 'a>(
    items: &'s [&'a Listing],
    page: usize,
    page_size: usize,
) -> &'s [&'a Listing] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Run the whole pipeline for one snapshot of state.
pub fn derive<'a>(listings: &'a [Listing], query: &Query, now: i64) -> Derived<'a> {
    let mut matched = filter_listings(listings, &query.criteria, &query.search, now);
    sort_listings(&mut matched, query.sort);

    let page = query.page.max(1);
    let items = page_slice(&matched, page, PAGE_SIZE).to_vec();

    Derived {
        items,
        total_matches: matched.len(),
        page_count: page_count(matched.len(), PAGE_SIZE),
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::clock::DAY_MS;

    const NOW: i64 = 1_750_000_000_000;

    fn listing(id: &str, title: &str, company: &str, days_old: i64) -> Listing {
        Listing {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            company_scale: CompanyScale::Startup,
            description: String::new(),
            apply_link: format!("https://example.com/apply/{id}"),
            date_posted: NOW - days_old * DAY_MS,
            location: "Remote".to_string(),
            country: "USA".to_string(),
            industry: "Tech".to_string(),
            salary: None,
            company_career_site: None,
            source_url: None,
        }
    }

    fn numbered(count: usize) -> Vec<Listing> {
        (0..count)
            .map(|i| listing(&i.to_string(), &format!("Job {i}"), "Acme", i as i64))
            .collect()
    }

    #[test]
    fn test_search_is_case_insensitive_on_title() {
        let listings = vec![
            listing("1", "Software Engineer", "Tech Innovations Inc.", 1),
            listing("2", "Product Manager", "Global Solutions Corp", 3),
        ];

        let found = filter_listings(&listings, &FilterCriteria::default(), "eng", NOW);
        let titles: Vec<&str> = found.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Software Engineer"]);
    }

    #[test]
    fn test_search_matches_company() {
        let listings = vec![
            listing("1", "Software Engineer", "Tech Innovations Inc.", 1),
            listing("2", "Product Manager", "Global Solutions Corp", 3),
        ];

        let found = filter_listings(&listings, &FilterCriteria::default(), "GLOBAL", NOW);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "2");
    }

    #[test]
    fn test_age_filter_selects_week_old_item_only() {
        let listings: Vec<Listing> = [1, 3, 7, 14, 30]
            .iter()
            .map(|d| listing(&d.to_string(), "Job", "Acme", *d))
            .collect();

        let criteria = FilterCriteria {
            age: Some(AgeBucket::OneWeek),
            ..FilterCriteria::default()
        };

        let found = filter_listings(&listings, &criteria, "", NOW);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "7");
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let mut uk_fin = listing("1", "Analyst", "Bank", 2);
        uk_fin.country = "UK".to_string();
        uk_fin.industry = "Finance".to_string();
        let mut uk_tech = listing("2", "Engineer", "Shop", 2);
        uk_tech.country = "UK".to_string();
        let us_fin = {
            let mut l = listing("3", "Analyst", "Fund", 2);
            l.industry = "Finance".to_string();
            l
        };
        let listings = vec![uk_fin, uk_tech, us_fin];

        let criteria = FilterCriteria {
            country: Some("UK".to_string()),
            industry: Some("Finance".to_string()),
            ..FilterCriteria::default()
        };

        let found = filter_listings(&listings, &criteria, "", NOW);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "1");
        for item in &found {
            assert!(matches(item, &criteria, "", NOW));
        }
    }

    #[test]
    fn test_scale_filter_is_membership() {
        let mut mnc = listing("1", "A", "Big", 1);
        mnc.company_scale = CompanyScale::Multinational;
        let mut sme = listing("2", "B", "Small", 1);
        sme.company_scale = CompanyScale::Sme;
        let startup = listing("3", "C", "New", 1);
        let listings = vec![mnc, sme, startup];

        let criteria = FilterCriteria {
            scales: vec![CompanyScale::Sme, CompanyScale::Multinational],
            ..FilterCriteria::default()
        };

        let ids: Vec<&str> = filter_listings(&listings, &criteria, "", NOW)
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_empty_criteria_keep_everything() {
        let listings = numbered(9);
        let found = filter_listings(&listings, &FilterCriteria::default(), "", NOW);
        assert_eq!(found.len(), listings.len());
    }

    #[test]
    fn test_date_sort_is_descending_and_idempotent() {
        let listings = vec![
            listing("old", "A", "X", 20),
            listing("new", "B", "X", 0),
            listing("mid", "C", "X", 5),
        ];
        let mut items: Vec<&Listing> = listings.iter().collect();

        sort_listings(&mut items, SortKey::Date);
        assert!(items
            .windows(2)
            .all(|w| w[0].date_posted >= w[1].date_posted));

        let once: Vec<&str> = items.iter().map(|l| l.id.as_str()).collect();
        sort_listings(&mut items, SortKey::Date);
        let twice: Vec<&str> = items.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(once, twice);
        assert_eq!(once, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_date_sort_is_stable_for_ties() {
        let listings = vec![
            listing("a", "A", "X", 2),
            listing("b", "B", "X", 2),
            listing("c", "C", "X", 2),
        ];
        let mut items: Vec<&Listing> = listings.iter().collect();
        sort_listings(&mut items, SortKey::Date);
        let ids: Vec<&str> = items.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_relevance_keeps_source_order() {
        let listings = vec![
            listing("old", "A", "X", 20),
            listing("new", "B", "X", 0),
        ];
        let mut items: Vec<&Listing> = listings.iter().collect();
        sort_listings(&mut items, SortKey::Relevance);
        assert_eq!(items[0].id, "old");
        assert_eq!(items[1].id, "new");
    }

    #[test]
    fn test_fourteen_items_make_three_pages() {
        let listings = numbered(14);
        let query = Query {
            page: 3,
            ..Query::default()
        };

        let derived = derive(&listings, &query, NOW);
        assert_eq!(derived.page_count, 3);
        assert_eq!(derived.total_matches, 14);
        assert_eq!(derived.items.len(), 2);
        // Newest first, so the two oldest land on the last page.
        assert_eq!(derived.items[0].id, "12");
        assert_eq!(derived.items[1].id, "13");
    }

    #[test]
    fn test_pages_are_disjoint_and_cover_the_matches() {
        let listings = numbered(17);
        let mut seen = Vec::new();
        let count = page_count(listings.len(), PAGE_SIZE);

        for page in 1..=count {
            let derived = derive(
                &listings,
                &Query {
                    page,
                    ..Query::default()
                },
                NOW,
            );
            if page < count {
                assert_eq!(derived.items.len(), PAGE_SIZE);
            }
            seen.extend(derived.items.iter().map(|l| l.id.clone()));
        }

        let mut all: Vec<&Listing> = listings.iter().collect();
        sort_listings(&mut all, SortKey::Date);
        let expected: Vec<String> = all.iter().map(|l| l.id.clone()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_page_zero_is_clamped_to_first_page() {
        let listings = numbered(8);
        let derived = derive(
            &listings,
            &Query {
                page: 0,
                ..Query::default()
            },
            NOW,
        );
        assert_eq!(derived.page, 1);
        assert_eq!(derived.items.len(), PAGE_SIZE);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let listings = numbered(4);
        let derived = derive(
            &listings,
            &Query {
                page: 5,
                ..Query::default()
            },
            NOW,
        );
        assert!(derived.is_empty());
        assert_eq!(derived.page_count, 1);
    }

    #[test]
    fn test_page_count_never_zero() {
        assert_eq!(page_count(0, PAGE_SIZE), 1);
        assert_eq!(page_count(6, PAGE_SIZE), 1);
        assert_eq!(page_count(7, PAGE_SIZE), 2);
    }

    #[test]
    fn test_derive_is_deterministic() {
        let listings = numbered(10);
        let query = Query {
            search: "job 1".to_string(),
            ..Query::default()
        };
        assert_eq!(derive(&listings, &query, NOW), derive(&listings, &query, NOW));
    }
}
