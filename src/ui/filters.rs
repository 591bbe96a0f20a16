//! The four filter dropdowns and the mapping between their string selections
//! and [`FilterCriteria`].

use super::pointer::PointerRegistry;
use super::select::{SelectOption, SelectWidget};
use crate::listing::{AgeBucket, CompanyScale, FilterCriteria, Listing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Scale,
    Country,
    Industry,
    Age,
}

impl FilterField {
    /// Display order, left to right.
    pub const ALL: [FilterField; 4] = [
        FilterField::Scale,
        FilterField::Country,
        FilterField::Industry,
        FilterField::Age,
    ];

    pub fn placeholder(self) -> &'static str {
        match self {
            FilterField::Scale => "Company Scale",
            FilterField::Country => "Country",
            FilterField::Industry => "Industry",
            FilterField::Age => "Job Age",
        }
    }

    pub fn is_multiple(self) -> bool {
        self == FilterField::Scale
    }

    /// Key that toggles this dropdown from the keyboard.
    pub fn hotkey(self) -> char {
        match self {
            FilterField::Scale => '1',
            FilterField::Country => '2',
            FilterField::Industry => '3',
            FilterField::Age => '4',
        }
    }

    pub fn from_hotkey(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.hotkey() == c)
    }
}

const COUNTRIES: [(&str, &str, &str); 5] = [
    ("USA", "United States", "🇺🇸"),
    ("India", "India", "🇮🇳"),
    ("UK", "United Kingdom", "🇬🇧"),
    ("Canada", "Canada", "🇨🇦"),
    ("Australia", "Australia", "🇦🇺"),
];

const INDUSTRIES: [(&str, &str, &str); 4] = [
    ("Tech", "Technology", "💻"),
    ("Finance", "Finance", "💰"),
    ("Healthcare", "Healthcare", "🏥"),
    ("Education", "Education", "📚"),
];

pub fn scale_options() -> Vec<SelectOption> {
    CompanyScale::ALL
        .iter()
        .map(|scale| SelectOption::new(scale.label(), scale.label()).with_icon(scale.icon()))
        .collect()
}

pub fn age_options() -> Vec<SelectOption> {
    AgeBucket::ALL
        .iter()
        .map(|age| SelectOption::new(age.label(), age.label()).with_icon(age.icon()))
        .collect()
}

/// Known countries, followed by any others present in the data.
pub fn country_options(listings: &[Listing]) -> Vec<SelectOption> {
    catalogue_with_extras(&COUNTRIES, listings.iter().map(|l| l.country.as_str()))
}

/// Known industries, followed by any others present in the data.
pub fn industry_options(listings: &[Listing]) -> Vec<SelectOption> {
    catalogue_with_extras(&INDUSTRIES, listings.iter().map(|l| l.industry.as_str()))
}

fn catalogue_with_extras<'a>(
    known: &[(&str, &str, &str)],
    seen: impl Iterator<Item = &'a str>,
) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = known
        .iter()
        .map(|(value, label, icon)| SelectOption::new(*value, *label).with_icon(*icon))
        .collect();

    for value in seen {
        if !value.is_empty() && !options.iter().any(|o| o.value == value) {
            options.push(SelectOption::new(value, value));
        }
    }

    options
}

/// The widget values currently selected for `field`.
pub fn selection(criteria: &FilterCriteria, field: FilterField) -> Vec<String> {
    match field {
        FilterField::Scale => criteria
            .scales
            .iter()
            .map(|s| s.label().to_string())
            .collect(),
        FilterField::Country => criteria.country.iter().cloned().collect(),
        FilterField::Industry => criteria.industry.iter().cloned().collect(),
        FilterField::Age => criteria
            .age
            .iter()
            .map(|a| a.label().to_string())
            .collect(),
    }
}

/// Store a widget selection for `field` into `criteria`.
pub fn apply_selection(criteria: &mut FilterCriteria, field: FilterField, values: &[String]) {
    match field {
        FilterField::Scale => {
            criteria.scales = values
                .iter()
                .filter_map(|v| CompanyScale::from_label(v))
                .collect();
        }
        FilterField::Country => criteria.country = values.first().cloned(),
        FilterField::Industry => criteria.industry = values.first().cloned(),
        FilterField::Age => {
            criteria.age = values.first().and_then(|v| AgeBucket::from_label(v));
        }
    }
}

/// One mounted [`SelectWidget`] per [`FilterField`].
#[derive(Debug)]
pub struct FilterSelects {
    scale: SelectWidget,
    country: SelectWidget,
    industry: SelectWidget,
    age: SelectWidget,
}

impl FilterSelects {
    pub fn mount(registry: &PointerRegistry, listings: &[Listing]) -> Self {
        let widget = |field: FilterField, options| {
            SelectWidget::mount(registry, options, field.placeholder(), field.is_multiple())
        };

        Self {
            scale: widget(FilterField::Scale, scale_options()),
            country: widget(FilterField::Country, country_options(listings)),
            industry: widget(FilterField::Industry, industry_options(listings)),
            age: widget(FilterField::Age, age_options()),
        }
    }

    pub fn get(&self, field: FilterField) -> &SelectWidget {
        match field {
            FilterField::Scale => &self.scale,
            FilterField::Country => &self.country,
            FilterField::Industry => &self.industry,
            FilterField::Age => &self.age,
        }
    }

    pub fn get_mut(&mut self, field: FilterField) -> &mut SelectWidget {
        match field {
            FilterField::Scale => &mut self.scale,
            FilterField::Country => &mut self.country,
            FilterField::Industry => &mut self.industry,
            FilterField::Age => &mut self.age,
        }
    }

    pub fn any_open(&self) -> bool {
        FilterField::ALL.iter().any(|f| self.get(*f).is_open())
    }
}
