//! Demo dataset used when no data file is given.

use super::clock::DAY_MS;
use super::model::{CompanyScale, Listing};

struct Seed {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    scale: CompanyScale,
    description: &'static str,
    days_ago: i64,
    location: &'static str,
    country: &'static str,
    industry: &'static str,
    salary: Option<&'static str>,
    career_site: Option<&'static str>,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        title: "Software Engineer",
        company: "Tech Innovations Inc.",
        scale: CompanyScale::Startup,
        description: "Exciting opportunity for a passionate software engineer to join our innovative team.",
        days_ago: 1,
        location: "San Francisco, CA",
        country: "USA",
        industry: "Tech",
        salary: None,
        career_site: None,
    },
    Seed {
        id: "2",
        title: "Product Manager",
        company: "Global Solutions Corp",
        scale: CompanyScale::Multinational,
        description: "Lead product strategy and drive innovation in a global environment.",
        days_ago: 3,
        location: "New York, NY",
        country: "USA",
        industry: "Finance",
        salary: Some("$120,000 - $150,000"),
        career_site: None,
    },
    Seed {
        id: "3",
        title: "Data Scientist",
        company: "Healthcare Innovations",
        scale: CompanyScale::MidScale,
        description: "Apply advanced analytics to solve complex healthcare challenges.",
        days_ago: 7,
        location: "Boston, MA",
        country: "USA",
        industry: "Healthcare",
        salary: None,
        career_site: None,
    },
    Seed {
        id: "4",
        title: "UX Designer",
        company: "Creative Solutions Ltd",
        scale: CompanyScale::Sme,
        description: "Design intuitive and engaging user experiences for cutting-edge products.",
        days_ago: 14,
        location: "Austin, TX",
        country: "USA",
        industry: "Tech",
        salary: None,
        career_site: None,
    },
    Seed {
        id: "5",
        title: "Marketing Specialist",
        company: "Global Brands Inc.",
        scale: CompanyScale::Multinational,
        description: "Drive marketing strategies for international brand expansion.",
        days_ago: 30,
        location: "Chicago, IL",
        country: "USA",
        industry: "Marketing",
        salary: None,
        career_site: None,
    },
    Seed {
        id: "6",
        title: "Backend Engineer",
        company: "Northwind Payments",
        scale: CompanyScale::MidScale,
        description: "Scale a payments ledger that settles millions of transactions a day.",
        days_ago: 2,
        location: "London",
        country: "UK",
        industry: "Finance",
        salary: Some("£75,000 - £90,000"),
        career_site: Some("https://careers.northwind.example.com"),
    },
    Seed {
        id: "7",
        title: "Frontend Developer",
        company: "Pixel Forge",
        scale: CompanyScale::Startup,
        description: "Build a fast, accessible design system with a small product team.",
        days_ago: 5,
        location: "Bengaluru",
        country: "India",
        industry: "Tech",
        salary: None,
        career_site: None,
    },
    Seed {
        id: "8",
        title: "Clinical Data Analyst",
        company: "MapleCare Health",
        scale: CompanyScale::Sme,
        description: "Turn trial data into reports clinicians can act on.",
        days_ago: 10,
        location: "Toronto, ON",
        country: "Canada",
        industry: "Healthcare",
        salary: Some("CA$85,000"),
        career_site: None,
    },
    Seed {
        id: "9",
        title: "Curriculum Designer",
        company: "Open Learning Co",
        scale: CompanyScale::Sme,
        description: "Shape online courses for a growing catalogue of adult learners.",
        days_ago: 4,
        location: "Melbourne, VIC",
        country: "Australia",
        industry: "Education",
        salary: None,
        career_site: None,
    },
    Seed {
        id: "10",
        title: "Site Reliability Engineer",
        company: "Globex Cloud",
        scale: CompanyScale::Multinational,
        description: "Keep a multi-region platform fast and boring.",
        days_ago: 0,
        location: "Remote",
        country: "UK",
        industry: "Tech",
        salary: Some("£95,000"),
        career_site: Some("https://jobs.globex.example.com"),
    },
    Seed {
        id: "11",
        title: "Investment Analyst",
        company: "Harbour Capital",
        scale: CompanyScale::MidScale,
        description: "Research mid-market opportunities across the Asia-Pacific region.",
        days_ago: 12,
        location: "Sydney, NSW",
        country: "Australia",
        industry: "Finance",
        salary: None,
        career_site: None,
    },
    Seed {
        id: "12",
        title: "Mathematics Teacher",
        company: "Riverside Academy",
        scale: CompanyScale::Sme,
        description: "Teach secondary mathematics in a collaborative department.",
        days_ago: 21,
        location: "Pune",
        country: "India",
        industry: "Education",
        salary: None,
        career_site: None,
    },
    Seed {
        id: "13",
        title: "Machine Learning Engineer",
        company: "Aurora Labs",
        scale: CompanyScale::Startup,
        description: "Ship models that help radiologists triage scans faster.",
        days_ago: 6,
        location: "Vancouver, BC",
        country: "Canada",
        industry: "Healthcare",
        salary: Some("CA$140,000 - CA$170,000"),
        career_site: None,
    },
    Seed {
        id: "14",
        title: "Engineering Manager",
        company: "Tech Innovations Inc.",
        scale: CompanyScale::Startup,
        description: "Grow and support a team of eight product engineers.",
        days_ago: 45,
        location: "San Francisco, CA",
        country: "USA",
        industry: "Tech",
        salary: None,
        career_site: None,
    },
];

/// Build the demo listings with posting times relative to `now` (epoch millis).
pub fn listings(now: i64) -> Vec<Listing> {
    SEEDS
        .iter()
        .map(|seed| Listing {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            company: seed.company.to_string(),
            company_scale: seed.scale,
            description: seed.description.to_string(),
            apply_link: format!("https://example.com/apply/{}", seed.id),
            date_posted: now - seed.days_ago * DAY_MS,
            location: seed.location.to_string(),
            country: seed.country.to_string(),
            industry: seed.industry.to_string(),
            salary: seed.salary.map(str::to_string),
            company_career_site: seed.career_site.map(str::to_string),
            source_url: Some(format!("https://example.com/listings/{}", seed.id)),
        })
        .collect()
}
