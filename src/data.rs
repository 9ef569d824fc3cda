//! Demo records served by the board, with artificial latency so that skeletons are visible.

use serde::{Deserialize, Serialize};

use crate::utils::{async_sleep, CCStr};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub title: CCStr,
    pub company: CCStr,
    pub location: CCStr,
    pub salary: CCStr,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub title: CCStr,
    pub instructor: CCStr,
    pub duration_hours: u16,
    pub price_cents: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: CCStr,
    pub headline: CCStr,
    pub email: CCStr,
    pub location: CCStr,
    pub member_since: CCStr,
    pub skills: Vec<CCStr>,
    /// Intrinsic size of the avatar picture
    pub avatar_width: u32,
    pub avatar_height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobFilter {
    All,
    Remote,
    Onsite,
}
impl JobFilter {
    pub const ALL: [JobFilter; 3] = [JobFilter::All, JobFilter::Remote, JobFilter::Onsite];

    pub fn label(self) -> &'static str {
        match self {
            JobFilter::All => "All jobs",
            JobFilter::Remote => "Remote",
            JobFilter::Onsite => "On-site",
        }
    }

    pub fn matches(self, job: &Job) -> bool {
        match self {
            JobFilter::All => true,
            JobFilter::Remote => job.location.as_ref() == "Remote",
            JobFilter::Onsite => job.location.as_ref() != "Remote",
        }
    }
}

fn job(id: u32, title: &str, company: &str, location: &str, salary: &str, featured: bool) -> Job {
    Job {
        id,
        title: title.into(),
        company: company.into(),
        location: location.into(),
        salary: salary.into(),
        featured,
    }
}

fn catalog_jobs() -> Vec<Job> {
    vec![
        job(1, "Senior Rust Engineer", "Ferrous Systems", "Remote", "$150k - $180k", true),
        job(2, "Frontend Developer", "Pixel Forge", "Berlin", "€70k - €85k", false),
        job(3, "Site Reliability Engineer", "Northwind", "Remote", "$130k - $160k", false),
        job(4, "Product Designer", "Lumen Labs", "Lisbon", "€55k - €65k", true),
        job(5, "Data Engineer", "Quarry Analytics", "Toronto", "$120k - $140k", false),
        job(6, "Embedded Developer", "Volt Motion", "Munich", "€75k - €90k", false),
    ]
}

fn catalog_courses() -> Vec<Course> {
    [
        ("Ownership in Practice", "Ana Duarte", 6, 4900),
        ("Async Services from Scratch", "Marc Olsen", 9, 7900),
        ("Accessible Interfaces", "Priya Raman", 4, 0),
        ("Measuring Web Vitals", "Tom Becker", 3, 2900),
        ("Design Systems 101", "Lea Morel", 5, 3900),
        ("Testing UI Components", "Sam Okafor", 4, 3400),
    ]
    .into_iter()
    .zip(1..)
    .map(|((title, instructor, duration_hours, price_cents), id)| Course {
        id,
        title: title.into(),
        instructor: instructor.into(),
        duration_hours,
        price_cents,
    })
    .collect()
}

pub async fn fetch_jobs(latency_ms: u64) -> Result<Vec<Job>, CCStr> {
    log::debug!("fetch_jobs - start");
    async_sleep(latency_ms).await;
    let jobs = catalog_jobs();
    log::debug!("fetch_jobs - loaded {} jobs", jobs.len());
    Ok(jobs)
}

pub async fn fetch_featured_jobs(latency_ms: u64) -> Result<Vec<Job>, CCStr> {
    log::debug!("fetch_featured_jobs - start");
    async_sleep(latency_ms).await;
    Ok(catalog_jobs().into_iter().filter(|j| j.featured).collect())
}

pub async fn fetch_courses(latency_ms: u64) -> Result<Vec<Course>, CCStr> {
    log::debug!("fetch_courses - start");
    async_sleep(latency_ms).await;
    Ok(catalog_courses())
}

pub async fn fetch_profile(latency_ms: u64) -> Result<Profile, CCStr> {
    log::debug!("fetch_profile - start");
    async_sleep(latency_ms).await;
    Ok(Profile {
        name: "Jordan Avery".into(),
        headline: "Platform engineer, accessibility advocate".into(),
        email: "jordan.avery@example.org".into(),
        location: "Remote".into(),
        member_since: "2021".into(),
        skills: ["Rust", "WebAssembly", "Accessibility", "Observability"]
            .into_iter()
            .map(CCStr::from)
            .collect(),
        avatar_width: 400,
        avatar_height: 400,
    })
}

/// Formats a price in cents, `0` being "Free"
pub fn format_price(price_cents: u32) -> String {
    match price_cents {
        0 => "Free".to_owned(),
        c => format!("${}.{:02}", c / 100, c % 100),
    }
}
