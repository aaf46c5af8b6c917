#![allow(dead_code)]

use async_trait::async_trait;
use course_catalog::error::AppError;
use course_catalog::graph::{CourseFilter, CourseSource};
use course_catalog::models::Course;

/// In-memory stand-in for the GraphQL data source.
pub struct StaticCourseSource {
    pub courses: Vec<Course>,
}

impl StaticCourseSource {
    pub fn from_json(nodes: &[&str]) -> Self {
        let courses = nodes
            .iter()
            .map(|node| serde_json::from_str::<Course>(node).expect("invalid course fixture"))
            .collect();
        Self { courses }
    }
}

#[async_trait]
impl CourseSource for StaticCourseSource {
    async fn fetch_course(&self, id: i64) -> Result<Option<Course>, AppError> {
        Ok(self.courses.iter().find(|c| c.id == id).cloned())
    }

    async fn fetch_courses(&self, _filter: &CourseFilter) -> Result<Vec<Course>, AppError> {
        Ok(self.courses.clone())
    }
}

/// Always fails the way an unreachable data source does.
pub struct FailingCourseSource;

#[async_trait]
impl CourseSource for FailingCourseSource {
    async fn fetch_course(&self, _id: i64) -> Result<Option<Course>, AppError> {
        Err(AppError::Graphql("upstream unavailable".to_string()))
    }

    async fn fetch_courses(&self, _filter: &CourseFilter) -> Result<Vec<Course>, AppError> {
        Err(AppError::Graphql("upstream unavailable".to_string()))
    }
}

pub const FULL_COURSE: &str = r#"{
    "id": 42,
    "guid": "c-42",
    "course_name": "Diploma of Business",
    "course_code": "BSB50120",
    "level": ["DIPLOMA"],
    "delivery": ["online", "blended"],
    "frequency": ["PART_TIME", "EVENINGS"],
    "locations": ["Sydney", "Sydney"],
    "geo_targeting": "WARNING",
    "overview": "<script>alert(1)</script><p>ok</p>",
    "job_outcomes": "<p onclick=\"steal()\">Manager</p>",
    "who_is_it_for": "<p>Everyone</p>",
    "duration_and_study_load": "<p>12 months</p>",
    "further_study_and_education_pathways": "<p>Advanced Diploma</p>",
    "professional_recognition": "<p>Recognised</p>",
    "entry_requirements": "<p>Year 12</p>",
    "recognition_of_prior_learning": "<p>RPL available</p>",
    "assessment": "<p>Projects</p>",
    "materials": "<p>Online portal</p>",
    "testimonies": "[{\"full_name\":\"A\",\"course_name\":\"B\",\"testimonial\":\"Great!\"}]",
    "course_module": [
        {"code": "BSB1", "name": "Lead", "details": "<b>Lead</b><script>x()</script>", "module": "Core"},
        {"code": "BSB2", "name": "Plan", "details": "<i>Plan</i>", "module": ""},
        {"code": "BSB3", "name": "Market", "details": "", "module": "Electives"}
    ],
    "top_panel": null,
    "start_date": "2025-02-01",
    "duration_length": "12",
    "duration_unit": "months",
    "partner_id": 7,
    "partner": {"id": 7, "name": "Acme <Training>", "logo": "acme.png"},
    "brand_id": 3,
    "brand": {"id": 3, "provider_name": "Acme", "about_provider": "<p>About<img src=x onerror=alert(1)></p>", "logo": null, "rto_code": "123"}
}"#;

pub const SPARSE_COURSE: &str = r#"{
    "id": 7,
    "course_name": "Certificate III",
    "delivery": null,
    "frequency": ["FULL_TIME"],
    "overview": null,
    "testimonies": "{not json",
    "course_module": "",
    "partner": null,
    "brand": null
}"#;
