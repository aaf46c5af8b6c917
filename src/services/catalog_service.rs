use std::sync::Arc;

use tracing::{debug, info};

use crate::error::AppError;
use crate::graph::{CourseFilter, CourseSource};
use crate::models::{Course, CourseDetail, CourseView, ModuleGroup, SubjectItem, TestimonialEntry};
use crate::services::labels::{self, LabelCategory};
use crate::services::modules::group_by_module;
use crate::services::nested_json;
use crate::services::sanitizer::{sanitize, sanitize_in_place};

pub struct CatalogService {
    source: Arc<dyn CourseSource>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CourseSource>) -> Self {
        Self { source }
    }

    /// Returns `CourseView::default()` when no course matches; check
    /// [`CourseView::is_found`].
    pub async fn fetch_course_by_id(&self, id: i64) -> Result<CourseView, AppError> {
        match self.source.fetch_course(id).await? {
            Some(course) => Ok(build_view(course)),
            None => {
                info!("No course found with id {}", id);
                Ok(CourseView::default())
            }
        }
    }

    pub async fn fetch_courses(&self, filter: &CourseFilter) -> Result<Vec<CourseView>, AppError> {
        let courses = self.source.fetch_courses(filter).await?;
        debug!("Building views for {} courses", courses.len());
        Ok(courses.into_iter().map(build_view).collect())
    }

    /// Course view plus its curriculum, or `NotFound`.
    pub async fn course_detail(
        &self,
        id: i64,
        enquire_form_url: &str,
    ) -> Result<CourseDetail, AppError> {
        let course = self.fetch_course_by_id(id).await?;
        if !course.is_found() {
            return Err(AppError::NotFound);
        }

        let modules = course_modules(&course);
        Ok(CourseDetail {
            course,
            modules,
            enquire_form_url: enquire_form_url.to_string(),
        })
    }
}

/// Decodes `course_module` and groups it into modules.
pub fn course_modules(view: &CourseView) -> Vec<ModuleGroup> {
    let items: Vec<SubjectItem> =
        nested_json::decode_field("course_module", view.course.course_module.as_deref());
    group_by_module(items)
}

/// The single course -> view transformation used by both fetch paths.
pub fn build_view(mut course: Course) -> CourseView {
    for field in course.rich_text_fields_mut() {
        sanitize_in_place(field);
    }

    let testimonials: Vec<TestimonialEntry> =
        nested_json::decode_field("testimonies", course.testimonies.as_deref());
    let testimonial_text = testimonials
        .first()
        .map(|entry| sanitize(&entry.testimonial))
        .unwrap_or_default();

    CourseView {
        id_text: course.id.to_string(),
        delivery_text: labels::join_labels(LabelCategory::Delivery, &course.delivery),
        frequency_text: labels::join_labels(LabelCategory::Frequency, &course.frequency),
        geo_targeting_text: labels::resolve(LabelCategory::GeoTargeting, &course.geo_targeting)
            .to_string(),
        testimonial_text,
        course,
    }
}
