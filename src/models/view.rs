use serde::{Deserialize, Serialize};

use super::course::Course;
use super::null_as_default;

/// Presentation-ready projection of a [`Course`].
///
/// Built fresh per request by the catalog service. The wrapped course has already had
/// every rich-text field sanitized, so nothing in here carries raw upstream HTML.
/// A default view (`id == 0`) stands for "no such course".
#[derive(Debug, Clone, Default, Serialize)]
pub struct CourseView {
    #[serde(flatten)]
    pub course: Course,
    pub id_text: String,
    pub delivery_text: String,
    pub frequency_text: String,
    pub testimonial_text: String,
    pub geo_targeting_text: String,
}

impl CourseView {
    pub fn is_found(&self) -> bool {
        self.course.id != 0
    }
}

/// One curriculum entry inside `course_module`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectItem {
    #[serde(alias = "Code", deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "Details", deserialize_with = "null_as_default")]
    pub details: String,
    /// Non-empty on the first subject of a module.
    #[serde(alias = "Module", deserialize_with = "null_as_default")]
    pub module: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleGroup {
    pub module: String,
    pub subjects: Vec<SubjectItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub course_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub testimonial: String,
}

/// Everything the course modal needs.
#[derive(Debug, Clone, Serialize)]
pub struct CourseDetail {
    pub course: CourseView,
    pub modules: Vec<ModuleGroup>,
    pub enquire_form_url: String,
}
