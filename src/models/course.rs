use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use super::null_as_default;

/// A course record as the data source returns it.
///
/// `course_module`, `top_panel` and `testimonies` are kept undecoded: upstream sends
/// them either as a JSON array or as a string holding that array. They are never
/// serialized back out; views expose their sanitized, decoded forms instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub guid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub course_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub level: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub delivery: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub delivery_long_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub locations: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub course_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(deserialize_with = "null_as_default")]
    pub who_is_it_for: String,
    #[serde(deserialize_with = "null_as_default")]
    pub what_youll_learn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duration_and_study_load: String,
    #[serde(deserialize_with = "null_as_default")]
    pub job_outcomes: String,
    #[serde(deserialize_with = "null_as_default")]
    pub entry_requirements: String,
    #[serde(deserialize_with = "null_as_default")]
    pub course_features: String,
    #[serde(deserialize_with = "null_as_default")]
    pub work_placement: String,
    #[serde(deserialize_with = "null_as_default")]
    pub recognition_of_prior_learning: String,
    #[serde(deserialize_with = "null_as_default")]
    pub assessment: String,
    #[serde(deserialize_with = "null_as_default")]
    pub further_study_and_education_pathways: String,
    #[serde(deserialize_with = "null_as_default")]
    pub professional_recognition: String,
    #[serde(deserialize_with = "null_as_default")]
    pub materials: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_options: String,
    #[serde(deserialize_with = "null_as_default")]
    pub additional_information: String,
    #[serde(deserialize_with = "null_as_default")]
    pub geo_targeting: String,
    #[serde(skip_serializing)]
    pub course_module: Option<Box<RawValue>>,
    #[serde(skip_serializing)]
    pub top_panel: Option<Box<RawValue>>,
    #[serde(skip_serializing)]
    pub testimonies: Option<Box<RawValue>>,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub frequency: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub duration_length: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duration_unit: String,
    #[serde(deserialize_with = "null_as_default")]
    pub partner_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub partner: Partner,
    #[serde(deserialize_with = "null_as_default")]
    pub brand_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub brand: Brand,
}

impl Course {
    /// Every field that may carry untrusted HTML.
    pub fn rich_text_fields_mut(&mut self) -> [&mut String; 17] {
        [
            &mut self.delivery_long_text,
            &mut self.overview,
            &mut self.who_is_it_for,
            &mut self.what_youll_learn,
            &mut self.duration_and_study_load,
            &mut self.job_outcomes,
            &mut self.entry_requirements,
            &mut self.course_features,
            &mut self.work_placement,
            &mut self.recognition_of_prior_learning,
            &mut self.assessment,
            &mut self.further_study_and_education_pathways,
            &mut self.professional_recognition,
            &mut self.materials,
            &mut self.payment_options,
            &mut self.additional_information,
            &mut self.brand.about_provider,
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Partner {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub logo: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub provider_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub about_provider: String,
    #[serde(deserialize_with = "null_as_default")]
    pub logo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rto_code: String,
}
