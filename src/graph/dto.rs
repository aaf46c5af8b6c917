use serde::{Deserialize, Serialize};

use crate::models::Course;

#[derive(Debug, Serialize)]
pub struct GraphqlRequest {
    pub query: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<CourseVariables>,
}

#[derive(Debug, Serialize)]
pub struct CourseVariables {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<ResponseData>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseData {
    #[serde(rename = "api_v1_coursesCollection", default)]
    pub courses_collection: Option<CoursesCollection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CoursesCollection {
    #[serde(default)]
    pub edges: Vec<Edge>,
}

#[derive(Debug, Deserialize)]
pub struct Edge {
    #[serde(default)]
    pub cursor: String,
    pub node: Course,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}
