use std::sync::Arc;

use crate::graph::CourseSource;

#[derive(Clone)]
pub struct AppState {
    pub courses: Arc<dyn CourseSource>,
    pub enquire_form_url: String,
}
