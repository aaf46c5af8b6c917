//! Which course field each modal tab shows for a given `?section=`.

use crate::models::CourseView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Info,
    Career,
    Recognition,
    Eligibility,
    Curriculum,
}

impl Panel {
    /// HTML fragment for `section`; unknown or missing sections fall back to the
    /// panel's main field.
    pub fn fragment(self, view: &CourseView, section: Option<&str>) -> String {
        let course = &view.course;
        let section = section.unwrap_or_default();

        match (self, section) {
            (Panel::Info, "duration") => course.duration_and_study_load.clone(),
            (Panel::Info, "delivery") => course.delivery_long_text.clone(),
            (Panel::Info, "skills") => course.what_youll_learn.clone(),
            (Panel::Info, "whofor") => course.who_is_it_for.clone(),
            (Panel::Info, _) => course.overview.clone(),
            (Panel::Career, "study") => course.further_study_and_education_pathways.clone(),
            (Panel::Career, _) => course.job_outcomes.clone(),
            // Partner names are plain text, not markup.
            (Panel::Recognition, "partnership") => escape_text(&course.partner.name),
            (Panel::Recognition, _) => course.professional_recognition.clone(),
            (Panel::Eligibility, "prior") => course.recognition_of_prior_learning.clone(),
            (Panel::Eligibility, _) => course.entry_requirements.clone(),
            (Panel::Curriculum, "assessment") => course.assessment.clone(),
            (Panel::Curriculum, _) => course.materials.clone(),
        }
    }
}

fn escape_text(text: &str) -> String {
    ammonia::clean_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> CourseView {
        let mut view = CourseView::default();
        view.course.overview = "<p>overview</p>".to_string();
        view.course.duration_and_study_load = "<p>12 months</p>".to_string();
        view.course.job_outcomes = "<p>jobs</p>".to_string();
        view.course.further_study_and_education_pathways = "<p>study</p>".to_string();
        view.course.partner.name = "<b>Acme</b>".to_string();
        view
    }

    #[test]
    fn test_info_sections() {
        let view = view();
        assert_eq!(Panel::Info.fragment(&view, Some("duration")), "<p>12 months</p>");
        assert_eq!(Panel::Info.fragment(&view, None), "<p>overview</p>");
        assert_eq!(Panel::Info.fragment(&view, Some("unknown")), "<p>overview</p>");
    }

    #[test]
    fn test_career_sections() {
        let view = view();
        assert_eq!(Panel::Career.fragment(&view, Some("study")), "<p>study</p>");
        assert_eq!(Panel::Career.fragment(&view, None), "<p>jobs</p>");
    }

    #[test]
    fn test_partner_name_is_escaped() {
        let view = view();
        let fragment = Panel::Recognition.fragment(&view, Some("partnership"));
        assert!(!fragment.contains('<'));
        assert!(fragment.contains("Acme"));
    }
}
