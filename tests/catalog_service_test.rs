mod common;

use std::sync::Arc;

use common::{FULL_COURSE, FailingCourseSource, SPARSE_COURSE, StaticCourseSource};
use course_catalog::error::AppError;
use course_catalog::graph::{CourseFilter, NoopCourseSource};
use course_catalog::services::CatalogService;
use course_catalog::services::catalog_service::course_modules;

fn service(nodes: &[&str]) -> CatalogService {
    CatalogService::new(Arc::new(StaticCourseSource::from_json(nodes)))
}

#[tokio::test]
async fn test_missing_course_returns_empty_view() {
    let service = CatalogService::new(Arc::new(NoopCourseSource));
    let view = service.fetch_course_by_id(999).await.expect("not found is not an error");

    assert_eq!(view.course.id, 0);
    assert!(!view.is_found());
}

#[tokio::test]
async fn test_course_view_is_assembled() {
    let view = service(&[FULL_COURSE]).fetch_course_by_id(42).await.unwrap();

    assert!(view.is_found());
    assert_eq!(view.id_text, "42");
    assert_eq!(view.delivery_text, "Online, Blended");
    assert_eq!(view.frequency_text, "Part Time, EVENINGS");
    assert_eq!(view.geo_targeting_text, "warning");
    assert_eq!(view.testimonial_text, "Great!");
    assert_eq!(view.course.locations, ["Sydney", "Sydney"]);
    assert_eq!(view.course.partner.name, "Acme <Training>");
}

#[tokio::test]
async fn test_rich_text_is_sanitized() {
    let view = service(&[FULL_COURSE]).fetch_course_by_id(42).await.unwrap();

    assert_eq!(view.course.overview, "<p>ok</p>");
    assert_eq!(view.course.job_outcomes, "<p>Manager</p>");
    assert!(!view.course.brand.about_provider.contains("onerror"));
    assert!(view.course.brand.about_provider.starts_with("<p>About"));
}

#[tokio::test]
async fn test_bad_embedded_fields_do_not_fail_the_course() {
    let view = service(&[SPARSE_COURSE]).fetch_course_by_id(7).await.unwrap();

    assert!(view.is_found());
    assert_eq!(view.course.course_name, "Certificate III");
    assert_eq!(view.testimonial_text, "");
    assert_eq!(view.delivery_text, "");
    assert_eq!(view.frequency_text, "Full Time");
    assert_eq!(view.course.overview, "");
    assert_eq!(view.course.partner.id, 0);
    assert!(course_modules(&view).is_empty());
}

#[tokio::test]
async fn test_collection_uses_same_pipeline_in_source_order() {
    let filter = CourseFilter {
        tag: Some("marketing".to_string()),
    };
    let views = service(&[SPARSE_COURSE, FULL_COURSE])
        .fetch_courses(&filter)
        .await
        .unwrap();

    assert_eq!(views.len(), 2);
    assert_eq!(views[0].id_text, "7");
    assert_eq!(views[1].id_text, "42");
    assert_eq!(views[1].delivery_text, "Online, Blended");
    assert_eq!(views[1].testimonial_text, "Great!");
    assert_eq!(views[1].course.overview, "<p>ok</p>");
}

#[tokio::test]
async fn test_course_detail_groups_modules() {
    let detail = service(&[FULL_COURSE])
        .course_detail(42, "http://forms.example/enquire")
        .await
        .unwrap();

    assert_eq!(detail.enquire_form_url, "http://forms.example/enquire");
    assert_eq!(detail.modules.len(), 2);
    assert_eq!(detail.modules[0].module, "Core");
    assert_eq!(detail.modules[0].subjects.len(), 2);
    assert_eq!(detail.modules[0].subjects[0].details, "<b>Lead</b>");
    assert_eq!(detail.modules[1].module, "Electives");
}

#[tokio::test]
async fn test_course_detail_for_missing_course_is_not_found() {
    let result = service(&[FULL_COURSE]).course_detail(1, "").await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_source_errors_propagate() {
    let service = CatalogService::new(Arc::new(FailingCourseSource));

    assert!(service.fetch_course_by_id(1).await.is_err());
    assert!(service.fetch_courses(&CourseFilter::default()).await.is_err());
}

#[tokio::test]
async fn test_serialized_view_omits_undecoded_columns() {
    let view = service(&[FULL_COURSE]).fetch_course_by_id(42).await.unwrap();
    let json = serde_json::to_string(&view).unwrap();

    assert!(!json.contains("<script"), "{}", json);
    assert!(!json.contains("\"course_module\""));
    assert!(!json.contains("\"testimonies\""));
    assert!(json.contains("\"testimonial_text\":\"Great!\""));
}
