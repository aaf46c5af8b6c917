//! GraphQL documents sent to the course data source.

macro_rules! course_node_selection {
    () => {
        r#"
                edges {
                    cursor
                    node {
                        id
                        guid
                        course_name
                        level
                        delivery
                        delivery_long_text
                        locations
                        course_code
                        overview
                        who_is_it_for
                        what_youll_learn
                        duration_and_study_load
                        job_outcomes
                        entry_requirements
                        course_features
                        work_placement
                        recognition_of_prior_learning
                        assessment
                        further_study_and_education_pathways
                        professional_recognition
                        materials
                        payment_options
                        additional_information
                        geo_targeting
                        course_module
                        top_panel
                        start_date
                        frequency
                        duration_length
                        duration_unit
                        partner_id
                        partner {
                            id
                            name
                            logo
                        }
                        testimonies
                        brand_id
                        brand {
                            id
                            provider_name
                            about_provider
                            logo
                            rto_code
                        }
                    }
                }
"#
    };
}

pub const COURSE_BY_ID_QUERY: &str = concat!(
    "query($id: Int!) {\n",
    "    api_v1_coursesCollection(filter: { id: { eq: $id } }) {",
    course_node_selection!(),
    "    }\n",
    "}\n",
);

pub const COURSES_QUERY: &str = concat!(
    "query {\n",
    "    api_v1_coursesCollection {",
    course_node_selection!(),
    "    }\n",
    "}\n",
);
