//! Wire shape and JsonSchema validation tests for the RPC messages.

use pretty_assertions::assert_eq;
use schemars::schema_for;
use serde_json::json;

use course_core::messages::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! conforms_to_schema {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn go_basics_request() -> CreateCourseRequest {
    CreateCourseRequest {
        title: "Go Basics".into(),
        difficulty: "easy".into(),
        duration: 120,
        themes: vec![CreateTheme {
            title: "Intro".into(),
            lessons: vec![CreateLesson {
                title: "Setup".into(),
                kind: "video".into(),
                duration: 10,
                ..Default::default()
            }],
        }],
        ..Default::default()
    }
}

conforms_to_schema!(create_request_schema, CreateCourseRequest, go_basics_request());

conforms_to_schema!(
    update_request_schema,
    UpdateCourseRequest,
    UpdateCourseRequest {
        id: 3,
        title: "Go Basics".into(),
        themes: vec![UpdateTheme {
            id: Some(4),
            title: "Intro".into(),
            lessons: vec![UpdateLesson {
                id: None,
                title: "Modules".into(),
                kind: "text".into(),
                practice_type: Some("quiz".into()),
                completed: Some(false),
                ..Default::default()
            }],
        }],
        ..Default::default()
    }
);

conforms_to_schema!(
    get_course_response_schema,
    GetCourseResponse,
    GetCourseResponse {
        id: 1,
        title: "Go Basics".into(),
        description: String::new(),
        full_description: String::new(),
        work: String::new(),
        difficulty: "easy".into(),
        duration: 120,
        image: String::new(),
        themes: vec![ThemeMessage {
            id: 1,
            title: "Intro".into(),
            lessons: vec![LessonMessage {
                id: 1,
                title: "Setup".into(),
                kind: "video".into(),
                duration: 10,
                content: String::new(),
                practice_type: None,
                task: String::new(),
                completed: None,
            }],
        }],
    }
);

#[test]
fn lesson_kind_travels_as_type() {
    let value = serde_json::to_value(&go_basics_request()).unwrap();
    assert_eq!(value["themes"][0]["lessons"][0]["type"], json!("video"));
    assert!(value["themes"][0]["lessons"][0].get("kind").is_none());
}

#[test]
fn update_child_without_id_deserializes_to_none() {
    let request: UpdateCourseRequest = serde_json::from_value(json!({
        "id": 9,
        "title": "Go Basics",
        "themes": [
            { "title": "New theme" },
            { "id": 12, "title": "Old theme", "lessons": [{ "id": 30, "title": "Setup" }] }
        ]
    }))
    .unwrap();

    assert_eq!(request.themes[0].id, None);
    assert_eq!(request.themes[1].id, Some(12));
    assert_eq!(request.themes[1].lessons[0].id, Some(30));
}

#[test]
fn optional_fields_default_when_omitted() {
    let request: CreateCourseRequest =
        serde_json::from_value(json!({ "title": "Only a title" })).unwrap();
    assert_eq!(
        request,
        CreateCourseRequest {
            title: "Only a title".into(),
            ..Default::default()
        }
    );
}

#[test]
fn success_response_shape() {
    let value = serde_json::to_value(SuccessResponse::ok()).unwrap();
    assert_eq!(value, json!({ "success": true }));
}
