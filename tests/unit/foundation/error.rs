use super::*;

#[test]
fn duration_error_names_the_offending_value() {
    let err = crate::animation::descriptor::Timing {
        duration: -0.5,
        ..Default::default()
    }
    .validate()
    .unwrap_err();
    assert!(matches!(err, MotionError::Validation(_)));
    assert!(err.to_string().starts_with("validation error: duration"));
    assert!(err.to_string().contains("-0.5"));
}

#[test]
fn unknown_keyword_is_reported_as_serialization_error() {
    let err = crate::AnimationDescriptor::from_json(
        "slide",
        &serde_json::json!({"direction": "sideways"}),
    )
    .unwrap_err();
    assert!(matches!(err, MotionError::Serde(_)));
    assert!(err.to_string().starts_with("serialization error: invalid slide params"));
}
