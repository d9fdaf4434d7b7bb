use super::*;

#[test]
fn label_names_follow_digits() {
    assert_eq!(Label::new(0).map(Label::name), Some("zero"));
    assert_eq!(Label::new(9).map(Label::name), Some("nine"));
    assert!(Label::new(10).is_none());
}

#[test]
fn label_from_unit_covers_all_digits() {
    assert_eq!(Label::from_unit(0.0).digit(), 0);
    assert_eq!(Label::from_unit(0.35).digit(), 3);
    assert_eq!(Label::from_unit(0.999_999).digit(), 9);
    assert_eq!(Label::from_unit(1.0).digit(), 9);
    assert_eq!(Label::from_unit(f64::NAN).digit(), 0);
}

#[test]
fn payload_validate_accepts_full_frame() {
    let payload = SavePayload {
        number: 7,
        img: vec![0; PIXEL_COUNT],
    };
    assert_eq!(payload.validate(), Ok(Label::new(7).unwrap()));
}

#[test]
fn payload_validate_rejects_bad_label() {
    let payload = SavePayload {
        number: 12,
        img: vec![0; PIXEL_COUNT],
    };
    assert_eq!(payload.validate(), Err(PayloadError::LabelOutOfRange(12)));
}

#[test]
fn payload_validate_rejects_short_image() {
    let payload = SavePayload {
        number: 1,
        img: vec![0; 100],
    };
    assert_eq!(payload.validate(), Err(PayloadError::PixelCount(100)));
}

#[test]
fn payload_json_shape() {
    let payload = SavePayload::new(Label::new(3).unwrap(), vec![0, 255]);
    let json = serde_json::to_string(&payload).unwrap();
    assert_eq!(json, r#"{"number":3,"img":[0,255]}"#);
}

#[test]
fn save_response_reads_camel_case_and_skips_missing() {
    let response: SaveResponse =
        serde_json::from_str(r#"{"message":"saved as x","savedAs":"x"}"#).unwrap();
    assert_eq!(response.message.as_deref(), Some("saved as x"));
    assert_eq!(response.saved_as.as_deref(), Some("x"));
    assert!(response.prediction.is_none());

    let encoded = serde_json::to_string(&SaveResponse {
        saved_as: Some("y".into()),
        ..SaveResponse::default()
    })
    .unwrap();
    assert_eq!(encoded, r#"{"savedAs":"y"}"#);
}

#[test]
fn label_deserialize_rejects_out_of_range() {
    assert!(serde_json::from_str::<Label>("4").is_ok());
    assert!(serde_json::from_str::<Label>("11").is_err());
}
