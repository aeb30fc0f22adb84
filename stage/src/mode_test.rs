use super::*;

#[test]
fn tracks_are_ordered_left_to_right() {
    assert_eq!(Mode::TRACKS, [Mode::Storytelling, Mode::Uiux]);
}

#[test]
fn only_unset_is_not_set() {
    assert!(Mode::Storytelling.is_set());
    assert!(Mode::Uiux.is_set());
    assert!(!Mode::Unset.is_set());
}

#[test]
fn knob_target_uses_extremes() {
    assert_eq!(Mode::Storytelling.knob_target(200.0), 0.0);
    assert_eq!(Mode::Uiux.knob_target(200.0), 200.0);
    assert_eq!(Mode::Unset.knob_target(200.0), 0.0);
}

#[test]
fn knob_target_never_negative() {
    assert_eq!(Mode::Uiux.knob_target(-12.0), 0.0);
}

#[test]
fn description_for_unset_is_the_hint() {
    assert_eq!(Mode::Unset.description(), UNSET_HINT);
    assert!(Mode::Storytelling.description().contains('\n'));
    assert!(Mode::Uiux.description().contains('\n'));
}

#[test]
fn parses_known_labels() {
    assert_eq!("storytelling".parse::<Mode>().unwrap(), Mode::Storytelling);
    assert_eq!(" UIUX ".parse::<Mode>().unwrap(), Mode::Uiux);
    assert_eq!("UI/UX".parse::<Mode>().unwrap(), Mode::Uiux);
}

#[test]
fn unset_and_unknown_labels_are_rejected() {
    assert!(matches!("unset".parse::<Mode>(), Err(StageError::UnknownMode(_))));
    assert!(matches!("poetry".parse::<Mode>(), Err(StageError::UnknownMode(label)) if label == "poetry"));
}

#[test]
fn display_matches_slug() {
    assert_eq!(Mode::Uiux.to_string(), "uiux");
    assert_eq!(Mode::Storytelling.to_string(), "storytelling");
}

#[test]
fn serde_uses_lowercase_slugs() {
    assert_eq!(serde_json::to_string(&Mode::Uiux).unwrap(), "\"uiux\"");
    assert_eq!(serde_json::from_str::<Mode>("\"storytelling\"").unwrap(), Mode::Storytelling);
}
