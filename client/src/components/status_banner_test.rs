use super::*;

#[test]
fn status_class_tracks_kind() {
    assert_eq!(status_class(StatusKind::Error), "status status--error");
    assert_eq!(status_class(StatusKind::Warning), "status status--warning");
}

#[test]
fn status_icons_are_distinct() {
    let kinds = [StatusKind::Info, StatusKind::Success, StatusKind::Warning, StatusKind::Error];
    for (i, a) in kinds.iter().enumerate() {
        for b in &kinds[i + 1..] {
            assert_ne!(status_icon(*a), status_icon(*b));
        }
    }
}
