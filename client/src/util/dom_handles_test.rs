use super::*;

#[test]
fn reveal_content_unhides_root() {
    assert_eq!(
        dom_action(LoaderEffect::RevealContent),
        Some(DomAction::RemoveClass { id: "root", class: "loading-hidden" })
    );
}

#[test]
fn overlay_effects_target_initial_loader() {
    assert_eq!(
        dom_action(LoaderEffect::HideOverlay),
        Some(DomAction::AddClass { id: "initial-loader", class: "hidden" })
    );
    assert_eq!(dom_action(LoaderEffect::RemoveOverlay), Some(DomAction::RemoveElement { id: "initial-loader" }));
}

#[test]
fn session_marker_is_not_a_dom_action() {
    assert_eq!(dom_action(LoaderEffect::MarkSessionComplete), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn apply_is_noop_but_callable() {
    apply(DomAction::RemoveElement { id: "initial-loader" });
}
