use super::*;

// The handle type is irrelevant to the state machine; use unit.
fn cache() -> IconCache<()> {
    IconCache::new()
}

#[test]
fn begin_claims_a_fresh_path() {
    let mut icons = cache();
    assert!(icons.begin("/icons/abri.png"));
    assert!(icons.contains("/icons/abri.png"));
    assert_eq!(icons.get("/icons/abri.png"), None);
}

#[test]
fn begin_is_granted_once_while_pending() {
    let mut icons = cache();
    assert!(icons.begin("/icons/abri.png"));
    assert!(!icons.begin("/icons/abri.png"));
    assert!(!icons.begin("/icons/abri.png"));
}

#[test]
fn resolve_makes_the_asset_available() {
    let mut icons = cache();
    icons.begin("/icons/abri.png");
    icons.resolve("/icons/abri.png", ());
    assert_eq!(icons.get("/icons/abri.png"), Some(&()));
}

#[test]
fn ready_assets_cannot_be_reclaimed() {
    let mut icons = cache();
    icons.begin("/icons/abri.png");
    icons.resolve("/icons/abri.png", ());
    assert!(!icons.begin("/icons/abri.png"));
}

#[test]
fn failed_loads_are_not_available() {
    let mut icons = cache();
    icons.begin("/icons/abri.png");
    icons.fail("/icons/abri.png");
    assert_eq!(icons.get("/icons/abri.png"), None);
    assert!(icons.contains("/icons/abri.png"));
}

#[test]
fn failed_loads_may_be_retried() {
    let mut icons = cache();
    icons.begin("/icons/abri.png");
    icons.fail("/icons/abri.png");
    assert!(icons.begin("/icons/abri.png"));
    // The retry is in flight again, so further claims are denied.
    assert!(!icons.begin("/icons/abri.png"));
}

#[test]
fn paths_settle_independently() {
    let mut icons = cache();
    icons.begin("/icons/a.png");
    icons.begin("/icons/b.png");
    icons.resolve("/icons/a.png", ());
    icons.fail("/icons/b.png");
    assert_eq!(icons.get("/icons/a.png"), Some(&()));
    assert_eq!(icons.get("/icons/b.png"), None);
    assert!(icons.begin("/icons/b.png"));
    assert!(!icons.begin("/icons/a.png"));
}

#[test]
fn contains_tracks_every_claimed_path() {
    let mut icons = cache();
    assert!(!icons.contains("/icons/abri.png"));
    icons.begin("/icons/abri.png");
    assert!(icons.contains("/icons/abri.png"));
    icons.fail("/icons/abri.png");
    assert!(icons.contains("/icons/abri.png"));
}

#[test]
fn unknown_path_is_absent_everywhere() {
    let icons = cache();
    assert_eq!(icons.get("/icons/nope.png"), None);
    assert!(!icons.contains("/icons/nope.png"));
}
