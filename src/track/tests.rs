use super::*;
use std::collections::HashSet;
use std::time::Duration;

#[test]
fn builtin_track_matches_shipped_metadata() {
    let t = TrackRecord::builtin();
    assert_eq!(t.title(), "1 Minute Relaxing Meditation");
    assert!(t.description().starts_with("Clear your mind"));
    assert!(t.description().ends_with("quick breather."));
    assert_eq!(t.duration(), Duration::from_secs(70));
    assert_eq!(t.audio_resource(), "meditation1");
    assert_eq!(t.artwork_resource(), "image-feather");
}

#[test]
fn every_record_gets_a_fresh_id() {
    let a = TrackRecord::new("A", "", Duration::from_secs(1), "a", "img");
    let b = TrackRecord::new("A", "", Duration::from_secs(1), "a", "img");
    assert_ne!(a.id(), b.id());
    assert_ne!(a, b);
}

#[test]
fn equality_and_hash_follow_the_id() {
    let a = TrackRecord::builtin();
    let copy = a.clone();
    assert_eq!(a, copy);

    let mut set = HashSet::new();
    set.insert(a.clone());
    set.insert(copy);
    set.insert(TrackRecord::builtin());
    assert_eq!(set.len(), 2);
}

#[test]
fn read_tags_rejects_files_lofty_cannot_parse() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("notes.txt");
    std::fs::write(&p, b"plain text, no audio").unwrap();
    assert_eq!(read_tags(&p), None);
    assert_eq!(read_tags(&dir.path().join("missing.mp3")), None);
}
