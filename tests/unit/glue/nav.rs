use super::*;

#[test]
fn navbar_turns_compact_strictly_after_threshold() {
    assert!(!navbar_scrolled(0.0));
    assert!(!navbar_scrolled(100.0));
    assert!(navbar_scrolled(100.5));
}

fn page() -> Vec<Section> {
    vec![
        Section::new("home", 0.0, 700.0),
        Section::new("features", 700.0, 500.0),
        Section::new("about", 1200.0, 400.0),
    ]
}

#[test]
fn active_section_leads_by_one_hundred_pixels() {
    let sections = page();
    assert_eq!(active_section(0.0, &sections), Some("home"));
    assert_eq!(active_section(599.0, &sections), Some("home"));
    assert_eq!(active_section(650.0, &sections), Some("features"));
    assert_eq!(active_section(1100.0, &sections), Some("about"));
    assert_eq!(active_section(1500.0, &sections), None);
}

#[test]
fn overlapping_sections_prefer_the_later_one() {
    let sections = vec![Section::new("a", 100.0, 1000.0), Section::new("b", 300.0, 100.0)];
    assert_eq!(active_section(250.0, &sections), Some("b"));
    assert_eq!(active_section(350.0, &sections), Some("a"));
}

#[test]
fn section_above_first_top_is_not_active() {
    let sections = vec![Section::new("x", 500.0, 100.0)];
    assert_eq!(active_section(100.0, &sections), None);
}

#[test]
fn initials_take_first_two_words() {
    assert_eq!(initials("ada lovelace"), "AL");
    assert_eq!(initials("Mary Ann Evans"), "MA");
    assert_eq!(initials("Plato"), "P");
    assert_eq!(initials("  "), "");
}
