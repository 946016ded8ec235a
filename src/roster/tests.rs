//! Tests for the in-memory record store

use super::*;

fn names(roster: &Roster) -> Vec<&str> {
    roster.students().iter().map(|s| s.name.as_str()).collect()
}

#[test]
fn test_new_roster_is_empty() {
    let roster = Roster::new(AverageMode::Mean);
    assert!(roster.is_empty());
    assert_eq!(roster.len(), 0);
    assert!(roster.select().is_empty());
}

#[test]
fn test_single_add_keeps_length_one() {
    let mut roster = Roster::new(AverageMode::Mean);
    roster.add(Student::new("Ivanov A.A.", "101", vec![5, 5, 4, 5, 5]));

    assert_eq!(roster.len(), 1);
    let selected = roster.select();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].name, "Ivanov A.A.");
}

#[test]
fn test_add_sorts_ascending_by_average() {
    let mut roster = Roster::new(AverageMode::Mean);
    roster.add(Student::new("Top", "1", vec![5, 5, 5, 5, 5]));
    roster.add(Student::new("Low", "1", vec![2, 3, 3, 2, 3]));
    roster.add(Student::new("Mid", "1", vec![4, 4, 4, 4, 4]));

    assert_eq!(names(&roster), vec!["Low", "Mid", "Top"]);
}

#[test]
fn test_add_keeps_insertion_order_on_ties() {
    let mut roster = Roster::new(AverageMode::Mean);
    roster.add(Student::new("First", "1", vec![4, 4]));
    roster.add(Student::new("Second", "2", vec![5, 3]));
    roster.add(Student::new("Third", "3", vec![3, 5]));

    assert_eq!(names(&roster), vec!["First", "Second", "Third"]);
}

#[test]
fn test_add_uses_configured_mode() {
    let mut roster = Roster::new(AverageMode::FixedFive);
    roster.add(Student::new("Five grades", "1", vec![4, 4, 4, 4, 4]));
    roster.add(Student::new("Two grades", "1", vec![5, 5]));

    assert_eq!(roster.mode(), AverageMode::FixedFive);
    assert_eq!(names(&roster), vec!["Two grades", "Five grades"]);
}

#[test]
fn test_add_with_extreme_grades_keeps_order() {
    let mut roster = Roster::new(AverageMode::Mean);
    roster.add(Student::new("Huge", "1", vec![i64::MAX, 1]));
    roster.add(Student::new("Normal", "1", vec![5, 5]));
    roster.add(Student::new("Negative", "1", vec![i64::MIN, -1]));

    assert_eq!(names(&roster), vec!["Negative", "Normal", "Huge"]);

    let mut fixed = Roster::new(AverageMode::FixedFive);
    fixed.add(Student::new("Huge", "1", vec![i64::MAX, i64::MAX]));
    fixed.add(Student::new("Normal", "1", vec![5, 5, 5, 5, 5]));
    assert_eq!(names(&fixed), vec!["Normal", "Huge"]);
}

#[test]
fn test_replace_swaps_content_without_sorting() {
    let mut roster = Roster::new(AverageMode::Mean);
    roster.add(Student::new("Old", "1", vec![3]));

    let previous = roster.replace(vec![
        Student::new("High", "2", vec![5]),
        Student::new("Low", "2", vec![2]),
    ]);

    assert_eq!(previous.len(), 1);
    assert_eq!(previous[0].name, "Old");
    assert_eq!(names(&roster), vec!["High", "Low"]);
}

#[test]
fn test_select_does_not_mutate_roster() {
    let mut roster = Roster::new(AverageMode::Mean);
    roster.add(Student::new("Fails", "1", vec![3, 4, 5, 5, 5]));
    roster.add(Student::new("Passes", "1", vec![4, 4, 5, 5, 5]));

    let selected: Vec<_> = roster.select().into_iter().map(|s| s.name.clone()).collect();
    assert_eq!(selected, vec!["Passes".to_string()]);
    assert_eq!(roster.len(), 2);
}
