use xdy::config::StatsSelection;
use xdy::stats::*;
use xdy::types::Histogram;

fn histogram(sides: u32, counts: &[(u32, u32)]) -> Histogram {
    let faces = counts
        .iter()
        .flat_map(|(face, n)| std::iter::repeat_n(*face, *n as usize));
    Histogram::from_faces(sides, faces)
}

#[test]
fn test_total() {
    let h = Histogram::from_faces(6, [1, 6, 6, 3]);
    assert_eq!(h.total(), 16);
    assert_eq!(h.count(), 4);
}

#[test]
fn test_average() {
    // ten dice adding up to 35
    let h = Histogram::from_faces(6, [1, 2, 3, 4, 5, 6, 5, 4, 3, 2]);
    assert_eq!(h.total(), 35);
    assert_eq!(average(&h), Some(3.5));
}

#[test]
fn test_average_is_plain_division() {
    let h = Histogram::from_faces(6, [1, 1, 2]);
    assert_eq!(average(&h), Some(4.0 / 3.0));
}

#[test]
fn test_median_odd_count_is_integer() {
    let h = Histogram::from_faces(6, [4, 2, 6, 3, 2]);
    assert_eq!(h.ordered(), vec![2, 2, 3, 4, 6]);
    let m = median(&h.ordered());
    assert_eq!(m, Some(Median::Middle(3)));
    assert_eq!(m.unwrap().to_string(), "3");
}

#[test]
fn test_median_even_count_is_float() {
    let h = Histogram::from_faces(6, [6, 1, 5, 2]);
    assert_eq!(h.ordered(), vec![1, 2, 5, 6]);
    let m = median(&h.ordered());
    assert_eq!(m, Some(Median::Between(3.5)));
    assert_eq!(m.unwrap().to_string(), "3.500000");
}

#[test]
fn test_median_includes_highest_face() {
    let h = Histogram::from_faces(6, [6, 6, 6]);
    assert_eq!(median(&h.ordered()), Some(Median::Middle(6)));
}

#[test]
fn test_median_empty() {
    assert_eq!(median(&[]), None);
}

#[test]
fn test_mode_tie() {
    let h = histogram(6, &[(3, 1), (4, 4), (5, 4)]);
    let m = mode(&h).unwrap();
    assert_eq!(m.faces, vec![4, 5]);
    assert_eq!(m.frequency, 4);
    assert!(m.is_tie());
    assert_eq!(m.to_string(), "4, 5");
}

#[test]
fn test_mode_single() {
    let h = histogram(6, &[(3, 1), (4, 5), (5, 2)]);
    let m = mode(&h).unwrap();
    assert_eq!(m.faces, vec![4]);
    assert!(!m.is_tie());
    assert_eq!(m.to_string(), "4");
}

#[test]
fn test_mode_considers_highest_face() {
    let h = histogram(6, &[(2, 1), (6, 3)]);
    assert_eq!(mode(&h).unwrap().faces, vec![6]);

    let h = histogram(4, &[(4, 2)]);
    assert_eq!(mode(&h).unwrap().faces, vec![4]);
}

#[test]
fn test_leader_changes() {
    let h = histogram(6, &[(1, 1), (2, 3), (3, 2), (5, 3), (6, 4)]);
    assert_eq!(h.leader_changes(), vec![(1, 1), (2, 3), (6, 4)]);
}

#[test]
fn test_summarize_only_selected() {
    let h = Histogram::from_faces(6, [1, 2, 3]);

    let none = summarize(&h, &StatsSelection::default());
    assert_eq!(none.total, 6);
    assert_eq!(none.average, None);
    assert_eq!(none.median, None);
    assert_eq!(none.mode, None);

    let all = summarize(&h, &StatsSelection::all());
    assert_eq!(all.total, 6);
    assert_eq!(all.average, Some(2.0));
    assert_eq!(all.median, Some(Median::Middle(2)));
    assert_eq!(all.mode.map(|m| m.faces), Some(vec![1, 2, 3]));
}

#[test]
#[should_panic]
fn test_histogram_rejects_out_of_range_face() {
    Histogram::from_faces(6, [7]);
}
