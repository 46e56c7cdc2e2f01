use crate::taxonomy::{branches, full_taxonomy, semesters, subjects, TaxonomyError};

#[test]
fn branches_in_display_order() {
    assert_eq!(vec!["CSE", "ME"], branches());
}

#[test]
fn semesters_for_each_year() {
    assert_eq!(vec!["SEM 1", "SEM 2"], semesters(1));
    assert_eq!(vec!["SEM 3", "SEM 4"], semesters(2));
    assert_eq!(vec!["SEM 5", "SEM 6"], semesters(3));
    assert_eq!(vec!["SEM 7", "SEM 8"], semesters(4));
}

#[test]
fn semesters_unknown_year() {
    assert!(semesters(0).is_empty());
    assert!(semesters(5).is_empty());
}

#[test]
fn subjects_exact_match() {
    let found = subjects("CSE", 2, "SEM 3").unwrap();
    assert_eq!(
        vec![
            "Data Structures",
            "Digital Logic Design",
            "Discrete Mathematics",
            "Object-Oriented Programming",
            "Computer Organization",
        ],
        found
    );
    let found = subjects("ME", 3, "SEM 5").unwrap();
    assert!(found.contains(&"CAD/CAM"));
}

#[test]
fn subjects_missing_combinations() {
    assert_eq!(Err(TaxonomyError::NotFound), subjects("EEE", 1, "SEM 1"));
    assert_eq!(Err(TaxonomyError::NotFound), subjects("CSE", 5, "SEM 9"));
    // semester belongs to a different year
    assert_eq!(Err(TaxonomyError::NotFound), subjects("CSE", 1, "SEM 3"));
    // lookups are case sensitive
    assert_eq!(Err(TaxonomyError::NotFound), subjects("cse", 1, "SEM 1"));
}

#[test]
fn every_branch_shares_the_reference_semesters() {
    for branch in full_taxonomy() {
        for year in branch.years {
            let labels: Vec<String> = year.semesters.iter().map(|s| s.semester.clone()).collect();
            assert_eq!(semesters(year.year), labels, "{} year {}", branch.branch, year.year);
            for semester in year.semesters {
                assert_eq!(5, semester.subjects.len());
            }
        }
    }
}
