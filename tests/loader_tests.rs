use meisterscore::loader::{load_roster, load_roster_from_file};
use meisterscore::record::{ApplicantCategory, Track};
use meisterscore::semester::Semester;
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

const HEADER: &str = "student,category,track,semester,subject,grade,weighted,free_semester,score,absences,lateness,leadership,career_experience,awards,volunteer_hours,volunteer_year";

fn roster(lines: &[&str]) -> String {
    let mut body = String::from(HEADER);
    for line in lines {
        body.push('\n');
        body.push_str(line);
    }
    body
}

#[test]
fn groups_rows_by_student_in_first_appearance_order() {
    let csv = roster(&[
        "김철수,enrolled,general,1-1,국어,A,,,,,,,,,,",
        "이영희,graduate,special,1-1,수학,B,,,,,,,,,,",
        "김철수,,,1-2,수학,수,1,,,,,,,,,",
    ]);
    let records = load_roster(Cursor::new(csv)).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "김철수");
    assert_eq!(records[1].name, "이영희");

    let kim = &records[0].record;
    assert_eq!(kim.category, ApplicantCategory::Enrolled);
    assert_eq!(kim.track, Track::General);
    assert_eq!(kim.subjects[&Semester::Y1S1].len(), 1);
    let row = &kim.subjects[&Semester::Y1S2][0];
    assert_eq!(row.name, "수학");
    assert_eq!(row.grade, "수");
    assert!(row.weighted);

    let lee = &records[1].record;
    assert_eq!(lee.category, ApplicantCategory::Graduate);
    assert_eq!(lee.track, Track::Special);
}

#[test]
fn flags_attendance_and_bonus_columns_merge() {
    let csv = roster(&[
        "김철수,enrolled,,1-1,국어,A,,yes,,2,3,yes,,,,",
        "김철수,,,2-1,,,,,,1,0,,yes,3,8,2024",
        "김철수,,,2-2,,,,,,0,4,,,,,",
    ]);
    let records = load_roster(Cursor::new(csv)).unwrap();
    let rec = &records[0].record;

    assert!(rec.free_semesters.contains(&Semester::Y1S1));
    assert!(rec.bonus.leadership.contains(&Semester::Y1S1));
    assert!(rec.bonus.career_experience);
    assert_eq!(rec.bonus.awards, 3);

    assert_eq!(rec.attendance[&Semester::Y1S1].absences, 2);
    assert_eq!(rec.attendance[&Semester::Y1S1].lateness, 3);
    assert_eq!(rec.attendance[&Semester::Y2S1].absences, 1);
    assert_eq!(rec.attendance[&Semester::Y2S2].lateness, 4);

    // Volunteer hours attach to the grade year of the semester column.
    assert_eq!(rec.volunteer.years[1].hours, 8.0);
    assert_eq!(rec.volunteer.years[1].activity_year, 2024);
}

#[test]
fn equivalency_rows_have_a_score_and_no_semester() {
    let csv = roster(&[
        "박민수,equivalency,,,국어,,,,96,,,,,,,",
        "박민수,,,,수학,,,,82,,,,,,,",
    ]);
    let records = load_roster(Cursor::new(csv)).unwrap();
    let rec = &records[0].record;

    assert_eq!(rec.category, ApplicantCategory::Equivalency);
    assert_eq!(rec.equivalency_subjects.len(), 2);
    assert_eq!(rec.equivalency_subjects[0].score, 96.0);
}

#[test]
fn unknown_semesters_and_blank_names_are_skipped() {
    let csv = roster(&[
        "김철수,enrolled,,4-1,국어,A,,,,,,,,,,",
        ",enrolled,,1-1,국어,A,,,,,,,,,,",
        "김철수,,,1-1,국어,A,,,,,,,,,,",
    ]);
    let records = load_roster(Cursor::new(csv)).unwrap();

    assert_eq!(records.len(), 1);
    let rec = &records[0].record;
    assert_eq!(rec.subjects.len(), 1);
    assert_eq!(rec.subjects[&Semester::Y1S1].len(), 1);
}

#[test]
fn blank_grades_do_not_create_subject_rows() {
    let csv = roster(&["김철수,enrolled,,1-1,국어,,,,,,,,,,,"]);
    let records = load_roster(Cursor::new(csv)).unwrap();
    assert!(records[0].record.subjects.is_empty());
}

#[test]
fn malformed_rows_surface_a_csv_error() {
    let csv = roster(&["김철수,,,,국어,,,,not_a_number,,,,,,,"]);
    let err = load_roster(Cursor::new(csv)).unwrap_err();
    assert!(err.to_string().contains("CSV"));
}

#[test]
fn loads_from_a_file_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    writeln!(file, "김철수,enrolled,general,1-1,국어,A,,,,,,,,,,").unwrap();

    let records = load_roster_from_file(file.path()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "김철수");
}
