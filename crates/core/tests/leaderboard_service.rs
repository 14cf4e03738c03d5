//! Leaderboard service scenarios driven through an in-memory store fake.

use assert_matches::assert_matches;
use async_trait::async_trait;
use chrono::NaiveDate;

use acadex_core::error::CoreError;
use acadex_core::leaderboard::{
    ExamRef, LeaderboardService, LeaderboardStore, MarkScore, RosterEntry,
};
use acadex_core::types::DbId;

/// In-memory store; set `fail_marks` to simulate a broken fetch.
#[derive(Default)]
struct FakeStore {
    exam: Option<ExamRef>,
    class_title: Option<String>,
    roster: Vec<(DbId, &'static str)>,
    marks: Vec<(DbId, f64, f64)>,
    fail_marks: bool,
}

#[async_trait]
impl LeaderboardStore for FakeStore {
    async fn latest_exam(&self, _class_id: DbId) -> Result<Option<ExamRef>, CoreError> {
        Ok(self.exam.clone())
    }

    async fn class_title(&self, _class_id: DbId) -> Result<Option<String>, CoreError> {
        Ok(self.class_title.clone())
    }

    async fn roster(&self, _class_id: DbId) -> Result<Vec<RosterEntry>, CoreError> {
        Ok(self
            .roster
            .iter()
            .map(|&(student_id, name)| RosterEntry {
                student_id,
                full_name: name.to_string(),
            })
            .collect())
    }

    async fn exam_marks(
        &self,
        _exam_id: DbId,
        student_ids: &[DbId],
    ) -> Result<Vec<MarkScore>, CoreError> {
        if self.fail_marks {
            return Err(CoreError::Internal("marks query failed".into()));
        }
        Ok(self
            .marks
            .iter()
            .filter(|(id, _, _)| student_ids.contains(id))
            .map(|&(student_id, obtained, max)| MarkScore {
                student_id,
                marks_obtained: obtained,
                max_marks: max,
            })
            .collect())
    }
}

fn exam(id: DbId, name: &str, date: &str) -> ExamRef {
    ExamRef {
        id,
        name: name.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
    }
}

#[tokio::test]
async fn no_exam_yields_none_not_error() {
    let store = FakeStore {
        roster: vec![(1, "Asha")],
        ..FakeStore::default()
    };

    let result = LeaderboardService::new(&store).full(10, 1).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn empty_roster_yields_none() {
    let store = FakeStore {
        exam: Some(exam(7, "Midterm", "2026-03-01")),
        ..FakeStore::default()
    };

    let result = LeaderboardService::new(&store).summary(10, 1).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn no_marks_yields_none() {
    let store = FakeStore {
        exam: Some(exam(7, "Midterm", "2026-03-01")),
        roster: vec![(1, "Asha"), (2, "Bilal")],
        ..FakeStore::default()
    };

    let result = LeaderboardService::new(&store).full(10, 1).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn fetch_failure_propagates_as_error() {
    let store = FakeStore {
        exam: Some(exam(7, "Midterm", "2026-03-01")),
        roster: vec![(1, "Asha")],
        marks: vec![(1, 50.0, 100.0)],
        fail_marks: true,
        ..FakeStore::default()
    };

    let result = LeaderboardService::new(&store).summary(10, 1).await;
    assert_matches!(result, Err(CoreError::Internal(_)));
}

#[tokio::test]
async fn full_variant_carries_exam_and_class_metadata() {
    let store = FakeStore {
        exam: Some(exam(7, "Final Term", "2026-06-15")),
        class_title: Some("Grade 10 A".to_string()),
        roster: vec![(1, "Asha"), (2, "Bilal"), (3, "Chen")],
        marks: vec![
            (1, 80.0, 100.0),
            (2, 45.0, 100.0),
            // Chen has no marks and must not appear.
        ],
        ..FakeStore::default()
    };

    let board = LeaderboardService::new(&store)
        .full(10, 2)
        .await
        .unwrap()
        .expect("leaderboard should exist");

    assert_eq!(board.exam_name, "Final Term");
    assert_eq!(board.class_name, "Grade 10 A");
    assert_eq!(board.entries.len(), 2);

    let me = board.current_user_entry.expect("current user has marks");
    assert_eq!(me.student_id, 2);
    assert_eq!(me.rank, 2);
    assert_eq!(me.percentage, 45.0);
}

#[tokio::test]
async fn missing_class_row_falls_back_to_generic_name() {
    let store = FakeStore {
        exam: Some(exam(7, "Quiz", "2026-02-01")),
        roster: vec![(1, "Asha")],
        marks: vec![(1, 9.0, 10.0)],
        ..FakeStore::default()
    };

    let board = LeaderboardService::new(&store)
        .full(10, 1)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(board.class_name, "Class");
}

#[tokio::test]
async fn summary_truncates_to_ten() {
    let roster: Vec<(DbId, &'static str)> = vec![
        (1, "A"),
        (2, "B"),
        (3, "C"),
        (4, "D"),
        (5, "E"),
        (6, "F"),
        (7, "G"),
        (8, "H"),
        (9, "I"),
        (10, "J"),
        (11, "K"),
        (12, "L"),
    ];
    let marks = roster
        .iter()
        .map(|&(id, _)| (id, id as f64 * 5.0, 100.0))
        .collect();

    let store = FakeStore {
        exam: Some(exam(7, "Midterm", "2026-03-01")),
        roster,
        marks,
        ..FakeStore::default()
    };

    let entries = LeaderboardService::new(&store)
        .summary(10, 1)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(entries.len(), 10);
    // Highest score first: student 12 at 60%.
    assert_eq!(entries[0].student_id, 12);
    assert_eq!(entries[0].rank, 1);
}

#[tokio::test]
async fn current_user_outside_top_ten_is_not_in_summary() {
    let roster: Vec<(DbId, &'static str)> = (1..=11).map(|i| (i, "S")).collect();
    let marks = roster
        .iter()
        .map(|&(id, _)| (id, id as f64, 100.0))
        .collect();

    let store = FakeStore {
        exam: Some(exam(7, "Midterm", "2026-03-01")),
        roster,
        marks,
        ..FakeStore::default()
    };

    // Student 1 has the lowest score and lands at rank 11.
    let entries = LeaderboardService::new(&store)
        .summary(10, 1)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(entries.len(), 10);
    assert!(entries.iter().all(|e| e.student_id != 1));
}
