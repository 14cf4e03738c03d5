//! Class leaderboard aggregation and ranking.
//!
//! The ranking math (`aggregate_scores`, `build_ranking`) is pure; the
//! service on top fetches through the read-only [`LeaderboardStore`] trait
//! so production runs against Postgres and tests run against an in-memory
//! fake. Absence of data (no exam, empty roster, no marks) is a normal
//! `Ok(None)` outcome; only failed fetches surface as errors.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Number of entries in the summary (dashboard card) variant.
pub const SUMMARY_SIZE: usize = 10;

/// A student as listed on a class roster.
#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub student_id: DbId,
    pub full_name: String,
}

/// One mark row for a single exam, already scoped to that exam by the caller.
#[derive(Debug, Clone, Copy)]
pub struct MarkScore {
    pub student_id: DbId,
    pub marks_obtained: f64,
    pub max_marks: f64,
}

/// The exam a leaderboard is computed over.
#[derive(Debug, Clone)]
pub struct ExamRef {
    pub id: DbId,
    pub name: String,
    pub date: NaiveDate,
}

/// Per-student totals accumulated across subjects, kept in roster order.
#[derive(Debug, Clone)]
pub struct StudentTotals {
    pub student_id: DbId,
    pub full_name: String,
    pub obtained: f64,
    pub max: f64,
}

/// One row of a computed leaderboard.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based dense rank; ties receive distinct consecutive ranks.
    pub rank: u32,
    pub student_id: DbId,
    pub student_name: String,
    pub total_marks: f64,
    pub max_marks: f64,
    pub percentage: f64,
    pub is_current_user: bool,
}

/// Full-roster leaderboard with exam and class context.
#[derive(Debug, Clone, Serialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
    pub exam_name: String,
    pub exam_date: NaiveDate,
    pub class_name: String,
    pub current_user_entry: Option<LeaderboardEntry>,
}

/// Sum each roster member's obtained/max marks across subjects.
///
/// Every roster member gets an entry, seeded at (0, 0), so the result always
/// has exactly `roster.len()` rows in roster order. Marks referencing a
/// student not on the roster are dropped.
pub fn aggregate_scores(roster: &[RosterEntry], marks: &[MarkScore]) -> Vec<StudentTotals> {
    let mut totals: Vec<StudentTotals> = roster
        .iter()
        .map(|s| StudentTotals {
            student_id: s.student_id,
            full_name: s.full_name.clone(),
            obtained: 0.0,
            max: 0.0,
        })
        .collect();

    let index: HashMap<DbId, usize> = roster
        .iter()
        .enumerate()
        .map(|(i, s)| (s.student_id, i))
        .collect();

    for mark in marks {
        if let Some(&i) = index.get(&mark.student_id) {
            totals[i].obtained += mark.marks_obtained;
            totals[i].max += mark.max_marks;
        }
    }

    totals
}

/// Rank students by percentage, descending.
///
/// Students with no recorded marks (max == 0) are excluded rather than shown
/// at 0%. Ties are ordered by display name, then student id, so the result
/// does not depend on input order. Ranks are dense: `1..=k` with no gaps and
/// no shared ranks.
pub fn build_ranking(totals: Vec<StudentTotals>, current_user_id: DbId) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = totals
        .into_iter()
        .filter(|t| t.max > 0.0)
        .map(|t| LeaderboardEntry {
            rank: 0,
            student_id: t.student_id,
            student_name: t.full_name,
            total_marks: t.obtained,
            max_marks: t.max,
            percentage: t.obtained / t.max * 100.0,
            is_current_user: t.student_id == current_user_id,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.student_name.cmp(&b.student_name))
            .then_with(|| a.student_id.cmp(&b.student_id))
    });

    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = (i + 1) as u32;
    }

    entries
}

/// Read-only queries the leaderboard needs from the data layer.
#[async_trait]
pub trait LeaderboardStore: Send + Sync {
    /// The exam with the most recent date for a class, if any.
    async fn latest_exam(&self, class_id: DbId) -> Result<Option<ExamRef>, CoreError>;

    /// The class's display title, if the class exists.
    async fn class_title(&self, class_id: DbId) -> Result<Option<String>, CoreError>;

    /// All students assigned to a class.
    async fn roster(&self, class_id: DbId) -> Result<Vec<RosterEntry>, CoreError>;

    /// Mark rows for one exam, restricted to the given student ids.
    async fn exam_marks(
        &self,
        exam_id: DbId,
        student_ids: &[DbId],
    ) -> Result<Vec<MarkScore>, CoreError>;
}

/// Computes class leaderboards over a [`LeaderboardStore`].
pub struct LeaderboardService<'a, S> {
    store: &'a S,
}

impl<'a, S: LeaderboardStore> LeaderboardService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Top-10 leaderboard for the class's most recent exam.
    ///
    /// `Ok(None)` when there is no exam, no roster, or no marks yet.
    pub async fn summary(
        &self,
        class_id: DbId,
        current_user_id: DbId,
    ) -> Result<Option<Vec<LeaderboardEntry>>, CoreError> {
        let Some((mut entries, _exam)) = self.compute(class_id, current_user_id).await? else {
            return Ok(None);
        };
        entries.truncate(SUMMARY_SIZE);
        Ok(Some(entries))
    }

    /// Full-roster leaderboard with exam/class metadata and the current
    /// user's own entry pulled out for convenient lookup.
    pub async fn full(
        &self,
        class_id: DbId,
        current_user_id: DbId,
    ) -> Result<Option<Leaderboard>, CoreError> {
        let Some((entries, exam)) = self.compute(class_id, current_user_id).await? else {
            return Ok(None);
        };

        let class_name = self
            .store
            .class_title(class_id)
            .await?
            .unwrap_or_else(|| "Class".to_string());

        let current_user_entry = entries.iter().find(|e| e.is_current_user).cloned();

        Ok(Some(Leaderboard {
            entries,
            exam_name: exam.name,
            exam_date: exam.date,
            class_name,
            current_user_entry,
        }))
    }

    async fn compute(
        &self,
        class_id: DbId,
        current_user_id: DbId,
    ) -> Result<Option<(Vec<LeaderboardEntry>, ExamRef)>, CoreError> {
        // The exam and roster reads are independent; the marks read needs
        // the exam id, so only those two run concurrently.
        let (exam, roster) = tokio::try_join!(
            self.store.latest_exam(class_id),
            self.store.roster(class_id)
        )?;

        let Some(exam) = exam else {
            return Ok(None);
        };
        if roster.is_empty() {
            return Ok(None);
        }

        let student_ids: Vec<DbId> = roster.iter().map(|s| s.student_id).collect();
        let marks = self.store.exam_marks(exam.id, &student_ids).await?;
        if marks.is_empty() {
            return Ok(None);
        }

        let entries = build_ranking(aggregate_scores(&roster, &marks), current_user_id);
        Ok(Some((entries, exam)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(entries: &[(DbId, &str)]) -> Vec<RosterEntry> {
        entries
            .iter()
            .map(|&(student_id, name)| RosterEntry {
                student_id,
                full_name: name.to_string(),
            })
            .collect()
    }

    fn mark(student_id: DbId, obtained: f64, max: f64) -> MarkScore {
        MarkScore {
            student_id,
            marks_obtained: obtained,
            max_marks: max,
        }
    }

    // -- aggregate_scores -------------------------------------------------

    #[test]
    fn aggregate_seeds_every_roster_member() {
        let roster = roster(&[(1, "Asha"), (2, "Bilal"), (3, "Chen")]);
        let totals = aggregate_scores(&roster, &[]);

        assert_eq!(totals.len(), 3);
        assert!(totals.iter().all(|t| t.obtained == 0.0 && t.max == 0.0));
    }

    #[test]
    fn aggregate_sums_across_subjects() {
        let roster = roster(&[(1, "Asha")]);
        let marks = [mark(1, 40.0, 50.0), mark(1, 35.0, 50.0)];

        let totals = aggregate_scores(&roster, &marks);
        assert_eq!(totals[0].obtained, 75.0);
        assert_eq!(totals[0].max, 100.0);
    }

    #[test]
    fn aggregate_ignores_marks_for_unknown_students() {
        let roster = roster(&[(1, "Asha")]);
        let marks = [mark(1, 10.0, 20.0), mark(99, 50.0, 50.0)];

        let totals = aggregate_scores(&roster, &marks);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].obtained, 10.0);
        assert_eq!(totals[0].max, 20.0);
    }

    #[test]
    fn aggregate_preserves_roster_order() {
        let roster = roster(&[(3, "Chen"), (1, "Asha"), (2, "Bilal")]);
        let totals = aggregate_scores(&roster, &[]);

        let ids: Vec<DbId> = totals.iter().map(|t| t.student_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    // -- build_ranking ----------------------------------------------------

    #[test]
    fn ranking_excludes_students_without_marks() {
        // Scenario: S1 80/100, S2 45/100, S3 has no marks at all.
        let roster = roster(&[(1, "S1"), (2, "S2"), (3, "S3")]);
        let marks = [mark(1, 80.0, 100.0), mark(2, 45.0, 100.0)];

        let entries = build_ranking(aggregate_scores(&roster, &marks), 1);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].student_id, 1);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].percentage, 80.0);
        assert_eq!(entries[1].student_id, 2);
        assert_eq!(entries[1].rank, 2);
        assert_eq!(entries[1].percentage, 45.0);
    }

    #[test]
    fn ranks_are_dense_and_start_at_one() {
        let roster = roster(&[(1, "A"), (2, "B"), (3, "C"), (4, "D")]);
        let marks = [
            mark(1, 50.0, 100.0),
            mark(2, 90.0, 100.0),
            mark(3, 70.0, 100.0),
            mark(4, 10.0, 100.0),
        ];

        let entries = build_ranking(aggregate_scores(&roster, &marks), 0);

        let ranks: Vec<u32> = entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn ranking_is_monotonic_in_percentage() {
        let roster = roster(&[(1, "A"), (2, "B"), (3, "C")]);
        let marks = [
            mark(1, 30.0, 100.0),
            mark(2, 95.0, 100.0),
            mark(3, 60.0, 100.0),
        ];

        let entries = build_ranking(aggregate_scores(&roster, &marks), 0);

        for pair in entries.windows(2) {
            assert!(pair[0].percentage >= pair[1].percentage);
        }
    }

    #[test]
    fn ties_get_distinct_consecutive_ranks_ordered_by_name() {
        // Both at 75%; the tie is broken by display name, not input order.
        let roster = roster(&[(5, "Zoya"), (4, "Amir")]);
        let marks = [mark(5, 75.0, 100.0), mark(4, 75.0, 100.0)];

        let entries = build_ranking(aggregate_scores(&roster, &marks), 0);

        assert_eq!(entries[0].student_name, "Amir");
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[1].student_name, "Zoya");
        assert_eq!(entries[1].rank, 2);
    }

    #[test]
    fn tied_identical_names_fall_back_to_student_id() {
        let roster = roster(&[(9, "Sam"), (4, "Sam")]);
        let marks = [mark(9, 50.0, 100.0), mark(4, 50.0, 100.0)];

        let entries = build_ranking(aggregate_scores(&roster, &marks), 0);

        assert_eq!(entries[0].student_id, 4);
        assert_eq!(entries[1].student_id, 9);
    }

    #[test]
    fn flags_exactly_the_current_user() {
        let roster = roster(&[(1, "A"), (2, "B")]);
        let marks = [mark(1, 10.0, 100.0), mark(2, 20.0, 100.0)];

        let entries = build_ranking(aggregate_scores(&roster, &marks), 2);

        let flagged: Vec<DbId> = entries
            .iter()
            .filter(|e| e.is_current_user)
            .map(|e| e.student_id)
            .collect();
        assert_eq!(flagged, vec![2]);
    }

    #[test]
    fn current_user_without_marks_is_absent() {
        let roster = roster(&[(1, "A"), (2, "B")]);
        let marks = [mark(1, 10.0, 100.0)];

        let entries = build_ranking(aggregate_scores(&roster, &marks), 2);

        assert!(entries.iter().all(|e| !e.is_current_user));
    }

    #[test]
    fn ranking_is_idempotent() {
        let roster = roster(&[(1, "A"), (2, "B"), (3, "C")]);
        let marks = [
            mark(1, 55.0, 100.0),
            mark(2, 55.0, 100.0),
            mark(3, 90.0, 100.0),
        ];

        let totals = aggregate_scores(&roster, &marks);
        let first = build_ranking(totals.clone(), 1);
        let second = build_ranking(totals, 1);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.rank, b.rank);
            assert_eq!(a.student_id, b.student_id);
            assert_eq!(a.percentage, b.percentage);
        }
    }

    #[test]
    fn empty_input_yields_empty_ranking() {
        let entries = build_ranking(Vec::new(), 1);
        assert!(entries.is_empty());
    }
}
