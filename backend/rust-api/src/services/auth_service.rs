use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::metrics::PROGRESS_UPDATES_TOTAL;
use crate::models::attempt::QuizResult;
use crate::models::catalog::Quiz;
use crate::models::user::{
    DashboardSummary, ProgressPatch, QuizRecord, RecentQuiz, SignupRequest, SubjectProgress, User,
    UserProgress,
};

use super::catalog_service::Catalog;
use super::profile_store::{profile_key, ProfileStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("Subject {0} not found")]
    UnknownSubject(String),
    #[error("Lesson {lesson} is not part of subject {subject}")]
    UnknownLesson { subject: String, lesson: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Mock authentication over the per-client user blob.
pub struct AuthService {
    store: Arc<dyn ProfileStore>,
    catalog: Arc<Catalog>,
}

impl AuthService {
    pub fn new(store: Arc<dyn ProfileStore>, catalog: Arc<Catalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn current_user(&self, client_id: &str) -> Result<Option<User>, StoreError> {
        let Some(raw) = self.store.get(&profile_key(client_id)).await? else {
            return Ok(None);
        };
        let user = serde_json::from_str(&raw)?;
        Ok(Some(user))
    }

    pub async fn signup(&self, client_id: &str, req: SignupRequest) -> Result<User, StoreError> {
        let now = Utc::now();
        let user = User {
            id: now.timestamp_millis().to_string(),
            name: req.name,
            email: req.email,
            avatar: req.avatar,
            progress: UserProgress {
                last_activity: now,
                ..UserProgress::default()
            },
        };

        self.persist(client_id, &user).await?;
        tracing::info!("User signed up: id={} client={}", user.id, client_id);
        Ok(user)
    }

    /// Stores the supplied user as-is. There are no credentials to check.
    pub async fn login(&self, client_id: &str, user: User) -> Result<User, StoreError> {
        self.persist(client_id, &user).await?;
        tracing::info!("User logged in: id={} client={}", user.id, client_id);
        Ok(user)
    }

    pub async fn logout(&self, client_id: &str) -> Result<(), StoreError> {
        self.store.remove(&profile_key(client_id)).await?;
        tracing::info!("User logged out: client={}", client_id);
        Ok(())
    }

    /// Shallow-merges `patch` into the stored progress and persists the whole
    /// user. Returns `false` when the client has no user.
    pub async fn update_progress(
        &self,
        client_id: &str,
        patch: ProgressPatch,
    ) -> Result<bool, StoreError> {
        let Some(mut user) = self.current_user(client_id).await? else {
            tracing::debug!("Progress update ignored, no user for client={}", client_id);
            PROGRESS_UPDATES_TOTAL.with_label_values(&["rejected"]).inc();
            return Ok(false);
        };

        user.progress.apply(patch, Utc::now());
        self.persist(client_id, &user).await?;

        PROGRESS_UPDATES_TOTAL.with_label_values(&["applied"]).inc();
        Ok(true)
    }

    /// Merges a finished quiz into the client's progress.
    pub async fn record_quiz_result(
        &self,
        client_id: &str,
        quiz: &Quiz,
        result: &QuizResult,
    ) -> Result<bool, StoreError> {
        let Some(user) = self.current_user(client_id).await? else {
            return Ok(false);
        };

        let patch = quiz_result_patch(&user.progress, quiz, result, Utc::now());
        self.update_progress(client_id, patch).await
    }

    pub async fn mark_lesson_complete(
        &self,
        client_id: &str,
        subject_id: &str,
        lesson_id: &str,
    ) -> Result<bool, ProgressError> {
        let subject = self
            .catalog
            .subject(subject_id)
            .ok_or_else(|| ProgressError::UnknownSubject(subject_id.to_string()))?;
        if !subject.has_lesson(lesson_id) {
            return Err(ProgressError::UnknownLesson {
                subject: subject_id.to_string(),
                lesson: lesson_id.to_string(),
            });
        }

        let Some(user) = self.current_user(client_id).await? else {
            return Ok(false);
        };

        let total_lessons = subject.total_lessons();
        let mut entry = user
            .progress
            .subjects
            .get(subject_id)
            .cloned()
            .unwrap_or_default();

        if entry.completed_lessons.iter().any(|l| l == lesson_id) {
            return Ok(true);
        }

        entry.completed_lessons.push(lesson_id.to_string());
        entry.overall_progress = percentage(entry.completed_lessons.len(), total_lessons as usize);
        entry.total_lessons = Some(total_lessons);

        let mut subjects = user.progress.subjects.clone();
        subjects.insert(subject_id.to_string(), entry);

        let updated = self
            .update_progress(
                client_id,
                ProgressPatch {
                    subjects: Some(subjects),
                    quizzes: None,
                },
            )
            .await?;
        Ok(updated)
    }

    pub async fn dashboard(&self, client_id: &str) -> Result<Option<DashboardSummary>, StoreError> {
        let Some(user) = self.current_user(client_id).await? else {
            return Ok(None);
        };
        Ok(Some(dashboard_summary(&self.catalog, &user)))
    }

    async fn persist(&self, client_id: &str, user: &User) -> Result<(), StoreError> {
        let json = serde_json::to_string(user)?;
        self.store.set(&profile_key(client_id), json).await
    }
}

/// `round(part / whole * 100)`, 0 for an empty whole.
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

/// Patch for a finished quiz. The quiz joins the subject's completed set when
/// it is not there yet; the score record is always overwritten.
pub fn quiz_result_patch(
    progress: &UserProgress,
    quiz: &Quiz,
    result: &QuizResult,
    now: DateTime<Utc>,
) -> ProgressPatch {
    let mut quizzes = progress.quizzes.clone();
    quizzes.insert(
        quiz.id.clone(),
        QuizRecord {
            score: result.score,
            date: now,
            time_taken: result.time_taken,
        },
    );

    let subject_progress = progress
        .subjects
        .get(&quiz.subject_id)
        .cloned()
        .unwrap_or_else(SubjectProgress::default);

    if subject_progress.completed_quizzes.contains(&quiz.id) {
        return ProgressPatch {
            subjects: None,
            quizzes: Some(quizzes),
        };
    }

    let mut entry = subject_progress;
    entry.completed_quizzes.push(quiz.id.clone());
    let mut subjects = progress.subjects.clone();
    subjects.insert(quiz.subject_id.clone(), entry);

    ProgressPatch {
        subjects: Some(subjects),
        quizzes: Some(quizzes),
    }
}

fn dashboard_summary(catalog: &Catalog, user: &User) -> DashboardSummary {
    let progress = &user.progress;
    let quizzes_taken = progress.quizzes.len();
    let score_sum: u32 = progress.quizzes.values().map(|r| r.score).sum();
    let average_score = if quizzes_taken == 0 {
        0
    } else {
        (score_sum as f64 / quizzes_taken as f64).round() as u32
    };

    let mut recent_quizzes: Vec<RecentQuiz> = progress
        .quizzes
        .iter()
        .map(|(quiz_id, record)| RecentQuiz {
            quiz_id: quiz_id.clone(),
            title: catalog.quiz(quiz_id).map(|q| q.title.clone()),
            score: record.score,
            date: record.date,
        })
        .collect();
    recent_quizzes.sort_by(|a, b| b.date.cmp(&a.date));
    recent_quizzes.truncate(5);

    DashboardSummary {
        name: user.name.clone(),
        avatar: user.avatar.clone(),
        quizzes_taken,
        average_score,
        subjects_tracked: progress.subjects.len(),
        lessons_completed: progress
            .subjects
            .values()
            .map(|s| s.completed_lessons.len())
            .sum(),
        recent_quizzes,
        last_activity: progress.last_activity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attempt::SubmitReason;
    use crate::services::profile_store::MemoryProfileStore;

    fn service() -> AuthService {
        AuthService::new(
            Arc::new(MemoryProfileStore::new()),
            Arc::new(Catalog::builtin()),
        )
    }

    fn signup_request() -> SignupRequest {
        SignupRequest {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            avatar: None,
        }
    }

    fn result(score: u32) -> QuizResult {
        QuizResult {
            score,
            correct_answers: 0,
            total_questions: 5,
            passed: score >= 70,
            time_taken: 120,
            reason: SubmitReason::Submitted,
        }
    }

    fn mechanics() -> Quiz {
        Catalog::builtin().quiz("quiz-mechanics").unwrap().clone()
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(0, 5), 0);
        assert_eq!(percentage(3, 0), 0);
    }

    #[test]
    fn first_result_marks_quiz_completed() {
        let patch = quiz_result_patch(&UserProgress::default(), &mechanics(), &result(80), Utc::now());

        let subjects = patch.subjects.unwrap();
        assert_eq!(
            subjects["physics-fundamentals"].completed_quizzes,
            vec!["quiz-mechanics".to_string()]
        );
        assert_eq!(patch.quizzes.unwrap()["quiz-mechanics"].score, 80);
    }

    #[test]
    fn repeated_result_only_touches_quizzes() {
        let mut progress = UserProgress::default();
        let first = quiz_result_patch(&progress, &mechanics(), &result(40), Utc::now());
        progress.apply(first, Utc::now());

        let second = quiz_result_patch(&progress, &mechanics(), &result(100), Utc::now());
        assert!(second.subjects.is_none());
        assert_eq!(second.quizzes.unwrap()["quiz-mechanics"].score, 100);
    }

    #[tokio::test]
    async fn update_progress_without_user_returns_false() {
        let auth = service();
        let updated = auth
            .update_progress("nobody", ProgressPatch::default())
            .await
            .unwrap();
        assert!(!updated);
        assert!(auth.current_user("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn same_quiz_twice_keeps_one_latest_entry() {
        let auth = service();
        auth.signup("c1", signup_request()).await.unwrap();
        let quiz = mechanics();

        assert!(auth.record_quiz_result("c1", &quiz, &result(40)).await.unwrap());
        assert!(auth.record_quiz_result("c1", &quiz, &result(100)).await.unwrap());

        let user = auth.current_user("c1").await.unwrap().unwrap();
        assert_eq!(user.progress.quizzes.len(), 1);
        assert_eq!(user.progress.quizzes["quiz-mechanics"].score, 100);
        assert_eq!(
            user.progress.subjects["physics-fundamentals"].completed_quizzes,
            vec!["quiz-mechanics".to_string()]
        );
    }

    #[tokio::test]
    async fn lesson_completion_is_append_only() {
        let auth = service();
        auth.signup("c1", signup_request()).await.unwrap();

        assert!(auth
            .mark_lesson_complete("c1", "physics-fundamentals", "kinematics")
            .await
            .unwrap());
        assert!(auth
            .mark_lesson_complete("c1", "physics-fundamentals", "kinematics")
            .await
            .unwrap());

        let user = auth.current_user("c1").await.unwrap().unwrap();
        let entry = &user.progress.subjects["physics-fundamentals"];
        assert_eq!(entry.completed_lessons, vec!["kinematics".to_string()]);
        assert_eq!(entry.overall_progress, 14);
        assert_eq!(entry.total_lessons, Some(7));
    }

    #[tokio::test]
    async fn unknown_lesson_is_rejected() {
        let auth = service();
        let err = auth
            .mark_lesson_complete("c1", "physics-fundamentals", "optics")
            .await
            .unwrap_err();
        assert!(matches!(err, ProgressError::UnknownLesson { .. }));
    }

    #[tokio::test]
    async fn logout_removes_the_blob() {
        let auth = service();
        auth.signup("c1", signup_request()).await.unwrap();
        auth.logout("c1").await.unwrap();
        assert!(auth.current_user("c1").await.unwrap().is_none());
        assert!(auth.dashboard("c1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn dashboard_averages_recorded_scores() {
        let auth = service();
        auth.signup("c1", signup_request()).await.unwrap();
        let catalog = Catalog::builtin();

        auth.record_quiz_result("c1", &mechanics(), &result(80))
            .await
            .unwrap();
        auth.record_quiz_result("c1", catalog.quiz("quiz-calculus").unwrap(), &result(55))
            .await
            .unwrap();

        let summary = auth.dashboard("c1").await.unwrap().unwrap();
        assert_eq!(summary.quizzes_taken, 2);
        assert_eq!(summary.average_score, 68);
        assert_eq!(summary.subjects_tracked, 2);
    }
}
