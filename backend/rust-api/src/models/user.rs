use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The persisted user blob. One per client, replaced wholesale on every write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub progress: UserProgress,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    #[serde(default)]
    pub subjects: BTreeMap<String, SubjectProgress>,
    #[serde(default)]
    pub quizzes: BTreeMap<String, QuizRecord>,
    #[serde(default = "Utc::now")]
    pub last_activity: DateTime<Utc>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            subjects: BTreeMap::new(),
            quizzes: BTreeMap::new(),
            last_activity: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectProgress {
    #[serde(default)]
    pub completed_lessons: Vec<String>,
    #[serde(default)]
    pub completed_quizzes: Vec<String>,
    #[serde(default)]
    pub overall_progress: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_lessons: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizRecord {
    pub score: u32,
    pub date: DateTime<Utc>,
    /// Seconds.
    pub time_taken: u32,
}

/// Partial progress update. Present maps replace the stored maps wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<BTreeMap<String, SubjectProgress>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quizzes: Option<BTreeMap<String, QuizRecord>>,
}

impl UserProgress {
    /// Shallow merge: each map present in the patch replaces the stored one,
    /// then `last_activity` is stamped.
    pub fn apply(&mut self, patch: ProgressPatch, now: DateTime<Utc>) {
        if let Some(subjects) = patch.subjects {
            self.subjects = subjects;
        }
        if let Some(quizzes) = patch.quizzes {
            self.quizzes = quizzes;
        }
        self.last_activity = now;
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub avatar: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateOutcome {
    pub updated: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub name: String,
    pub avatar: Option<String>,
    pub quizzes_taken: usize,
    pub average_score: u32,
    pub subjects_tracked: usize,
    pub lessons_completed: usize,
    pub recent_quizzes: Vec<RecentQuiz>,
    pub last_activity: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentQuiz {
    pub quiz_id: String,
    pub title: Option<String>,
    pub score: u32,
    pub date: DateTime<Utc>,
}
