use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::catalog::QuizOption;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AttemptState {
    InProgress,
    Completed,
    Review,
}

/// Why an attempt left the in-progress state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmitReason {
    Submitted,
    TimeExpired,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub score: u32,
    pub correct_answers: usize,
    pub total_questions: usize,
    pub passed: bool,
    /// Seconds.
    pub time_taken: u32,
    pub reason: SubmitReason,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Success,
    Default,
}

/// Transient toast shown once a quiz is submitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn for_result(result: &QuizResult) -> Self {
        let (title, variant) = if result.passed {
            ("Quiz Completed Successfully!", NotificationVariant::Success)
        } else {
            ("Quiz Completed", NotificationVariant::Default)
        };
        Notification {
            title: title.to_string(),
            description: format!(
                "You scored {}% ({}/{})",
                result.score, result.correct_answers, result.total_questions
            ),
            variant,
        }
    }
}

/// A question as shown while the attempt is running, without its answer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub id: String,
    pub text: String,
    pub options: Vec<QuizOption>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptSnapshot {
    pub attempt_id: String,
    pub quiz_id: String,
    pub quiz_title: String,
    pub state: AttemptState,
    pub current_question: usize,
    pub total_questions: usize,
    pub question: Option<QuestionView>,
    pub answers: HashMap<String, String>,
    pub time_left: u32,
    pub result: Option<QuizResult>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OptionMark {
    Correct,
    SelectedWrong,
    Neutral,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewOption {
    pub id: String,
    pub text: String,
    pub mark: OptionMark,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewQuestion {
    pub id: String,
    pub text: String,
    pub selected: Option<String>,
    pub is_correct: bool,
    pub options: Vec<ReviewOption>,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub attempt_id: String,
    pub current_question: usize,
    pub questions: Vec<ReviewQuestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub question_id: String,
    pub option_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub attempt_id: String,
    pub result: QuizResult,
    pub notification: Notification,
    pub progress_saved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: u32, correct: usize, passed: bool) -> QuizResult {
        QuizResult {
            score,
            correct_answers: correct,
            total_questions: 5,
            passed,
            time_taken: 60,
            reason: SubmitReason::Submitted,
        }
    }

    #[test]
    fn passed_result_gets_success_toast() {
        let toast = Notification::for_result(&result(80, 4, true));
        assert_eq!(toast.title, "Quiz Completed Successfully!");
        assert_eq!(toast.description, "You scored 80% (4/5)");
        assert_eq!(toast.variant, NotificationVariant::Success);
    }

    #[test]
    fn failed_result_gets_default_toast() {
        let toast = Notification::for_result(&result(40, 2, false));
        assert_eq!(toast.title, "Quiz Completed");
        assert_eq!(toast.variant, NotificationVariant::Default);
    }

    #[test]
    fn state_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_value(AttemptState::InProgress).unwrap(),
            "in-progress"
        );
    }
}
