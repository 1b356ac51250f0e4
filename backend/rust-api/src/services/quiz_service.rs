use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{broadcast, watch, Mutex, RwLock};
use tokio::time::Instant;

use crate::metrics::{ANSWERS_RECORDED_TOTAL, QUIZ_ATTEMPTS_ACTIVE, QUIZ_ATTEMPTS_TOTAL};
use crate::models::attempt::{
    AttemptSnapshot, AttemptState, Notification, OptionMark, QuestionView, QuizResult,
    ReviewOption, ReviewQuestion, ReviewResponse, SubmitReason, SubmitResponse,
};
use crate::models::catalog::Quiz;
use crate::models::timer::{TimeExpired, TimerEvent, TimerStopped, TimerTick};

use super::auth_service::{percentage, AuthService};
use super::catalog_service::Catalog;
use super::profile_store::StoreError;

/// Finished attempts stay reviewable for this long before any start sweeps
/// them away.
const FINISHED_ATTEMPT_RETENTION: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("Attempt {0} not found")]
    AttemptNotFound(String),
    #[error("Question {0} is not part of this quiz")]
    UnknownQuestion(String),
    #[error("Option {option} is not valid for question {question}")]
    UnknownOption { question: String, option: String },
    #[error("Quiz has already been submitted")]
    AlreadySubmitted,
    #[error("Quiz must be submitted before it can be reviewed")]
    NotReviewable,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of one countdown step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Running(u32),
    Expired,
    Stopped,
}

/// Returns `(correct, score)`. An empty quiz scores 0.
pub fn score_quiz(quiz: &Quiz, answers: &HashMap<String, String>) -> (usize, u32) {
    let correct = quiz
        .questions
        .iter()
        .filter(|q| answers.get(&q.id) == Some(&q.correct_answer))
        .count();
    (correct, percentage(correct, quiz.questions.len()))
}

/// State machine for a single attempt: `in-progress -> completed -> review`.
#[derive(Debug, Clone)]
pub struct QuizRunner {
    attempt_id: String,
    quiz: Quiz,
    state: AttemptState,
    current_question: usize,
    answers: HashMap<String, String>,
    time_left: u32,
    result: Option<QuizResult>,
    result_recorded: bool,
    finished_at: Option<Instant>,
}

impl QuizRunner {
    pub fn new(attempt_id: impl Into<String>, quiz: Quiz) -> Self {
        let time_left = quiz.time_limit_seconds();
        Self {
            attempt_id: attempt_id.into(),
            quiz,
            state: AttemptState::InProgress,
            current_question: 0,
            answers: HashMap::new(),
            time_left,
            result: None,
            result_recorded: false,
            finished_at: None,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn current_question(&self) -> usize {
        self.current_question
    }

    pub fn finished_at(&self) -> Option<Instant> {
        self.finished_at
    }

    /// Result of a finished attempt that has not reached the profile store yet.
    pub fn unrecorded_result(&self) -> Option<&QuizResult> {
        if self.result_recorded {
            None
        } else {
            self.result.as_ref()
        }
    }

    pub fn result_recorded(&self) -> bool {
        self.result_recorded
    }

    pub fn mark_result_recorded(&mut self) {
        self.result_recorded = true;
    }

    /// Records `option_id` for `question_id`, replacing any earlier choice.
    pub fn handle_answer(&mut self, question_id: &str, option_id: &str) -> Result<(), QuizError> {
        if self.state != AttemptState::InProgress {
            return Err(QuizError::AlreadySubmitted);
        }

        let question = self
            .quiz
            .question(question_id)
            .ok_or_else(|| QuizError::UnknownQuestion(question_id.to_string()))?;
        if !question.has_option(option_id) {
            return Err(QuizError::UnknownOption {
                question: question_id.to_string(),
                option: option_id.to_string(),
            });
        }

        self.answers
            .insert(question_id.to_string(), option_id.to_string());
        Ok(())
    }

    pub fn next_question(&mut self) {
        if self.current_question + 1 < self.quiz.questions.len() {
            self.current_question += 1;
        }
    }

    pub fn prev_question(&mut self) {
        self.current_question = self.current_question.saturating_sub(1);
    }

    /// One second off the clock. Reaching zero reports `Expired`; the caller
    /// is expected to submit.
    pub fn tick(&mut self) -> Tick {
        if self.state != AttemptState::InProgress {
            return Tick::Stopped;
        }
        if self.time_left <= 1 {
            self.time_left = 0;
            return Tick::Expired;
        }
        self.time_left -= 1;
        Tick::Running(self.time_left)
    }

    pub fn submit(&mut self, reason: SubmitReason) -> Result<QuizResult, QuizError> {
        if self.state != AttemptState::InProgress {
            return Err(QuizError::AlreadySubmitted);
        }

        let (correct, score) = score_quiz(&self.quiz, &self.answers);
        let result = QuizResult {
            score,
            correct_answers: correct,
            total_questions: self.quiz.questions.len(),
            passed: score >= self.quiz.passing_score,
            time_taken: self.quiz.time_limit_seconds().saturating_sub(self.time_left),
            reason,
        };

        self.state = AttemptState::Completed;
        self.result = Some(result.clone());
        self.finished_at = Some(Instant::now());
        Ok(result)
    }

    /// Enters review at the first question.
    pub fn review(&mut self) -> Result<Vec<ReviewQuestion>, QuizError> {
        match self.state {
            AttemptState::InProgress => return Err(QuizError::NotReviewable),
            AttemptState::Completed => {
                self.state = AttemptState::Review;
                self.current_question = 0;
            }
            AttemptState::Review => {}
        }

        let questions = self
            .quiz
            .questions
            .iter()
            .map(|question| {
                let selected = self.answers.get(&question.id).cloned();
                let options = question
                    .options
                    .iter()
                    .map(|option| {
                        let mark = if option.id == question.correct_answer {
                            OptionMark::Correct
                        } else if selected.as_deref() == Some(option.id.as_str()) {
                            OptionMark::SelectedWrong
                        } else {
                            OptionMark::Neutral
                        };
                        ReviewOption {
                            id: option.id.clone(),
                            text: option.text.clone(),
                            mark,
                        }
                    })
                    .collect();

                ReviewQuestion {
                    id: question.id.clone(),
                    text: question.text.clone(),
                    is_correct: selected.as_deref() == Some(question.correct_answer.as_str()),
                    selected,
                    options,
                    explanation: question.explanation.clone(),
                }
            })
            .collect();

        Ok(questions)
    }

    pub fn snapshot(&self) -> AttemptSnapshot {
        AttemptSnapshot {
            attempt_id: self.attempt_id.clone(),
            quiz_id: self.quiz.id.clone(),
            quiz_title: self.quiz.title.clone(),
            state: self.state,
            current_question: self.current_question,
            total_questions: self.quiz.questions.len(),
            question: self
                .quiz
                .questions
                .get(self.current_question)
                .map(|q| QuestionView {
                    id: q.id.clone(),
                    text: q.text.clone(),
                    options: q.options.clone(),
                }),
            answers: self.answers.clone(),
            time_left: self.time_left,
            result: self.result.clone(),
        }
    }
}

struct AttemptSlot {
    attempt_id: String,
    client_id: String,
    runner: Mutex<QuizRunner>,
    events: broadcast::Sender<TimerEvent>,
    cancel: watch::Sender<bool>,
}

/// Registry of running attempts, each with its own countdown task.
pub struct QuizService {
    catalog: Arc<Catalog>,
    auth: Arc<AuthService>,
    tick_every: Duration,
    attempts: RwLock<HashMap<String, Arc<AttemptSlot>>>,
}

impl QuizService {
    pub fn new(catalog: Arc<Catalog>, auth: Arc<AuthService>, tick_every: Duration) -> Self {
        Self {
            catalog,
            auth,
            tick_every,
            attempts: RwLock::new(HashMap::new()),
        }
    }

    /// Starts an attempt and its countdown. `None` when the quiz is unknown.
    pub async fn start_attempt(&self, client_id: &str, quiz_id: &str) -> Option<AttemptSnapshot> {
        let quiz = self.catalog.quiz(quiz_id)?.clone();
        let attempt_id = uuid::Uuid::new_v4().to_string();

        self.evict_finished(client_id).await;

        let runner = QuizRunner::new(attempt_id.clone(), quiz);
        let snapshot = runner.snapshot();

        let (events, _) = broadcast::channel(32);
        let (cancel, cancel_rx) = watch::channel(false);
        let slot = Arc::new(AttemptSlot {
            attempt_id: attempt_id.clone(),
            client_id: client_id.to_string(),
            runner: Mutex::new(runner),
            events,
            cancel,
        });

        self.attempts
            .write()
            .await
            .insert(attempt_id.clone(), slot.clone());

        QUIZ_ATTEMPTS_TOTAL.with_label_values(&["started"]).inc();
        QUIZ_ATTEMPTS_ACTIVE.inc();
        tokio::spawn(run_countdown(
            slot,
            self.auth.clone(),
            self.tick_every,
            cancel_rx,
        ));

        tracing::info!(
            "Quiz attempt started: attempt={} quiz={} client={} time_left={}s",
            attempt_id,
            quiz_id,
            client_id,
            snapshot.time_left
        );
        Some(snapshot)
    }

    pub async fn snapshot(&self, client_id: &str, attempt_id: &str) -> Result<AttemptSnapshot, QuizError> {
        let slot = self.slot(client_id, attempt_id).await?;
        let runner = slot.runner.lock().await;
        Ok(runner.snapshot())
    }

    pub async fn answer(
        &self,
        client_id: &str,
        attempt_id: &str,
        question_id: &str,
        option_id: &str,
    ) -> Result<AttemptSnapshot, QuizError> {
        let slot = self.slot(client_id, attempt_id).await?;
        let mut runner = slot.runner.lock().await;
        runner.handle_answer(question_id, option_id)?;

        ANSWERS_RECORDED_TOTAL
            .with_label_values(&[runner.quiz().id.as_str()])
            .inc();
        tracing::debug!(
            "Answer recorded: attempt={} question={} option={}",
            attempt_id,
            question_id,
            option_id
        );
        Ok(runner.snapshot())
    }

    pub async fn next_question(&self, client_id: &str, attempt_id: &str) -> Result<AttemptSnapshot, QuizError> {
        let slot = self.slot(client_id, attempt_id).await?;
        let mut runner = slot.runner.lock().await;
        runner.next_question();
        Ok(runner.snapshot())
    }

    pub async fn prev_question(&self, client_id: &str, attempt_id: &str) -> Result<AttemptSnapshot, QuizError> {
        let slot = self.slot(client_id, attempt_id).await?;
        let mut runner = slot.runner.lock().await;
        runner.prev_question();
        Ok(runner.snapshot())
    }

    pub async fn submit(&self, client_id: &str, attempt_id: &str) -> Result<SubmitResponse, QuizError> {
        let slot = self.slot(client_id, attempt_id).await?;
        finish(&slot, &self.auth, SubmitReason::Submitted).await
    }

    pub async fn review(&self, client_id: &str, attempt_id: &str) -> Result<ReviewResponse, QuizError> {
        let slot = self.slot(client_id, attempt_id).await?;
        let mut runner = slot.runner.lock().await;
        let questions = runner.review()?;
        Ok(ReviewResponse {
            attempt_id: attempt_id.to_string(),
            current_question: runner.current_question(),
            questions,
        })
    }

    /// Drops the attempt and stops its countdown. Nothing is recorded.
    pub async fn abandon(&self, client_id: &str, attempt_id: &str) -> Result<(), QuizError> {
        let slot = self.slot(client_id, attempt_id).await?;
        self.attempts.write().await.remove(attempt_id);
        slot.cancel.send_replace(true);

        QUIZ_ATTEMPTS_TOTAL.with_label_values(&["abandoned"]).inc();
        tracing::info!("Quiz attempt abandoned: attempt={}", attempt_id);
        Ok(())
    }

    /// Timer events for a running attempt. Finished attempts have no stream.
    pub async fn subscribe(
        &self,
        client_id: &str,
        attempt_id: &str,
    ) -> Result<broadcast::Receiver<TimerEvent>, QuizError> {
        let slot = self.slot(client_id, attempt_id).await?;
        // Hold the runner so a concurrent submit cannot slip in before the
        // receiver exists.
        let runner = slot.runner.lock().await;
        if runner.state() != AttemptState::InProgress {
            return Err(QuizError::AlreadySubmitted);
        }
        Ok(slot.events.subscribe())
    }

    /// Drops the client's own finished attempts, and anyone's finished
    /// attempts past retention. An attempt whose result is still unsaved stays
    /// with its client until retention runs out. Attempts busy elsewhere are
    /// left for the next sweep.
    async fn evict_finished(&self, client_id: &str) {
        let mut attempts = self.attempts.write().await;
        let before = attempts.len();

        attempts.retain(|_, slot| {
            let Ok(runner) = slot.runner.try_lock() else {
                return true;
            };
            match runner.finished_at() {
                None => true,
                Some(at) if at.elapsed() >= FINISHED_ATTEMPT_RETENTION => false,
                Some(_) => slot.client_id != client_id || !runner.result_recorded(),
            }
        });

        let evicted = before - attempts.len();
        if evicted > 0 {
            tracing::debug!("Evicted {} finished quiz attempts", evicted);
        }
    }

    async fn slot(&self, client_id: &str, attempt_id: &str) -> Result<Arc<AttemptSlot>, QuizError> {
        let attempts = self.attempts.read().await;
        attempts
            .get(attempt_id)
            .filter(|slot| slot.client_id == client_id)
            .cloned()
            .ok_or_else(|| QuizError::AttemptNotFound(attempt_id.to_string()))
    }
}

/// Scores the attempt, stops the countdown and merges the result into the
/// client's progress. The attempt stays finished when the store write fails;
/// a later manual submit retries the save with the same result.
async fn finish(
    slot: &AttemptSlot,
    auth: &AuthService,
    reason: SubmitReason,
) -> Result<SubmitResponse, QuizError> {
    let mut runner = slot.runner.lock().await;

    let result = if runner.state() == AttemptState::InProgress {
        let result = runner.submit(reason)?;
        slot.cancel.send_replace(true);
        QUIZ_ATTEMPTS_TOTAL
            .with_label_values(&[reason_label(reason)])
            .inc();
        result
    } else {
        match runner.unrecorded_result() {
            Some(result) if reason == SubmitReason::Submitted => {
                tracing::info!("Retrying progress save: attempt={}", slot.attempt_id);
                result.clone()
            }
            _ => return Err(QuizError::AlreadySubmitted),
        }
    };

    let progress_saved = match auth
        .record_quiz_result(&slot.client_id, runner.quiz(), &result)
        .await
    {
        Ok(saved) => saved,
        Err(err) => {
            tracing::warn!(
                error = %err,
                "Quiz result not saved, submit can be retried: attempt={}",
                slot.attempt_id
            );
            return Err(err.into());
        }
    };
    runner.mark_result_recorded();

    tracing::info!(
        "Quiz attempt finished: attempt={} reason={} score={} passed={} saved={}",
        slot.attempt_id,
        reason_label(result.reason),
        result.score,
        result.passed,
        progress_saved
    );

    Ok(SubmitResponse {
        attempt_id: slot.attempt_id.clone(),
        notification: Notification::for_result(&result),
        result,
        progress_saved,
    })
}

fn reason_label(reason: SubmitReason) -> &'static str {
    match reason {
        SubmitReason::Submitted => "submitted",
        SubmitReason::TimeExpired => "expired",
    }
}

/// Force-submits an attempt whose clock ran out. `time-expired` goes out only
/// when this submit is the one that ended the attempt.
async fn expire(slot: &AttemptSlot, auth: &AuthService) {
    tracing::info!("Time expired: attempt={}", slot.attempt_id);

    match finish(slot, auth, SubmitReason::TimeExpired).await {
        // finished either way; a failed save is retried by the next submit
        Ok(_) | Err(QuizError::Store(_)) => {}
        Err(err) => {
            tracing::debug!(
                error = %err,
                "Attempt ended before expiry: attempt={}",
                slot.attempt_id
            );
            publish_stopped(slot).await;
            return;
        }
    }

    let _ = slot.events.send(TimerEvent::TimeExpired(TimeExpired {
        attempt_id: slot.attempt_id.clone(),
        timestamp: Utc::now(),
        message: "Time limit exceeded".to_string(),
    }));
}

async fn run_countdown(
    slot: Arc<AttemptSlot>,
    auth: Arc<AuthService>,
    tick_every: Duration,
    mut cancel: watch::Receiver<bool>,
) {
    let total_seconds = slot.runner.lock().await.quiz().time_limit_seconds();
    let mut interval = tokio::time::interval(tick_every);
    // first tick completes immediately
    interval.tick().await;

    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = cancel.changed() => {
                publish_stopped(&slot).await;
                break;
            }
        }

        let step = slot.runner.lock().await.tick();
        match step {
            Tick::Running(remaining) => {
                let _ = slot.events.send(TimerEvent::TimerTick(TimerTick {
                    attempt_id: slot.attempt_id.clone(),
                    remaining_seconds: remaining,
                    elapsed_seconds: total_seconds.saturating_sub(remaining),
                    total_seconds,
                    timestamp: Utc::now(),
                }));
            }
            Tick::Expired => {
                expire(&slot, &auth).await;
                break;
            }
            Tick::Stopped => {
                publish_stopped(&slot).await;
                break;
            }
        }
    }

    QUIZ_ATTEMPTS_ACTIVE.dec();
}

async fn publish_stopped(slot: &AttemptSlot) {
    let remaining = slot.runner.lock().await.time_left();
    let _ = slot.events.send(TimerEvent::TimerStopped(TimerStopped {
        attempt_id: slot.attempt_id.clone(),
        remaining_seconds: remaining,
        timestamp: Utc::now(),
    }));
    tracing::debug!("Countdown cancelled: attempt={}", slot.attempt_id);
}
