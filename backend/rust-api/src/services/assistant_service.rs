use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::{watch, Mutex, RwLock};

use crate::metrics::ASSISTANT_REPLIES_TOTAL;
use crate::models::assistant::{AssistantReply, ChatMessage, ResourceLink};

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("Message must not be empty")]
    EmptyMessage,
    #[error("Conversation was cleared before the reply arrived")]
    Cancelled,
}

/// Canned answer a message is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    EngineeringCareers,
    BoardExams,
    Physics,
    StudyPlan,
    Fallback,
}

impl Topic {
    pub fn label(&self) -> &'static str {
        match self {
            Topic::EngineeringCareers => "engineering_careers",
            Topic::BoardExams => "board_exams",
            Topic::Physics => "physics",
            Topic::StudyPlan => "study_plan",
            Topic::Fallback => "fallback",
        }
    }
}

/// First matching keyword group wins.
pub fn classify(text: &str) -> Topic {
    let input = text.to_lowercase();
    let has = |needle: &str| input.contains(needle);

    if has("engineering") || has("career") {
        Topic::EngineeringCareers
    } else if has("board") || has("exam") {
        Topic::BoardExams
    } else if has("physics") {
        Topic::Physics
    } else if has("study plan") || has("schedule") {
        Topic::StudyPlan
    } else {
        Topic::Fallback
    }
}

pub fn respond(text: &str) -> AssistantReply {
    reply_for(classify(text))
}

pub fn greeting() -> AssistantReply {
    canned(
        "Hello! I'm your EduPath AI Assistant. I can help you with academic guidance, learning resources, and career planning. What would you like to know today?",
        &[],
        &[
            "Tell me about engineering careers",
            "How to prepare for board exams?",
            "Recommend study materials for Class 12 Physics",
        ],
    )
}

pub fn reply_for(topic: Topic) -> AssistantReply {
    match topic {
        Topic::EngineeringCareers => canned(
            "Engineering offers diverse career paths across multiple disciplines. Popular branches include Computer Science, Mechanical, Electrical, Civil, and Chemical Engineering. Each requires specific skills and offers unique opportunities.",
            &[
                ("Computer Science Engineering Roadmap", "/roadmap/cse"),
                ("Engineering Entrance Exam Guide", "/resources/engineering-exams"),
            ],
            &[
                "What skills do I need for CSE?",
                "Top engineering colleges",
                "Engineering vs Medicine",
            ],
        ),
        Topic::BoardExams => canned(
            "Preparing for board exams requires a structured approach. Start by understanding the syllabus, create a study schedule, practice with previous year papers, and take regular mock tests to assess your preparation.",
            &[
                ("Board Exam Preparation Guide", "/resources/board-exam-prep"),
                ("Previous Year Question Papers", "/question-bank/board-exams"),
            ],
            &[
                "How to manage exam stress?",
                "Time management tips",
                "Important topics for Physics",
            ],
        ),
        Topic::Physics => canned(
            "For Class 12 Physics, focus on understanding core concepts rather than memorization. Key topics include Electrostatics, Current Electricity, Magnetism, Optics, and Modern Physics. Regular problem-solving is essential.",
            &[
                ("Class 12 Physics Study Material", "/resources/class-12/physics"),
                ("Physics Video Lectures", "/resources/videos/physics"),
            ],
            &[
                "Difficult topics in Physics",
                "Physics experiment ideas",
                "Physics numericals practice",
            ],
        ),
        Topic::StudyPlan => canned(
            "An effective study plan balances all subjects, includes regular revision, and accounts for your peak productivity hours. I recommend the Pomodoro technique: 25 minutes of focused study followed by a 5-minute break.",
            &[
                ("Customizable Study Planner", "/tools/study-planner"),
                ("Effective Study Techniques", "/resources/study-techniques"),
            ],
            &[
                "How many hours should I study?",
                "Weekend study routine",
                "Balancing studies and hobbies",
            ],
        ),
        Topic::Fallback => canned(
            "I'm not sure I understand. Could you please rephrase your question? I can help with academic guidance, learning resources, and career planning.",
            &[],
            &[
                "Show me career options",
                "Help me create a study plan",
                "Recommend learning resources",
            ],
        ),
    }
}

fn canned(text: &str, links: &[(&str, &str)], suggestions: &[&str]) -> AssistantReply {
    AssistantReply {
        text: text.to_string(),
        links: links
            .iter()
            .map(|(text, url)| ResourceLink {
                text: text.to_string(),
                url: url.to_string(),
            })
            .collect(),
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
    }
}

/// Keyword-matched assistant with a simulated thinking delay. Keeps one
/// transcript per client.
pub struct AssistantService {
    delay: Duration,
    transcripts: RwLock<HashMap<String, Vec<ChatMessage>>>,
    pending: Mutex<HashMap<String, watch::Sender<bool>>>,
}

impl AssistantService {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            transcripts: RwLock::new(HashMap::new()),
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Appends the user's message, waits out the delay and appends the
    /// reply. Clearing the transcript meanwhile cancels the reply.
    pub async fn send_message(&self, client_id: &str, text: &str) -> Result<ChatMessage, AssistantError> {
        if text.trim().is_empty() {
            return Err(AssistantError::EmptyMessage);
        }

        let mut cancel = {
            let mut pending = self.pending.lock().await;
            pending
                .entry(client_id.to_string())
                .or_insert_with(|| watch::channel(false).0)
                .subscribe()
        };

        self.push(client_id, ChatMessage::from_user(text)).await;

        tokio::select! {
            _ = tokio::time::sleep(self.delay) => {}
            _ = cancel.changed() => {
                tracing::debug!("Assistant reply cancelled: client={}", client_id);
                self.release_pending(client_id, cancel).await;
                return Err(AssistantError::Cancelled);
            }
        }

        let topic = classify(text);
        let message = ChatMessage::from_reply(&reply_for(topic));
        self.push_reply(client_id, cancel, message.clone()).await?;

        ASSISTANT_REPLIES_TOTAL
            .with_label_values(&[topic.label()])
            .inc();
        tracing::info!("Assistant replied: client={} topic={}", client_id, topic.label());
        Ok(message)
    }

    pub async fn transcript(&self, client_id: &str) -> Vec<ChatMessage> {
        self.transcripts
            .read()
            .await
            .get(client_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Empties the transcript and cancels replies still in flight.
    pub async fn clear_transcript(&self, client_id: &str) {
        let mut pending = self.pending.lock().await;
        if let Some(cancel) = pending.remove(client_id) {
            cancel.send_replace(true);
        }
        self.transcripts.write().await.remove(client_id);
    }

    /// Appends a finished reply unless the transcript was cleared while the
    /// reply was being prepared. Holds `pending` so a clear cannot interleave.
    async fn push_reply(
        &self,
        client_id: &str,
        cancel: watch::Receiver<bool>,
        message: ChatMessage,
    ) -> Result<(), AssistantError> {
        let mut pending = self.pending.lock().await;
        if *cancel.borrow() {
            tracing::debug!("Assistant reply dropped after clear: client={}", client_id);
            return Err(AssistantError::Cancelled);
        }

        self.push(client_id, message).await;
        drop(cancel);
        remove_if_unused(&mut pending, client_id);
        Ok(())
    }

    async fn release_pending(&self, client_id: &str, cancel: watch::Receiver<bool>) {
        let mut pending = self.pending.lock().await;
        drop(cancel);
        remove_if_unused(&mut pending, client_id);
    }

    async fn push(&self, client_id: &str, message: ChatMessage) {
        self.transcripts
            .write()
            .await
            .entry(client_id.to_string())
            .or_default()
            .push(message);
    }
}

/// Drops the client's cancel handle once no reply is waiting on it.
fn remove_if_unused(pending: &mut HashMap<String, watch::Sender<bool>>, client_id: &str) {
    if pending
        .get(client_id)
        .is_some_and(|sender| sender.receiver_count() == 0)
    {
        pending.remove(client_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assistant::Speaker;
    use std::sync::Arc;

    #[test]
    fn predicates_are_checked_in_order() {
        assert_eq!(classify("Engineering careers?"), Topic::EngineeringCareers);
        // "career" beats "physics"
        assert_eq!(classify("physics career"), Topic::EngineeringCareers);
        // "exam" beats "physics"
        assert_eq!(classify("physics exam tips"), Topic::BoardExams);
        assert_eq!(classify("Recommend study materials for Class 12 Physics"), Topic::Physics);
        assert_eq!(classify("Weekend SCHEDULE"), Topic::StudyPlan);
        assert_eq!(classify("hello there"), Topic::Fallback);
    }

    #[test]
    fn payloads_carry_links_and_suggestions() {
        let physics = respond("physics");
        assert_eq!(physics.links.len(), 2);
        assert_eq!(physics.links[0].url, "/resources/class-12/physics");
        assert_eq!(physics.suggestions.len(), 3);

        let fallback = respond("???");
        assert!(fallback.links.is_empty());
        assert_eq!(fallback.suggestions[0], "Show me career options");

        assert!(greeting().text.starts_with("Hello! I'm your EduPath AI Assistant."));
    }

    #[tokio::test]
    async fn blank_message_is_rejected() {
        let service = AssistantService::new(Duration::from_millis(1));
        let err = service.send_message("c1", "   ").await.unwrap_err();
        assert!(matches!(err, AssistantError::EmptyMessage));
        assert!(service.transcript("c1").await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn reply_arrives_after_delay() {
        let service = AssistantService::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();

        let reply = service.send_message("c1", "board exam prep").await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(reply.speaker, Speaker::Ai);
        assert!(reply.text.starts_with("Preparing for board exams"));

        let transcript = service.transcript("c1").await;
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].speaker, Speaker::User);
        assert_eq!(transcript[0].text, "board exam prep");
    }

    #[tokio::test(start_paused = true)]
    async fn clearing_cancels_pending_reply() {
        let service = Arc::new(AssistantService::new(Duration::from_millis(1500)));

        let sender = service.clone();
        let pending = tokio::spawn(async move { sender.send_message("c1", "physics").await });

        tokio::time::sleep(Duration::from_millis(100)).await;
        service.clear_transcript("c1").await;

        let outcome = pending.await.unwrap();
        assert!(matches!(outcome, Err(AssistantError::Cancelled)));
        assert!(service.transcript("c1").await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_handle_is_dropped_after_reply() {
        let service = AssistantService::new(Duration::from_millis(1500));

        service.send_message("c1", "physics").await.unwrap();
        service.send_message("c1", "study plan").await.unwrap();

        assert!(service.pending.lock().await.is_empty());
        assert_eq!(service.transcript("c1").await.len(), 4);
    }

    #[tokio::test]
    async fn reply_finished_after_clear_is_not_appended() {
        let service = AssistantService::new(Duration::from_millis(1));
        let cancel = service
            .pending
            .lock()
            .await
            .entry("c1".to_string())
            .or_insert_with(|| watch::channel(false).0)
            .subscribe();
        service.push("c1", ChatMessage::from_user("physics")).await;

        // delay elapsed, but the clear lands before the reply is stored
        service.clear_transcript("c1").await;
        let outcome = service
            .push_reply("c1", cancel, ChatMessage::from_reply(&respond("physics")))
            .await;

        assert!(matches!(outcome, Err(AssistantError::Cancelled)));
        assert!(service.transcript("c1").await.is_empty());
    }
}
