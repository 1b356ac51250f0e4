use serde::{Deserialize, Serialize};

use super::catalog::{Course, QuizSummary, Subject};

/// A search hit, tagged with the catalog it came from.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchResult {
    Subject(Subject),
    Course(Course),
    Quiz(QuizSummary),
}

impl SearchResult {
    pub fn kind(&self) -> ResultKind {
        match self {
            SearchResult::Subject(_) => ResultKind::Subject,
            SearchResult::Course(_) => ResultKind::Course,
            SearchResult::Quiz(_) => ResultKind::Quiz,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            SearchResult::Subject(subject) => &subject.title,
            SearchResult::Course(course) => &course.title,
            SearchResult::Quiz(quiz) => &quiz.title,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    #[default]
    All,
    Subject,
    Course,
    Quiz,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    /// Route the caller is currently on.
    pub from: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResultsQuery {
    #[serde(default, rename = "type")]
    pub kind: ResultKind,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub is_searching: bool,
    pub total: usize,
    pub results: Vec<SearchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate_to: Option<String>,
}
