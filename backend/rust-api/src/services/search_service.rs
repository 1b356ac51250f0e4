use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::metrics::SEARCHES_TOTAL;
use crate::models::catalog::QuizSummary;
use crate::models::search::{ResultKind, SearchResponse, SearchResult};

use super::catalog_service::Catalog;

pub const SEARCH_ROUTE: &str = "/search";

/// Same escaping as a browser's `encodeURIComponent`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Substring search over the three catalogs. Subjects come first, then
/// courses, then quizzes; no ranking.
pub fn search_catalog(catalog: &Catalog, query: &str) -> Vec<SearchResult> {
    let q = query.to_lowercase();
    let hit = |field: &str| field.to_lowercase().contains(&q);

    let subjects = catalog
        .all_subjects()
        .filter(|s| {
            hit(&s.title) || hit(&s.description) || s.topics.iter().any(|t| hit(&t.title))
        })
        .cloned()
        .map(SearchResult::Subject);

    let courses = catalog
        .all_courses()
        .filter(|c| hit(&c.title) || hit(&c.description) || hit(&c.instructor) || hit(&c.category))
        .cloned()
        .map(SearchResult::Course);

    let quizzes = catalog
        .all_quizzes()
        .filter(|q| hit(&q.title) || hit(&q.description) || hit(&q.subject))
        .map(|q| SearchResult::Quiz(QuizSummary::from(q)));

    subjects.chain(courses).chain(quizzes).collect()
}

/// Results route for `query`, or `None` when the caller is already there.
pub fn navigation_target(query: &str, current_route: Option<&str>) -> Option<String> {
    let already_there = current_route
        .map(|route| route.split('?').next().unwrap_or(route) == SEARCH_ROUTE)
        .unwrap_or(false);

    if already_there {
        None
    } else {
        Some(format!(
            "{}?q={}",
            SEARCH_ROUTE,
            utf8_percent_encode(query, QUERY_COMPONENT)
        ))
    }
}

/// Stored results are dropped once a client has not searched for this long.
const SEARCH_STATE_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Clone)]
struct SearchState {
    results: Arc<Vec<SearchResult>>,
    is_searching: bool,
    touched: Instant,
}

impl SearchState {
    fn new(results: Arc<Vec<SearchResult>>, is_searching: bool) -> Self {
        Self {
            results,
            is_searching,
            touched: Instant::now(),
        }
    }

    fn is_live(&self) -> bool {
        self.touched.elapsed() < SEARCH_STATE_TTL
    }
}

/// Holds the last result list per client.
pub struct SearchService {
    catalog: Arc<Catalog>,
    state: RwLock<HashMap<String, SearchState>>,
}

impl SearchService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            state: RwLock::new(HashMap::new()),
        }
    }

    pub async fn perform_search(
        &self,
        client_id: &str,
        query: &str,
        current_route: Option<&str>,
    ) -> SearchResponse {
        if query.trim().is_empty() {
            self.clear_search(client_id).await;
            return SearchResponse {
                query: query.to_string(),
                is_searching: false,
                total: 0,
                results: Vec::new(),
                navigate_to: None,
            };
        }

        self.set_searching(client_id, true).await;

        let results = search_catalog(&self.catalog, query);
        SEARCHES_TOTAL
            .with_label_values(&[if results.is_empty() { "empty" } else { "hit" }])
            .inc();

        tracing::info!(
            "Search for client={} query={:?} returned {} results",
            client_id,
            query,
            results.len()
        );

        let shared = Arc::new(results);
        {
            let mut state = self.state.write().await;
            state.retain(|_, entry| entry.is_live());
            state.insert(client_id.to_string(), SearchState::new(shared.clone(), false));
        }

        SearchResponse {
            query: query.to_string(),
            is_searching: false,
            total: shared.len(),
            results: shared.as_ref().clone(),
            navigate_to: navigation_target(query, current_route),
        }
    }

    pub async fn clear_search(&self, client_id: &str) {
        let mut state = self.state.write().await;
        state.remove(client_id);
    }

    /// Stored results, optionally narrowed to one result type.
    pub async fn results(&self, client_id: &str, kind: ResultKind) -> Vec<SearchResult> {
        let state = self.state.read().await;
        let Some(entry) = state.get(client_id).filter(|entry| entry.is_live()) else {
            return Vec::new();
        };

        entry
            .results
            .iter()
            .filter(|r| kind == ResultKind::All || r.kind() == kind)
            .cloned()
            .collect()
    }

    pub async fn is_searching(&self, client_id: &str) -> bool {
        let state = self.state.read().await;
        state.get(client_id).map(|s| s.is_searching).unwrap_or(false)
    }

    async fn set_searching(&self, client_id: &str, searching: bool) {
        let mut state = self.state.write().await;
        state
            .entry(client_id.to_string())
            .or_insert_with(|| SearchState::new(Arc::default(), false))
            .is_searching = searching;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.title()).collect()
    }

    #[test]
    fn physics_finds_subject_and_mechanics_quiz() {
        let catalog = Catalog::builtin();
        let results = search_catalog(&catalog, "physics");

        assert!(results
            .iter()
            .any(|r| r.kind() == ResultKind::Subject && r.title() == "Physics Fundamentals"));
        assert!(results
            .iter()
            .any(|r| r.kind() == ResultKind::Quiz && r.title() == "Mechanics Quiz"));
    }

    #[test]
    fn results_are_grouped_subjects_courses_quizzes() {
        let catalog = Catalog::builtin();
        let results = search_catalog(&catalog, "physics");

        let kinds: Vec<_> = results.iter().map(|r| r.kind()).collect();
        let mut sorted = kinds.clone();
        sorted.sort_by_key(|k| match k {
            ResultKind::Subject => 0,
            ResultKind::Course => 1,
            ResultKind::Quiz => 2,
            ResultKind::All => 3,
        });
        assert_eq!(kinds, sorted);
    }

    #[test]
    fn match_is_case_insensitive_and_covers_topics_and_instructors() {
        let catalog = Catalog::builtin();

        // topic title only
        let bonding = search_catalog(&catalog, "CHEMICAL BONDING");
        assert_eq!(titles(&bonding), vec!["Chemistry Essentials"]);

        // instructor on courses, but subjects are not matched on instructor
        let meera = search_catalog(&catalog, "meera");
        assert_eq!(titles(&meera), vec!["Organic Chemistry"]);
    }

    #[test]
    fn quiz_matches_on_subject_name() {
        let catalog = Catalog::builtin();
        let results = search_catalog(&catalog, "mathematics mastery");
        assert!(results
            .iter()
            .any(|r| r.kind() == ResultKind::Quiz && r.title() == "Calculus Basics"));
    }

    #[test]
    fn navigation_is_skipped_on_results_route() {
        assert_eq!(
            navigation_target("board exams", Some("/")).as_deref(),
            Some("/search?q=board%20exams")
        );
        assert_eq!(
            navigation_target("class-11 (physics)", Some("/")).as_deref(),
            Some("/search?q=class-11%20(physics)")
        );
        assert_eq!(
            navigation_target("c++ & a/b?", None).as_deref(),
            Some("/search?q=c%2B%2B%20%26%20a%2Fb%3F")
        );
        assert_eq!(navigation_target("physics", Some("/search?q=old")), None);
        assert_eq!(
            navigation_target("physics", None).as_deref(),
            Some("/search?q=physics")
        );
    }

    #[tokio::test]
    async fn empty_query_clears_stored_results() {
        let service = SearchService::new(Arc::new(Catalog::builtin()));

        let response = service.perform_search("c1", "physics", Some("/")).await;
        assert!(response.total > 0);
        assert_eq!(response.navigate_to.as_deref(), Some("/search?q=physics"));
        assert!(!service.results("c1", ResultKind::All).await.is_empty());

        let cleared = service.perform_search("c1", "   ", Some("/")).await;
        assert_eq!(cleared.total, 0);
        assert!(cleared.navigate_to.is_none());
        assert!(service.results("c1", ResultKind::All).await.is_empty());
        assert!(!service.is_searching("c1").await);
    }

    #[tokio::test]
    async fn stored_results_can_be_filtered_by_type() {
        let service = SearchService::new(Arc::new(Catalog::builtin()));
        service.perform_search("c1", "physics", None).await;

        let quizzes = service.results("c1", ResultKind::Quiz).await;
        assert!(!quizzes.is_empty());
        assert!(quizzes.iter().all(|r| r.kind() == ResultKind::Quiz));

        // other clients keep their own list
        assert!(service.results("c2", ResultKind::All).await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn idle_clients_are_evicted_on_next_write() {
        let service = SearchService::new(Arc::new(Catalog::builtin()));
        service.perform_search("c1", "physics", None).await;

        tokio::time::advance(SEARCH_STATE_TTL + Duration::from_secs(1)).await;
        assert!(service.results("c1", ResultKind::All).await.is_empty());

        service.perform_search("c2", "calculus", None).await;
        let state = service.state.read().await;
        assert_eq!(state.len(), 1);
        assert!(state.contains_key("c2"));
    }
}
