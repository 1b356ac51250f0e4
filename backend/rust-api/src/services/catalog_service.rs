use crate::models::catalog::{
    CareerRoadmap, CategoryOverview, Course, QuestionPaper, QuestionPaperQuery, Quiz, QuizSummary,
    Subject, FALLBACK_CAREER_PATH, FALLBACK_CATEGORY,
};
use crate::models::user::SubjectProgress;

use super::catalog_seed;

/// Read-only catalog: subjects, courses and quizzes grouped by category key,
/// category overviews, career roadmaps and the question-paper bank.
#[derive(Debug, Clone)]
pub struct Catalog {
    subjects: Vec<(String, Vec<Subject>)>,
    courses: Vec<(String, Vec<Course>)>,
    quizzes: Vec<(String, Vec<Quiz>)>,
    categories: Vec<CategoryOverview>,
    roadmaps: Vec<CareerRoadmap>,
    question_papers: Vec<QuestionPaper>,
}

/// Subject page payload.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectDetail {
    pub subject: Subject,
    pub quizzes: Vec<QuizSummary>,
    pub progress: SubjectProgress,
}

impl Catalog {
    pub fn builtin() -> Self {
        let catalog = Self {
            subjects: catalog_seed::subjects(),
            courses: catalog_seed::courses(),
            quizzes: catalog_seed::quizzes(),
            categories: catalog_seed::categories(),
            roadmaps: catalog_seed::career_roadmaps(),
            question_papers: catalog_seed::question_papers(),
        };

        tracing::debug!(
            "Catalog loaded: {} subjects, {} courses, {} quizzes",
            catalog.all_subjects().count(),
            catalog.all_courses().count(),
            catalog.all_quizzes().count()
        );

        catalog
    }

    pub fn all_subjects(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.iter().flat_map(|(_, items)| items.iter())
    }

    pub fn all_courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter().flat_map(|(_, items)| items.iter())
    }

    pub fn all_quizzes(&self) -> impl Iterator<Item = &Quiz> {
        self.quizzes.iter().flat_map(|(_, items)| items.iter())
    }

    pub fn subjects(&self, category: Option<&str>) -> Vec<&Subject> {
        filter_grouped(&self.subjects, category)
    }

    pub fn courses(&self, category: Option<&str>) -> Vec<&Course> {
        filter_grouped(&self.courses, category)
    }

    pub fn quizzes(&self, category: Option<&str>) -> Vec<&Quiz> {
        filter_grouped(&self.quizzes, category)
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.all_subjects().find(|s| s.id == id)
    }

    pub fn quiz(&self, id: &str) -> Option<&Quiz> {
        self.all_quizzes().find(|q| q.id == id)
    }

    pub fn quizzes_for_subject(&self, subject_id: &str) -> Vec<&Quiz> {
        self.all_quizzes()
            .filter(|q| q.subject_id == subject_id)
            .collect()
    }

    pub fn categories(&self) -> &[CategoryOverview] {
        &self.categories
    }

    /// Overview for `key`; unknown keys get the fallback category.
    pub fn category(&self, key: &str) -> &CategoryOverview {
        self.categories
            .iter()
            .find(|c| c.key == key)
            .or_else(|| self.categories.iter().find(|c| c.key == FALLBACK_CATEGORY))
            .unwrap_or(&self.categories[0])
    }

    pub fn roadmaps(&self) -> &[CareerRoadmap] {
        &self.roadmaps
    }

    /// Roadmap for a career path; unknown paths (e.g. `cse`) get engineering.
    pub fn roadmap(&self, path: &str) -> &CareerRoadmap {
        self.roadmaps
            .iter()
            .find(|r| r.key == path)
            .or_else(|| self.roadmaps.iter().find(|r| r.key == FALLBACK_CAREER_PATH))
            .unwrap_or(&self.roadmaps[0])
    }

    pub fn question_papers(&self, query: &QuestionPaperQuery) -> Vec<&QuestionPaper> {
        let term = query
            .search
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();

        self.question_papers
            .iter()
            .filter(|paper| {
                let matches_search = paper.title.to_lowercase().contains(&term)
                    || paper.subject.to_lowercase().contains(&term);

                matches_search
                    && matches_exact(query.category.as_deref(), &paper.category)
                    && matches_exact(query.subject.as_deref(), &paper.subject)
                    && matches_exact(query.year.as_deref(), &paper.year)
                    && matches_exact(query.paper_type.as_deref(), &paper.paper_type)
            })
            .collect()
    }

    /// Subject page: the subject, its quizzes and the caller's progress for it.
    pub fn subject_detail(
        &self,
        id: &str,
        stored: Option<&SubjectProgress>,
    ) -> Option<SubjectDetail> {
        let subject = self.subject(id)?;
        let progress = match stored {
            Some(progress) => progress.clone(),
            None => SubjectProgress {
                total_lessons: Some(subject.total_lessons()),
                ..SubjectProgress::default()
            },
        };

        Some(SubjectDetail {
            subject: subject.clone(),
            quizzes: self
                .quizzes_for_subject(id)
                .into_iter()
                .map(QuizSummary::from)
                .collect(),
            progress,
        })
    }
}

fn filter_grouped<'a, T>(groups: &'a [(String, Vec<T>)], category: Option<&str>) -> Vec<&'a T> {
    groups
        .iter()
        .filter(|(key, _)| category.is_none_or(|wanted| wanted.is_empty() || wanted == key))
        .flat_map(|(_, items)| items.iter())
        .collect()
}

fn matches_exact(filter: Option<&str>, value: &str) -> bool {
    match filter {
        None => true,
        Some(wanted) => wanted.is_empty() || wanted == value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::SyllabusKind;

    #[test]
    fn builtin_catalog_has_expected_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.all_subjects().count(), 5);
        assert_eq!(catalog.all_courses().count(), 16);
        assert_eq!(catalog.all_quizzes().count(), 4);
        assert_eq!(catalog.categories().len(), 4);
    }

    #[test]
    fn quiz_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<_> = catalog.all_quizzes().map(|q| q.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn physics_fundamentals_counts_seven_lessons() {
        let catalog = Catalog::builtin();
        let subject = catalog.subject("physics-fundamentals").unwrap();
        assert_eq!(subject.total_lessons(), 7);
        assert!(subject.has_lesson("momentum"));
        assert!(!subject.has_lesson("optics"));
    }

    #[test]
    fn unknown_category_falls_back_to_class_11() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.category("phd").key, "class-11");
        assert_eq!(catalog.category("graduation").title, "Graduation");
    }

    #[test]
    fn roadmaps_cover_four_paths_with_tasks() {
        let catalog = Catalog::builtin();
        let keys: Vec<_> = catalog.roadmaps().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["engineering", "medical", "commerce", "arts"]);
        assert!(catalog
            .roadmaps()
            .iter()
            .all(|r| r.steps.len() == 4 && r.steps.iter().all(|s| s.tasks.len() == 4)));

        let medical = catalog.roadmap("medical");
        assert_eq!(medical.steps[1].title, "MBBS (Bachelor of Medicine and Surgery)");
        assert_eq!(catalog.roadmap("cse").key, "engineering");
    }

    #[test]
    fn graduation_syllabus_counts_branches() {
        let catalog = Catalog::builtin();
        let entry = &catalog.category("graduation").subjects[0];
        assert!(matches!(entry.kind, SyllabusKind::Branches { branches: 8, .. }));
    }

    #[test]
    fn listings_filter_by_category() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.courses(Some("masters")).len(), 4);
        assert_eq!(catalog.courses(None).len(), 16);
        assert_eq!(catalog.subjects(Some("class-11")).len(), 2);
        assert!(catalog.quizzes(Some("biology")).is_empty());
    }

    #[test]
    fn subject_detail_without_progress_reports_lesson_total() {
        let catalog = Catalog::builtin();
        let detail = catalog
            .subject_detail("physics-fundamentals", None)
            .unwrap();
        assert_eq!(detail.progress.total_lessons, Some(7));
        assert_eq!(detail.quizzes.len(), 2);
        assert!(catalog.subject_detail("missing", None).is_none());
    }

    #[test]
    fn question_papers_combine_search_and_filters() {
        let catalog = Catalog::builtin();

        let physics = catalog.question_papers(&QuestionPaperQuery {
            search: Some("PHYSICS".to_string()),
            ..QuestionPaperQuery::default()
        });
        assert_eq!(physics.len(), 2);

        let entrance = catalog.question_papers(&QuestionPaperQuery {
            category: Some("masters".to_string()),
            paper_type: Some("Entrance Exam".to_string()),
            ..QuestionPaperQuery::default()
        });
        let titles: Vec<_> = entrance.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["GATE CSE 2023", "CAT 2023"]);

        let everything = catalog.question_papers(&QuestionPaperQuery {
            subject: Some(String::new()),
            ..QuestionPaperQuery::default()
        });
        assert_eq!(everything.len(), 8);
    }
}
