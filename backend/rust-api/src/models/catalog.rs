use serde::{Deserialize, Serialize};

/// Overview shown when a category key is unknown.
pub const FALLBACK_CATEGORY: &str = "class-11";
/// Career path shown when a roadmap key is unknown.
pub const FALLBACK_CAREER_PATH: &str = "engineering";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub duration: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    pub instructor: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub rating: f32,
    pub students: u32,
    pub topics: Vec<Topic>,
}

impl Subject {
    /// Number of lessons across all topics. Progress percentages are always
    /// computed against this value.
    pub fn total_lessons(&self) -> u32 {
        self.topics.iter().map(|topic| topic.lessons.len() as u32).sum()
    }

    pub fn has_lesson(&self, lesson_id: &str) -> bool {
        self.topics
            .iter()
            .flat_map(|topic| topic.lessons.iter())
            .any(|lesson| lesson.id == lesson_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
    pub students: u32,
    pub rating: f32,
    pub image: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<QuizOption>,
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    pub fn has_option(&self, option_id: &str) -> bool {
        self.options.iter().any(|option| option.id == option_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    /// Display name of the owning subject.
    pub subject: String,
    pub subject_id: String,
    pub description: String,
    /// Minutes.
    pub time_limit: u32,
    pub passing_score: u32,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn time_limit_seconds(&self) -> u32 {
        self.time_limit * 60
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}

/// Listing view of a quiz without answers or explanations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub subject_id: String,
    pub description: String,
    pub time_limit: u32,
    pub passing_score: u32,
    pub total_questions: usize,
}

impl From<&Quiz> for QuizSummary {
    fn from(quiz: &Quiz) -> Self {
        QuizSummary {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            subject: quiz.subject.clone(),
            subject_id: quiz.subject_id.clone(),
            description: quiz.description.clone(),
            time_limit: quiz.time_limit,
            passing_score: quiz.passing_score,
            total_questions: quiz.questions.len(),
        }
    }
}

/// What a syllabus entry counts. Schools count chapters, universities count
/// branches or specializations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyllabusKind {
    Chapters { chapters: u32, resources: u32 },
    Branches { branches: u32, courses: u32 },
    Specializations { specializations: u32, courses: u32 },
}

impl SyllabusKind {
    pub fn summary(&self) -> String {
        match self {
            SyllabusKind::Chapters {
                chapters,
                resources,
            } => format!("{} Chapters • {} Resources", chapters, resources),
            SyllabusKind::Branches { branches, courses } => {
                format!("{} Branches • {} Courses", branches, courses)
            }
            SyllabusKind::Specializations {
                specializations,
                courses,
            } => format!("{} Specializations • {} Courses", specializations, courses),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyllabusEntry {
    pub name: String,
    #[serde(flatten)]
    pub kind: SyllabusKind,
    /// Display line, e.g. "15 Chapters • 42 Resources".
    pub summary: String,
    /// Link slug, e.g. "Computer Science" -> "computer-science".
    pub slug: String,
}

impl SyllabusEntry {
    pub fn new(name: impl Into<String>, kind: SyllabusKind) -> Self {
        let name = name.into();
        SyllabusEntry {
            slug: name.to_lowercase().replace(' ', "-"),
            summary: kind.summary(),
            name,
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadmapStep {
    pub title: String,
    pub description: String,
}

/// One stage of a career path, with the concrete things to do in it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CareerStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CareerRoadmap {
    pub key: String,
    pub title: String,
    pub steps: Vec<CareerStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryOverview {
    pub key: String,
    pub title: String,
    pub description: String,
    pub subjects: Vec<SyllabusEntry>,
    pub roadmap: Vec<RoadmapStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPaper {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub subject: String,
    pub year: String,
    #[serde(rename = "type")]
    pub paper_type: String,
    pub download_url: String,
    pub questions: u32,
    pub marks: u32,
    pub duration: String,
}

/// Filters for the question bank. Empty or missing values match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionPaperQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub subject: Option<String>,
    pub year: Option<String>,
    #[serde(rename = "type")]
    pub paper_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryFilter {
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllabus_entry_serializes_with_kind_tag() {
        let entry = SyllabusEntry::new(
            "Engineering",
            SyllabusKind::Branches {
                branches: 8,
                courses: 120,
            },
        );

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "branches");
        assert_eq!(json["branches"], 8);
        assert_eq!(json["courses"], 120);
        assert_eq!(json["summary"], "8 Branches • 120 Courses");
    }

    #[test]
    fn slug_replaces_spaces() {
        let entry = SyllabusEntry::new(
            "Computer Science",
            SyllabusKind::Chapters {
                chapters: 10,
                resources: 25,
            },
        );
        assert_eq!(entry.slug, "computer-science");
    }
}
