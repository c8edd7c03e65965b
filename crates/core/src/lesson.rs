//! Lesson definitions and the fixed course catalog.

use serde::{Deserialize, Serialize};
use crate::day::{Day, TOTAL_DAYS};
use crate::error::{CourseError, Result};
use crate::syllabus::LESSONS;

/// One course unit. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonDefinition {
    /// Lesson day
    pub day: Day,

    /// Title shown on the card
    pub title: String,

    /// Short description
    pub description: String,

    /// Topic labels, in display order
    pub topics: Vec<String>,
}

impl LessonDefinition {
    /// Create a new lesson definition.
    pub fn new(
        day: Day,
        title: impl Into<String>,
        description: impl Into<String>,
        topics: Vec<String>,
    ) -> Self {
        Self {
            day,
            title: title.into(),
            description: description.into(),
            topics,
        }
    }

    /// Whether the title, description or any topic contains `needle`.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.topics.iter().any(|t| t.to_lowercase().contains(needle))
    }

    /// Relative path of the lesson page.
    pub fn page_path(&self) -> String {
        format!("lessons/day-{}.html", self.day)
    }
}

/// The complete, ordered list of lessons.
///
/// Always holds exactly one lesson per day in `1..=30`, sorted by day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    lessons: Vec<LessonDefinition>,
}

impl Catalog {
    /// Build a catalog, checking that every day appears exactly once.
    pub fn new(mut lessons: Vec<LessonDefinition>) -> Result<Self> {
        if lessons.len() != TOTAL_DAYS as usize {
            return Err(CourseError::InvalidCatalog(format!(
                "expected {} lessons, found {}",
                TOTAL_DAYS,
                lessons.len()
            )));
        }

        lessons.sort_by_key(|l| l.day);
        for (expected, lesson) in Day::all().zip(&lessons) {
            if lesson.day != expected {
                return Err(CourseError::InvalidCatalog(format!(
                    "day {} is missing or duplicated",
                    expected
                )));
            }
        }

        Ok(Self { lessons })
    }

    /// The shipped digital marketing syllabus.
    pub fn builtin() -> Self {
        let lessons = LESSONS
            .iter()
            .zip(Day::all())
            .map(|((_, title, description, topics), day)| {
                LessonDefinition::new(
                    day,
                    *title,
                    *description,
                    topics.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect();
        Self { lessons }
    }

    /// Parse a replacement catalog from a JSON array of lessons.
    pub fn from_json(json: &str) -> Result<Self> {
        let lessons: Vec<LessonDefinition> = serde_json::from_str(json)?;
        Self::new(lessons)
    }

    /// Look up a lesson.
    pub fn get(&self, day: Day) -> &LessonDefinition {
        // Dense and sorted, so the index is the day.
        &self.lessons[usize::from(day.get()) - 1]
    }

    /// Lessons in ascending day order.
    pub fn iter(&self) -> std::slice::Iter<'_, LessonDefinition> {
        self.lessons.iter()
    }

    /// Number of lessons.
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Always false; a catalog is never empty.
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a LessonDefinition;
    type IntoIter = std::slice::Iter<'a, LessonDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.lessons.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: i64) -> Day {
        Day::new(n).unwrap()
    }

    fn numbered(n: i64) -> LessonDefinition {
        LessonDefinition::new(day(n), format!("Lesson {}", n), "desc", vec![])
    }

    #[test]
    fn test_builtin_catalog_is_dense() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 30);
        for (lesson, expected) in catalog.iter().zip(Day::all()) {
            assert_eq!(lesson.day, expected);
            assert!(!lesson.title.is_empty());
            assert!(!lesson.topics.is_empty());
        }
        // The shipped data validates like any other catalog.
        assert!(Catalog::new(catalog.iter().cloned().collect()).is_ok());
    }

    #[test]
    fn test_builtin_days_match_table() {
        for ((n, ..), lesson) in LESSONS.iter().zip(Catalog::builtin().iter()) {
            assert_eq!(*n, lesson.day.get());
        }
    }

    #[test]
    fn test_catalog_sorts_input() {
        let lessons: Vec<_> = (1..=30).rev().map(numbered).collect();
        let catalog = Catalog::new(lessons).unwrap();
        assert_eq!(catalog.get(day(7)).title, "Lesson 7");
        assert_eq!(catalog.iter().next().unwrap().day, Day::MIN);
    }

    #[test]
    fn test_catalog_rejects_wrong_count() {
        let lessons: Vec<_> = (1..=29).map(numbered).collect();
        assert!(matches!(Catalog::new(lessons), Err(CourseError::InvalidCatalog(_))));
    }

    #[test]
    fn test_catalog_rejects_duplicate_day() {
        let mut lessons: Vec<_> = (1..=30).map(numbered).collect();
        lessons[4] = numbered(6);
        let err = Catalog::new(lessons).unwrap_err();
        assert!(err.to_string().contains("day 5"));
    }

    #[test]
    fn test_catalog_from_json() {
        let lessons: Vec<_> = (1..=30).map(numbered).collect();
        let json = serde_json::to_string(&lessons).unwrap();
        let catalog = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog.len(), 30);

        assert!(matches!(Catalog::from_json("not json"), Err(CourseError::Json(_))));
        assert!(Catalog::from_json(r#"[{"day":31,"title":"","description":"","topics":[]}]"#).is_err());
    }

    #[test]
    fn test_matches_is_case_insensitive_across_fields() {
        let lesson = LessonDefinition::new(
            day(3),
            "Off-Page SEO",
            "Backlinks and Domain Authority",
            vec!["Guest Posting".to_string()],
        );
        assert!(lesson.matches("seo"));
        assert!(lesson.matches("domain"));
        assert!(lesson.matches("guest post"));
        assert!(!lesson.matches("tiktok"));
    }

    #[test]
    fn test_page_path() {
        assert_eq!(Catalog::builtin().get(day(12)).page_path(), "lessons/day-12.html");
    }
}
