use sqlx::FromRow;

use crate::{
    pkg::internal::evaluator::{Category, Question},
    prelude::ServiceError,
};

/// A `questions` row as stored, before category and marks are validated.
#[derive(Debug, Clone, FromRow)]
pub struct QuestionEntry {
    pub id: i32,
    pub marks: i32,
    pub category: String,
    pub correct_answer: String,
}

impl TryFrom<QuestionEntry> for Question {
    type Error = ServiceError;

    fn try_from(entry: QuestionEntry) -> Result<Self, Self::Error> {
        let category: Category =
            entry
                .category
                .parse()
                .map_err(|category| ServiceError::UnknownCategory {
                    id: entry.id,
                    category,
                })?;
        if entry.marks <= 0 {
            return Err(ServiceError::InvalidMarks {
                id: entry.id,
                marks: entry.marks,
            });
        }
        Ok(Question {
            id: entry.id,
            marks: entry.marks,
            category,
            correct_answer: entry.correct_answer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: &str, marks: i32) -> QuestionEntry {
        QuestionEntry {
            id: 3,
            marks,
            category: category.into(),
            correct_answer: "O(n)".into(),
        }
    }

    #[test]
    fn valid_rows_become_questions() {
        let q = Question::try_from(entry("technical", 20)).unwrap();
        assert_eq!(q.id, 3);
        assert_eq!(q.marks, 20);
        assert_eq!(q.category, Category::Technical);
        assert_eq!(q.correct_answer, "O(n)");
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = Question::try_from(entry("history", 20)).unwrap_err();
        match err {
            ServiceError::UnknownCategory { id, category } => {
                assert_eq!(id, 3);
                assert_eq!(category, "history");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_positive_marks_are_rejected() {
        assert!(matches!(
            Question::try_from(entry("verbal", 0)),
            Err(ServiceError::InvalidMarks { marks: 0, .. })
        ));
        assert!(matches!(
            Question::try_from(entry("verbal", -4)),
            Err(ServiceError::InvalidMarks { marks: -4, .. })
        ));
    }
}
