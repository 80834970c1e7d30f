use std::{collections::HashMap, fmt, str::FromStr};

use serde::Serialize;

/// Closed set of question categories. Each one carries its weight in the
/// skill score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Aptitude,
    Technical,
    Verbal,
}

impl Category {
    pub fn weight(self) -> f64 {
        match self {
            Category::Aptitude => 0.3,
            Category::Technical => 0.4,
            Category::Verbal => 0.3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Aptitude => "aptitude",
            Category::Technical => "technical",
            Category::Verbal => "verbal",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aptitude" => Ok(Category::Aptitude),
            "technical" => Ok(Category::Technical),
            "verbal" => Ok(Category::Verbal),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: i32,
    pub marks: i32,
    pub category: Category,
    pub correct_answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlacementStatus {
    #[serde(rename = "Placement Ready")]
    PlacementReady,
    #[serde(rename = "Almost Ready")]
    AlmostReady,
    #[serde(rename = "Needs Training")]
    NeedsTraining,
}

impl PlacementStatus {
    pub fn from_skill_score(skill_score: f64) -> Self {
        if skill_score >= 75.0 {
            PlacementStatus::PlacementReady
        } else if skill_score >= 50.0 {
            PlacementStatus::AlmostReady
        } else {
            PlacementStatus::NeedsTraining
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlacementStatus::PlacementReady => "Placement Ready",
            PlacementStatus::AlmostReady => "Almost Ready",
            PlacementStatus::NeedsTraining => "Needs Training",
        }
    }
}

impl fmt::Display for PlacementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub total: i64,
    pub scored: i64,
    pub skill_score: f64,
    pub status: PlacementStatus,
}

#[derive(Debug, Default, Clone, Copy)]
struct CategoryScores {
    aptitude: i64,
    technical: i64,
    verbal: i64,
}

impl CategoryScores {
    fn add(&mut self, category: Category, marks: i64) {
        match category {
            Category::Aptitude => self.aptitude += marks,
            Category::Technical => self.technical += marks,
            Category::Verbal => self.verbal += marks,
        }
    }

    fn skill_score(&self) -> f64 {
        self.aptitude as f64 * Category::Aptitude.weight()
            + self.technical as f64 * Category::Technical.weight()
            + self.verbal as f64 * Category::Verbal.weight()
    }
}

fn is_correct(submitted: &str, expected: &str) -> bool {
    // an empty submission counts as unanswered, even against an empty key
    !submitted.is_empty() && submitted.trim().to_lowercase() == expected.trim().to_lowercase()
}

/// Scores `answers` against `questions`. Answers for unknown question ids
/// are ignored; questions without an answer score nothing.
pub fn evaluate(questions: &[Question], answers: &HashMap<i32, String>) -> EvaluationResult {
    let mut total = 0i64;
    let mut scored = 0i64;
    let mut by_category = CategoryScores::default();

    for q in questions {
        let marks = i64::from(q.marks);
        total += marks;
        if let Some(submitted) = answers.get(&q.id) {
            if is_correct(submitted, &q.correct_answer) {
                scored += marks;
                by_category.add(q.category, marks);
            }
        }
    }

    let skill_score = by_category.skill_score();
    EvaluationResult {
        total,
        scored,
        skill_score,
        status: PlacementStatus::from_skill_score(skill_score),
    }
}
