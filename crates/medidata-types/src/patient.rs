use crate::error::{Error, Result};
use crate::fields::FieldMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The four exam families the dashboard knows how to style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamCategory {
    Metabolic,
    Microbiota,
    Genetic,
    Laboratory,
}

impl ExamCategory {
    pub const ALL: [ExamCategory; 4] = [
        ExamCategory::Metabolic,
        ExamCategory::Microbiota,
        ExamCategory::Genetic,
        ExamCategory::Laboratory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExamCategory::Metabolic => "metabolic",
            ExamCategory::Microbiota => "microbiota",
            ExamCategory::Genetic => "genetic",
            ExamCategory::Laboratory => "laboratory",
        }
    }

    /// Title used for sync log entries, e.g. "Metabolic Exams".
    pub fn exam_title(&self) -> &'static str {
        match self {
            ExamCategory::Metabolic => "Metabolic Exams",
            ExamCategory::Microbiota => "Microbiota Exams",
            ExamCategory::Genetic => "Genetic Exams",
            ExamCategory::Laboratory => "Laboratory Exams",
        }
    }

    /// Classify a free-form label. Accepts the canonical tags, common English
    /// variants and the Portuguese card titles used in patient exports.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase();
        match normalized.as_str() {
            "metabolic" | "metabolomics" | "metabolômica" | "metabolomica" => {
                Some(ExamCategory::Metabolic)
            }
            "microbiota" | "microbiome" => Some(ExamCategory::Microbiota),
            "genetic" | "genetics" | "genética" | "genetica" => Some(ExamCategory::Genetic),
            "laboratory" | "lab" | "exames laboratoriais" | "laboratory exams" => {
                Some(ExamCategory::Laboratory)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ExamCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExamCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ExamCategory::from_label(s).ok_or_else(|| Error::UnknownTag {
            kind: "exam category",
            tag: s.to_string(),
        })
    }
}

/// Classification of a card's label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardCategory {
    Exam(ExamCategory),
    Custom(String),
}

impl CardCategory {
    pub fn from_label(label: &str) -> Self {
        match ExamCategory::from_label(label) {
            Some(category) => CardCategory::Exam(category),
            None => CardCategory::Custom(label.to_string()),
        }
    }

    pub fn exam(&self) -> Option<ExamCategory> {
        match self {
            CardCategory::Exam(category) => Some(*category),
            CardCategory::Custom(_) => None,
        }
    }

    /// Stable tag: the exam tag, or "custom".
    pub fn tag(&self) -> &str {
        match self {
            CardCategory::Exam(category) => category.as_str(),
            CardCategory::Custom(_) => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(Error::UnknownTag {
                kind: "risk level",
                tag: s.to_string(),
            }),
        }
    }
}

/// One tab of a patient record: a labelled block of (possibly nested) fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSection {
    #[serde(rename = "type")]
    pub label: String,
    #[serde(default)]
    pub content: FieldMap,
}

impl CardSection {
    pub fn new(label: impl Into<String>, content: FieldMap) -> Self {
        Self {
            label: label.into(),
            content,
        }
    }

    pub fn category(&self) -> CardCategory {
        CardCategory::from_label(&self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub birthdate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(default)]
    pub cards: Vec<CardSection>,
}

impl PatientRecord {
    /// Up to two upper-cased initials taken from the name parts.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    pub fn card(&self, label: &str) -> Option<&CardSection> {
        self.cards
            .iter()
            .find(|card| card.label.eq_ignore_ascii_case(label))
    }
}

/// Top-level export document: `{ "patients": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientRoster {
    #[serde(default)]
    pub patients: Vec<PatientRecord>,
}

impl PatientRoster {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PatientRecord> {
        self.patients.get(index)
    }
}
