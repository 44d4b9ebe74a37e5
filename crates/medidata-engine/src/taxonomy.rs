//! Constant styling for exam categories, sync statuses and risk levels.
//!
//! Every lookup is total. Typed lookups cover their whole enumeration, and
//! string lookups fall back to [`NEUTRAL`] for anything unrecognized.

use medidata_types::{CardCategory, ExamCategory, RiskLevel, SyncStatus};
use serde::Serialize;

/// Palette family of a descriptor, for front ends that cannot use the class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hue {
    Metabolic,
    Microbiota,
    Genetic,
    Laboratory,
    Green,
    Yellow,
    Red,
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Descriptor {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub hue: Hue,
}

pub const NEUTRAL: Descriptor = Descriptor {
    background: "bg-gray-100",
    text: "text-gray-600",
    border: "border-gray-200",
    hue: Hue::Gray,
};

const METABOLIC: Descriptor = Descriptor {
    background: "bg-exam-metabolic/10",
    text: "text-exam-metabolic",
    border: "border-l-exam-metabolic",
    hue: Hue::Metabolic,
};

const MICROBIOTA: Descriptor = Descriptor {
    background: "bg-exam-microbiota/10",
    text: "text-exam-microbiota",
    border: "border-l-exam-microbiota",
    hue: Hue::Microbiota,
};

const GENETIC: Descriptor = Descriptor {
    background: "bg-exam-genetic/10",
    text: "text-exam-genetic",
    border: "border-l-exam-genetic",
    hue: Hue::Genetic,
};

const LABORATORY: Descriptor = Descriptor {
    background: "bg-exam-laboratory/10",
    text: "text-exam-laboratory",
    border: "border-l-exam-laboratory",
    hue: Hue::Laboratory,
};

const COMPLETED: Descriptor = Descriptor {
    background: "bg-green-100",
    text: "text-green-600",
    border: "border-green-200",
    hue: Hue::Green,
};

const PENDING: Descriptor = Descriptor {
    background: "bg-yellow-100",
    text: "text-yellow-600",
    border: "border-yellow-200",
    hue: Hue::Yellow,
};

const FAILED: Descriptor = Descriptor {
    background: "bg-red-100",
    text: "text-red-600",
    border: "border-red-200",
    hue: Hue::Red,
};

const RISK_LOW: Descriptor = Descriptor {
    background: "bg-green-50",
    text: "text-green-500",
    border: "border-l-green-500",
    hue: Hue::Green,
};

const RISK_MEDIUM: Descriptor = Descriptor {
    background: "bg-yellow-50",
    text: "text-yellow-500",
    border: "border-l-yellow-500",
    hue: Hue::Yellow,
};

const RISK_HIGH: Descriptor = Descriptor {
    background: "bg-red-50",
    text: "text-red-500",
    border: "border-l-red-500",
    hue: Hue::Red,
};

pub fn exam_descriptor(category: ExamCategory) -> Descriptor {
    match category {
        ExamCategory::Metabolic => METABOLIC,
        ExamCategory::Microbiota => MICROBIOTA,
        ExamCategory::Genetic => GENETIC,
        ExamCategory::Laboratory => LABORATORY,
    }
}

pub fn status_descriptor(status: SyncStatus) -> Descriptor {
    match status {
        SyncStatus::Completed => COMPLETED,
        SyncStatus::Pending => PENDING,
        SyncStatus::Failed => FAILED,
    }
}

pub fn risk_descriptor(level: RiskLevel) -> Descriptor {
    match level {
        RiskLevel::Low => RISK_LOW,
        RiskLevel::Medium => RISK_MEDIUM,
        RiskLevel::High => RISK_HIGH,
    }
}

/// Custom card labels are not exam families and get the neutral style.
pub fn card_descriptor(category: &CardCategory) -> Descriptor {
    match category {
        CardCategory::Exam(exam) => exam_descriptor(*exam),
        CardCategory::Custom(_) => NEUTRAL,
    }
}

pub fn category_descriptor(tag: &str) -> Descriptor {
    ExamCategory::from_label(tag).map_or(NEUTRAL, exam_descriptor)
}

pub fn status_descriptor_for(tag: &str) -> Descriptor {
    tag.parse::<SyncStatus>().map_or(NEUTRAL, status_descriptor)
}

pub fn risk_descriptor_for(tag: &str) -> Descriptor {
    tag.parse::<RiskLevel>().map_or(NEUTRAL, risk_descriptor)
}
