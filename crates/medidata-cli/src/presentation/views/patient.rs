use std::fmt;

use super::style;
use crate::presentation::view_models::{
    CardViewModel, PatientDetailViewModel, PatientListViewModel, ViewMode,
};

const INDENT: &str = "  ";

// --------------------------------------------------------
// Patient List View
// --------------------------------------------------------

pub struct PatientListView<'a> {
    data: &'a PatientListViewModel,
    mode: ViewMode,
}

impl<'a> PatientListView<'a> {
    pub fn new(data: &'a PatientListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for patient in &self.data.patients {
            writeln!(f, "{}", patient.name)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.patients.is_empty() {
            writeln!(f, "No patients")?;
            return Ok(());
        }

        for patient in &self.data.patients {
            writeln!(
                f,
                "{} {} ({}, {} cards)",
                patient.index, patient.name, patient.age, patient.card_count
            )?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Source: {}", self.data.source)?;
        if self.data.patients.is_empty() {
            writeln!(f, "No patients in roster.")?;
            return Ok(());
        }

        writeln!(f)?;
        writeln!(
            f,
            "{:<5} {:<4} {:<36} {:>4} {:<10} {:<12} {:<8} CARDS",
            "INDEX", "", "NAME", "AGE", "GENDER", "BIRTHDATE", "RISK"
        )?;
        writeln!(f, "{}", "-".repeat(96))?;

        for patient in &self.data.patients {
            let risk = patient.risk_level.as_deref().unwrap_or("-");
            let risk_cell = format!("{:<8}", risk);
            let risk_cell = match &patient.risk_style {
                Some(style) => style::paint(&risk_cell, style.hue),
                None => risk_cell,
            };
            writeln!(
                f,
                "{:<5} {:<4} {:<36} {:>4} {:<10} {:<12} {} {} ({} exam)",
                patient.index,
                patient.initials,
                patient.name,
                patient.age,
                patient.gender,
                patient.birthdate,
                risk_cell,
                patient.card_count,
                patient.exam_card_count
            )?;
        }

        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_standard(f)?;
        for patient in &self.data.patients {
            if let Some(id) = &patient.id {
                writeln!(f, "{}{}: id {}", INDENT, patient.index, id)?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for PatientListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

// --------------------------------------------------------
// Patient Detail View
// --------------------------------------------------------

pub struct PatientDetailView<'a> {
    data: &'a PatientDetailViewModel,
    mode: ViewMode,
}

impl<'a> PatientDetailView<'a> {
    pub fn new(data: &'a PatientDetailViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for card in &self.data.cards {
            writeln!(f, "{}", card.label)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} ({})", self.data.name, self.data.initials)?;
        for card in &self.data.cards {
            writeln!(
                f,
                "{}{} [{}] {} fields, {} values, depth {}",
                INDENT,
                style::paint(&card.label, card.style.hue),
                card.category,
                card.field_count,
                card.leaf_count,
                card.depth
            )?;
        }
        Ok(())
    }

    fn render_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} ({})", style::bold(&self.data.name), self.data.initials)?;
        writeln!(
            f,
            "{}Age {}, {}, born {}",
            INDENT, self.data.age, self.data.gender, self.data.birthdate
        )?;
        if let Some(risk) = &self.data.risk_level {
            let painted = match &self.data.risk_style {
                Some(style) => style::paint(risk, style.hue),
                None => risk.clone(),
            };
            writeln!(f, "{}Risk: {}", INDENT, painted)?;
        }
        Ok(())
    }

    fn render_card(&self, f: &mut fmt::Formatter, card: &CardViewModel) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            style::paint(&format!("[{}]", card.label), card.style.hue),
            style::dim(&card.category)
        )?;

        if self.mode == ViewMode::Verbose {
            writeln!(
                f,
                "{}{}",
                INDENT,
                style::dim(&format!(
                    "style: {} {} {}",
                    card.style.background, card.style.text, card.style.border
                ))
            )?;
        }

        if card.rows.is_empty() {
            writeln!(f, "{}{}", INDENT, style::dim("(no fields)"))?;
        }

        for row in &card.rows {
            let indent = INDENT.repeat(row.depth + 1);
            match &row.value {
                Some(value) => writeln!(f, "{}{}: {}", indent, row.key, value)?,
                None => writeln!(f, "{}{}", indent, style::bold(&row.key))?,
            }
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_header(f)?;
        for card in &self.data.cards {
            writeln!(f)?;
            self.render_card(f, card)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for PatientDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard | ViewMode::Verbose => self.render_standard(f),
        }
    }
}
