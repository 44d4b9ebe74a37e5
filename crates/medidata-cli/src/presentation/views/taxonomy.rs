use std::fmt;

use super::style;
use crate::presentation::view_models::{
    TaxonomyEntry, TaxonomyListViewModel, TaxonomyLookupViewModel, ViewMode,
};
use medidata_engine::Descriptor;

fn write_classes(f: &mut fmt::Formatter, style: &Descriptor) -> fmt::Result {
    writeln!(f, "  background: {}", style.background)?;
    writeln!(f, "  text:       {}", style.text)?;
    writeln!(f, "  border:     {}", style.border)
}

// --------------------------------------------------------
// Taxonomy List View
// --------------------------------------------------------

pub struct TaxonomyListView<'a> {
    data: &'a TaxonomyListViewModel,
    mode: ViewMode,
}

impl<'a> TaxonomyListView<'a> {
    pub fn new(data: &'a TaxonomyListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn sections(&self) -> [(&'static str, &'a [TaxonomyEntry]); 3] {
        [
            ("Exam categories", self.data.categories.as_slice()),
            ("Sync statuses", self.data.statuses.as_slice()),
            ("Risk levels", self.data.risks.as_slice()),
        ]
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (_, entries) in self.sections() {
            for entry in entries {
                writeln!(f, "{}", entry.tag)?;
            }
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (heading, entries) in self.sections() {
            let tags: Vec<String> = entries
                .iter()
                .map(|entry| style::paint(&entry.tag, entry.style.hue))
                .collect();
            writeln!(f, "{}: {}", heading, tags.join(", "))?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (position, (heading, entries)) in self.sections().into_iter().enumerate() {
            if position > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", style::bold(heading))?;
            for entry in entries {
                let tag = style::paint(&format!("{:<12}", entry.tag), entry.style.hue);
                writeln!(
                    f,
                    "  {} {:<24} {:<26} {}",
                    tag, entry.style.background, entry.style.text, entry.style.border
                )?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "{} {} {} {}",
            style::dim("Unknown tags:"),
            self.data.neutral.background,
            self.data.neutral.text,
            self.data.neutral.border
        )
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_standard(f)?;
        writeln!(f)?;
        for entry in &self.data.categories {
            if let Some(title) = &entry.title {
                writeln!(f, "{} -> {}", entry.tag, title)?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for TaxonomyListView<'a> {
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
// Taxonomy Lookup View
// --------------------------------------------------------

pub struct TaxonomyLookupView<'a> {
    data: &'a TaxonomyLookupViewModel,
    mode: ViewMode,
}

impl<'a> TaxonomyLookupView<'a> {
    pub fn new(data: &'a TaxonomyLookupViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for TaxonomyLookupView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let resolved = self.data.matched.as_deref().unwrap_or("neutral");
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", resolved),
            ViewMode::Compact => writeln!(
                f,
                "{} {} -> {}",
                self.data.kind,
                self.data.tag,
                style::paint(resolved, self.data.style.hue)
            ),
            ViewMode::Standard | ViewMode::Verbose => {
                writeln!(
                    f,
                    "{} '{}' -> {}",
                    self.data.kind,
                    self.data.tag,
                    style::paint(resolved, self.data.style.hue)
                )?;
                write_classes(f, &self.data.style)
            }
        }
    }
}
