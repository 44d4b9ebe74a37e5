use crate::args::TaxonomyKind;
use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, TaxonomyEntry, TaxonomyListViewModel,
    TaxonomyLookupViewModel,
};
use medidata_engine::NEUTRAL;
use medidata_engine::taxonomy::{
    category_descriptor, exam_descriptor, risk_descriptor, risk_descriptor_for, status_descriptor,
    status_descriptor_for,
};
use medidata_types::{ExamCategory, RiskLevel, SyncStatus};

pub fn present_taxonomy_list() -> CommandResultViewModel<TaxonomyListViewModel> {
    let categories = ExamCategory::ALL
        .into_iter()
        .map(|category| TaxonomyEntry {
            tag: category.as_str().to_string(),
            title: Some(category.exam_title().to_string()),
            style: exam_descriptor(category),
        })
        .collect();

    let statuses = SyncStatus::ALL
        .into_iter()
        .map(|status| TaxonomyEntry {
            tag: status.as_str().to_string(),
            title: None,
            style: status_descriptor(status),
        })
        .collect();

    let risks = RiskLevel::ALL
        .into_iter()
        .map(|level| TaxonomyEntry {
            tag: level.as_str().to_string(),
            title: None,
            style: risk_descriptor(level),
        })
        .collect();

    CommandResultViewModel::new(TaxonomyListViewModel {
        categories,
        statuses,
        risks,
        neutral: NEUTRAL,
    })
}

pub fn present_taxonomy_lookup(
    kind: TaxonomyKind,
    tag: &str,
) -> CommandResultViewModel<TaxonomyLookupViewModel> {
    let (matched, style) = match kind {
        TaxonomyKind::Category => (
            ExamCategory::from_label(tag).map(|c| c.as_str()),
            category_descriptor(tag),
        ),
        TaxonomyKind::Status => (
            tag.parse::<SyncStatus>().ok().map(|s| s.as_str()),
            status_descriptor_for(tag),
        ),
        TaxonomyKind::Risk => (
            tag.parse::<RiskLevel>().ok().map(|r| r.as_str()),
            risk_descriptor_for(tag),
        ),
    };

    let content = TaxonomyLookupViewModel {
        kind: kind.to_string(),
        tag: tag.to_string(),
        matched: matched.map(str::to_string),
        style,
    };

    match matched {
        Some(canonical) => CommandResultViewModel::new(content)
            .with_badge(StatusBadge::success(format!("{} '{}'", kind, canonical))),
        None => CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning(format!(
                "Unknown {} tag, using neutral style",
                kind
            )))
            .with_suggestion(Guidance::new("See every known tag").with_command(cmd::TAXONOMY_LIST)),
    }
}
