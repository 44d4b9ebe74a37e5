use crate::render::{Rows, render_fields};
use crate::taxonomy::{Descriptor, card_descriptor};
use medidata_types::{CardCategory, CardSection};

/// A card ready for display: its label, classification, style and rows.
#[derive(Debug, Clone)]
pub struct CardRendering<'a> {
    pub label: &'a str,
    pub category: CardCategory,
    pub descriptor: Descriptor,
    pub rows: Rows<'a>,
}

pub fn render_card(card: &CardSection) -> CardRendering<'_> {
    let category = card.category();
    CardRendering {
        label: &card.label,
        descriptor: card_descriptor(&category),
        category,
        rows: render_fields(&card.content),
    }
}
