use super::HandlerContext;
use crate::args::TaxonomyKind;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle_list(ctx: &HandlerContext) -> Result<()> {
    ctx.render(presenters::present_taxonomy_list())
}

pub fn handle_lookup(kind: TaxonomyKind, tag: &str, ctx: &HandlerContext) -> Result<()> {
    ctx.render(presenters::present_taxonomy_lookup(kind, tag))
}
