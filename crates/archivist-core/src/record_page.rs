//! Single record view: one detail fetch, no fan-out.

use tracing::{debug, warn};

use crate::api::RecordApi;
use crate::dom::{Document, Region};
use crate::error::ViewerError;
use crate::paths;
use crate::render;
use crate::route::NavigationContext;
use crate::tags::TagAggregator;

pub struct RecordPageController<'a, A, D> {
    api: &'a A,
    doc: &'a mut D,
    ctx: NavigationContext,
    tags: TagAggregator,
}

impl<'a, A, D> RecordPageController<'a, A, D>
where
    A: RecordApi,
    D: Document,
{
    pub fn new(ctx: NavigationContext, api: &'a A, doc: &'a mut D) -> Self {
        Self {
            api,
            doc,
            ctx,
            tags: TagAggregator::new(),
        }
    }

    /// Fetch and show the record. Returns false when nothing was rendered.
    pub async fn run(self) -> bool {
        let Self {
            api,
            doc,
            ctx,
            mut tags,
        } = self;

        if ctx.record_id.is_none() {
            // The request below still goes out and fails like any other bad id
            warn!(error = %ViewerError::MissingRecordId, guild = %ctx.guild, "malformed record route");
        }
        let record_id = ctx.record_id.as_deref().unwrap_or_default();
        let path = paths::record_api_path(&ctx, record_id);

        match api.fetch_record(&path).await {
            Ok(record) => {
                if render::show_detail(doc, &ctx, &record, &mut tags) {
                    doc.replace_region(Region::Tags, tags.render(&ctx));
                }
                debug!(record = %record.id, "record page rendered");
                true
            }
            Err(e) => {
                warn!(path = %path, error = %e, "record fetch failed");
                false
            }
        }
    }
}
