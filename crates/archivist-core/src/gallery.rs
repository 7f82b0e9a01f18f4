//! Gallery view: list fetch, then one detail fetch per record.
//!
//! Placeholders are created in list order, each immediately before its fetch is
//! queued. Detail fetches then race; completions are applied one at a time on
//! the controller's own task, each writing only into its own placeholder, so
//! the final document does not depend on completion order. A failed fetch
//! leaves its placeholder empty and does not disturb its siblings.

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, info, warn};

use crate::api::RecordApi;
use crate::dom::{Document, Region};
use crate::paths;
use crate::render;
use crate::route::NavigationContext;
use crate::tags::TagAggregator;

/// What happened to the fetches of one gallery load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanoutReport {
    /// The id list could be fetched
    pub listed: bool,
    pub requested: usize,
    pub filled: usize,
    pub failed: usize,
    /// Number of tag sidebar rebuilds
    pub tag_renders: usize,
}

pub struct GalleryController<'a, A, D> {
    api: &'a A,
    doc: &'a mut D,
    ctx: NavigationContext,
    tags: TagAggregator,
}

impl<'a, A, D> GalleryController<'a, A, D>
where
    A: RecordApi,
    D: Document,
{
    /// Fresh controller for one gallery page view, with an empty tag set.
    pub fn new(ctx: NavigationContext, api: &'a A, doc: &'a mut D) -> Self {
        Self {
            api,
            doc,
            ctx,
            tags: TagAggregator::new(),
        }
    }

    /// Run the view to completion; resolves once every issued fetch has settled.
    pub async fn run(self) -> FanoutReport {
        let Self {
            api,
            doc,
            ctx,
            mut tags,
        } = self;
        let mut report = FanoutReport::default();

        let list_path = paths::query_path(&ctx);
        let ids = match api.fetch_ids(&list_path).await {
            Ok(ids) => ids,
            Err(e) => {
                warn!(path = %list_path, error = %e, "gallery list fetch failed");
                return report;
            }
        };
        report.listed = true;
        report.requested = ids.len();
        debug!(guild = %ctx.guild, count = ids.len(), "fanning out record fetches");

        let mut pending = FuturesUnordered::new();
        for id in ids {
            let container = doc.create_placeholder(&id);
            let path = paths::record_api_path(&ctx, &id);
            pending.push(async move {
                let result = api.fetch_record(&path).await;
                (id, container, result)
            });
        }

        while let Some((id, container, result)) = pending.next().await {
            match result {
                Ok(record) => {
                    if record.id != id {
                        debug!(requested = %id, returned = %record.id, "record id differs from list id");
                    }
                    let changed = render::fill_thumbnail(doc, &container, &ctx, &record, &mut tags);
                    debug!(record = %id, new_tags = changed, "placeholder filled");
                    if changed {
                        doc.replace_region(Region::Tags, tags.render(&ctx));
                        report.tag_renders += 1;
                    }
                    report.filled += 1;
                }
                Err(e) => {
                    warn!(record = %id, error = %e, "record fetch failed");
                    report.failed += 1;
                }
            }
        }

        info!(
            guild = %ctx.guild,
            filled = report.filled,
            failed = report.failed,
            tags = tags.len(),
            "gallery settled"
        );
        report
    }
}
