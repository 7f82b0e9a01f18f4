//! Page-load entry point.
//!
//! Navigation is a full reload: each load resolves the location afresh and
//! builds a new controller (and with it a new tag set). Nothing carries over
//! between loads.

use tracing::{info, warn};

use crate::api::RecordApi;
use crate::dom::Document;
use crate::gallery::GalleryController;
use crate::record_page::RecordPageController;
use crate::route::{resolve, NavigationContext, PageKind};

/// Resolve `location` and run the view it names to completion.
pub async fn load_page<A, D>(location: &str, api: &A, doc: &mut D) -> NavigationContext
where
    A: RecordApi,
    D: Document,
{
    let ctx = resolve(location);
    info!(kind = ?ctx.kind, guild = %ctx.guild, "loading page");

    match ctx.kind {
        PageKind::Gallery => {
            GalleryController::new(ctx.clone(), api, doc).run().await;
        }
        PageKind::Record => {
            RecordPageController::new(ctx.clone(), api, doc).run().await;
        }
        PageKind::Unknown => {
            warn!(%location, "no view for this location");
        }
    }
    ctx
}
