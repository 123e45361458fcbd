use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::Instrument;

use crate::api::{HttpPostsApi, PostsApi};
use crate::config::ClientConfig;
use crate::feed::PostCard;
use crate::telemetry::{self};
use crate::telemetry::ops::list::Phase as ListPhase;
use crate::terminal::print_card;

/// blog ls: print one page of the feed
#[derive(Args, Debug)]
pub struct LsCmd {
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,
    #[arg(long, default_value = "")]
    search: String,
}

#[derive(Serialize)]
struct LsResult {
    page: u32,
    search: String,
    has_more: bool,
    posts: Vec<PostCard>,
}

pub async fn run(cfg: &ClientConfig, args: LsCmd) -> Result<()> {
    let log = telemetry::list();
    let root = log.root_span_kv([("page", args.page.to_string()), ("search", args.search.clone())]);
    async move {
        let api = HttpPostsApi::new(cfg).context("build posts api client")?;
        let search = args.search.trim().to_string();
        let listing = api
            .list_posts(args.page, &search)
            .instrument(log.span(&ListPhase::Fetch))
            .await
            .with_context(|| format!("list posts page={}", args.page))?;

        let _s = log.span(&ListPhase::Output).entered();
        let cards: Vec<PostCard> = listing.posts.iter().map(PostCard::from).collect();
        if telemetry::config::json_mode() {
            let result = LsResult { page: args.page, search, has_more: listing.has_more, posts: cards };
            log.result(&result)?;
        } else {
            if cards.is_empty() {
                log.info("ℹ️  No posts");
            }
            for card in &cards {
                print_card(card);
            }
            if let Some(next) = next_page(args.page, listing.has_more) {
                log.info(format!("   More posts: --page {next}"));
            }
        }
        Ok(())
    }
    .instrument(root)
    .await
}

/// Page to suggest next, if the server has one and it is addressable.
fn next_page(page: u32, has_more: bool) -> Option<u32> {
    if has_more { page.checked_add(1) } else { None }
}
