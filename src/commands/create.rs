use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::Instrument;

use crate::api::{HttpPostsApi, NewPost, PostsApi};
use crate::config::ClientConfig;
use crate::telemetry::{self};
use crate::telemetry::ops::create::Phase as CreatePhase;

/// blog create: publish a post
#[derive(Args, Debug)]
pub struct CreateCmd {
    #[arg(long)]
    title: String,
    #[arg(long)]
    content: String,
}

pub async fn run(cfg: &ClientConfig, args: CreateCmd) -> Result<()> {
    let log = telemetry::create();
    let root = log.root_span_kv([("title", args.title.clone())]);
    async move {
        if args.title.trim().is_empty() {
            bail!("title must not be empty");
        }
        let api = HttpPostsApi::new(cfg).context("build posts api client")?;
        let post = api
            .create_post(&NewPost { title: args.title.trim().to_string(), content: args.content })
            .instrument(log.span(&CreatePhase::Submit))
            .await
            .context("create post")?;

        if telemetry::config::json_mode() {
            log.result(&post)?;
        } else {
            log.info(format!("➕ Post created id={} title={:?}", post.id, post.title));
        }
        Ok(())
    }
    .instrument(root)
    .await
}
