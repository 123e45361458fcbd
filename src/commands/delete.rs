use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::Instrument;

use crate::api::{HttpPostsApi, PostsApi};
use crate::config::ClientConfig;
use crate::feed::{Confirm, DELETE_PROMPT};
use crate::telemetry::{self};
use crate::telemetry::ops::delete::Phase as DeletePhase;
use crate::terminal::Prompt;

/// blog delete: remove a post
#[derive(Args, Debug)]
pub struct DeleteCmd {
    id: i64,
    /// Skip the confirmation question
    #[arg(long, short = 'y', default_value_t = false)]
    yes: bool,
}

#[derive(Serialize)]
struct DeleteResult {
    id: i64,
    deleted: bool,
}

pub async fn run(cfg: &ClientConfig, args: DeleteCmd) -> Result<()> {
    let log = telemetry::delete();
    let root = log.root_span_kv([("id", args.id.to_string()), ("yes", args.yes.to_string())]);
    async move {
        let api = HttpPostsApi::new(cfg).context("build posts api client")?;

        let confirmed = args.yes || {
            let prompt = Prompt::stdin();
            ask(&prompt, args.id).instrument(log.span(&DeletePhase::Confirm)).await
        };
        if !confirmed {
            log.warn("Aborted; nothing deleted.");
        } else {
            api.delete_post(args.id)
                .instrument(log.span(&DeletePhase::Delete))
                .await
                .with_context(|| format!("delete post id={}", args.id))?;
            log.info(format!("🗑️ Post deleted id={}", args.id));
        }

        if telemetry::config::json_mode() {
            log.result(&DeleteResult { id: args.id, deleted: confirmed })?;
        }
        Ok(())
    }
    .instrument(root)
    .await
}

/// Same question the interactive feed asks, with the id in front.
async fn ask(confirm: &impl Confirm, id: i64) -> bool {
    confirm.confirm(&format!("#{id}: {DELETE_PROMPT}")).await
}
