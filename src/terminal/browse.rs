use std::future::Future;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Args;
use tokio::task::{JoinSet, LocalSet};

use crate::api::{HttpPostsApi, PostsApi};
use crate::config::ClientConfig;
use crate::feed::{Confirm, FeedController, FeedRenderer, FeedState, Notice};

use super::{LineSource, Prompt, TerminalRenderer};

/// blog browse: interactive infinite-scroll feed
#[derive(Args, Debug)]
pub struct BrowseCmd {
    /// Start with this search filter
    #[arg(long)]
    search: Option<String>,
}

const HELP: &str = "\
commands:
  <enter> | more      load the next page
  search [query]      filter the feed (no query clears the filter)
  new                 write a new post
  delete <id>         delete a post
  status              show feed state and messages
  help                this text
  quit | exit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    More,
    Search(String),
    New,
    Delete(i64),
    Status,
    Help,
    Quit,
}

impl BrowseCommand {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };
        match word {
            "" | "more" => Ok(BrowseCommand::More),
            "search" | "/" => Ok(BrowseCommand::Search(rest.to_string())),
            "new" => Ok(BrowseCommand::New),
            "delete" | "rm" => rest
                .parse::<i64>()
                .map(BrowseCommand::Delete)
                .map_err(|_| format!("delete needs a numeric post id, got {rest:?}")),
            "status" => Ok(BrowseCommand::Status),
            "help" | "?" => Ok(BrowseCommand::Help),
            "quit" | "exit" | "q" => Ok(BrowseCommand::Quit),
            other => Err(format!("unknown command {other:?}; try `help`")),
        }
    }
}

pub async fn run(cfg: &ClientConfig, args: BrowseCmd) -> Result<()> {
    let api = HttpPostsApi::new(cfg).context("build posts api client")?;
    let prompt = Rc::new(Prompt::stdin());
    let controller = Rc::new(FeedController::new(
        api,
        TerminalRenderer::default(),
        prompt.clone(),
        cfg.notice_ttl,
    ));
    LocalSet::new()
        .run_until(command_loop(controller, prompt.as_ref(), args.search.unwrap_or_default()))
        .await
}

/// Loads run as local tasks so a trigger typed while a page is in flight
/// hits the controller's in-flight guard instead of queueing behind it.
/// Tasks still running on quit or end of input are awaited before returning.
async fn command_loop<A, R, C, L>(
    controller: Rc<FeedController<A, R, C>>,
    lines: &L,
    search: String,
) -> Result<()>
where
    A: PostsApi + 'static,
    R: FeedRenderer + 'static,
    C: Confirm + 'static,
    L: LineSource + ?Sized,
{
    let mut tasks = JoinSet::new();
    spawn(&mut tasks, &controller, move |c| async move { c.load_posts(false, search.trim()).await });

    while let Some(line) = lines.read_line("feed> ").await? {
        while tasks.try_join_next().is_some() {}
        let command = match BrowseCommand::parse(&line) {
            Ok(command) => command,
            Err(msg) => {
                eprintln!("{msg}");
                continue;
            }
        };
        match command {
            BrowseCommand::More => {
                spawn(&mut tasks, &controller, |c| async move { c.trigger_on_scroll_proximity().await })
            }
            BrowseCommand::Search(query) => {
                spawn(&mut tasks, &controller, move |c| async move { c.submit_search(&query).await })
            }
            BrowseCommand::New => {
                controller.open_form();
                let title = lines.read_line("title: ").await?.unwrap_or_default();
                if title.trim().is_empty() {
                    controller.close_form();
                    continue;
                }
                let content = lines.read_line("content: ").await?.unwrap_or_default();
                spawn(&mut tasks, &controller, move |c| async move {
                    if let Some(post) = c.submit_create(title.trim(), &content).await {
                        println!("✅ Created post #{}", post.id);
                    }
                });
            }
            // the confirmation reads stdin, so this one runs inline
            BrowseCommand::Delete(id) => {
                if controller.request_delete(id).await {
                    println!("🗑️  Deleted post #{id}");
                }
            }
            BrowseCommand::Status => print_status(&controller.state(), controller.is_form_open(), &controller.notices()),
            BrowseCommand::Help => println!("{HELP}"),
            BrowseCommand::Quit => break,
        }
    }

    while let Some(joined) = tasks.join_next().await {
        if let Err(err) = joined {
            tracing::error!(error = %err, "feed task failed");
        }
    }
    Ok(())
}

fn spawn<T, F, Fut>(tasks: &mut JoinSet<()>, controller: &Rc<T>, f: F)
where
    T: 'static,
    F: FnOnce(Rc<T>) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    tasks.spawn_local(f(controller.clone()));
}

fn print_status(state: &FeedState, form_open: bool, notices: &[Notice]) {
    println!(
        "page={} loading={} has_more={} search={:?} form_open={}",
        state.current_page, state.is_loading, state.has_more_posts, state.search_query, form_open
    );
    for notice in notices {
        println!("⚠️  {}", notice.message);
    }
}
