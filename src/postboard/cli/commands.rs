use super::print::{
    configure_colors, print_full_posts, print_messages, print_posts, print_staged_delete,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use postboard::api::{ConfigAction, PostPatch, PostboardApi, PostboardPaths};
use postboard::config::{PostboardConfig, KEYS};
use postboard::editor::{edit_content, EditorContent};
use postboard::error::{PostError, Result};
use postboard::logging;
use postboard::model::PostInput;
use postboard::store::fs_backend::FsBackend;
use postboard::store::PostStore;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

const HOME_ENV: &str = "POSTBOARD_HOME";

struct AppContext {
    api: PostboardApi<FsBackend>,
    list_width: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    configure_colors();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Create {
            title,
            content,
            author,
            no_editor,
        }) => handle_create(&mut ctx, title, content, author, no_editor),
        Some(Commands::List { search }) => handle_list(&ctx, search.as_deref()),
        Some(Commands::Search { term }) => handle_list(&ctx, Some(&term.join(" "))),
        Some(Commands::View { selectors }) => handle_view(&ctx, &selectors),
        Some(Commands::Edit {
            selector,
            title,
            content,
            author,
        }) => handle_edit(
            &mut ctx,
            &selector,
            PostPatch {
                title,
                content,
                author,
            },
        ),
        Some(Commands::Delete { selectors, yes }) => handle_delete(&mut ctx, &selectors, yes),
        Some(Commands::Path) => handle_paths(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "postboard", "postboard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            PostError::Store(format!(
                "Could not determine a data directory; set ${}",
                HOME_ENV
            ))
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config_result = PostboardConfig::load(&data_dir);
    let config = config_result.as_ref().cloned().unwrap_or_default();

    let directive = if cli.verbose {
        "postboard=debug".to_string()
    } else {
        config.log_level.clone()
    };
    logging::init(&directive)?;

    if let Err(e) = &config_result {
        warn!(error = %e, "ignoring unreadable config, using defaults");
    }
    debug!(data_dir = %data_dir.display(), key = %config.storage_key, "starting");

    let store = PostStore::load(FsBackend::new(data_dir.clone()), config.storage_key.clone());
    let api = PostboardApi::new(store, PostboardPaths::new(data_dir));

    Ok(AppContext {
        api,
        list_width: config.list_width,
    })
}

fn handle_create(
    ctx: &mut AppContext,
    title: Option<String>,
    content: Option<String>,
    author: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let content = match content {
        Some(content) => Some(content),
        None => read_piped_stdin()?,
    };

    let mut input = PostInput::new(
        title.unwrap_or_default(),
        content.unwrap_or_default(),
        author.unwrap_or_default(),
    );

    if !no_editor && !input.missing_fields().is_empty() {
        input = edit_content(&EditorContent::new(input))?.input;
    }

    let result = ctx.api.create_post(input)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<&str>) -> Result<()> {
    let result = ctx.api.list_posts(search)?;
    print_posts(&result.listed_posts, ctx.list_width);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, selectors: &[String]) -> Result<()> {
    let result = ctx.api.view_posts(selectors)?;
    print_full_posts(&result.listed_posts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, selector: &str, patch: PostPatch) -> Result<()> {
    let patch = if patch.is_empty() {
        let current = ctx.api.view_posts(&[selector])?;
        let Some(dp) = current.listed_posts.first() else {
            return Ok(());
        };
        let edited = edit_content(&EditorContent::new(dp.post.to_input()))?;
        if edited.input == dp.post.to_input() {
            println!("No changes.");
            return Ok(());
        }
        PostPatch::from(edited.input)
    } else {
        patch
    };

    let result = ctx.api.update_post(selector, &patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: &[String], yes: bool) -> Result<()> {
    let ids = ctx.api.resolve_ids(selectors)?;

    for id in ids {
        let staged = ctx.api.request_delete(id)?;
        print_messages(&staged.messages);

        let confirmed = match staged.affected_posts.first() {
            Some(post) if !yes => {
                print_staged_delete(post);
                confirm_prompt()?
            }
            _ => true,
        };

        let result = if confirmed {
            ctx.api.confirm_delete()?
        } else {
            ctx.api.cancel_delete()
        };
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_paths(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.store_paths()?;
    for path in &result.paths {
        println!("{}", path.display());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let shown_key = key.clone();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        let keys: Vec<&str> = match shown_key.as_deref() {
            Some(k) => vec![k],
            None => KEYS.to_vec(),
        };
        for k in keys {
            if let Some(v) = config.get(k) {
                println!("{} = {}", k, v);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Reads stdin when it is piped. Empty input counts as no input.
fn read_piped_stdin() -> Result<Option<String>> {
    if io::stdin().is_terminal() {
        return Ok(None);
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(PostError::Io)?;
    if buffer.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(buffer.trim_end().to_string()))
    }
}

fn confirm_prompt() -> Result<bool> {
    print!("Are you sure? This cannot be undone. [y/N]: ");
    io::stdout().flush().map_err(PostError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(PostError::Io)?;
    Ok(matches!(input.trim(), "y" | "Y" | "yes" | "YES" | "Yes"))
}
