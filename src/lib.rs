// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::application::{NoteDeleter, NoteForm, NoteLister, NoteRepository, SubmitOutcome};
use crate::cli::args::{Args, Command};
use crate::domain::{DomainError, DraftSchema, Field, ListQuery, Tag, TagPolicy};
use crate::infrastructure::config::Defaults;
use crate::infrastructure::{Config, NotehubRepository};
use crate::ports::prompt::PromptOutcome;
use crate::ports::{FormPrompt, Modal, TextPresenter};

/// Terminal streams: form input, interactive prompt output, command output
pub struct Console<I, P, O> {
    pub input: I,
    pub prompt: P,
    pub output: O,
}

pub async fn run(args: Args) -> Result<()> {
    debug!(command = ?args.command, verbose = args.verbose, "Starting notehub");

    let mut console = Console {
        input: std::io::stdin().lock(),
        prompt: std::io::stderr(),
        output: std::io::stdout().lock(),
    };

    if let Command::Init { force } = args.command {
        let path = init_config(args.config.as_deref(), force)?;
        writeln!(console.output, "Wrote default config to {}", path.display())?;
        return Ok(());
    }

    let config = load_config(&args, |key| std::env::var(key).ok())?;
    debug!(?config, "Resolved configuration");

    // Listing tags needs no remote service
    if let Command::Tags = args.command {
        return print_tags(console.output);
    }

    let repository = NotehubRepository::new(&config.api)?;
    execute(args.command, repository, &config.defaults, console).await
}

/// Config file, then environment, then command line flags
pub fn load_config(args: &Args, env: impl Fn(&str) -> Option<String>) -> Result<Config> {
    let mut config = Config::resolve(args.config.as_deref())
        .context("Failed to load configuration")?
        .with_env(env);

    if let Some(base_url) = &args.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(token) = &args.token {
        config.api.token = Some(token.clone());
    }
    Ok(config)
}

/// Write the built-in defaults to `explicit` or the default config location
pub fn init_config(explicit: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => Config::default_path().context("Could not determine config directory")?,
    };
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::create_default(&path)?;
    info!(path = %path.display(), "Created default config");
    Ok(path)
}

/// Run a single command against the given repository
pub async fn execute<R, I, P, O>(
    command: Command,
    repository: R,
    defaults: &Defaults,
    console: Console<I, P, O>,
) -> Result<()>
where
    R: NoteRepository,
    I: BufRead,
    P: Write,
    O: Write,
{
    let Console {
        input,
        prompt,
        mut output,
    } = console;
    let presenter = TextPresenter::new();

    match command {
        Command::List {
            search,
            page,
            per_page,
            tag,
            json,
        } => {
            let query = ListQuery::new()
                .page(page)
                .per_page(per_page.unwrap_or(defaults.per_page))
                .search(search.as_deref())
                .tag(tag);
            info!(?query, "Listing notes");

            let lister = NoteLister::new(repository);
            let notes = lister.list_notes(&query).await?;

            if json {
                serde_json::to_writer_pretty(&mut output, &notes)?;
                writeln!(output)?;
            } else {
                write!(output, "{}", presenter.render_page(&notes, query.page_number()))?;
            }
        }
        Command::Create {
            title,
            content,
            tag,
            loose_tags,
            json,
        } => {
            let policy = if loose_tags {
                TagPolicy::Loose
            } else {
                defaults.tag_policy
            };
            let mut form = NoteForm::new(repository, DraftSchema::new(policy));

            let mut preset = Vec::new();
            if let Some(title) = title {
                form.set_title(title);
                preset.push(Field::Title);
            }
            if let Some(content) = content {
                form.set_content(content);
                preset.push(Field::Content);
            }
            if let Some(tag) = tag {
                form.set_tag(tag);
                preset.push(Field::Tag);
            }

            // Title and content on the command line means no questions asked
            let note = if preset.contains(&Field::Title) && preset.contains(&Field::Content) {
                match form.submit().await {
                    SubmitOutcome::Created(note) => note,
                    SubmitOutcome::Invalid(errors) => {
                        return Err(DomainError::InvalidDraft(errors).into())
                    }
                    SubmitOutcome::Failed => bail!("Failed to create note"),
                }
            } else {
                let mut modal = Modal::new().with_title("Create note");
                let mut form_prompt = FormPrompt::new(input, prompt);
                match form_prompt.run(&mut form, &mut modal, &preset).await? {
                    PromptOutcome::Created(note) => note,
                    PromptOutcome::Cancelled => {
                        info!("Note creation cancelled");
                        return Ok(());
                    }
                }
            };

            if json {
                serde_json::to_writer_pretty(&mut output, &note)?;
                writeln!(output)?;
            } else {
                write!(output, "{}", presenter.render_note(&note))?;
            }
        }
        Command::Delete { note_id, json } => {
            info!(note_id = %note_id, "Deleting note");
            let deleter = NoteDeleter::new(repository);
            let note = deleter.delete_note(&note_id).await?;

            if json {
                serde_json::to_writer_pretty(&mut output, &note)?;
                writeln!(output)?;
            } else {
                writeln!(output, "Deleted note {}: {}", note.id, note.title)?;
            }
        }
        Command::Tags => print_tags(output)?,
        Command::Init { .. } => bail!("init does not talk to the service"),
    }

    Ok(())
}

fn print_tags(mut output: impl Write) -> Result<()> {
    for tag in Tag::ALL {
        writeln!(output, "{tag}")?;
    }
    Ok(())
}
