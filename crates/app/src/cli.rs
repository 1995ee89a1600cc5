//! Command-line surface of the shell

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context as _};
use bizhub_core::{ConnectOutcome, EntityModule, RemoveOutcome};
use bizhub_domain::{Config, EditableResource, IntegrationType, Theme};
use clap::{Parser, Subcommand};

use crate::commands::{self, Assignment, ProfileChanges};
use crate::context::AppContext;
use crate::render;
use crate::shell::{FormViews, Shell, TerminalInteraction, View};

#[derive(Debug, Parser)]
#[command(name = "bizhub")]
#[command(about = "BizHub business-management client", version)]
pub struct Cli {
    /// Simulated page location; a `?session_id=` from a checkout return is
    /// checked on start
    #[arg(long, global = true, value_name = "URL")]
    pub page_url: Option<String>,

    /// Config file (JSON or TOML); searched for when omitted
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Answer "yes" to every confirmation
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Backend reachability and session state
    Status,
    /// Sign in with an authorization code
    Login {
        #[arg(long)]
        code: String,
    },
    /// Forget the stored session token
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Light/dark theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Counts, balances, recent payments and upcoming meetings
    Dashboard,
    Clients {
        #[command(subcommand)]
        action: RecordAction,
    },
    Projects {
        #[command(subcommand)]
        action: RecordAction,
    },
    /// Team members
    Team {
        #[command(subcommand)]
        action: RecordAction,
    },
    Payments {
        #[command(subcommand)]
        action: PaymentAction,
    },
    /// Stripe, Gmail and Google Calendar connections
    Integrations {
        #[command(subcommand)]
        action: IntegrationAction,
    },
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum ThemeAction {
    /// Switch between light and dark
    Toggle,
    Show,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum RecordAction {
    List,
    Show {
        id: String,
    },
    /// Submit the add form
    Add {
        /// Form field as `name=value`; repeatable
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        fields: Vec<Assignment>,
    },
    /// Submit the edit form, pre-filled from the record
    Edit {
        id: String,
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        fields: Vec<Assignment>,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum PaymentAction {
    List,
    Show {
        id: String,
    },
    /// Start a checkout session for the request-payment form
    Request {
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        fields: Vec<Assignment>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum IntegrationAction {
    List,
    Connect { integration: IntegrationType },
    Disconnect { integration: IntegrationType },
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ProfileAction {
    Show,
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        picture: Option<String>,
        #[arg(long)]
        theme: Option<Theme>,
    },
}

fn parse_assignment(raw: &str) -> Result<Assignment, String> {
    let (name, value) =
        raw.split_once('=').ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing field name in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

impl Command {
    /// View the command renders; `None` for commands usable while signed out.
    fn view(&self) -> Option<View> {
        match self {
            Self::Status | Self::Login { .. } | Self::Logout | Self::Theme { .. } => None,
            Self::Whoami | Self::Profile { .. } => Some(View::Profile),
            Self::Dashboard => Some(View::Dashboard),
            Self::Clients { .. } => Some(View::Clients),
            Self::Projects { .. } => Some(View::Projects),
            Self::Team { .. } => Some(View::Team),
            Self::Payments { .. } => Some(View::Payments),
            Self::Integrations { .. } => Some(View::Integrations),
        }
    }
}

/// Mount the application and run one command.
///
/// # Errors
/// Returns an error when storage cannot be opened, the session is required
/// but absent, or the command itself fails.
pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let page_url = cli.page_url.clone().unwrap_or_else(|| config.api.origin.clone());

    let interaction = Arc::new(TerminalInteraction::stdio(cli.yes));
    let ctx = AppContext::new(config, interaction).context("building application context")?;
    let shell = Shell::new();

    let state = ctx.mount(Some(page_url.as_str())).await;
    if let Some(view) = cli.command.view() {
        shell.open(view);
        if shell.render(&state) == View::Login {
            bail!("Not signed in. Run `bizhub login --code <code>` first.");
        }
    }

    execute(&ctx, &shell, cli.command).await
}

async fn execute(ctx: &AppContext, shell: &Shell, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Status => {
            let report = commands::status(ctx).await?;
            println!("Backend:   {}", report.base_url);
            println!("Reachable: {}", if report.backend_reachable { "yes" } else { "no" });
            match commands::whoami(ctx) {
                Some(user) => println!("Session:   signed in as {}", user.display_name()),
                None => println!("Session:   signed out"),
            }
            println!("Theme:     {}", commands::current_theme(ctx));
        }
        Command::Login { code } => {
            let user = commands::login(ctx, &code).await?;
            println!("Signed in as {}", user.display_name());
        }
        Command::Logout => {
            commands::logout(ctx).await?;
            println!("Signed out.");
        }
        Command::Whoami => {
            if let Some(user) = commands::whoami(ctx) {
                print!("{}", render::user(&user));
            }
        }
        Command::Theme { action } => {
            let theme = match action {
                ThemeAction::Toggle => commands::toggle_theme(ctx).await?,
                ThemeAction::Show => commands::current_theme(ctx),
            };
            println!("Theme: {theme}");
        }
        Command::Dashboard => print!("{}", render::dashboard(&commands::dashboard(ctx))),
        Command::Clients { action } => {
            run_records(shell, ctx.clients.as_ref(), action, render::clients).await?;
        }
        Command::Projects { action } => {
            run_records(shell, ctx.projects.as_ref(), action, render::projects).await?;
        }
        Command::Team { action } => {
            run_records(shell, ctx.team.as_ref(), action, render::team).await?;
        }
        Command::Payments { action } => match action {
            PaymentAction::List => print!("{}", render::payments(&ctx.payments.items())),
            PaymentAction::Show { id } => {
                print!("{}", render::payment(&commands::show_payment(ctx, &id).await?));
            }
            PaymentAction::Request { fields } => {
                let session = commands::request_payment(ctx, shell, &fields).await?;
                let target = ctx.navigator.location().unwrap_or(session.url);
                println!("Continue to checkout: {target}");
            }
        },
        Command::Integrations { action } => match action {
            IntegrationAction::List => {
                print!("{}", render::integrations(&commands::integration_statuses(ctx)));
            }
            IntegrationAction::Connect { integration } => {
                match commands::connect_integration(ctx, integration).await {
                    ConnectOutcome::Connected => {}
                    ConnectOutcome::Cancelled => println!("Cancelled."),
                    ConnectOutcome::Failed => {
                        bail!("{} is not connected", integration.display_name());
                    }
                }
            }
            IntegrationAction::Disconnect { integration } => {
                let outcome = commands::disconnect_integration(ctx, integration).await?;
                report_removal(outcome, integration.display_name());
            }
        },
        Command::Profile { action } => match action {
            ProfileAction::Show => {
                if let Some(user) = commands::show_profile(ctx) {
                    print!("{}", render::user(&user));
                }
            }
            ProfileAction::Update { name, picture, theme } => {
                let changes = ProfileChanges { name, profile_picture: picture, theme };
                let user = commands::update_profile(ctx, changes).await?;
                print!("{}", render::user(&user));
            }
        },
    }
    Ok(())
}

async fn run_records<R>(
    shell: &Shell,
    module: &EntityModule<R>,
    action: RecordAction,
    table: fn(&[R]) -> String,
) -> anyhow::Result<()>
where
    R: EditableResource + FormViews,
{
    match action {
        RecordAction::List => print!("{}", table(&module.items())),
        RecordAction::Show { id } => {
            print!("{}", render::record(&commands::show_record(module, &id).await?));
        }
        RecordAction::Add { fields } => {
            let created = commands::add_record(shell, module, &fields).await?;
            println!("Created {} {}", R::LABEL, created.id());
            print!("{}", table(&module.items()));
        }
        RecordAction::Edit { id, fields } => {
            commands::edit_record(shell, module, &id, &fields).await?;
            println!("Updated {} {id}", R::LABEL);
        }
        RecordAction::Delete { id } => {
            let outcome = commands::delete_record(module, &id).await?;
            report_removal(outcome, &id);
        }
    }
    Ok(())
}

fn report_removal(outcome: RemoveOutcome, what: &str) {
    match outcome {
        RemoveOutcome::Removed => println!("Removed {what}."),
        RemoveOutcome::Declined => println!("Cancelled."),
    }
}
