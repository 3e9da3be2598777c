//! onboard CLI
//!
//! Runs the onboarding flow from the command line against the in-memory
//! backend.

use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use onboard::{
    Field, FormValues, InMemoryCreator, Mode, OnboardError, OnboardingConfig, OnboardingSession,
    SubmitAttempt, DEFAULT_ACTION, DEFAULT_DOCS_URL,
};

/// Create an organization, its first project and an API client.
#[derive(Parser)]
#[command(name = "onboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Documentation link shown after success.
    #[arg(long, env = "ONBOARD_DOCS_URL", default_value = DEFAULT_DOCS_URL)]
    docs_url: String,

    /// Form action URL.
    #[arg(long, default_value = DEFAULT_ACTION)]
    action: String,

    /// Minimum length of organization and project names.
    #[arg(long, default_value_t = onboard::DEFAULT_MIN_NAME_LENGTH)]
    min_length: usize,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and submit the form once.
    Submit {
        /// Organization name.
        #[arg(short, long)]
        organization: String,

        /// Project name.
        #[arg(short, long)]
        project: String,

        /// Deployment mode (website or other).
        #[arg(short, long, default_value = "website")]
        mode: Mode,

        /// CORS origin, required for websites.
        #[arg(short, long)]
        cors: Option<String>,

        /// Organization names that already exist.
        #[arg(long)]
        taken: Vec<String>,

        /// Print the created client as JSON instead of HTML.
        #[arg(long)]
        json: bool,
    },

    /// Print the form HTML for the given values.
    Render {
        /// Organization name.
        #[arg(short, long, default_value = "")]
        organization: String,

        /// Project name.
        #[arg(short, long, default_value = "")]
        project: String,

        /// Deployment mode (website or other).
        #[arg(short, long, default_value = "website")]
        mode: Mode,

        /// CORS origin.
        #[arg(short, long)]
        cors: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = OnboardingConfig::default()
        .docs_url(cli.docs_url)
        .min_name_length(cli.min_length)
        .action(cli.action);

    match cli.command {
        Commands::Submit {
            organization,
            project,
            mode,
            cors,
            taken,
            json,
        } => {
            let mut session =
                OnboardingSession::new(InMemoryCreator::with_taken(&taken), config);
            session.edit(Field::Organization, organization)?;
            session.edit(Field::Project, project)?;
            if let Some(cors) = cors {
                session.edit(Field::Cors, cors)?;
            }
            session.select_mode(mode)?;

            if let SubmitAttempt::Rejected(errors) = session.submit().await? {
                return Err(OnboardError::Validation(errors).into());
            }

            let view = session.completed()?;
            if json {
                println!("{}", serde_json::to_string_pretty(view.client())?);
            } else {
                println!("{}", view.render());
            }

            session.proceed(&|| info!("Next: read the docs at {}", session.config().docs_url))?;
        }

        Commands::Render {
            organization,
            project,
            mode,
            cors,
        } => {
            let mut values = FormValues::new(organization, project).with_mode(mode);
            if let Some(cors) = cors {
                values = values.with_cors(cors);
            }
            let session = OnboardingSession::with_values(InMemoryCreator::new(), config, values);
            let html = session.render();
            println!("{html}");
        }
    }

    Ok(())
}
