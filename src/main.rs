use clap::{Parser, Subcommand};

mod commands;

use commands::send::SendArgs;

#[derive(Parser)]
#[command(name = "magicicada-notify")]
#[command(about = "End-user notifications for the Magicicada sync client")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a notification
    Send {
        /// The notification message
        message: Option<String>,

        /// Notification title
        #[arg(short, long, default_value = magicicada_notify::APPLICATION_NAME)]
        title: String,

        /// Icon resource to attach
        #[arg(long)]
        icon: Option<String>,

        /// Merge into the notification already on screen
        #[arg(long)]
        append: bool,

        /// Send raw JSON message
        #[arg(long)]
        json: Option<String>,

        /// Override the configured application name
        #[arg(long)]
        app_name: Option<String>,
    },

    /// Show notification settings
    Config {
        /// Write a default settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Send {
            message,
            title,
            icon,
            append,
            json,
            app_name,
        } => {
            commands::send::run(SendArgs {
                message,
                title,
                icon,
                append,
                json,
                app_name,
            })?;
        }
        Commands::Config { init } => {
            commands::config::run(init)?;
        }
    }

    Ok(())
}
