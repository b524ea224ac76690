use canvas_assistant::cli::{self, Cli, Command, ConfigCommand};
use canvas_assistant::{config, logging};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    if let Some(Command::Config(ConfigCommand::Path)) = &args.command {
        cli::handle_config_path(args.config.as_deref());
        return Ok(());
    }
    if let Some(Command::Version) = &args.command {
        cli::handle_version();
        return Ok(());
    }

    let cfg = config::load_config(args.config.as_deref())?;
    logging::init_logging(&cfg.logging)?;

    let result = match args.command {
        None => cli::handle_serve(cfg, None, None).await,
        Some(Command::Serve { host, port }) => cli::handle_serve(cfg, host, port).await,
        Some(Command::Ask { message, explain }) => cli::handle_ask(&cfg, &message, explain),
        Some(Command::Topics) => cli::handle_topics(&cfg),
        Some(Command::Config(ConfigCommand::Show)) => cli::handle_config_show(&cfg),
        Some(Command::Config(ConfigCommand::Path)) | Some(Command::Version) => Ok(()),
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "command failed");
    }
    result
}
