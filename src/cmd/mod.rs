use crate::{conf::Settings, pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod migrate;

#[derive(Parser)]
#[command(about = "scores exam submissions and tracks placement readiness")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Serve the exam and result endpoints
    Listen,
    /// Create the questions and results tables
    Migrate,
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen(&Settings::new()?).await?;
        }
        Some(SubCommandType::Migrate) => {
            migrate::apply(&Settings::new()?).await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_subcommands() {
        let cmd = Cmd::try_parse_from(["skillscore", "listen"]).unwrap();
        assert!(matches!(cmd.command, Some(SubCommandType::Listen)));
        let cmd = Cmd::try_parse_from(["skillscore", "migrate"]).unwrap();
        assert!(matches!(cmd.command, Some(SubCommandType::Migrate)));
    }

    #[test]
    fn subcommand_is_optional() {
        let cmd = Cmd::try_parse_from(["skillscore"]).unwrap();
        assert!(cmd.command.is_none());
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cmd::try_parse_from(["skillscore", "seed"]).is_err());
    }
}
