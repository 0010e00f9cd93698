mod commands;
mod terminal;

use commands::{CommandLine, Commands, export, parse};
use scanlens_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        no_color: commands.no_color,
    };

    logging::init_logging(&cfg);

    match commands.command {
        Commands::Parse { file, format } => {
            print::header("parsing report", cfg.quiet);
            parse::parse(&file, format, &cfg).await
        }
        Commands::Export {
            file,
            format,
            to,
            output,
        } => export::export(&file, format, to, output, &cfg).await,
    }
}
