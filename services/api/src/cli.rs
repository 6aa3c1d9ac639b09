use crate::demo::{run_demo, run_module_show, run_table_render, ModuleShowArgs, TableRenderArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use talent_ops::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Talent Ops",
    about = "Serve and preview Talent Ops module tables from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Render arbitrary CSV data through the table engine
    Table {
        #[command(subcommand)]
        command: TableCommand,
    },
    /// Inspect a module page
    Module {
        #[command(subcommand)]
        command: ModuleCommand,
    },
    /// Walk through search, sort and paging on the workforce table
    Demo,
}

#[derive(Subcommand, Debug)]
enum TableCommand {
    /// Print one page of a CSV file as a text table
    Render(TableRenderArgs),
}

#[derive(Subcommand, Debug)]
enum ModuleCommand {
    /// Print one page of a module table
    Show(ModuleShowArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Table {
            command: TableCommand::Render(args),
        } => run_table_render(args),
        Command::Module {
            command: ModuleCommand::Show(args),
        } => run_module_show(args),
        Command::Demo => run_demo(),
    }
}
