use cashflow::{
    cli::{run_cli, Cli},
    init,
};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    init(cli.verbose);

    if let Err(err) = run_cli(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
