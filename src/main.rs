use clap::Parser;
use stackz::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = stackz::tui::run(cli.file.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
