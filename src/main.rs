use clap::Parser;
use std::io;

#[derive(Parser)]
#[command(name = "before-submit-prompt")]
#[command(version)]
#[command(
    about = "Inject build-channel instructions into an editor prompt-submission event",
    long_about = None
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    hish_hook::run(&mut stdin.lock(), &mut stdout.lock());
}
