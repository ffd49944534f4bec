use anyhow::Result;
use plando::commands::Cli;

fn main() -> Result<()> {
    Cli::menu()
}
