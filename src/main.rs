use anyhow::Result;

fn main() -> Result<()> {
    play_nine::cli::run_cli()
}
