use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cfg = fixbrot::config::Config::parse();
    fixbrot::app::run(cfg)
}
