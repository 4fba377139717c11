mod subs;
use anyhow::Result;
use colored::Colorize;
use subs::runnable::RunnableSubcommand;
use subs::*;

#[macro_use]
extern crate stump;

extern crate wild;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(name = "framealign")]
#[clap(about = "Video frame offset estimation", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: FrameAlign,

    #[clap(long, short, help = "Verbose output")]
    verbose: bool,
}

#[derive(Subcommand)]
enum FrameAlign {
    Align(align::Align),
    Extract(extract::Extract),
    RawInfo(rawinfo::RawInfo),
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let t1 = std::time::Instant::now();

    stump::set_min_log_level(stump::LogEntryLevel::WARN);
    info!("Initialized logging"); // INFO, which means that this won't be seen
                                  // unless the user overrides via environment
                                  // variable.

    let args = Cli::parse_from(wild::args());

    if args.verbose {
        stump::set_verbose(true);
    }

    if let Err(why) = match args.command {
        FrameAlign::Align(args) => args.run().await,
        FrameAlign::Extract(args) => args.run().await,
        FrameAlign::RawInfo(args) => args.run().await,
    } {
        error!("{}", "Unhandled program error:".red());
        error!("{}", why);
        std::process::exit(1);
    };
    info!("Runtime: {}s", t1.elapsed().as_secs_f64());
    Ok(())
}
