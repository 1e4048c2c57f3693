mod error;
mod install;
mod partition;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    quiet: bool,
    #[clap(short, action = clap::ArgAction::Count)]
    verbosity: u8,
    /// Print new sectors instead of writing them
    #[clap(long)]
    dry_run: bool,
    /// Treat device as MBR partitioned disk and install into N-th primary partition
    #[clap(short, long, value_name = "N")]
    partition: Option<usize>,
    /// block device or image file formatted with fat, e.g. /dev/sdb1
    device: String,
    /// fat or fat32, case insensitive
    filesystem: String,
}

fn main() {
    let args = Args::parse();
    let level = match (args.quiet, args.verbosity) {
        (true, _) => log::LevelFilter::Off,
        (_, 0) => log::LevelFilter::Info,
        (_, 1) => log::LevelFilter::Debug,
        (_, _) => log::LevelFilter::Trace,
    };
    log::set_max_level(level);
    env_logger::builder().filter(None, level).target(env_logger::Target::Stdout).init();

    let options = install::Options { partition: args.partition, dry_run: args.dry_run };
    if let Err(error) = install::install(&args.device, &args.filesystem, options) {
        eprintln!("{}", error);
        if let Some(warning) = error.warning(&args.device) {
            eprintln!("{}", warning);
        }
        std::process::exit(1);
    }
}
