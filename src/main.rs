/*!
 * Command-line interface for clipmd
 */

use std::io::{self, Write};
use std::process;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use clipmd::config::{Args, Config};
use clipmd::report::{CollectionReport, Reporter};
use clipmd::{deliver, Collector, SystemClipboard};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return;
    }

    if let Err(e) = run(Config::from_args(args)) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(config: Config) -> clipmd::Result<()> {
    let progress = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .template("{spinner:.green} {prefix:.bold.cyan} {pos} files {wide_msg:.dim.white}")
    {
        progress.set_style(style);
    }
    progress.set_prefix("📂 Collecting");
    progress.enable_steady_tick(Duration::from_millis(100));

    let start_time = Instant::now();

    let collector = Collector::new(config.clone(), Arc::new(progress.clone()));
    let collection = collector.collect();

    progress.finish_and_clear();

    let delivery = deliver(&collection, &SystemClipboard)?;
    let duration = start_time.elapsed();

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", delivery.confirmation())?;
    drop(stdout);

    if config.report {
        let report = CollectionReport::new(&collection, &delivery, duration);
        Reporter::new().print_report(&report);
    }

    Ok(())
}
