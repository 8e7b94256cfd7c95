use clap::Parser;
use shotfit::config::{self, DEFAULT_QUALITY, Quality, RunConfig};
use shotfit::{output, run};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shotfit")]
#[command(about = "Batch-resize screenshot trees to the App Store 5.5-inch dimensions")]
#[command(long_about = "\
Batch-resize screenshot trees to the App Store 5.5-inch dimensions

Walks the input directory recursively and writes a resized PNG copy of every
file into the same relative location under the output directory. Each image
is stretched to exactly one of two fixed sizes chosen by orientation:

  landscape (width > height)   2208 x 1242
  portrait or square           1242 x 2208

Files are processed in parallel; a file that cannot be decoded is reported
and skipped without stopping the rest of the batch.")]
#[command(version)]
struct Cli {
    /// Directory tree to read screenshots from
    #[arg(long)]
    input: PathBuf,

    /// Directory to write the mirrored, resized tree into (created if absent)
    #[arg(long)]
    output: PathBuf,

    /// Maximum number of parallel workers (default: all cores, capped at core count)
    #[arg(long)]
    threads: Option<usize>,

    /// Encoding quality 1-100. PNG output is lossless; this only steers
    /// compression effort
    #[arg(long, default_value_t = DEFAULT_QUALITY)]
    quality: u32,
}

fn main() {
    let cli = Cli::parse();

    if let Ok(dir) = std::env::current_dir() {
        println!("{}", output::format_current_dir(&dir));
    }

    let config = RunConfig {
        input_root: cli.input,
        output_root: cli.output,
        threads: cli.threads,
        quality: Quality::new(cli.quality),
    };

    init_thread_pool(&config);

    // Workers report over the channel; one thread owns stdout for job lines
    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            println!("{}", output::format_job_event(&event));
        }
    });

    let result = run::run(&config, Some(tx));
    printer.join().unwrap();

    match result {
        Ok(summary) => output::print_summary(&summary),
        Err(e) => {
            message_and_wait_for_key(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Initialize the rayon thread pool from the run config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(config: &RunConfig) {
    rayon::ThreadPoolBuilder::new()
        .num_threads(config::effective_threads(config))
        .build_global()
        .ok();
}

/// Print a fatal message and hold the console open until Enter is pressed.
///
/// The tool is often launched from a double-clicked shortcut whose window
/// closes on exit; pausing keeps the message readable.
fn message_and_wait_for_key(message: &str) {
    println!("{message}");
    print!("Press Enter to exit.");
    let _ = std::io::stdout().flush();
    let _ = std::io::stdin().read_line(&mut String::new());
}
