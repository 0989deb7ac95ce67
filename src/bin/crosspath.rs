//! Command-line front end for crosspath.
//!
//! Each subcommand runs one library operation on its arguments and prints
//! the result:
//! - `full-path`: Resolve a path against the working directory
//! - `join`: Join two path fragments
//! - `sanitize-filename` / `sanitize-path`: Escape unsafe characters
//! - `cwd`: Print the working directory (of a drive, with `--volume`)
//! - `volume`: Show the volume and path type of a path
//! - `mkdir`: Create a single directory

use clap::{Parser, Subcommand};
use crosspath::{
    change_directory, current_working_directory, current_working_directory_by_volume,
    get_full_path, get_volume_name, join, make_directory, sanitize_filename, sanitize_path,
    PathBuffer, PathContext, PathStyle,
};

/// Resolve, join and sanitize paths in POSIX or Windows style.
#[derive(Parser)]
#[command(name = "crosspath")]
#[command(version, about = "Cross-platform path resolution and sanitization", long_about = None)]
struct Cli {
    /// Enable debug output from the library
    #[arg(long, global = true)]
    verbose: bool,

    /// Code page used for narrow/wide conversion (20127, 28591 or 65001)
    #[arg(long, value_name = "ID", global = true, default_value_t = 65001)]
    codepage: i32,

    /// Path convention: posix or windows (defaults to the host's)
    #[arg(long, value_name = "STYLE", global = true)]
    style: Option<PathStyle>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a path into an absolute path
    FullPath {
        path: String,
    },

    /// Join two path fragments with a single separator
    Join {
        first: String,
        second: String,
    },

    /// Escape a single name, including its separators
    SanitizeFilename {
        name: String,
    },

    /// Escape a path, keeping its separators
    SanitizePath {
        path: String,
    },

    /// Print the current working directory
    Cwd {
        /// Drive volume such as `C:` (Windows hosts only)
        #[arg(long)]
        volume: Option<String>,

        /// Change to this directory first
        #[arg(long, value_name = "PATH")]
        change_to: Option<String>,
    },

    /// Show the volume, type and directory index of a path
    Volume {
        path: String,
    },

    /// Create a single directory
    Mkdir {
        path: String,
    },

    /// Print the library version
    Version,
}

/// Writes `log` records to stderr
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logger(verbose: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Warn
        });
    }
}

fn print(buffer: &PathBuffer<u8>) {
    println!("{}", buffer.to_string_lossy());
}

fn execute(command: Command, context: &PathContext) -> crosspath::Result<()> {
    let style = context.style();
    match command {
        Command::FullPath { path } => print(&get_full_path(path.as_bytes(), context)?),
        Command::Join { first, second } => {
            print(&join(first.as_bytes(), second.as_bytes(), style)?)
        }
        Command::SanitizeFilename { name } => print(&sanitize_filename(name.as_bytes(), style)?),
        Command::SanitizePath { path } => print(&sanitize_path(path.as_bytes(), style)?),
        Command::Cwd { volume, change_to } => {
            if let Some(target) = change_to {
                change_directory(target.as_bytes(), context)?;
            }
            let directory = match volume {
                Some(volume) => current_working_directory_by_volume(volume.as_bytes(), context)?,
                None => current_working_directory::<u8>(context)?,
            };
            print(&directory);
        }
        Command::Volume { path } => {
            let volume = get_volume_name(path.as_bytes(), style)?;
            println!("volume: {}", String::from_utf8_lossy(volume.volume));
            println!("type: {:?}", volume.path_type);
            println!("directory index: {}", volume.directory_name_index);
        }
        Command::Mkdir { path } => make_directory(path.as_bytes(), context)?,
        Command::Version => println!("crosspath {}", crosspath::get_version()),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut context = PathContext::default();
    if let Err(e) = context.set_codepage(cli.codepage) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Some(style) = cli.style {
        context = context.with_style(style);
    }

    if let Err(e) = execute(cli.command, &context) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
