use basefmt::{Direction, Radix, convert};
use clap::{ArgAction, Parser};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// basefmt prints integers as grouped binary, octal or hexadecimal numerals,
/// and reads such numerals back.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads a numeral and prints its decimal value instead of formatting a
    /// decimal integer.
    #[arg(short, long)]
    parse: bool,

    /// Radix to format in or parse from: bin, oct or hex. Formatting defaults
    /// to bin; parsing takes the radix from the numeral's prefix.
    #[arg(short, long)]
    radix: Option<Radix>,

    /// Reproduces the legacy rendering of negative values and hexadecimal
    /// prefixes.
    #[arg(short, long)]
    compat: bool,

    /// Logs more detail to stderr; repeat for trace output. `BASEFMT_LOG`
    /// overrides this with a full filter.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The integer or numeral. Several words are joined with spaces, so
    /// `basefmt -p 0b 1111 1111` works unquoted.
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true, allow_negative_numbers = true)]
    input: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt().with_env_filter(EnvFilter::builder().with_default_directive(level.into())
                                                                  .with_env_var("BASEFMT_LOG")
                                                                  .from_env_lossy())
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .without_time()
                             .init();

    let direction = if args.parse { Direction::Parse } else { Direction::Format };
    let input = args.input.join(" ");

    match convert(&input, direction, args.radix, args.compat) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
