//! cube-decoder 命令行入口
//!
//! 用法：
//!   cube-decoder <input> [output] [--lenient] [-v]
//!
//! 输出路径缺省为输入路径改扩展名为 `.bfb`。
//! 所有实际逻辑都委托给库中的 decode 流程。

use std::path::PathBuf;
use std::process::exit;

use clap::{ArgAction, Parser};
use cube_decoder::{CubeError, DecodeOptions, PaddingMode};
use log::error;

#[derive(Debug, Parser)]
#[command(
    name = "cube-decoder",
    version,
    about = "Decode .cube / .cube3 / .cubepro / .cubex files into plain G-code",
    after_help = "OUTPUT defaults to INPUT with the file extension changed to .bfb\n\
                  INPUT file extension must be .cubex or .cube or .cube3 or .cubepro"
)]
struct Cli {
    /// Encrypted input file.
    input: PathBuf,

    /// Output file for the decoded G-code.
    output: Option<PathBuf>,

    /// Warn on invalid padding instead of failing (matches the legacy decoder's output).
    #[arg(long, default_value_t = false)]
    lenient: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            exit(CubeError::EXIT_USAGE);
        }
        Err(e) => e.exit(),
    };

    init_logger(cli.verbose);

    let output = cli
        .output
        .unwrap_or_else(|| cube_decoder::default_output_path(&cli.input));

    let options = DecodeOptions {
        padding: if cli.lenient {
            PaddingMode::Lenient
        } else {
            PaddingMode::Strict
        },
    };

    if let Err(e) = cube_decoder::decode_with_options(&cli.input, &output, &options) {
        match std::error::Error::source(&e) {
            Some(cause) => error!("{e}: {cause}"),
            None => error!("{e}"),
        }
        if matches!(e, CubeError::Usage(_)) {
            eprintln!("Usage: cube-decoder <INPUT> [OUTPUT]  (see --help)");
        }
        exit(e.exit_code());
    }
}
