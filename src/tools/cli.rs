use clap::Parser;
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter};

use crate::error::{HufError, Result};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

/// Zip, Unzip, Menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Menu,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// On-disk layout of compressed files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Frequency table embedded ahead of the payload. Decodes on its own.
    Container,
    /// Padding byte and packed bits only. Needs a reference file to decode.
    Raw,
}
impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Extension given to compressed files
pub const EXTENSION: &str = ".huf";

#[derive(Debug, Clone)]
pub struct HufOpts {
    /// Name of file to read for input
    pub input: Option<String>,
    /// Name of file to write, derived from the input when absent
    pub output: Option<String>,
    /// File whose byte frequencies rebuild the tree of a raw payload
    pub reference: Option<String>,
    /// Where to write the human readable compression report
    pub report: Option<String>,
    /// Container or raw payload
    pub format: Format,
    /// Compress/Decompress/Menu
    pub op_mode: Mode,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HufOpts {
    pub fn new() -> Self {
        Self {
            input: None,
            output: None,
            reference: None,
            report: None,
            format: Format::Container,
            op_mode: Mode::Zip,
            force_overwrite: false,
            verbose: Verbosity::Info,
        }
    }

    /// The input file name, which every file operation needs.
    pub fn input_path(&self) -> Result<&str> {
        self.input.as_deref().ok_or(HufError::MissingArgument("FILE"))
    }

    /// The output file name: the explicit one, or one derived from the input.
    /// Compression appends `.huf`. Decompression strips it, or appends `.out`
    /// when the input does not carry it.
    pub fn output_path(&self) -> Result<String> {
        if let Some(output) = &self.output {
            return Ok(output.clone());
        }
        let input = self.input_path()?;
        Ok(match self.op_mode {
            Mode::Unzip => match input.strip_suffix(EXTENSION) {
                Some(stem) if !stem.is_empty() => stem.to_string(),
                _ => format!("{}.out", input),
            },
            _ => format!("{}{}", input, EXTENSION),
        })
    }
}

impl Default for HufOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A Huffman coding file compressor",
    long_about = "
    Compresses a file with a static Huffman code built from its own byte frequencies.

    By default the frequency table is stored in the compressed file, so it can be
    decompressed on its own. With --raw only the padding byte and the packed bits are
    written, and decompression needs the original file (--reference) to rebuild the code."
)]
pub struct Args {
    /// Filename of file to process
    #[clap()]
    filename: Option<String>,

    /// Perform compression on the input file
    #[clap(short = 'z', long = "zip")]
    compress: bool,

    /// Perform decompression on the input file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Run the interactive compress/decompress menu
    #[clap(short = 'm', long = "menu")]
    menu: bool,

    /// Name of the output file
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    ///Force overwriting output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Write or read the bare payload, without the frequency table
    #[clap(long = "raw")]
    raw: bool,

    /// File whose frequencies rebuild the code of a raw payload
    #[clap(short = 'r', long = "reference")]
    reference: Option<String>,

    /// Write a human readable report of the compression to this file
    #[clap(long = "report")]
    report: Option<String>,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Put command line information from CLAP into our internal structure.
pub fn hufopts_init() -> HufOpts {
    hufopts_from(Args::parse())
}

fn hufopts_from(args: Args) -> HufOpts {
    let mut opts = HufOpts::new();

    opts.input = args.filename;
    opts.output = args.output;
    opts.reference = args.reference;
    opts.report = args.report;
    opts.force_overwrite = args.force;

    if args.compress {
        opts.op_mode = Mode::Zip
    };
    if args.decompress {
        opts.op_mode = Mode::Unzip
    };
    if args.menu {
        opts.op_mode = Mode::Menu
    };
    if args.raw {
        opts.format = Format::Raw
    };

    opts.verbose = match args.v {
        0 => Verbosity::Quiet,
        1 => Verbosity::Errors,
        2 => Verbosity::Warnings,
        3 => Verbosity::Info,
        4 => Verbosity::Debug,
        _ => Verbosity::Trace,
    };
    // Set the log level
    match opts.verbose {
        Verbosity::Quiet => log::set_max_level(log::LevelFilter::Off),
        Verbosity::Errors => log::set_max_level(log::LevelFilter::Error),
        Verbosity::Warnings => log::set_max_level(log::LevelFilter::Warn),
        Verbosity::Info => log::set_max_level(log::LevelFilter::Info),
        Verbosity::Debug => log::set_max_level(log::LevelFilter::Debug),
        Verbosity::Trace => log::set_max_level(log::LevelFilter::Trace),
    };

    // Below we report initialization status to the user
    info!("---- Hufzip Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("File format set to {}", opts.format);
    match &opts.input {
        Some(s) => info!("Getting input from the file {}", s),
        None if opts.op_mode != Mode::Menu => warn!("No input file given"),
        None => {}
    }
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    info!("---- Hufzip Initialization End ----\n");
    opts
}
