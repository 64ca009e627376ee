//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use std::io;

use hufzip::compression::compress::compress_file;
use hufzip::compression::decompress::decompress_file;
use hufzip::error::HufError;
use hufzip::tools::cli::{hufopts_init, Mode};
use hufzip::tools::menu::run_menu;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

fn main() -> Result<(), HufError> {
    // Available log levels are Error, Warn, Info, Debug, Trace. The cli lowers this to -v.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Logger unavailable: {}", e);
    }

    let options = hufopts_init();

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Zip => compress_file(&options).map(|_| ()),
        Mode::Unzip => decompress_file(&options).map(|_| ()),
        Mode::Menu => {
            let stdin = io::stdin();
            run_menu(&options, stdin.lock(), io::stdout()).map(|_| ())
        }
    };

    if let Err(e) = &result {
        error!("{}", e);
    }
    info!("Done.\n");
    result
}
