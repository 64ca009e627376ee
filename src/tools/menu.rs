//! Interactive compress / decompress / exit loop.
//!
//! Only one compression may be outstanding: a second compress is refused until
//! the pending file has been decompressed, and decompress is refused until
//! something has been compressed.

use std::io::{BufRead, Write};

use log::{error, info};

use super::cli::{Format, HufOpts, Mode, EXTENSION};
use crate::compression::compress::compress_file;
use crate::compression::decompress::decompress_file;
use crate::error::{HufError, Result};

/// Input used when the command line names none
pub const DEFAULT_INPUT: &str = "input.txt";
/// Report written by every menu compression
pub const REPORT_FILE: &str = "compression_report.txt";

/// Where the menu is in the compress/decompress cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Idle,
    Compressed,
}

impl Session {
    pub fn check_compress(self) -> Result<()> {
        match self {
            Session::Idle => Ok(()),
            Session::Compressed => Err(HufError::AlreadyCompressed),
        }
    }

    pub fn check_decompress(self) -> Result<()> {
        match self {
            Session::Compressed => Ok(()),
            Session::Idle => Err(HufError::NothingToDecompress),
        }
    }
}

/// File names one menu session works with.
#[derive(Debug, Clone)]
struct MenuFiles {
    input: String,
    compressed: String,
    restored: String,
}

impl MenuFiles {
    fn from_opts(opts: &HufOpts) -> Self {
        let input = opts.input.clone().unwrap_or_else(|| DEFAULT_INPUT.to_string());
        let compressed = opts
            .output
            .clone()
            .unwrap_or_else(|| format!("{}{}", input, EXTENSION));
        let restored = format!("{}.restored", input);
        Self {
            input,
            compressed,
            restored,
        }
    }

    fn zip_opts(&self, base: &HufOpts) -> HufOpts {
        let mut opts = base.clone();
        opts.op_mode = Mode::Zip;
        opts.input = Some(self.input.clone());
        opts.output = Some(self.compressed.clone());
        opts.report = Some(base.report.clone().unwrap_or_else(|| REPORT_FILE.to_string()));
        opts.force_overwrite = true;
        opts
    }

    fn unzip_opts(&self, base: &HufOpts) -> HufOpts {
        let mut opts = base.clone();
        opts.op_mode = Mode::Unzip;
        opts.input = Some(self.compressed.clone());
        opts.output = Some(self.restored.clone());
        if opts.format == Format::Raw && opts.reference.is_none() {
            // The bare format decodes against the original text
            opts.reference = Some(self.input.clone());
        }
        opts.force_overwrite = true;
        opts
    }
}

/// Run one compress step, moving to Compressed on success.
fn do_compress<W: Write>(
    session: &mut Session,
    files: &MenuFiles,
    base: &HufOpts,
    out: &mut W,
) -> Result<()> {
    session.check_compress()?;
    let summary = compress_file(&files.zip_opts(base))?;
    *session = Session::Compressed;
    writeln!(
        out,
        "File compressed successfully! {} -> {} bytes, saved as '{}'.",
        summary.original_len, summary.compressed_len, files.compressed
    )?;
    Ok(())
}

/// Run one decompress step, moving back to Idle on success.
fn do_decompress<W: Write>(
    session: &mut Session,
    files: &MenuFiles,
    base: &HufOpts,
    out: &mut W,
) -> Result<()> {
    session.check_decompress()?;
    decompress_file(&files.unzip_opts(base))?;
    *session = Session::Idle;
    writeln!(
        out,
        "File decompressed successfully! Saved as '{}'.",
        files.restored
    )?;
    Ok(())
}

/// Drive the menu from `input` until the user exits or input ends.
/// Operation failures are reported and leave the session unchanged.
pub fn run_menu<R: BufRead, W: Write>(opts: &HufOpts, mut input: R, mut out: W) -> Result<Session> {
    let files = MenuFiles::from_opts(opts);
    let mut session = Session::Idle;
    info!("Menu started on {}", files.input);

    loop {
        writeln!(out, "\nMenu:")?;
        writeln!(out, "1. Compress")?;
        writeln!(out, "2. Decompress")?;
        writeln!(out, "3. Exit")?;
        write!(out, "Choose an option: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let result = match line.trim() {
            "1" => do_compress(&mut session, &files, opts, &mut out),
            "2" => do_decompress(&mut session, &files, opts, &mut out),
            "3" => {
                writeln!(out, "Exiting. Goodbye!")?;
                break;
            }
            other => {
                writeln!(out, "Invalid option '{}'. Try again.", other)?;
                Ok(())
            }
        };
        if let Err(e) = result {
            error!("{}", e);
            writeln!(out, "Error: {}", e)?;
        }
    }
    Ok(session)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    #[test]
    fn session_gate_test() {
        assert!(Session::Idle.check_compress().is_ok());
        assert!(matches!(
            Session::Idle.check_decompress(),
            Err(HufError::NothingToDecompress)
        ));
        assert!(Session::Compressed.check_decompress().is_ok());
        assert!(matches!(
            Session::Compressed.check_compress(),
            Err(HufError::AlreadyCompressed)
        ));
    }

    fn scratch(name: &str) -> String {
        let dir = std::env::temp_dir().join(format!("hufzip_menu_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir.join("input.txt").to_str().unwrap().to_string()
    }

    fn run(opts: &HufOpts, keys: &str) -> (Session, String) {
        let mut out = Vec::new();
        let session = run_menu(opts, keys.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn menu_cycle_test() {
        let input = scratch("cycle");
        fs::write(&input, "abracadabra").unwrap();
        let mut opts = HufOpts::new();
        opts.op_mode = Mode::Menu;
        opts.input = Some(input.clone());
        opts.report = Some(format!("{}.report", input));

        // decompress first is refused, compress twice is refused
        let (session, text) = run(&opts, "2\n1\n1\n");
        assert_eq!(session, Session::Compressed);
        assert!(text.contains("no compressed file available"));
        assert!(text.contains("File compressed successfully!"));
        assert!(text.contains("already compressed"));

        let (session, text) = run(&opts, "1\n2\n3\n");
        assert_eq!(session, Session::Idle);
        assert!(text.contains("File decompressed successfully!"));
        assert!(text.contains("Goodbye"));
        assert_eq!(fs::read(format!("{}.restored", input)).unwrap(), b"abracadabra");
        assert!(fs::read_to_string(format!("{}.report", input))
            .unwrap()
            .contains("'a': 0"));
    }

    #[test]
    fn menu_raw_uses_input_as_reference_test() {
        let input = scratch("raw");
        fs::write(&input, "mississippi").unwrap();
        let mut opts = HufOpts::new();
        opts.input = Some(input.clone());
        opts.format = Format::Raw;
        opts.report = Some(format!("{}.report", input));

        let (session, _) = run(&opts, "1\n2\n");
        assert_eq!(session, Session::Idle);
        assert_eq!(fs::read(format!("{}.restored", input)).unwrap(), b"mississippi");
    }

    #[test]
    fn menu_missing_input_test() {
        let input = scratch("missing");
        let _ = fs::remove_file(&input);
        let mut opts = HufOpts::new();
        opts.input = Some(input);

        let (session, text) = run(&opts, "1\nx\n");
        assert_eq!(session, Session::Idle);
        assert!(text.contains("Error: io error"));
        assert!(text.contains("Invalid option 'x'"));
    }
}
