use clap::Parser;
use std::path::PathBuf;

/// Convert raw fp32 tensor dumps into normalized RGB images
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Binary input file holding little-endian fp32 samples
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Destination image path; format is chosen by extension (e.g. .png)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Preview width in terminal columns
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Preview height in terminal rows
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Display the converted image in the terminal
    #[arg(short, long)]
    pub preview: bool,

    /// Print input size, tensor shape and value range
    #[arg(short, long)]
    pub verbose: bool,
}
