use bin2img::cli::Args;
use bin2img::error::ConvertError;
use bin2img::types::INPUT_SHAPE;
use bin2img::{display, image, raw, summary};
use clap::{CommandFactory, Parser};
use std::path::Path;

fn main() {
    let args = Args::parse();

    let (Some(input), Some(output)) = (args.input.clone(), args.output.clone()) else {
        let _ = Args::command().print_help();
        println!();
        std::process::exit(1);
    };

    if let Err(e) = process_file(&input, &output, &args) {
        println!("Error: {e}");
        std::process::exit(1);
    }
}

/// Convert a single raw fp32 dump into an image file
fn process_file(input: &Path, output: &Path, args: &Args) -> Result<(), ConvertError> {
    // Stage 1: load the raw payload
    let buffer = raw::load_raw_file(input)?;

    // Stage 2: decode the leading bytes into the planar tensor
    let tensor = raw::decode_tensor(&buffer, INPUT_SHAPE)?;

    // Stage 3: verbose output
    if args.verbose {
        summary::print_summary(&tensor, buffer.len());
    }

    // Stage 4: normalize, quantize and pack into an RGB image
    let converted = image::convert_to_image(&tensor)?;

    // Stage 5: persist (write-then-rename)
    image::save_image(&converted, output)?;

    // Stage 6: optional terminal preview
    if args.preview {
        display::print_image(&converted, args)
            .map_err(|e| ConvertError::PreviewFailed(e.to_string()))?;
    }

    Ok(())
}
