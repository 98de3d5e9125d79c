use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
pub use error::{Error, ErrorKind};
use raster::{
    reader::decoder::DecodingImageReader, transformer::BackgroundTransformer,
    writer::png::PngImageWriter, ImageReader, ImageWriter,
};

mod cli;
pub mod color;
mod error;
mod logger;
pub mod raster;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
}

impl Arguments {
    pub fn input_file(&self) -> &Path {
        &self.input_file
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e)
        })
}

/// Decodes `input_path`, makes every pixel with red, green and blue above 240
/// transparent white and writes the result to `output_path` as PNG.
///
/// The output file is only created once the input has been decoded, so a bad
/// input never touches an existing output.
pub fn remove_white_background<P, Q>(input_path: P, output_path: Q) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let input_file = open_input_file(input_path)?;
    let mut image = DecodingImageReader::new(BufReader::new(input_file)).read_image()?;
    logger::log_stage("Decoded", image.width(), image.height());

    let summary = BackgroundTransformer::new().transform(&mut image);
    log::info!(
        "Cleared {} of {} pixels",
        summary.cleared_pixels,
        summary.total_pixels()
    );

    let output_file = open_output_file(output_path)?;
    PngImageWriter::new(BufWriter::new(output_file), &image).write_image()?;
    logger::log_stage("Encoded", image.width(), image.height());
    Ok(())
}
