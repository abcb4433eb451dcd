//! Drives the encoders over single files or whole directories.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    error::{Error, Result},
    fs::Filesystem,
    header::{render_aggregate, render_stage, render_universe, symbol_name},
    image::Image,
    stages::encode_stage,
    universe::encode_universe,
};

pub const DEFAULT_SIZE: u32 = 32;

/// File that must exist in the working directory for [`Job::Auto`].
pub const MARKER: &str = "particlesim.cpp";
pub const AUTO_STAGES_DIR: &str = "images";
pub const AUTO_UNIVERSES_DIR: &str = "gol";

pub const STAGES_AGGREGATE: &str = "img_all.h";
pub const UNIVERSES_AGGREGATE: &str = "gol_all.h";

const IMAGE_EXTENSION: &str = "png";
const HEADER_EXTENSION: &str = "h";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Directory(PathBuf),
}

impl Target {
    /// Exactly one of `directory` and `file` has to be given.
    pub fn from_options(directory: Option<PathBuf>, file: Option<PathBuf>) -> Result<Self> {
        match (directory, file) {
            (Some(directory), None) => Ok(Target::Directory(directory)),
            (None, Some(file)) => Ok(Target::File(file)),
            (Some(_), Some(_)) => Err(Error::InvalidArguments(
                "--directory and --file are mutually exclusive",
            )),
            (None, None) => Err(Error::InvalidArguments(
                "one of --directory or --file is required",
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    /// Background + particle tables
    Stages { target: Target, gamma: bool },
    /// Game of Life initial universes
    Gol { target: Target },
    /// Stages with gamma from `images/` and universes from `gol/`
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Required width and height of every input
    pub size: u32,
    pub job: Job,
}

/// Paths written by one [`run`], in write order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub headers: Vec<PathBuf>,
    pub aggregates: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Stages { gamma: bool },
    Universe,
}

impl Format {
    fn aggregate_name(self) -> &'static str {
        match self {
            Format::Stages { .. } => STAGES_AGGREGATE,
            Format::Universe => UNIVERSES_AGGREGATE,
        }
    }

    fn render(self, image: &Image, size: u32, name: &str) -> Result<String> {
        match self {
            Format::Stages { gamma } => Ok(render_stage(name, &encode_stage(image, size, gamma)?)),
            Format::Universe => Ok(render_universe(name, &encode_universe(image, size)?)),
        }
    }
}

/// Runs one job. Stops at the first failing file; headers written before the
/// failure are left in place.
pub fn run(fs: &mut impl Filesystem, config: &Config) -> Result<Report> {
    let mut report = Report::default();
    match &config.job {
        Job::Stages { target, gamma } => convert_target(
            fs,
            target,
            Format::Stages { gamma: *gamma },
            config.size,
            &mut report,
        )?,
        Job::Gol { target } => {
            convert_target(fs, target, Format::Universe, config.size, &mut report)?
        }
        Job::Auto => {
            if !fs.exists(Path::new(MARKER)) {
                return Err(Error::MissingMarker(PathBuf::from(MARKER)));
            }
            info!("Compiling stages...");
            convert_directory(
                fs,
                Path::new(AUTO_STAGES_DIR),
                Format::Stages { gamma: true },
                config.size,
                &mut report,
            )?;
            info!("Compiling universes...");
            convert_directory(
                fs,
                Path::new(AUTO_UNIVERSES_DIR),
                Format::Universe,
                config.size,
                &mut report,
            )?;
        }
    }
    Ok(report)
}

fn convert_target(
    fs: &mut impl Filesystem,
    target: &Target,
    format: Format,
    size: u32,
    report: &mut Report,
) -> Result<()> {
    match target {
        Target::File(input) => {
            let output = convert_file(fs, input, format, size)?;
            report.headers.push(output);
            Ok(())
        }
        Target::Directory(dir) => convert_directory(fs, dir, format, size, report),
    }
}

/// Converts `input` into a header next to it with the extension swapped.
pub fn convert_file(
    fs: &mut impl Filesystem,
    input: &Path,
    format: Format,
    size: u32,
) -> Result<PathBuf> {
    let image = fs.load_image(input)?;
    let text = format.render(&image, size, &symbol_name(input))?;
    let output = input.with_extension(HEADER_EXTENSION);
    fs.write(&output, &text)?;
    Ok(output)
}

fn is_image(name: &str) -> bool {
    Path::new(name).extension().is_some_and(|ext| ext == IMAGE_EXTENSION)
}

/// Fails if two inputs would define the same C symbol.
fn check_symbols(dir: &Path, inputs: &[String]) -> Result<()> {
    let mut seen: HashMap<String, &String> = HashMap::new();
    for input in inputs {
        let symbol = symbol_name(Path::new(input));
        if let Some(first) = seen.insert(symbol.clone(), input) {
            return Err(Error::SymbolCollision {
                symbol,
                first: dir.join(first),
                second: dir.join(input),
            });
        }
    }
    Ok(())
}

fn convert_directory(
    fs: &mut impl Filesystem,
    dir: &Path,
    format: Format,
    size: u32,
    report: &mut Report,
) -> Result<()> {
    let mut inputs: Vec<String> = fs.list(dir)?.into_iter().filter(|n| is_image(n)).collect();
    inputs.sort();
    check_symbols(dir, &inputs)?;

    let mut headers = Vec::with_capacity(inputs.len());
    for input in &inputs {
        info!("Converting {input}");
        let output = convert_file(fs, &dir.join(input), format, size)?;
        headers.push(
            Path::new(input)
                .with_extension(HEADER_EXTENSION)
                .to_string_lossy()
                .into_owned(),
        );
        report.headers.push(output);
    }

    let aggregate = dir.join(format.aggregate_name());
    fs.write(&aggregate, &render_aggregate(&headers))?;
    info!("Wrote {} including {} headers", aggregate.display(), headers.len());
    report.aggregates.push(aggregate);
    Ok(())
}
