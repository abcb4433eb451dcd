use std::{path::PathBuf, process::ExitCode};

use argh::FromArgs;
use log::{error, info};
use sandpanel_core::{
    batch::{self, Config, DEFAULT_SIZE, Job, Target},
    Result,
};

use crate::std_fs::StdFilesystem;

mod std_fs;

#[derive(FromArgs, Debug)]
/// Convert PNG files to C headers for the particle simulation
struct Args {
    /// width and height every image must have
    #[argh(option, default = "DEFAULT_SIZE")]
    size: u32,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Command {
    Stages(StagesArgs),
    Gol(GolArgs),
    Auto(AutoArgs),
}

#[derive(FromArgs, Debug)]
/// Compile stages
#[argh(subcommand, name = "stages")]
struct StagesArgs {
    /// gamma-correct colors for the LED panel
    #[argh(switch)]
    gamma: bool,

    /// convert every png in this directory
    #[argh(option)]
    directory: Option<PathBuf>,

    /// convert a single png
    #[argh(option)]
    file: Option<PathBuf>,
}

#[derive(FromArgs, Debug)]
/// Compile Game of Life initial universes
#[argh(subcommand, name = "gol")]
struct GolArgs {
    /// convert every png in this directory
    #[argh(option)]
    directory: Option<PathBuf>,

    /// convert a single png
    #[argh(option)]
    file: Option<PathBuf>,
}

#[derive(FromArgs, Debug)]
/// Compile everything from images/ and gol/, must be run next to particlesim.cpp
#[argh(subcommand, name = "auto")]
struct AutoArgs {}

impl Args {
    fn into_config(self) -> Result<Config> {
        let job = match self.command {
            Command::Stages(args) => Job::Stages {
                target: Target::from_options(args.directory, args.file)?,
                gamma: args.gamma,
            },
            Command::Gol(args) => Job::Gol {
                target: Target::from_options(args.directory, args.file)?,
            },
            Command::Auto(_) => Job::Auto,
        };
        Ok(Config {
            size: self.size,
            job,
        })
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let config = match args.into_config() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return ExitCode::from(2);
        }
    };

    let mut fs = StdFilesystem::new_with_base_path(".".into());
    match batch::run(&mut fs, &config) {
        Ok(report) => {
            info!(
                "Generated {} headers and {} aggregate headers",
                report.headers.len(),
                report.aggregates.len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandpanel_core::Error;

    fn parse(args: &[&str]) -> Result<Config> {
        Args::from_args(&["png2header"], args)
            .expect("arguments should parse")
            .into_config()
    }

    #[test]
    fn stages_directory_with_gamma() {
        assert_eq!(
            parse(&["stages", "--directory", "images", "--gamma"]),
            Ok(Config {
                size: 32,
                job: Job::Stages {
                    target: Target::Directory("images".into()),
                    gamma: true
                }
            })
        );
    }

    #[test]
    fn size_applies_to_gol() {
        assert_eq!(
            parse(&["--size", "16", "gol", "--file", "gol/glider.png"]),
            Ok(Config {
                size: 16,
                job: Job::Gol {
                    target: Target::File("gol/glider.png".into())
                }
            })
        );
    }

    #[test]
    fn auto_takes_no_target() {
        assert_eq!(
            parse(&["auto"]),
            Ok(Config {
                size: 32,
                job: Job::Auto
            })
        );
    }

    #[test]
    fn target_options_are_exclusive() {
        assert!(matches!(
            parse(&["stages", "--directory", "images", "--file", "a.png"]),
            Err(Error::InvalidArguments(_))
        ));
        assert!(matches!(parse(&["gol"]), Err(Error::InvalidArguments(_))));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Args::from_args(&["png2header"], &[]).is_err());
    }
}
