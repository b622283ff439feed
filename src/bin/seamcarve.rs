// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{value_t, App, Arg, ArgMatches};
use failure::Error;
use log::warn;
use seamcarve::diagnostics::{draw_seam, energy_to_image};
use seamcarve::{codec, CarveObserver, CostField, CostModelKind, PixelBuffer, SeamCarver, SeamPath};
use std::fs;
use std::path::PathBuf;
use std::process;

struct Options {
    input: PathBuf,
    output: PathBuf,
    iterations: u32,
    model: CostModelKind,
    energy: Option<PathBuf>,
    seams: Option<PathBuf>,
}

impl Options {
    fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        Ok(Options {
            input: PathBuf::from(matches.value_of_os("input").unwrap_or_default()),
            output: PathBuf::from(matches.value_of_os("output").unwrap_or_default()),
            iterations: value_t!(matches, "iterations", u32)?,
            model: value_t!(matches, "model", CostModelKind)?,
            energy: matches.value_of_os("energy").map(PathBuf::from),
            seams: matches.value_of_os("seams").map(PathBuf::from),
        })
    }
}

fn is_count(value: String) -> Result<(), String> {
    value
        .parse::<u32>()
        .map(|_| ())
        .map_err(|_| format!("'{}' is not a seam count", value))
}

fn parse_args() -> Result<Options, Error> {
    let matches = App::new("seamcarve")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Narrow an image by removing its least noticeable seams")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help(
                    "Where to write the carved image; the format follows its \
                     extension, so use .png to keep every pixel exact",
                )
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("iterations")
                .short("n")
                .long("iterations")
                .value_name("N")
                .help("How many seams (columns) to remove")
                .default_value("1")
                .validator(is_count),
        )
        .arg(
            Arg::with_name("model")
                .short("m")
                .long("model")
                .value_name("MODEL")
                .help("How to price pixels")
                .possible_values(&["gradient", "forward"])
                .default_value("gradient"),
        )
        .arg(
            Arg::with_name("energy")
                .short("e")
                .long("energy")
                .value_name("FILE")
                .help("Write a heatmap of the original image's cost field"),
        )
        .arg(
            Arg::with_name("seams")
                .short("s")
                .long("seams")
                .value_name("DIR")
                .help("Write every removed seam, drawn over its image, into DIR"),
        )
        .get_matches();

    Options::from_matches(&matches)
}

// Writes the carver's intermediate products to disk.  A picture that
// cannot be written is not a reason to abandon the carve.
struct FileDiagnostics {
    energy: Option<PathBuf>,
    seams: Option<PathBuf>,
}

impl CarveObserver for FileDiagnostics {
    fn cost_field(&mut self, field: &CostField) {
        if let Some(path) = &self.energy {
            if let Err(e) = codec::encode_gray(&energy_to_image(field), path) {
                warn!("Unable to write the cost field: {}", e);
            }
        }
    }

    fn seam(&mut self, iteration: u32, image: &PixelBuffer, seam: &SeamPath) {
        if let Some(dir) = &self.seams {
            // Always PNG, so the seam stays crisp.
            let path = dir.join(format!("seam-{:04}.png", iteration));
            if let Err(e) = codec::encode(&draw_seam(image, seam), &path) {
                warn!("Unable to write seam {}: {}", iteration, e);
            }
        }
    }
}

fn run(options: Options) -> Result<(), Error> {
    if let Some(dir) = &options.seams {
        fs::create_dir_all(dir)?;
    }

    let image = codec::decode(&options.input)?;
    let mut diagnostics = FileDiagnostics {
        energy: options.energy,
        seams: options.seams,
    };
    let carved =
        SeamCarver::new(options.model).carve_with(image, options.iterations, &mut diagnostics)?;
    codec::encode(&carved, &options.output)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = parse_args().and_then(run) {
        eprintln!("seamcarve: {}", err);
        for cause in err.iter_causes() {
            eprintln!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}
