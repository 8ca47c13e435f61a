extern crate clap;
extern crate image;

use clap::{App, Arg};
use seamcut::{energy_map, energy_to_image, Raster, SeamCarver};

fn main() -> Result<(), failure::Error> {
    let matches = App::new("seamcut")
        .version("0.1.0")
        .about("Content-aware image resizing")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; format follows the extension")
                .short("o")
                .long("output")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("width")
                .help("Target width in pixels, defaulting to the current width")
                .long("width")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("height")
                .help("Target height in pixels, defaulting to the current height")
                .long("height")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("energy")
                .help("Write the normalized energy map instead of carving")
                .long("energy"),
        )
        .get_matches();

    let input = matches.value_of("input").unwrap();
    let output = matches.value_of("output").unwrap();

    let decoded = image::open(input)?.to_rgb();
    let raster = Raster::from_image(&decoded)?;

    if matches.is_present("energy") {
        energy_to_image(&energy_map(&raster)).save(output)?;
        return Ok(());
    }

    let (width, height) = raster.dimensions();
    let target_width = match matches.value_of("width") {
        Some(w) => w.parse()?,
        None => width,
    };
    let target_height = match matches.value_of("height") {
        Some(h) => h.parse()?,
        None => height,
    };

    let mut carver = SeamCarver::new(raster);
    carver.carve(target_width, target_height)?;
    carver.into_image().to_image().save(output)?;
    Ok(())
}
