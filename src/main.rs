mod constants;
mod coord;
mod data;
mod errors;
mod math;
mod util;


extern crate argparse;

use argparse::{ArgumentParser, Store, StoreTrue};
use coord::TransformMatrix;
use data::{Args, Config};
use errors::Result;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;

fn main() {
    // Arguments
    let mut args: Args = Args::new();
    // Parse
    {
        // this block limits scope of borrows by ap.refer() method
        let mut ap = ArgumentParser::new();
        ap.set_description(
            "Compute the FRAME3DD local coordinate transformation of a 3D frame element and apply it to a point.",
        );
        ap.add_option(
            &["-v", "--version"],
            argparse::Print(env!("CARGO_PKG_VERSION").to_string()),
            "Print version information",
        );
        ap.refer(&mut args.p1).add_option(
            &["--p1"],
            Store,
            "Start node of the element, as 'x,y,z'. Defaults to 0,0,0",
        );
        ap.refer(&mut args.p2).add_option(
            &["--p2"],
            Store,
            "End node of the element, as 'x,y,z'. Defaults to 0,0,5",
        );
        ap.refer(&mut args.roll).add_option(
            &["-r", "--roll"],
            Store,
            "Roll angle about the element axis, in radians. Defaults to pi/2",
        );
        ap.refer(&mut args.roll_deg).add_option(
            &["--rolldeg"],
            Store,
            "Roll angle about the element axis, in degrees. If present, --roll is ignored",
        );
        ap.refer(&mut args.point).add_option(
            &["-p", "--point"],
            Store,
            "Point to transform, as 'x,y,z'. Defaults to 1,0,0",
        );
        ap.refer(&mut args.tolerance).add_option(
            &["-t", "--tolerance"],
            Store,
            "Elements with |Cz| >= 1 - tolerance are treated as vertical. Defaults to 0 (exact test)",
        );
        ap.refer(&mut args.print_matrix).add_option(
            &["-m", "--printmatrix"],
            StoreTrue,
            "Also print the transformation matrix",
        );
        ap.refer(&mut args.debug).add_option(
            &["-d", "--debug"],
            StoreTrue,
            "Enable debug logging",
        );
        ap.parse_args_or_exit();
    }

    init_logger(args.debug);

    match Config::from_args(&args).and_then(|config| run(&config)) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(config: &Config) -> Result<()> {
    print!("{}", render(config)?);
    Ok(())
}

/**
 * Everything that goes to stdout for the given
 * configuration: the matrix if requested, then
 * the transformed point line
 **/
fn render(config: &Config) -> Result<String> {
    log::debug!("{:?}", config);
    let a = TransformMatrix::with_tolerance(&config.p1, &config.p2, config.roll, config.tolerance)?;
    let [x, y, z] = a.local_axes();
    log::debug!("Local axes: x = {}, y = {}, z = {}", x, y, z);
    let mut out = String::new();
    if config.print_matrix {
        out.push_str(&a.to_string());
    }
    out.push_str(&a.transform_message(&config.point));
    out.push('\n');
    Ok(out)
}

/**
 * Logs go to stderr, stdout only carries
 * the results
 **/
fn init_logger(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level));
    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Error initializing logger: {}", e);
            }
        }
        Err(e) => eprintln!("Error configuring logger: {}", e),
    }
}
