extern crate nalgebra as na;

use crate::constants;
use crate::errors::{GeometryError, Result};
use crate::util;

use na::Vector3;
use std::fmt;
use std::str::FromStr;

/**
 * A point (or vector) in the global Cartesian
 * frame. Plain value, no identity beyond its
 * coordinates.
 **/
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Point {
        Point { x, y, z }
    }

    pub fn from_array(c: [f64; 3]) -> Point {
        Point::new(c[0], c[1], c[2])
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn from_vector(v: &Vector3<f64>) -> Point {
        Point::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[ {}, {}, {} ]",
            util::format_general(self.x, constants::PRINT_PRECISION),
            util::format_general(self.y, constants::PRINT_PRECISION),
            util::format_general(self.z, constants::PRINT_PRECISION)
        )
    }
}

/**
 * Parses "x,y,z". Whitespace around the
 * components is ignored.
 **/
impl FromStr for Point {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        let tokens: Vec<&str> = s.split(',').map(|t| t.trim()).collect();
        if tokens.len() != 3 {
            return Err(GeometryError::InvalidPoint(s.to_string()));
        }
        let mut c = [0.0; 3];
        for (i, token) in tokens.iter().enumerate() {
            c[i] = token
                .parse::<f64>()
                .map_err(|_| GeometryError::InvalidPoint(s.to_string()))?;
        }
        Ok(Point::from_array(c))
    }
}

/**
 * Raw command line arguments, as filled in
 * by the argument parser
 **/
pub struct Args {
    pub p1: String,
    pub p2: String,
    pub point: String,
    pub roll: f64,
    // roll in degrees, overrides roll when not NaN.
    pub roll_deg: f64,
    pub tolerance: f64,
    pub print_matrix: bool,
    pub debug: bool,
}

impl Args {
    pub fn new() -> Args {
        Args {
            p1: join(&constants::DEFAULT_P1),
            p2: join(&constants::DEFAULT_P2),
            point: join(&constants::DEFAULT_POINT),
            roll: constants::DEFAULT_ROLL,
            roll_deg: f64::NAN,
            tolerance: constants::DEFAULT_VERTICAL_TOLERANCE,
            print_matrix: false,
            debug: false,
        }
    }
}

fn join(c: &[f64; 3]) -> String {
    format!("{},{},{}", c[0], c[1], c[2])
}

/**
 * Holds the program configuration, which
 * corresponds to the parsed CLI arguments
 **/
pub struct Config {
    pub p1: Point,
    pub p2: Point,
    pub point: Point,
    // radians.
    pub roll: f64,
    // |Cz| >= 1 - tolerance is treated as vertical.
    pub tolerance: f64,
    pub print_matrix: bool,
    pub debug: bool,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Config> {
        let roll = if args.roll_deg.is_nan() {
            args.roll
        } else {
            args.roll_deg.to_radians()
        };
        Ok(Config {
            p1: args.p1.parse()?,
            p2: args.p2.parse()?,
            point: args.point.parse()?,
            roll,
            tolerance: args.tolerance,
            print_matrix: args.print_matrix,
            debug: args.debug,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("p1", &self.p1)
            .field("p2", &self.p2)
            .field("point", &self.point)
            .field("roll", &self.roll)
            .field("tolerance", &self.tolerance)
            .field("print_matrix", &self.print_matrix)
            .field("debug", &self.debug)
            .finish()
    }
}
