extern crate nalgebra as na;

use crate::constants;
use crate::data::Point;
use crate::errors::{GeometryError, Result};
use crate::math;
use crate::util;

use na::Matrix3;
use std::fmt;

/**
 * Computes the nine coefficients of the FRAME3DD
 * global-to-local rotation of the element p1->p2
 * rolled by `roll` radians about its own axis.
 *
 * Coefficients are returned row-major, t1..t9.
 * Elements with |Cz| >= 1 - tolerance are treated
 * as parallel to the global Z axis. A zero tolerance
 * gives the exact test used by FRAME3DD.
 **/
pub fn from_frame3dd(p1: &Point, p2: &Point, roll: f64, tolerance: f64) -> Result<[f64; 9]> {
    if !roll.is_finite() {
        return Err(GeometryError::InvalidRollAngle(roll));
    }
    if !(0.0..=constants::MAX_VERTICAL_TOLERANCE).contains(&tolerance) {
        return Err(GeometryError::InvalidTolerance(tolerance));
    }
    let dc = math::direction_cosines(p1, p2)?;
    let (cx, cy, cz) = (dc.cx, dc.cy, dc.cz);
    log::debug!(
        "Element {} -> {}: L = {}, C = ({}, {}, {})",
        p1,
        p2,
        dc.length,
        cx,
        cy,
        cz
    );

    let cp = roll.cos();
    let sp = roll.sin();

    let mut t = [0.0; 9];
    if cz.abs() >= 1.0 - tolerance {
        // Vertical element, the general form divides by zero.
        // Cz is only off +/-1 when a tolerance is in use.
        if cx != 0.0 || cy != 0.0 {
            log::warn!(
                "Element {} -> {} snapped to vertical, discarding Cx = {}, Cy = {}",
                p1,
                p2,
                cx,
                cy
            );
        }
        let cz = cz.signum();
        log::debug!("Vertical element, using degenerate form");
        t[2] = cz;
        t[3] = -cz * sp;
        t[4] = cp;
        t[6] = -cz * cp;
        t[7] = -sp;
    } else {
        if 1.0 - cz.abs() < constants::NEAR_VERTICAL_WARN {
            log::warn!(
                "Element {} -> {} is nearly vertical (|Cz| = {}), coefficients may be unstable",
                p1,
                p2,
                cz.abs()
            );
        }
        let den = (1.0 - cz * cz).sqrt();

        t[0] = cx;
        t[1] = cy;
        t[2] = cz;

        t[3] = (-cx * cz * sp - cy * cp) / den;
        t[4] = (-cy * cz * sp + cx * cp) / den;
        t[5] = sp * den;

        t[6] = (-cx * cz * cp + cy * sp) / den;
        t[7] = (-cy * cz * cp - cx * sp) / den;
        t[8] = cp * den;
    }
    Ok(t)
}

/**
 * Rotation from global to local element axes.
 * Rows are the local x, y and z axes expressed
 * in global coordinates.
 **/
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransformMatrix {
    mat: Matrix3<f64>,
}

impl TransformMatrix {
    /// Exact vertical test, as in FRAME3DD.
    #[allow(dead_code)]
    pub fn new(p1: &Point, p2: &Point, roll: f64) -> Result<Self> {
        TransformMatrix::with_tolerance(p1, p2, roll, constants::DEFAULT_VERTICAL_TOLERANCE)
    }

    pub fn with_tolerance(p1: &Point, p2: &Point, roll: f64, tolerance: f64) -> Result<Self> {
        let t = from_frame3dd(p1, p2, roll, tolerance)?;
        Ok(TransformMatrix::from_coefficients(t))
    }

    /**
     * Packs t1..t9 row-major
     **/
    pub fn from_coefficients(t: [f64; 9]) -> Self {
        TransformMatrix {
            mat: Matrix3::from_row_slice(&t),
        }
    }

    #[allow(dead_code)]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.mat[(row, col)]
    }

    #[allow(dead_code)]
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.mat
    }

    /// Global to local, M p.
    pub fn apply(&self, p: &Point) -> Point {
        Point::from_vector(&(self.mat * p.to_vector()))
    }

    /// Local to global. The matrix is orthonormal, so the transpose is the inverse.
    #[allow(dead_code)]
    pub fn apply_inverse(&self, p: &Point) -> Point {
        Point::from_vector(&(self.mat.transpose() * p.to_vector()))
    }

    pub fn local_axes(&self) -> [Point; 3] {
        [0, 1, 2].map(|i| Point::new(self.mat[(i, 0)], self.mat[(i, 1)], self.mat[(i, 2)]))
    }

    pub fn transform_message(&self, p: &Point) -> String {
        format!("Transformed {} to {}", p, self.apply(p))
    }
}

/**
 * One row per line, two spaces after each entry
 **/
impl fmt::Display for TransformMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..3 {
            for j in 0..3 {
                write!(
                    f,
                    "{}  ",
                    util::format_general(self.mat[(i, j)], constants::PRINT_PRECISION)
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
