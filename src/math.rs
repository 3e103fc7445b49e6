extern crate nalgebra as na;

use crate::data::Point;
use crate::errors::{GeometryError, Result};

/**
 * Unit vector of an element axis, expressed
 * in the global frame
 **/
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DirectionCosines {
    pub cx: f64,
    pub cy: f64,
    pub cz: f64,
    pub length: f64,
}

/**
 * Offset p2 - p1 divided by its largest absolute
 * component, together with that component. The
 * norm of the scaled vector lies in [1, sqrt(3)],
 * so squaring it neither underflows nor overflows.
 **/
fn scaled_offset(p1: &Point, p2: &Point) -> (na::Vector3<f64>, f64) {
    let d = p2.to_vector() - p1.to_vector();
    let scale = d.amax();
    if scale == 0.0 || !scale.is_finite() {
        (d, scale)
    } else {
        (d / scale, scale)
    }
}

/**
 * Euclidean distance between the two end nodes
 * of an element
 **/
#[allow(dead_code)]
pub fn length(p1: &Point, p2: &Point) -> f64 {
    let (u, scale) = scaled_offset(p1, p2);
    if scale == 0.0 || !scale.is_finite() {
        return u.norm();
    }
    u.norm() * scale
}

/**
 * Direction cosines of the element axis going
 * from p1 to p2. Fails for coincident or non-finite
 * end nodes.
 **/
pub fn direction_cosines(p1: &Point, p2: &Point) -> Result<DirectionCosines> {
    let (u, scale) = scaled_offset(p1, p2);
    if scale == 0.0 || !scale.is_finite() {
        return Err(GeometryError::InvalidElementGeometry { p1: *p1, p2: *p2 });
    }
    let n = u.norm();
    let l = n * scale;
    if !l.is_finite() {
        return Err(GeometryError::InvalidElementGeometry { p1: *p1, p2: *p2 });
    }
    Ok(DirectionCosines {
        cx: u.x / n,
        cy: u.y / n,
        cz: u.z / n,
        length: l,
    })
}
