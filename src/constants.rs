use std::f64::consts::FRAC_PI_2;

//
// DEMO ELEMENT
//
pub const DEFAULT_P1: [f64; 3] = [0.0, 0.0, 0.0];
pub const DEFAULT_P2: [f64; 3] = [0.0, 0.0, 5.0];
pub const DEFAULT_ROLL: f64 = FRAC_PI_2;
pub const DEFAULT_POINT: [f64; 3] = [1.0, 0.0, 0.0];

//
// VERTICAL DETECTION
//
// Zero reproduces the exact |Cz| == 1 test of FRAME3DD.
pub const DEFAULT_VERTICAL_TOLERANCE: f64 = 0.0;
// Larger tolerances would snap visibly tilted elements to vertical
pub const MAX_VERTICAL_TOLERANCE: f64 = 1.0e-3;
// General-branch elements closer than this to vertical get a warning
pub const NEAR_VERTICAL_WARN: f64 = 1.0e-9;

//
// OUTPUT
//
// Significant digits, same as a default C++ output stream
pub const PRINT_PRECISION: usize = 6;
