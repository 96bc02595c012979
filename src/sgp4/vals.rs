/** Table of constant values, WGS-84 flavored **/
pub const CK2: f64 = 5.413080E-4; /* 0.5 * J2 * ae^2 */
pub const CK4: f64 = 0.62098875E-6; /* -0.375 * J4 * ae^4 */
pub const E6A: f64 = 1.0E-6; /* Kepler convergence tolerance */
pub const QOMS2T: f64 = 1.88027916E-9; /* ((q0 - s) * ae)^4 */
pub const S: f64 = 1.01222928; /* s density parameter, earth radii */
pub const XJ3: f64 = -0.253881E-5; /* J3 harmonic */
pub const XKE: f64 = 0.743669161E-1; /* sqrt(GM) in earth-radii^1.5/min */
pub const XKMPER: f64 = 6378.137; /* Earth equatorial radius, km */
pub const XMNPDA: f64 = 1440.0; /* Minutes per day */
pub const AE: f64 = 1.0; /* Distance unit, earth radii */
pub const TOTHRD: f64 = 0.66666667; /* 2/3 */
pub const XMU: f64 = 398600.4; /* GM, km^3/s^2 */
