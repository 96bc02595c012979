//! Near-earth SGP4 analytic propagation.
//!
//! `Orbit::new` derives the perturbation coefficients from a decoded
//! element set once; `propagate` is a closed-form evaluation at any
//! timestamp and keeps no history between calls.

pub(crate) mod vals;

#[cfg(test)]
mod tests;

use std::f64::consts::TAU;

use vals::*;

use crate::coords::{EarthCenteredInertial, EciVector};
use crate::tle::Tle;

/// Frozen SGP4 propagator state for one element set.
///
/// Every field is fixed at initialization; propagation works on local
/// temporaries only, so a single `Orbit` can be evaluated from any number
/// of threads at arbitrary timestamps.
#[derive(Debug, Clone)]
pub struct Orbit {
    tle: Tle,

    /* Orbital elements in radians and radians per minute */
    xincl: f64,
    xnodeo: f64,
    eo: f64,
    omegao: f64,
    xmo: f64,
    bstar: f64,

    /* Truncate the drag equations for perigee below 220 km */
    simple: bool,

    /* Geometry */
    cosio: f64,
    sinio: f64,
    x3thm1: f64,
    x1mth2: f64,
    x7thm1: f64,
    eta: f64,

    /* Recovered mean motion and semimajor axis */
    xnodp: f64,
    aodp: f64,

    /* Secular rates */
    xmdot: f64,
    omgdot: f64,
    xnodot: f64,

    /* Drag coefficients */
    c1: f64,
    c4: f64,
    c5: f64,
    d2: f64,
    d3: f64,
    d4: f64,

    /* Periodic and time-power coefficients */
    omgcof: f64,
    xmcof: f64,
    xnodcf: f64,
    t2cof: f64,
    t3cof: f64,
    t4cof: f64,
    t5cof: f64,
    xlcof: f64,
    aycof: f64,
    delmo: f64,
    sinmo: f64,
}

/// One propagation result: inertial state plus the derived scalars.
#[derive(Debug, Clone, Copy)]
pub struct State {
    /// Position in km
    pub position: EarthCenteredInertial,
    /// Velocity in km/s
    pub velocity: EciVector,
    /// Orbital period in seconds
    pub period: f64,
    /// Scalar speed in km/s
    pub speed: f64,
}

impl Orbit {
    /// Initializes the propagator from a decoded element set.
    ///
    /// Physically invalid elements (eccentricity >= 1) are not guarded;
    /// they produce non-finite output downstream, matching the reference
    /// model.
    pub fn new(tle: Tle) -> Orbit {
        let xincl = tle.inclination.to_radians();
        let xnodeo = tle.right_ascension.to_radians();
        let eo = tle.eccentricity;
        let omegao = tle.argument_of_perigee.to_radians();
        let xmo = tle.mean_anomaly.to_radians();
        let xno = tle.mean_motion * TAU / XMNPDA;
        let bstar = tle.bstar;

        // Recover original mean motion (xnodp) and semimajor axis (aodp)
        // from the osculating input elements
        let a1 = (XKE / xno).powf(TOTHRD);
        let cosio = xincl.cos();
        let theta2 = cosio * cosio;
        let x3thm1 = 3.0 * theta2 - 1.0;
        let eosq = eo * eo;
        let betao2 = 1.0 - eosq;
        let betao = betao2.sqrt();
        let del1 = 1.5 * CK2 * x3thm1 / (a1 * a1 * betao * betao2);
        let ao = a1 * (1.0 - del1 * (1.0 / 3.0 + del1 * (1.0 + 134.0 / 81.0 * del1)));
        let delo = 1.5 * CK2 * x3thm1 / (ao * ao * betao * betao2);
        let xnodp = xno / (1.0 + delo);
        let aodp = ao / (1.0 - delo);

        // For perigee less than 220 km the equations are truncated to
        // linear variation in sqrt(a) and quadratic variation in mean
        // anomaly; the c3, delta omega and delta m terms are dropped
        let simple = (aodp * (1.0 - eo) / AE) < (220.0 / XKMPER + AE);

        // For perigee below 156 km the values of s and qoms2t are altered
        let mut s4 = S;
        let mut qoms24 = QOMS2T;
        let perige = (aodp * (1.0 - eo) - AE) * XKMPER;
        if perige < 156.0 {
            s4 = if perige <= 98.0 { 20.0 } else { perige - 78.0 };
            qoms24 = ((120.0 - s4) * AE / XKMPER).powi(4);
            s4 = s4 / XKMPER + AE;
        }

        let pinvsq = 1.0 / (aodp * aodp * betao2 * betao2);
        let tsi = 1.0 / (aodp - s4);
        let eta = aodp * eo * tsi;
        let etasq = eta * eta;
        let eeta = eo * eta;
        let psisq = (1.0 - etasq).abs();
        let coef = qoms24 * tsi.powi(4);
        let coef1 = coef / psisq.powf(3.5);
        let c2 = coef1
            * xnodp
            * (aodp * (1.0 + 1.5 * etasq + eeta * (4.0 + etasq))
                + 0.75 * CK2 * tsi / psisq * x3thm1 * (8.0 + 3.0 * etasq * (8.0 + etasq)));
        let c1 = bstar * c2;
        let sinio = xincl.sin();
        let a3ovk2 = -XJ3 / CK2 * AE.powi(3);
        let c3 = coef * tsi * a3ovk2 * xnodp * AE * sinio / eo;
        let x1mth2 = 1.0 - theta2;
        let c4 = 2.0
            * xnodp
            * coef1
            * aodp
            * betao2
            * (eta * (2.0 + 0.5 * etasq) + eo * (0.5 + 2.0 * etasq)
                - 2.0 * CK2 * tsi / (aodp * psisq)
                    * (-3.0 * x3thm1 * (1.0 - 2.0 * eeta + etasq * (1.5 - 0.5 * eeta))
                        + 0.75
                            * x1mth2
                            * (2.0 * etasq - eeta * (1.0 + etasq))
                            * (2.0 * omegao).cos()));
        let c5 = 2.0 * coef1 * aodp * betao2 * (1.0 + 2.75 * (etasq + eeta) + eeta * etasq);

        let theta4 = theta2 * theta2;
        let temp1 = 3.0 * CK2 * pinvsq * xnodp;
        let temp2 = temp1 * CK2 * pinvsq;
        let temp3 = 1.25 * CK4 * pinvsq * pinvsq * xnodp;
        let xmdot = xnodp
            + 0.5 * temp1 * betao * x3thm1
            + 0.0625 * temp2 * betao * (13.0 - 78.0 * theta2 + 137.0 * theta4);
        let x1m5th = 1.0 - 5.0 * theta2;
        let omgdot = -0.5 * temp1 * x1m5th
            + 0.0625 * temp2 * (7.0 - 114.0 * theta2 + 395.0 * theta4)
            + temp3 * (3.0 - 36.0 * theta2 + 49.0 * theta4);
        let xhdot1 = -temp1 * cosio;
        let xnodot = xhdot1
            + (0.5 * temp2 * (4.0 - 19.0 * theta2) + 2.0 * temp3 * (3.0 - 7.0 * theta2)) * cosio;
        let omgcof = bstar * c3 * omegao.cos();
        let xmcof = -TOTHRD * coef * bstar * AE / eeta;
        let xnodcf = 3.5 * betao2 * xhdot1 * c1;
        let t2cof = 1.5 * c1;
        let xlcof = 0.125 * a3ovk2 * sinio * (3.0 + 5.0 * cosio) / (1.0 + cosio);
        let aycof = 0.25 * a3ovk2 * sinio;
        let delmo = (1.0 + eta * xmo.cos()).powi(3);
        let sinmo = xmo.sin();
        let x7thm1 = 7.0 * theta2 - 1.0;

        let (mut d2, mut d3, mut d4) = (0.0, 0.0, 0.0);
        let (mut t3cof, mut t4cof, mut t5cof) = (0.0, 0.0, 0.0);
        if !simple {
            let c1sq = c1 * c1;
            d2 = 4.0 * aodp * tsi * c1sq;
            let temp = d2 * tsi * c1 / 3.0;
            d3 = (17.0 * aodp + s4) * temp;
            d4 = 0.5 * temp * aodp * tsi * (221.0 * aodp + 31.0 * s4) * c1;
            t3cof = d2 + 2.0 * c1sq;
            t4cof = 0.25 * (3.0 * d3 + c1 * (12.0 * d2 + 10.0 * c1sq));
            t5cof = 0.2
                * (3.0 * d4 + 12.0 * c1 * d3 + 6.0 * d2 * d2 + 15.0 * c1sq * (2.0 * d2 + c1sq));
        }

        Orbit {
            tle,
            xincl,
            xnodeo,
            eo,
            omegao,
            xmo,
            bstar,
            simple,
            cosio,
            sinio,
            x3thm1,
            x1mth2,
            x7thm1,
            eta,
            xnodp,
            aodp,
            xmdot,
            omgdot,
            xnodot,
            c1,
            c4,
            c5,
            d2,
            d3,
            d4,
            omgcof,
            xmcof,
            xnodcf,
            t2cof,
            t3cof,
            t4cof,
            t5cof,
            xlcof,
            aycof,
            delmo,
            sinmo,
        }
    }

    /// The element set this propagator was built from.
    pub fn tle(&self) -> &Tle {
        &self.tle
    }

    /// Propagates to a timestamp.
    pub fn propagate(&self, date: chrono::DateTime<chrono::Utc>) -> State {
        self.state_at(self.tle.time_since_epoch(date))
    }

    /// Propagates to `tsince` minutes past the element set epoch.
    /// Negative values (before the epoch) are valid.
    pub fn state_at(&self, tsince: f64) -> State {
        // Update for secular gravity and atmospheric drag
        let xmdf = self.xmo + self.xmdot * tsince;
        let omgadf = self.omegao + self.omgdot * tsince;
        let xnoddf = self.xnodeo + self.xnodot * tsince;
        let mut omega = omgadf;
        let mut xmp = xmdf;
        let tsq = tsince * tsince;
        let xnode = xnoddf + self.xnodcf * tsq;
        let mut tempa = 1.0 - self.c1 * tsince;
        let mut tempe = self.bstar * self.c4 * tsince;
        let mut templ = self.t2cof * tsq;
        if !self.simple {
            let delomg = self.omgcof * tsince;
            let delm = self.xmcof * ((1.0 + self.eta * xmdf.cos()).powi(3) - self.delmo);
            let temp = delomg + delm;
            xmp = xmdf + temp;
            omega = omgadf - temp;
            let tcube = tsq * tsince;
            let tfour = tsince * tcube;
            tempa = tempa - self.d2 * tsq - self.d3 * tcube - self.d4 * tfour;
            tempe += self.bstar * self.c5 * (xmp.sin() - self.sinmo);
            templ += self.t3cof * tcube + tfour * (self.t4cof + tsince * self.t5cof);
        }
        let a = self.aodp * tempa * tempa;
        let e = self.eo - tempe;
        let xl = xmp + omega + xnode + self.xnodp * templ;
        let beta = (1.0 - e * e).sqrt();
        let xn = XKE / a.powf(1.5);

        // Long period periodics
        let axn = e * omega.cos();
        let temp = 1.0 / (a * beta * beta);
        let xll = temp * self.xlcof * axn;
        let aynl = temp * self.aycof;
        let xlt = xl + xll;
        let ayn = e * omega.sin() + aynl;

        // Solve Kepler's equation by fixed-point iteration; if the
        // tolerance is not met within 10 passes the last estimate is used
        let capu = (xlt - xnode).rem_euclid(TAU);
        let mut temp2 = capu;
        let mut temp3 = 0.0;
        let mut temp4 = 0.0;
        let mut temp5 = 0.0;
        let mut temp6 = 0.0;
        let mut sinepw = 0.0;
        let mut cosepw = 0.0;
        for _ in 0..10 {
            let (sinepw_t, cosepw_t) = temp2.sin_cos();
            sinepw = sinepw_t;
            cosepw = cosepw_t;
            temp3 = axn * sinepw;
            temp4 = ayn * cosepw;
            temp5 = axn * cosepw;
            temp6 = ayn * sinepw;
            let epw = (capu - temp4 + temp3 - temp2) / (1.0 - temp5 - temp6) + temp2;
            if (epw - temp2).abs() <= E6A {
                break;
            }
            temp2 = epw;
        }

        // Short period preliminary quantities
        let ecose = temp5 + temp6;
        let esine = temp3 - temp4;
        let elsq = axn * axn + ayn * ayn;
        let temp = 1.0 - elsq;
        let pl = a * temp;
        let r = a * (1.0 - ecose);
        let temp1 = 1.0 / r;
        let rdot = XKE * a.sqrt() * esine * temp1;
        let rfdot = XKE * pl.sqrt() * temp1;
        let temp2 = a * temp1;
        let betal = temp.sqrt();
        let temp3 = 1.0 / (1.0 + betal);
        let cosu = temp2 * (cosepw - axn + ayn * esine * temp3);
        let sinu = temp2 * (sinepw - ayn - axn * esine * temp3);
        let mut u = sinu.atan2(cosu);
        if u < 0.0 {
            u += TAU;
        }
        let sin2u = 2.0 * sinu * cosu;
        let cos2u = 2.0 * cosu * cosu - 1.0;
        let temp = 1.0 / pl;
        let temp1 = CK2 * temp;
        let temp2 = temp1 * temp;

        // Update for short periodics
        let rk = r * (1.0 - 1.5 * temp2 * betal * self.x3thm1)
            + 0.5 * temp1 * self.x1mth2 * cos2u;
        let uk = u - 0.25 * temp2 * self.x7thm1 * sin2u;
        let xnodek = xnode + 1.5 * temp2 * self.cosio * sin2u;
        let xinck = self.xincl + 1.5 * temp2 * self.cosio * self.sinio * cos2u;
        let rdotk = rdot - xn * temp1 * self.x1mth2 * sin2u;
        let rfdotk = rfdot + xn * temp1 * (self.x1mth2 * cos2u + 1.5 * self.x3thm1);

        // Orientation vectors
        let (sinuk, cosuk) = uk.sin_cos();
        let (sinik, cosik) = xinck.sin_cos();
        let (sinnok, cosnok) = xnodek.sin_cos();
        let xmx = -sinnok * cosik;
        let xmy = cosnok * cosik;
        let ux = xmx * sinuk + cosnok * cosuk;
        let uy = xmy * sinuk + sinnok * cosuk;
        let uz = sinik * sinuk;
        let vx = xmx * cosuk - cosnok * sinuk;
        let vy = xmy * cosuk - sinnok * sinuk;
        let vz = sinik * cosuk;

        // Position in km, velocity in km/s
        let position = EarthCenteredInertial {
            x: rk * ux * XKMPER,
            y: rk * uy * XKMPER,
            z: rk * uz * XKMPER,
        };
        let velocity = EciVector {
            x: (rdotk * ux + rfdotk * vx) * XKMPER / 60.0,
            y: (rdotk * uy + rfdotk * vy) * XKMPER / 60.0,
            z: (rdotk * uz + rfdotk * vz) * XKMPER / 60.0,
        };

        let period = TAU * ((a * XKMPER).powi(3) / XMU).sqrt();
        let speed = velocity.magnitude();

        State {
            position,
            velocity,
            period,
            speed,
        }
    }
}
