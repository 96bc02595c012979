use super::vals::XKMPER;
use super::*;
use crate::tle::Tle;
use assert_approx_eq::assert_approx_eq;

// Spacetrack Report #3 near-earth verification case
const TLE1: &str = "TEST SAT SGP 001
1 88888U 88888A   80275.98708465  .00073094  13844-3  66816-4 0  5559
2 88888  72.8435 115.9689 0086731  52.6988 110.5714 16.05824518   103";

struct DataSet {
    t: f64,
    x: f64,
    y: f64,
    z: f64,
    vx: f64,
    vy: f64,
    vz: f64,
}

const DATA1: [DataSet; 5] = [
    DataSet {
        t: 0.0,
        x: 2328.97048951,
        y: -5995.22076416,
        z: 1719.97067261,
        vx: 2.91207230,
        vy: -0.98341546,
        vz: -7.09081703,
    },
    DataSet {
        t: 360.0,
        x: 2456.10705566,
        y: -6071.93853760,
        z: 1222.89727783,
        vx: 2.67938992,
        vy: -0.44829041,
        vz: -7.22879231,
    },
    DataSet {
        t: 720.0,
        x: 2567.56195068,
        y: -6112.50384522,
        z: 713.96397400,
        vx: 2.44024599,
        vy: 0.09810869,
        vz: -7.31995916,
    },
    DataSet {
        t: 1080.0,
        x: 2663.09078980,
        y: -6115.48229980,
        z: 196.39640427,
        vx: 2.19611958,
        vy: 0.65241995,
        vz: -7.36282432,
    },
    DataSet {
        t: 1440.0,
        x: 2742.55133057,
        y: -6079.67144775,
        z: -326.38095856,
        vx: 1.94850229,
        vy: 1.21106251,
        vz: -7.35619372,
    },
];

#[test]
fn test_verification_vectors() {
    let orbit = Orbit::new(Tle::parse(TLE1).unwrap());

    for DataSet {
        t,
        x,
        y,
        z,
        vx,
        vy,
        vz,
    } in &DATA1
    {
        let state = orbit.state_at(*t);
        assert_approx_eq!(state.position.x, *x, 0.5);
        assert_approx_eq!(state.position.y, *y, 0.5);
        assert_approx_eq!(state.position.z, *z, 0.5);
        assert_approx_eq!(state.velocity.x, *vx, 0.5);
        assert_approx_eq!(state.velocity.y, *vy, 0.5);
        assert_approx_eq!(state.velocity.z, *vz, 0.5);
    }
}

#[test]
fn test_state_is_pure() {
    let orbit = Orbit::new(Tle::parse(TLE1).unwrap());

    let first = orbit.state_at(360.0);
    let _detour = orbit.state_at(0.0);
    let second = orbit.state_at(360.0);

    assert_eq!(first.position.x.to_bits(), second.position.x.to_bits());
    assert_eq!(first.position.y.to_bits(), second.position.y.to_bits());
    assert_eq!(first.position.z.to_bits(), second.position.z.to_bits());
    assert_eq!(first.velocity.x.to_bits(), second.velocity.x.to_bits());
    assert_eq!(first.velocity.y.to_bits(), second.velocity.y.to_bits());
    assert_eq!(first.velocity.z.to_bits(), second.velocity.z.to_bits());
    assert_eq!(first.period.to_bits(), second.period.to_bits());
    assert_eq!(first.speed.to_bits(), second.speed.to_bits());
}

#[test]
fn test_initialization_deterministic() {
    let tle = Tle::parse(TLE1).unwrap();
    let a = Orbit::new(tle.clone());
    let b = Orbit::new(tle);
    let sa = a.state_at(720.0);
    let sb = b.state_at(720.0);
    assert_eq!(sa.position.x.to_bits(), sb.position.x.to_bits());
    assert_eq!(sa.velocity.z.to_bits(), sb.velocity.z.to_bits());
}

#[test]
fn test_negative_tsince_is_valid() {
    let orbit = Orbit::new(Tle::parse(TLE1).unwrap());
    let state = orbit.state_at(-90.0);
    let r = state.position.magnitude();
    assert!(r.is_finite());
    assert!(r > XKMPER, "radius {} km below the surface", r);
}

#[test]
fn test_epoch_radius_within_orbit_band() {
    // At tsince 0 the radius must sit between perigee and apogee of the
    // input elements, up to the short-period corrections
    let tle = Tle::parse(TLE1).unwrap();
    let (e, n) = (tle.eccentricity, tle.mean_motion);
    let orbit = Orbit::new(tle);
    let state = orbit.state_at(0.0);
    let r = state.position.magnitude();

    // Semimajor axis from Kepler's third law, in km
    let n_rad_s = n * std::f64::consts::TAU / 86_400.0;
    let a = (vals::XMU / (n_rad_s * n_rad_s)).cbrt();
    assert!(r > a * (1.0 - e) - 25.0, "radius {} below perigee band", r);
    assert!(r < a * (1.0 + e) + 25.0, "radius {} above apogee band", r);
}

#[test]
fn test_period_matches_mean_motion() {
    let tle = Tle::parse(TLE1).unwrap();
    let revs_per_day = tle.mean_motion;
    let orbit = Orbit::new(tle);
    let period = orbit.state_at(0.0).period;
    let kepler_period = 86_400.0 / revs_per_day;
    // Within a percent; the period is computed from the recovered
    // semimajor axis, not the osculating mean motion
    assert!(
        (period - kepler_period).abs() / kepler_period < 0.01,
        "period {} vs {}",
        period,
        kepler_period
    );
}
