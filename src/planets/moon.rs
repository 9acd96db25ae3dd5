use nalgebra::Vector3;

use super::PlanetTheory;
use crate::bodies::Body;
use crate::constants::RADEG;
use crate::mean_elements::EvalContext;
use crate::ref_system::{mod360, RefFrame, SphericalCoord};

/// Geocentric longitude of the Moon.
///
/// Only the longitude series is implemented, the distance and the latitude are left to 0.
pub struct Moon;

impl PlanetTheory for Moon {
    fn body(&self) -> Body {
        Body::Moon
    }

    fn native_frame(&self) -> RefFrame {
        RefFrame::GeocentricEcliptic
    }

    fn position(&self, ctx: &EvalContext, _earth: &Vector3<f64>) -> SphericalCoord {
        SphericalCoord::from_longitude(moon_longitude(ctx))
    }
}

fn moon_longitude(ctx: &EvalContext) -> f64 {
    let (t, t2, t3) = (ctx.t, ctx.t2, ctx.t3);

    // mean longitude (degrees), then mean anomaly of the Sun, mean anomaly of the Moon,
    // mean elongation, argument of latitude and node (radians)
    let mut l1 = 270.434164 + 481267.8831 * t - 0.001133 * t2 + 1.9E-06 * t3;
    let mut m = (358.475833 + 35999.0498 * t - 0.00015 * t2 - 3.3E-06 * t3) * RADEG;
    let mut mm = (296.104608 + 477198.8491 * t + 0.009192 * t2 - 0.0000144 * t3) * RADEG;
    let mut d = (350.737486 + 445267.1142 * t - 0.001436 * t2 + 1.9E-06 * t3) * RADEG;
    let mut f = (11.250889 + 483202.0251 * t - 0.003211 * t2 - 3.0E-07 * t3) * RADEG;
    let nl = (259.183275 - 1934.142 * t + 0.002078 * t2 + 2.2E-06 * t3) * RADEG;

    // additive terms of long period
    let s1 = ((51.2 + 20.2 * t) * RADEG).sin();
    let s2 = ((346.56 + 132.87 * t - 0.0091731 * t2) * RADEG).sin();

    l1 += (0.000233 * s1 + 0.003964 * s2) * RADEG;
    m -= (0.001778 * s1) * RADEG;
    mm += (0.000817 * s1 + 0.003964 * s2) * RADEG;
    d += (0.002011 * s1 + 0.003964 * s2) * RADEG;
    f += (0.003964 * s2) * RADEG;

    // node terms
    l1 += 0.001964 * nl.sin();
    mm += (0.002541 * nl.sin()) * RADEG;
    d += (0.001964 * nl.sin()) * RADEG;
    f -= ((0.024691 * nl.sin()) - (0.004328 * (nl + (275.05 - 2.3 * t) * RADEG).sin())) * RADEG;

    let e = 1.0 - 0.002495 * t - 7.52E-06 * t2;

    l1 = l1 + 6.28875 * mm.sin()
        + 1.274018 * (2.0 * d - mm).sin()
        + 0.658309 * (2.0 * d).sin()
        + 0.213616 * (2.0 * mm).sin()
        - 0.185596 * m.sin() * e
        - 0.114336 * (2.0 * f).sin()
        + 0.058793 * (2.0 * d - 2.0 * mm).sin()
        + 0.057212 * (2.0 * d - m - mm).sin() * e
        + 0.05332 * (2.0 * d + mm).sin()
        + 0.045874 * (2.0 * d - m).sin() * e
        + 0.041024 * (mm - m).sin() * e
        - 0.034718 * d.sin()
        - 0.030465 * (m + mm).sin() * e
        + 0.015326 * (2.0 * d - 2.0 * f).sin()
        - 0.012528 * (2.0 * f + mm).sin()
        - 0.01098 * (2.0 * f - mm).sin()
        + 0.010674 * (4.0 * d - mm).sin()
        + 0.010034 * (3.0 * mm).sin()
        + 0.008548 * (4.0 * d - 2.0 * mm).sin()
        - 0.00791 * (m - mm + 2.0 * d).sin() * e
        - 0.006783 * (2.0 * d + m).sin() * e
        + 0.005162 * (mm - d).sin()
        + 0.005 * (m + d).sin() * e
        + 0.004049 * (mm - m + 2.0 * d).sin() * e
        + 0.003996 * (2.0 * mm + 2.0 * d).sin()
        + 0.003862 * (4.0 * d).sin()
        + 0.003665 * (2.0 * d - 3.0 * mm).sin()
        + 0.002695 * (2.0 * mm - m).sin() * e
        + 0.002602 * (mm - 2.0 * f - 2.0 * d).sin()
        + 0.002396 * (2.0 * d - m - 2.0 * mm).sin() * e
        - 0.002349 * (mm + d).sin()
        + 0.002249 * (2.0 * d - 2.0 * m).sin() * e * e
        - 0.002125 * (2.0 * mm + m).sin() * e
        - 0.002079 * (2.0 * m).sin() * e * e
        + 0.002059 * (2.0 * d - mm - 2.0 * m).sin() * e * e
        - 0.001773 * (mm + 2.0 * d - 2.0 * f).sin()
        - 0.001595 * (2.0 * f + 2.0 * d).sin()
        + 0.00122 * (4.0 * d - m - mm).sin() * e
        - 0.00111 * (2.0 * mm + 2.0 * f).sin()
        + 0.000892 * (mm - 3.0 * d).sin()
        - 0.000811 * (m + mm + 2.0 * d).sin() * e
        + 0.000761 * (4.0 * d - m - 2.0 * mm).sin() * e
        + 0.000717 * (mm - 2.0 * m).sin() * e * e
        + 0.000704 * (mm - 2.0 * m - 2.0 * d).sin() * e * e
        + 0.000693 * (m - 2.0 * mm + 2.0 * d).sin() * e
        + 0.000598 * (2.0 * d - m - 2.0 * f).sin() * e
        + 0.00055 * (mm + 4.0 * d).sin()
        + 0.000538 * (4.0 * mm).sin()
        + 0.000521 * (4.0 * d - m).sin() * e
        + 0.000486 * (2.0 * mm - d).sin();

    mod360(l1)
}

#[cfg(test)]
mod moon_test {
    use super::*;
    use crate::planets::planets_test::ctx_2000;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_moon_2000() {
        let pos = Moon.position(&ctx_2000(), &Vector3::zeros());

        assert_abs_diff_eq!(pos.lon, 217.2837415, epsilon = 1e-6);
        assert_eq!(pos.r, 0.0);
        assert_eq!(pos.lat, 0.0);
    }

    #[test]
    fn test_moon_daily_motion() {
        // the Moon moves between 11.5° and 15.5° a day
        let mut jd = 2451544.5;
        for _ in 0..60 {
            let l0 = moon_longitude(&EvalContext::new(jd));
            let l1 = moon_longitude(&EvalContext::new(jd + 1.0));
            let motion = mod360(l1 - l0);
            assert!(motion > 11.5 && motion < 15.5, "jd = {jd}, motion = {motion}");
            jd += 1.0;
        }
    }
}
