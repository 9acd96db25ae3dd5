use hifitime::Epoch;
use std::str::FromStr;

use crate::constants::{JulianCentury, JulianDay, DAYS_PER_CENTURY, JD1900};
use crate::ephem_errors::EphemError;

/// Parse an ISO 8601 timestamp expressed in UTC into an [`Epoch`]
///
/// Argument
/// --------
/// * `date`: a timestamp in the format `YYYY-MM-DD HH:MM:SS`; the `T` separator
///   (`YYYY-MM-DDTHH:MM:SS`) is accepted as well
///
/// Return
/// ------
/// * the corresponding UTC [`Epoch`], or [`EphemError::InvalidEpoch`] if the string cannot be parsed
pub fn parse_iso_date(date: &str) -> Result<Epoch, EphemError> {
    let trimmed = date.trim();
    let iso = if trimmed.contains('T') {
        trimmed.to_string()
    } else {
        trimmed.replacen(' ', "T", 1)
    };

    Epoch::from_str(&iso).map_err(|e| EphemError::InvalidEpoch(format!("{date} ({e})")))
}

/// Transformation from date in the format YYYY-MM-DD HH:MM:SS (UTC) to julian date (JD)
///
/// Argument
/// --------
/// * `date`: a timestamp in the format `YYYY-MM-DD HH:MM:SS`
///
/// Return
/// ------
/// * the julian day of the input date, UTC
pub fn iso_date_to_jd(date: &str) -> Result<JulianDay, EphemError> {
    Ok(parse_iso_date(date)?.to_jde_utc_days())
}

/// Transformation from julian date (JD) to a UTC [`Epoch`]
///
/// Negative julian days are rejected, the calendar back-conversion is only defined
/// from 4713 BC January 1.5 onward.
///
/// Argument
/// --------
/// * `jd`: a julian day, UTC
///
/// Return
/// ------
/// * the corresponding [`Epoch`], or [`EphemError::NegativeJulianDay`]
pub fn jd_to_epoch(jd: JulianDay) -> Result<Epoch, EphemError> {
    if jd < 0.0 {
        return Err(EphemError::NegativeJulianDay(jd));
    }
    Ok(Epoch::from_jde_utc(jd))
}

/// Number of julian centuries elapsed since 1900 January 0.5 (JD 2415020.0)
pub fn julian_centuries_since_1900(jd: JulianDay) -> JulianCentury {
    (jd - JD1900) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_iso_date_to_jd() {
        let jd = iso_date_to_jd("2000-01-01 12:00:00").unwrap();
        assert_relative_eq!(jd, 2451545.0, epsilon = 1e-9);

        let jd = iso_date_to_jd("2000-01-01 00:00:00").unwrap();
        assert_relative_eq!(jd, 2451544.5, epsilon = 1e-9);

        let jd = iso_date_to_jd("2021-01-01T00:00:00").unwrap();
        assert_relative_eq!(jd, 2459215.5, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_date() {
        assert!(matches!(
            iso_date_to_jd("not a date"),
            Err(EphemError::InvalidEpoch(_))
        ));
        assert!(matches!(
            iso_date_to_jd(""),
            Err(EphemError::InvalidEpoch(_))
        ));
    }

    #[test]
    fn test_jd_to_epoch() {
        let epoch = jd_to_epoch(2451545.0).unwrap();
        let (y, m, d, h, min, s, _) = epoch.to_gregorian_utc();
        assert_eq!((y, m, d, h, min, s), (2000, 1, 1, 12, 0, 0));

        assert_eq!(
            jd_to_epoch(-1.0).unwrap_err(),
            EphemError::NegativeJulianDay(-1.0)
        );
    }

    #[test]
    fn test_julian_centuries() {
        assert_eq!(julian_centuries_since_1900(JD1900), 0.0);
        assert_eq!(julian_centuries_since_1900(2451545.0), 36525.0 / 36525.0);
    }
}
