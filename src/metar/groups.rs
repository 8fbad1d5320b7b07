//! Structured views of individual METAR groups.
//!
//! The decoder keeps the raw text of the wind, visibility, cloud and time groups. These types
//! parse that text into values when a caller needs numbers.
use chrono::{NaiveDate, NaiveDateTime};
use metfor::{Feet, Knots, StatuteMiles, WindSpdDir};
use optional::{none, some, Optioned};
use std::fmt::Display;
use strum_macros::EnumIter;

/// True if `s` is non-empty and all ASCII digits.
pub(crate) fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Surface wind group, e.g. `25008KT`, `VRB03KT`, `18015G25KT`.
#[derive(Debug, Clone, Copy)]
pub struct Wind {
    /// True direction the wind is blowing from in degrees, missing if variable.
    pub direction: Optioned<f64>,
    /// Sustained speed.
    pub speed: Knots,
    /// Gust speed, if reported.
    pub gust: Optioned<Knots>,
}

// A missing gust is NaN knots, so compare it as an option.
impl PartialEq for Wind {
    fn eq(&self, other: &Self) -> bool {
        self.direction == other.direction
            && self.speed == other.speed
            && self.gust.into_option() == other.gust.into_option()
    }
}

impl Wind {
    /// Parse a wind group, returns `None` if the text is not one.
    ///
    /// ```rust
    /// use density_altitude::metar::Wind;
    /// use metfor::Knots;
    ///
    /// let wind = Wind::parse("18015G25KT").unwrap();
    /// assert_eq!(wind.direction.unwrap(), 180.0);
    /// assert_eq!(wind.speed, Knots(15.0));
    /// assert_eq!(wind.gust.unwrap(), Knots(25.0));
    ///
    /// assert!(Wind::parse("VRB03KT").unwrap().direction.is_none());
    /// assert!(Wind::parse("25008MPS").is_none());
    /// ```
    pub fn parse(group: &str) -> Option<Self> {
        let body = group.strip_suffix("KT")?;
        if body.len() < 5 || !body.is_char_boundary(3) {
            return None;
        }

        let (dir, rest) = body.split_at(3);
        let direction = if dir == "VRB" {
            none()
        } else if all_digits(dir) {
            some(dir.parse::<f64>().ok()?)
        } else {
            return None;
        };

        let (speed, gust) = match rest.find('G') {
            Some(idx) => (&rest[..idx], Some(&rest[idx + 1..])),
            None => (rest, None),
        };

        let speed = parse_speed(speed)?;
        let gust = match gust {
            Some(gust) => some(parse_speed(gust)?),
            None => none(),
        };

        Some(Wind {
            direction,
            speed,
            gust,
        })
    }

    /// Convert to a `metfor` speed and direction, `None` if the direction is variable.
    pub fn spd_dir(&self) -> Option<WindSpdDir<Knots>> {
        self.direction.into_option().map(|direction| WindSpdDir {
            speed: self.speed,
            direction,
        })
    }
}

fn parse_speed(s: &str) -> Option<Knots> {
    if (s.len() == 2 || s.len() == 3) && all_digits(s) {
        s.parse::<f64>().ok().map(Knots)
    } else {
        None
    }
}

/// How a reported visibility relates to the actual visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum VisibilityQualifier {
    /// The visibility is as reported.
    Exact,
    /// More than the reported value, `P` prefix.
    GreaterThan,
    /// Less than the reported value, `M` prefix.
    LessThan,
}

/// Prevailing visibility in statute miles, e.g. `10SM`, `1/2SM`, `1 1/2SM`, `P6SM`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    /// Reported distance.
    pub distance: StatuteMiles,
    /// Whether the distance is a bound.
    pub qualifier: VisibilityQualifier,
}

impl Visibility {
    /// Parse a visibility group. A whole number and fraction separated by a space are accepted.
    ///
    /// ```rust
    /// use density_altitude::metar::{Visibility, VisibilityQualifier};
    /// use metfor::StatuteMiles;
    ///
    /// assert_eq!(Visibility::parse("1 1/2SM").unwrap().distance, StatuteMiles(1.5));
    ///
    /// let vis = Visibility::parse("M1/4SM").unwrap();
    /// assert_eq!(vis.distance, StatuteMiles(0.25));
    /// assert_eq!(vis.qualifier, VisibilityQualifier::LessThan);
    /// ```
    pub fn parse(group: &str) -> Option<Self> {
        let body = group.strip_suffix("SM")?;

        let (qualifier, body) = if let Some(b) = body.strip_prefix('P') {
            (VisibilityQualifier::GreaterThan, b)
        } else if let Some(b) = body.strip_prefix('M') {
            (VisibilityQualifier::LessThan, b)
        } else {
            (VisibilityQualifier::Exact, body)
        };

        let mut parts = body.split_whitespace();
        let first = parts.next()?;
        let distance = match (parts.next(), parts.next()) {
            (None, _) => parse_distance(first)?,
            (Some(fraction), None) if all_digits(first) && fraction.contains('/') => {
                first.parse::<f64>().ok()? + parse_distance(fraction)?
            }
            _ => return None,
        };

        Some(Visibility {
            distance: StatuteMiles(distance),
            qualifier,
        })
    }
}

fn parse_distance(s: &str) -> Option<f64> {
    match s.find('/') {
        Some(idx) => {
            let (num, den) = (&s[..idx], &s[idx + 1..]);
            if !all_digits(num) || !all_digits(den) {
                return None;
            }
            let den = den.parse::<f64>().ok()?;
            if den == 0.0 {
                return None;
            }
            Some(num.parse::<f64>().ok()? / den)
        }
        None if all_digits(s) => s.parse::<f64>().ok(),
        None => None,
    }
}

/// Sky cover amount of a cloud layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum CloudCover {
    /// 1/8 to 2/8
    Few,
    /// 3/8 to 4/8
    Scattered,
    /// 5/8 to 7/8
    Broken,
    /// 8/8
    Overcast,
}

impl CloudCover {
    /// The contraction used in reports.
    pub fn code(self) -> &'static str {
        match self {
            CloudCover::Few => "FEW",
            CloudCover::Scattered => "SCT",
            CloudCover::Broken => "BKN",
            CloudCover::Overcast => "OVC",
        }
    }

    /// Broken and overcast layers constitute a ceiling.
    pub fn is_ceiling(self) -> bool {
        matches!(self, CloudCover::Broken | CloudCover::Overcast)
    }

    fn from_code(code: &str) -> Option<Self> {
        use strum::IntoEnumIterator;

        CloudCover::iter().find(|cover| cover.code() == code)
    }
}

impl Display for CloudCover {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A reported cloud layer, e.g. `BKN020CB`.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudLayer {
    /// Sky cover.
    pub cover: CloudCover,
    /// Height of the base above ground level.
    pub base: Feet,
    /// Anything trailing the height, e.g. `CB` or `TCU`.
    pub suffix: Option<String>,
}

impl CloudLayer {
    /// Parse a cloud layer group.
    ///
    /// ```rust
    /// use density_altitude::metar::{CloudCover, CloudLayer};
    /// use metfor::Feet;
    ///
    /// let layer = CloudLayer::parse("BKN020CB").unwrap();
    /// assert_eq!(layer.cover, CloudCover::Broken);
    /// assert_eq!(layer.base, Feet(2000.0));
    /// assert_eq!(layer.suffix.as_deref(), Some("CB"));
    /// ```
    pub fn parse(group: &str) -> Option<Self> {
        if group.len() < 6 || !group.is_char_boundary(3) || !group.is_char_boundary(6) {
            return None;
        }

        let cover = CloudCover::from_code(&group[..3])?;
        let height = &group[3..6];
        if !all_digits(height) {
            return None;
        }
        let base = Feet(height.parse::<f64>().ok()? * 100.0);

        let suffix = &group[6..];
        let suffix = if suffix.is_empty() {
            None
        } else {
            Some(suffix.to_owned())
        };

        Some(CloudLayer {
            cover,
            base,
            suffix,
        })
    }
}

/// Observation time group, `ddhhmmZ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObservationTime {
    /// Day of the month.
    pub day: u32,
    /// Hour, UTC.
    pub hour: u32,
    /// Minute.
    pub minute: u32,
}

impl ObservationTime {
    /// Parse a time group. The ranges of the fields are not checked here, see
    /// [`ObservationTime::resolve`].
    pub fn parse(group: &str) -> Option<Self> {
        let digits = group.strip_suffix('Z')?;
        if digits.len() != 6 || !all_digits(digits) {
            return None;
        }

        Some(ObservationTime {
            day: digits[0..2].parse().ok()?,
            hour: digits[2..4].parse().ok()?,
            minute: digits[4..6].parse().ok()?,
        })
    }

    /// Reports only carry the day of the month, so the caller supplies the year and month.
    /// Returns `None` if the result is not a valid date and time.
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use density_altitude::metar::ObservationTime;
    ///
    /// let time = ObservationTime::parse("251853Z").unwrap();
    /// assert_eq!(
    ///     time.resolve(2024, 7).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 7, 25).unwrap().and_hms_opt(18, 53, 0).unwrap()
    /// );
    ///
    /// let bogus = ObservationTime::parse("301200Z").unwrap();
    /// assert!(bogus.resolve(2024, 2).is_none());
    /// ```
    pub fn resolve(&self, year: i32, month: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(year, month, self.day)?.and_hms_opt(self.hour, self.minute, 0)
    }
}
