//! Decoding METAR reports.
//!
//! Reports are split into whitespace separated tokens and each token is classified on its own, so
//! garbage text never causes an error, it just leaves fields missing. There are three parse paths:
//!
//!  - [`parse_basic`] only finds the temperature from the slash group and the altimeter setting.
//!  - [`parse_precise`] also finds the dew point, prefers the tenths of a degree `T` group from the
//!    remarks over the slash group, and keeps the raw altimeter unit and the value in hPa.
//!  - [`parse_full`] finds everything needed for display, including wind, visibility, clouds,
//!    weather and the flight category.
//!
//! [`decode`] runs the full and precise paths and classifies the flight category.
use crate::units::{hpa_to_inhg, inhg_to_hpa};
use itertools::Itertools;
use metfor::{Celsius, Feet, HectoPascal, StatuteMiles};
use optional::{none, some, Optioned};
use std::fmt::Display;

mod category;
mod groups;
mod tokens;

pub use self::{
    category::{flight_category, FlightCategory},
    groups::{CloudCover, CloudLayer, ObservationTime, Visibility, VisibilityQualifier, Wind},
    tokens::AltimeterUnit,
};

use self::tokens::{classify, tokenize, Token};

/// Temperature and altimeter setting from the lightweight parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParsedMetarBasic {
    /// Temperature from the slash group.
    pub temperature: Optioned<Celsius>,
    /// Altimeter setting in inches of mercury.
    pub altimeter_inhg: Optioned<f64>,
}

/// Temperature, dew point and altimeter from the precise parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParsedMetarPrecise {
    /// Temperature, from the `T` group if present, otherwise the slash group.
    pub temperature: Optioned<Celsius>,
    /// Dew point, from the `T` group if present, otherwise the slash group.
    pub dew_point: Optioned<Celsius>,
    /// Altimeter setting in inches of mercury.
    pub altimeter_inhg: Optioned<f64>,
    /// Altimeter setting in hectopascals.
    pub altimeter_hpa: Optioned<HectoPascal>,
    /// Which group the altimeter setting came from.
    pub altimeter_unit: Option<AltimeterUnit>,
}

/// Everything the full parse extracts. Groups are kept as raw text, the structured views are
/// available through the accessor methods.
#[derive(Debug, Clone, Default)]
pub struct ParsedMetarFull {
    /// Temperature from the slash group.
    pub temperature: Optioned<Celsius>,
    /// Dew point from the slash group.
    pub dew_point: Optioned<Celsius>,
    /// Altimeter setting in inches of mercury.
    pub altimeter_inhg: Optioned<f64>,
    /// First wind group.
    pub wind: Option<String>,
    /// First visibility group. A whole number and fraction are joined with a space.
    pub visibility: Option<String>,
    /// Cloud layer groups in report order.
    pub clouds: Vec<String>,
    /// Weather groups in report order, with intensity prefixes.
    pub weather: Vec<String>,
    /// First token of the report, whatever it is.
    pub report_type: Option<String>,
    /// First `ddhhmmZ` group.
    pub time: Option<String>,
}

// Missing metfor values are NaN, which never equals itself, so compare these as options.

impl PartialEq for ParsedMetarBasic {
    fn eq(&self, other: &Self) -> bool {
        self.temperature.into_option() == other.temperature.into_option()
            && self.altimeter_inhg == other.altimeter_inhg
    }
}

impl PartialEq for ParsedMetarPrecise {
    fn eq(&self, other: &Self) -> bool {
        self.temperature.into_option() == other.temperature.into_option()
            && self.dew_point.into_option() == other.dew_point.into_option()
            && self.altimeter_inhg == other.altimeter_inhg
            && self.altimeter_hpa.into_option() == other.altimeter_hpa.into_option()
            && self.altimeter_unit == other.altimeter_unit
    }
}

impl PartialEq for ParsedMetarFull {
    fn eq(&self, other: &Self) -> bool {
        self.temperature.into_option() == other.temperature.into_option()
            && self.dew_point.into_option() == other.dew_point.into_option()
            && self.altimeter_inhg == other.altimeter_inhg
            && self.wind == other.wind
            && self.visibility == other.visibility
            && self.clouds == other.clouds
            && self.weather == other.weather
            && self.report_type == other.report_type
            && self.time == other.time
    }
}

impl ParsedMetarFull {
    /// The wind group parsed into values.
    pub fn wind_group(&self) -> Option<Wind> {
        self.wind.as_deref().and_then(Wind::parse)
    }

    /// The visibility group parsed into values.
    pub fn visibility_group(&self) -> Option<Visibility> {
        self.visibility.as_deref().and_then(Visibility::parse)
    }

    /// Visibility in statute miles, ignoring any `P` or `M` qualifier.
    pub fn visibility_value(&self) -> Optioned<StatuteMiles> {
        Optioned::from(self.visibility_group().map(|vis| vis.distance))
    }

    /// The cloud groups parsed into layers.
    pub fn cloud_layers(&self) -> Vec<CloudLayer> {
        self.clouds
            .iter()
            .filter_map(|group| CloudLayer::parse(group))
            .collect()
    }

    /// Lowest broken or overcast layer, missing if there is none.
    pub fn ceiling(&self) -> Optioned<Feet> {
        let lowest = self
            .cloud_layers()
            .into_iter()
            .filter(|layer| layer.cover.is_ceiling())
            .map(|layer| layer.base)
            .fold(None, |acc: Option<Feet>, base| match acc {
                Some(low) if low <= base => Some(low),
                _ => Some(base),
            });

        Optioned::from(lowest)
    }

    /// The observation time parsed into values.
    pub fn observation_time(&self) -> Option<ObservationTime> {
        self.time.as_deref().and_then(ObservationTime::parse)
    }

    /// Flight category from the visibility and ceiling.
    pub fn flight_category(&self) -> FlightCategory {
        flight_category(self.visibility_value(), self.ceiling())
    }
}

impl Display for ParsedMetarFull {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let or_dash = |s: &Option<String>| s.clone().unwrap_or_else(|| "-".to_owned());

        write!(
            f,
            "{} {} wind {} vis {} clouds [{}] wx [{}]",
            or_dash(&self.report_type),
            or_dash(&self.time),
            or_dash(&self.wind),
            or_dash(&self.visibility),
            self.clouds.iter().join(" "),
            self.weather.iter().join(" "),
        )
    }
}

/// The result of decoding a report.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedMetar {
    /// Fields for display.
    pub full: ParsedMetarFull,
    /// Fields for the performance calculations.
    pub precise: ParsedMetarPrecise,
    /// Flight category from the full parse.
    pub category: FlightCategory,
}

/// Everything found in a single pass over the tokens.
#[derive(Debug, Default)]
struct Scan<'a> {
    report_type: Option<&'a str>,
    time: Option<&'a str>,
    altimeter: Option<(AltimeterUnit, f64)>,
    slash: Option<(Celsius, Option<Celsius>)>,
    precise: Option<(Celsius, Celsius)>,
    wind: Option<&'a str>,
    visibility: Option<String>,
    clouds: Vec<&'a str>,
    weather: Vec<&'a str>,
}

impl<'a> Scan<'a> {
    fn new(raw: &'a str) -> Self {
        let tokens = tokenize(raw);

        let mut scan = Scan {
            report_type: tokens.first().copied(),
            ..Scan::default()
        };

        for (i, &token) in tokens.iter().enumerate() {
            let tok = match classify(token) {
                Some(tok) => tok,
                None => {
                    log::trace!("unclassified token: {}", token);
                    continue;
                }
            };

            match tok {
                Token::Altimeter(unit, value) => {
                    scan.altimeter.get_or_insert((unit, value));
                }
                Token::SlashTemperature(t, td) => {
                    scan.slash.get_or_insert((t, td));
                }
                Token::PreciseTemperature(t, td) => {
                    scan.precise.get_or_insert((t, td));
                }
                Token::Wind(wind) => {
                    scan.wind.get_or_insert(wind);
                }
                Token::Visibility(vis) => {
                    if scan.visibility.is_none() {
                        scan.visibility = Some(join_whole_miles(&tokens, i, vis));
                    }
                }
                Token::Cloud(cloud) => scan.clouds.push(cloud),
                Token::Weather(wx) => scan.weather.push(wx),
                Token::Time(time) => {
                    scan.time.get_or_insert(time);
                }
            }
        }

        scan
    }

    fn altimeter_inhg(&self) -> Optioned<f64> {
        match self.altimeter {
            Some((AltimeterUnit::InHg, inhg)) => some(inhg),
            Some((AltimeterUnit::HectoPascal, hpa)) => some(hpa_to_inhg(HectoPascal(hpa))),
            None => none(),
        }
    }

    fn altimeter_hpa(&self) -> Optioned<HectoPascal> {
        match self.altimeter {
            Some((AltimeterUnit::InHg, inhg)) => some(inhg_to_hpa(inhg)),
            Some((AltimeterUnit::HectoPascal, hpa)) => some(HectoPascal(hpa)),
            None => none(),
        }
    }

    fn slash_temperature(&self) -> Optioned<Celsius> {
        Optioned::from(self.slash.map(|(t, _)| t))
    }

    fn slash_dew_point(&self) -> Optioned<Celsius> {
        Optioned::from(self.slash.and_then(|(_, td)| td))
    }
}

// "1 1/2SM" is reported as two tokens, put them back together. A P or M qualifier belongs in
// front of the whole number, so "1 M1/4SM" is not joined.
fn join_whole_miles(tokens: &[&str], idx: usize, vis: &str) -> String {
    let qualified = vis.starts_with('P') || vis.starts_with('M');
    if idx > 0 && vis.contains('/') && !qualified {
        let prev = tokens[idx - 1];
        if prev.len() <= 2 && groups::all_digits(prev) {
            return format!("{} {}", prev, vis);
        }
    }

    vis.to_owned()
}

/// Lightweight parse for just the temperature and altimeter setting.
///
/// ```rust
/// use density_altitude::metar::parse_basic;
/// use metfor::Celsius;
///
/// let basic = parse_basic("KSMO 251853Z 25008KT 10SM FEW250 22/12 A3005");
/// assert_eq!(basic.temperature.unwrap(), Celsius(22.0));
/// assert!((basic.altimeter_inhg.unwrap() - 30.05).abs() < 1.0e-9);
///
/// let nothing = parse_basic("not a weather report");
/// assert!(nothing.temperature.is_none());
/// assert!(nothing.altimeter_inhg.is_none());
/// ```
pub fn parse_basic(raw: &str) -> ParsedMetarBasic {
    let scan = Scan::new(raw);

    ParsedMetarBasic {
        temperature: scan.slash_temperature(),
        altimeter_inhg: scan.altimeter_inhg(),
    }
}

/// Parse the temperature, dew point and altimeter setting at the best available precision.
///
/// A well formed `T` group overrides the slash group for both temperature and dew point no matter
/// where they appear in the report.
///
/// ```rust
/// use density_altitude::metar::{parse_precise, AltimeterUnit};
/// use metfor::Celsius;
///
/// let precise = parse_precise("EGLL 251850Z 22/12 Q1015 RMK T02220122");
/// assert_eq!(precise.temperature.unwrap(), Celsius(22.2));
/// assert_eq!(precise.dew_point.unwrap(), Celsius(12.2));
/// assert_eq!(precise.altimeter_unit, Some(AltimeterUnit::HectoPascal));
/// assert_eq!(precise.altimeter_hpa.unwrap().0, 1015.0);
/// ```
pub fn parse_precise(raw: &str) -> ParsedMetarPrecise {
    parse_precise_from(&Scan::new(raw))
}

fn parse_precise_from(scan: &Scan) -> ParsedMetarPrecise {
    let (temperature, dew_point) = match scan.precise {
        Some((t, td)) => (some(t), some(td)),
        None => (scan.slash_temperature(), scan.slash_dew_point()),
    };

    ParsedMetarPrecise {
        temperature,
        dew_point,
        altimeter_inhg: scan.altimeter_inhg(),
        altimeter_hpa: scan.altimeter_hpa(),
        altimeter_unit: scan.altimeter.map(|(unit, _)| unit),
    }
}

/// Parse everything needed to display a report.
pub fn parse_full(raw: &str) -> ParsedMetarFull {
    parse_full_from(&Scan::new(raw))
}

fn parse_full_from(scan: &Scan) -> ParsedMetarFull {
    ParsedMetarFull {
        temperature: scan.slash_temperature(),
        dew_point: scan.slash_dew_point(),
        altimeter_inhg: scan.altimeter_inhg(),
        wind: scan.wind.map(str::to_owned),
        visibility: scan.visibility.clone(),
        clouds: scan.clouds.iter().map(|&c| c.to_owned()).collect(),
        weather: scan.weather.iter().map(|&wx| wx.to_owned()).collect(),
        report_type: scan.report_type.map(str::to_owned),
        time: scan.time.map(str::to_owned),
    }
}

/// Decode a report. Never fails, fields that can't be found are missing.
///
/// ```rust
/// use density_altitude::metar::{decode, FlightCategory};
/// use metfor::Celsius;
///
/// let metar = decode("KSMO 251853Z 25008KT 10SM FEW250 22/12 A3005");
///
/// assert_eq!(metar.full.report_type.as_deref(), Some("KSMO"));
/// assert_eq!(metar.full.time.as_deref(), Some("251853Z"));
/// assert_eq!(metar.full.wind.as_deref(), Some("25008KT"));
/// assert_eq!(metar.full.visibility.as_deref(), Some("10SM"));
/// assert_eq!(metar.full.clouds, vec!["FEW250"]);
/// assert_eq!(metar.precise.temperature.unwrap(), Celsius(22.0));
/// assert_eq!(metar.precise.dew_point.unwrap(), Celsius(12.0));
/// assert_eq!(metar.category, FlightCategory::Vfr);
/// ```
pub fn decode(raw: &str) -> DecodedMetar {
    let scan = Scan::new(raw);
    let full = parse_full_from(&scan);
    let precise = parse_precise_from(&scan);
    let category = full.flight_category();

    log::debug!("decoded {} => {}", full, category);

    DecodedMetar {
        full,
        precise,
        category,
    }
}
