//! Splitting a report into tokens and recognizing what each token is.
//!
//! Each matcher looks at a single token and either returns a tagged [`Token`] or `None`. The
//! matchers are tried in a fixed priority order and the first match wins.
use super::groups::{all_digits, CloudLayer, ObservationTime, Visibility, Wind};
use metfor::Celsius;
use std::fmt::Display;
use strum_macros::EnumIter;

/// Which form of altimeter group supplied the setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum AltimeterUnit {
    /// `A####`, inches of mercury.
    InHg,
    /// `Q####`, QNH in hectopascals.
    HectoPascal,
}

impl AltimeterUnit {
    /// The letter that starts the group.
    pub fn letter(self) -> char {
        match self {
            AltimeterUnit::InHg => 'A',
            AltimeterUnit::HectoPascal => 'Q',
        }
    }
}

impl Display for AltimeterUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Weather phenomena codes a weather token may start with.
pub(crate) const WEATHER_CODES: [&str; 11] =
    ["RA", "SN", "FG", "BR", "HZ", "TS", "DZ", "SH", "SQ", "FZ", "PL"];

/// A recognized token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Token<'a> {
    /// `A####` in inches of mercury or `Q####` in hectopascals.
    Altimeter(AltimeterUnit, f64),
    /// `22/12`, `M05/M10`, `04/`
    SlashTemperature(Celsius, Option<Celsius>),
    /// `T02220122`, tenths of a degree.
    PreciseTemperature(Celsius, Celsius),
    Wind(&'a str),
    Visibility(&'a str),
    Cloud(&'a str),
    Weather(&'a str),
    Time(&'a str),
}

type Matcher = for<'a> fn(&'a str) -> Option<Token<'a>>;

/// Matchers in priority order.
const MATCHERS: [Matcher; 8] = [
    altimeter,
    slash_temperature,
    precise_temperature,
    wind,
    visibility,
    cloud,
    weather,
    time,
];

/// Strip a trailing `=`, split on whitespace, and drop empty tokens.
pub(crate) fn tokenize(raw: &str) -> Vec<&str> {
    let raw = raw.trim_end();
    let raw = raw.strip_suffix('=').unwrap_or(raw);
    raw.split_whitespace().collect()
}

/// Find what a token is, if it is anything the decoder cares about.
pub(crate) fn classify(token: &str) -> Option<Token<'_>> {
    MATCHERS.iter().find_map(|matcher| matcher(token))
}

fn altimeter(token: &str) -> Option<Token<'_>> {
    if token.len() != 5 || !token.is_char_boundary(1) {
        return None;
    }

    let (letter, digits) = token.split_at(1);
    if !all_digits(digits) {
        return None;
    }
    let value = digits.parse::<f64>().ok()?;

    match letter {
        "A" => Some(Token::Altimeter(AltimeterUnit::InHg, value / 100.0)),
        "Q" => Some(Token::Altimeter(AltimeterUnit::HectoPascal, value)),
        _ => None,
    }
}

// One or two digits with an optional M for minus.
fn whole_degrees(s: &str) -> Option<Celsius> {
    let (negative, digits) = match s.strip_prefix('M') {
        Some(digits) => (true, digits),
        None => (false, s),
    };

    if digits.len() > 2 || !all_digits(digits) {
        return None;
    }

    let val = digits.parse::<f64>().ok()?;
    Some(Celsius(if negative { -val } else { val }))
}

fn slash_temperature(token: &str) -> Option<Token<'_>> {
    let mut parts = token.split('/');
    let (temperature, dew_point) = match (parts.next(), parts.next(), parts.next()) {
        (Some(t), Some(td), None) => (t, td),
        _ => return None,
    };

    let temperature = whole_degrees(temperature)?;
    let dew_point = if dew_point.is_empty() {
        None
    } else {
        Some(whole_degrees(dew_point)?)
    };

    Some(Token::SlashTemperature(temperature, dew_point))
}

fn precise_temperature(token: &str) -> Option<Token<'_>> {
    let digits = token.strip_prefix('T')?;
    if digits.len() != 8 || !all_digits(digits) {
        return None;
    }

    fn tenths(sign: &str, val: &str) -> Option<Celsius> {
        let val = val.parse::<f64>().ok()? / 10.0;
        match sign {
            "0" => Some(Celsius(val)),
            "1" => Some(Celsius(-val)),
            _ => None,
        }
    }

    let temperature = tenths(&digits[0..1], &digits[1..4]);
    let dew_point = tenths(&digits[4..5], &digits[5..8]);

    match (temperature, dew_point) {
        (Some(t), Some(td)) => Some(Token::PreciseTemperature(t, td)),
        _ => {
            log::warn!("ignoring temperature group with bad sign flag: {}", token);
            None
        }
    }
}

fn wind(token: &str) -> Option<Token<'_>> {
    Wind::parse(token).map(|_| Token::Wind(token))
}

fn visibility(token: &str) -> Option<Token<'_>> {
    Visibility::parse(token).map(|_| Token::Visibility(token))
}

fn cloud(token: &str) -> Option<Token<'_>> {
    CloudLayer::parse(token).map(|_| Token::Cloud(token))
}

fn weather(token: &str) -> Option<Token<'_>> {
    let code = token
        .strip_prefix('+')
        .or_else(|| token.strip_prefix('-'))
        .unwrap_or(token);

    if WEATHER_CODES.iter().any(|wx| code.starts_with(wx)) {
        Some(Token::Weather(token))
    } else {
        None
    }
}

fn time(token: &str) -> Option<Token<'_>> {
    ObservationTime::parse(token).map(|_| Token::Time(token))
}
