//! Flight category from visibility and ceiling.
use metfor::{Feet, Quantity, StatuteMiles};
use optional::Optioned;
use std::fmt::Display;
use strum_macros::EnumIter;

/// Flight category, ordered from best to worst with `Unknown` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, PartialOrd, Ord)]
pub enum FlightCategory {
    /// Visual flight rules.
    Vfr,
    /// Marginal VFR.
    Mvfr,
    /// Instrument flight rules.
    Ifr,
    /// Low IFR.
    Lifr,
    /// Not enough information to classify.
    Unknown,
}

impl FlightCategory {
    /// Abbreviation as displayed, e.g. `MVFR` or `UNK`.
    pub fn as_str(self) -> &'static str {
        use FlightCategory::*;

        match self {
            Vfr => "VFR",
            Mvfr => "MVFR",
            Ifr => "IFR",
            Lifr => "LIFR",
            Unknown => "UNK",
        }
    }

    /// Display tier, 0 for VFR through 3 for LIFR. Unknown has no tier.
    pub fn tier(self) -> Option<u8> {
        use FlightCategory::*;

        match self {
            Vfr => Some(0),
            Mvfr => Some(1),
            Ifr => Some(2),
            Lifr => Some(3),
            Unknown => None,
        }
    }

    /// The conventional chart color for the category.
    pub fn color(self) -> &'static str {
        use FlightCategory::*;

        match self {
            Vfr => "green",
            Mvfr => "blue",
            Ifr => "red",
            Lifr => "magenta",
            Unknown => "gray",
        }
    }
}

impl Display for FlightCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify conditions by visibility and ceiling.
///
/// A missing ceiling means no broken or overcast layer, which is unlimited. Missing or zero
/// visibility is `Unknown`. The worst category met by either value wins.
///
/// ```rust
/// use density_altitude::metar::{flight_category, FlightCategory};
/// use metfor::{Feet, StatuteMiles};
/// use optional::none;
///
/// assert_eq!(flight_category(StatuteMiles(10.0), none::<Feet>()), FlightCategory::Vfr);
/// assert_eq!(flight_category(StatuteMiles(5.0), Feet(1000.0)), FlightCategory::Mvfr);
/// assert_eq!(flight_category(StatuteMiles(10.0), Feet(400.0)), FlightCategory::Lifr);
/// assert_eq!(flight_category(none::<StatuteMiles>(), Feet(400.0)), FlightCategory::Unknown);
/// ```
pub fn flight_category<V, C>(visibility: V, ceiling: C) -> FlightCategory
where
    Optioned<StatuteMiles>: From<V>,
    Optioned<Feet>: From<C>,
{
    let visibility: Optioned<StatuteMiles> = Optioned::from(visibility);
    let ceiling: Optioned<Feet> = Optioned::from(ceiling);

    let vis = match visibility.into_option() {
        Some(vis) if vis.unpack() != 0.0 => vis.unpack(),
        _ => return FlightCategory::Unknown,
    };
    let ceiling = ceiling
        .into_option()
        .map(|c| c.unpack())
        .unwrap_or(std::f64::INFINITY);

    if ceiling < 500.0 || vis < 1.0 {
        FlightCategory::Lifr
    } else if ceiling < 1000.0 || vis < 3.0 {
        FlightCategory::Ifr
    } else if ceiling <= 3000.0 || vis <= 5.0 {
        FlightCategory::Mvfr
    } else {
        FlightCategory::Vfr
    }
}
