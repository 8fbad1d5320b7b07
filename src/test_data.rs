//! Reports used in tests.

/// The worked example, no report type token.
pub(crate) const KSMO: &str = "KSMO 251853Z 25008KT 10SM FEW250 22/12 A3005";

/// Same observation with the report type and end of report marker.
pub(crate) const KSMO_WITH_TYPE: &str = "METAR KSMO 251853Z 25008KT 10SM FEW250 22/12 A3005=";

/// Same observation with remarks, including a T group that disagrees with the rounded values.
pub(crate) const KSMO_WITH_REMARKS: &str =
    "METAR KSMO 251853Z 25008KT 10SM FEW250 22/12 A3005 RMK AO2 SLP176 T02220117";

/// Ceiling 800 ft with a variable sky condition remark repeating the BKN008 layer.
pub(crate) const IFR_RAIN: &str = "SPECI KPDX 121953Z 19012KT 4SM -RA BR BKN008 OVC015 12/10 \
                                   A2990 RMK AO2 RAB1928 CIG 006V010 BKN008 V OVC";

/// Quarter mile in fog with an indefinite ceiling, which is not a cloud layer.
pub(crate) const LIFR_FOG: &str =
    "METAR KSFO 020856Z 00000KT 1/4SM FG VV002 09/09 A2998 RMK AO2";

/// Visibility reported as a whole number and a fraction in separate tokens.
pub(crate) const IFR_MIXED_FRACTION: &str =
    "METAR KDEN 151753Z 36010KT 2 1/2SM BR SCT012 BKN045 M02/M04 A3012";

/// Gusting wind under a high ceiling.
pub(crate) const GUSTY: &str = "METAR KCOS 031256Z 33022G32KT 10SM SCT080 BKN200 05/M08 A3001";

/// QNH in hectopascals with a T group in the remarks.
pub(crate) const QNH: &str =
    "METAR EGLL 251850Z AUTO 24012KT 9999 SCT035 BKN045 18/09 Q1017 NOSIG RMK T01830091";
