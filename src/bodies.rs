//! NAIF body codes and names.
//!
//! Covers the solar system barycenter, the Sun, the system barycenters, the
//! planets and their major natural satellites. Names are the upper-case
//! primary names used by the NAIF toolkit; lookups by name ignore case and
//! extra blanks and also accept the usual aliases.

use itertools::Itertools;

use crate::constants::NaifId;
use crate::spk_errors::SpkError;

struct Body {
    id: NaifId,
    name: &'static str,
    aliases: &'static [&'static str],
}

const fn body(id: NaifId, name: &'static str) -> Body {
    Body {
        id,
        name,
        aliases: &[],
    }
}

static BODIES: &[Body] = &[
    Body {
        id: 0,
        name: "SOLAR SYSTEM BARYCENTER",
        aliases: &["SSB"],
    },
    body(1, "MERCURY BARYCENTER"),
    body(2, "VENUS BARYCENTER"),
    Body {
        id: 3,
        name: "EARTH BARYCENTER",
        aliases: &["EMB", "EARTH MOON BARYCENTER", "EARTH-MOON BARYCENTER"],
    },
    body(4, "MARS BARYCENTER"),
    body(5, "JUPITER BARYCENTER"),
    body(6, "SATURN BARYCENTER"),
    body(7, "URANUS BARYCENTER"),
    body(8, "NEPTUNE BARYCENTER"),
    body(9, "PLUTO BARYCENTER"),
    body(10, "SUN"),
    body(199, "MERCURY"),
    body(299, "VENUS"),
    body(399, "EARTH"),
    body(301, "MOON"),
    body(499, "MARS"),
    body(401, "PHOBOS"),
    body(402, "DEIMOS"),
    body(599, "JUPITER"),
    body(501, "IO"),
    body(502, "EUROPA"),
    body(503, "GANYMEDE"),
    body(504, "CALLISTO"),
    body(505, "AMALTHEA"),
    body(699, "SATURN"),
    body(601, "MIMAS"),
    body(602, "ENCELADUS"),
    body(603, "TETHYS"),
    body(604, "DIONE"),
    body(605, "RHEA"),
    body(606, "TITAN"),
    body(607, "HYPERION"),
    body(608, "IAPETUS"),
    body(609, "PHOEBE"),
    body(799, "URANUS"),
    body(701, "ARIEL"),
    body(702, "UMBRIEL"),
    body(703, "TITANIA"),
    body(704, "OBERON"),
    body(705, "MIRANDA"),
    body(899, "NEPTUNE"),
    body(801, "TRITON"),
    body(802, "NEREID"),
    body(999, "PLUTO"),
    body(901, "CHARON"),
];

/// Primary name of the body `id`.
///
/// Return
/// ----------
/// * The upper-case name, e.g. `"EARTH BARYCENTER"` for `3`.
/// * [`SpkError::InvalidObjectId`] for a code with no known name.
pub fn body_name(id: NaifId) -> Result<&'static str, SpkError> {
    BODIES
        .iter()
        .find(|body| body.id == id)
        .map(|body| body.name)
        .ok_or(SpkError::InvalidObjectId(id))
}

/// NAIF code of the body called `name`.
///
/// Return
/// ----------
/// * The code, e.g. `3` for `"Earth Barycenter"` or `"EMB"`.
/// * [`SpkError::InvalidObjectName`] for an unknown name.
pub fn body_id(name: &str) -> Result<NaifId, SpkError> {
    let wanted = normalize(name);
    BODIES
        .iter()
        .find(|body| body.name == wanted || body.aliases.iter().any(|alias| *alias == wanted))
        .map(|body| body.id)
        .ok_or_else(|| SpkError::InvalidObjectName(name.to_string()))
}

fn normalize(name: &str) -> String {
    name.split_whitespace().join(" ").to_uppercase()
}
