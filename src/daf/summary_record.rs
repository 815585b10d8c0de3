use std::fmt;

use hifitime::Epoch;
use nom::{
    number::{
        complete::{f64 as daf_f64, i32 as daf_i32},
        Endianness,
    },
    IResult,
};

use crate::bodies::body_name;
use crate::constants::{EphemerisTime, NaifId};

/// Descriptor of one SPK segment: an array of ephemeris data for `target`
/// relative to `center`, valid over `[start_epoch, end_epoch]`.
#[derive(Debug, PartialEq, Clone)]
pub struct SpkSegment {
    pub start_epoch: EphemerisTime,
    pub end_epoch: EphemerisTime,
    pub target: NaifId,
    pub center: NaifId,
    pub frame_id: i32,
    pub data_type: i32,
    pub initial_addr: i32,
    pub final_addr: i32,
}

impl SpkSegment {
    /// Decode a packed SPK summary (2 doubles followed by 6 integers).
    pub fn parse(input: &[u8], endianness: Endianness) -> IResult<&[u8], Self> {
        let (input, start_epoch) = daf_f64(endianness)(input)?;
        let (input, end_epoch) = daf_f64(endianness)(input)?;

        let (input, target) = daf_i32(endianness)(input)?;
        let (input, center) = daf_i32(endianness)(input)?;
        let (input, frame_id) = daf_i32(endianness)(input)?;
        let (input, data_type) = daf_i32(endianness)(input)?;
        let (input, initial_addr) = daf_i32(endianness)(input)?;
        let (input, final_addr) = daf_i32(endianness)(input)?;
        Ok((
            input,
            SpkSegment {
                start_epoch,
                end_epoch,
                target,
                center,
                frame_id,
                data_type,
                initial_addr,
                final_addr,
            },
        ))
    }
}

/// Control words at the head of a summary record.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SummaryControl {
    pub next: f64,
    pub prev: f64,
    pub nsum: f64,
}

impl SummaryControl {
    pub fn parse(input: &[u8], endianness: Endianness) -> IResult<&[u8], Self> {
        let (input, next) = daf_f64(endianness)(input)?;
        let (input, prev) = daf_f64(endianness)(input)?;
        let (input, nsum) = daf_f64(endianness)(input)?;
        Ok((input, SummaryControl { next, prev, nsum }))
    }
}

fn labelled_body(id: NaifId) -> String {
    match body_name(id) {
        Ok(name) => format!("{id} ({name})"),
        Err(_) => id.to_string(),
    }
}

impl fmt::Display for SpkSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = Epoch::from_et_seconds(self.start_epoch);
        let end = Epoch::from_et_seconds(self.end_epoch);

        let fields = [
            ("start_epoch", format!("{start}")),
            ("end_epoch", format!("{end}")),
            ("target", labelled_body(self.target)),
            ("center", labelled_body(self.center)),
            ("frame_id", self.frame_id.to_string()),
            ("data_type", self.data_type.to_string()),
            ("initial_addr", self.initial_addr.to_string()),
            ("final_addr", self.final_addr.to_string()),
        ];

        let label_width = fields.iter().map(|(k, _)| k.len()).max().unwrap_or(10);
        let value_width = fields.iter().map(|(_, v)| v.len()).max().unwrap_or(10);

        let border = format!(
            "+{:-<label$}+{:-<value$}+",
            "",
            "",
            label = label_width + 2,
            value = value_width + 2
        );

        writeln!(f, "{border}")?;
        writeln!(
            f,
            "| {:<label_width$} | {:<value_width$} |",
            "Field", "Value",
        )?;
        writeln!(f, "{border}")?;

        for (label, value) in fields {
            writeln!(f, "| {:<label_width$} | {:<value_width$} |", label, value)?;
        }

        writeln!(f, "{border}")
    }
}
