//! DAF (Double Precision Array File) file record parsing.
//!
//! The first 1024-byte record of a DAF container describes its layout:
//!
//! * **`idword`**: Format identifier (e.g. `"DAF/SPK "`), eight ASCII bytes.
//! * **`nd`** / **`ni`**: Number of double-precision / integer components
//!   in each array summary. SPK kernels always use `nd = 2`, `ni = 6`.
//! * **`fward`** / **`bward`**: Record numbers (1-based) of the first and last
//!   summary record of the doubly-linked list of descriptors.
//! * **`free`**: First free address (1-based, in double-precision words).
//! * **`internal_filename`**: Kernel name written by its producer (60 bytes).
//! * **`locfmt`**: Binary format tag (`"BIG-IEEE"`, `"LTL-IEEE"`) telling how
//!   numbers are encoded *inside the file*.
//! * **`ftpstr`**: FTP validation string used to detect ASCII-mode transfers.
//!
//! # Endianness
//!
//! `locfmt` sits at a fixed byte offset and is made of ASCII characters, so it
//! is read first and decides the byte order used for every integer and double
//! of the file. See [`super::endianness_from_locfmt`].
//!
//! # See also
//! ------------
//! * [`DafHeader::from_record`] – Decode and validate an SPK file record.
//! * NAIF DAF required reading (file record layout).

use std::fmt;

use nom::{
    bytes::complete::take,
    number::{complete::i32 as daf_i32, Endianness},
    IResult,
};

use super::{endianness_from_locfmt, DafError};
use crate::constants::{
    DAF_RECORD_BYTES, FTP_OFFSET, FTP_VALIDATION_STRING, LOCFMT_OFFSET, SPK_IDWORD, SPK_ND,
    SPK_NI,
};

/// In-memory representation of the DAF file record (first 1024-byte record).
///
/// Text fields are trimmed of their trailing blank padding.
#[derive(Debug, PartialEq, Clone)]
pub struct DafHeader {
    /// 8-byte identifier, `"DAF/SPK"` for SPK kernels.
    pub idword: String,
    /// 60-byte internal kernel name.
    pub internal_filename: String,
    /// Number of double-precision components in each summary (ND).
    pub nd: i32,
    /// Number of integer components in each summary (NI).
    pub ni: i32,
    /// Record number of the first summary record.
    pub fward: i32,
    /// Record number of the last summary record.
    pub bward: i32,
    /// First free address (in double-precision words, 1-based).
    pub free: i32,
    /// Binary format tag (e.g. `"LTL-IEEE"`).
    pub locfmt: String,
    /// Byte order selected from `locfmt`.
    pub endianness: Endianness,
}

impl DafHeader {
    /// Decode the fields of a file record once its byte order is known.
    ///
    /// Arguments
    /// -----------------
    /// * `input`: The file record, starting at byte 0.
    /// * `endianness`: Byte order of the integers.
    ///
    /// Return
    /// ----------
    /// * An [`IResult`] with the remaining input (the reserved area and the
    ///   FTP string) and the decoded header.
    pub fn parse(input: &[u8], endianness: Endianness) -> IResult<&[u8], Self> {
        let (input, id_word) = take(8usize)(input)?;
        let (input, nd) = daf_i32(endianness)(input)?;
        let (input, ni) = daf_i32(endianness)(input)?;
        let (input, ifname) = take(60usize)(input)?;
        let (input, fward) = daf_i32(endianness)(input)?;
        let (input, bward) = daf_i32(endianness)(input)?;
        let (input, free) = daf_i32(endianness)(input)?;
        let (input, locfmt) = take(8usize)(input)?;
        Ok((
            input,
            DafHeader {
                idword: trimmed_text(id_word),
                internal_filename: trimmed_text(ifname),
                nd,
                ni,
                fward,
                bward,
                free,
                locfmt: trimmed_text(locfmt),
                endianness,
            },
        ))
    }

    /// Decode and validate the file record of an SPK kernel.
    ///
    /// Arguments
    /// -----------------
    /// * `record`: The first 1024 bytes of the file.
    ///
    /// Return
    /// ----------
    /// * The decoded [`DafHeader`], or a [`DafError`] when the record is
    ///   short, uses an unsupported binary format, is not an SPK file record,
    ///   has a non-SPK summary layout, or carries a damaged FTP string.
    pub fn from_record(record: &[u8]) -> Result<Self, DafError> {
        if record.len() < DAF_RECORD_BYTES {
            return Err(DafError::Truncated { record: 1 });
        }

        let locfmt = trimmed_text(&record[LOCFMT_OFFSET..LOCFMT_OFFSET + 8]);
        let endianness = endianness_from_locfmt(&locfmt)?;

        let (_, header) = Self::parse(record, endianness)?;

        if header.idword != SPK_IDWORD {
            return Err(DafError::NotAnSpk(header.idword));
        }
        if header.nd != SPK_ND || header.ni != SPK_NI {
            return Err(DafError::SummaryLayout {
                nd: header.nd,
                ni: header.ni,
            });
        }

        check_ftp_string(&record[FTP_OFFSET..FTP_OFFSET + FTP_VALIDATION_STRING.len()])?;

        Ok(header)
    }
}

fn trimmed_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches(['\0', ' '])
        .trim_start()
        .to_string()
}

/// Files written before the FTP string existed carry blanks or zeros there
/// and are accepted as is.
fn check_ftp_string(area: &[u8]) -> Result<(), DafError> {
    if !area.starts_with(b"FTPSTR") {
        return Ok(());
    }
    if area == FTP_VALIDATION_STRING {
        Ok(())
    } else {
        Err(DafError::DamagedTransfer)
    }
}

impl fmt::Display for DafHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LABEL_WIDTH: usize = 18;
        const VALUE_WIDTH: usize = 50;

        let border = format!(
            "+{:-<label$}+{:-<value$}+",
            "",
            "",
            label = LABEL_WIDTH + 1,
            value = VALUE_WIDTH + 1
        );

        let rows = [
            ("ID Word", self.idword.clone()),
            ("Internal Name", self.internal_filename.clone()),
            ("ND / NI", format!("{} doubles, {} integers", self.nd, self.ni)),
            (
                "Summary Records",
                format!("first #{}, last #{}", self.fward, self.bward),
            ),
            ("Free Addr", self.free.to_string()),
            ("Binary Format", self.locfmt.clone()),
        ];

        writeln!(f, "{border}")?;
        writeln!(
            f,
            "| {:<label$}| {:<value$}|",
            "DAF File Record",
            "",
            label = LABEL_WIDTH,
            value = VALUE_WIDTH
        )?;
        writeln!(f, "{border}")?;
        for (label, value) in rows {
            writeln!(
                f,
                "| {:<label$}| {:<value$}|",
                label,
                value,
                label = LABEL_WIDTH,
                value = VALUE_WIDTH
            )?;
        }
        writeln!(f, "{border}")
    }
}
