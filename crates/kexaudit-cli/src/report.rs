//! Report structures rendered as text or JSON.

use std::fmt;

use kexaudit_dh::{AnalysisResult, WellKnownEntry};
use kexaudit_types::NamedCurve;
use serde::Serialize;

use crate::hex::hex_encode;

#[derive(Debug, Serialize)]
pub struct GroupReport {
    pub name: &'static str,
    pub source: &'static str,
    pub key_size_bits: u32,
    pub has_subgroup_order: bool,
}

impl From<&WellKnownEntry> for GroupReport {
    fn from(entry: &WellKnownEntry) -> Self {
        Self {
            name: entry.name(),
            source: entry.source(),
            key_size_bits: entry.key_size_bits(),
            has_subgroup_order: entry.parameters().q().is_some(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DhReport {
    pub key_size_bits: u32,
    pub modulus_bits: u64,
    pub generator: String,
    pub well_known: Option<GroupReport>,
    pub prime: bool,
    pub safe_prime: bool,
    pub reused: bool,
}

impl From<&AnalysisResult> for DhReport {
    fn from(result: &AnalysisResult) -> Self {
        let params = result.public_key().parameter_numbers();
        Self {
            key_size_bits: result.key_size_bits(),
            modulus_bits: params.p().bits(),
            generator: hex_encode(&params.g().to_bytes_be()),
            well_known: result.well_known().map(GroupReport::from),
            prime: result.prime(),
            safe_prime: result.safe_prime(),
            reused: result.reused(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EcdhReport {
    pub curve: &'static str,
    pub curve_id: u16,
    pub point_len: usize,
    pub point_format: &'static str,
    pub reused: bool,
}

impl EcdhReport {
    pub fn new(curve: NamedCurve, point: &[u8], reused: bool) -> Self {
        Self {
            curve: curve.name(),
            curve_id: curve.id(),
            point_len: point.len(),
            point_format: point_format(curve, point),
            reused,
        }
    }
}

/// Encoding as indicated by the leading byte. The point itself is not checked.
fn point_format(curve: NamedCurve, point: &[u8]) -> &'static str {
    if matches!(curve, NamedCurve::X25519 | NamedCurve::X448) {
        return "raw";
    }
    match point.first() {
        Some(0x04) => "uncompressed",
        Some(0x02 | 0x03) => "compressed",
        _ => "unknown",
    }
}

/// One line of output.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Report {
    Dh(DhReport),
    Ecdh(EcdhReport),
    Error { line: usize, error: String },
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Dh(dh) => {
                writeln!(f, "DH parameters:")?;
                writeln!(f, "  Key size:     {} bits", dh.key_size_bits)?;
                writeln!(f, "  Modulus:      {} bits", dh.modulus_bits)?;
                writeln!(f, "  Generator:    0x{}", dh.generator)?;
                match &dh.well_known {
                    Some(group) => writeln!(f, "  Group:        {} {}", group.source, group.name)?,
                    None => writeln!(f, "  Group:        custom")?,
                }
                writeln!(f, "  Prime:        {}", yes_no(dh.prime))?;
                writeln!(f, "  Safe prime:   {}", yes_no(dh.safe_prime))?;
                write!(f, "  Reused:       {}", yes_no(dh.reused))
            }
            Report::Ecdh(ecdh) => {
                writeln!(f, "ECDH parameters:")?;
                writeln!(f, "  Curve:        {} (0x{:04x})", ecdh.curve, ecdh.curve_id)?;
                writeln!(f, "  Point:        {} bytes, {}", ecdh.point_len, ecdh.point_format)?;
                write!(f, "  Reused:       {}", yes_no(ecdh.reused))
            }
            Report::Error { line, error } => write!(f, "line {line}: {error}"),
        }
    }
}

/// Print `report` in the selected format.
pub fn print(report: &Report, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
