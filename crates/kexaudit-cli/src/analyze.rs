//! Single-shot `dh` and `ecdh` commands.

use kexaudit_dh::DhAnalyzer;
use kexaudit_tls::{parse_dh_params, parse_ecdh_params};

use crate::hex::hex_decode;
use crate::report::{self, DhReport, EcdhReport, Report};

pub fn run_dh(
    analyzer: &DhAnalyzer,
    params: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = hex_decode(params)?;
    let public_key = parse_dh_params(&data)?;
    // A single key has nothing to be reused against.
    let result = analyzer.analyze(public_key, false);
    report::print(&Report::Dh(DhReport::from(&result)), json)
}

pub fn run_ecdh(params: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = hex_decode(params)?;
    let (curve, point) = parse_ecdh_params(&data)?;
    report::print(&Report::Ecdh(EcdhReport::new(curve, &point, false)), json)
}
