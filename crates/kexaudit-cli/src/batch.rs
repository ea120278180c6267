//! Batch analysis of captured key-exchange parameters.
//!
//! Input is one entry per line, `dh:<hex>` or `ecdh:<hex>`. Blank lines and
//! lines starting with `#` are skipped. A line that fails to decode is
//! reported and the batch carries on.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use kexaudit_dh::{DhAnalyzer, PublicKey};
use kexaudit_tls::{parse_dh_params, parse_ecdh_params, NamedCurve};
use tracing::{info, warn};

use crate::hex::hex_decode;
use crate::report::{self, DhReport, EcdhReport, Report};

/// Public keys seen so far in this batch.
#[derive(Debug, Default)]
pub struct ReuseCache {
    dh: HashSet<PublicKey>,
    ecdh: HashSet<(NamedCurve, Vec<u8>)>,
}

impl ReuseCache {
    /// Record `key`; true if it was already present.
    pub fn check_dh(&mut self, key: &PublicKey) -> bool {
        !self.dh.insert(key.clone())
    }

    /// Record `(curve, point)`; true if it was already present.
    pub fn check_ecdh(&mut self, curve: NamedCurve, point: &[u8]) -> bool {
        !self.ecdh.insert((curve, point.to_vec()))
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Entry {
    Dh(Vec<u8>),
    Ecdh(Vec<u8>),
}

fn parse_line(line: &str) -> Result<Option<Entry>, Box<dyn std::error::Error>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (kind, data) = line
        .split_once(':')
        .ok_or("expected `dh:<hex>` or `ecdh:<hex>`")?;
    let data = hex_decode(data)?;
    match kind.trim() {
        "dh" => Ok(Some(Entry::Dh(data))),
        "ecdh" => Ok(Some(Entry::Ecdh(data))),
        other => Err(format!("unknown entry kind: {other}").into()),
    }
}

fn process_line(
    analyzer: &DhAnalyzer,
    cache: &mut ReuseCache,
    line: &str,
) -> Result<Option<Report>, Box<dyn std::error::Error>> {
    let report = match parse_line(line)? {
        None => return Ok(None),
        Some(Entry::Dh(data)) => {
            let key = parse_dh_params(&data)?;
            let reused = cache.check_dh(&key);
            Report::Dh(DhReport::from(&analyzer.analyze(key, reused)))
        }
        Some(Entry::Ecdh(data)) => {
            let (curve, point) = parse_ecdh_params(&data)?;
            let reused = cache.check_ecdh(curve, &point);
            Report::Ecdh(EcdhReport::new(curve, &point, reused))
        }
    };
    Ok(Some(report))
}

/// Analyze one input line. Failures become [`Report::Error`].
pub fn analyze_line(
    analyzer: &DhAnalyzer,
    cache: &mut ReuseCache,
    line_no: usize,
    line: &str,
) -> Option<Report> {
    match process_line(analyzer, cache, line) {
        Ok(report) => report,
        Err(e) => {
            warn!(line = line_no, error = %e, "skipping entry");
            Some(Report::Error {
                line: line_no,
                error: e.to_string(),
            })
        }
    }
}

pub fn run(
    analyzer: &DhAnalyzer,
    file: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let reader: Box<dyn BufRead> = if file == "-" {
        Box::new(io::stdin().lock())
    } else {
        Box::new(BufReader::new(File::open(file)?))
    };

    let mut cache = ReuseCache::default();
    let mut analyzed = 0usize;
    let mut failed = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(report) = analyze_line(analyzer, &mut cache, idx + 1, &line) else {
            continue;
        };
        if matches!(report, Report::Error { .. }) {
            failed += 1;
        } else {
            analyzed += 1;
        }
        report::print(&report, json)?;
    }

    info!(analyzed, failed, "batch complete");
    eprintln!("Analyzed {analyzed} entries, {failed} failed");
    Ok(())
}
