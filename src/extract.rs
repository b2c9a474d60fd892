//! Extraction of rate records from the eurofxref XML feed
//!
//! The feed is a `gesmes:Envelope` wrapping nested `Cube` elements in the
//! eurofxref namespace: one outer table wrapper, one date wrapper carrying a
//! `time` attribute, and one rate entry per quote currency carrying
//! `currency` and `rate` attributes.

use crate::error::{EcbRatesError, Result};
use crate::rates::RateRecord;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

/// Namespace of the rate table in the ECB feed
pub const EUROFXREF_NS: &str = "http://www.ecb.int/vocabulary/2002-08-01/eurofxref";

/// Sentinel batch date used when the feed carries no `time` attribute
pub const UNKNOWN_DATE: &str = "unknown";

/// Parse the raw feed payload into the ordered rate-record batch.
///
/// The batch is seeded with the EUR/EUR identity record, followed by one
/// record per currency entry in document order, all stamped with the batch
/// date. A feed without any currency entries yields just the identity record.
pub fn extract_rates(xml: &str) -> Result<Vec<RateRecord>> {
    let mut reader = NsReader::from_str(xml);
    let mut date: Option<String> = None;
    let mut quotes: Vec<(String, f64)> = Vec::new();

    loop {
        let event = reader
            .read_resolved_event()
            .map_err(|e| EcbRatesError::Parse(format!("Malformed XML: {}", e)))?;

        match event {
            (ResolveResult::Bound(Namespace(ns)), Event::Start(e) | Event::Empty(e))
                if ns == EUROFXREF_NS.as_bytes() && e.local_name().as_ref() == b"Cube" =>
            {
                scan_cube(&e, &mut date, &mut quotes)?;
            }
            (_, Event::Eof) => break,
            _ => {}
        }
    }

    // The date wrapper normally precedes the rate entries, but records are
    // only assembled after the full scan so a late date element still stamps
    // the whole batch.
    let date = date.unwrap_or_else(|| UNKNOWN_DATE.to_string());
    log::debug!("extracted {} quote(s) dated {}", quotes.len(), date);

    let mut records = Vec::with_capacity(quotes.len() + 1);
    records.push(RateRecord::identity(&date));
    for (code, value) in quotes {
        records.push(RateRecord::new(&code, value, &date));
    }

    Ok(records)
}

/// Inspect one `Cube` element: the first `time` attribute seen sets the batch
/// date; a `currency` attribute makes this a rate entry.
fn scan_cube(
    element: &BytesStart<'_>,
    date: &mut Option<String>,
    quotes: &mut Vec<(String, f64)>,
) -> Result<()> {
    let mut currency: Option<String> = None;
    let mut rate: Option<String> = None;

    for attr in element.attributes() {
        let attr =
            attr.map_err(|e| EcbRatesError::Parse(format!("Malformed attribute: {}", e)))?;
        let value = attr
            .unescape_value()
            .map_err(|e| EcbRatesError::Parse(format!("Malformed attribute value: {}", e)))?;

        match attr.key.as_ref() {
            b"time" => {
                if date.is_none() {
                    *date = Some(value.into_owned());
                }
            }
            b"currency" => currency = Some(value.into_owned()),
            b"rate" => rate = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(code) = currency {
        let raw = rate.ok_or_else(|| {
            EcbRatesError::InvalidRate(format!("Missing rate attribute for {}", code))
        })?;
        let value: f64 = raw.parse().map_err(|_| {
            EcbRatesError::InvalidRate(format!("Non-numeric rate '{}' for {}", raw, code))
        })?;
        quotes.push((code, value));
    }

    Ok(())
}
