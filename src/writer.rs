use trb::{AccountReport, Result};

use csv::Writer;

/// Serializes the account rows into a CSV document, header included
pub fn write_reports(reports: &[AccountReport]) -> Result<String> {
    let mut wtr = Writer::from_writer(vec![]);

    for report in reports.iter() {
        log::debug!("Serializing report: {report:?}");
        wtr.serialize(report)?;
    }

    let utf8 = wtr.into_inner()?;
    let string = String::from_utf8(utf8)?;

    return Ok(string);
}
