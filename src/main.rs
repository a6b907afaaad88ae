mod args;
mod config;
mod reader;
mod session;
mod writer;

use session::Session;
use trb::{input::InputRecord, Result};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning session...");

    let mut session = Session::new();

    process_operations(&mut session)?;

    log::debug!("Operations complete. Listing accounts...");

    report_to_std_out(&session)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read the operations file and replay every operation against the session.
/// Statements go to stderr so stdout carries only the account listing.
fn process_operations(session: &mut Session) -> Result {
    let args = args::parse_input_args()?;
    log::debug!("Found operations file as input arg: {:?}", args.operations_path);

    let mut rdr = reader::build_csv_reader(args.operations_path)?;

    for record in rdr.deserialize::<InputRecord>() {
        log::debug!("Parsing record into InputRecord: {record:?}");
        let input_record = match record {
            Ok(input_record) => input_record,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Parsing input_record into Command: {input_record:?}");
        let command = match input_record.parse_command() {
            Ok(command) => command,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        match session.process(command) {
            Ok(Some(statement)) => eprintln!("{statement}"),
            Ok(None) => {}
            Err(e) => log::warn!("{e}"),
        }
    }

    Ok(())
}

/// Write the account listing to stdout
fn report_to_std_out(session: &Session) -> Result {
    let report = session.build_report();
    log::debug!("Listing {} accounts", report.len());

    let output = writer::write_reports(&report)?;

    print!("{}", output);

    Ok(())
}
