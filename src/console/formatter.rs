// Turns a listing result into the text printed on stdout.
// Kept separate from `main` so the exact output can be tested.

use std::io::{self, Write};

use crate::core::projects::{Attempt, ListingError, ListingReport};

/// Write the whole run: one block per attempt, then the exhaustion line if
/// nothing succeeded.
pub fn write_listing(
    out: &mut impl Write,
    result: &Result<ListingReport, ListingError>,
) -> io::Result<()> {
    let report = match result {
        Ok(report) => report,
        Err(e) => return writeln!(out, "Error: {}", e),
    };

    for attempt in &report.attempts {
        write_attempt(out, attempt)?;
    }

    if report.outcome().is_err() {
        writeln!(out)?;
        writeln!(out, "Failed to list projects with all API versions tried")?;
    }

    Ok(())
}

fn write_attempt(out: &mut impl Write, attempt: &Attempt) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Trying API version: {}", attempt.endpoint.api_version)?;

    if let Some(response) = &attempt.response {
        writeln!(out, "Status Code: {}", response.status)?;
        writeln!(out, "Response Headers: {:?}", response.headers)?;
    }

    match &attempt.result {
        Ok(projects) => {
            writeln!(out)?;
            writeln!(out, "Projects found:")?;
            for project in projects {
                writeln!(out, "- {} (ID: {})", project.name, project.id)?;
            }
        }
        Err(ListingError::Transport(description)) => {
            writeln!(out, "Error making request: {}", description)?;
        }
        Err(ListingError::Api { body, .. }) => {
            writeln!(out, "Error Response: {}", body)?;
        }
        Err(ListingError::MalformedBody { reason, .. }) => {
            writeln!(out, "Error parsing response: {}", reason)?;
        }
        Err(other) => {
            writeln!(out, "Error: {}", other)?;
        }
    }

    Ok(())
}
