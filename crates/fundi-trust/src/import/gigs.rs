use super::ImportError;
use crate::regions::GigRecord;
use std::io::Read;
use tracing::debug;

/// Reads gig rows with `id,job_type,client_name,county,constituency,ward,is_verified` headers.
pub fn read_gig_records<R: Read>(reader: R) -> Result<Vec<GigRecord>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let gigs = csv_reader
        .deserialize::<GigRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    debug!(gigs = gigs.len(), "gig records imported");
    Ok(gigs)
}
