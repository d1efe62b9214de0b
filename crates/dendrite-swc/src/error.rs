use dn_core::Error;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("segment {segment}: {source}")]
    Segment {
        segment: u32,
        #[source]
        source: Error,
    },
    #[error("branch table: {0}")]
    Table(#[from] csv::Error),
}
