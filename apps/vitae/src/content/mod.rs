// Content ingestion: wire sections → normalized `SectionKind` payloads.
// The title alias table lives here so renderers only ever see typed kinds.

pub mod aliases;
pub mod ingest;

pub use ingest::ingest_content;
