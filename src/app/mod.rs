// Presentation of shipping quotes for the CLI and other callers.

pub mod report;
