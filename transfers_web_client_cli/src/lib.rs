pub mod logic;
pub mod render;

/// The base URL used when none is provided on the command line.
///
/// Points at the root API path the transfers web service serves;
/// the trailing slash matters for joining endpoint paths onto it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081/partiel1/api/";
