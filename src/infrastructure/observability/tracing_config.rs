/// Configuration for tracing initialization, supplied by the composition
/// root rather than read from the environment here.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}
