/// Name of the marker directive when none is configured.
pub const DEFAULT_CONNECTION_DIRECTIVE_NAME: &str = "connection";

/// Name of the cache-hint directive when none is configured.
pub const DEFAULT_CACHE_HINT_DIRECTIVE_NAME: &str = "cacheControl";

/// Name of the cache-hint directive's numeric argument when none is
/// configured.
pub const DEFAULT_CACHE_HINT_ARGUMENT_NAME: &str = "maxAge";

/// Options for a single connection transform.
///
/// ```
/// use libgraphql_connection::CacheHintConfig;
/// use libgraphql_connection::ConnectionConfig;
///
/// let config = ConnectionConfig::new()
///     .with_directive_name("paginated")
///     .with_cache_hints(CacheHintConfig::default());
///
/// assert_eq!(config.directive_name(), "paginated");
/// assert!(config.cache_hints().is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionConfig {
    cache_hints: Option<CacheHintConfig>,
    directive_name: String,
}
impl ConnectionConfig {
    pub fn new() -> Self {
        Self {
            cache_hints: None,
            directive_name: DEFAULT_CONNECTION_DIRECTIVE_NAME.to_string(),
        }
    }

    /// Cache-hint propagation settings, or `None` when propagation is
    /// disabled (the default).
    pub fn cache_hints(&self) -> Option<&CacheHintConfig> {
        self.cache_hints.as_ref()
    }

    /// Name of the marker directive (without the leading `@`).
    pub fn directive_name(&self) -> &str {
        self.directive_name.as_str()
    }

    /// Enables propagation of cache hints from base types (and fields that
    /// return them) onto the generated `*Edge` and `*Connection` types.
    pub fn with_cache_hints(mut self, cache_hints: CacheHintConfig) -> Self {
        self.cache_hints = Some(cache_hints);
        self
    }

    pub fn with_directive_name(mut self, directive_name: impl Into<String>) -> Self {
        self.directive_name = directive_name.into();
        self
    }

    pub fn without_cache_hints(mut self) -> Self {
        self.cache_hints = None;
        self
    }
}
impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifies the cache-hint directive and the argument that carries its
/// numeric max-age (`@cacheControl(maxAge: 30)` by default).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheHintConfig {
    argument_name: String,
    directive_name: String,
}
impl CacheHintConfig {
    pub fn new(
        directive_name: impl Into<String>,
        argument_name: impl Into<String>,
    ) -> Self {
        Self {
            argument_name: argument_name.into(),
            directive_name: directive_name.into(),
        }
    }

    pub fn argument_name(&self) -> &str {
        self.argument_name.as_str()
    }

    pub fn directive_name(&self) -> &str {
        self.directive_name.as_str()
    }
}
impl Default for CacheHintConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_CACHE_HINT_DIRECTIVE_NAME,
            DEFAULT_CACHE_HINT_ARGUMENT_NAME,
        )
    }
}
