//! Policy knobs that tune decode permissiveness.

/// Absolute cap on the item count of a sequence whose element shape is
/// zero-sized, when [`Config::max_items_zero_sized`] is left at its default.
pub const DEFAULT_MAX_ITEMS_ZERO_SIZED: u64 = 1 << 20;

/// Decoder/encoder policy configuration.
///
/// The default value matches the interop-permissive behavior described in
/// spec.md §6.2: non-minimal compact encodings are accepted, zero-sized
/// sequence elements are capped at 2^20 items, and trailing bytes after a
/// top-level decode are not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Reject non-minimal compact-integer encodings on decode.
    pub strict_minimal_compact: bool,
    /// Absolute cap on the declared length of a sequence of zero-sized elements.
    pub max_items_zero_sized: u64,
    /// Require the top-level decode to consume the entire input.
    pub require_full_consumption: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            strict_minimal_compact: false,
            max_items_zero_sized: DEFAULT_MAX_ITEMS_ZERO_SIZED,
            require_full_consumption: false,
        }
    }
}
