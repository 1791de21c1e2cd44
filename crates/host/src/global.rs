pub struct Config;

impl Config {
    /// Width of the placeholder buffers handed out by the mock host.
    pub const DEFAULT_BUFFER_LEN: usize = 64;
    /// Deepest nested call the in-memory host accepts.
    pub const MAX_CALL_DEPTH: i32 = 1024;
    /// Number of most recent blocks whose hashes are visible.
    pub const BLOCK_HASH_WINDOW: i64 = 256;
}
