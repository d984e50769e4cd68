// The grid keeps a one-cell border of permanently empty cells around the
// playable area so connection paths can route around the outside edge.
pub const GRID_ROWS: usize = 10;
pub const GRID_COLS: usize = 7;
pub const INTERIOR_SLOTS: usize = (GRID_ROWS - 2) * (GRID_COLS - 2);

// Number of distinct tile faces; tiles are always dealt in pairs
pub const TILE_KINDS: u8 = 11;

// Adventure settings
pub const MAX_LEVEL: u32 = 40;
pub const PIECE_COUNT: u8 = 40;     // Collectible pieces, one awarded per cleared level
pub const LEVEL_TIME_SECS: u64 = 60;

// How long the connection line stays on screen after a match (milliseconds)
pub const PATH_FLASH_MS: u64 = 500;
