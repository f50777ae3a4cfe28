use super::bitboard::BitBoard;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Occupancy mask type for one mark on the board.
pub type BB = BitBoard<u16, BOARD_SIZE>;

/// Raw masks of the three rows, indexed by row.
pub const ROW_LINES: [u16; BOARD_SIZE] = [0b000_000_111, 0b000_111_000, 0b111_000_000];
/// Raw masks of the three columns, indexed by column.
pub const COL_LINES: [u16; BOARD_SIZE] = [0b001_001_001, 0b010_010_010, 0b100_100_100];
/// Cells (0,0), (1,1), (2,2).
pub const MAIN_DIAGONAL: u16 = 0b100_010_001;
/// Cells (0,2), (1,1), (2,0).
pub const ANTI_DIAGONAL: u16 = 0b001_010_100;

/// All eight winning lines: rows, then columns, then both diagonals.
pub const WINNING_LINES: [u16; 8] = [
    ROW_LINES[0],
    ROW_LINES[1],
    ROW_LINES[2],
    COL_LINES[0],
    COL_LINES[1],
    COL_LINES[2],
    MAIN_DIAGONAL,
    ANTI_DIAGONAL,
];
