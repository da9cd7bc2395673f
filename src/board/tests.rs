use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
}

#[test]
fn test_mark_parse() {
    assert_eq!("x".parse::<Mark>().unwrap(), Mark::X);
    assert_eq!(" O ".parse::<Mark>().unwrap(), Mark::O);
    assert!("xo".parse::<Mark>().is_err());
    assert!("".parse::<Mark>().is_err());
    assert!("0".parse::<Mark>().is_err());
    assert_eq!(Mark::from_char('0'), None);
    assert!(matches!(
        "z".parse::<Mark>(),
        Err(EngineError::InvalidInput { .. })
    ));
}

#[test]
fn test_cell_index() {
    assert_eq!(cell_index(0, 0), 0);
    assert_eq!(cell_index(1, 1), 4);
    assert_eq!(cell_index(2, 2), 8);
    assert_eq!(cell_index(1, 2), 5);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
}

#[test]
fn test_bitboard_set_clear() {
    let mut bb = Bitboard::new();
    assert!(bb.is_empty());
    bb.set(0);
    bb.set(8);
    assert!(bb.get(0));
    assert!(bb.get(8));
    assert!(!bb.get(4));
    assert_eq!(bb.count(), 2);
    bb.clear(0);
    assert!(!bb.get(0));
    assert_eq!(bb.count(), 1);
}

#[test]
fn test_bitboard_iter_ascending() {
    let bb = Bitboard::from_cells(&[7, 2, 5]);
    let cells: Vec<usize> = bb.iter_ones().collect();
    assert_eq!(cells, vec![2, 5, 7]);
}

#[test]
fn test_bitboard_complement_stays_on_board() {
    let bb = Bitboard::from_cells(&[0, 1, 2]);
    let rest = bb.complement();
    assert_eq!(rest.count(), 6);
    assert_eq!(rest.iter_ones().max(), Some(8));
    assert_eq!(Bitboard::full().complement(), Bitboard::new());
}

#[test]
fn test_bitboard_contains() {
    let line = Bitboard::from_cells(&[0, 4, 8]);
    assert!(Bitboard::from_cells(&[0, 3, 4, 8]).contains(line));
    assert!(!Bitboard::from_cells(&[0, 4]).contains(line));
}

#[test]
fn test_board_place_and_get() {
    let mut board = Board::new();
    assert!(board.is_board_empty());
    board.place(4, Mark::X);
    board.place(0, Mark::O);
    assert_eq!(board.get(4), Some(Mark::X));
    assert_eq!(board.get(0), Some(Mark::O));
    assert_eq!(board.get(1), None);
    assert!(board.is_empty(1));
    assert_eq!(board.stone_count(), 2);

    board.place(4, Mark::O);
    assert_eq!(board.get(4), Some(Mark::O));
    assert_eq!(board.count(Mark::X), 0);

    board.clear(4);
    assert!(board.is_empty(4));
}

#[test]
fn test_stones_stay_disjoint() {
    let mut board: Board = "XO.......".parse().unwrap();
    board.place(0, Mark::O);
    board.place(1, Mark::X);
    let x = board.stones(Mark::X);
    let o = board.stones(Mark::O);
    assert!((x & o).is_empty());
    assert_eq!(x, Bitboard::from_cells(&[1]));
    assert_eq!(o, Bitboard::from_cells(&[0]));
    assert_eq!(board.occupied(), x | o);
}

#[test]
fn test_empty_cells_ascending() {
    let mut board = Board::new();
    board.place(0, Mark::X);
    board.place(4, Mark::O);
    board.place(8, Mark::X);
    let empty: Vec<usize> = board.empty_cells().collect();
    assert_eq!(empty, vec![1, 2, 3, 5, 6, 7]);
}

#[test]
fn test_is_full() {
    let board: Board = "XOXXOOOX.".parse().unwrap();
    assert!(!board.is_full());
    let board: Board = "XOXXOOOXX".parse().unwrap();
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
fn test_side_to_move() {
    let mut board = Board::new();
    assert_eq!(board.side_to_move(), Mark::X);
    board.place(4, Mark::X);
    assert_eq!(board.side_to_move(), Mark::O);
    board.place(0, Mark::O);
    assert_eq!(board.side_to_move(), Mark::X);
}

#[test]
fn test_parse_board_formats() {
    let compact: Board = "XX.......".parse().unwrap();
    let rows: Board = "XX./.../...".parse().unwrap();
    let grid: Board = "X|X|.\n.|.|.\n.|.|.\n".parse().unwrap();
    let lower: Board = "xx-___...".parse().unwrap();
    assert_eq!(compact, rows);
    assert_eq!(compact, grid);
    assert_eq!(compact, lower);
    assert_eq!(compact.get(0), Some(Mark::X));
    assert_eq!(compact.get(1), Some(Mark::X));
    assert_eq!(compact.stone_count(), 2);
}

#[test]
fn test_parse_board_rejects_malformed() {
    assert!(matches!(
        "XX......".parse::<Board>(),
        Err(EngineError::InvalidInput { .. })
    ));
    assert!(matches!(
        "XX........".parse::<Board>(),
        Err(EngineError::InvalidInput { .. })
    ));
    assert!(matches!(
        "XX.....#.".parse::<Board>(),
        Err(EngineError::InvalidInput { .. })
    ));
    // Digit zero is not the letter O
    assert!(matches!(
        "0X.......".parse::<Board>(),
        Err(EngineError::InvalidInput { .. })
    ));
}

#[test]
fn test_try_from_cells() {
    let cells = [Some(Mark::X), None, Some(Mark::O)];
    assert!(Board::try_from(&cells[..]).is_err());

    let mut cells = [None; TOTAL_CELLS];
    cells[2] = Some(Mark::O);
    let board = Board::try_from(&cells[..]).unwrap();
    assert_eq!(board.get(2), Some(Mark::O));
    assert_eq!(board.cells(), cells);
}

#[test]
fn test_display_round_trips_through_parse() {
    let board: Board = "XO.\n.X.\n..O".parse().unwrap();
    let shown = board.to_string();
    assert_eq!(shown, "X|O|.\n.|X|.\n.|.|O\n");
    assert_eq!(shown.parse::<Board>().unwrap(), board);
    assert_eq!(board.to_compact(), "XO..X...O");
}

#[test]
fn test_board_json() {
    let board: Board = "XO.......".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    assert_eq!(json, r#"["X","O",null,null,null,null,null,null,null]"#);

    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);

    let short: Result<Board, _> = serde_json::from_str(r#"["X","O"]"#);
    assert!(short.is_err());
    let bad_mark: Result<Board, _> =
        serde_json::from_str(r#"["Z",null,null,null,null,null,null,null,null]"#);
    assert!(bad_mark.is_err());
}
