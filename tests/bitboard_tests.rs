use tictactoe::{BitBoard, BitBoardError, BB};

#[test]
fn test_get_set() {
    let mut bb = BB::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(1, 2).unwrap());

    bb.set(2, 0).unwrap();
    assert_eq!(bb.count_ones(), 2);
}

#[test]
fn test_out_of_bounds() {
    let mut bb = BB::new();
    assert_eq!(
        bb.set(3, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 3, col: 0 }
    );
    assert!(bb.get(0, 3).is_err());
    assert!(bb.is_empty());
}

#[test]
fn test_full_and_raw_masking() {
    assert_eq!(BB::full().count_ones(), 9);
    // bits above N*N are dropped
    assert_eq!(BB::from_raw(u16::MAX), BB::full());
    assert_eq!(BitBoard::<u16, 4>::full().into_raw(), u16::MAX);
}

#[test]
fn test_contains_and_ops() {
    let line = BB::from_cells([(0, 0), (0, 1), (0, 2)]).unwrap();
    let mut marks = BB::from_cells([(0, 0), (0, 2)]).unwrap();
    assert!(!marks.contains(line));
    assert!(line.contains(marks));

    marks |= BB::from_cells([(0, 1), (2, 2)]).unwrap();
    assert!(marks.contains(line));
    assert_eq!(marks & line, line);
    assert_eq!((marks | line).count_ones(), 4);
}
