use seabattle::coord::{format_coord, parse_coord, row_label, CoordError};

#[test]
fn test_parse_valid_coords() {
    assert_eq!(parse_coord("A1", 15), Ok((0, 0)));
    assert_eq!(parse_coord("b7", 15), Ok((1, 6)));
    assert_eq!(parse_coord("  O15 \n", 15), Ok((14, 14)));
    assert_eq!(parse_coord("C 2", 3), Ok((2, 1)));
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse_coord("", 15), Err(CoordError::Empty));
    assert_eq!(parse_coord("   ", 15), Err(CoordError::Empty));
    assert_eq!(parse_coord("A", 15), Err(CoordError::TooShort));
    assert_eq!(parse_coord("11", 15), Err(CoordError::InvalidRow('1')));
    assert_eq!(
        parse_coord("Ax", 15),
        Err(CoordError::InvalidColumn("x".to_string()))
    );
    assert_eq!(
        parse_coord("A-1", 15),
        Err(CoordError::InvalidColumn("-1".to_string()))
    );
    assert_eq!(
        parse_coord("A+5", 15),
        Err(CoordError::InvalidColumn("+5".to_string()))
    );
    assert_eq!(
        parse_coord("B 1 2", 15),
        Err(CoordError::InvalidColumn("1 2".to_string()))
    );
}

#[test]
fn test_bounds_follow_board_size() {
    // the same input is valid or not depending on the configured size
    assert_eq!(parse_coord("P1", 16), Ok((15, 0)));
    assert_eq!(
        parse_coord("P1", 15),
        Err(CoordError::RowOutOfRange { row: 'P', last: 'O' })
    );
    assert_eq!(parse_coord("A16", 16), Ok((0, 15)));
    assert_eq!(
        parse_coord("A16", 15),
        Err(CoordError::ColumnOutOfRange { col: 16, max: 15 })
    );
    assert_eq!(parse_coord("Z26", 26), Ok((25, 25)));
}

#[test]
fn test_format_round_trips_through_parse() {
    for row in 0..26 {
        for col in [0, 8, 9, 25] {
            let text = format_coord(row, col);
            assert_eq!(parse_coord(&text, 26), Ok((row, col)), "{}", text);
        }
    }
    assert_eq!(format_coord(3, 9), "D10");
    assert_eq!(row_label(4), 'E');
}
