//! Search, validation, and solving integration tests.

use boggle_engine::core::{Board, BoardRng, Cell, Path};
use boggle_engine::dictionary::{Dictionary, PrefixIndex};
use boggle_engine::generate::BoardGenerator;
use boggle_engine::search::{LengthTarget, PathSearch};
use boggle_engine::solver::max_score_paths;
use boggle_engine::validate::{validate_path, PathError};

fn cats_board() -> Board {
    Board::from_letters(&["CA", "TS"]).unwrap()
}

fn cats_dictionary() -> Dictionary {
    Dictionary::from_words(["CAT", "CATS", "AT"])
}

fn path(cells: &[(usize, usize)]) -> Path {
    cells.iter().map(|&(r, c)| Cell::new(r, c)).collect()
}

// =============================================================================
// Fixed-Length Search Tests
// =============================================================================

#[test]
fn test_three_cell_paths_on_cats_board() {
    let board = cats_board();
    let dict = cats_dictionary();
    let index = PrefixIndex::from_dictionary(&dict);
    let mut search = PathSearch::new(&board, &index);

    let paths = search.find_paths(LengthTarget::PathCells(3));

    assert!(
        paths.contains(&path(&[(0, 0), (0, 1), (1, 0)])),
        "C -> A -> T should be found"
    );
    assert!(paths.iter().all(|p| p.len() == 3));
    assert!(paths
        .iter()
        .all(|p| dict.contains(&board.spell(p).unwrap())));
}

#[test]
fn test_four_cell_paths_spell_cats() {
    let board = cats_board();
    let index = PrefixIndex::from_dictionary(&cats_dictionary());
    let mut search = PathSearch::new(&board, &index);

    let paths = search.find_paths(LengthTarget::PathCells(4));

    assert_eq!(paths, vec![path(&[(0, 0), (0, 1), (1, 0), (1, 1)])]);
    assert_eq!(board.spell(&paths[0]).unwrap(), "CATS");
}

#[test]
fn test_word_length_mode_counts_letters() {
    let board = cats_board();
    let index = PrefixIndex::from_dictionary(&cats_dictionary());
    let mut search = PathSearch::new(&board, &index);

    let paths = search.find_paths(LengthTarget::WordChars(2));

    assert!(!paths.is_empty(), "AT is reachable");
    for p in &paths {
        let word = board.spell(p).unwrap();
        assert_eq!(word.chars().count(), 2, "wrong length for {word:?}");
    }
}

#[test]
fn test_target_longer_than_board_finds_nothing() {
    let board = cats_board();
    let index = PrefixIndex::from_dictionary(&cats_dictionary());
    let mut search = PathSearch::new(&board, &index);

    assert!(search.find_paths(LengthTarget::PathCells(5)).is_empty());
}

#[test]
fn test_search_is_reusable() {
    let board = cats_board();
    let index = PrefixIndex::from_dictionary(&cats_dictionary());
    let mut search = PathSearch::new(&board, &index);

    let first = search.find_paths(LengthTarget::PathCells(3));
    let second = search.find_paths(LengthTarget::PathCells(3));

    assert_eq!(first, second, "same search, same query, same results");
}

// =============================================================================
// Path Validation Tests
// =============================================================================

#[test]
fn test_valid_path_spells_its_word() {
    let word = validate_path(
        &cats_board(),
        &path(&[(0, 0), (0, 1), (1, 0)]),
        &cats_dictionary(),
    )
    .unwrap();
    assert_eq!(word, "CAT");
}

#[test]
fn test_out_of_bounds_cell_is_reported() {
    let err = validate_path(
        &cats_board(),
        &path(&[(0, 0), (1, 1), (2, 2)]),
        &cats_dictionary(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        PathError::OutOfBounds {
            index: 2,
            cell: Cell::new(2, 2),
        }
    );
}

#[test]
fn test_spellable_non_word_is_rejected() {
    let err = validate_path(&cats_board(), &path(&[(0, 0), (1, 1)]), &cats_dictionary())
        .unwrap_err();

    assert_eq!(
        err,
        PathError::NotAWord {
            word: "CS".to_string(),
        }
    );
}

#[test]
fn test_revisited_cell_is_rejected() {
    let err = validate_path(
        &cats_board(),
        &path(&[(0, 1), (1, 0), (0, 1)]),
        &cats_dictionary(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        PathError::RepeatedCell {
            index: 2,
            cell: Cell::new(0, 1),
        }
    );
}

// =============================================================================
// Max-Score Solving Tests
// =============================================================================

#[test]
fn test_cats_board_scores() {
    let solution = max_score_paths(&cats_board(), &cats_dictionary());

    assert_eq!(solution.score_of("CAT"), Some(9));
    assert_eq!(solution.score_of("CATS"), Some(16));
    assert_eq!(solution.score_of("AT"), Some(4));
    assert_eq!(solution.total_score(), 29);
}

#[test]
fn test_every_best_path_validates() {
    let board = cats_board();
    let dict = cats_dictionary();

    for (word, best) in max_score_paths(&board, &dict).iter() {
        let spelled = validate_path(&board, best, &dict)
            .unwrap_or_else(|err| panic!("best path for {word:?} rejected: {err}"));
        assert_eq!(spelled, word);
    }
}

#[test]
fn test_empty_board_has_empty_solution() {
    let board = Board::from_rows(Vec::<Vec<String>>::new()).unwrap();
    let solution = max_score_paths(&board, &cats_dictionary());

    assert!(solution.is_empty());
    assert_eq!(solution.total_score(), 0);
}

#[test]
fn test_unreachable_words_are_left_out() {
    // Every letter of STAB is on the board, but never in a connected
    // chain.
    let board = Board::from_letters(&["BXS", "XXT", "AXX"]).unwrap();
    let dict = Dictionary::from_words(["STAB", "AT"]);

    let solution = max_score_paths(&board, &dict);

    assert!(!solution.contains_word("STAB"));
    assert!(solution.contains_word("AT"));
}

// =============================================================================
// Multi-Letter Tile Tests
// =============================================================================

#[test]
fn test_qu_tile_spells_two_letters() {
    let board = Board::from_rows(vec![vec!["QU", "I"], vec!["T", "S"]]).unwrap();
    let dict = Dictionary::from_words(["QUIT", "QUITS", "SIT"]);
    let index = PrefixIndex::from_dictionary(&dict);
    let mut search = PathSearch::new(&board, &index);

    // QUIT covers three cells but four letters.
    let by_cells = search.find_paths(LengthTarget::PathCells(3));
    assert!(by_cells.contains(&path(&[(0, 0), (0, 1), (1, 0)])));

    let by_chars = search.find_paths(LengthTarget::WordChars(4));
    assert!(by_chars.contains(&path(&[(0, 0), (0, 1), (1, 0)])));
}

#[test]
fn test_qu_board_scores_by_cell_count() {
    let board = Board::from_rows(vec![vec!["QU", "I"], vec!["T", "S"]]).unwrap();
    let dict = Dictionary::from_words(["QUIT", "QUITS", "SIT"]);

    let solution = max_score_paths(&board, &dict);

    assert_eq!(solution.score_of("QUIT"), Some(9), "three cells squared");
    assert_eq!(solution.score_of("QUITS"), Some(16), "four cells squared");
    assert_eq!(solution.score_of("SIT"), Some(9));
    assert_eq!(solution.total_score(), 34);
}

// =============================================================================
// Dealt Board Tests
// =============================================================================

#[test]
fn test_dealt_boards_solve_consistently() {
    let generator = BoardGenerator::classic();
    let dict = Dictionary::from_words([
        "EAT", "RATE", "NOTE", "SIT", "TEN", "TONE", "SEAT", "NEST", "QUIT",
    ]);

    let board = generator.generate(&mut BoardRng::new(7));
    let again = generator.generate(&mut BoardRng::new(7));
    assert_eq!(board, again, "same seed should deal the same board");

    let solution = max_score_paths(&board, &dict);
    for (word, best) in solution.iter() {
        let spelled = validate_path(&board, best, &dict)
            .unwrap_or_else(|err| panic!("best path for {word:?} rejected: {err}"));
        assert_eq!(spelled, word);
    }
}

// =============================================================================
// Search Statistics Tests
// =============================================================================

#[test]
fn test_stats_track_the_walk() {
    let board = cats_board();
    let index = PrefixIndex::from_dictionary(&cats_dictionary());
    let mut search = PathSearch::new(&board, &index);

    let paths = search.find_paths(LengthTarget::PathCells(3));
    let stats = search.stats();

    assert!(stats.cells_visited > 0);
    assert_eq!(stats.paths_found as usize, paths.len());
}
