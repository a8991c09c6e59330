use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;
use toruslife_lib::{
    Board, Cell, Config, Error as GameError, Game, Generation, Seed, Size, Source, TurnHook,
};

#[test]
fn wrap_maps_any_coordinate_onto_the_board() {
    let size = Size::new(5, 3);
    for v in -12..12 {
        let (x, y) = size.wrap((v, v));
        assert!((0..5).contains(&x));
        assert!((0..3).contains(&y));
        assert_eq!(size.wrap((v, v)), size.wrap((v + 5, v + 3)));
    }
    assert_eq!(size.wrap((-1, -1)), (4, 2));
    assert_eq!(size.wrap((7, -4)), (2, 2));
}

#[test]
fn coords_visit_every_cell_once_in_row_major_order() {
    let size = Size::new(2, 3);
    let coords: Vec<_> = size.coords().collect();
    assert_eq!(coords, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    assert_eq!(size.coords().count(), size.area());
}

#[test]
fn board_round_trip_counts_every_non_zero_character() -> Result<(), Box<dyn Error>> {
    let board = Board::parse("0101\n1010\n0011\n")?;
    assert_eq!(board.size(), Size::new(3, 4));
    let generation = Generation::new(Source::Board(&board));
    assert_eq!(generation.live(), 6);
    assert!(!generation.is_live((0, 0)));
    assert!(generation.is_live((0, 1)));
    Ok(())
}

#[test]
fn queries_are_periodic_in_both_axes() -> Result<(), Box<dyn Error>> {
    let board = Board::parse("0101\n1010\n0011\n")?;
    let generation = Generation::new(Source::Board(&board));
    let size = generation.size();
    for (x, y) in size.coords() {
        let live = generation.is_live((x, y));
        assert_eq!(live, generation.is_live((x + size.width, y)));
        assert_eq!(live, generation.is_live((x, y + size.height)));
        assert_eq!(live, generation.is_live((x - size.width, y - size.height)));
    }
    Ok(())
}

#[test]
fn neighborhood_never_counts_the_cell_itself() -> Result<(), Box<dyn Error>> {
    let board = Board::parse("10000\n00000\n00000\n00000\n00000\n")?;
    let generation = Generation::new(Source::Board(&board));
    assert_eq!(generation.live_neighbors((0, 0)), 0);
    assert_eq!(generation.live_neighbors((1, 1)), 1);
    // The live cell is a neighbor across both seams.
    assert_eq!(generation.live_neighbors((4, 4)), 1);
    Ok(())
}

#[test]
fn neighborhood_is_capped_at_eight() -> Result<(), Box<dyn Error>> {
    let board = Board::parse("111\n111\n111\n")?;
    let generation = Generation::new(Source::Board(&board));
    for coord in generation.size().coords() {
        assert_eq!(generation.live_neighbors(coord), 8);
    }
    Ok(())
}

#[test]
fn a_generation_never_differs_from_itself() -> Result<(), Box<dyn Error>> {
    let board = Board::parse("0101\n1010\n0011\n")?;
    let generation = Generation::new(Source::Board(&board));
    assert_eq!(generation.changed(&generation), 0);
    Ok(())
}

#[test]
fn the_life_rule_matches_births_and_survivals() -> Result<(), Box<dyn Error>> {
    let board = Board::parse(
        "00000\n\
         01100\n\
         01000\n\
         00000\n\
         00000\n",
    )?;
    let generation = Generation::new(Source::Board(&board));
    // Two live neighbors: a live cell survives.
    assert_eq!(generation.next_cell((1, 1)), Cell::Alive);
    // Exactly three live neighbors: a dead cell is born.
    assert_eq!(generation.next_cell((2, 2)), Cell::Alive);
    // One live neighbor or none: stays dead.
    assert_eq!(generation.next_cell((0, 0)), Cell::Dead);
    assert_eq!(generation.next_cell((3, 3)), Cell::Dead);
    Ok(())
}

#[test]
fn stripes_fill_every_second_cell_in_construction_order() {
    let generation = Generation::new(Source::Stripes(Size::new(6, 6), 2));
    assert_eq!(generation.live(), 18);
    // The counter starts at the first visited cell, so the second one
    // is the first to come alive.
    assert!(!generation.is_live((0, 0)));
    assert!(generation.is_live((0, 1)));
}

#[test]
fn stripes_of_one_fill_the_whole_board() {
    let generation = Generation::new(Source::Stripes(Size::new(4, 5), 1));
    assert_eq!(generation.live(), 20);
}

#[test]
fn a_random_board_has_the_configured_size() {
    let generation = Generation::new(Source::Random(Size::new(32, 16)));
    assert_eq!(generation.size(), Size::new(32, 16));
    assert!(generation.live() <= generation.size().area());
}

#[test]
fn an_all_dead_board_ends_after_exactly_one_turn() -> Result<(), Box<dyn Error>> {
    let board = Board::parse("0000\n0000\n0000\n0000\n")?;
    let mut game = Game::new(Source::Board(&board));
    assert!(!game.over());
    assert_eq!(game.live_count(), 0);
    game.turn()?;
    assert!(game.over());
    assert_eq!(game.turns(), 1);
    assert_eq!(game.live_count(), 0);
    Ok(())
}

#[test]
fn lonely_cells_die_out() -> Result<(), Box<dyn Error>> {
    let board = Board::parse("000\n010\n000\n")?;
    let mut game = Game::new(Source::Board(&board));
    assert_eq!(game.live_count(), 1);
    game.turn()?;
    assert!(game.over());
    assert_eq!(game.live_count(), 0);
    assert_eq!(game.turns(), 1);
    Ok(())
}

#[test]
fn a_block_still_life_ends_the_game_by_stagnation() -> Result<(), Box<dyn Error>> {
    let board = Board::parse(include_str!("../../patterns/block.txt"))?;
    let mut game = Game::new(Source::Board(&board));
    assert_eq!(game.live_count(), 4);
    game.turn()?;
    assert!(game.over());
    assert_eq!(game.turns(), 1);
    assert_eq!(game.live_count(), 4);
    assert_eq!(game.changed(), 0);
    Ok(())
}

#[test]
fn a_blinker_oscillates_forever() -> Result<(), Box<dyn Error>> {
    let board = Board::parse(include_str!("../../patterns/blinker.txt"))?;
    let original = Generation::new(Source::Board(&board));
    let mut game = Game::new(Source::Board(&board));
    for _ in 0..10 {
        game.turn()?;
        assert!(!game.over());
        assert_eq!(game.live_count(), 3);
        assert_eq!(game.changed(), 4);
    }
    // An even number of turns puts every cell back where it started.
    assert_eq!(game.current().changed(&original), 0);
    Ok(())
}

#[test]
fn a_glider_crosses_the_torus_seam() -> Result<(), Box<dyn Error>> {
    let board = Board::parse(include_str!("../../patterns/glider.txt"))?;
    let start = Generation::new(Source::Board(&board));
    let mut game = Game::new(Source::Board(&board));
    for _ in 0..4 {
        game.turn()?;
        assert!(!game.over());
    }
    // Four turns move the glider one cell along each axis.
    assert_eq!(game.current().live(), 5);
    for (x, y) in start.size().coords() {
        assert_eq!(start.is_live((x, y)), game.current().is_live((x + 1, y + 1)));
    }
    // 28 more turns take it all the way around the 8-cell board.
    for _ in 0..28 {
        game.turn()?;
    }
    assert_eq!(game.current().changed(&start), 0);
    Ok(())
}

#[test]
fn turning_a_finished_game_fails() -> Result<(), Box<dyn Error>> {
    let board = Board::parse("0000\n0000\n0000\n0000\n")?;
    let mut game = Game::new(Source::Board(&board));
    game.turn()?;
    assert!(game.over());
    assert_eq!(game.turn(), Err(GameError::GameOverError));
    assert_eq!(game.turn(), Err(GameError::GameOverError));
    assert!(game.over());
    Ok(())
}

#[test]
fn the_turn_hook_sees_the_new_turn_before_the_handover() -> Result<(), Box<dyn Error>> {
    let board = Board::parse(include_str!("../../patterns/blinker.txt"))?;
    let seen = Rc::new(RefCell::new(Vec::new()));
    let record = Rc::clone(&seen);
    let hook: TurnHook = Box::new(move |game, generation| {
        // The new generation is not yet current; it differs from the
        // current one by exactly this turn's changed count.
        assert_eq!(game.current().changed(generation), game.changed());
        record.borrow_mut().push((
            game.turns(),
            game.live_count(),
            game.changed(),
            generation.live(),
        ));
    });
    let mut game = Game::with_hook(Source::Board(&board), hook);
    game.turn()?;
    game.turn()?;
    assert_eq!(*seen.borrow(), [(1, 3, 4, 3), (2, 3, 4, 3)]);
    Ok(())
}

#[test]
fn boards_with_uneven_lines_are_rejected() {
    assert_eq!(
        Board::parse("010\n10\n"),
        Err(GameError::UnevenLinesError(2, 2, 3))
    );
    assert_eq!(Board::parse(""), Err(GameError::EmptyBoardError));
    assert_eq!(Board::parse("  \n \n"), Err(GameError::EmptyBoardError));
}

#[test]
fn blank_lines_and_padding_are_ignored() -> Result<(), Box<dyn Error>> {
    let board = Board::parse("  11\n\n  00\n")?;
    assert_eq!(board.size(), Size::new(2, 2));
    let generation = Generation::new(Source::Board(&board));
    assert_eq!(generation.live(), 2);
    Ok(())
}

#[test]
fn config_defaults_and_builders() -> Result<(), Box<dyn Error>> {
    let config = Config::default();
    assert_eq!(config.width, 16);
    assert_eq!(config.height, 16);
    assert_eq!(config.seed, Seed::Random);

    let config = Config::new(4, 6).set_seed(Seed::Stripes(3));
    let game = config.game()?;
    assert_eq!(game.current().size(), Size::new(4, 6));
    assert_eq!(game.live_count(), 8);
    Ok(())
}

#[test]
fn config_validates_its_input() {
    assert_eq!(
        Config::new(0, 5).game().err(),
        Some(GameError::NonPositiveError)
    );
    assert_eq!(
        Config::new(5, -1).game().err(),
        Some(GameError::NonPositiveError)
    );
    assert_eq!(
        Config::new(5, 5).set_seed(Seed::Stripes(0)).game().err(),
        Some(GameError::ZeroStripesError)
    );
    assert!(matches!(
        Config::new(5, 5)
            .set_seed(Seed::File("no-such-board.txt".into()))
            .game()
            .err(),
        Some(GameError::IoError(_))
    ));
}

#[test]
fn a_game_from_a_board_file_uses_the_file_dimensions() -> Result<(), Box<dyn Error>> {
    let config = Config::new(1, 1).set_seed(Seed::File("../patterns/glider.txt".into()));
    let game = config.game()?;
    assert_eq!(game.current().size(), Size::new(8, 8));
    assert_eq!(game.live_count(), 5);
    Ok(())
}
