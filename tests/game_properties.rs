//! Behavioural properties of the four games

use proptest::prelude::*;
use rand::SeedableRng;
use tempfile::TempDir;

use tilt_arcade::ScoreStore;
use tilt_arcade::consts::*;
use tilt_arcade::on_screen;
use tilt_arcade::persistence::JsonFileStore;
use tilt_arcade::sim::collision::at_side_wall;
use tilt_arcade::sim::{
    DirectionalIntent, DodgeState, GameId, GameRng, PongState, Position, Simulation, SnakeState,
    TickInput, TiltMazeState,
};

fn intent_strategy() -> impl Strategy<Value = DirectionalIntent> {
    prop_oneof![
        Just(DirectionalIntent::Up),
        Just(DirectionalIntent::Down),
        Just(DirectionalIntent::Left),
        Just(DirectionalIntent::Right),
        Just(DirectionalIntent::None),
    ]
}

fn game_id_strategy() -> impl Strategy<Value = GameId> {
    prop::sample::select(GameId::ALL.to_vec())
}

proptest! {
    #[test]
    fn snake_length_tracks_food_and_body_never_overlaps(
        seed in any::<u64>(),
        intents in prop::collection::vec(intent_strategy(), 1..200),
    ) {
        let mut rng = GameRng::seed_from_u64(seed);
        let mut snake = SnakeState::new(0, &mut rng);
        for intent in intents {
            snake.update(&TickInput::intent(intent), &mut rng);
            let eaten = (snake.score / SNAKE_FOOD_POINTS) as usize;
            prop_assert_eq!(snake.len(), (eaten + SNAKE_START_LENGTH).min(SNAKE_CAPACITY));
            if snake.game_over {
                break;
            }
            let body = snake.body.as_slice();
            for (i, a) in body.iter().enumerate() {
                prop_assert!(!body[i + 1..].contains(a), "segments overlap at {:?}", a);
            }
        }
    }

    #[test]
    fn pong_flips_x_only_at_side_walls(
        x in 0..WIDTH,
        y in 4..HEIGHT - 10,
        vx in prop_oneof![Just(-3), Just(-2), Just(2), Just(3)],
        vy in prop_oneof![Just(-2), Just(2)],
        tilt in -2.0f32..2.0,
    ) {
        let mut pong = PongState::new(0);
        pong.ball = Position::new(x, y);
        pong.velocity = Position::new(vx, vy);
        let moved_x = x + vx;

        pong.update(&TickInput::tilt(tilt, 0.0), &mut GameRng::seed_from_u64(0));

        let flipped = pong.velocity.x == -vx;
        prop_assert_eq!(flipped, at_side_wall(moved_x));
        prop_assert!(pong.velocity.x.abs() == vx.abs());
        prop_assert!((0..WIDTH).contains(&pong.ball.x));
    }

    #[test]
    fn dodge_speed_and_count_step_with_score(
        seed in any::<u64>(),
        tilts in prop::collection::vec(-1.5f32..1.5, 1..400),
    ) {
        let mut rng = GameRng::seed_from_u64(seed);
        let mut dodge = DodgeState::new(0, &mut rng);
        let mut last_speed = dodge.speed;
        for tilt in tilts {
            dodge.update(&TickInput::tilt(tilt, 0.0), &mut rng);
            let steps = (dodge.score / 10) as i32;
            prop_assert_eq!(dodge.speed, DODGE_START_SPEED + steps);
            prop_assert_eq!(
                dodge.obstacles.len(),
                (DODGE_START_OBSTACLES + steps as usize).min(DODGE_MAX_OBSTACLES)
            );
            prop_assert!(dodge.speed >= last_speed);
            last_speed = dodge.speed;
            if dodge.game_over {
                break;
            }
        }
    }

    #[test]
    fn maze_rejects_exactly_wall_and_edge_moves(
        level in 1u8..=MAZE_LEVELS,
        intents in prop::collection::vec(intent_strategy(), 1..300),
    ) {
        let mut maze = TiltMazeState::new(0).unwrap();
        maze.load_level(level).unwrap();
        let mut rng = GameRng::seed_from_u64(0);
        for intent in intents {
            if maze.level_complete {
                break;
            }
            let before = maze.player;
            let target = before + intent.step();
            let food_before = maze.remaining_food();
            maze.update(&TickInput::intent(intent), &mut rng);

            let allowed = on_screen(target) && !maze.is_wall(target);
            prop_assert_eq!(maze.player, if allowed { target } else { before });
            prop_assert!(maze.remaining_food() <= food_before);
            prop_assert_eq!(maze.level_complete, maze.remaining_food() == 0);
        }
    }

    #[test]
    fn stored_record_round_trips(game in game_id_strategy(), value in any::<u32>()) {
        let dir = TempDir::new().unwrap();
        let mut scores = ScoreStore::from_open(JsonFileStore::open(dir.path().join("scores.json")));
        scores.write_high_score(game, value);
        prop_assert_eq!(scores.read_high_score(game), value);
    }
}

#[test]
fn snake_three_rights_moves_twelve_pixels() {
    let mut rng = GameRng::seed_from_u64(9);
    let mut snake = SnakeState::new(0, &mut rng);
    let start = snake.head();
    // Keep the food off the path
    snake.food = Position::new(0, 0);
    for _ in 0..3 {
        snake.update(&TickInput::intent(DirectionalIntent::Right), &mut rng);
    }
    assert_eq!(snake.head(), start + Position::new(12, 0));
    assert_eq!(snake.len(), 3);
    assert_eq!(snake.score, 0);
    assert!(!snake.game_over);
}

#[test]
fn dodge_tenth_point_raises_speed_and_adds_block() {
    let mut rng = GameRng::seed_from_u64(1);
    let mut dodge = DodgeState::new(0, &mut rng);
    // Park the player in a corner no block reaches
    dodge.player = Position::new(0, HEIGHT - 10);
    for block in dodge.obstacles.iter_mut() {
        block.x = WIDTH - DODGE_BOX_W - 1;
    }
    dodge.score = 9;
    dodge.obstacles.as_mut_slice()[0].y = HEIGHT;

    dodge.update(&TickInput::default(), &mut rng);

    assert_eq!(dodge.score, 10);
    assert_eq!(dodge.speed, 3);
    assert_eq!(dodge.obstacles.len(), 4);
}
