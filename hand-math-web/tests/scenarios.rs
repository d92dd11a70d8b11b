//! End-to-end game scenarios through the public API

use hand_math_web::config::Tuning;
use hand_math_web::games::{FingerMathGame, Game, GameEvent, RightBoxGame, Tone};
use hand_math_web::geometry::{angle_difference, classify_angle, vector_angle, AngleCategory};
use hand_math_web::gesture::{count_fingers, is_pinching};
use hand_math_web::hand::fixtures::{pinching_at, pointing_at, showing};
use hand_math_web::hand::*;
use hand_math_web::problems::{
    is_prime, ArithmeticProblem, DraggableNumber, NumberPickerProblem, NumberType, Parity, RightBoxLevel,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn frame(hands: Vec<Hand>) -> FrameResult {
    FrameResult::new(hands)
}

fn score_changes(events: &[GameEvent]) -> Vec<i32> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::ScoreChanged { delta, .. } => Some(*delta),
            _ => None,
        })
        .collect()
}

// ============================================================================
// GESTURES AND GEOMETRY
// ============================================================================

#[test]
fn open_hand_counts_five_and_fist_zero() {
    assert_eq!(count_fingers(&showing(5, Handedness::Right)), 5);
    assert_eq!(count_fingers(&showing(0, Handedness::Right)), 0);
    assert_eq!(count_fingers(&showing(3, Handedness::Left)), 3);
}

#[test]
fn pinch_is_a_strict_distance_threshold() {
    let mut hand = pointing_at(0.5, 0.5);
    assert!(!is_pinching(&hand));
    hand.landmarks[THUMB_TIP] = Landmark::new(0.53, 0.5, 0.0);
    assert!(is_pinching(&hand));
    hand.landmarks[THUMB_TIP] = Landmark::new(0.56, 0.5, 0.0);
    assert!(!is_pinching(&hand));
}

#[test]
fn angles_are_counter_clockwise_and_wrap() {
    assert!((vector_angle((0.0, 0.0), (1.0, 0.0)) - 0.0).abs() < 1e-3);
    assert!((vector_angle((0.0, 0.0), (0.0, -1.0)) - 90.0).abs() < 1e-3);
    assert!((vector_angle((0.0, 0.0), (0.0, 1.0)) - 270.0).abs() < 1e-3);
    assert!((angle_difference(350.0, 10.0) - 20.0).abs() < 1e-3);
    assert!((angle_difference(10.0, 350.0) - 340.0).abs() < 1e-3);

    for (a, b) in [(12.5, 300.0), (359.9, 0.1), (90.0, 90.0)] {
        let d = angle_difference(a, b);
        assert!((0.0..360.0).contains(&d));
    }
}

#[test]
fn angle_classification_table() {
    let table = [
        (2.0, AngleCategory::Complete),
        (45.0, AngleCategory::Acute),
        (88.0, AngleCategory::Right),
        (120.0, AngleCategory::Obtuse),
        (183.0, AngleCategory::Straight),
        (270.0, AngleCategory::Reflex),
        (357.0, AngleCategory::Complete),
    ];
    for (deg, expected) in table {
        assert_eq!(classify_angle(deg), expected, "{}°", deg);
    }
}

#[test]
fn prime_picker_offers_exactly_one_prime() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..50 {
        let p = NumberPickerProblem::generate_of_type(&mut rng, NumberType::Prime);
        assert_eq!(p.numbers.iter().filter(|&&n| is_prime(n)).count(), 1);
        assert!(p.numbers.contains(&p.correct_answer));
    }
}

// ============================================================================
// RIGHT BOX
// ============================================================================

fn even_level() -> RightBoxLevel {
    RightBoxLevel {
        target_type: Parity::Even,
        numbers: vec![
            DraggableNumber::new(1, 4, 0.3, 0.5),
            DraggableNumber::new(2, 3, 0.4, 0.2),
            DraggableNumber::new(3, 6, 0.2, 0.8),
        ],
    }
}

/// Pick up whatever is at `from`, carry it to `to`, let go
fn drag(game: &mut RightBoxGame, from: (f32, f32), to: (f32, f32), start_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    events.extend(game.update(&frame(vec![pointing_at(from.0, from.1)]), start_ms));
    events.extend(game.update(&frame(vec![pinching_at(from.0, from.1)]), start_ms + 33.0));
    events.extend(game.update(&frame(vec![pinching_at(to.0, to.1)]), start_ms + 66.0));
    events.extend(game.update(&frame(vec![pointing_at(to.0, to.1)]), start_ms + 100.0));
    events
}

#[test]
fn right_box_target_item_dropped_in_box_is_removed() {
    let mut game = RightBoxGame::with_level(Tuning::default(), StdRng::seed_from_u64(1), even_level());

    let events = drag(&mut game, (0.3, 0.5), (0.9, 0.5), 0.0);

    assert!(events.contains(&GameEvent::DragStarted(1)));
    assert!(events.contains(&GameEvent::ItemRemoved(1)));
    assert_eq!(score_changes(&events), vec![10]);
    assert_eq!(game.score(), 10);
    assert!(game.level().numbers.iter().all(|n| n.id != 1));
    assert_eq!(game.dragging(), None);
}

#[test]
fn right_box_wrong_item_is_relocated_and_score_floors() {
    let tuning = Tuning::default();
    let spawn = tuning.spawn;
    let mut game = RightBoxGame::with_level(tuning, StdRng::seed_from_u64(2), even_level());

    let events = drag(&mut game, (0.4, 0.2), (0.9, 0.5), 0.0);

    assert!(events.contains(&GameEvent::ItemRelocated(2)));
    assert_eq!(game.score(), 0);
    let item = game.level().numbers.iter().find(|n| n.id == 2).copied().unwrap();
    assert!(item.x >= spawn.x_min && item.x <= spawn.x_max);
    assert!(item.y >= spawn.y_min && item.y <= spawn.y_max);
    assert!(!item.is_dragging);
    assert_eq!(game.display(150.0).feedback.map(|f| f.tone), Some(Tone::Wrong));

    // After the feedback clears, a correct drop then a wrong one nets +5
    drag(&mut game, (0.3, 0.5), (0.9, 0.5), 1000.0);
    let (x, y) = (item.x, item.y);
    drag(&mut game, (x, y), (0.9, 0.5), 2000.0);
    assert_eq!(game.score(), 5);
}

#[test]
fn right_box_release_outside_box_is_not_judged() {
    let mut game = RightBoxGame::with_level(Tuning::default(), StdRng::seed_from_u64(3), even_level());
    let events = drag(&mut game, (0.3, 0.5), (0.5, 0.5), 0.0);

    assert!(events.contains(&GameEvent::DragEnded(1)));
    assert!(score_changes(&events).is_empty());
    let item = game.level().numbers.iter().find(|n| n.id == 1).copied().unwrap();
    assert!((item.x - 0.5).abs() < 1e-5 && (item.y - 0.5).abs() < 1e-5);
}

// ============================================================================
// FINGER MATH
// ============================================================================

fn finger_math() -> FingerMathGame {
    FingerMathGame::with_problem(Tuning::default(), StdRng::seed_from_u64(4), ArithmeticProblem::new(2, 3))
}

#[test]
fn finger_math_correct_total_scores_and_advances() {
    let mut game = finger_math();
    let hands = frame(vec![showing(2, Handedness::Left), showing(3, Handedness::Right)]);

    let events = game.update(&hands, 0.0);
    assert_eq!(score_changes(&events), vec![10]);
    assert_eq!(game.finger_total(), 5);

    // Cooldown: the same answer is ignored until the problem changes
    assert!(score_changes(&game.update(&hands, 500.0)).is_empty());
    assert_eq!(game.problem(), &ArithmeticProblem::new(2, 3));

    let events = game.tick(2000.0);
    assert!(events.contains(&GameEvent::ProblemAdvanced));
    assert!(game.problem().answer <= 10);
}

#[test]
fn finger_math_wrong_total_keeps_problem() {
    let mut game = finger_math();
    let hands = frame(vec![showing(1, Handedness::Left), showing(2, Handedness::Right)]);

    let events = game.update(&hands, 0.0);
    assert!(score_changes(&events).is_empty());
    let feedback = game.display(10.0).feedback.unwrap();
    assert_eq!(feedback.tone, Tone::Wrong);
    assert!(feedback.message.contains("Wrong count"));
    assert!(feedback.message.contains('3'));

    assert!(game.tick(5000.0).is_empty());
    assert_eq!(game.problem(), &ArithmeticProblem::new(2, 3));
}

#[test]
fn empty_frames_change_nothing() {
    let mut game = finger_math();
    let before = game.display(0.0).to_json();
    for t in 0..10 {
        assert!(game.update(&FrameResult::empty(), t as f64 * 33.0).is_empty());
    }
    assert_eq!(game.display(0.0).to_json(), before);
}
