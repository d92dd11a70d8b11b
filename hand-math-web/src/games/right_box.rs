//! Right box - drag the numbers of the target parity into the box
//!
//! Pinch near an item to pick it up, move it while pinching, release over
//! the box (right quarter of the field) to have it judged. At most one item
//! is dragged at a time, and every drag ends: on release, when the hand is
//! lost, or on reset. Item lists are replaced as a whole on every change.

use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::Tuning;
use crate::geometry::distance_sq;
use crate::gesture::PinchTransition;
use crate::hand::FrameResult;
use crate::problems::{random_position, DraggableNumber, RightBoxLevel};

use super::display::{DisplayModel, ProblemView};
use super::feedback::Tone;
use super::state::{Advance, GameCore};
use super::{Game, GameEvent, GameKind};

pub struct RightBoxGame {
    core: GameCore,
    level: RightBoxLevel,
    dragging: Option<u32>,
    level_pending: bool,
}

impl RightBoxGame {
    pub fn new(tuning: Tuning, mut rng: StdRng) -> Self {
        let level = RightBoxLevel::generate(&mut rng, &tuning.spawn, tuning.right_box_items);
        Self::with_level(tuning, rng, level)
    }

    pub fn with_level(tuning: Tuning, rng: StdRng, level: RightBoxLevel) -> Self {
        Self {
            core: GameCore::new(tuning, rng),
            level,
            dragging: None,
            level_pending: false,
        }
    }

    pub fn level(&self) -> &RightBoxLevel {
        &self.level
    }

    pub fn dragging(&self) -> Option<u32> {
        self.dragging
    }

    fn item(&self, id: u32) -> Option<DraggableNumber> {
        self.level.numbers.iter().find(|n| n.id == id).copied()
    }

    /// New snapshot of the items with `id` replaced by `f(item)`
    fn with_item(&self, id: u32, f: impl Fn(DraggableNumber) -> DraggableNumber) -> Vec<DraggableNumber> {
        self.level
            .numbers
            .iter()
            .map(|n| if n.id == id { f(*n) } else { *n })
            .collect()
    }

    fn next_level(&mut self) {
        let t = &self.core.tuning;
        let (spawn, count) = (t.spawn, t.right_box_items);
        self.level = RightBoxLevel::generate(&mut self.core.rng, &spawn, count);
        self.dragging = None;
        self.level_pending = false;
        self.core.bump_generation();
        debug!(target_type = self.level.target_type.as_str(), items = self.level.numbers.len(), "new right box level");
    }

    fn begin_drag(&mut self, cursor: (f32, f32), events: &mut Vec<GameEvent>) {
        let radius_sq = self.core.tuning.drag_hit_radius_sq;
        let hit = self
            .level
            .numbers
            .iter()
            .find(|n| distance_sq(cursor, (n.x, n.y)) < radius_sq)
            .map(|n| n.id);

        if let Some(id) = hit {
            self.level.numbers = self.with_item(id, |n| DraggableNumber { is_dragging: true, ..n });
            self.dragging = Some(id);
            events.push(GameEvent::DragStarted(id));
        }
    }

    fn move_drag(&mut self, id: u32, cursor: (f32, f32)) {
        self.level.numbers = self.with_item(id, |n| DraggableNumber { x: cursor.0, y: cursor.1, ..n });
    }

    /// Stop dragging without judging the item (hand lost, released outside)
    fn end_drag(&mut self, id: u32, events: &mut Vec<GameEvent>) {
        self.level.numbers = self.with_item(id, |n| DraggableNumber { is_dragging: false, ..n });
        events.push(GameEvent::DragEnded(id));
    }

    fn release(&mut self, id: u32, now_ms: f64, events: &mut Vec<GameEvent>) {
        let Some(item) = self.item(id) else {
            return;
        };
        if item.x <= self.core.tuning.drop_zone_x {
            self.end_drag(id, events);
            return;
        }

        let t = &self.core.tuning;
        let (points, penalty, feedback_ms, spawn) = (t.correct_points, t.wrong_penalty, t.sort_feedback_ms, t.spawn);
        let target = self.level.target_type;

        if target.matches(item.value) {
            self.level.numbers = self.level.numbers.iter().filter(|n| n.id != id).copied().collect();
            events.push(GameEvent::DragEnded(id));
            events.push(GameEvent::ItemRemoved(id));
            events.push(self.core.add_score(points));
            events.push(self.core.show_feedback(format!("Yes! {} is {}", item.value, target.as_str()), Tone::Success, now_ms, feedback_ms));
        } else {
            let (x, y) = random_position(&mut self.core.rng, &spawn);
            self.level.numbers = self.with_item(id, |n| DraggableNumber { x, y, is_dragging: false, ..n });
            events.push(GameEvent::DragEnded(id));
            events.push(GameEvent::ItemRelocated(id));
            events.push(self.core.deduct_score(penalty));
            events.push(self.core.show_feedback(format!("Oops! {} is not {}", item.value, target.as_str()), Tone::Wrong, now_ms, feedback_ms));
        }

        if self.level.remaining_targets() == 0 && !self.level_pending {
            let delay = self.core.tuning.level_delay_ms;
            info!(score = self.core.score, "right box level cleared");
            events.push(self.core.show_feedback("Level complete!", Tone::Info, now_ms, delay));
            self.core.schedule(now_ms, delay, Advance::NextLevel);
            self.level_pending = true;
        }
    }
}

impl Game for RightBoxGame {
    fn kind(&self) -> GameKind {
        GameKind::RightBox
    }

    fn update(&mut self, frame: &FrameResult, now_ms: f64) -> Vec<GameEvent> {
        let mut events = self.tick(now_ms);
        let obs = self.core.observe(frame, now_ms);

        if !obs.tracking || obs.hand_changed {
            if let Some(id) = self.dragging.take() {
                debug!(id, "dragging hand lost, drag dropped");
                self.end_drag(id, &mut events);
            }
        }
        if !obs.tracking {
            return events;
        }

        match (obs.transition, self.dragging, obs.cursor) {
            (PinchTransition::Pressed, None, Some(cursor)) if !self.core.feedback_active(now_ms) => {
                self.begin_drag(cursor, &mut events);
            }
            (PinchTransition::Held, Some(id), Some(cursor)) => self.move_drag(id, cursor),
            (PinchTransition::Released, Some(id), _) => {
                self.dragging = None;
                self.release(id, now_ms, &mut events);
            }
            _ => {}
        }
        events
    }

    fn tick(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for action in self.core.due(now_ms) {
            if action == Advance::NextLevel {
                self.next_level();
                events.push(GameEvent::ProblemAdvanced);
            }
        }
        events
    }

    fn display(&self, now_ms: f64) -> DisplayModel {
        let mut model = DisplayModel::base(self.kind(), &self.core, now_ms);
        let target = self.level.target_type;
        model.problem = Some(ProblemView::RightBox {
            target_type: target,
            prompt: format!("Drag the {} numbers into the box", target.as_str()),
        });
        model.items = self.level.numbers.clone();
        model.drop_zone_x = Some(self.core.tuning.drop_zone_x);
        model
    }

    fn reset(&mut self, _now_ms: f64) {
        self.core.reset();
        self.next_level();
    }

    fn score(&self) -> u32 {
        self.core.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::fixtures::{pinching_at, pointing_at};
    use crate::problems::Parity;
    use rand::SeedableRng;

    fn game_with(items: Vec<DraggableNumber>) -> RightBoxGame {
        let level = RightBoxLevel { target_type: Parity::Even, numbers: items };
        RightBoxGame::with_level(Tuning::default(), StdRng::seed_from_u64(3), level)
    }

    fn point(x: f32, y: f32) -> FrameResult {
        FrameResult::new(vec![pointing_at(x, y)])
    }

    fn pinch(x: f32, y: f32) -> FrameResult {
        FrameResult::new(vec![pinching_at(x, y)])
    }

    #[test]
    fn test_drag_follows_cursor_and_stops_outside_box() {
        let mut g = game_with(vec![DraggableNumber::new(0, 4, 0.3, 0.5), DraggableNumber::new(1, 6, 0.1, 0.1)]);
        g.update(&point(0.3, 0.5), 0.0);
        let events = g.update(&pinch(0.3, 0.5), 33.0);
        assert_eq!(events, vec![GameEvent::DragStarted(0)]);
        assert!(g.level().numbers[0].is_dragging);

        g.update(&pinch(0.5, 0.6), 66.0);
        let item = g.level().numbers[0];
        assert!((item.x - 0.5).abs() < 1e-5 && (item.y - 0.6).abs() < 1e-5);

        let events = g.update(&point(0.5, 0.6), 99.0);
        assert_eq!(events, vec![GameEvent::DragEnded(0)]);
        let item = g.level().numbers[0];
        assert!(!item.is_dragging);
        assert!((item.x - 0.5).abs() < 1e-5);
        assert_eq!(g.score(), 0);
        assert_eq!(g.level().numbers.len(), 2);
    }

    #[test]
    fn test_pinch_away_from_items_grabs_nothing() {
        let mut g = game_with(vec![DraggableNumber::new(0, 4, 0.3, 0.5)]);
        g.update(&point(0.7, 0.2), 0.0);
        assert!(g.update(&pinch(0.7, 0.2), 33.0).is_empty());
        assert_eq!(g.dragging(), None);
    }

    #[test]
    fn test_losing_the_hand_ends_the_drag_unjudged() {
        let mut g = game_with(vec![DraggableNumber::new(0, 4, 0.8, 0.5)]);
        g.update(&point(0.8, 0.5), 0.0);
        g.update(&pinch(0.8, 0.5), 33.0);
        let events = g.update(&FrameResult::empty(), 66.0);
        assert_eq!(events, vec![GameEvent::DragEnded(0)]);
        assert_eq!(g.dragging(), None);
        assert_eq!(g.level().numbers.len(), 1);
        assert!(!g.level().numbers[0].is_dragging);
        assert_eq!(g.score(), 0);
    }

    #[test]
    fn test_other_hand_taking_over_ends_the_drag() {
        let mut g = game_with(vec![DraggableNumber::new(0, 4, 0.3, 0.5)]);
        g.update(&point(0.3, 0.5), 0.0);
        g.update(&pinch(0.3, 0.5), 33.0);
        assert_eq!(g.dragging(), Some(0));

        let left = crate::hand::Hand { handedness: crate::hand::Handedness::Left, ..pinching_at(0.9, 0.5) };
        let events = g.update(&FrameResult::new(vec![left]), 66.0);
        assert!(events.contains(&GameEvent::DragEnded(0)));
        assert!(!events.contains(&GameEvent::ItemRemoved(0)));
        assert_eq!(g.score(), 0);
        let item = g.level().numbers[0];
        assert!(!item.is_dragging && (item.x - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_only_one_item_dragged() {
        let mut g = game_with(vec![DraggableNumber::new(0, 4, 0.3, 0.5), DraggableNumber::new(1, 8, 0.31, 0.5)]);
        g.update(&point(0.3, 0.5), 0.0);
        g.update(&pinch(0.3, 0.5), 33.0);
        g.update(&pinch(0.31, 0.5), 66.0);
        assert_eq!(g.level().numbers.iter().filter(|n| n.is_dragging).count(), 1);
        assert_eq!(g.dragging(), Some(0));
    }

    #[test]
    fn test_cleared_level_regenerates_after_delay() {
        let mut g = game_with(vec![DraggableNumber::new(0, 4, 0.9, 0.5)]);
        g.update(&point(0.9, 0.5), 0.0);
        g.update(&pinch(0.9, 0.5), 33.0);
        let events = g.update(&point(0.9, 0.5), 66.0);
        assert!(events.contains(&GameEvent::ItemRemoved(0)));
        assert!(g.level().numbers.is_empty());

        assert!(g.tick(66.0 + 1000.0).is_empty());
        assert_eq!(g.tick(66.0 + 1500.0), vec![GameEvent::ProblemAdvanced]);
        assert_eq!(g.level().numbers.len(), Tuning::default().right_box_items);
    }

    #[test]
    fn test_no_new_drag_while_feedback_shows() {
        // Item 1 listed first so the relocated item 0 can never shadow it
        let mut g = game_with(vec![DraggableNumber::new(1, 4, 0.2, 0.2), DraggableNumber::new(0, 3, 0.9, 0.5)]);
        g.update(&point(0.9, 0.5), 0.0);
        g.update(&pinch(0.9, 0.5), 33.0);
        g.update(&point(0.9, 0.5), 66.0);
        // Wrong item judged: feedback up for 800 ms
        g.update(&point(0.2, 0.2), 100.0);
        assert!(g.update(&pinch(0.2, 0.2), 133.0).is_empty());
        g.update(&point(0.2, 0.2), 900.0);
        assert_eq!(g.update(&pinch(0.2, 0.2), 933.0), vec![GameEvent::DragStarted(1)]);
    }
}
