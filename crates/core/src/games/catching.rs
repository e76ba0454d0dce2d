use rand::Rng;
use rand::seq::IndexedRandom;

use crate::evaluate;
use crate::games::{Cue, Feedback, MiniGame, Pause, Reaction, Selection};
use crate::model::{FieldSize, GameKind, GameSettings, Point, SPARKS, Symbol};
use crate::timers::DeferredAction;

const SPARK_COUNT: usize = 6;
const SPARK_SPREAD: i32 = 80;

/// Decoration drawn around the target. Has no effect on hits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spark {
    pub at: Point,
    pub symbol: Symbol,
}

/// Uniform position inside the field, keeping `margin` units from each edge.
pub fn place_target<R: Rng + ?Sized>(rng: &mut R, field: FieldSize) -> Point {
    let x = rng.random_range(field.margin..=field.width - field.margin);
    let y = rng.random_range(field.margin..=field.height - field.margin);
    Point::new(f64::from(x), f64::from(y))
}

pub fn place_sparks<R: Rng + ?Sized>(rng: &mut R, around: Point) -> Vec<Spark> {
    let mut sparks = Vec::with_capacity(SPARK_COUNT);
    for _ in 0..SPARK_COUNT {
        let dx = rng.random_range(-SPARK_SPREAD..=SPARK_SPREAD);
        let dy = rng.random_range(-SPARK_SPREAD..=SPARK_SPREAD);
        let symbol = SPARKS.choose(rng).copied().unwrap_or(SPARKS[0]);
        sparks.push(Spark {
            at: Point::new(around.x + f64::from(dx), around.y + f64::from(dy)),
            symbol,
        });
    }
    sparks
}

/// "Catch the dragon before it flies away."
///
/// The round waits for `Start`, then the target hops on every tick until the
/// player has landed `hits_needed` hits.
#[derive(Clone, Debug)]
pub struct CatchGame {
    field: FieldSize,
    half_width: f64,
    hits_needed: u32,
    hits: u32,
    running: bool,
    target: Option<Point>,
    sparks: Vec<Spark>,
}

impl CatchGame {
    #[must_use]
    pub fn new(settings: &GameSettings) -> Self {
        Self {
            field: settings.field(),
            half_width: f64::from(settings.hit_half_width()),
            hits_needed: settings.hits_per_round(),
            hits: 0,
            running: false,
            target: None,
            sparks: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(&self) -> FieldSize {
        self.field
    }

    #[must_use]
    pub fn hits(&self) -> u32 {
        self.hits
    }

    #[must_use]
    pub fn hits_needed(&self) -> u32 {
        self.hits_needed
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn target(&self) -> Option<Point> {
        self.target
    }

    #[must_use]
    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    fn hop<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let target = place_target(rng, self.field);
        self.sparks = place_sparks(rng, target);
        self.target = Some(target);
    }

    fn click(&mut self, at: Point) -> Reaction {
        let Some(target) = self.target.filter(|_| self.running) else {
            return Reaction::ignored();
        };
        if !evaluate::is_hit(target, at, self.half_width) {
            return Reaction::scored(false, Feedback::Missed);
        }

        self.hits += 1;
        let reaction = Reaction::scored(
            true,
            Feedback::Caught {
                hits: self.hits,
                needed: self.hits_needed,
            },
        );
        if self.hits >= self.hits_needed {
            self.running = false;
            return reaction.then(Pause::RoundComplete, DeferredAction::NextRound);
        }
        reaction
    }
}

impl MiniGame for CatchGame {
    fn kind(&self) -> GameKind {
        GameKind::Catching
    }

    fn new_round<R: Rng + ?Sized>(&mut self, _rng: &mut R) {
        self.hits = 0;
        self.running = false;
        self.target = None;
        self.sparks.clear();
    }

    fn handle_selection<R: Rng + ?Sized>(&mut self, selection: Selection, rng: &mut R) -> Reaction {
        match selection {
            Selection::Start if !self.running && self.hits < self.hits_needed => {
                self.running = true;
                self.hop(rng);
                Reaction::default()
                    .with_cue(Cue::Click)
                    .then(Pause::CatchTick, DeferredAction::MoveTarget)
            }
            Selection::Click(at) => self.click(at),
            _ => Reaction::ignored(),
        }
    }

    fn on_deferred<R: Rng + ?Sized>(&mut self, action: DeferredAction, rng: &mut R) -> Reaction {
        if action != DeferredAction::MoveTarget || !self.running {
            return Reaction::ignored();
        }
        self.hop(rng);
        Reaction::default().then(Pause::CatchTick, DeferredAction::MoveTarget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn started(seed: u64) -> (CatchGame, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = CatchGame::new(&GameSettings::default());
        let reaction = game.handle_selection(Selection::Start, &mut rng);
        assert_eq!(reaction.cues, vec![Cue::Click]);
        (game, rng)
    }

    #[test]
    fn target_stays_inside_margins() {
        let mut rng = StdRng::seed_from_u64(1);
        let field = FieldSize::default();
        for _ in 0..1_000 {
            let p = place_target(&mut rng, field);
            assert!(p.x >= 60.0 && p.x <= 900.0);
            assert!(p.y >= 60.0 && p.y <= 200.0);
        }
    }

    #[test]
    fn clicks_before_start_are_ignored() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = CatchGame::new(&GameSettings::default());
        let reaction = game.handle_selection(Selection::Click(Point::new(100.0, 100.0)), &mut rng);
        assert!(reaction.is_ignored());
        assert!(game.on_deferred(DeferredAction::MoveTarget, &mut rng).is_ignored());
    }

    #[test]
    fn every_click_is_an_attempt() {
        let (mut game, mut rng) = started(4);
        let target = game.target().unwrap();

        let miss = game.handle_selection(
            Selection::Click(Point::new(target.x + 50.0, target.y)),
            &mut rng,
        );
        assert_eq!(miss.outcome, Some(false));
        assert_eq!(miss.feedback, Some(Feedback::Missed));

        let hit = game.handle_selection(Selection::Click(target), &mut rng);
        assert_eq!(hit.outcome, Some(true));
        assert_eq!(hit.feedback, Some(Feedback::Caught { hits: 1, needed: 5 }));
        assert!(hit.follow_up.is_none());
    }

    #[test]
    fn fifth_hit_stops_the_round() {
        let (mut game, mut rng) = started(9);
        let mut last = Reaction::ignored();
        for _ in 0..5 {
            let target = game.target().unwrap();
            last = game.handle_selection(Selection::Click(target), &mut rng);
        }
        assert_eq!(game.hits(), 5);
        assert!(!game.is_running());
        assert_eq!(
            last.follow_up.map(|f| (f.pause, f.action)),
            Some((Pause::RoundComplete, DeferredAction::NextRound))
        );

        // The tick chain ends once the round is over.
        assert!(game.on_deferred(DeferredAction::MoveTarget, &mut rng).is_ignored());
        assert!(game.handle_selection(Selection::Start, &mut rng).is_ignored());
    }

    #[test]
    fn tick_moves_target_and_reschedules() {
        let (mut game, mut rng) = started(12);
        let reaction = game.on_deferred(DeferredAction::MoveTarget, &mut rng);
        assert_eq!(
            reaction.follow_up.map(|f| f.pause),
            Some(Pause::CatchTick)
        );
        assert_eq!(game.sparks().len(), SPARK_COUNT);
    }

    #[test]
    fn new_round_waits_for_start() {
        let (mut game, mut rng) = started(13);
        game.new_round(&mut rng);
        assert!(!game.is_running());
        assert_eq!(game.hits(), 0);
        assert!(game.target().is_none());
    }
}
