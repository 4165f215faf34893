//! The battle state machine.
//!
//! ```text
//! PlayerTurn --select_card--> QuizActive
//! QuizActive --correct, more hits needed--> QuizActive
//! QuizActive --final answer--> PlayerTurn | Victory
//! PlayerTurn --end_turn--> EnemyTurn --> PlayerTurn | Victory | Defeat
//! ```
//!
//! Calls made in the wrong phase are silent no-ops returning `None`. Running
//! out of energy or words is reported through an `error` event and is also a
//! no-op. Nothing inside resolution can fail.

use im::Vector;

use super::state::{ActiveQuiz, BattleOutcome, BattlePhase, BattleSummary, CombatantState, QuizResolution};
use crate::cards::{CardCatalog, CardInstance, CardTemplate, QuizMode};
use crate::core::{
    ActionRecord, BattleAction, BattleConfig, CatalogError, GameRng, InstanceId, PlayerProfile, RejectReason,
    WordId,
};
use crate::effects::AppliedEffect;
use crate::enemies::{intent_for, EnemyState, Intent};
use crate::events::{BattleEvent, EventBus};
use crate::quiz::{Answer, Direction, Question, SpacedRepetition, WordProvider};
use crate::scaling::{PotionOutcome, RelicKind, ScalingAggregator};
use crate::zones::PileManager;

/// What a battle borrows from the run.
///
/// The catalog and word provider are read-only. Learning history and the
/// scaling aggregator (relics, potions) outlive the battle and are mutated
/// through it.
pub struct BattleContext<'a> {
    pub catalog: &'a dyn CardCatalog,
    pub words: &'a dyn WordProvider,
    pub memory: &'a mut dyn SpacedRepetition,
    pub scaling: &'a mut ScalingAggregator,
}

impl<'a> BattleContext<'a> {
    pub fn new(
        catalog: &'a dyn CardCatalog,
        words: &'a dyn WordProvider,
        memory: &'a mut dyn SpacedRepetition,
        scaling: &'a mut ScalingAggregator,
    ) -> Self {
        Self {
            catalog,
            words,
            memory,
            scaling,
        }
    }
}

/// One battle against one enemy.
///
/// ## Usage
///
/// ```
/// use quiz_battle::battle::{Battle, BattleContext, BattlePhase};
/// use quiz_battle::cards::{CardRegistry, Deck};
/// use quiz_battle::core::{BattleConfig, PlayerProfile};
/// use quiz_battle::enemies::{Encounter, EnemyRegistry};
/// use quiz_battle::quiz::{LearningTracker, WordBank};
/// use quiz_battle::scaling::ScalingAggregator;
///
/// let cards = CardRegistry::standard();
/// let deck = Deck::starter(&cards).unwrap();
/// let enemy = EnemyRegistry::standard().spawn("slime", Encounter::new(1, 0)).unwrap();
/// let words = WordBank::starter();
/// let mut memory = LearningTracker::new();
/// let mut scaling = ScalingAggregator::new();
///
/// let ctx = BattleContext::new(&cards, &words, &mut memory, &mut scaling);
/// let mut battle = Battle::new(ctx, BattleConfig::new(7), PlayerProfile::default(), deck.battle_copies(), enemy).unwrap();
/// let drawn = battle.start();
///
/// assert_eq!(drawn.len(), 5);
/// assert_eq!(battle.phase(), BattlePhase::PlayerTurn);
/// assert!(battle.intent().is_some());
/// ```
pub struct Battle<'a> {
    pub(super) ctx: BattleContext<'a>,
    pub(super) config: BattleConfig,
    /// Shuffles and draws.
    pub(super) rng: GameRng,
    /// Word picks, question directions and hints.
    pub(super) quiz_rng: GameRng,
    pub(super) phase: BattlePhase,
    pub(super) turn: u32,
    pub(super) started: bool,
    pub(super) player: CombatantState,
    pub(super) enemy: EnemyState,
    pub(super) intent: Option<Intent>,
    pub(super) piles: PileManager,
    pub(super) quiz: Option<ActiveQuiz>,
    pub(super) events: EventBus,
    pub(super) actions: Vector<ActionRecord>,
    pub(super) outcome: Option<BattleOutcome>,
}

impl<'a> Battle<'a> {
    /// Set up a battle. Fails if any card's template is missing from the
    /// catalog.
    pub fn new(
        ctx: BattleContext<'a>,
        config: BattleConfig,
        profile: PlayerProfile,
        cards: Vec<CardInstance>,
        enemy: EnemyState,
    ) -> Result<Self, CatalogError> {
        if let Some(card) = cards.iter().find(|c| ctx.catalog.template(c.template).is_none()) {
            return Err(CatalogError::UnknownCardId(card.template));
        }

        let mut rng = GameRng::new(config.seed);
        let quiz_rng = rng.for_context("quiz");
        let piles = PileManager::new(cards, &mut rng);

        Ok(Self {
            ctx,
            config,
            rng,
            quiz_rng,
            phase: BattlePhase::PlayerTurn,
            turn: 0,
            started: false,
            player: CombatantState::from_profile(&profile),
            enemy,
            intent: None,
            piles,
            quiz: None,
            events: EventBus::new(),
            actions: Vector::new(),
            outcome: None,
        })
    }

    /// Open the battle: reset per-battle scaling, fill energy, draw the
    /// opening hand and preview the first intent.
    pub fn start(&mut self) -> Vec<InstanceId> {
        if self.started {
            tracing::warn!("battle already started");
            return Vec::new();
        }
        self.started = true;
        self.ctx.scaling.reset_for_battle();
        self.player.energy = self.max_energy();

        let bonus = usize::try_from(self.ctx.scaling.relic_bonus(RelicKind::FirstDrawBonus).max(0)).unwrap_or(0);
        let drawn = self.piles.draw(self.config.hand_size + bonus, &mut self.rng);
        self.turn = 1;
        self.phase = BattlePhase::PlayerTurn;
        self.intent = intent_for(&self.enemy);

        tracing::info!(enemy = %self.enemy.key, hp = self.enemy.hp, "battle started");
        self.events.emit(BattleEvent::BattleStart {
            drawn: drawn.clone(),
            enemy: Box::new(self.enemy.clone()),
            intent: self.intent.clone(),
        });
        self.emit_phase();
        drawn
    }

    /// Pick a hand card and open its quiz. Returns the question asked.
    pub fn select_card(&mut self, card: InstanceId) -> Option<Question> {
        if !self.started || self.phase != BattlePhase::PlayerTurn || !self.piles.in_hand(card) {
            tracing::warn!(%card, phase = self.phase.name(), "card selection ignored");
            return None;
        }
        let template = self.template_of(card)?;

        if template.cost > self.player.energy {
            self.reject(RejectReason::InsufficientEnergy {
                cost: template.cost,
                available: self.player.energy,
            });
            return None;
        }

        let Some(question) = self.ask(template.quiz_mode, &[]) else {
            self.reject(RejectReason::NoWordsAvailable {
                max_difficulty: self.difficulty_cap(),
            });
            return None;
        };

        self.quiz = Some(ActiveQuiz {
            card,
            template: template.id,
            cost: template.cost,
            question: question.clone(),
            hits_landed: 0,
            required_hits: template.required_hits(),
            asked: vec![question.word().id],
        });
        self.phase = BattlePhase::QuizActive;
        self.emit_phase();
        self.events.emit(BattleEvent::QuizStart {
            question: Box::new(question.clone()),
            card,
        });
        Some(question)
    }

    /// Answer the active question.
    ///
    /// A correct answer lands one hit. A miss voids the rest of the card; its
    /// cost is still paid and it still leaves the hand.
    pub fn answer_quiz(&mut self, answer: &Answer) -> Option<QuizResolution> {
        if self.phase != BattlePhase::QuizActive {
            tracing::warn!(phase = self.phase.name(), "answer ignored: no active quiz");
            return None;
        }
        let mut quiz = self.quiz.take()?;
        let correct = quiz.question.check(answer);
        let word = quiz.question.word().clone();
        let mut effects = Vec::new();

        if correct {
            self.ctx.memory.record_correct(word.id);
            self.ctx.scaling.increment_combo();
            self.player.correct_answers += 1;
            self.player.wisdom += u32::from(word.difficulty);

            let xp = 1 + u32::try_from(self.ctx.scaling.relic_bonus(RelicKind::XpBonus).max(0)).unwrap_or(0);
            if let Some(instance) = self.piles.card_mut(quiz.card) {
                if instance.gain_experience(xp) {
                    effects.push(AppliedEffect::LevelUp {
                        card: instance.id,
                        level: instance.level,
                    });
                }
            }

            quiz.hits_landed += 1;
            self.resolve_hit(&quiz, &mut effects);

            if !self.enemy.is_dead() && quiz.hits_landed < quiz.required_hits {
                if let Some(next) = self.ask(QuizMode::DoubleChoice, &quiz.asked) {
                    quiz.asked.push(next.word().id);
                    quiz.question = next.clone();
                    let card = quiz.card;
                    self.quiz = Some(quiz);
                    return Some(self.report(card, true, effects, Some(next)));
                }
                tracing::warn!("no word left for a follow-up question");
            }
        } else {
            self.ctx.memory.record_incorrect(word.id);
            self.ctx.scaling.reset_combo();
        }

        Some(self.finish_card(quiz, correct, effects))
    }

    /// End the player turn. The enemy acts, then a new turn begins unless
    /// the battle ended.
    pub fn end_turn(&mut self) -> Option<BattlePhase> {
        if !self.started || self.phase != BattlePhase::PlayerTurn {
            tracing::warn!(phase = self.phase.name(), "end turn ignored");
            return None;
        }
        self.phase = BattlePhase::EnemyTurn;
        self.emit_phase();

        let (applied, effects) = self.run_enemy_turn();
        self.events.emit(BattleEvent::EnemyTurn {
            intent: applied,
            effects,
        });

        if self.player.is_dead() {
            self.conclude(BattleOutcome::Defeat);
        } else if self.enemy.is_dead() {
            self.conclude(BattleOutcome::Victory);
        } else {
            self.start_turn();
        }
        Some(self.phase)
    }

    /// Drink the potion in `slot`. Only during the player turn; an empty
    /// slot is a no-op.
    pub fn use_potion(&mut self, slot: usize) -> Option<PotionOutcome> {
        if !self.started || self.phase != BattlePhase::PlayerTurn {
            tracing::warn!(slot, phase = self.phase.name(), "potion ignored");
            return None;
        }
        let outcome = self.ctx.scaling.apply_potion(slot, &mut self.player)?;
        self.events.emit(BattleEvent::PotionUsed {
            slot,
            outcome: outcome.clone(),
        });
        Some(outcome)
    }

    /// Dispatch a caller action. Accepted actions are recorded with the turn
    /// they were taken in; returns whether the action was accepted.
    pub fn apply(&mut self, action: BattleAction) -> bool {
        let turn = self.turn;
        let accepted = match &action {
            BattleAction::SelectCard(card) => self.select_card(*card).is_some(),
            BattleAction::Answer(answer) => self.answer_quiz(answer).is_some(),
            BattleAction::EndTurn => self.end_turn().is_some(),
            BattleAction::UsePotion(slot) => self.use_potion(*slot).is_some(),
        };
        if accepted {
            let sequence = u32::try_from(self.actions.len()).unwrap_or(u32::MAX);
            tracing::debug!(action = action.name(), sequence, "action applied");
            self.actions.push_back(ActionRecord::new(action, turn, sequence));
        }
        accepted
    }

    /// Snapshot for the meta layer.
    #[must_use]
    pub fn summary(&self) -> BattleSummary {
        BattleSummary {
            outcome: self.outcome,
            turns: self.turn,
            correct_answers: self.player.correct_answers,
            max_combo: self.ctx.scaling.combo.battle_max(),
            enemy_key: self.enemy.key.clone(),
            enemy_name: self.enemy.name.clone(),
            is_boss: self.enemy.is_boss,
            wisdom: self.player.wisdom,
            max_damage: self.player.max_damage,
        }
    }

    /// Hand the cards back, with any level-ups and growth they gained.
    #[must_use]
    pub fn into_cards(self) -> Vec<CardInstance> {
        self.piles.into_cards()
    }

    /// Maximum energy: base + energy relic + energy gained from cards.
    #[must_use]
    pub fn max_energy(&self) -> i64 {
        self.player.base_energy + self.ctx.scaling.relic_bonus(RelicKind::EnergyBonus) + self.player.energy_bonus
    }

    /// Quiz difficulty cap for this enemy.
    #[must_use]
    pub fn difficulty_cap(&self) -> u8 {
        self.enemy.difficulty_cap(self.config.max_difficulty)
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn player(&self) -> &CombatantState {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut CombatantState {
        &mut self.player
    }

    #[must_use]
    pub fn enemy(&self) -> &EnemyState {
        &self.enemy
    }

    pub fn enemy_mut(&mut self) -> &mut EnemyState {
        &mut self.enemy
    }

    /// The enemy's next action.
    #[must_use]
    pub fn intent(&self) -> Option<&Intent> {
        self.intent.as_ref()
    }

    #[must_use]
    pub fn piles(&self) -> &PileManager {
        &self.piles
    }

    #[must_use]
    pub fn hand(&self) -> &[InstanceId] {
        self.piles.hand()
    }

    #[must_use]
    pub fn active_question(&self) -> Option<&Question> {
        self.quiz.as_ref().map(|q| &q.question)
    }

    #[must_use]
    pub fn scaling(&self) -> &ScalingAggregator {
        &*self.ctx.scaling
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn actions(&self) -> &Vector<ActionRecord> {
        &self.actions
    }

    // === Internals ===

    pub(super) fn template_of(&self, card: InstanceId) -> Option<&'a CardTemplate> {
        let catalog = self.ctx.catalog;
        let template = self.piles.card(card).and_then(|c| catalog.template(c.template));
        if template.is_none() {
            tracing::warn!(%card, "card has no template");
        }
        template
    }

    /// Build a question for `mode`, skipping `exclude` where possible.
    fn ask(&mut self, mode: QuizMode, exclude: &[WordId]) -> Option<Question> {
        let cap = self.difficulty_cap();
        let weights = self.ctx.memory.current_weights();
        let word = self
            .ctx
            .words
            .pick_weighted_word(cap, &weights, exclude, &mut self.quiz_rng)?;

        if mode == QuizMode::Typed {
            return Some(Question::Typed(self.ctx.words.make_typed_question(&word)));
        }

        let direction = Direction::random(&mut self.quiz_rng);
        let mut question = self.ctx.words.make_choice_question(&word, direction, &mut self.quiz_rng);
        let hints = self.ctx.scaling.take_hints();
        if hints > 0 {
            question.eliminate(hints, &mut self.quiz_rng);
        }
        Some(Question::Choice(question))
    }

    /// Pay for the card, move it out of hand and settle the phase.
    fn finish_card(&mut self, quiz: ActiveQuiz, correct: bool, effects: Vec<AppliedEffect>) -> QuizResolution {
        self.player.spend_energy(quiz.cost);

        let catalog = self.ctx.catalog;
        let template = catalog.template(quiz.template);
        if template.is_some_and(CardTemplate::exhausts) {
            self.piles.exhaust(quiz.card);
        } else {
            self.piles.play(quiz.card);
        }
        if quiz.hits_landed > 0 && !template.is_some_and(CardTemplate::is_mirror) {
            self.player.last_played = Some(quiz.template);
        }

        self.phase = if self.enemy.is_dead() {
            BattlePhase::Victory
        } else {
            BattlePhase::PlayerTurn
        };
        let resolution = self.report(quiz.card, correct, effects, None);
        self.emit_phase();
        if self.phase == BattlePhase::Victory {
            self.conclude(BattleOutcome::Victory);
        }
        resolution
    }

    fn report(
        &mut self,
        card: InstanceId,
        correct: bool,
        effects: Vec<AppliedEffect>,
        follow_up: Option<Question>,
    ) -> QuizResolution {
        let combo = self.ctx.scaling.combo.streak();
        let combo_multiplier = self.ctx.scaling.combo_multiplier();
        let combo_text = self.ctx.scaling.combo_text();
        self.events.emit(BattleEvent::QuizResult {
            card,
            correct,
            combo,
            combo_multiplier,
            combo_text: combo_text.clone(),
            effects: effects.clone(),
            follow_up: follow_up.clone().map(Box::new),
        });
        QuizResolution {
            correct,
            combo,
            combo_multiplier,
            combo_text,
            effects,
            follow_up,
            phase: self.phase,
        }
    }

    fn reject(&mut self, reason: RejectReason) {
        tracing::warn!(%reason, "action rejected");
        self.events.emit(BattleEvent::Error { reason });
    }

    pub(super) fn emit_phase(&mut self) {
        self.events.emit(BattleEvent::StateChange { phase: self.phase });
    }

    /// Enter a terminal phase and announce the outcome.
    pub(super) fn conclude(&mut self, outcome: BattleOutcome) {
        let phase = BattlePhase::from(outcome);
        if self.phase != phase {
            self.phase = phase;
            self.emit_phase();
        }
        self.outcome = Some(outcome);
        self.quiz = None;
        tracing::info!(outcome = ?outcome, turns = self.turn, "battle ended");
        self.events.emit(BattleEvent::BattleEnd { outcome });
    }
}

impl std::fmt::Debug for Battle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Battle")
            .field("phase", &self.phase)
            .field("turn", &self.turn)
            .field("player", &self.player)
            .field("enemy", &self.enemy.key)
            .field("intent", &self.intent)
            .finish_non_exhaustive()
    }
}
