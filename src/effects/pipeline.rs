//! The ordered damage pipeline.
//!
//! A successful attack passes through `DAMAGE_PIPELINE` stage by stage. Each
//! stage reads the running total and the `DamageContext` and returns the new
//! total. Later stages depend on earlier ones (doubling sees every bonus), so
//! the order is fixed.
//!
//! Enemy block is not a stage: the battle subtracts it from the pipeline
//! total afterwards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::effect::CardEffect;
use crate::cards::CardStats;
use crate::core::ceil_percent;

/// One step of the damage pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageStage {
    /// Aggregator damage: base, attack relic, combo, strength, potion.
    Base,
    /// In-battle damage accumulated by `Accumulate` cards.
    PermanentBuff,
    /// Boss awakening multiplier.
    Awakening,
    ComboBonus,
    ComboScaling,
    LengthSynergy,
    Soul,
    Rage,
    Vortex,
    /// Pending "next attack doubled" flag.
    DoubleStrike,
}

/// Stages in resolution order.
pub const DAMAGE_PIPELINE: [DamageStage; 10] = [
    DamageStage::Base,
    DamageStage::PermanentBuff,
    DamageStage::Awakening,
    DamageStage::ComboBonus,
    DamageStage::ComboScaling,
    DamageStage::LengthSynergy,
    DamageStage::Soul,
    DamageStage::Rage,
    DamageStage::Vortex,
    DamageStage::DoubleStrike,
];

/// Everything the pipeline reads. Built fresh for every hit.
#[derive(Clone, Debug)]
pub struct DamageContext<'a> {
    pub stats: &'a CardStats,
    /// Output of `ScalingAggregator::calculate_damage` for `stats`.
    pub base: i64,
    pub permanent_buff: i64,
    /// Set while the enemy is awakened.
    pub awakening_percent: Option<i64>,
    pub combo_streak: u32,
    /// Characters in the canonical answer of the current question.
    pub answer_length: usize,
    /// Correct answers this battle, the current one included.
    pub correct_answers: u32,
    pub hp_lost: i64,
    /// Cards in hand other than the one being played.
    pub other_cards_in_hand: usize,
    pub double_next: bool,
}

/// Result of a pipeline run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DamageOutcome {
    /// Damage before enemy block.
    pub total: i64,
    /// Block granted by length synergy.
    pub length_block: i64,
    /// Whether the double-strike flag was consumed.
    pub doubled: bool,
    /// Running total after every stage that changed it.
    pub trace: SmallVec<[(DamageStage, i64); 10]>,
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

impl DamageStage {
    fn apply(self, total: i64, ctx: &DamageContext<'_>, outcome: &mut DamageOutcome) -> i64 {
        let stats = ctx.stats;
        match self {
            DamageStage::Base => ctx.base,
            DamageStage::PermanentBuff => total + ctx.permanent_buff,
            DamageStage::Awakening => match ctx.awakening_percent {
                Some(percent) => ceil_percent(total, percent),
                None => total,
            },
            DamageStage::ComboBonus => {
                if ctx.combo_streak >= 2 {
                    total
                        + stats.sum_effects(|e| match e {
                            CardEffect::ComboBonus(v) => Some(*v),
                            _ => None,
                        })
                } else {
                    total
                }
            }
            DamageStage::ComboScaling => {
                let per_point = stats.sum_effects(|e| match e {
                    CardEffect::ComboScaling(v) => Some(*v),
                    _ => None,
                });
                total + per_point * i64::from(ctx.combo_streak)
            }
            DamageStage::LengthSynergy => {
                let per_char = stats.sum_effects(|e| match e {
                    CardEffect::LengthSynergy(v) => Some(*v),
                    _ => None,
                });
                let bonus = per_char * to_i64(ctx.answer_length);
                outcome.length_block += bonus;
                total + bonus
            }
            DamageStage::Soul => {
                let per_answer = stats.sum_effects(|e| match e {
                    CardEffect::Soul(v) => Some(*v),
                    _ => None,
                });
                total + per_answer * i64::from(ctx.correct_answers)
            }
            DamageStage::Rage => {
                let percent = stats.sum_effects(|e| match e {
                    CardEffect::Rage { percent } => Some(*percent),
                    _ => None,
                });
                total + ctx.hp_lost.max(0) * percent / 100
            }
            DamageStage::Vortex => {
                let per_card = stats.sum_effects(|e| match e {
                    CardEffect::Vortex(v) => Some(*v),
                    _ => None,
                });
                total + per_card * to_i64(ctx.other_cards_in_hand)
            }
            DamageStage::DoubleStrike => {
                if ctx.double_next {
                    outcome.doubled = true;
                    total * 2
                } else {
                    total
                }
            }
        }
    }
}

/// Run every stage of `DAMAGE_PIPELINE` in order.
#[must_use]
pub fn run_pipeline(ctx: &DamageContext<'_>) -> DamageOutcome {
    let mut outcome = DamageOutcome::default();
    let mut total = 0;

    for stage in DAMAGE_PIPELINE {
        let next = stage.apply(total, ctx, &mut outcome);
        if next != total || stage == DamageStage::Base {
            outcome.trace.push((stage, next));
        }
        total = next;
    }

    outcome.total = total.max(0);
    tracing::debug!(total = outcome.total, stages = outcome.trace.len(), "damage pipeline");
    outcome
}
