//! Card resolution: the damage strike and the side effects after it.
//!
//! Side effects run in a fixed order after damage: block, persistent block,
//! heal, draw, statuses, poison, catalyst, accumulate, weak point, mirror,
//! snowball, energy bonus.

use super::orchestrator::Battle;
use super::state::ActiveQuiz;
use crate::cards::CardStats;
use crate::core::InstanceId;
use crate::effects::{run_pipeline, AppliedEffect, CardEffect, DamageContext, DamageOutcome};
use crate::scaling::StatusKind;

impl Battle<'_> {
    /// Apply one correct answer's worth of a card.
    pub(super) fn resolve_hit(&mut self, quiz: &ActiveQuiz, effects: &mut Vec<AppliedEffect>) {
        let Some(stats) = self.piles.card(quiz.card).map(|c| c.stats().clone()) else {
            tracing::warn!(card = %quiz.card, "resolving a card that left the battle");
            return;
        };
        let answer_length = quiz.question.answer_length();

        if stats.is_attack_bearing() {
            let outcome = self.strike(&stats, answer_length, effects);
            if outcome.length_block > 0 {
                self.player.block += outcome.length_block;
                effects.push(AppliedEffect::Block {
                    amount: outcome.length_block,
                });
            }
        }
        self.apply_side_effects(quiz.card, &stats, answer_length, effects);
    }

    /// Run the damage pipeline for `stats` and hit the enemy with it.
    pub(super) fn strike(
        &mut self,
        stats: &CardStats,
        answer_length: usize,
        effects: &mut Vec<AppliedEffect>,
    ) -> DamageOutcome {
        let ctx = DamageContext {
            stats,
            base: self.ctx.scaling.calculate_damage(stats),
            permanent_buff: self.player.damage_buff,
            awakening_percent: self.enemy.damage_taken_percent(),
            combo_streak: self.ctx.scaling.combo.streak(),
            answer_length,
            correct_answers: self.player.correct_answers,
            hp_lost: self.player.hp_lost(),
            other_cards_in_hand: self.piles.hand().len().saturating_sub(1),
            double_next: self.player.double_next,
        };
        let outcome = run_pipeline(&ctx);
        if outcome.doubled {
            self.player.double_next = false;
        }

        let m = self.enemy.absorb(outcome.total);
        self.player.max_damage = self.player.max_damage.max(outcome.total);
        effects.push(AppliedEffect::Damage {
            total: outcome.total,
            hp_damage: m.hp_damage,
            blocked: m.blocked,
        });
        if self.enemy.check_awakening() {
            effects.push(AppliedEffect::Awakened);
        }
        outcome
    }

    fn apply_side_effects(
        &mut self,
        card: InstanceId,
        stats: &CardStats,
        answer_length: usize,
        effects: &mut Vec<AppliedEffect>,
    ) {
        if stats.block > 0 {
            let amount = self.ctx.scaling.calculate_block(stats);
            self.player.block += amount;
            effects.push(AppliedEffect::Block { amount });
        }

        let persistent = stats.sum_effects(|e| match e {
            CardEffect::PersistentBlock(v) => Some(*v),
            _ => None,
        });
        if persistent > 0 {
            self.player.persistent_block += persistent;
            effects.push(AppliedEffect::PersistentBlock { amount: persistent });
        }

        if stats.heal > 0 {
            let amount = self.player.heal(stats.heal);
            effects.push(AppliedEffect::Heal { amount });
        }

        if stats.draw > 0 {
            let cards = self.piles.draw(stats.draw, &mut self.rng);
            effects.push(AppliedEffect::Draw { cards });
        }

        self.install_statuses(stats, effects);

        if stats.poison > 0 {
            self.enemy.poison += stats.poison;
            effects.push(AppliedEffect::Poison {
                added: stats.poison,
                total: self.enemy.poison,
            });
        }

        if stats.effects.contains(&CardEffect::Catalyst) {
            self.enemy.poison *= 2;
            effects.push(AppliedEffect::PoisonCatalyzed {
                total: self.enemy.poison,
            });
        }

        let accumulate = stats.sum_effects(|e| match e {
            CardEffect::Accumulate(v) => Some(*v),
            _ => None,
        });
        if accumulate > 0 {
            self.player.damage_buff += accumulate;
            effects.push(AppliedEffect::DamageBuff {
                added: accumulate,
                total: self.player.damage_buff,
            });
        }

        if stats.effects.contains(&CardEffect::WeakPoint) {
            if self.enemy.poison >= self.config.weak_point_threshold {
                self.player.double_next = true;
                effects.push(AppliedEffect::WeakPointArmed);
            } else {
                effects.push(AppliedEffect::WeakPointMissed {
                    poison: self.enemy.poison,
                });
            }
        }

        if stats.effects.contains(&CardEffect::Mirror) {
            self.mirror(answer_length, effects);
        }

        let snowball = stats.sum_effects(|e| match e {
            CardEffect::Snowball(v) => Some(*v),
            _ => None,
        });
        if snowball != 0 {
            if let Some(instance) = self.piles.card_mut(card) {
                instance.grow_damage(snowball);
                effects.push(AppliedEffect::Snowball {
                    damage: instance.stats().damage,
                });
            }
        }

        let energy = stats.sum_effects(|e| match e {
            CardEffect::EnergyBonus(v) => Some(*v),
            _ => None,
        });
        if energy > 0 {
            self.player.energy_bonus += energy;
            effects.push(AppliedEffect::MaxEnergy {
                max: self.max_energy(),
            });
        }
    }

    fn install_statuses(&mut self, stats: &CardStats, effects: &mut Vec<AppliedEffect>) {
        for effect in &stats.effects {
            match *effect {
                CardEffect::Buff { kind, value, turns } => {
                    self.ctx.scaling.buffs.apply(kind, value, Some(turns));
                    effects.push(AppliedEffect::PlayerStatus { kind, value, turns });
                }
                CardEffect::ThornArmor { value, turns } => {
                    self.ctx.scaling.buffs.apply(StatusKind::ThornArmor, value, Some(turns));
                    effects.push(AppliedEffect::PlayerStatus {
                        kind: StatusKind::ThornArmor,
                        value,
                        turns,
                    });
                }
                CardEffect::Debuff { kind, value, turns } => {
                    self.enemy.debuffs.apply(kind, value, Some(turns));
                    effects.push(AppliedEffect::EnemyStatus { kind, value, turns });
                }
                _ => {}
            }
        }
    }

    /// Replay the damage and poison of the last card played, read from its
    /// template. None of its other effects repeat.
    fn mirror(&mut self, answer_length: usize, effects: &mut Vec<AppliedEffect>) {
        let catalog = self.ctx.catalog;
        let Some(template) = self.player.last_played.and_then(|id| catalog.template(id)) else {
            effects.push(AppliedEffect::MirrorFizzled);
            return;
        };
        let stats = &template.stats;
        if !stats.is_attack_bearing() && stats.poison <= 0 {
            effects.push(AppliedEffect::MirrorFizzled);
            return;
        }

        effects.push(AppliedEffect::Mirrored { template: template.id });
        if stats.is_attack_bearing() {
            self.strike(stats, answer_length, effects);
        }
        if stats.poison > 0 {
            self.enemy.poison += stats.poison;
            effects.push(AppliedEffect::Poison {
                added: stats.poison,
                total: self.enemy.poison,
            });
        }
    }
}
