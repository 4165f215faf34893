//! The enemy's turn and the start of the next player turn.

use super::orchestrator::Battle;
use super::state::BattlePhase;
use crate::effects::AppliedEffect;
use crate::enemies::{advance_pattern, intent_for, Intent};
use crate::events::BattleEvent;
use crate::scaling::StatusKind;

impl Battle<'_> {
    /// Poison, block reset, the previewed intent, then the next preview.
    ///
    /// Returns the intent that was carried out (`None` if poison finished the
    /// enemy first) and what happened.
    pub(super) fn run_enemy_turn(&mut self) -> (Option<Intent>, Vec<AppliedEffect>) {
        let mut effects = Vec::new();

        if self.enemy.poison > 0 {
            let damage = self.enemy.poison;
            self.enemy.lose_hp(damage);
            self.enemy.poison = (self.enemy.poison - 1).max(0);
            effects.push(AppliedEffect::PoisonTick {
                damage,
                remaining: self.enemy.poison,
            });
            if self.enemy.is_dead() {
                tracing::debug!(enemy = %self.enemy.key, "poison finished the enemy");
                return (None, effects);
            }
        }
        self.enemy.block = 0;

        let intent = self.intent.clone();
        if let Some(intent) = &intent {
            self.carry_out(intent, &mut effects);
        }

        advance_pattern(&mut self.enemy);
        self.intent = intent_for(&self.enemy);
        (intent, effects)
    }

    fn carry_out(&mut self, intent: &Intent, effects: &mut Vec<AppliedEffect>) {
        match intent {
            Intent::Attack { .. } | Intent::MultiAttack { .. } => {
                let weakened = self.enemy.debuffs.value(StatusKind::Weakened);
                let thorns = self.ctx.scaling.buffs.value(StatusKind::ThornArmor);
                let damage = (intent.damage() - weakened).max(0);

                for _ in 0..intent.hits() {
                    let m = self.player.absorb(damage);
                    effects.push(AppliedEffect::EnemyHit {
                        damage,
                        hp_damage: m.hp_damage,
                        blocked: m.blocked,
                    });
                    if self.player.is_dead() {
                        break;
                    }
                    if thorns > 0 && damage > 0 {
                        let back = self.enemy.absorb(thorns);
                        effects.push(AppliedEffect::Thorns {
                            damage: thorns,
                            hp_damage: back.hp_damage,
                        });
                        if self.enemy.is_dead() {
                            break;
                        }
                    }
                }
            }
            Intent::Defend { block } => {
                self.enemy.block += block;
                effects.push(AppliedEffect::EnemyBlock { amount: *block });
            }
            Intent::Buff { buff, value } => {
                self.enemy.modify_buff(buff, *value);
                effects.push(AppliedEffect::EnemyBuff {
                    buff: buff.clone(),
                    value: *value,
                });
            }
        }
    }

    /// Refill energy, swap block, tick statuses and draw a fresh hand.
    pub(super) fn start_turn(&mut self) {
        self.turn += 1;
        let next_turn_energy = self.ctx.scaling.buffs.value(StatusKind::NextTurnEnergy);
        self.player.energy = self.max_energy() + next_turn_energy;
        self.player.block = std::mem::take(&mut self.player.persistent_block);

        let expired = self.ctx.scaling.buffs.tick();
        let expired_debuffs = self.enemy.debuffs.tick();
        if !expired.is_empty() || !expired_debuffs.is_empty() {
            tracing::debug!(?expired, ?expired_debuffs, "statuses expired");
        }

        self.piles.discard_hand();
        let drawn = self.piles.draw(self.config.hand_size, &mut self.rng);
        self.phase = BattlePhase::PlayerTurn;

        tracing::debug!(turn = self.turn, energy = self.player.energy, "new turn");
        self.events.emit(BattleEvent::NewTurn {
            turn: self.turn,
            drawn,
            energy: self.player.energy,
        });
        self.emit_phase();
    }
}
