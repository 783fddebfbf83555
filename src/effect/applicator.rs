//! Applying effects to the game state

use super::Effect;
use crate::entity::{adjust_percent, Stat};
use crate::simulator::GameState;

/// Apply every delta of `effect` to `state`.
///
/// Bounded stats are clamped to [0,100]; knowledge and money are not.
pub fn apply_effect(state: &mut GameState, effect: &Effect) {
    for (stat, delta) in effect.iter() {
        apply_delta(state, stat, delta);
    }
}

/// Apply a single delta to the attribute `stat` names
#[inline]
pub fn apply_delta(state: &mut GameState, stat: Stat, delta: i32) {
    let child = &mut state.child;
    let parent = &mut state.parent;

    match stat {
        Stat::ChildHappiness => child.happiness = adjust_percent(child.happiness, delta),
        Stat::ChildHunger => child.hunger = adjust_percent(child.hunger, delta),
        Stat::ChildEnergy => child.energy = adjust_percent(child.energy, delta),
        Stat::ChildTrust => child.trust_level = adjust_percent(child.trust_level, delta),
        Stat::ChildKnowledge => child.knowledge = child.knowledge.saturating_add(delta),
        Stat::ParentPatience => parent.patience = adjust_percent(parent.patience, delta),
        Stat::ParentMoney => parent.money = parent.money.saturating_add(delta),
        Stat::ParentEnergy => parent.energy = adjust_percent(parent.energy, delta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> GameState {
        GameState::new("Sam", 5, "Alex")
    }

    #[test]
    fn test_trust_clamps_at_zero() {
        let mut state = baseline();
        apply_effect(&mut state, &Effect::new().with(Stat::ChildTrust, -200));
        assert_eq!(state.child.trust_level, 0);
    }

    #[test]
    fn test_knowledge_unclamped() {
        let mut state = baseline();
        apply_effect(&mut state, &Effect::new().with(Stat::ChildKnowledge, 20));
        assert_eq!(state.child.knowledge, 20);

        apply_effect(&mut state, &Effect::new().with(Stat::ChildKnowledge, -50));
        assert_eq!(state.child.knowledge, -30);
    }

    #[test]
    fn test_money_unclamped() {
        let mut state = baseline();
        apply_effect(&mut state, &Effect::new().with(Stat::ParentMoney, -1500));
        assert_eq!(state.parent.money, -500);
    }

    #[test]
    fn test_happiness_clamps_at_hundred() {
        let mut state = baseline();
        apply_effect(&mut state, &Effect::new().with(Stat::ChildHappiness, 40));
        assert_eq!(state.child.happiness, 100);
    }

    #[test]
    fn test_empty_effect_is_noop() {
        let mut state = baseline();
        let before = state.clone();
        apply_effect(&mut state, &Effect::new());
        assert_eq!(state, before);
    }

    #[test]
    fn test_every_stat_reaches_its_field() {
        let mut state = baseline();
        let effect: Effect = Stat::ALL.iter().map(|s| (*s, -1)).collect();
        apply_effect(&mut state, &effect);

        assert_eq!(state.child.happiness, 74);
        assert_eq!(state.child.hunger, 49);
        assert_eq!(state.child.energy, 49);
        assert_eq!(state.child.trust_level, 74);
        assert_eq!(state.child.knowledge, -1);
        assert_eq!(state.parent.patience, 99);
        assert_eq!(state.parent.money, 999);
        assert_eq!(state.parent.energy, 74);
    }
}
