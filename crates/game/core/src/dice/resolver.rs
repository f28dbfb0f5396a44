//! Dice cost resolution.
//!
//! The greedy resolver walks cost entries in order and commits dice for each
//! entry before looking at the next one. It never backtracks, so a cost that a
//! different assignment could pay may still be reported as unpayable. Callers
//! treat `None` as "try something cheaper".

use super::cost::{CostKey, CostSpec};
use super::element::{Die, Element};

/// Strategy for choosing which held dice pay a cost.
pub trait DiceResolver {
    /// Returns the indices of the dice to spend, or `None` when the cost
    /// cannot be paid. Indices are distinct and within `dice`.
    ///
    /// `Power` entries are ignored; energy is checked by the caller.
    fn resolve(
        &self,
        dice: &[Die],
        cost: &CostSpec,
        character_element: Element,
    ) -> Option<Vec<usize>>;

    /// Returns true if [`resolve`](Self::resolve) would succeed.
    fn can_pay(&self, dice: &[Die], cost: &CostSpec, character_element: Element) -> bool {
        self.resolve(dice, cost, character_element).is_some()
    }
}

/// Greedy first-fit resolver. See [`select_dice`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GreedyDiceResolver;

impl GreedyDiceResolver {
    pub fn new() -> Self {
        Self
    }
}

impl DiceResolver for GreedyDiceResolver {
    fn resolve(
        &self,
        dice: &[Die],
        cost: &CostSpec,
        character_element: Element,
    ) -> Option<Vec<usize>> {
        select_dice(dice, cost, character_element)
    }
}

/// Picks dice for every non-power entry of `cost`, in entry order.
///
/// Per key:
/// - **Element**: matching faces first, then omni.
/// - **Any**: faces other than the character's element, then the character's
///   element, then omni.
/// - **Same**: an already sufficient non-character face (smallest such group
///   first), else the largest non-character group topped up with omni, else
///   the character's element topped up with omni.
///
/// Within a pass dice are taken in held order.
pub fn select_dice(dice: &[Die], cost: &CostSpec, character_element: Element) -> Option<Vec<usize>> {
    let mut selection = Selection::new(dice);

    for &(key, amount) in cost.entries() {
        let paid = match key {
            CostKey::Element(element) => selection.take_element(element, amount),
            CostKey::Any => selection.take_any(amount, character_element),
            CostKey::Same => selection.take_same(amount, character_element),
            // Paid from energy.
            CostKey::Power => true,
        };
        if !paid {
            return None;
        }
    }

    Some(selection.picked)
}

/// Dice committed so far. A die is spent at most once.
struct Selection<'a> {
    dice: &'a [Die],
    used: Vec<bool>,
    picked: Vec<usize>,
}

impl<'a> Selection<'a> {
    fn new(dice: &'a [Die]) -> Self {
        Self {
            dice,
            used: vec![false; dice.len()],
            picked: Vec::new(),
        }
    }

    /// Commits up to `limit` unused dice matching `accept`, in held order.
    /// Returns how many were committed.
    fn take_where(&mut self, limit: u32, accept: impl Fn(Die) -> bool) -> u32 {
        let mut taken = 0;
        for (idx, die) in self.dice.iter().copied().enumerate() {
            if taken == limit {
                break;
            }
            if self.used[idx] || !accept(die) {
                continue;
            }
            self.used[idx] = true;
            self.picked.push(idx);
            taken += 1;
        }
        taken
    }

    fn take_face(&mut self, face: Die, limit: u32) -> u32 {
        self.take_where(limit, |die| die == face)
    }

    fn take_omni(&mut self, limit: u32) -> u32 {
        self.take_where(limit, Die::is_omni)
    }

    fn take_element(&mut self, element: Element, amount: u32) -> bool {
        let exact = self.take_face(Die::from(element), amount);
        let omni = self.take_omni(amount - exact);
        exact + omni == amount
    }

    fn take_any(&mut self, amount: u32, character_element: Element) -> bool {
        let own = Die::from(character_element);
        let unaligned = self.take_where(amount, |die| !die.is_omni() && die != own);
        let aligned = self.take_face(own, amount - unaligned);
        let omni = self.take_omni(amount - unaligned - aligned);
        unaligned + aligned + omni == amount
    }

    fn take_same(&mut self, amount: u32, character_element: Element) -> bool {
        if amount == 0 {
            return true;
        }

        let own = Die::from(character_element);
        let omni_count = self.count_unused(Die::is_omni);
        let own_count = self.count_unused(|die| die == own);

        // Candidate groups in first-seen order; sorts below are stable.
        let mut groups = self.unused_groups();
        groups.retain(|(face, _)| *face != own);

        groups.sort_by_key(|(_, count)| *count);
        if let Some(&(face, _)) = groups.iter().find(|(_, count)| *count >= amount) {
            self.take_face(face, amount);
            return true;
        }

        groups.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(&(face, count)) = groups.iter().find(|(_, count)| count + omni_count >= amount)
        {
            self.take_face(face, count);
            self.take_omni(amount - count);
            return true;
        }

        if own_count + omni_count >= amount {
            let aligned = self.take_face(own, own_count.min(amount));
            self.take_omni(amount - aligned);
            return true;
        }

        false
    }

    fn count_unused(&self, accept: impl Fn(Die) -> bool) -> u32 {
        self.dice
            .iter()
            .zip(&self.used)
            .filter(|(die, used)| !**used && accept(**die))
            .count() as u32
    }

    /// Unused non-omni faces with their counts, in order of first appearance.
    fn unused_groups(&self) -> Vec<(Die, u32)> {
        let mut groups: Vec<(Die, u32)> = Vec::new();
        for (die, used) in self.dice.iter().copied().zip(&self.used) {
            if *used || die.is_omni() {
                continue;
            }
            match groups.iter_mut().find(|(face, _)| *face == die) {
                Some((_, count)) => *count += 1,
                None => groups.push((die, 1)),
            }
        }
        groups
    }
}
