use super::Cell;

/// Trait for cellular automaton rules.
/// The engine asks the rule for a cell's next state given its live neighbor count.
pub trait Rule {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description, usually the B/S notation
    fn description(&self) -> &'static str;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Conway's Game of Life (B3/S23)
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - Classic"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        let rule = ConwayRule;
        assert_eq!(rule.evolve(Cell::Alive, 0), Cell::Dead);
        assert_eq!(rule.evolve(Cell::Alive, 1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        let rule = ConwayRule;
        assert_eq!(rule.evolve(Cell::Alive, 2), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Alive, 3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        let rule = ConwayRule;
        for n in 4..=8 {
            assert_eq!(rule.evolve(Cell::Alive, n), Cell::Dead);
        }
    }

    #[test]
    fn test_reproduction() {
        let rule = ConwayRule;
        assert_eq!(rule.evolve(Cell::Dead, 3), Cell::Alive);
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(rule.evolve(Cell::Dead, n), Cell::Dead);
        }
    }

    #[test]
    fn test_rule_metadata() {
        assert_eq!(ConwayRule.name(), "Conway");
        assert!(ConwayRule.description().starts_with("B3/S23"));
    }
}
