use serde::{Deserialize, Serialize};

/// Identifies one of the three proportion tables of a manager.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    MasterSlave,
    MasterMaster,
    SlaveSlave,
}

/// Slack for rounding when comparing shares against their bounds.
const TOLERANCE: f64 = 1e-9;

/// Fractional shares of the available space. Every table sums to one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Proportions {
    pub master_slave: Vec<f64>,
    pub master_master: Vec<f64>,
    pub slave_slave: Vec<f64>,
    min: f64,
}

fn uniform(count: usize) -> Vec<f64> {
    vec![1.0 / count.max(1) as f64; count]
}

impl Proportions {
    #[must_use]
    pub fn new(master: f64, min: f64) -> Self {
        let min = min.clamp(0.0, 0.5);
        let master = master.clamp(min, 1.0 - min);
        Self {
            master_slave: vec![master, 1.0 - master],
            master_master: vec![],
            slave_slave: vec![],
            min,
        }
    }

    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn table(&self, table: Table) -> &[f64] {
        match table {
            Table::MasterSlave => &self.master_slave,
            Table::MasterMaster => &self.master_master,
            Table::SlaveSlave => &self.slave_slave,
        }
    }

    fn table_mut(&mut self, table: Table) -> &mut Vec<f64> {
        match table {
            Table::MasterSlave => &mut self.master_slave,
            Table::MasterMaster => &mut self.master_master,
            Table::SlaveSlave => &mut self.slave_slave,
        }
    }

    /// Reset a table to uniform shares if its size changed.
    pub fn resize(&mut self, table: Table, count: usize) {
        let entries = self.table_mut(table);
        if entries.len() != count {
            *entries = uniform(count);
        }
    }

    /// Set entry `i` to `value`, letting entry `j` absorb the difference.
    ///
    /// Returns false and leaves the table untouched when either entry would leave
    /// `[min, 1 - min]`. Values on the bounds are accepted.
    pub fn set(&mut self, table: Table, value: f64, i: usize, j: usize) -> bool {
        let (min, max) = (self.min, 1.0 - self.min);
        let entries = self.table_mut(table);
        if i == j || i >= entries.len() || j >= entries.len() || !value.is_finite() {
            return false;
        }
        let complement = entries[i] + entries[j] - value;
        let outside = |v: f64| v < min - TOLERANCE || v > max + TOLERANCE;
        if outside(value) || outside(complement) {
            return false;
        }
        entries[i] = value.clamp(min, max);
        entries[j] = complement.clamp(min, max);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn sum(values: &[f64]) -> f64 {
        values.iter().sum()
    }

    #[test]
    fn new_tables_sum_to_one() {
        let p = Proportions::new(0.6, 0.1);
        assert!((sum(&p.master_slave) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn resizing_resets_to_uniform_shares() {
        let mut p = Proportions::new(0.5, 0.1);
        p.resize(Table::SlaveSlave, 4);
        assert_eq!(p.slave_slave, vec![0.25; 4]);
        assert!(p.set(Table::SlaveSlave, 0.4, 0, 1));
        // Same size keeps custom shares.
        p.resize(Table::SlaveSlave, 4);
        assert!((p.slave_slave[0] - 0.4).abs() < EPSILON);
        p.resize(Table::SlaveSlave, 3);
        assert!((p.slave_slave[0] - 1.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn accepted_updates_preserve_the_sum() {
        let mut p = Proportions::new(0.5, 0.1);
        p.resize(Table::MasterMaster, 3);
        for (value, i, j) in [(0.5, 0, 1), (0.2, 2, 0), (0.15, 1, 2)] {
            if p.set(Table::MasterMaster, value, i, j) {
                assert!((sum(&p.master_master) - 1.0).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn out_of_range_updates_are_rejected_without_mutation() {
        let mut p = Proportions::new(0.5, 0.1);
        let before = p.clone();
        assert!(!p.set(Table::MasterSlave, 0.05, 0, 1));
        assert!(!p.set(Table::MasterSlave, 0.95, 0, 1));
        assert!(!p.set(Table::MasterSlave, f64::NAN, 0, 1));
        assert!(!p.set(Table::MasterSlave, 0.5, 0, 0));
        assert!(!p.set(Table::MasterSlave, 0.5, 0, 5));
        assert_eq!(p, before);
    }

    #[test]
    fn values_on_the_bounds_are_accepted() {
        let mut p = Proportions::new(0.5, 0.1);
        assert!(p.set(Table::MasterSlave, 0.9, 0, 1));
        assert!((p.master_slave[1] - 0.1).abs() < EPSILON);
        assert!(p.master_slave[1] >= 0.1);
        assert!(p.set(Table::MasterSlave, 0.1, 0, 1));
        assert!((p.master_slave[1] - 0.9).abs() < EPSILON);
        assert!(p.master_slave[0] >= 0.1);

        p.resize(Table::SlaveSlave, 4);
        assert!(p.set(Table::SlaveSlave, 0.4, 0, 1));
        assert!(p.slave_slave[1] >= 0.1);
        assert!((sum(&p.slave_slave) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn complement_out_of_range_is_rejected() {
        let mut p = Proportions::new(0.5, 0.1);
        p.resize(Table::SlaveSlave, 3);
        let before = p.clone();
        // 1/3 + 1/3 - 0.6 leaves 0.067 for the neighbour.
        assert!(!p.set(Table::SlaveSlave, 0.6, 0, 1));
        assert_eq!(p, before);
    }
}
