//! Master/slave partition of the clients of one layout.
use super::proportions::{Proportions, Table};
use super::WindowHandle;
use crate::config::Config;
use crate::utils::helpers::{order_of, relative_index};
use serde::{Deserialize, Serialize};

/// Role of a client inside a manager.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Master,
    Slave,
}

/// An ordered set of clients with a visible slot count.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    /// Logical order, used for slot assignment and promotion.
    pub clients: Vec<WindowHandle>,
    /// Same clients ordered bottom to top as the window system stacks them.
    pub stacked: Vec<WindowHandle>,
    pub capacity: usize,
}

impl Pool {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    #[must_use]
    pub fn contains(&self, handle: WindowHandle) -> bool {
        self.clients.contains(&handle)
    }

    #[must_use]
    pub fn position(&self, handle: WindowHandle) -> Option<usize> {
        self.clients.iter().position(|h| *h == handle)
    }

    /// Number of distinct rectangles the pool occupies.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.len().min(self.capacity)
    }

    /// Slot a client at `index` is drawn in. Clients beyond the capacity share
    /// slots with earlier ones and the stacking order decides which is visible.
    #[must_use]
    pub fn slot_of(&self, index: usize) -> usize {
        index % self.capacity.max(1)
    }

    /// Clients grouped by the slot they occupy.
    #[must_use]
    pub fn visible_slots(&self) -> Vec<Vec<WindowHandle>> {
        let mut slots = vec![vec![]; self.slot_count()];
        if slots.is_empty() {
            return slots;
        }
        for (index, handle) in self.clients.iter().enumerate() {
            slots[self.slot_of(index)].push(*handle);
        }
        slots
    }

    fn restack(&mut self, stacking: &[WindowHandle]) {
        let mut stacked = self.clients.clone();
        stacked.sort_by_key(|h| order_of(stacking, h));
        self.stacked = stacked;
    }
}

/// Partition of the clients of a workspace layout into masters and slaves.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Manager {
    pub masters: Pool,
    pub slaves: Pool,
    pub proportions: Proportions,
    masters_min: usize,
    masters_max: usize,
    slaves_min: usize,
    slaves_max: usize,
    proportion_step: f64,
}

impl Manager {
    #[must_use]
    pub fn new(config: &impl Config) -> Self {
        let masters = config.masters();
        let slaves = config.slaves();
        let masters_max = masters.max;
        let masters_min = masters.min.min(masters_max);
        let slaves_max = slaves.max.max(1);
        let slaves_min = slaves.min.clamp(1, slaves_max);
        Self {
            masters: Pool::new(masters.initial.clamp(masters_min, masters_max)),
            slaves: Pool::new(slaves.initial.clamp(slaves_min, slaves_max)),
            proportions: Proportions::new(config.proportion(), config.proportion_min()),
            masters_min,
            masters_max,
            slaves_min,
            slaves_max,
            proportion_step: config.proportion_step(),
        }
    }

    #[must_use]
    pub fn contains(&self, handle: WindowHandle) -> bool {
        self.masters.contains(handle) || self.slaves.contains(handle)
    }

    #[must_use]
    pub fn is_master(&self, handle: WindowHandle) -> bool {
        self.masters.contains(handle)
    }

    #[must_use]
    pub fn is_slave(&self, handle: WindowHandle) -> bool {
        self.slaves.contains(handle)
    }

    #[must_use]
    pub fn role(&self, handle: WindowHandle) -> Option<Role> {
        if self.is_master(handle) {
            Some(Role::Master)
        } else if self.is_slave(handle) {
            Some(Role::Slave)
        } else {
            None
        }
    }

    #[must_use]
    pub fn position(&self, handle: WindowHandle) -> Option<(Role, usize)> {
        self.masters
            .position(handle)
            .map(|i| (Role::Master, i))
            .or_else(|| self.slaves.position(handle).map(|i| (Role::Slave, i)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.masters.len() + self.slaves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Masters followed by slaves.
    #[must_use]
    pub fn ordered(&self) -> Vec<WindowHandle> {
        self.masters
            .clients
            .iter()
            .chain(self.slaves.clients.iter())
            .copied()
            .collect()
    }

    /// All clients bottom to top.
    #[must_use]
    pub fn stacked(&self, stacking: &[WindowHandle]) -> Vec<WindowHandle> {
        let mut stacked = self.ordered();
        stacked.sort_by_key(|h| order_of(stacking, h));
        stacked
    }

    /// Add a client, as master if there is room.
    pub fn add(&mut self, handle: WindowHandle, stacking: &[WindowHandle]) -> bool {
        self.add_as(handle, Role::Master, stacking)
    }

    /// Add a client with a preferred role. Masters that don't fit become slaves.
    pub fn add_as(&mut self, handle: WindowHandle, role: Role, stacking: &[WindowHandle]) -> bool {
        if self.contains(handle) {
            return false;
        }
        if role == Role::Master && self.masters.len() < self.masters.capacity {
            self.masters.clients.insert(0, handle);
        } else {
            self.slaves.clients.insert(0, handle);
        }
        self.restack(stacking);
        self.update_proportions();
        true
    }

    /// Remove a client. A removed master is replaced by the first slave.
    pub fn remove(&mut self, handle: WindowHandle) -> bool {
        if let Some(index) = self.masters.position(handle) {
            if self.slaves.is_empty() {
                self.masters.clients.remove(index);
            } else {
                let promoted = self.slaves.clients.remove(0);
                self.masters.clients[index] = promoted;
            }
        } else if let Some(index) = self.slaves.position(handle) {
            self.slaves.clients.remove(index);
        } else {
            return false;
        }
        self.masters.stacked.retain(|h| *h != handle);
        self.slaves.stacked.retain(|h| *h != handle);
        let stacking = self.stacking_hint();
        self.restack(&stacking);
        self.update_proportions();
        true
    }

    /// Exchange the positions of two clients. No-op if either is missing.
    pub fn swap(&mut self, a: WindowHandle, b: WindowHandle) -> bool {
        if a == b {
            return false;
        }
        let (Some(pos_a), Some(pos_b)) = (self.position(a), self.position(b)) else {
            return false;
        };
        *self.slot_mut(pos_a) = b;
        *self.slot_mut(pos_b) = a;
        let stacking = self.stacking_hint();
        self.restack(&stacking);
        true
    }

    /// Swap a client with the first master.
    pub fn make_master(&mut self, handle: WindowHandle) -> bool {
        match self.masters.clients.first() {
            Some(first) => self.swap(handle, *first),
            None => false,
        }
    }

    /// Allow one more master and promote the first slave.
    pub fn increase_masters(&mut self) -> bool {
        if self.masters.capacity >= self.masters_max {
            return false;
        }
        self.masters.capacity += 1;
        if !self.slaves.is_empty() {
            let promoted = self.slaves.clients.remove(0);
            self.masters.clients.push(promoted);
        }
        self.refresh();
        true
    }

    /// Allow one less master and demote the last master.
    pub fn decrease_masters(&mut self) -> bool {
        if self.masters.capacity <= self.masters_min {
            return false;
        }
        self.masters.capacity -= 1;
        if self.masters.len() > self.masters.capacity {
            if let Some(demoted) = self.masters.clients.pop() {
                self.slaves.clients.insert(0, demoted);
            }
        }
        self.refresh();
        true
    }

    pub fn increase_slaves(&mut self) -> bool {
        if self.slaves.capacity >= self.slaves_max {
            return false;
        }
        self.slaves.capacity += 1;
        self.update_proportions();
        true
    }

    pub fn decrease_slaves(&mut self) -> bool {
        if self.slaves.capacity <= self.slaves_min {
            return false;
        }
        self.slaves.capacity -= 1;
        self.update_proportions();
        true
    }

    /// Paired, sum preserving update of a proportion table.
    pub fn set_proportions(&mut self, table: Table, value: f64, i: usize, j: usize) -> bool {
        self.proportions.set(table, value, i, j)
    }

    pub fn increase_proportion(&mut self) -> bool {
        let value = self.proportions.master_slave[0] + self.proportion_step;
        self.set_proportions(Table::MasterSlave, value, 0, 1)
    }

    pub fn decrease_proportion(&mut self) -> bool {
        let value = self.proportions.master_slave[0] - self.proportion_step;
        self.set_proportions(Table::MasterSlave, value, 0, 1)
    }

    /// Client `step` positions away from `handle` in master-then-slave order, wrapping.
    #[must_use]
    pub fn relative(&self, handle: WindowHandle, step: i32) -> Option<WindowHandle> {
        let ordered = self.ordered();
        let index = ordered.iter().position(|h| *h == handle)?;
        relative_index(ordered.len(), index, step).map(|i| ordered[i])
    }

    /// Re-sort the stacked views by the window system's stacking order.
    pub fn restack(&mut self, stacking: &[WindowHandle]) {
        self.masters.restack(stacking);
        self.slaves.restack(stacking);
    }

    fn stacking_hint(&self) -> Vec<WindowHandle> {
        self.masters
            .stacked
            .iter()
            .chain(self.slaves.stacked.iter())
            .copied()
            .collect()
    }

    fn slot_mut(&mut self, (role, index): (Role, usize)) -> &mut WindowHandle {
        match role {
            Role::Master => &mut self.masters.clients[index],
            Role::Slave => &mut self.slaves.clients[index],
        }
    }

    fn refresh(&mut self) {
        let stacking = self.stacking_hint();
        self.restack(&stacking);
        self.update_proportions();
    }

    fn update_proportions(&mut self) {
        self.proportions
            .resize(Table::MasterMaster, self.masters.slot_count());
        self.proportions
            .resize(Table::SlaveSlave, self.slaves.slot_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::TestConfig;
    use crate::config::PoolLimits;

    const A: WindowHandle = WindowHandle(1);
    const B: WindowHandle = WindowHandle(2);
    const C: WindowHandle = WindowHandle(3);
    const D: WindowHandle = WindowHandle(4);

    fn manager() -> Manager {
        Manager::new(&TestConfig::default())
    }

    fn with_clients(handles: &[WindowHandle]) -> Manager {
        let mut manager = manager();
        for h in handles {
            manager.add(*h, handles);
        }
        manager
    }

    fn assert_disjoint(manager: &Manager) {
        for h in &manager.masters.clients {
            assert!(!manager.slaves.contains(*h), "{h} is in both pools");
        }
        assert!(manager.masters.len() <= manager.masters.capacity);
    }

    #[test]
    fn newest_clients_are_inserted_first() {
        let manager = with_clients(&[A, B, C]);
        assert_eq!(manager.masters.clients, vec![A]);
        assert_eq!(manager.slaves.clients, vec![C, B]);
        assert_disjoint(&manager);
    }

    #[test]
    fn removing_a_master_promotes_the_first_slave() {
        let mut manager = with_clients(&[A, B, C]);
        assert!(manager.remove(A));
        assert_eq!(manager.masters.clients, vec![C]);
        assert_eq!(manager.slaves.clients, vec![B]);
    }

    #[test]
    fn removing_the_last_master_empties_the_pool() {
        let mut manager = with_clients(&[A]);
        assert!(manager.remove(A));
        assert!(manager.is_empty());
        assert!(!manager.remove(A));
    }

    #[test]
    fn adds_and_removes_conserve_the_client_count() {
        let mut manager = manager();
        let handles: Vec<WindowHandle> = (1..=8).map(WindowHandle).collect();
        let mut expected = 0;
        for (i, h) in handles.iter().enumerate() {
            assert!(manager.add(*h, &handles));
            expected += 1;
            if i % 3 == 2 {
                let victim = manager.ordered()[0];
                let masters_before = manager.masters.len();
                let had_slaves = !manager.slaves.is_empty();
                assert!(manager.remove(victim));
                expected -= 1;
                if had_slaves {
                    assert!(manager.masters.len() >= masters_before);
                }
            }
            assert_eq!(manager.len(), expected);
            assert_disjoint(&manager);
        }
    }

    #[test]
    fn adding_twice_is_rejected() {
        let mut manager = with_clients(&[A]);
        assert!(!manager.add(A, &[A]));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn swap_works_across_pools() {
        let mut manager = with_clients(&[A, B, C]);
        assert!(manager.swap(A, B));
        assert_eq!(manager.masters.clients, vec![B]);
        assert_eq!(manager.slaves.clients, vec![C, A]);
        assert!(manager.swap(C, A));
        assert_eq!(manager.slaves.clients, vec![A, C]);
        assert!(!manager.swap(A, D));
        assert!(!manager.swap(A, A));
    }

    #[test]
    fn make_master_swaps_with_the_first_master() {
        let mut manager = with_clients(&[A, B, C]);
        assert!(manager.make_master(B));
        assert_eq!(manager.masters.clients, vec![B]);
        assert_eq!(manager.slaves.clients, vec![C, A]);
    }

    #[test]
    fn master_capacity_moves_one_client_across_the_boundary() {
        let mut manager = with_clients(&[A, B, C]);
        assert!(manager.increase_masters());
        assert_eq!(manager.masters.clients, vec![A, C]);
        assert_eq!(manager.slaves.clients, vec![B]);
        assert_eq!(manager.proportions.master_master.len(), 2);

        assert!(manager.decrease_masters());
        assert_eq!(manager.masters.clients, vec![A]);
        assert_eq!(manager.slaves.clients, vec![C, B]);

        assert!(manager.decrease_masters());
        assert!(manager.masters.is_empty());
        assert_eq!(manager.slaves.clients, vec![A, C, B]);
        assert!(!manager.decrease_masters());
    }

    #[test]
    fn master_capacity_is_clamped_to_the_maximum() {
        let config = TestConfig {
            masters: PoolLimits { min: 0, initial: 1, max: 2 },
            ..TestConfig::default()
        };
        let mut manager = Manager::new(&config);
        assert!(manager.increase_masters());
        assert!(!manager.increase_masters());
        assert_eq!(manager.masters.capacity, 2);
    }

    #[test]
    fn capacities_stop_at_the_configured_minimum() {
        let config = TestConfig {
            masters: PoolLimits { min: 1, initial: 2, max: 3 },
            slaves: PoolLimits { min: 2, initial: 3, max: 4 },
            ..TestConfig::default()
        };
        let mut manager = Manager::new(&config);
        assert!(manager.decrease_masters());
        assert!(!manager.decrease_masters());
        assert_eq!(manager.masters.capacity, 1);
        assert!(manager.decrease_slaves());
        assert!(!manager.decrease_slaves());
        assert_eq!(manager.slaves.capacity, 2);
    }

    #[test]
    fn initial_capacities_are_clamped_into_range() {
        let config = TestConfig {
            masters: PoolLimits { min: 2, initial: 0, max: 3 },
            slaves: PoolLimits { min: 0, initial: 0, max: 4 },
            ..TestConfig::default()
        };
        let manager = Manager::new(&config);
        assert_eq!(manager.masters.capacity, 2);
        assert_eq!(manager.slaves.capacity, 1);
    }

    #[test]
    fn slave_capacity_changes_slots_not_membership() {
        let mut manager = with_clients(&[A, B, C, D]);
        let slaves = manager.slaves.clients.clone();
        assert!(manager.decrease_slaves());
        assert!(manager.decrease_slaves());
        assert!(!manager.decrease_slaves());
        assert_eq!(manager.slaves.clients, slaves);
        assert_eq!(manager.slaves.capacity, 1);
        assert_eq!(manager.proportions.slave_slave.len(), 1);
        assert!(manager.increase_slaves());
        assert_eq!(manager.proportions.slave_slave.len(), 2);
    }

    #[test]
    fn visible_slots_alias_overflowing_clients() {
        let mut manager = manager();
        let handles: Vec<WindowHandle> = (1..=6).map(WindowHandle).collect();
        for size in 0..handles.len() {
            let expected = manager.slaves.len().min(manager.slaves.capacity);
            assert_eq!(manager.slaves.visible_slots().len(), expected);
            manager.add(handles[size], &handles);
        }
        // 1 master, 5 slaves over 3 slots.
        let slots = manager.slaves.visible_slots();
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0].len(), 2);
        assert_eq!(slots[1].len(), 2);
        assert_eq!(slots[2].len(), 1);
        assert_eq!(manager.slaves.slot_of(4), 1);
    }

    #[test]
    fn stacked_view_follows_the_window_system() {
        let mut manager = with_clients(&[A, B, C]);
        manager.restack(&[B, C, A]);
        assert_eq!(manager.slaves.stacked, vec![B, C]);
        assert_eq!(manager.slaves.clients, vec![C, B]);
        assert_eq!(manager.stacked(&[B, C, A]), vec![B, C, A]);
    }

    #[test]
    fn relative_wraps_around() {
        let manager = with_clients(&[A, B, C]);
        assert_eq!(manager.relative(A, 1), Some(C));
        assert_eq!(manager.relative(A, -1), Some(B));
        assert_eq!(manager.relative(D, 1), None);
    }

    #[test]
    fn proportion_steps_stop_at_the_minimum() {
        let mut manager = manager();
        let mut steps = 0;
        while manager.decrease_proportion() {
            steps += 1;
            assert!(steps < 100);
        }
        assert!(manager.proportions.master_slave[0] >= manager.proportions.min());
        assert!(manager.increase_proportion());
    }

    #[test]
    fn added_slave_role_is_kept() {
        let mut manager = manager();
        assert!(manager.add_as(A, Role::Slave, &[A]));
        assert!(manager.is_slave(A));
        assert!(manager.add_as(B, Role::Master, &[A, B]));
        assert!(manager.is_master(B));
    }
}
