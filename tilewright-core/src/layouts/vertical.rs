use super::split::{available, split};
use crate::models::{Directions, Manager, Pool, Role, Table, WindowHandle, Xyhw};

/// Master band and slave band. A band is missing when its pool is empty and
/// the other band takes the whole area.
fn bands(manager: &Manager, area: &Xyhw, gap: i32) -> (Option<Xyhw>, Option<Xyhw>) {
    match (manager.masters.is_empty(), manager.slaves.is_empty()) {
        (true, true) => (None, None),
        (false, true) => (Some(*area), None),
        (true, false) => (None, Some(*area)),
        (false, false) => {
            let spans = split(area.x(), area.w(), gap, 2, &manager.proportions.master_slave);
            let band = |(x, w): (i32, i32)| Xyhw::new(x, area.y(), w, area.h());
            (Some(band(spans[0])), Some(band(spans[1])))
        }
    }
}

fn place(
    pool: &Pool,
    slots: &[Xyhw],
    placements: &mut Vec<(WindowHandle, Xyhw)>,
) {
    for (index, handle) in pool.clients.iter().enumerate() {
        if let Some(slot) = slots.get(pool.slot_of(index)) {
            placements.push((*handle, *slot));
        }
    }
}

/// Masters as columns of the master band, slaves as rows of the slave band.
pub fn arrange(
    manager: &Manager,
    workarea: &Xyhw,
    gap: i32,
    mirrored: bool,
) -> Vec<(WindowHandle, Xyhw)> {
    let area = workarea.shrink(gap);
    let (master_band, slave_band) = bands(manager, &area, gap);
    let mut placements = Vec::with_capacity(manager.len());

    if let Some(band) = master_band {
        let columns: Vec<Xyhw> = split(
            band.x(),
            band.w(),
            gap,
            manager.masters.slot_count(),
            &manager.proportions.master_master,
        )
        .into_iter()
        .map(|(x, w)| Xyhw::new(x, band.y(), w, band.h()))
        .collect();
        place(&manager.masters, &columns, &mut placements);
    }
    if let Some(band) = slave_band {
        let rows: Vec<Xyhw> = split(
            band.y(),
            band.h(),
            gap,
            manager.slaves.slot_count(),
            &manager.proportions.slave_slave,
        )
        .into_iter()
        .map(|(y, h)| Xyhw::new(band.x(), y, band.w(), h))
        .collect();
        place(&manager.slaves, &rows, &mut placements);
    }

    if mirrored {
        for (_, xyhw) in &mut placements {
            *xyhw = xyhw.mirrored_in(workarea);
        }
    }
    placements
}

pub fn update_proportions(
    manager: &mut Manager,
    workarea: &Xyhw,
    gap: i32,
    handle: WindowHandle,
    geometry: &Xyhw,
    directions: Directions,
    mirrored: bool,
) -> bool {
    let (geometry, directions) = if mirrored {
        (geometry.mirrored_in(workarea), directions.mirrored())
    } else {
        (*geometry, directions)
    };
    let Some((role, index)) = manager.position(handle) else {
        return false;
    };
    let area = workarea.shrink(gap);
    let (master_band, slave_band) = bands(manager, &area, gap);
    let split_bands = master_band.is_some() && slave_band.is_some();
    // Share of the master band, measured from the left of the area.
    let band_share = |width: i32| f64::from(width) / available(area.w(), gap, 2);
    let mut changed = false;

    match role {
        Role::Master => {
            let Some(band) = master_band else {
                return false;
            };
            let slot = manager.masters.slot_of(index);
            let count = manager.masters.slot_count();
            let share = f64::from(geometry.w()) / available(band.w(), gap, count);
            if directions.right {
                if slot + 1 < count {
                    changed |= manager.set_proportions(Table::MasterMaster, share, slot, slot + 1);
                } else if split_bands {
                    let value = band_share(geometry.right() - area.x());
                    changed |= manager.set_proportions(Table::MasterSlave, value, 0, 1);
                }
            }
            if directions.left && slot > 0 {
                changed |= manager.set_proportions(Table::MasterMaster, share, slot, slot - 1);
            }
        }
        Role::Slave => {
            let Some(band) = slave_band else {
                return false;
            };
            if directions.left && split_bands {
                let value = band_share(geometry.x() - gap - area.x());
                changed |= manager.set_proportions(Table::MasterSlave, value, 0, 1);
            }
            let slot = manager.slaves.slot_of(index);
            let count = manager.slaves.slot_count();
            let share = f64::from(geometry.h()) / available(band.h(), gap, count);
            if directions.top && slot > 0 {
                changed |= manager.set_proportions(Table::SlaveSlave, share, slot, slot - 1);
            }
            if directions.bottom && slot + 1 < count {
                changed |= manager.set_proportions(Table::SlaveSlave, share, slot, slot + 1);
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::TestConfig;
    use crate::config::PoolLimits;

    const EPSILON: f64 = 1e-9;
    const A: WindowHandle = WindowHandle(1);
    const B: WindowHandle = WindowHandle(2);
    const C: WindowHandle = WindowHandle(3);

    fn workarea() -> Xyhw {
        Xyhw::new(0, 0, 1000, 800)
    }

    fn placement(placements: &[(WindowHandle, Xyhw)], handle: WindowHandle) -> Option<Xyhw> {
        placements.iter().find(|(h, _)| *h == handle).map(|(_, x)| *x)
    }

    #[test]
    fn master_and_slave_split_by_the_master_share() {
        let config = TestConfig {
            proportion: 0.6,
            ..TestConfig::default()
        };
        let mut manager = Manager::new(&config);
        manager.add(A, &[A, B]);
        manager.add(B, &[A, B]);
        let placements = arrange(&manager, &workarea(), 0, false);
        assert_eq!(placement(&placements, A), Some(Xyhw::new(0, 0, 600, 800)));
        assert_eq!(placement(&placements, B), Some(Xyhw::new(600, 0, 400, 800)));
    }

    #[test]
    fn mirrored_layout_puts_masters_on_the_right() {
        let config = TestConfig {
            proportion: 0.6,
            ..TestConfig::default()
        };
        let mut manager = Manager::new(&config);
        manager.add(A, &[A, B]);
        manager.add(B, &[A, B]);
        let placements = arrange(&manager, &workarea(), 0, true);
        assert_eq!(placement(&placements, A), Some(Xyhw::new(400, 0, 600, 800)));
        assert_eq!(placement(&placements, B), Some(Xyhw::new(0, 0, 400, 800)));
    }

    #[test]
    fn gaps_surround_every_window() {
        let mut manager = Manager::new(&TestConfig::default());
        for h in [A, B, C] {
            manager.add(h, &[A, B, C]);
        }
        let placements = arrange(&manager, &workarea(), 10, false);
        // area 980 wide, 970 left once the gap between bands is removed
        assert_eq!(placement(&placements, A), Some(Xyhw::new(10, 10, 485, 780)));
        assert_eq!(placement(&placements, C), Some(Xyhw::new(505, 10, 485, 385)));
        assert_eq!(placement(&placements, B), Some(Xyhw::new(505, 405, 485, 385)));
    }

    #[test]
    fn a_lone_pool_takes_the_whole_area() {
        let mut manager = Manager::new(&TestConfig::default());
        manager.add(A, &[A]);
        let placements = arrange(&manager, &workarea(), 0, false);
        assert_eq!(placements, vec![(A, workarea())]);
    }

    #[test]
    fn overflowing_slaves_share_slots() {
        let config = TestConfig {
            slaves: PoolLimits { min: 0, initial: 1, max: 2 },
            ..TestConfig::default()
        };
        let mut manager = Manager::new(&config);
        for h in [A, B, C] {
            manager.add(h, &[A, B, C]);
        }
        let placements = arrange(&manager, &workarea(), 0, false);
        assert_eq!(placements.len(), 3);
        assert_eq!(placement(&placements, B), placement(&placements, C));
    }

    #[test]
    fn dragging_a_master_column_updates_the_master_pair() {
        let config = TestConfig {
            masters: PoolLimits { min: 0, initial: 2, max: 3 },
            ..TestConfig::default()
        };
        let mut manager = Manager::new(&config);
        manager.add(A, &[A, B]);
        manager.add(B, &[A, B]);
        assert!(manager.set_proportions(Table::MasterMaster, 0.6, 0, 1));
        let first = manager.masters.clients[0];
        let before = placement(&arrange(&manager, &workarea(), 0, false), first);
        assert_eq!(before, Some(Xyhw::new(0, 0, 600, 800)));

        let dragged = Xyhw::new(0, 0, 700, 800);
        let directions = dragged.directions_from(&Xyhw::new(0, 0, 600, 800));
        assert!(update_proportions(
            &mut manager, &workarea(), 0, first, &dragged, directions, false
        ));
        let table = &manager.proportions.master_master;
        assert!((table[0] - 0.7).abs() < EPSILON);
        assert!((table[0] + table[1] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn dragging_the_last_master_edge_moves_the_band_boundary() {
        let mut manager = Manager::new(&TestConfig::default());
        manager.add(A, &[A, B]);
        manager.add(B, &[A, B]);
        let dragged = Xyhw::new(0, 0, 650, 800);
        let directions = dragged.directions_from(&Xyhw::new(0, 0, 500, 800));
        assert!(update_proportions(
            &mut manager, &workarea(), 0, A, &dragged, directions, false
        ));
        assert!((manager.proportions.master_slave[0] - 0.65).abs() < EPSILON);
    }

    #[test]
    fn dragging_a_slave_left_edge_in_a_mirrored_layout() {
        let mut manager = Manager::new(&TestConfig::default());
        manager.add(A, &[A, B]);
        manager.add(B, &[A, B]);
        // Slave sits on the left at (0,0,500,800); its right edge faces the masters.
        let dragged = Xyhw::new(0, 0, 600, 800);
        let directions = dragged.directions_from(&Xyhw::new(0, 0, 500, 800));
        assert!(update_proportions(
            &mut manager, &workarea(), 0, B, &dragged, directions, true
        ));
        assert!((manager.proportions.master_slave[0] - 0.4).abs() < EPSILON);
    }

    #[test]
    fn dragging_past_the_minimum_is_rejected() {
        let mut manager = Manager::new(&TestConfig::default());
        manager.add(A, &[A, B]);
        manager.add(B, &[A, B]);
        let before = manager.proportions.clone();
        let dragged = Xyhw::new(0, 0, 980, 800);
        let directions = dragged.directions_from(&Xyhw::new(0, 0, 500, 800));
        assert!(!update_proportions(
            &mut manager, &workarea(), 0, A, &dragged, directions, false
        ));
        assert_eq!(manager.proportions, before);
    }

    #[test]
    fn dragging_a_slave_bottom_edge_updates_the_slave_pair() {
        let mut manager = Manager::new(&TestConfig::default());
        for h in [A, B, C] {
            manager.add(h, &[A, B, C]);
        }
        // slaves = [C, B], C on top
        let dragged = Xyhw::new(500, 0, 500, 480);
        let directions = dragged.directions_from(&Xyhw::new(500, 0, 500, 400));
        assert!(update_proportions(
            &mut manager, &workarea(), 0, C, &dragged, directions, false
        ));
        let table = &manager.proportions.slave_slave;
        assert!((table[0] - 0.6).abs() < EPSILON);
        assert!((table[1] - 0.4).abs() < EPSILON);
    }
}
