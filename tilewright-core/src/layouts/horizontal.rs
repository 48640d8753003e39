//! Horizontal layouts are vertical layouts with the axes swapped.
use super::vertical;
use crate::models::{Directions, Manager, WindowHandle, Xyhw};

pub fn arrange(
    manager: &Manager,
    workarea: &Xyhw,
    gap: i32,
    mirrored: bool,
) -> Vec<(WindowHandle, Xyhw)> {
    vertical::arrange(manager, &workarea.transposed(), gap, mirrored)
        .into_iter()
        .map(|(handle, xyhw)| (handle, xyhw.transposed()))
        .collect()
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
    vertical::update_proportions(
        manager,
        &workarea.transposed(),
        gap,
        handle,
        &geometry.transposed(),
        directions.transposed(),
        mirrored,
    )
}
