//! Pointer interaction: grabbing, dragging and dropping objects

use glam::Vec2;

use super::collision::find_drop_target;
use super::receptacle::Receptacle;
use super::state::{DropOutcome, RoundState};

/// Grab the topmost object under the pointer. Returns the grabbed object's id.
///
/// Objects are searched newest first so overlapping objects yield the one drawn
/// on top. Nothing happens while another object is already held.
pub fn grab(round: &mut RoundState, pointer: Vec2) -> Option<u32> {
    if round.dragged_index().is_some() {
        return None;
    }
    let obj = round
        .objects
        .iter_mut()
        .rev()
        .find(|o| o.rect().contains_point(pointer))?;
    obj.grab(pointer);
    log::debug!("grabbed #{} {}", obj.id, obj.name);
    Some(obj.id)
}

/// Move the held object (if any) with the pointer
pub fn drag(round: &mut RoundState, pointer: Vec2) {
    if let Some(i) = round.dragged_index() {
        round.objects[i].drag_to(pointer);
    }
}

/// Drop the held object.
///
/// Over a receptacle the object is removed and scored; anywhere else it is
/// simply let go and keeps falling. Releasing with nothing held is a no-op.
pub fn release(round: &mut RoundState, receptacles: &[Receptacle]) -> Option<DropOutcome> {
    let i = round.dragged_index()?;
    round.objects[i].release();

    let target = find_drop_target(&round.objects[i].rect(), receptacles)?.label;
    let obj = round.objects.remove(i);
    let outcome = round.register_drop(&obj, target);
    log::debug!(
        "dropped {} into {} ({})",
        obj.name,
        target,
        if outcome.correct { "correct" } else { "wrong" }
    );
    Some(outcome)
}
