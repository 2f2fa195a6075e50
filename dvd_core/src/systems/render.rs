use crate::{Body, Label, Surface, Tint, Viewport};
use hecs::World;

/// Draw every text at its current position and color
pub fn draw_texts<S: Surface>(world: &World, surface: &mut S) {
    for (_entity, (body, label, tint)) in world.query::<(&Body, &Label, &Tint)>().iter() {
        surface.draw_text(label, body.pos, tint.0);
    }
}

/// Re-derive each text's size from the surface and pull it back inside
/// the viewport. Needed after the text or font changes.
pub fn remeasure_texts<S: Surface>(world: &mut World, viewport: Viewport, surface: &S) {
    for (_entity, (body, label)) in world.query_mut::<(&mut Body, &Label)>() {
        body.size = surface.measure_text(label);
        body.pos = viewport.clamp(body.pos, body.size);
    }
}
