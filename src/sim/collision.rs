//! Circle-circle contact detection and impulse response
//!
//! Entities are treated as circles of half their sprite size. The impulse is
//! the momentum-conserving 1-D elastic formula projected onto the contact
//! normal; positional overlap is resolved by symmetric separation.

use glam::Vec2;

use super::state::Entity;

/// An overlapping pair's contact
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Unit normal pointing from the first circle toward the second
    pub normal: Vec2,
    /// Overlap depth along the normal
    pub penetration: f32,
}

/// Contact between two circles, if they overlap
pub fn circle_contact(a_pos: Vec2, a_half: f32, b_pos: Vec2, b_half: f32) -> Option<Contact> {
    let offset = b_pos - a_pos;
    let dist = offset.length();
    let reach = a_half + b_half;
    if dist >= reach {
        return None;
    }
    // Coincident centers: pick a fixed axis so separation stays deterministic
    let normal = if dist < 1e-6 { Vec2::X } else { offset / dist };
    Some(Contact {
        normal,
        penetration: reach - dist,
    })
}

/// Resolve one overlapping pair: separate positions, then exchange momentum
///
/// Separation is symmetric (half the penetration each). The impulse is only
/// applied when the pair is approaching; separating pairs are left unchanged
/// so the solver never injects energy. Returns true if the pair was in
/// contact.
pub fn resolve_pair(a: &mut Entity, b: &mut Entity, restitution: f32) -> bool {
    let Some(contact) = circle_contact(a.pos, a.half(), b.pos, b.half()) else {
        return false;
    };
    let n = contact.normal;

    let push = n * (contact.penetration / 2.0);
    a.pos -= push;
    b.pos += push;

    let closing = (b.vel - a.vel).dot(n);
    if closing >= 0.0 {
        return true;
    }

    let (ma, mb) = (a.mass(), b.mass());
    let j = -(1.0 + restitution) * closing / (1.0 / ma + 1.0 / mb);
    a.vel -= n * (j / ma);
    b.vel += n * (j / mb);
    true
}
