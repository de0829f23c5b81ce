//! Relabeling a shared transcript from one speaker's point of view

use crate::debate::message::{DebateMessage, Role};

/// Whose words a turn is, seen from the target speaker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    Own,
    Opponent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerspectiveTurn {
    pub perspective: Perspective,
    pub text: String,
}

/// Reinterpret `transcript` for `target`.
///
/// The briefing (`system`) is dropped; messages written by `target` become
/// [`Perspective::Own`] and everything else [`Perspective::Opponent`].
/// Order is preserved.
pub fn reinterpret(transcript: &[DebateMessage], target: Role) -> Vec<PerspectiveTurn> {
    transcript
        .iter()
        .filter_map(|message| {
            let perspective = match message.role {
                Role::System => return None,
                role if role == target => Perspective::Own,
                Role::Human | Role::Model | Role::Agent1 | Role::Agent2 | Role::Judge => {
                    Perspective::Opponent
                }
            };
            Some(PerspectiveTurn {
                perspective,
                text: message.content.clone(),
            })
        })
        .collect()
}
