//! Completion requests built from a session and its transcript

use super::perspective::{Perspective, reinterpret};
use super::template::DebatePromptTemplate;
use crate::completion::ChatMessage;
use crate::debate::entities::{DebateSession, Seat};
use crate::debate::message::DebateMessage;

/// Messages for the debater sitting in `seat`: one system instruction,
/// then the transcript as that debater sees it.
pub fn assemble_debater_prompt(
    session: &DebateSession,
    transcript: &[DebateMessage],
    seat: &Seat,
) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::system(DebatePromptTemplate::debater_system(
        session.topic(),
        seat.position,
    ))];

    messages.extend(
        reinterpret(transcript, seat.role)
            .into_iter()
            .map(|turn| match turn.perspective {
                Perspective::Own => ChatMessage::assistant(turn.text),
                Perspective::Opponent => ChatMessage::user(turn.text),
            }),
    );

    messages
}

pub fn assemble_judge_prompt(
    session: &DebateSession,
    transcript: &[DebateMessage],
) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(DebatePromptTemplate::judge_system(session.topic())),
        ChatMessage::user(DebatePromptTemplate::judge_transcript(
            session.seating(),
            transcript,
        )),
    ]
}

pub fn assemble_topic_prompt() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(DebatePromptTemplate::topic_system()),
        ChatMessage::user(DebatePromptTemplate::topic_request()),
    ]
}
