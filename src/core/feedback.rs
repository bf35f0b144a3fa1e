use crate::core::gesture::SwipeDecision;

/// Cue played when a decision lands. Best-effort: the session never waits on
/// or reacts to playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Liked,
    Disliked,
}

impl SoundCue {
    pub fn for_decision(decision: SwipeDecision) -> Self {
        match decision {
            SwipeDecision::Accept => SoundCue::Liked,
            SwipeDecision::Reject => SoundCue::Disliked,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SoundCue::Liked => "liked",
            SoundCue::Disliked => "disliked",
        }
    }
}

/// Seam for decision feedback. Implementations must swallow their own
/// failures; the caller discards the call entirely.
pub trait FeedbackSink {
    fn play(&self, cue: SoundCue);
}

/// Default sink: logs the cue. Stands in until a platform audio backend is
/// plugged in behind the trait.
pub struct ConsoleFeedback;

impl FeedbackSink for ConsoleFeedback {
    fn play(&self, cue: SoundCue) {
        println!("[Feedback] {}", cue.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cues_map_to_decisions() {
        assert_eq!(SoundCue::for_decision(SwipeDecision::Accept), SoundCue::Liked);
        assert_eq!(SoundCue::for_decision(SwipeDecision::Reject), SoundCue::Disliked);
        assert_eq!(SoundCue::Liked.name(), "liked");
    }
}
