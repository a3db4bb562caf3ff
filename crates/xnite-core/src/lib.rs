pub mod audio;
pub mod game_trait;
pub mod geometry;
pub mod input;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::audio::{AudioEvent, AudioEventQueue};
    use crate::game_trait::XniteGame;
    use crate::input::GameKey;

    /// Frame duration for a 60 fps run.
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Run `frames` update calls at `dt` seconds each, returning every audio
    /// event the game queued along the way.
    pub fn run_frames(game: &mut dyn XniteGame, frames: usize, dt: f32) -> Vec<AudioEvent> {
        let mut audio = AudioEventQueue::default();
        let mut events = Vec::new();
        for _ in 0..frames {
            game.update(dt, &mut audio);
            events.extend(audio.drain());
        }
        events
    }

    /// Press and immediately release a key.
    pub fn tap(game: &mut dyn XniteGame, key: GameKey) {
        game.key_down(key);
        game.key_up(key);
    }

    /// Count occurrences of one sound in a recorded event list.
    pub fn count_sound(events: &[AudioEvent], kind: AudioEvent) -> usize {
        events.iter().filter(|&&e| e == kind).count()
    }

    /// Setup must be callable repeatedly without panicking or accumulating
    /// anything; follow with one frame to make sure the world still runs.
    pub fn contract_setup_is_repeatable(game: &mut dyn XniteGame) {
        game.setup();
        game.setup();
        let events = run_frames(game, 1, FRAME_DT);
        assert!(
            events.is_empty(),
            "A freshly built world must not emit sounds on its first frame"
        );
    }
}
