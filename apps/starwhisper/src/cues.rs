//! Fire-and-forget interface sounds.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Click,
    Hover,
    Shuffle,
    Draw,
    Flip,
    Magic,
    Success,
    Message,
    BreathIn,
}

impl Cue {
    pub fn volume(&self) -> f32 {
        match self {
            Cue::Shuffle => 0.5,
            Cue::Magic => 0.4,
            _ => 0.3,
        }
    }
}

/// Something that can actually make the sound.
pub trait CuePlayer: Send {
    fn play(&mut self, cue: Cue, volume: f32) -> anyhow::Result<()>;
}

/// Player for terminals: records the cue in the log.
pub struct LogCuePlayer;

impl CuePlayer for LogCuePlayer {
    fn play(&mut self, cue: Cue, volume: f32) -> anyhow::Result<()> {
        log::trace!("cue {:?} at volume {:.1}", cue, volume);
        Ok(())
    }
}

pub struct CueBoard {
    player: Box<dyn CuePlayer>,
    muted: bool,
}

impl CueBoard {
    pub fn new(player: Box<dyn CuePlayer>, muted: bool) -> Self {
        Self { player, muted }
    }

    /// Never fails; player errors are logged and dropped.
    pub fn play(&mut self, cue: Cue) {
        if self.muted {
            return;
        }
        if let Err(e) = self.player.play(cue, cue.volume()) {
            log::debug!("cue {:?} failed: {}", cue, e);
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Recorder(Arc<Mutex<Vec<(Cue, f32)>>>);

    impl CuePlayer for Recorder {
        fn play(&mut self, cue: Cue, volume: f32) -> anyhow::Result<()> {
            self.0.lock().unwrap().push((cue, volume));
            Ok(())
        }
    }

    struct Broken;

    impl CuePlayer for Broken {
        fn play(&mut self, _cue: Cue, _volume: f32) -> anyhow::Result<()> {
            anyhow::bail!("no audio device")
        }
    }

    #[test]
    fn volumes_per_cue() {
        assert_eq!(Cue::Click.volume(), 0.3);
        assert_eq!(Cue::Shuffle.volume(), 0.5);
        assert_eq!(Cue::Magic.volume(), 0.4);
        assert_eq!(Cue::BreathIn.volume(), 0.3);
    }

    #[test]
    fn mute_silences_player() {
        let played = Arc::new(Mutex::new(Vec::new()));
        let mut board = CueBoard::new(Box::new(Recorder(played.clone())), false);

        board.play(Cue::Shuffle);
        board.set_muted(true);
        board.play(Cue::Magic);
        board.set_muted(false);
        board.play(Cue::Message);

        let played = played.lock().unwrap();
        assert_eq!(*played, vec![(Cue::Shuffle, 0.5), (Cue::Message, 0.3)]);
    }

    #[test]
    fn player_errors_are_swallowed() {
        let mut board = CueBoard::new(Box::new(Broken), false);
        board.play(Cue::Click);
        assert!(!board.is_muted());
    }
}
