use bevy_ecs::message::Message;

/// The game's sound-effect bank. Every effect is synthesized by the audio
/// thread at startup; triggering is fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sfx {
    Jump,
    Coin,
    Stomp,
    Victory,
    Damage,
    GameOver,
}

impl Sfx {
    /// Every effect, for building the bank at startup.
    pub const ALL: [Sfx; 6] = [
        Sfx::Jump,
        Sfx::Coin,
        Sfx::Stomp,
        Sfx::Victory,
        Sfx::Damage,
        Sfx::GameOver,
    ];
}

/// Commands sent *to* the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioCmd {
    PlayFx { id: Sfx },
    Shutdown,
}

/// Messages sent *back* from the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    /// The effect bank is synthesized and the device is live.
    Ready,
    /// A triggered effect ran to completion.
    FxFinished { id: Sfx },
}
