//! Audio system backed by a dedicated thread and Raylib.
//!
//! The background thread owns the Raylib audio device and the sound bank,
//! keeping all audio API calls on a single thread; the main thread
//! communicates over lock-free channels:
//! - [`audio_thread`] synthesizes the effect bank at startup and processes
//!   [`AudioCmd`](crate::events::audio::AudioCmd) messages, emitting
//!   [`AudioMessage`](crate::events::audio::AudioMessage) responses.
//! - [`forward_audio_cmds`] / [`poll_audio_messages`] bridge the ECS message
//!   queues with the channels each frame.
//!
//! All six effects are square waves in the classic hand-held timbre, built
//! from short frequency sweeps and handed to raylib as in-memory WAV clips;
//! there are no audio asset files.
//!
//! The thread is created once via
//! [`crate::resources::audio::setup_audio`] and joined via
//! [`crate::resources::audio::shutdown_audio`].

use crate::events::audio::{AudioCmd, AudioMessage, Sfx};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use raylib::core::audio::{RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

/// Sample rate of the synthesized effects.
pub const SAMPLE_RATE: u32 = 22050;
/// Amplitude of the square waves, well below clipping.
const VOLUME: f32 = 0.3;
/// Fade-out applied to the tail of every clip so it does not end on a pop.
const FADE_SECONDS: f32 = 0.005;

/// Drain any pending messages from the audio thread into the ECS
/// [`Messages<AudioMessage>`] mailbox. Non-blocking, runs each frame.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`]. Run after
/// [`poll_audio_messages`] in the schedule.
pub fn update_bevy_audio_messages(mut messages: ResMut<Messages<AudioMessage>>) {
    messages.update();
}

/// Forward ECS [`AudioCmd`] messages to the audio thread.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // ignore send errors during shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for [`AudioCmd`].
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// A square wave at `freq` Hz for `duration` seconds.
pub fn square_wave(freq: f32, duration: f32) -> Vec<f32> {
    let frames = (duration * SAMPLE_RATE as f32) as usize;
    let samples_per_cycle = SAMPLE_RATE as f32 / freq;
    (0..frames)
        .map(|i| {
            if (i as f32) % samples_per_cycle < samples_per_cycle / 2.0 {
                VOLUME
            } else {
                -VOLUME
            }
        })
        .collect()
}

/// Concatenate wave segments and render them to 16-bit samples with the
/// fade-out tail applied.
pub fn render_clip(segments: &[Vec<f32>]) -> Vec<i16> {
    let mut samples: Vec<f32> = segments.iter().flatten().copied().collect();
    let frames = samples.len();
    let fade = ((FADE_SECONDS * SAMPLE_RATE as f32) as usize).min(frames);
    for i in 0..fade {
        samples[frames - 1 - i] *= i as f32 / fade as f32;
    }
    samples
        .into_iter()
        .map(|s| (s * i16::MAX as f32) as i16)
        .collect()
}

/// The effect bank: every effect is a short sequence of square-wave sweeps.
fn sfx_samples(id: Sfx) -> Vec<i16> {
    match id {
        Sfx::Jump => render_clip(&[square_wave(200.0, 0.05), square_wave(300.0, 0.05)]),
        Sfx::Coin => render_clip(&[square_wave(600.0, 0.08), square_wave(800.0, 0.08)]),
        Sfx::Stomp => render_clip(&[square_wave(100.0, 0.1)]),
        Sfx::Victory => render_clip(&[
            square_wave(523.0, 0.15),
            square_wave(659.0, 0.15),
            square_wave(784.0, 0.15),
        ]),
        Sfx::Damage => render_clip(&[
            square_wave(400.0, 0.1),
            square_wave(300.0, 0.1),
            square_wave(200.0, 0.1),
        ]),
        Sfx::GameOver => render_clip(&[
            square_wave(300.0, 0.2),
            square_wave(200.0, 0.2),
            square_wave(150.0, 0.4),
        ]),
    }
}

/// Wrap mono 16-bit samples in a minimal PCM WAV container, so the clip can
/// be handed to raylib's in-memory wave loader.
pub fn encode_wav(samples: &[i16]) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk size
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes()); // byte rate
    bytes.extend_from_slice(&2u16.to_le_bytes()); // block align
    bytes.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    bytes
}

/// Entry point of the dedicated audio thread.
///
/// Initializes the audio device, synthesizes the effect bank, then loops:
/// drain commands, trigger effects, report finished playback. Blocks until
/// [`AudioCmd::Shutdown`] arrives, then unloads everything and exits.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            panic!("Failed to initialize audio device: {}", e);
        }
    };

    log::info!(
        "audio thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut sounds: FxHashMap<Sfx, Sound> = FxHashMap::default();
    for id in Sfx::ALL {
        let bytes = encode_wav(&sfx_samples(id));
        let wave = match audio.new_wave_from_memory(".wav", &bytes) {
            Ok(wave) => wave,
            Err(e) => {
                log::warn!("failed to decode clip {:?}: {}", id, e);
                continue;
            }
        };
        match audio.new_sound_from_wave(&wave) {
            Ok(sound) => {
                sounds.insert(id, sound);
            }
            Err(e) => log::warn!("failed to build sound {:?}: {}", id, e),
        }
    }
    let _ = tx_msg.send(AudioMessage::Ready);

    let mut playing: FxHashSet<Sfx> = FxHashSet::default();

    'run: loop {
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::PlayFx { id } => {
                    if let Some(sound) = sounds.get(&id) {
                        log::debug!("fx play {:?}", id);
                        sound.play();
                        playing.insert(id);
                    }
                }
                AudioCmd::Shutdown => {
                    log::info!("audio shutdown requested");
                    break 'run;
                }
            }
        }

        // Report effects that ran to completion, exactly once each.
        let mut ended: Vec<Sfx> = Vec::new();
        for id in playing.iter() {
            let still_playing = sounds.get(id).map(|s| s.is_playing()).unwrap_or(false);
            if !still_playing {
                ended.push(*id);
            }
        }
        for id in ended {
            playing.remove(&id);
            let _ = tx_msg.send(AudioMessage::FxFinished { id });
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    log::info!(
        "audio thread exiting (id={:?})",
        std::thread::current().id()
    );

    // sounds drop before `audio`, satisfying lifetimes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_wave_length_and_shape() {
        let wave = square_wave(100.0, 0.1);
        assert_eq!(wave.len(), (0.1 * SAMPLE_RATE as f32) as usize);
        // 100 Hz at 22050 Hz: first half-cycle is positive
        assert!(wave[0] > 0.0);
        assert!(wave[150] < 0.0);
    }

    #[test]
    fn test_render_clip_concatenates_and_fades() {
        let clip = render_clip(&[square_wave(200.0, 0.05), square_wave(300.0, 0.05)]);
        assert_eq!(clip.len(), 2 * (0.05 * SAMPLE_RATE as f32) as usize);
        // the very last sample is fully faded
        assert_eq!(*clip.last().unwrap(), 0);
        // the body is not
        assert!(clip[clip.len() / 2].unsigned_abs() > 1000);
    }

    #[test]
    fn test_every_effect_renders_nonempty() {
        for id in Sfx::ALL {
            assert!(!sfx_samples(id).is_empty(), "empty clip for {id:?}");
        }
    }

    #[test]
    fn test_wav_container_layout() {
        let clip = vec![0i16, 1000, -1000, 0];
        let bytes = encode_wav(&clip);
        assert_eq!(bytes.len(), 44 + clip.len() * 2);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[36..40], b"data");
        let data_len = u32::from_le_bytes(bytes[40..44].try_into().unwrap());
        assert_eq!(data_len as usize, clip.len() * 2);
    }
}
