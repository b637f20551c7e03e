//! The shared audio output bus.
//!
//! [`AudioOutput`] owns the bus clock and the set of scheduled voices. One
//! process-wide instance is created lazily by [`AudioOutput::shared`]; tests
//! and offline renders construct their own handles and inject them into a
//! [`ToneSynth`](crate::ToneSynth).

use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::voice::Voice;

/// Sample rate of the shared output.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

static SHARED: OnceLock<Arc<AudioOutput>> = OnceLock::new();

/// Playback state of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputState {
    /// Created but not yet resumed; renders silence and the clock is frozen.
    Suspended,
    /// Rendering scheduled voices.
    Running,
}

#[derive(Debug)]
struct Bus {
    state: OutputState,
    clock: u64,
    voices: Vec<Voice>,
}

/// Audio output bus that scheduled voices are mixed into.
#[derive(Debug)]
pub struct AudioOutput {
    sample_rate: u32,
    bus: Mutex<Bus>,
}

impl AudioOutput {
    /// Creates a suspended output.
    pub fn new(sample_rate: u32) -> Self {
        Self::with_state(sample_rate, OutputState::Suspended)
    }

    /// Creates an output that is already running, for offline rendering.
    pub fn running(sample_rate: u32) -> Self {
        Self::with_state(sample_rate, OutputState::Running)
    }

    fn with_state(sample_rate: u32, state: OutputState) -> Self {
        Self {
            sample_rate: sample_rate.max(1),
            bus: Mutex::new(Bus {
                state,
                clock: 0,
                voices: Vec::new(),
            }),
        }
    }

    /// The process-wide output, created suspended on first use.
    pub fn shared() -> Arc<AudioOutput> {
        SHARED
            .get_or_init(|| {
                log::info!(
                    "creating shared audio output at {} Hz",
                    DEFAULT_SAMPLE_RATE
                );
                Arc::new(AudioOutput::new(DEFAULT_SAMPLE_RATE))
            })
            .clone()
    }

    /// Resumes a suspended output. Completes immediately if already running.
    pub async fn resume(&self) {
        let mut bus = self.bus.lock();
        if bus.state == OutputState::Suspended {
            bus.state = OutputState::Running;
            log::info!("audio output resumed");
        }
    }

    /// Current playback state.
    pub fn state(&self) -> OutputState {
        self.bus.lock().state
    }

    /// Returns true once the output has been resumed.
    pub fn is_running(&self) -> bool {
        self.state() == OutputState::Running
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bus clock in seconds.
    pub fn current_time(&self) -> f64 {
        self.bus.lock().clock as f64 / self.sample_rate as f64
    }

    /// Adds a voice to the bus.
    pub fn schedule(&self, voice: Voice) {
        log::debug!(
            "scheduling {:.2} Hz at {:.3}s for {:.3}s",
            voice.frequency(),
            voice.start(),
            voice.duration()
        );
        self.bus.lock().voices.push(voice);
    }

    /// Number of voices that have not yet stopped.
    pub fn active_voices(&self) -> usize {
        self.bus.lock().voices.len()
    }

    /// Snapshot of the scheduled voices.
    pub fn voices(&self) -> Vec<Voice> {
        self.bus.lock().voices.clone()
    }

    /// Latest stop time among scheduled voices, if any.
    pub fn last_stop_time(&self) -> Option<f64> {
        self.bus
            .lock()
            .voices
            .iter()
            .map(Voice::stop)
            .reduce(f64::max)
    }

    /// Renders `seconds` of mono audio and advances the clock.
    ///
    /// While suspended the returned block is silent and the clock does not
    /// move. Voices whose stop time has passed are released.
    pub fn render(&self, seconds: f64) -> Vec<f64> {
        let num_samples = (seconds.max(0.0) * self.sample_rate as f64).round() as usize;
        let mut output = vec![0.0; num_samples];

        let mut bus = self.bus.lock();
        if bus.state == OutputState::Suspended {
            log::debug!("render of {} samples while suspended", num_samples);
            return output;
        }

        let rate = self.sample_rate as f64;
        let first = bus.clock;
        for voice in &bus.voices {
            for (i, sample) in output.iter_mut().enumerate() {
                let t = (first + i as u64) as f64 / rate;
                *sample += voice.sample_at(t);
            }
        }

        bus.clock += num_samples as u64;
        let now = bus.clock as f64 / rate;
        let before = bus.voices.len();
        bus.voices.retain(|v| v.stop() > now);
        if bus.voices.len() != before {
            log::debug!("released {} voice(s) at {:.3}s", before - bus.voices.len(), now);
        }

        output
    }
}
