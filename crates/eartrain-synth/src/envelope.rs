//! ADSR gain envelopes as scheduled automation.
//!
//! An envelope is not computed sample by sample from a state machine; it is a
//! [`GainTimeline`] of timed events (hold a value, or ramp linearly to a
//! value) laid out once when a tone is scheduled. Rendering then asks the
//! timeline for the gain at any absolute time.

/// ADSR envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrParams {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level as a fraction of the peak (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
    /// Peak gain reached at the end of the attack.
    pub peak: f64,
}

impl Default for AdsrParams {
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.1,
            sustain: 0.5,
            release: 0.3,
            peak: 0.4,
        }
    }
}

impl AdsrParams {
    /// Creates new ADSR parameters with the default peak.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
            ..Self::default()
        }
    }

    /// Absolute sustain gain (`peak * sustain`).
    pub fn sustain_level(&self) -> f64 {
        self.peak * self.sustain
    }

    /// Time held at the sustain level for a tone of `duration` seconds.
    pub fn sustain_duration(&self, duration: f64) -> f64 {
        (duration - self.attack - self.decay - self.release).max(0.0)
    }

    /// Lays out the envelope of a tone starting at `start` and lasting `duration`.
    ///
    /// The release ramp always ends at exactly `start + duration`.
    pub fn timeline(&self, start: f64, duration: f64) -> GainTimeline {
        let sustain_level = self.sustain_level();
        let decay_end = start + self.attack + self.decay;

        let mut timeline = GainTimeline::new();
        timeline.set_value_at(0.0, start);
        timeline.linear_ramp_to(self.peak, start + self.attack);
        timeline.linear_ramp_to(sustain_level, decay_end);
        timeline.set_value_at(sustain_level, decay_end + self.sustain_duration(duration));
        timeline.linear_ramp_to(0.0, start + duration);
        timeline
    }
}

/// How the gain reaches an event's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Automation {
    /// Jump to the value at the event time and hold it.
    SetValue,
    /// Ramp linearly from the previous event to the value at the event time.
    LinearRamp,
}

/// One scheduled gain change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainEvent {
    /// Absolute time in seconds.
    pub time: f64,
    /// Target gain.
    pub value: f64,
    /// How the target is reached.
    pub kind: Automation,
}

/// Time-ordered gain automation for one voice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GainTimeline {
    events: Vec<GainEvent>,
}

impl GainTimeline {
    /// Gain before the first event.
    pub const INITIAL_VALUE: f64 = 1.0;

    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Holds `value` from `time` onwards.
    pub fn set_value_at(&mut self, value: f64, time: f64) {
        self.insert(GainEvent {
            time,
            value,
            kind: Automation::SetValue,
        });
    }

    /// Ramps linearly from the preceding event so the gain is `value` at `time`.
    pub fn linear_ramp_to(&mut self, value: f64, time: f64) {
        self.insert(GainEvent {
            time,
            value,
            kind: Automation::LinearRamp,
        });
    }

    // Events stay sorted by time; equal times keep insertion order.
    fn insert(&mut self, event: GainEvent) {
        let index = self.events.partition_point(|e| e.time <= event.time);
        self.events.insert(index, event);
    }

    /// The scheduled events in time order.
    pub fn events(&self) -> &[GainEvent] {
        &self.events
    }

    /// Time of the last event, if any.
    pub fn end_time(&self) -> Option<f64> {
        self.events.last().map(|e| e.time)
    }

    /// Gain at absolute time `t`.
    pub fn value_at(&self, t: f64) -> f64 {
        let next = self.events.partition_point(|e| e.time <= t);

        let Some(prev) = next.checked_sub(1).map(|i| self.events[i]) else {
            return match self.events.first() {
                Some(first) if first.kind == Automation::LinearRamp => first.value,
                _ => Self::INITIAL_VALUE,
            };
        };

        match self.events.get(next) {
            Some(upcoming) if upcoming.kind == Automation::LinearRamp => {
                let span = upcoming.time - prev.time;
                if span <= 0.0 {
                    return upcoming.value;
                }
                let progress = (t - prev.time) / span;
                prev.value + (upcoming.value - prev.value) * progress
            }
            _ => prev.value,
        }
    }
}
