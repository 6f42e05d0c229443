use std::time::Duration;

use crate::format::{grouped_fixed2, locale_number};

const COUNTER_FRAMES: f64 = 100.0;
const INTRO_VISIBLE: Duration = Duration::from_millis(9_000);
const INTRO_FADE: Duration = Duration::from_millis(800);

/// The five summary cards. Identity decides the unit decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    TotalTrips,
    AvgFare,
    AvgDistance,
    AvgSpeed,
    TotalRevenue,
}

impl CardKind {
    pub const ALL: [Self; 5] = [
        Self::TotalTrips,
        Self::AvgFare,
        Self::AvgDistance,
        Self::AvgSpeed,
        Self::TotalRevenue,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::TotalTrips => "Total Trips",
            Self::AvgFare => "Average Fare",
            Self::AvgDistance => "Average Distance",
            Self::AvgSpeed => "Average Speed",
            Self::TotalRevenue => "Average Total Amount",
        }
    }

    /// Final card text once the counter has landed. Trips stay whole, every
    /// other card shows two decimals.
    pub fn decorate(self, value: f64) -> String {
        match self {
            Self::TotalTrips => locale_number(value),
            Self::AvgFare | Self::TotalRevenue => format!("${}", grouped_fixed2(value)),
            Self::AvgDistance => format!("{} miles", grouped_fixed2(value)),
            Self::AvgSpeed => format!("{} mph", grouped_fixed2(value)),
        }
    }
}

/// Counts a card up from zero to its target, one step per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTween {
    card: CardKind,
    target: f64,
    count: f64,
    increment: f64,
    finished: bool,
}

impl CounterTween {
    /// Reaches the target in a hundred frames.
    pub fn new(card: CardKind, target: f64) -> Self {
        Self::with_increment(card, target, target / COUNTER_FRAMES)
    }

    /// Reaches the target in `duration`, advancing once every `frame`.
    pub fn timed(card: CardKind, target: f64, duration: Duration, frame: Duration) -> Self {
        let frames = (duration.as_secs_f64() / frame.as_secs_f64().max(f64::EPSILON))
            .round()
            .max(1.0);
        Self::with_increment(card, target, target / frames)
    }

    const fn with_increment(card: CardKind, target: f64, increment: f64) -> Self {
        Self {
            card,
            target,
            count: 0.0,
            increment,
            finished: false,
        }
    }

    pub const fn card(&self) -> CardKind {
        self.card
    }

    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Text shown before the first frame.
    pub const fn initial_text() -> &'static str {
        "0"
    }

    /// Advances one frame and returns the text to display.
    pub fn advance(&mut self) -> String {
        if self.finished {
            return self.card.decorate(self.target);
        }

        self.count += self.increment;
        if self.count < self.target {
            format!("{}", self.count.floor())
        } else {
            self.finished = true;
            self.card.decorate(self.target)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Visible,
    Fading,
    Hidden,
}

/// Splash shown on first load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntroOverlay {
    dismissed: bool,
}

impl IntroOverlay {
    pub fn phase(self, since_start: Duration) -> OverlayPhase {
        if self.dismissed || since_start >= INTRO_VISIBLE + INTRO_FADE {
            OverlayPhase::Hidden
        } else if since_start >= INTRO_VISIBLE {
            OverlayPhase::Fading
        } else {
            OverlayPhase::Visible
        }
    }

    /// Opacity in `[0, 1]`.
    pub fn opacity(self, since_start: Duration) -> f64 {
        match self.phase(since_start) {
            OverlayPhase::Visible => 1.0,
            OverlayPhase::Hidden => 0.0,
            OverlayPhase::Fading => {
                let faded = since_start.saturating_sub(INTRO_VISIBLE).as_secs_f64();
                (1.0 - faded / INTRO_FADE.as_secs_f64()).clamp(0.0, 1.0)
            }
        }
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }
}
