//! Telling the time in words.

use std::sync::Arc;

use chrono::Timelike;

use super::{Action, ActionError};
use crate::responder::Responder;
use crate::system::Clock;

const HOURS: [&str; 13] = [
    "midnight", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve",
];

const MINUTES: [&str; 6] = ["five", "ten", "quarter", "twenty", "twenty-five", "half"];

/// Describe a wall-clock time the way people say it.
///
/// Minutes round to the nearest five (0-2 past a mark round down, 3-4 round
/// up). Past the half hour the time is told as "X to" the next hour.
///
/// ```
/// use voxact::action::time_to_words;
///
/// assert_eq!(time_to_words(4, 20), "It is twenty past four.");
/// assert_eq!(time_to_words(0, 0), "It is midnight.");
/// ```
pub fn time_to_words(hour: u32, minute: u32) -> String {
    let mut hour = hour % 24;
    // units of five minutes, 0..=12
    let mut rounded = ((minute % 60) + 2) / 5;

    let inverted = rounded > 6;
    if inverted {
        rounded = 12 - rounded;
        hour = (hour + 1) % 24;
    }

    if hour > 12 {
        hour -= 12;
    }
    let hour_text = HOURS[hour as usize];

    if rounded == 0 {
        if hour == 0 {
            return "It is midnight.".to_string();
        }
        return format!("It is {} o'clock.", hour_text);
    }

    let minute_text = MINUTES[rounded as usize - 1];
    if inverted {
        format!("It is {} to {}.", minute_text, hour_text)
    } else {
        format!("It is {} past {}.", minute_text, hour_text)
    }
}

/// Says the current local time
pub struct SpeakCurrentTime {
    responder: Arc<dyn Responder>,
    clock: Arc<dyn Clock>,
}

impl SpeakCurrentTime {
    pub fn new(responder: Arc<dyn Responder>, clock: Arc<dyn Clock>) -> Self {
        Self { responder, clock }
    }
}

impl Action for SpeakCurrentTime {
    fn name(&self) -> &'static str {
        "SpeakCurrentTime"
    }

    fn run(&self, _transcript: &str) -> Result<(), ActionError> {
        let now = self.clock.now();
        self.responder.say(&time_to_words(now.hour(), now.minute()));
        Ok(())
    }
}
