//! Text rendering of the pet board and request log.

use std::fmt::Write;

use chrono::Local;
use colored::{ColoredString, Colorize};
use pet_core::{Animation, LogEntry, PetState, UiState, Verb};

fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn tint(text: &str, color: &str) -> ColoredString {
    match hex_rgb(color) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

fn track(name: &str, frames: &[f32]) -> Option<String> {
    if frames.is_empty() {
        return None;
    }
    let frames: Vec<String> = frames.iter().map(|f| f.to_string()).collect();
    Some(format!("{name} {}", frames.join("→")))
}

/// One-line summary of an animation's keyframes, e.g. `scale 1→1.2→1`.
pub fn keyframes(animation: &Animation) -> String {
    if animation.is_still() {
        return "still".to_string();
    }
    [
        track("scale", &animation.scale),
        track("rotate", &animation.rotate),
        track("y", &animation.y),
        track("opacity", &animation.opacity),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ")
}

pub fn pet_card(pet: &PetState) -> String {
    let profile = pet.method.profile();
    let name = format!("{:<7}", profile.name);
    let method = format!("{:<6}", pet.method.as_str());
    let header = format!("{} {} {}", profile.emoji, tint(&name, pet.color).bold(), method);
    if pet.visible {
        format!(
            "{header} mood: {:<12} {}",
            pet.mood.as_str(),
            keyframes(&pet.mood.animation()).dimmed()
        )
    } else {
        format!("{header} mood: {:<12} {}", pet.mood.as_str(), "(hidden)".dimmed())
    }
}

pub fn log_line(entry: &LogEntry) -> String {
    let method = format!("{:<6}", entry.method.as_str());
    format!(
        "{} {} {}",
        tint(&method, entry.method.profile().color).bold(),
        entry.url,
        entry.timestamp.with_timezone(&Local).format("%H:%M:%S").to_string().dimmed()
    )
}

/// Full screen: pets, then the log newest first.
pub fn screen(state: &UiState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "HTTP Pets".bold());
    for pet in state.pets.iter() {
        let _ = writeln!(out, "  {}", pet_card(pet));
    }
    let _ = writeln!(out, "{}", "Request Log".bold());
    if state.log.is_empty() {
        let _ = writeln!(
            out,
            "  {}",
            "No requests sent yet. Send some HTTP requests to see them appear here!".italic()
        );
    }
    for entry in state.log.newest_first() {
        let _ = writeln!(out, "  {}", log_line(entry));
    }
    out
}

pub fn help() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "About HTTP Methods".bold());
    for verb in Verb::ALL {
        let profile = verb.profile();
        let _ = writeln!(
            out,
            "  {} {} {}",
            profile.emoji,
            tint(&format!("{:<6}", verb.as_str()), profile.color).bold(),
            profile.description
        );
    }
    let _ = writeln!(out, "Type a verb (get, post, put, patch, delete), help, or quit.");
    out
}

#[cfg(test)]
mod tests {
    use pet_core::{Action, Mood};

    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(hex_rgb("#3b82f6"), Some((0x3b, 0x82, 0xf6)));
        assert_eq!(hex_rgb("3b82f6"), None);
        assert_eq!(hex_rgb("#zzzzzz"), None);
    }

    #[test]
    fn keyframes_summary() {
        assert_eq!(keyframes(&Mood::Changed.animation()), "scale 1→1.05→1");
        assert_eq!(
            keyframes(&Mood::Happy.animation()),
            "scale 1→1.2→1, rotate 0→5→-5→0"
        );
        assert_eq!(keyframes(&Mood::Neutral.animation()), "still");
    }

    #[test]
    fn hidden_pet_shows_marker() {
        plain();
        let mut state = UiState::new();
        state.reduce(Action::Request(Verb::Delete));
        let card = pet_card(state.pets.get(Verb::Delete));
        assert!(card.contains("Slothy"));
        assert!(card.contains("(hidden)"));
    }

    #[test]
    fn empty_log_placeholder() {
        plain();
        let out = screen(&UiState::new());
        assert!(out.contains("No requests sent yet"));
        assert_eq!(out.matches("mood: neutral").count(), 5);
    }

    #[test]
    fn log_is_drawn_newest_first() {
        plain();
        let mut state = UiState::new();
        state.reduce(Action::Request(Verb::Get));
        state.reduce(Action::Request(Verb::Patch));
        let out = screen(&state);
        let log = out.split("Request Log").nth(1).unwrap();
        let patch = log.find("PATCH").unwrap();
        let get = log.find("GET").unwrap();
        assert!(patch < get);
        assert!(!out.contains("No requests sent yet"));
    }

    #[test]
    fn help_lists_every_verb() {
        plain();
        let out = help();
        for verb in Verb::ALL {
            assert!(out.contains(verb.profile().description), "{verb}");
        }
    }
}
