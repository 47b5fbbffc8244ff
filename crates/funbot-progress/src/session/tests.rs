use super::*;
use crate::catalog::PLACEHOLDER_URL;
use crate::profile::HISTORY_CAPACITY;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;
use std::thread;
use std::time::Duration as StdDuration;

/// Clock that advances one minute per reading.
struct StepClock {
    next: Mutex<DateTime<Utc>>,
}

impl StepClock {
    fn new() -> Self {
        Self {
            next: Mutex::new(Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap()),
        }
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().unwrap();
        let now = *next;
        *next = now + Duration::minutes(1);
        now
    }
}

/// Clock whose first reading stalls before returning, so a second caller
/// can overtake it if the reading happens outside the user's lock.
struct StallingClock {
    readings: AtomicI64,
}

impl Clock for StallingClock {
    fn now(&self) -> DateTime<Utc> {
        let n = self.readings.fetch_add(1, Ordering::SeqCst);
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 9, 1, 0).unwrap() + Duration::minutes(n);
        if n == 0 {
            thread::sleep(StdDuration::from_millis(200));
        }
        at
    }
}

fn assert_chronological(o: &Orchestrator, user: &str) {
    let times: Vec<_> = o
        .store()
        .get_or_create(user)
        .history
        .iter()
        .map(|e| e.played_at)
        .collect();
    assert!(
        times.windows(2).all(|w| w[0] <= w[1]),
        "history out of order: {times:?}"
    );
}

fn orchestrator() -> Orchestrator {
    Orchestrator::new(ProfileStore::new(), Arc::new(StepClock::new()))
}

fn launch_all(o: &Orchestrator, user: &str, games: &[&str]) -> Vec<LaunchOutcome> {
    games.iter().map(|g| o.handle_launch(user, g)).collect()
}

#[test]
fn test_launch_returns_catalog_url() {
    let o = orchestrator();
    let out = o.handle_launch("u", "Snake");
    assert_eq!(out.game_name, "Snake");
    assert_eq!(out.url, "https://telegram-snake.vercel.app/");
    assert_eq!(out.games_played, 1);
    assert!(out.newly_unlocked.is_empty());
}

#[test]
fn test_unknown_game_still_tracked() {
    let o = orchestrator();
    let out = o.handle_launch("u", "Pong");
    assert_eq!(out.url, PLACEHOLDER_URL);
    let p = o.store().get_or_create("u");
    assert_eq!(p.games_played, 1);
    assert_eq!(p.history.len(), 1);
    assert!(p.history.contains_game("Pong"));
}

#[test]
fn test_history_length_tracks_min_of_launches_and_capacity() {
    let o = orchestrator();
    for n in 1..=25u64 {
        o.handle_launch("u", "Tetris");
        let p = o.store().get_or_create("u");
        assert_eq!(p.games_played, n);
        assert_eq!(p.history.len(), (n as usize).min(HISTORY_CAPACITY));
    }
}

#[test]
fn test_history_is_chronological() {
    let o = orchestrator();
    for _ in 0..13 {
        o.handle_launch("u", "Saper");
    }
    let p = o.store().get_or_create("u");
    let times: Vec<_> = p.history.iter().map(|e| e.played_at).collect();
    assert!(times.windows(2).all(|w| w[0] < w[1]));
    // The first three launches (minutes 0..3) were evicted.
    assert_eq!(
        times[0],
        Utc.with_ymd_and_hms(2025, 1, 1, 9, 3, 0).unwrap()
    );
}

#[test]
fn test_variety_player_after_three_distinct() {
    let o = orchestrator();
    let outs = launch_all(&o, "u", &["Snake", "Saper", "Tetris"]);
    assert_eq!(outs[2].newly_unlocked, vec![Achievement::VarietyPlayer]);
    let view = o.profile_view("u");
    assert_eq!(view.achievements, vec![Achievement::VarietyPlayer]);
}

#[test]
fn test_eight_snakes_then_saper_tetris_unlocks_both() {
    let o = orchestrator();
    let mut games = vec!["Snake"; 8];
    games.extend(["Saper", "Tetris"]);
    let outs = launch_all(&o, "u", &games);
    let last = outs.last().unwrap();
    assert_eq!(last.games_played, 10);
    assert_eq!(
        last.newly_unlocked,
        vec![Achievement::GameExplorer, Achievement::VarietyPlayer]
    );
}

#[test]
fn test_eleven_snakes_only_explorer() {
    let o = orchestrator();
    launch_all(&o, "u", &["Snake"; 11]);
    let view = o.profile_view("u");
    assert_eq!(view.games_played, 11);
    assert_eq!(view.achievements, vec![Achievement::GameExplorer]);
}

#[test]
fn test_explorer_unlocks_once_and_stays() {
    let o = orchestrator();
    let outs = launch_all(&o, "u", &["Snake"; 14]);
    let unlocks: usize = outs.iter().map(|o| o.newly_unlocked.len()).sum();
    assert_eq!(unlocks, 1);
    assert_eq!(outs[9].newly_unlocked, vec![Achievement::GameExplorer]);
    for n in 15..20 {
        o.handle_launch("u", "Saper");
        let view = o.profile_view("u");
        assert_eq!(view.games_played, n);
        assert!(view.achievements.contains(&Achievement::GameExplorer));
    }
}

#[test]
fn test_variety_not_revoked_when_window_moves_on() {
    let o = orchestrator();
    launch_all(&o, "u", &["Snake", "Saper", "Tetris"]);
    launch_all(&o, "u", &["Snake"; 12]);
    let p = o.store().get_or_create("u");
    assert!(!p.history.contains_game("Saper"));
    assert!(p.has_achievement(Achievement::VarietyPlayer));
    assert!(p.has_achievement(Achievement::GameExplorer));
}

#[test]
fn test_set_favorite_and_language() {
    let o = orchestrator();
    assert_eq!(o.handle_set_favorite("u", "Snake").unwrap(), Game::Snake);
    assert_eq!(o.handle_set_language("u", "ua").unwrap(), Language::Ua);
    assert_eq!(o.language_of("u"), Language::Ua);
    let view = o.profile_view("u");
    assert_eq!(view.favorite_game, Some(Game::Snake));
}

#[test]
fn test_invalid_favorite_surfaces_error_and_keeps_state() {
    let o = orchestrator();
    o.handle_set_favorite("u", "Tetris").unwrap();
    assert!(matches!(
        o.handle_set_favorite("u", "fav_Tetris"),
        Err(FunbotError::InvalidSelection(_))
    ));
    assert_eq!(o.profile_view("u").favorite_game, Some(Game::Tetris));
}

#[test]
fn test_favorite_independent_of_history() {
    let o = orchestrator();
    o.handle_set_favorite("u", "Saper").unwrap();
    let view = o.profile_view("u");
    assert_eq!(view.games_played, 0);
    assert!(view.recent_history.is_empty());
}

#[test]
fn test_profile_view_recent_history() {
    let o = orchestrator();
    launch_all(&o, "u", &["Snake", "Saper", "Tetris", "Snake", "Saper"]);
    let view = o.profile_view("u");
    let names: Vec<_> = view.recent_history.iter().map(|e| e.game.as_str()).collect();
    assert_eq!(names, vec!["Tetris", "Snake", "Saper"]);
}

#[test]
fn test_default_view_for_new_user() {
    let o = orchestrator();
    let view = o.profile_view("new");
    assert_eq!(view.language, Language::En);
    assert_eq!(view.games_played, 0);
    assert!(view.favorite_game.is_none());
    assert!(view.achievements.is_empty());
    assert!(view.recent_history.is_empty());
}

#[tokio::test]
async fn test_parallel_launches_same_user() {
    let o = orchestrator();
    let mut handles = Vec::new();
    for i in 0..30 {
        let o = o.clone();
        let game = ["Snake", "Saper", "Tetris"][i % 3];
        handles.push(tokio::spawn(async move {
            o.handle_launch("u", game);
        }));
    }
    for h in handles {
        h.await.unwrap();
    }
    let view = o.profile_view("u");
    assert_eq!(view.games_played, 30);
    assert!(view.achievements.contains(&Achievement::GameExplorer));
    assert_chronological(&o, "u");
}

#[test]
fn test_slow_clock_reading_keeps_history_chronological() {
    let o = Orchestrator::new(
        ProfileStore::new(),
        Arc::new(StallingClock {
            readings: AtomicI64::new(0),
        }),
    );

    let first = {
        let o = o.clone();
        thread::spawn(move || o.handle_launch("u", "Snake"))
    };
    thread::sleep(StdDuration::from_millis(50));
    let second = {
        let o = o.clone();
        thread::spawn(move || o.handle_launch("u", "Saper"))
    };
    first.join().unwrap();
    second.join().unwrap();

    let history: Vec<_> = o
        .store()
        .get_or_create("u")
        .history
        .iter()
        .map(|e| (e.game.clone(), e.played_at))
        .collect();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].0, "Snake");
    assert!(history[0].1 < history[1].1, "history out of order: {history:?}");
}
