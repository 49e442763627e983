//! Playback state machine checks

use std::time::Duration;

use dirsprite::prelude::*;

const MS: Duration = Duration::from_millis(1);

fn started(counts: Vec<usize>, repeat: bool, mode: PlayMode) -> Player {
	let mut player = Player::new(
		counts,
		&PlayerOptions {
			repeat,
			play_mode: mode,
			tick_ms: 100,
			..PlayerOptions::default()
		},
	);
	player.play();
	player
}

fn run(player: &mut Player, ticks: usize) -> Vec<usize> {
	(0..ticks)
		.map(|_| {
			player.update(Duration::from_millis(u64::from(player.state().tick_interval_ms())));
			player.state().frame()
		})
		.collect()
}

#[test_log::test]
fn test_forward_repeat_cycles() {
	let mut player = started(vec![4], true, PlayMode::Forward);
	assert_eq!(run(&mut player, 9), vec![1, 2, 3, 0, 1, 2, 3, 0, 1]);
	assert!(player.state().is_playing());
}

#[test_log::test]
fn test_ping_pong_never_repeats_endpoints() {
	let mut player = started(vec![4], true, PlayMode::PingPong);
	let mut seen = vec![player.state().frame()];
	seen.extend(run(&mut player, 12));
	assert_eq!(seen, vec![0, 1, 2, 3, 2, 1, 0, 1, 2, 3, 2, 1, 0]);
	for pair in seen.windows(2) {
		assert_ne!(pair[0], pair[1]);
	}
}

#[test_log::test]
fn test_forward_once_stops_on_last_frame() {
	let mut player = started(vec![3], false, PlayMode::Forward);
	assert_eq!(run(&mut player, 5), vec![1, 2, 2, 2, 2]);
	assert!(!player.state().is_playing());
	assert_eq!(player.state().status(), Status::Stopped);

	player.play();
	assert_eq!(player.state().frame(), 0);
}

#[test_log::test]
fn test_interval_change_while_playing() {
	let mut player = started(vec![8], true, PlayMode::Forward);

	// 90 ms into a 100 ms interval, switch to 300 ms.
	assert!(!player.update(90 * MS));
	player.set_tick_interval(300);

	assert!(!player.update(200 * MS));
	assert!(!player.update(99 * MS));
	assert!(player.update(MS));
	assert_eq!(player.state().frame(), 1);

	// Large frame drops still produce a single tick.
	assert!(player.update(5000 * MS));
	assert_eq!(player.state().frame(), 2);
	assert!(!player.update(299 * MS));
}

#[test_log::test]
fn test_direction_clamped_to_last() {
	let mut player = started(vec![2, 6, 3], true, PlayMode::Forward);
	player.set_direction(42);
	assert_eq!(player.state().direction(), 2);
	assert!(player.state().is_playing());

	run(&mut player, 2);
	assert!(player.state().frame() < 3);
}

#[test_log::test]
fn test_direction_change_resets_missing_frame() {
	let mut player = started(vec![6, 2], true, PlayMode::Forward);
	player.set_frame(4);

	player.set_direction(1);
	assert_eq!(player.state().frame(), 0);

	player.set_frame(1);
	player.set_direction(0);
	assert_eq!(player.state().frame(), 1);
}

#[test_log::test]
fn test_stopped_player_ignores_time() {
	let mut player = Player::new(vec![5], &PlayerOptions::default());
	assert!(!player.update(Duration::from_secs(10)));
	assert!(!player.tick());
	assert_eq!(player.state().frame(), 0);
}
