//! Application state shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use thiserror::Error;
use tracing::info;

use outpost_core::commands::PlayerCommand;
use outpost_core::state::GameStateSnapshot;
use outpost_sim::SimConfig;

use crate::game_loop;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("game loop has stopped")]
    LoopStopped,
    #[error("shared state lock poisoned")]
    LockPoisoned,
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` so the state is `Sync`
/// - `Mutex<Option<...>>` holds things that do not exist before `start`
/// - `Arc<Mutex<...>>` holds the latest snapshot (shared with the game loop thread)
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before `start` is called.
    command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop thread after each tick.
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Handle of the running game loop thread.
    loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the simulation on its own thread.
    pub fn start(&self, config: SimConfig) -> Result<(), AppError> {
        let mut tx_lock = self.command_tx.lock().map_err(|_| AppError::LockPoisoned)?;
        if tx_lock.is_some() {
            return Err(AppError::AlreadyRunning);
        }

        let (cmd_tx, handle) = game_loop::spawn_game_loop(config, self.latest_snapshot.clone())?;
        *tx_lock = Some(cmd_tx);
        *self.loop_handle.lock().map_err(|_| AppError::LockPoisoned)? = Some(handle);
        Ok(())
    }

    /// Forward a player command to the simulation. It applies at the next tick.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), AppError> {
        let tx_lock = self.command_tx.lock().map_err(|_| AppError::LockPoisoned)?;
        let tx = tx_lock.as_ref().ok_or(AppError::NotStarted)?;
        tx.send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| AppError::LoopStopped)
    }

    /// The most recent snapshot, or `None` before the first tick.
    pub fn snapshot(&self) -> Result<Option<GameStateSnapshot>, AppError> {
        let lock = self.latest_snapshot.lock().map_err(|_| AppError::LockPoisoned)?;
        Ok(lock.clone())
    }

    pub fn is_running(&self) -> bool {
        self.command_tx
            .lock()
            .map(|tx| tx.is_some())
            .unwrap_or(false)
    }

    /// Stop the game loop and wait for its thread to exit.
    pub fn shutdown(&self) -> Result<(), AppError> {
        let tx = self
            .command_tx
            .lock()
            .map_err(|_| AppError::LockPoisoned)?
            .take()
            .ok_or(AppError::NotStarted)?;
        // The loop may already be gone; dropping the sender stops it either way.
        let _ = tx.send(GameLoopCommand::Shutdown);
        drop(tx);

        let handle = self
            .loop_handle
            .lock()
            .map_err(|_| AppError::LockPoisoned)?
            .take();
        if let Some(handle) = handle {
            handle.join().map_err(|_| AppError::LoopStopped)?;
        }
        info!("simulation stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait_for_snapshot(state: &AppState) -> GameStateSnapshot {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(snapshot) = state.snapshot().unwrap() {
                return snapshot;
            }
            assert!(Instant::now() < deadline, "game loop produced no snapshot");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(!state.is_running());
        assert!(state.snapshot().unwrap().is_none());
    }

    #[test]
    fn test_commands_before_start_are_rejected() {
        let state = AppState::new();
        let err = state.send_command(PlayerCommand::Pause).unwrap_err();
        assert!(matches!(err, AppError::NotStarted));
        assert!(matches!(state.shutdown(), Err(AppError::NotStarted)));
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let state = AppState::new();
        state.start(SimConfig::default()).unwrap();
        assert!(matches!(
            state.start(SimConfig::default()),
            Err(AppError::AlreadyRunning)
        ));
        state.shutdown().unwrap();
        assert!(!state.is_running());
    }

    #[test]
    fn test_placed_tower_shows_up_in_snapshot() {
        let state = AppState::new();
        state.start(SimConfig::default()).unwrap();
        state
            .send_command(PlayerCommand::PlaceTower { x: 400.0, y: 300.0 })
            .unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let snapshot = loop {
            let snapshot = wait_for_snapshot(&state);
            if !snapshot.towers.is_empty() || Instant::now() >= deadline {
                break snapshot;
            }
            std::thread::sleep(Duration::from_millis(5));
        };
        state.shutdown().unwrap();

        assert_eq!(snapshot.towers.len(), 1);
        assert_eq!(snapshot.experience, 80 + snapshot.score.experience_earned);
    }
}
