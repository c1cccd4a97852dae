//! # Background evolution
//!
//! [`spawn`] moves an engine onto its own thread. Every generation's record is published
//! through an `mpsc` channel, so a front end can step through them at its own pace while
//! the optimizer keeps running.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::debug;

use super::{
    challenge::Challenge,
    engine::{EvolutionResult, PopulationEngine},
    sink::{GenerationRecord, GenerationSink},
};
use crate::{
    board::Board,
    error::{KnightError, Result},
    report::player::GenerationPlayer,
    rng::RandomNumberGenerator,
    strategy::BreedStrategy,
};

/// Handle to an engine running on a background thread.
#[derive(Debug)]
pub struct EvolutionHandle {
    records: Option<Receiver<GenerationRecord>>,
    total: usize,
    cancel: Arc<AtomicBool>,
    thread: JoinHandle<Result<EvolutionResult>>,
}

impl EvolutionHandle {
    /// Takes the stream of records as a player. Only the first call returns `Some`.
    ///
    /// Dropping the player mid-run stops publishing; the engine keeps evolving and its
    /// result is still available from [`join`](Self::join).
    pub fn player(&mut self) -> Option<GenerationPlayer<mpsc::IntoIter<GenerationRecord>>> {
        self.records
            .take()
            .map(|rx| GenerationPlayer::new(rx.into_iter(), self.total))
    }

    /// Asks the engine to stop before its next generation.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Waits for the engine and returns its result.
    ///
    /// # Errors
    ///
    /// Returns the engine's own error, or [`KnightError::Worker`] if the thread panicked.
    pub fn join(self) -> Result<EvolutionResult> {
        // An untaken receiver stays open until the thread ends so the engine never
        // sees a closed channel.
        let _records = self.records;
        self.thread
            .join()
            .map_err(|_| KnightError::Worker("evolution thread panicked".to_string()))?
    }
}

/// Publishes records until the receiving side goes away, then drops them silently.
#[derive(Debug)]
struct ChannelSink {
    tx: Option<Sender<GenerationRecord>>,
}

impl GenerationSink for ChannelSink {
    fn on_generation(&mut self, record: &GenerationRecord) -> Result<()> {
        if let Some(tx) = &self.tx {
            if tx.send(record.clone()).is_err() {
                debug!(
                    "record receiver dropped at generation {}, no longer publishing",
                    record.generation
                );
                self.tx = None;
            }
        }
        Ok(())
    }
}

/// Runs `engine` to completion on a new thread.
///
/// # Errors
///
/// Returns [`KnightError::Io`] if the thread cannot be spawned.
pub fn spawn<Strategy, Chall>(
    mut engine: PopulationEngine<Strategy, Chall>,
    mut rng: RandomNumberGenerator,
) -> Result<EvolutionHandle>
where
    Strategy: BreedStrategy<Board> + 'static,
    Chall: Challenge<Board> + Send + Sync + 'static,
{
    let (tx, rx) = mpsc::channel();
    let cancel = Arc::new(AtomicBool::new(false));
    let total = engine.options().get_num_generations();

    let flag = Arc::clone(&cancel);
    let thread = thread::Builder::new()
        .name("knightga-evolution".to_string())
        .spawn(move || {
            debug!("evolution thread started");
            let mut sink = ChannelSink { tx: Some(tx) };
            engine.run_with_cancel(&mut rng, &mut sink, Some(&*flag))
        })?;

    Ok(EvolutionHandle {
        records: Some(rx),
        total,
        cancel,
        thread,
    })
}
