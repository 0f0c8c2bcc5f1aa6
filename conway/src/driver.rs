// driver.rs - Tick loop running as a tokio task, publishing frames to renderers

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{info, warn};

use crate::config::Config;
use crate::sim::{Frame, Simulation};

/// Requests a front end can make of a running driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Discard the current board and start over at the new size.
    Resize { width: usize, height: usize },
    Stop,
}

/// Front end's side of a running driver task.
///
/// The task is the only writer of the current generation. Every new grid is
/// built completely inside the task before it is published on the watch
/// channel, so readers never observe a partially computed board. Dropping
/// the handle stops the task and its interval.
pub struct DriverHandle {
    frames: watch::Receiver<Frame>,
    commands: mpsc::UnboundedSender<Command>,
    task: Option<JoinHandle<()>>,
}

/// Start the tick loop on `runtime`.
///
/// `on_frame` runs after every published frame except the initial one,
/// which is available immediately through [`DriverHandle::frame`].
pub fn spawn<F>(runtime: &Handle, config: Config, on_frame: F) -> DriverHandle
where
    F: Fn() + Send + 'static,
{
    let sim = Simulation::from_config(&config);
    let (frames_tx, frames_rx) = watch::channel(sim.frame());
    let (commands_tx, commands_rx) = mpsc::unbounded_channel();

    info!(
        width = config.width,
        height = config.height,
        tick_ms = config.tick.as_millis() as u64,
        "starting driver"
    );
    let task = runtime.spawn(run(sim, config.tick, frames_tx, commands_rx, on_frame));

    DriverHandle {
        frames: frames_rx,
        commands: commands_tx,
        task: Some(task),
    }
}

async fn run<F>(
    mut sim: Simulation,
    tick: Duration,
    frames: watch::Sender<Frame>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    on_frame: F,
) where
    F: Fn(),
{
    let mut ticker = time::interval_at(Instant::now() + tick, tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => sim.step(),
            command = commands.recv() => match command {
                Some(Command::Resize { width, height }) => {
                    sim.reset(width, height);
                    ticker.reset();
                }
                Some(Command::Stop) | None => break,
            },
        }
        frames.send_replace(sim.frame());
        on_frame();
    }

    info!(generation = sim.generation(), "driver stopped");
}

impl DriverHandle {
    /// Latest published frame.
    pub fn frame(&self) -> Frame {
        self.frames.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Frame> {
        self.frames.clone()
    }

    /// Ask for a fresh board of the given size. Zero dimensions are raised
    /// to 1.
    pub fn resize(&self, width: usize, height: usize) {
        self.send(Command::Resize {
            width: width.max(1),
            height: height.max(1),
        });
    }

    pub fn stop(&self) {
        self.send(Command::Stop);
    }

    /// Wait for the task to finish. Call [`stop`](Self::stop) first.
    pub async fn join(mut self) {
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                warn!(%err, "driver task failed");
            }
        }
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            warn!(?command, "driver already stopped, command dropped");
        }
    }
}

impl Drop for DriverHandle {
    fn drop(&mut self) {
        // Ignore the error: the task may already be gone.
        let _ = self.commands.send(Command::Stop);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Seeding;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const TICK: Duration = Duration::from_millis(100);

    fn blinker_config() -> Config {
        Config {
            width: 7,
            height: 7,
            tick: TICK,
            seeding: Seeding::from_options(0.0, None, Some("blinker")).unwrap(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn publishes_one_generation_per_tick() {
        let handle = spawn(&Handle::current(), blinker_config(), || {});
        let mut frames = handle.subscribe();
        assert_eq!(frames.borrow_and_update().generation, 0);

        let start = Instant::now();
        frames.changed().await.unwrap();
        let first = frames.borrow_and_update().clone();
        assert_eq!(first.generation, 1);
        assert!(start.elapsed() >= TICK);

        frames.changed().await.unwrap();
        let second = frames.borrow_and_update().clone();
        assert_eq!(second.generation, 2);
        assert_eq!(second.grid, handle.frame().grid);
        assert_eq!(*second.grid, first.grid.next_generation());
    }

    #[tokio::test(start_paused = true)]
    async fn notifies_after_each_frame() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let handle = spawn(&Handle::current(), blinker_config(), move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        let mut frames = handle.subscribe();
        for _ in 0..3 {
            frames.changed().await.unwrap();
        }
        assert!(count.load(Ordering::SeqCst) >= 3);
    }

    #[tokio::test(start_paused = true)]
    async fn resize_publishes_a_fresh_board() {
        let handle = spawn(&Handle::current(), blinker_config(), || {});
        let mut frames = handle.subscribe();
        frames.changed().await.unwrap();

        handle.resize(20, 0);
        let frame = loop {
            frames.changed().await.unwrap();
            let frame = frames.borrow_and_update().clone();
            if frame.grid.width() == 20 {
                break frame;
            }
        };
        assert_eq!(frame.grid.height(), 1);
        assert_eq!(frame.generation, 0);
        assert!(!frame.settled);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_ends_the_task() {
        let handle = spawn(&Handle::current(), blinker_config(), || {});
        let mut frames = handle.subscribe();
        handle.stop();
        handle.join().await;
        // Sender is gone once the task returns.
        assert!(frames.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_task() {
        let handle = spawn(&Handle::current(), blinker_config(), || {});
        let mut frames = handle.subscribe();
        drop(handle);
        assert!(frames.changed().await.is_err());
    }
}
